// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::reqwest_engine::ReqwestEngine;
use crate::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use crate::presentation::handlers::website_handler;
use axum::{
    routing::{get, patch, MethodRouter},
    Json, Router,
};
use serde_json::{json, Value};

type Repo = WebsiteRepositoryImpl;
type Engine = ReqwestEngine;

/// 创建应用路由
///
/// 处理器依赖通过 `Extension` 注入：`Arc<WebsiteRepositoryImpl>` 与 `Arc<ReqwestEngine>`
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new().route("/health", get(health_check));

    let website_routes = Router::new()
        .route("/websites", collection_routes())
        .route("/websites/", collection_routes())
        .route(
            "/websites/check-status",
            get(website_handler::check_status_by_url::<Repo, Engine>),
        )
        .route(
            "/websites/{id}/check-status",
            get(website_handler::check_status_by_id::<Repo, Engine>),
        )
        .route(
            "/websites/{id}",
            patch(website_handler::update_website::<Repo, Engine>)
                .delete(website_handler::delete_website::<Repo, Engine>),
        );

    Router::new().merge(public_routes).merge(website_routes)
}

fn collection_routes() -> MethodRouter {
    get(website_handler::list_websites::<Repo, Engine>)
        .post(website_handler::create_website::<Repo, Engine>)
}

/// 健康检查端点
///
/// # 返回值
///
/// 始终返回 `{"status": "ok"}`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
