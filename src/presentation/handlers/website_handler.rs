// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::website_request::{CheckStatusQuery, CreateWebsiteDto, UpdateWebsiteDto},
        use_cases::website_use_case::WebsiteUseCase,
    },
    domain::repositories::website_repository::WebsiteRepository,
    engines::traits::ProbeEngine,
    presentation::errors::AppError,
};

/// 按URL探测网站状态
///
/// 传输失败同样返回 200，结果中 `status` 为 `offline`
pub async fn check_status_by_url<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
    Query(query): Query<CheckStatusQuery>,
) -> impl IntoResponse
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    Json(use_case.check_status_by_url(&query.url).await)
}

/// 按ID探测已存储网站的状态
pub async fn check_status_by_id<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
    Path(website_id): Path<i32>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    let result = use_case.check_status_by_id(website_id).await?;
    Ok(Json(result))
}

/// 登记新网站
pub async fn create_website<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
    Json(payload): Json<CreateWebsiteDto>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    let website = use_case.create_website(payload).await?;
    Ok((StatusCode::CREATED, Json(website)))
}

/// 列出所有网站
pub async fn list_websites<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    let websites = use_case.list_websites().await?;
    Ok(Json(websites))
}

/// 部分更新网站
pub async fn update_website<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
    Path(website_id): Path<i32>,
    Json(payload): Json<UpdateWebsiteDto>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    let website = use_case.update_website(website_id, payload).await?;
    Ok(Json(website))
}

/// 删除网站，返回被删除的记录
pub async fn delete_website<WR, E>(
    Extension(website_repo): Extension<Arc<WR>>,
    Extension(engine): Extension<Arc<E>>,
    Path(website_id): Path<i32>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    let use_case = WebsiteUseCase::new(website_repo, engine);
    let website = use_case.delete_website(website_id).await?;
    Ok(Json(website))
}
