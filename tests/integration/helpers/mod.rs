// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{http::StatusCode, routing::get, Extension, Router};
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use radarweb::config::settings::DatabaseSettings;
use radarweb::engines::reqwest_engine::ReqwestEngine;
use radarweb::infrastructure::database::connection;
use radarweb::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use radarweb::presentation::routes;
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub website_repo: Arc<WebsiteRepositoryImpl>,
}

/// 创建迁移完成的内存数据库
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: Some(5),
        idle_timeout: None,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to connect to in-memory SQLite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

/// 创建测试应用
///
/// 与 `main` 中的装配方式一致，只是数据库换成内存 SQLite，探测超时缩短为 2 秒
pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let website_repo = Arc::new(WebsiteRepositoryImpl::new(db_pool.clone()));
    let engine = Arc::new(
        ReqwestEngine::new(Duration::from_secs(2), "radarweb-test/0.1").expect("engine"),
    );

    let app = routes::routes()
        .layer(Extension(website_repo.clone()))
        .layer(Extension(engine));

    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        db_pool,
        website_repo,
    }
}

/// 启动一个本地目标站点，供探测使用
///
/// * `/` - 200，带标题与 favicon
/// * `/broken` - 503
pub async fn spawn_target_site() -> SocketAddr {
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                axum::response::Html(
                    r#"<html><head><title> Target Site </title>
                    <link rel="Shortcut Icon" href="/static/favicon.ico"></head>
                    <body>ok</body></html>"#,
                )
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// 获取一个当前没有服务监听的本地端口
pub async fn unused_local_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
