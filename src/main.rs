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

use axum::Extension;
use radarweb::config::settings::Settings;
use radarweb::engines::reqwest_engine::ReqwestEngine;
use radarweb::infrastructure::database::connection;
use radarweb::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use radarweb::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};
use radarweb::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting radarweb...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    radarweb::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let website_repo = Arc::new(WebsiteRepositoryImpl::new(db.clone()));
    let engine = Arc::new(ReqwestEngine::new(
        settings.probe.timeout(),
        &settings.probe.user_agent,
    )?);
    info!(
        "Probe engine ready (timeout {}s)",
        engine.timeout().as_secs_f64()
    );

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(website_repo))
        .layer(Extension(engine))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
