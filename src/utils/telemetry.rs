// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志
///
/// 默认级别 `info,radarweb=debug,tower_http=debug`，可通过 `RUST_LOG` 覆盖。
/// 设置 `RADARWEB_LOG_FORMAT=json` 时输出 JSON 格式日志
pub fn init_telemetry() {
    let json = std::env::var("RADARWEB_LOG_FORMAT").is_ok_and(|format| format == "json");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,radarweb=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}
