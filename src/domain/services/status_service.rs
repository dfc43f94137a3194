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

use crate::domain::models::website::Website;
use crate::domain::models::website_status::{ProbeStatus, StatusResult};
use crate::domain::services::metadata_service::{MetadataService, PageMetadata};
use crate::engines::traits::ProbeEngine;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// 网站状态探测服务
///
/// 对单个URL执行一次探测并生成 `StatusResult`。传输层失败被当作数据处理，
/// 转换为 `offline` 结果，不会作为错误返回给调用方。
pub struct StatusService<E> {
    engine: Arc<E>,
}

impl<E> StatusService<E>
where
    E: ProbeEngine + 'static,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// 探测任意URL
    ///
    /// URL 不做预先校验，格式错误会以传输失败的形式体现
    pub async fn probe(&self, url: &str) -> StatusResult {
        let start = Instant::now();
        let outcome = self.engine.fetch(url).await;
        let elapsed = start.elapsed();

        let result = match outcome {
            Ok(page) => {
                let PageMetadata {
                    page_title,
                    favicon,
                } = MetadataService::extract(&page.body, url);

                info!(
                    url,
                    http_status = page.status_code,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Probe received response"
                );
                StatusResult::reachable(url, page.status_code, elapsed, page_title, favicon)
            }
            Err(e) => {
                warn!(
                    url,
                    engine = self.engine.name(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Probe failed: {}",
                    e
                );
                StatusResult::offline(url, elapsed, e.to_string())
            }
        };

        record_probe(result.status, elapsed.as_secs_f64());
        result
    }

    /// 探测已存储的网站，结果中附带网站名称
    pub async fn probe_website(&self, website: &Website) -> StatusResult {
        self.probe(&website.url)
            .await
            .with_website_name(website.name.clone())
    }
}

fn record_probe(status: ProbeStatus, elapsed_secs: f64) {
    metrics::counter!("website_probes_total", "status" => status.as_str()).increment(1);
    metrics::histogram!("website_probe_duration_seconds").record(elapsed_secs);
}

#[cfg(test)]
#[path = "status_service_test.rs"]
mod tests;
