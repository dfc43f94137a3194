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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
///
/// 均属于传输层失败，探测服务会把它们转换为 `offline` 结果
#[derive(Error, Debug)]
pub enum EngineError {
    /// 超时
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    /// 无法建立连接（DNS、拒绝连接、TLS握手等）
    #[error("Connection failed: {0}")]
    Connect(String),
    /// 请求无法构建，通常是URL格式错误
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应正文，非 UTF-8 内容按有损方式解码
    pub body: String,
}

/// 探测引擎特质
///
/// 对目标URL执行一次 GET 请求
#[async_trait]
pub trait ProbeEngine: Send + Sync {
    /// 执行请求
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
