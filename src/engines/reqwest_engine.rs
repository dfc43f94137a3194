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

use crate::engines::traits::{EngineError, FetchedPage, ProbeEngine};
use async_trait::async_trait;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

/// 单次探测读取的正文上限，元数据只需要页面开头部分
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 探测引擎
///
/// 基于reqwest实现，所有探测共享同一个客户端（连接池），
/// 超时覆盖连接与读取全过程，重定向使用reqwest默认策略
#[derive(Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestEngine {
    /// 创建新的探测引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次探测的总超时时间
    /// * `user_agent` - 请求使用的 User-Agent
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 引擎实例
    /// * `Err(EngineError)` - HTTP客户端构建失败
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn categorize_error(&self, error: reqwest::Error) -> EngineError {
        if error.is_timeout() {
            EngineError::Timeout(self.timeout)
        } else if error.is_builder() {
            EngineError::InvalidRequest(error_chain(&error))
        } else if error.is_connect() {
            EngineError::Connect(error_chain(&error))
        } else {
            EngineError::RequestFailed(error)
        }
    }
}

#[async_trait]
impl ProbeEngine for ReqwestEngine {
    /// 执行HTTP GET
    ///
    /// 收到任何状态码的响应都视为成功。正文读取同样受超时约束，
    /// 读取失败按传输层错误处理；正文最多读取 `MAX_BODY_BYTES` 字节
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.categorize_error(e))?;

        let status_code = response.status().as_u16();

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.categorize_error(e))?
        {
            let remaining = MAX_BODY_BYTES - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                debug!("Body of {} truncated at {} bytes", url, MAX_BODY_BYTES);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedPage {
            status_code,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// 拼接错误及其来源链，reqwest 的顶层消息通常不含根因
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
