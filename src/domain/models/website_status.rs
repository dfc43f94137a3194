// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 网站可达性状态
///
/// 每次探测结果恰好处于其中一种状态：
/// - 收到状态码 < 400 的响应 → Online
/// - 收到状态码 >= 400 的响应 → Unstable
/// - 传输层失败 → Offline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Online,
    Unstable,
    Offline,
}

impl ProbeStatus {
    /// 根据 HTTP 状态码分类
    pub fn from_status_code(code: u16) -> Self {
        if code < 400 {
            ProbeStatus::Online
        } else {
            ProbeStatus::Unstable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStatus::Online => "online",
            ProbeStatus::Unstable => "unstable",
            ProbeStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次探测的规范化结果
///
/// 每次探测都会新建，不做持久化。传输层失败时 `error` 有值，
/// 其余元数据字段为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    /// 页面标题
    pub page_title: Option<String>,
    /// 可达性状态
    pub status: ProbeStatus,
    /// HTTP 响应状态码
    pub http_status: Option<u16>,
    /// 探测耗时（秒，保留两位小数）
    pub response_time_seconds: f64,
    /// 已解析为绝对地址的 favicon
    pub favicon: Option<String>,
    /// 被探测的 URL
    pub url: String,
    /// 传输层失败原因
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 按 ID 探测时附带的已存储网站名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_name: Option<String>,
}

impl StatusResult {
    /// 构造收到 HTTP 响应时的结果
    pub fn reachable(
        url: impl Into<String>,
        http_status: u16,
        elapsed: Duration,
        page_title: Option<String>,
        favicon: Option<String>,
    ) -> Self {
        Self {
            page_title,
            status: ProbeStatus::from_status_code(http_status),
            http_status: Some(http_status),
            response_time_seconds: round_seconds(elapsed),
            favicon,
            url: url.into(),
            error: None,
            website_name: None,
        }
    }

    /// 构造传输层失败时的结果
    pub fn offline(url: impl Into<String>, elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            page_title: None,
            status: ProbeStatus::Offline,
            http_status: None,
            response_time_seconds: round_seconds(elapsed),
            favicon: None,
            url: url.into(),
            error: Some(error.into()),
            website_name: None,
        }
    }

    pub fn with_website_name(mut self, name: impl Into<String>) -> Self {
        self.website_name = Some(name.into());
        self
    }
}

/// 将耗时换算为秒并四舍五入到两位小数
pub fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}
