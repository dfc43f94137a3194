// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 网站实体
///
/// 用户登记的 (名称, URL) 对。`name` 与 `url` 在所有网站中均唯一，
/// `id` 由存储层分配并在记录生命周期内保持不变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    /// 网站唯一标识符
    pub id: i32,
    /// 网站名称
    pub name: String,
    /// 网站地址
    pub url: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最后修改时间，创建后未修改过则为空
    pub updated_at: Option<DateTime<Utc>>,
}

/// 网站部分更新
///
/// 仅 `Some` 字段会被写入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebsiteChanges {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl WebsiteChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none()
    }
}
