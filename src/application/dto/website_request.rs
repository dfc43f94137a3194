// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::WebsiteChanges;
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

/// 创建网站请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateWebsiteDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

/// 部分更新网站请求，省略的字段保持不变
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateWebsiteDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub url: Option<String>,
}

impl From<UpdateWebsiteDto> for WebsiteChanges {
    fn from(dto: UpdateWebsiteDto) -> Self {
        WebsiteChanges {
            name: dto.name,
            url: dto.url,
        }
    }
}

/// 只接受带主机名的 http/https 绝对地址
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::new("http_url")
            .with_message("must be an absolute http or https URL".into())),
    }
}

/// 按URL探测的查询参数
///
/// `url` 不做校验，格式错误的地址会得到 `offline` 结果
#[derive(Debug, Deserialize, Serialize)]
pub struct CheckStatusQuery {
    pub url: String,
}
