// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};
use url::Url;

/// 页面元数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    /// 去除首尾空白后的 `<title>` 文本
    pub page_title: Option<String>,
    /// 绝对地址形式的 favicon
    pub favicon: Option<String>,
}

/// 元数据提取服务
///
/// 从 HTML 中尽力提取页面标题和 favicon。任何解析问题都只会让对应字段为空，
/// 不会返回错误。
pub struct MetadataService;

impl MetadataService {
    /// 提取页面元数据
    ///
    /// # 参数
    ///
    /// * `html` - 响应正文
    /// * `base_url` - 被探测的URL，用于解析相对的 favicon 地址
    pub fn extract(html: &str, base_url: &str) -> PageMetadata {
        let document = Html::parse_document(html);

        PageMetadata {
            page_title: Self::extract_title(&document),
            favicon: Self::extract_favicon(&document, base_url),
        }
    }

    fn extract_title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let element = document.select(&selector).next()?;

        let title = element.text().collect::<String>();
        let title = title.trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }

    fn extract_favicon(document: &Html, base_url: &str) -> Option<String> {
        let selector = Selector::parse("link[rel]").ok()?;

        // Only the first icon link counts, even when it has no href
        let icon_link = document.select(&selector).find(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel.to_ascii_lowercase().contains("icon"))
        })?;
        let href = icon_link.value().attr("href")?;

        resolve_url(base_url, href.trim())
    }
}

/// 以 `base_url` 为基准把 `href` 解析为绝对地址
fn resolve_url(base_url: &str, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Url::parse(base_url)
            .and_then(|base| base.join(href))
            .map(|url| url.to_string())
            .ok(),
    }
}
