// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{Website, WebsiteChanges};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Website not found")]
    NotFound,
    /// 违反名称或URL唯一性约束
    #[error("{0}")]
    Conflict(String),
}

/// 网站仓库特质
///
/// 定义网站记录的数据访问接口。`name` 与 `url` 在所有记录中唯一，
/// 每个方法都是一个独立的原子操作。
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// 创建网站
    ///
    /// # 参数
    ///
    /// * `name` - 网站名称
    /// * `url` - 网站地址
    ///
    /// # 返回值
    ///
    /// * `Ok(Website)` - 创建成功，包含存储层分配的ID
    /// * `Err(RepositoryError::Conflict)` - 名称或URL已存在
    async fn create(&self, name: &str, url: &str) -> Result<Website, RepositoryError>;

    /// 列出所有网站，按ID升序
    async fn list_all(&self) -> Result<Vec<Website>, RepositoryError>;

    /// 根据ID查找网站
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Website))` - 找到记录
    /// * `Ok(None)` - 记录不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError>;

    /// 部分更新网站并刷新 `updated_at`
    ///
    /// # 返回值
    ///
    /// * `Ok(Website)` - 更新后的记录
    /// * `Err(RepositoryError::NotFound)` - ID不存在
    /// * `Err(RepositoryError::Conflict)` - 新URL已被其他网站占用
    async fn update(&self, id: i32, changes: WebsiteChanges) -> Result<Website, RepositoryError>;

    /// 删除网站并返回被删除的记录
    ///
    /// # 返回值
    ///
    /// * `Ok(Website)` - 被删除的记录
    /// * `Err(RepositoryError::NotFound)` - ID不存在
    async fn delete(&self, id: i32) -> Result<Website, RepositoryError>;
}
