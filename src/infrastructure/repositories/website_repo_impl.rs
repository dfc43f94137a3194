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

use crate::domain::models::website::{Website, WebsiteChanges};
use crate::domain::repositories::website_repository::{RepositoryError, WebsiteRepository};
use crate::infrastructure::database::entities::website as website_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

const WEBSITE_EXISTS: &str = "Website already exists";
const URL_EXISTS: &str = "URL already exists";

/// 网站仓库实现
///
/// 唯一性先在事务内显式检查；并发写入绕过检查时，
/// 数据库唯一索引的冲突同样会被转换为 `RepositoryError::Conflict`
pub struct WebsiteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl WebsiteRepositoryImpl {
    /// 创建新的网站仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebsiteRepository for WebsiteRepositoryImpl {
    async fn create(&self, name: &str, url: &str) -> Result<Website, RepositoryError> {
        let txn = self.db.begin().await?;

        let duplicate = website_entity::Entity::find()
            .filter(
                Condition::any()
                    .add(website_entity::Column::Name.eq(name))
                    .add(website_entity::Column::Url.eq(url)),
            )
            .one(&txn)
            .await?;

        if duplicate.is_some() {
            return Err(RepositoryError::Conflict(WEBSITE_EXISTS.to_string()));
        }

        let model = website_entity::ActiveModel {
            name: Set(name.to_owned()),
            url: Set(url.to_owned()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(|e| conflict_or_database(e, WEBSITE_EXISTS))?;
        txn.commit().await?;

        debug!("Created website {} ({})", created.id, created.url);
        Ok(created.into())
    }

    async fn list_all(&self) -> Result<Vec<Website>, RepositoryError> {
        let models = website_entity::Entity::find()
            .order_by_asc(website_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError> {
        let model = website_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, changes: WebsiteChanges) -> Result<Website, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = website_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if changes.is_empty() {
            debug!("Empty update for website {}, nothing to write", id);
            return Ok(existing.into());
        }

        // Re-check url uniqueness only when the url actually changes
        if let Some(new_url) = changes.url.as_deref() {
            if new_url != existing.url {
                let taken = website_entity::Entity::find()
                    .filter(website_entity::Column::Url.eq(new_url))
                    .filter(website_entity::Column::Id.ne(id))
                    .one(&txn)
                    .await?;

                if taken.is_some() {
                    return Err(RepositoryError::Conflict(URL_EXISTS.to_string()));
                }
            }
        }

        let mut model: website_entity::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(url) = changes.url {
            model.url = Set(url);
        }
        model.updated_at = Set(Some(Utc::now().into()));

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| conflict_or_database(e, WEBSITE_EXISTS))?;
        txn.commit().await?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<Website, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = website_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        website_entity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        debug!("Deleted website {} ({})", existing.id, existing.url);
        Ok(existing.into())
    }
}

/// 将唯一索引冲突转换为 `Conflict`，其余错误保持为数据库错误
fn conflict_or_database(err: DbErr, message: &str) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Conflict(message.to_string()),
        _ => RepositoryError::Database(err),
    }
}
