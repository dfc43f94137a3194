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

use crate::{
    application::dto::website_request::{CreateWebsiteDto, UpdateWebsiteDto},
    domain::{
        models::{website::Website, website_status::StatusResult},
        repositories::website_repository::{RepositoryError, WebsiteRepository},
        services::status_service::StatusService,
    },
    engines::traits::ProbeEngine,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Error, Debug)]
pub enum WebsiteUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Website not found")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for WebsiteUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => WebsiteUseCaseError::NotFound,
            RepositoryError::Conflict(msg) => WebsiteUseCaseError::Conflict(msg),
            other => WebsiteUseCaseError::Repository(other),
        }
    }
}

pub struct WebsiteUseCase<WR, E> {
    website_repo: Arc<WR>,
    status_service: StatusService<E>,
}

impl<WR, E> WebsiteUseCase<WR, E>
where
    WR: WebsiteRepository + 'static,
    E: ProbeEngine + 'static,
{
    pub fn new(website_repo: Arc<WR>, engine: Arc<E>) -> Self {
        Self {
            website_repo,
            status_service: StatusService::new(engine),
        }
    }

    /// 探测任意URL，不查询存储
    pub async fn check_status_by_url(&self, url: &str) -> StatusResult {
        self.status_service.probe(url).await
    }

    /// 探测已存储的网站
    ///
    /// 未知ID返回 `NotFound`，此时不会发起任何请求
    pub async fn check_status_by_id(&self, id: i32) -> Result<StatusResult, WebsiteUseCaseError> {
        let website = self
            .website_repo
            .find_by_id(id)
            .await?
            .ok_or(WebsiteUseCaseError::NotFound)?;

        Ok(self.status_service.probe_website(&website).await)
    }

    pub async fn create_website(
        &self,
        dto: CreateWebsiteDto,
    ) -> Result<Website, WebsiteUseCaseError> {
        dto.validate()
            .map_err(|e| WebsiteUseCaseError::ValidationError(e.to_string()))?;

        let website = self.website_repo.create(&dto.name, &dto.url).await?;
        info!("Registered website {} as id {}", website.url, website.id);
        Ok(website)
    }

    pub async fn list_websites(&self) -> Result<Vec<Website>, WebsiteUseCaseError> {
        self.website_repo.list_all().await.map_err(Into::into)
    }

    pub async fn update_website(
        &self,
        id: i32,
        dto: UpdateWebsiteDto,
    ) -> Result<Website, WebsiteUseCaseError> {
        dto.validate()
            .map_err(|e| WebsiteUseCaseError::ValidationError(e.to_string()))?;

        self.website_repo
            .update(id, dto.into())
            .await
            .map_err(Into::into)
    }

    pub async fn delete_website(&self, id: i32) -> Result<Website, WebsiteUseCaseError> {
        let website = self.website_repo.delete(id).await?;
        info!("Removed website {} ({})", website.id, website.url);
        Ok(website)
    }
}

#[cfg(test)]
#[path = "website_use_case_test.rs"]
mod tests;
