// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_db;
use radarweb::domain::models::website::WebsiteChanges;
use radarweb::domain::repositories::website_repository::{RepositoryError, WebsiteRepository};
use radarweb::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;

async fn create_repo() -> WebsiteRepositoryImpl {
    WebsiteRepositoryImpl::new(create_test_db().await)
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let repo = create_repo().await;

    let website = repo.create("Acme", "https://acme.test").await.unwrap();

    assert!(website.id > 0);
    assert_eq!(website.name, "Acme");
    assert_eq!(website.url, "https://acme.test");
    assert!(website.updated_at.is_none());

    let found = repo.find_by_id(website.id).await.unwrap().unwrap();
    assert_eq!(found.id, website.id);
    assert_eq!(found.url, website.url);
}

/// 重复的 URL 无论名称如何都应冲突
#[tokio::test]
async fn test_create_duplicate_url_conflicts_regardless_of_name() {
    let repo = create_repo().await;
    repo.create("Acme", "https://acme.test").await.unwrap();

    let result = repo.create("Other", "https://acme.test").await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_duplicate_name_conflicts() {
    let repo = create_repo().await;
    repo.create("Acme", "https://acme.test").await.unwrap();

    let result = repo.create("Acme", "https://acme-2.test").await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let repo = create_repo().await;

    assert!(repo.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_is_ordered_by_id() {
    let repo = create_repo().await;
    let first = repo.create("B", "https://b.test").await.unwrap();
    let second = repo.create("A", "https://a.test").await.unwrap();

    let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|w| w.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);
}

/// 将 URL 更新为自身当前值不应冲突
#[tokio::test]
async fn test_update_url_to_own_value_does_not_conflict() {
    let repo = create_repo().await;
    let website = repo.create("Acme", "https://acme.test").await.unwrap();

    let updated = repo
        .update(
            website.id,
            WebsiteChanges {
                name: None,
                url: Some("https://acme.test".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.url, "https://acme.test");
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_to_colliding_url_conflicts() {
    let repo = create_repo().await;
    repo.create("Acme", "https://acme.test").await.unwrap();
    let other = repo.create("Other", "https://other.test").await.unwrap();

    let result = repo
        .update(
            other.id,
            WebsiteChanges {
                name: None,
                url: Some("https://acme.test".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    let unchanged = repo.find_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(unchanged.url, "https://other.test");
}

#[tokio::test]
async fn test_update_to_colliding_name_conflicts() {
    let repo = create_repo().await;
    repo.create("Acme", "https://acme.test").await.unwrap();
    let other = repo.create("Other", "https://other.test").await.unwrap();

    let result = repo
        .update(
            other.id,
            WebsiteChanges {
                name: Some("Acme".to_string()),
                url: None,
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn test_partial_update_keeps_untouched_fields() {
    let repo = create_repo().await;
    let website = repo.create("Acme", "https://acme.test").await.unwrap();

    let updated = repo
        .update(
            website.id,
            WebsiteChanges {
                name: Some("Acme Corp".to_string()),
                url: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.url, "https://acme.test");
    assert_eq!(updated.created_at, website.created_at);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let repo = create_repo().await;

    let result = repo
        .update(
            999,
            WebsiteChanges {
                name: Some("Ghost".to_string()),
                url: None,
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_delete_returns_record_and_removes_it() {
    let repo = create_repo().await;
    let keep = repo.create("Keep", "https://keep.test").await.unwrap();
    let gone = repo.create("Gone", "https://gone.test").await.unwrap();

    let deleted = repo.delete(gone.id).await.unwrap();
    assert_eq!(deleted.id, gone.id);
    assert_eq!(deleted.name, "Gone");

    let remaining = repo.list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let repo = create_repo().await;

    let result = repo.delete(12345).await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_empty_update_leaves_record_untouched() {
    let repo = create_repo().await;
    let website = repo.create("Acme", "https://acme.test").await.unwrap();

    let unchanged = repo
        .update(website.id, WebsiteChanges::default())
        .await
        .unwrap();

    assert_eq!(unchanged, website);
}
