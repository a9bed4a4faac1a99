//! Content lifecycle tests against the blog service.
//!
//! These exercise the soft-delete flow and slug handling through the
//! service layer with a mocked repository, no database required.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_cms::domain::{Bilingual, Blog, CreateBlog, UpdateBlog};
use portfolio_cms::errors::AppError;
use portfolio_cms::infra::repositories::MockBlogRepository;
use portfolio_cms::services::{BlogManager, BlogService};

fn create_test_blog(id: Uuid) -> Blog {
    Blog {
        id,
        slug: "test-post".to_string(),
        category: "engineering".to_string(),
        emoji: None,
        title: Bilingual::new("Test Yazısı", "Test Post"),
        excerpt: None,
        content: None,
        published: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
        deleted_by: None,
    }
}

fn create_input(slug: Option<&str>, title_tr: &str) -> CreateBlog {
    CreateBlog {
        slug: slug.map(str::to_string),
        category: "engineering".to_string(),
        emoji: None,
        title: Bilingual::new(title_tr, "English Title"),
        excerpt: None,
        content: None,
        published: false,
    }
}

#[tokio::test]
async fn test_slug_generated_from_turkish_title() {
    let mut repo = MockBlogRepository::new();
    repo.expect_create()
        .withf(|_, slug| slug.as_str() == "cok-guzel-bir-yazi")
        .returning(|_, slug| {
            let mut blog = create_test_blog(Uuid::new_v4());
            blog.slug = slug;
            Ok(blog)
        });

    let service = BlogManager::new(Arc::new(repo));
    let result = service
        .create_blog(create_input(None, "Çok Güzel Bir Yazı"))
        .await;

    assert_eq!(result.unwrap().slug, "cok-guzel-bir-yazi");
}

#[tokio::test]
async fn test_explicit_slug_is_normalized() {
    let mut repo = MockBlogRepository::new();
    repo.expect_create()
        .withf(|_, slug| slug.as_str() == "my-post")
        .returning(|_, slug| {
            let mut blog = create_test_blog(Uuid::new_v4());
            blog.slug = slug;
            Ok(blog)
        });

    let service = BlogManager::new(Arc::new(repo));
    let result = service
        .create_blog(create_input(Some("  My POST!  "), "Başlık"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unsluggable_title_is_rejected() {
    // No repo expectations: the call must fail before reaching storage
    let repo = MockBlogRepository::new();
    let service = BlogManager::new(Arc::new(repo));

    let result = service.create_blog(create_input(None, "!!!")).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_delete_records_actor() {
    let blog_id = Uuid::new_v4();
    let admin_id = Uuid::new_v4();

    let mut repo = MockBlogRepository::new();
    repo.expect_delete()
        .with(eq(blog_id), eq(Some(admin_id)))
        .returning(move |id, actor| {
            let mut blog = create_test_blog(id);
            blog.deleted_at = Some(Utc::now());
            blog.deleted_by = actor;
            Ok(blog)
        });

    let service = BlogManager::new(Arc::new(repo));
    let deleted = service.delete_blog(blog_id, Some(admin_id)).await.unwrap();

    assert!(deleted.is_deleted());
    assert_eq!(deleted.deleted_by, Some(admin_id));
}

#[tokio::test]
async fn test_restore_clears_lifecycle_fields() {
    let blog_id = Uuid::new_v4();

    let mut repo = MockBlogRepository::new();
    repo.expect_restore()
        .with(eq(blog_id))
        .returning(|id| Ok(create_test_blog(id)));

    let service = BlogManager::new(Arc::new(repo));
    let restored = service.restore_blog(blog_id).await.unwrap();

    assert!(restored.is_active());
    assert!(restored.deleted_by.is_none());
}

#[tokio::test]
async fn test_repeated_publish_toggle_is_idempotent() {
    let blog_id = Uuid::new_v4();

    let mut repo = MockBlogRepository::new();
    repo.expect_set_published()
        .with(eq(blog_id), eq(true))
        .times(2)
        .returning(|id, value| {
            let mut blog = create_test_blog(id);
            blog.published = value;
            Ok(blog)
        });

    let service = BlogManager::new(Arc::new(repo));

    let first = service.set_published(blog_id, true).await.unwrap();
    let second = service.set_published(blog_id, true).await.unwrap();

    // Setting the flag to its current value succeeds and lands on the
    // same state, never an error.
    assert!(first.published);
    assert!(second.published);
}

#[tokio::test]
async fn test_unpublished_post_hidden_from_public_lookup() {
    let mut repo = MockBlogRepository::new();
    repo.expect_find_by_slug()
        .returning(|_| {
            let mut blog = create_test_blog(Uuid::new_v4());
            blog.published = false;
            Ok(Some(blog))
        });

    let service = BlogManager::new(Arc::new(repo));
    let result = service.get_published_by_slug("test-post").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_deleted_listing_filters_active_rows() {
    let mut repo = MockBlogRepository::new();
    repo.expect_list().returning(|_| {
        let active = create_test_blog(Uuid::new_v4());
        let mut deleted = create_test_blog(Uuid::new_v4());
        deleted.deleted_at = Some(Utc::now());
        Ok(vec![active, deleted])
    });

    let service = BlogManager::new(Arc::new(repo));
    let deleted = service.list_deleted_blogs().await.unwrap();

    assert_eq!(deleted.len(), 1);
    assert!(deleted[0].is_deleted());
}

#[tokio::test]
async fn test_update_normalizes_slug_before_storage() {
    let blog_id = Uuid::new_v4();

    let mut repo = MockBlogRepository::new();
    repo.expect_update()
        .withf(|_, input| input.slug.as_deref() == Some("yeni-baslik"))
        .returning(|id, _| Ok(create_test_blog(id)));

    let service = BlogManager::new(Arc::new(repo));
    let input = UpdateBlog {
        slug: Some("Yeni Başlık".to_string()),
        ..UpdateBlog::default()
    };

    assert!(service.update_blog(blog_id, input).await.is_ok());
}
