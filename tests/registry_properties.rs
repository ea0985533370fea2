mod common;

use qr_fire::application::services::{Outcome, RedirectResolver, RegistrationError, SlugRegistry};
use qr_fire::domain::entities::SlugCandidate;
use qr_fire::domain::repositories::SlugRepository;
use std::sync::Arc;

fn services() -> (
    Arc<dyn SlugRepository>,
    Arc<SlugRegistry>,
    RedirectResolver,
) {
    let store: Arc<dyn SlugRepository> = common::memory_store();
    let registry = Arc::new(SlugRegistry::new(store.clone()));
    let resolver = RedirectResolver::new(store.clone());
    (store, registry, resolver)
}

#[tokio::test]
async fn test_created_slug_resolves_to_its_url() {
    let (_, registry, resolver) = services();

    for (slug, url) in [
        ("a", "https://example.com"),
        ("menu-2024", "http://example.org/menu?table=4"),
        ("x-y-z", "https://example.net/path#frag"),
    ] {
        registry.create(SlugCandidate::new(slug, url)).await.unwrap();

        assert_eq!(
            resolver.resolve(slug).await.unwrap(),
            Outcome::Redirect(url.to_string())
        );
    }
}

#[tokio::test]
async fn test_unregistered_slug_is_not_found() {
    let (_, registry, resolver) = services();
    registry
        .create(SlugCandidate::new("known", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(resolver.resolve("unknown").await.unwrap(), Outcome::NotFound);
    assert_eq!(resolver.resolve("").await.unwrap(), Outcome::NotFound);
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let (_, registry, resolver) = services();
    registry
        .create(SlugCandidate::new("stable", "https://example.com/stable"))
        .await
        .unwrap();

    let first = resolver.resolve("stable").await.unwrap();
    let second = resolver.resolve("stable").await.unwrap();
    assert_eq!(first, second);

    let missing_first = resolver.resolve("gone").await.unwrap();
    let missing_second = resolver.resolve("gone").await.unwrap();
    assert_eq!(missing_first, missing_second);
}

#[tokio::test]
async fn test_second_create_is_duplicate_and_keeps_first_record() {
    let (store, registry, resolver) = services();
    registry
        .create(SlugCandidate::new("twice", "https://example.com/first"))
        .await
        .unwrap();

    let result = registry
        .create(SlugCandidate::new("twice", "https://example.com/second"))
        .await;

    assert!(matches!(result, Err(RegistrationError::DuplicateSlug(s)) if s == "twice"));
    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(
        resolver.resolve("twice").await.unwrap(),
        Outcome::Redirect("https://example.com/first".to_string())
    );
}

#[tokio::test]
async fn test_invalid_url_writes_nothing() {
    let (store, registry, resolver) = services();

    let result = registry.create(SlugCandidate::new("a", "not-a-url")).await;

    assert!(matches!(result, Err(RegistrationError::InvalidUrl(_))));
    assert_eq!(store.count().await.unwrap(), 0);
    assert_eq!(resolver.resolve("a").await.unwrap(), Outcome::NotFound);
}

#[tokio::test]
async fn test_record_without_url_resolves_like_missing_slug() {
    let (store, _, resolver) = services();
    common::insert_record(store.as_ref(), "orphan", None).await;

    assert_eq!(
        resolver.resolve("orphan").await.unwrap(),
        resolver.resolve("never-registered").await.unwrap()
    );
}

#[tokio::test]
async fn test_resolution_is_exact_match() {
    let (_, registry, resolver) = services();
    registry
        .create(SlugCandidate::new("wow-doge", "https://example.com/page"))
        .await
        .unwrap();

    assert_eq!(
        resolver.resolve("wow-doge").await.unwrap(),
        Outcome::Redirect("https://example.com/page".to_string())
    );
    assert_eq!(resolver.resolve("WOW-DOGE").await.unwrap(), Outcome::NotFound);
}

#[tokio::test]
async fn test_registry_does_not_sanitize() {
    let (_, registry, _) = services();

    let result = registry
        .create(SlugCandidate::new("Wow Doge", "https://example.com"))
        .await;

    assert!(matches!(result, Err(RegistrationError::InvalidSlug(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_have_one_winner() {
    let (store, registry, resolver) = services();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                registry
                    .create(SlugCandidate::new(
                        "race",
                        format!("https://example.com/{}", i),
                    ))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(RegistrationError::DuplicateSlug(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.count().await.unwrap(), 1);
    assert!(matches!(
        resolver.resolve("race").await.unwrap(),
        Outcome::Redirect(_)
    ));
}
