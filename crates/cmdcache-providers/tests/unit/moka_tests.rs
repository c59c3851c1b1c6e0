//! Moka Cache Provider Tests

use cmdcache_domain::ports::{CacheEntryConfig, CacheProvider};
use cmdcache_providers::cache::MokaCacheProvider;
use std::time::Duration;

#[tokio::test]
async fn test_moka_provider_basic_operations() {
    let provider = MokaCacheProvider::new();

    provider
        .set_json("cmd_key", r#"{"exit_code":0}"#, CacheEntryConfig::default())
        .await
        .unwrap();

    let retrieved = provider.get_json("cmd_key").await.unwrap();
    assert_eq!(retrieved.as_deref(), Some(r#"{"exit_code":0}"#));
    assert!(provider.exists("cmd_key").await.unwrap());
    assert_eq!(provider.size().await.unwrap(), 1);
}

#[tokio::test]
async fn test_moka_provider_nonexistent_key() {
    let provider = MokaCacheProvider::new();

    assert!(provider.get_json("nonexistent").await.unwrap().is_none());
    assert!(!provider.exists("nonexistent").await.unwrap());
}

#[tokio::test]
async fn test_moka_provider_overwrite() {
    let provider = MokaCacheProvider::new();

    provider
        .set_json("cmd_key", "first", CacheEntryConfig::default())
        .await
        .unwrap();
    provider
        .set_json("cmd_key", "second", CacheEntryConfig::default())
        .await
        .unwrap();

    assert_eq!(
        provider.get_json("cmd_key").await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_moka_provider_honours_entry_ttl() {
    let provider = MokaCacheProvider::new();

    provider
        .set_json(
            "short",
            "blob",
            CacheEntryConfig::new().with_ttl(Duration::from_millis(200)),
        )
        .await
        .unwrap();
    provider
        .set_json("long", "blob", CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(provider.get_json("short").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(provider.get_json("short").await.unwrap().is_none());
    assert!(provider.get_json("long").await.unwrap().is_some());
}

#[tokio::test]
async fn test_moka_provider_stats() {
    let provider = MokaCacheProvider::with_capacity(16);
    assert_eq!(provider.max_capacity(), 16);

    provider
        .set_json("key1", "\"value1\"", CacheEntryConfig::default())
        .await
        .unwrap();
    provider
        .set_json("key2", "\"value2\"", CacheEntryConfig::default())
        .await
        .unwrap();
    provider.get_json("key1").await.unwrap();
    provider.get_json("missing").await.unwrap();

    let stats = provider.stats().await.unwrap();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
}
