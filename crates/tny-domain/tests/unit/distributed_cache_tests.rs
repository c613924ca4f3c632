//! Unit tests for the typed DistributedCache view

use crate::test_utils::InMemoryCache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tny_domain::error::Error;
use tny_domain::ports::{CacheProvider, DistributedCache};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    value: u32,
}

#[tokio::test]
async fn test_set_get_remove() {
    let provider = Arc::new(InMemoryCache::default());
    let cache: DistributedCache<Item> = DistributedCache::new(provider.clone());

    cache.set("k", &Item { value: 7 }, None).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some(Item { value: 7 }));
    assert!(cache.exists("k").await.unwrap());

    assert!(cache.remove("k").await.unwrap());
    assert!(!cache.remove("k").await.unwrap(), "absent key is not an error");
    assert_eq!(cache.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_namespace_prefixes_keys() {
    let provider = Arc::new(InMemoryCache::default());
    let cache: DistributedCache<Item> =
        DistributedCache::new(provider.clone()).with_namespace("tny");

    cache.set("k", &Item { value: 1 }, None).await.unwrap();

    assert_eq!(cache.full_key("k"), "tny:k");
    assert!(provider.contains("tny:k"));
    assert!(!provider.contains("k"));
}

#[tokio::test]
async fn test_corrupt_payload_is_cache_error() {
    let provider = Arc::new(InMemoryCache::default());
    provider.insert_raw("k", "not json");
    let cache: DistributedCache<Item> = DistributedCache::new(provider);

    let err = cache.get("k").await.unwrap_err();
    assert!(matches!(err, Error::Cache { .. }));
}

#[tokio::test]
async fn test_get_or_add_calls_factory_once() {
    let provider = Arc::new(InMemoryCache::default());
    let cache: DistributedCache<Item> = DistributedCache::new(provider.clone());
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let value = cache
            .get_or_add(
                "k",
                || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(Some(Item { value: 42 }))
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(value, Some(Item { value: 42 }));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_get_or_add_does_not_cache_none() {
    let provider = Arc::new(InMemoryCache::default());
    let cache: DistributedCache<Item> = DistributedCache::new(provider.clone());

    let value = cache
        .get_or_add("k", || async { Ok(None) }, None)
        .await
        .unwrap();

    assert_eq!(value, None);
    assert_eq!(provider.size().await.unwrap(), 0);
}
