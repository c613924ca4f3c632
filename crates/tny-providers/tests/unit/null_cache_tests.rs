//! Tests for the null cache provider

use tny_domain::ports::{CacheEntryConfig, CacheProvider};
use tny_providers::cache::NullCacheProvider;

#[tokio::test]
async fn test_null_cache_never_stores() {
    let cache = NullCacheProvider::new();

    cache
        .set_json("k", "v", CacheEntryConfig::default())
        .await
        .unwrap();

    assert_eq!(cache.get_json("k").await.unwrap(), None);
    assert!(!cache.exists("k").await.unwrap());
    assert!(!cache.delete("k").await.unwrap());
    assert_eq!(cache.size().await.unwrap(), 0);
    assert_eq!(cache.provider_name(), "null");
}
