//! Unit tests for TenantManager
//!
//! Cover creation, uniqueness, and the rename ordering that removes the
//! configuration cached under the old name before the name changes.

use crate::test_utils::{
    FailingCache, InMemoryCache, SlowCache, cache_configuration, manager_with, manager_with_cache,
};
use std::sync::Arc;
use std::time::Duration;
use tny_domain::error::{EntityKind, Error};
use tny_domain::records::TenantConfiguration;
use tny_domain::repositories::TenantRepository;
use tny_domain::value_objects::{NameComparison, TenantNamePolicy};

#[tokio::test]
async fn test_create_distinct_names_both_succeed() {
    let (manager, _repo) = manager_with_cache(Arc::new(InMemoryCache::default()));

    let t1 = manager.create("Tenant1").await.expect("create Tenant1");
    manager.save(&t1, true).await.expect("save Tenant1");
    let t2 = manager.create("Tenant2").await.expect("create Tenant2");
    manager.save(&t2, true).await.expect("save Tenant2");

    assert_eq!(t1.name(), "Tenant1");
    assert_eq!(t2.name(), "Tenant2");
    assert_ne!(t1.id(), t2.id());
    assert!(t1.is_active());
}

#[tokio::test]
async fn test_create_duplicate_name_fails() {
    let (manager, _repo) = manager_with_cache(Arc::new(InMemoryCache::default()));
    let tenant = manager.create("Tenant1").await.expect("create");
    manager.save(&tenant, true).await.expect("save");

    let err = manager.create("Tenant1").await.expect_err("duplicate must fail");

    assert!(matches!(
        &err,
        Error::DuplicateName { kind: EntityKind::Tenant, name } if name == "Tenant1"
    ));
    assert_eq!(err.code(), "TenantManagement:DuplicateTenantName");
    assert_eq!(err.data().get("Name").map(String::as_str), Some("Tenant1"));
}

#[tokio::test]
async fn test_create_is_case_sensitive_by_default() {
    let (manager, _repo) = manager_with_cache(Arc::new(InMemoryCache::default()));
    let tenant = manager.create("Acme").await.expect("create");
    manager.save(&tenant, true).await.expect("save");

    let other = manager.create("acme").await.expect("different case is a new name");
    assert_eq!(other.name(), "acme");
}

#[tokio::test]
async fn test_create_case_insensitive_policy_rejects_other_case() {
    let policy = TenantNamePolicy::new(NameComparison::CaseInsensitive);
    let (manager, _repo) = manager_with(Arc::new(InMemoryCache::default()), policy);
    let tenant = manager.create("Acme").await.expect("create");
    manager.save(&tenant, true).await.expect("save");

    let err = manager.create("ACME").await.expect_err("same name ignoring case");
    assert!(err.is_duplicate_name());
}

#[tokio::test]
async fn test_create_rejects_invalid_names() {
    let (manager, repo) = manager_with_cache(Arc::new(InMemoryCache::default()));

    let too_long = "x".repeat(65);
    for name in ["", "   ", too_long.as_str()] {
        let err = manager.create(name).await.expect_err("invalid name");
        assert!(matches!(err, Error::Validation { field: "name", .. }), "{name:?}");
    }
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_change_name_to_same_name_is_noop() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, _repo) = manager_with_cache(cache.clone());
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();

    manager
        .change_name(&mut tenant, "Acme")
        .await
        .expect("same name is accepted");

    assert_eq!(tenant.name(), "Acme");
    assert_eq!(cache.deletes(), 0, "no cache traffic for a no-op rename");
}

#[tokio::test]
async fn test_change_name_removes_old_cache_entry() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, _repo) = manager_with_cache(cache.clone());
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();
    cache_configuration(&manager, &tenant).await;
    assert!(cache.contains("tenant-config:acme"));

    manager.change_name(&mut tenant, "Acme-Renamed").await.unwrap();

    assert_eq!(tenant.name(), "Acme-Renamed");
    assert!(!cache.contains("tenant-config:acme"));
    assert!(!cache.contains("tenant-config:acme-renamed"));
    assert_eq!(cache.deletes(), 1);
}

#[tokio::test]
async fn test_change_name_to_taken_name_fails_without_side_effects() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, _repo) = manager_with_cache(cache.clone());
    let other = manager.create("Globex").await.unwrap();
    manager.save(&other, true).await.unwrap();
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();
    cache_configuration(&manager, &tenant).await;

    let err = manager
        .change_name(&mut tenant, "Globex")
        .await
        .expect_err("name is taken");

    assert!(matches!(err, Error::DuplicateName { ref name, .. } if name == "Globex"));
    assert_eq!(tenant.name(), "Acme");
    assert!(cache.contains("tenant-config:acme"));
    assert_eq!(cache.deletes(), 0);
}

#[tokio::test]
async fn test_change_name_case_only_under_case_insensitive_policy() {
    let cache = Arc::new(InMemoryCache::default());
    let policy = TenantNamePolicy::new(NameComparison::CaseInsensitive);
    let (manager, _repo) = manager_with(cache.clone(), policy);
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();

    manager
        .change_name(&mut tenant, "ACME")
        .await
        .expect("a tenant does not collide with itself");
    assert_eq!(tenant.name(), "ACME");
}

#[tokio::test]
async fn test_change_name_invalid_name_has_no_cache_traffic() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, _repo) = manager_with_cache(cache.clone());
    let mut tenant = manager.create("Acme").await.unwrap();

    let err = manager.change_name(&mut tenant, " ").await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(tenant.name(), "Acme");
    assert_eq!(cache.deletes(), 0);
}

#[tokio::test]
async fn test_change_name_invalidation_failure_keeps_old_name() {
    let (manager, _repo) = manager_with_cache(Arc::new(FailingCache));
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();

    let err = manager
        .change_name(&mut tenant, "Acme-Renamed")
        .await
        .expect_err("invalidation fails");

    assert!(matches!(&err, Error::CacheInvalidation { key, .. } if key == "tenant-config:acme"));
    assert_eq!(err.code(), "Tenantry:CacheInvalidationFailure");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(tenant.name(), "Acme");
}

#[tokio::test]
async fn test_change_name_cancelled_before_invalidation_completes() {
    let (manager, _repo) = manager_with_cache(Arc::new(SlowCache::default()));
    let mut tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();

    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        manager.change_name(&mut tenant, "Acme-Renamed"),
    )
    .await;

    assert!(outcome.is_err(), "rename future should be dropped");
    assert_eq!(tenant.name(), "Acme");
}

#[tokio::test]
async fn test_save_translates_unique_constraint() {
    let (manager, _repo) = manager_with_cache(Arc::new(InMemoryCache::default()));
    let first = manager.create("Acme").await.unwrap();
    let second = manager.create("Acme").await.unwrap();

    manager.save(&first, true).await.expect("first insert wins");
    let err = manager.save(&second, true).await.expect_err("second insert loses");

    assert!(matches!(
        err,
        Error::DuplicateName { kind: EntityKind::Tenant, ref name } if name == "Acme"
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_exactly_one_succeeds() {
    let (manager, repo) = manager_with_cache(Arc::new(InMemoryCache::default()));

    let attempt = |manager: tny_domain::services::TenantManager| async move {
        let tenant = manager.create("Acme").await?;
        manager.save(&tenant, true).await
    };
    let results = futures::future::join_all(
        (0..8).map(|_| tokio::spawn(attempt(manager.clone()))),
    )
    .await;

    let results: Vec<_> = results.into_iter().map(|r| r.expect("task panicked")).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(Error::is_duplicate_name)
    );
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_removes_cache_entry_and_tenant() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, repo) = manager_with_cache(cache.clone());
    let tenant = manager.create("Acme").await.unwrap();
    manager.save(&tenant, true).await.unwrap();
    cache_configuration(&manager, &tenant).await;

    manager.delete(&tenant).await.expect("delete");

    assert!(!cache.contains("tenant-config:acme"));
    assert!(repo.find(tenant.id()).await.unwrap().is_none());
    assert!(matches!(
        manager.delete(&tenant).await,
        Err(Error::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_acme_rename_scenario() {
    let cache = Arc::new(InMemoryCache::default());
    let (manager, _repo) = manager_with_cache(cache.clone());
    let mut acme = manager.create("Acme").await.unwrap();
    manager.save(&acme, true).await.unwrap();
    cache_configuration(&manager, &acme).await;

    manager.change_name(&mut acme, "Acme-Renamed").await.unwrap();
    manager.save(&acme, false).await.unwrap();

    assert!(!cache.contains(&TenantConfiguration::calculate_cache_key("Acme")));
    let err = manager.create("Acme-Renamed").await.unwrap_err();
    assert!(matches!(err, Error::DuplicateName { ref name, .. } if name == "Acme-Renamed"));
    manager
        .create("Acme")
        .await
        .expect("the old name is free again");
}
