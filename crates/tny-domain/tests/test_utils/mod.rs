//! In-test doubles for domain ports

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tny_domain::entities::Tenant;
use tny_domain::error::{Error, Result};
use tny_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats, DistributedCache, IdGenerator};
use tny_domain::records::TenantConfiguration;
use tny_domain::repositories::TenantRepository;
use tny_domain::services::TenantManager;
use tny_domain::value_objects::{NameComparison, TenantNamePolicy};
use uuid::Uuid;

/// HashMap-backed cache that counts deletes
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
    deletes: AtomicUsize,
}

impl InMemoryCache {
    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl CacheProvider for InMemoryCache {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_json(&self, key: &str, value: &str, _config: CacheEntryConfig) -> Result<()> {
        self.insert_raw(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.contains(key))
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.entries.lock().unwrap().len() as u64;
        Ok(CacheStats::from_counters(0, 0, entries))
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.entries.lock().unwrap().len())
    }

    fn provider_name(&self) -> &str {
        "test-memory"
    }
}

/// Cache whose writes and deletes always fail
#[derive(Debug, Default)]
pub struct FailingCache;

#[async_trait]
impl CacheProvider for FailingCache {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Err(Error::cache("backend unavailable"))
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(Error::cache("backend unavailable"))
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::default())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "test-failing"
    }
}

/// Cache whose deletes take longer than any test timeout
#[derive(Debug, Default)]
pub struct SlowCache {
    inner: InMemoryCache,
}

#[async_trait]
impl CacheProvider for SlowCache {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_json(key).await
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        self.inner.set_json(key, value, config).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        self.inner.exists(key).await
    }

    async fn clear(&self) -> Result<()> {
        self.inner.clear().await
    }

    async fn stats(&self) -> Result<CacheStats> {
        self.inner.stats().await
    }

    async fn size(&self) -> Result<usize> {
        self.inner.size().await
    }

    fn provider_name(&self) -> &str {
        "test-slow"
    }
}

/// Repository that enforces name uniqueness under one lock
#[derive(Default)]
pub struct FakeTenantRepository {
    tenants: Mutex<HashMap<Uuid, Tenant>>,
    comparison: NameComparison,
}

impl FakeTenantRepository {
    pub fn with_comparison(comparison: NameComparison) -> Self {
        Self {
            tenants: Mutex::new(HashMap::new()),
            comparison,
        }
    }

    fn check_unique(&self, tenants: &HashMap<Uuid, Tenant>, tenant: &Tenant) -> Result<()> {
        let taken = tenants
            .values()
            .any(|t| t.id() != tenant.id() && self.comparison.matches(t.name(), tenant.name()));
        if taken {
            return Err(Error::unique_constraint(tenant.name()));
        }
        Ok(())
    }
}

#[async_trait]
impl TenantRepository for FakeTenantRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Tenant>> {
        Ok(self.tenants.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str, comparison: NameComparison) -> Result<Option<Tenant>> {
        Ok(self
            .tenants
            .lock()
            .unwrap()
            .values()
            .find(|t| comparison.matches(t.name(), name))
            .cloned())
    }

    async fn insert(&self, tenant: &Tenant) -> Result<()> {
        let mut tenants = self.tenants.lock().unwrap();
        self.check_unique(&tenants, tenant)?;
        tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn update(&self, tenant: &Tenant) -> Result<()> {
        let mut tenants = self.tenants.lock().unwrap();
        if !tenants.contains_key(&tenant.id()) {
            return Err(Error::not_found(format!("tenant {}", tenant.id())));
        }
        self.check_unique(&tenants, tenant)?;
        tenants.insert(tenant.id(), tenant.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.tenants.lock().unwrap().remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.tenants.lock().unwrap().len())
    }
}

/// Deterministic id generator
#[derive(Debug, Default)]
pub struct CountingIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for CountingIdGenerator {
    fn create(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

/// Manager wired to the given cache, a fresh fake store and a counting id generator
pub fn manager_with_cache(cache: Arc<dyn CacheProvider>) -> (TenantManager, Arc<FakeTenantRepository>) {
    manager_with(cache, TenantNamePolicy::default())
}

/// Manager wired with a custom name policy
pub fn manager_with(
    cache: Arc<dyn CacheProvider>,
    policy: TenantNamePolicy,
) -> (TenantManager, Arc<FakeTenantRepository>) {
    let repository = Arc::new(FakeTenantRepository::with_comparison(policy.comparison));
    let manager = TenantManager::new(
        repository.clone(),
        DistributedCache::new(cache),
        Arc::new(CountingIdGenerator::default()),
    )
    .with_policy(policy);
    (manager, repository)
}

/// Store a configuration record for `tenant` in the manager's cache
pub async fn cache_configuration(manager: &TenantManager, tenant: &Tenant) {
    use tny_domain::services::{RecordSerializer, TenantConfigurationSerializer};

    let record = TenantConfigurationSerializer::new().serialize(tenant, &());
    manager
        .cache()
        .set(
            &TenantConfiguration::calculate_cache_key(tenant.name()),
            &record,
            None,
        )
        .await
        .expect("seeding the cache should succeed");
}
