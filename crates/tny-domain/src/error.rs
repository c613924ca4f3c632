//! Error handling types
//!
//! Every error carries a machine-readable [`code`](Error::code) and
//! structured [`data`](Error::data) so callers can localize messages
//! without parsing the display text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Kind of named entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A tenant
    Tenant,
    /// A permission group definition
    PermissionGroup,
    /// A permission definition
    Permission,
}

impl EntityKind {
    /// Human-readable name of the entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::PermissionGroup => "permission group",
            Self::Permission => "permission",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Tenantry
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any side effect
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// Description of the violation
        message: String,
    },

    /// Another entity of the same kind already uses the name
    #[error("Duplicate {kind} name: {name}")]
    DuplicateName {
        /// Kind of entity
        kind: EntityKind,
        /// The conflicting name
        name: String,
    },

    /// A stale cache entry could not be removed
    #[error("Failed to invalidate cache entry '{key}': {message}")]
    CacheInvalidation {
        /// Cache key that could not be removed
        key: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Store-level uniqueness violation
    #[error("Unique constraint violated for name: {name}")]
    UniqueConstraint {
        /// The name that collided
        name: String,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name<S: Into<String>>(kind: EntityKind, name: S) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a store-level unique constraint error
    pub fn unique_constraint<S: Into<String>>(name: S) -> Self {
        Self::UniqueConstraint { name: name.into() }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Cache error creation methods
impl Error {
    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error with source
    pub fn cache_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Cache {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a failed cache removal for `key`
    pub fn cache_invalidation<K: Into<String>>(key: K, source: Error) -> Self {
        Self::CacheInvalidation {
            key: key.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Machine-readable identification
impl Error {
    /// Stable identifier of the error, independent of the display text
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Tenantry:Validation",
            Self::DuplicateName { kind, .. } => match kind {
                EntityKind::Tenant => "TenantManagement:DuplicateTenantName",
                EntityKind::PermissionGroup => "PermissionManagement:DuplicatePermissionGroupName",
                EntityKind::Permission => "PermissionManagement:DuplicatePermissionName",
            },
            Self::CacheInvalidation { .. } => "Tenantry:CacheInvalidationFailure",
            Self::NotFound { .. } => "Tenantry:NotFound",
            Self::UniqueConstraint { .. } => "Tenantry:UniqueConstraintViolation",
            Self::Cache { .. } => "Tenantry:Cache",
            Self::Json { .. } => "Tenantry:Json",
            Self::Configuration { .. } => "Tenantry:Configuration",
            Self::Infrastructure { .. } => "Tenantry:Infrastructure",
            Self::Internal { .. } => "Tenantry:Internal",
        }
    }

    /// Structured data attached to the error
    pub fn data(&self) -> BTreeMap<&'static str, String> {
        let mut data = BTreeMap::new();
        match self {
            Self::Validation { field, .. } => {
                data.insert("Field", (*field).to_string());
            }
            Self::DuplicateName { name, .. } | Self::UniqueConstraint { name } => {
                data.insert("Name", name.clone());
            }
            Self::CacheInvalidation { key, .. } => {
                data.insert("Key", key.clone());
            }
            Self::NotFound { resource } => {
                data.insert("Resource", resource.clone());
            }
            _ => {}
        }
        data
    }

    /// Check whether this is a duplicate name error
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }
}
