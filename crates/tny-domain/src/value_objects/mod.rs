//! Value Objects
//!
//! Immutable-by-value types shared by entities and records.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ExtraProperties`] | Explicit string-to-string property bag |
//! | [`LocalizableString`] | Display name, fixed or resolved through a resource |
//! | [`MultiTenancySide`] | Which side of a multi-tenant system a permission applies to |
//! | [`NameComparison`] / [`TenantNamePolicy`] | Name validation and matching rules |

pub(crate) mod escape;
pub mod extra_properties;
pub mod localizable;
pub mod multi_tenancy;
pub mod name_policy;

pub use extra_properties::ExtraProperties;
pub use localizable::LocalizableString;
pub use multi_tenancy::MultiTenancySide;
pub use name_policy::{NameComparison, TenantNamePolicy};
