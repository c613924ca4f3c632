//! Localizable display names
//!
//! Display names are opaque to this crate: either a fixed text or a key
//! into a localization resource resolved by the host application.
//!
//! ## Record encoding
//!
//! | Value | Encoded |
//! |-------|---------|
//! | `Fixed("Permission one")` | `Permission one` |
//! | `Fixed("L:odd")` | `F:L:odd` |
//! | `Localized { resource: "Admin", name: "Users" }` | `L:Admin,Users` |
//! | `Localized { resource: "Acme,Admin", name: "Users" }` | `L:Acme\,Admin,Users` |
//!
//! Commas and backslashes in the resource name are escaped with a
//! backslash; the name after the first unescaped comma is written as-is.

use super::escape;
use crate::constants::{FIXED_STRING_PREFIX, LOCALIZED_STRING_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

const RESOURCE_SEPARATOR: char = ',';

/// A display name that may be localized by the host application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalizableString {
    /// Text used as-is for every culture
    Fixed(String),
    /// Reference into a localization resource
    Localized {
        /// Localization resource name
        resource: String,
        /// Key within the resource
        name: String,
    },
}

impl LocalizableString {
    /// Create a fixed display name
    pub fn fixed<S: Into<String>>(text: S) -> Self {
        Self::Fixed(text.into())
    }

    /// Create a localized display name
    pub fn localized<R: Into<String>, N: Into<String>>(resource: R, name: N) -> Self {
        Self::Localized {
            resource: resource.into(),
            name: name.into(),
        }
    }

    /// Encode into the flat record form
    pub fn encode(&self) -> String {
        match self {
            Self::Fixed(text)
                if text.starts_with(FIXED_STRING_PREFIX)
                    || text.starts_with(LOCALIZED_STRING_PREFIX) =>
            {
                format!("{FIXED_STRING_PREFIX}{text}")
            }
            Self::Fixed(text) => text.clone(),
            Self::Localized { resource, name } => {
                let resource = escape::escape(resource, RESOURCE_SEPARATOR);
                format!("{LOCALIZED_STRING_PREFIX}{resource}{RESOURCE_SEPARATOR}{name}")
            }
        }
    }

    /// Decode the flat record form produced by [`encode`](Self::encode)
    ///
    /// Text that carries no recognised prefix decodes to a fixed string.
    pub fn decode(encoded: &str) -> Self {
        if let Some(rest) = encoded.strip_prefix(LOCALIZED_STRING_PREFIX) {
            if let Some((resource, name)) = escape::split_first(rest, RESOURCE_SEPARATOR) {
                return Self::localized(resource, name);
            }
        }
        match encoded.strip_prefix(FIXED_STRING_PREFIX) {
            Some(text) => Self::fixed(text),
            None => Self::fixed(encoded),
        }
    }
}

impl fmt::Display for LocalizableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(text) => f.write_str(text),
            Self::Localized { name, .. } => f.write_str(name),
        }
    }
}

impl From<&str> for LocalizableString {
    fn from(text: &str) -> Self {
        Self::fixed(text)
    }
}
