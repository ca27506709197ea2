//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Error types for SDK identity resolution."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use thiserror::Error;

use crate::tag::TagError;

/// Failures while resolving or installing the SDK identity.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetaError {
    /// An override was supplied but blank.
    #[error("sdk {field} override must not be blank")]
    BlankOverride {
        /// Which override (`name` or `version`).
        field: &'static str,
    },
    /// The version override is not a valid tag.
    #[error("sdk version override is invalid: {0}")]
    InvalidVersion(#[from] TagError),
    /// The process-wide identity was already set.
    #[error("sdk identity already installed as {name} {version}")]
    AlreadyInstalled {
        /// Installed SDK name.
        name: String,
        /// Installed SDK version.
        version: String,
    },
}
