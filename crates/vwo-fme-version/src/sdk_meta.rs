//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "SDK identity reported with requests and event payloads."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
//! SDK identity: the name and version an SDK reports about itself.
//!
//! Wrapper SDKs built on this module may report their own name and version
//! instead of the builtin ones. The identity is installed once per process
//! and is read-only afterwards.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::tag::VersionTag;
use crate::VERSION_STRING;

/// Builtin SDK name.
pub const SDK_NAME: &str = "vwo-fme-rust-sdk";

/// Platform the module was compiled for.
pub const PLATFORM: &str = std::env::consts::OS;

/// Query parameter carrying the SDK name.
pub const QUERY_SDK_NAME: &str = "sn";

/// Query parameter carrying the SDK version.
pub const QUERY_SDK_VERSION: &str = "sv";

static INSTALLED: OnceCell<SdkMeta> = OnceCell::new();

/// Optional replacements for the builtin SDK identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkMetaOverrides {
    /// Replacement SDK name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement SDK version; must parse as a [`VersionTag`].
    #[serde(default)]
    pub version: Option<String>,
}

impl SdkMetaOverrides {
    /// Override only the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: None,
        }
    }

    /// Add a version override.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none()
    }
}

/// The identity an SDK reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkMeta {
    /// SDK name.
    pub name: String,
    /// SDK version.
    pub version: String,
    /// Target platform.
    pub platform: String,
}

/// Identity fields as embedded in outgoing payload properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkProps {
    /// SDK name.
    #[serde(rename = "vwo_sdkName")]
    pub sdk_name: String,
    /// SDK version.
    #[serde(rename = "vwo_sdkVersion")]
    pub sdk_version: String,
}

impl SdkMeta {
    /// Identity built from [`SDK_NAME`] and [`VERSION_STRING`].
    pub fn builtin() -> Self {
        Self {
            name: SDK_NAME.to_owned(),
            version: VERSION_STRING.to_owned(),
            platform: PLATFORM.to_owned(),
        }
    }

    /// Builtin identity with `overrides` applied.
    pub fn with_overrides(overrides: &SdkMetaOverrides) -> Result<Self, MetaError> {
        let mut meta = Self::builtin();
        if let Some(name) = &overrides.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(MetaError::BlankOverride { field: "name" });
            }
            meta.name = name.to_owned();
        }
        if let Some(version) = &overrides.version {
            if version.trim().is_empty() {
                return Err(MetaError::BlankOverride { field: "version" });
            }
            meta.version = VersionTag::parse(version)?.as_str().to_owned();
        }
        Ok(meta)
    }

    /// Payload properties (`vwo_sdkName`, `vwo_sdkVersion`).
    pub fn props(&self) -> SdkProps {
        SdkProps {
            sdk_name: self.name.clone(),
            sdk_version: self.version.clone(),
        }
    }

    /// Request query pairs (`sn`, `sv`).
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (QUERY_SDK_NAME, self.name.as_str()),
            (QUERY_SDK_VERSION, self.version.as_str()),
        ]
    }

    /// True when this identity is the builtin one.
    pub fn is_builtin(&self) -> bool {
        self.name == SDK_NAME && self.version == VERSION_STRING
    }
}

impl Default for SdkMeta {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Install the process-wide identity. Fails if one is already installed,
/// including the builtin one installed implicitly by [`current`].
pub fn install(meta: SdkMeta) -> Result<&'static SdkMeta, MetaError> {
    let mut candidate = Some(meta);
    let installed = INSTALLED.get_or_init(|| candidate.take().unwrap_or_default());
    match candidate {
        None => Ok(installed),
        Some(_) => Err(MetaError::AlreadyInstalled {
            name: installed.name.clone(),
            version: installed.version.clone(),
        }),
    }
}

/// The process-wide identity, falling back to the builtin one.
pub fn current() -> &'static SdkMeta {
    INSTALLED.get_or_init(SdkMeta::builtin)
}

/// The installed identity, if any.
pub fn installed() -> Option<&'static SdkMeta> {
    INSTALLED.get()
}
