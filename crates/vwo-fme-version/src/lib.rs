//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Umbrella entry point for the VWO FME module's public surface."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
#![warn(missing_docs)]

//! Umbrella crate for the VWO FME module.
//!
//! Exposes the build's version number and version string as process-wide
//! constants, the C symbols native hosts link against, and the SDK identity
//! reported alongside them. Both values are fixed by `build.rs`; reading them
//! never fails.

use once_cell::sync::Lazy;

pub mod build_info;
mod error;
pub mod ffi;
pub mod sdk_meta;
pub mod tag;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/version.rs"));
}

pub use build_info::VersionInfo;
pub use error::MetaError;
pub use generated::{VERSION_CSTR, VERSION_CSTR_LEN, VERSION_NUMBER, VERSION_STRING};
pub use sdk_meta::{SdkMeta, SdkMetaOverrides, SdkProps};
pub use tag::{TagError, VersionTag};

const _: () = assert!(!VERSION_STRING.is_empty(), "version string must not be empty");
const _: () = assert!(
    VERSION_CSTR_LEN == VERSION_STRING.len() + 1,
    "C string must be the version string plus a terminator"
);
const _: () = assert!(
    VERSION_NUMBER >= 0.0,
    "version number must be non-negative"
);

static CURRENT_TAG: Lazy<VersionTag> = Lazy::new(|| {
    VersionTag::parse(VERSION_STRING).expect("version string validated by build script")
});

/// Numeric version identifier of the loaded module.
#[inline]
pub fn version_number() -> f64 {
    VERSION_NUMBER
}

/// Human-readable version identifier of the loaded module.
#[inline]
pub fn version_string() -> &'static str {
    VERSION_STRING
}

/// [`version_string`] as raw bytes, without a terminator.
#[inline]
pub fn version_bytes() -> &'static [u8] {
    VERSION_STRING.as_bytes()
}

/// Parsed form of [`VERSION_STRING`].
pub fn current_tag() -> &'static VersionTag {
    &CURRENT_TAG
}
