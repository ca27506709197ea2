//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Build provenance captured alongside the version constants."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use serde::Serialize;

use crate::{VERSION_NUMBER, VERSION_STRING};

const UNKNOWN: &str = "UNKNOWN";

/// Compile-time version metadata captured via `vergen`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionInfo {
    /// Version string of the build.
    pub semver: String,
    /// Version number of the build.
    pub number: f64,
    /// Git commit hash captured at build time.
    pub git_sha: String,
    /// Build timestamp from the compilation environment.
    pub build_timestamp: String,
    /// Target triple used for the build.
    pub target: String,
    /// Cargo profile used during compilation.
    pub profile: String,
}

impl VersionInfo {
    /// Construct a new [`VersionInfo`] instance using environment metadata.
    #[must_use]
    pub fn current() -> Self {
        Self {
            semver: VERSION_STRING.to_owned(),
            number: VERSION_NUMBER,
            git_sha: option_env!("VERGEN_GIT_SHA").unwrap_or(UNKNOWN).to_owned(),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            target: option_env!("VERGEN_CARGO_TARGET_TRIPLE")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            profile: option_env!("VWO_FME_BUILD_PROFILE")
                .unwrap_or(UNKNOWN)
                .to_owned(),
        }
    }

    /// Returns a concise CLI string combining version string and git hash.
    #[must_use]
    pub fn cli_string(&self) -> String {
        format!("{} ({})", self.semver, self.git_sha)
    }

    /// Human readable banner used in logging surfaces.
    #[must_use]
    pub fn banner(&self) -> String {
        format!("VWO FME v{} (git {})", self.semver, self.git_sha)
    }

    /// Extended string containing build metadata suitable for `--version` flags.
    #[must_use]
    pub fn extended(&self) -> String {
        format!(
            "{banner}\nVersion number: {number}\nBuilt: {built}\nTarget: {target}\nProfile: {profile}",
            banner = self.banner(),
            number = self.number,
            built = self.build_timestamp,
            target = self.target,
            profile = self.profile
        )
    }
}

/// Helper for Clap commands to print the extended version string.
#[must_use]
pub fn clap_long_version() -> String {
    VersionInfo::current().extended()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_contains_both_identifiers() {
        let info = VersionInfo::current();
        let extended = info.extended();
        assert!(extended.contains(&info.semver));
        assert!(extended.contains(&format!("Version number: {}", VERSION_NUMBER)));
        assert!(extended.starts_with("VWO FME v"));
    }

    #[test]
    fn missing_metadata_reads_unknown() {
        let info = VersionInfo {
            semver: "2.3.1".into(),
            number: 2.3,
            git_sha: UNKNOWN.into(),
            build_timestamp: UNKNOWN.into(),
            target: UNKNOWN.into(),
            profile: UNKNOWN.into(),
        };
        assert_eq!(info.cli_string(), "2.3.1 (UNKNOWN)");
        assert_eq!(info.banner(), "VWO FME v2.3.1 (git UNKNOWN)");
    }
}
