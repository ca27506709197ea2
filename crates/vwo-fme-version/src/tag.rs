//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Version tag parsing, numeric derivation, and ordering."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
//! Version tags as stamped on a build (`2.3.1`, `v1.2`, `1.2.0-beta.1+ios`).
//!
//! This module is also compiled into the crate's build script, so it only
//! depends on `semver` and `thiserror`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease, Version};
use thiserror::Error;

/// Upper bound on dot-separated numeric components in a tag.
pub const MAX_COMPONENTS: usize = 3;

/// Build-time variable overriding `CARGO_PKG_VERSION` as the version string.
pub const STRING_OVERRIDE_ENV: &str = "VWO_FME_VERSION_STRING";

/// Build-time variable overriding the derived version number.
pub const NUMBER_OVERRIDE_ENV: &str = "VWO_FME_VERSION_NUMBER";

/// Largest minor component whose decimal `major.minor` reading still sorts
/// above earlier releases (`1.10` would read as `1.1`).
pub const MAX_DERIVABLE_MINOR: u64 = 9;

/// Errors raised while parsing a tag or validating a number against it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TagError {
    /// The tag was empty or whitespace only.
    #[error("version tag is empty")]
    Empty,
    /// The numeric core had too many components.
    #[error("version tag '{tag}' has {count} numeric components; expected 1 to 3")]
    ComponentCount {
        /// Tag as supplied.
        tag: String,
        /// Number of components found.
        count: usize,
    },
    /// A component or identifier could not be parsed.
    #[error("invalid version tag '{tag}': {reason}")]
    Invalid {
        /// Tag as supplied.
        tag: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// A number override was not a decimal value.
    #[error("version number '{value}' is not numeric: {reason}")]
    UnparseableNumber {
        /// Value as supplied.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The number was NaN, infinite, or negative.
    #[error("version number {number} is not a finite, non-negative value")]
    InvalidNumber {
        /// Offending value.
        number: f64,
    },
    /// The number's integer part disagrees with the tag's major component.
    #[error("version number {number} does not match major component {major} of tag '{tag}'")]
    Inconsistent {
        /// Offending value.
        number: f64,
        /// Major component of the tag.
        major: u64,
        /// Tag the number was checked against.
        tag: String,
    },
    /// The number's fraction falls outside the tag's single-digit minor.
    #[error("version number {number} does not encode minor component {minor} of tag '{tag}'")]
    MinorMismatch {
        /// Offending value.
        number: f64,
        /// Minor component of the tag.
        minor: u64,
        /// Tag the number was checked against.
        tag: String,
    },
    /// The minor component is too large for `major.minor` to keep increasing.
    #[error(
        "tag '{tag}' has minor component {minor}; its derived number would not exceed \
         earlier releases, set {} explicitly",
        NUMBER_OVERRIDE_ENV
    )]
    NumberOverrideRequired {
        /// Tag as supplied.
        tag: String,
        /// Minor component of the tag.
        minor: u64,
    },
}

/// Resolve the build's tag and number.
///
/// The string override wins over `package_version`. Without a number
/// override the number is [`VersionTag::derived_number`], which is refused
/// once the minor component exceeds [`MAX_DERIVABLE_MINOR`].
pub fn resolve(
    string_override: Option<&str>,
    package_version: &str,
    number_override: Option<&str>,
) -> Result<(VersionTag, f64), TagError> {
    let tag = VersionTag::parse(string_override.unwrap_or(package_version))?;
    let number = match number_override {
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|err| TagError::UnparseableNumber {
                value: value.to_owned(),
                reason: err.to_string(),
            })?,
        None if tag.minor() > MAX_DERIVABLE_MINOR => {
            return Err(TagError::NumberOverrideRequired {
                tag: tag.as_str().to_owned(),
                minor: tag.minor(),
            })
        }
        None => tag.derived_number(),
    };
    tag.check_number(number)?;
    Ok((tag, number))
}

/// A parsed version tag.
///
/// Missing numeric components read as zero, so `17.2` and `17.2.0` compare
/// equal. Ordering follows semver precedence and ignores build metadata.
#[derive(Debug, Clone)]
pub struct VersionTag {
    raw: String,
    version: Version,
}

impl VersionTag {
    /// Parse a tag, accepting an optional leading `v` and one to three
    /// numeric components followed by optional `-pre` and `+build` parts.
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TagError::Empty);
        }
        let body = trimmed
            .strip_prefix(|c: char| c == 'v' || c == 'V')
            .unwrap_or(trimmed);

        let (rest, build) = match body.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (body, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };
        if pre == Some("") || build == Some("") {
            return Err(TagError::Invalid {
                tag: trimmed.to_owned(),
                reason: "dangling '-' or '+' separator".to_owned(),
            });
        }

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(TagError::ComponentCount {
                tag: trimmed.to_owned(),
                count: parts.len(),
            });
        }

        let mut numbers = [0u64; MAX_COMPONENTS];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.len() > 1 && part.starts_with('0') {
                return Err(TagError::Invalid {
                    tag: trimmed.to_owned(),
                    reason: format!("component '{part}' has a leading zero"),
                });
            }
            *slot = part.parse::<u64>().map_err(|err| TagError::Invalid {
                tag: trimmed.to_owned(),
                reason: format!("component '{part}': {err}"),
            })?;
        }

        let mut version = Version::new(numbers[0], numbers[1], numbers[2]);
        if let Some(pre) = pre {
            version.pre = Prerelease::new(pre).map_err(|err| TagError::Invalid {
                tag: trimmed.to_owned(),
                reason: format!("pre-release '{pre}': {err}"),
            })?;
        }
        if let Some(build) = build {
            version.build = BuildMetadata::new(build).map_err(|err| TagError::Invalid {
                tag: trimmed.to_owned(),
                reason: format!("build metadata '{build}': {err}"),
            })?;
        }

        Ok(Self {
            raw: trimmed.to_owned(),
            version,
        })
    }

    /// The tag exactly as supplied, minus surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Normalised semver view of the tag.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.version.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    /// Patch component.
    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Pre-release identifiers, empty when absent.
    pub fn pre(&self) -> &str {
        self.version.pre.as_str()
    }

    /// Build metadata, empty when absent.
    pub fn build(&self) -> &str {
        self.version.build.as_str()
    }

    /// Numeric identifier derived from the tag as the decimal `major.minor`.
    ///
    /// `2.3.1` yields `2.3`.
    pub fn derived_number(&self) -> f64 {
        format!("{}.{}", self.version.major, self.version.minor)
            .parse()
            .unwrap_or(self.version.major as f64)
    }

    /// Validate `number` against the tag: it must be finite, non-negative,
    /// and its integer part must equal the major component.
    ///
    /// For a single-digit minor the number must also fall in
    /// `[major.minor, major.minor + 0.1)`, so `2.3.1` accepts `2.3` and `2.31`
    /// but not `2.9`. Larger minors only constrain the major.
    pub fn check_number(&self, number: f64) -> Result<(), TagError> {
        if !number.is_finite() || number < 0.0 {
            return Err(TagError::InvalidNumber { number });
        }
        let Version { major, minor, .. } = self.version;
        if number.trunc() as u64 != major {
            return Err(TagError::Inconsistent {
                number,
                major,
                tag: self.raw.clone(),
            });
        }
        if minor <= MAX_DERIVABLE_MINOR {
            let ceiling = major as f64 + (minor + 1) as f64 / 10.0;
            if number < self.derived_number() || number >= ceiling {
                return Err(TagError::MinorMismatch {
                    number,
                    minor,
                    tag: self.raw.clone(),
                });
            }
        }
        Ok(())
    }

    /// Boolean form of [`VersionTag::check_number`].
    pub fn is_consistent_with(&self, number: f64) -> bool {
        self.check_number(number).is_ok()
    }
}

impl PartialEq for VersionTag {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionTag {}

impl PartialOrd for VersionTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp_precedence(&other.version)
    }
}

impl Hash for VersionTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.major.hash(state);
        self.version.minor.hash(state);
        self.version.patch.hash(state);
        self.version.pre.hash(state);
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
