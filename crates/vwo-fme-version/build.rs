//! ---
//! fme_section: "01-version-metadata"
//! fme_subsection: "build"
//! fme_type: "source"
//! fme_scope: "build"
//! fme_description: "Derives and validates the build's version constants."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use std::env::{self, VarError};
use std::fs;
use std::path::PathBuf;

use vergen::EmitBuilder;

#[allow(dead_code)]
#[path = "src/tag.rs"]
mod tag;

use tag::{VersionTag, NUMBER_OVERRIDE_ENV, STRING_OVERRIDE_ENV};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git metadata is optional: outside a checkout vergen emits placeholders.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .emit()?;

    let string_override = optional_env(STRING_OVERRIDE_ENV)?;
    let number_override = optional_env(NUMBER_OVERRIDE_ENV)?;
    let package_version = env::var("CARGO_PKG_VERSION")?;
    let (tag, number) = tag::resolve(
        string_override.as_deref(),
        &package_version,
        number_override.as_deref(),
    )
    .map_err(|err| {
        format!(
            "resolving version from {STRING_OVERRIDE_ENV}/CARGO_PKG_VERSION \
             and {NUMBER_OVERRIDE_ENV}: {err}"
        )
    })?;

    let out = PathBuf::from(env::var("OUT_DIR")?).join("version.rs");
    fs::write(&out, render(&tag, number))?;

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_owned());
    println!("cargo:rustc-env=VWO_FME_BUILD_PROFILE={profile}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/tag.rs");
    println!("cargo:rerun-if-env-changed={STRING_OVERRIDE_ENV}");
    println!("cargo:rerun-if-env-changed={NUMBER_OVERRIDE_ENV}");
    Ok(())
}

fn optional_env(name: &str) -> Result<Option<String>, String> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(format!("{name}: {err}")),
    }
}

fn render(tag: &VersionTag, number: f64) -> String {
    let string = tag.as_str();
    let escaped: String = string.escape_default().collect();
    format!(
        "// @generated by build.rs from tag {string:?}\n\
         \n\
         /// Numeric version identifier of this build.\n\
         pub const VERSION_NUMBER: f64 = {number:?};\n\
         \n\
         /// Human-readable version identifier of this build.\n\
         pub const VERSION_STRING: &str = {string:?};\n\
         \n\
         /// Length of [`VERSION_CSTR`], terminator included.\n\
         pub const VERSION_CSTR_LEN: usize = {len};\n\
         \n\
         /// [`VERSION_STRING`] followed by a NUL byte.\n\
         pub const VERSION_CSTR: [u8; VERSION_CSTR_LEN] = *b\"{escaped}\\0\";\n",
        len = string.len() + 1,
    )
}
