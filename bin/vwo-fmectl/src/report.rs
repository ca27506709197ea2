//! ---
//! fme_section: "04-cli"
//! fme_subsection: "binary"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Control CLI for inspecting VWO FME version metadata."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use vwo_fme_logging::{fme_info, log_system_event, LogContext, SystemEventOutcome};
use vwo_fme_version::{self as version, ffi, VersionInfo, VersionTag};

use crate::OutputFormat;

/// Options for `show`.
#[derive(Debug, Default, Args)]
pub struct ShowArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options for `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Oldest acceptable version tag, e.g. `1.2` or `v1.2.0`.
    #[arg(long, value_name = "TAG")]
    pub minimum: VersionTag,
}

#[derive(Debug, Serialize)]
struct VersionReport {
    version_number: f64,
    version_string: &'static str,
    build: VersionInfo,
}

pub fn show(args: &ShowArgs) -> Result<()> {
    let report = VersionReport {
        version_number: version::version_number(),
        version_string: version::version_string(),
        build: VersionInfo::current(),
    };
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("Version number: {}", report.version_number);
            println!("Version string: {}", report.version_string);
            println!("Git: {}", report.build.git_sha);
            println!("Built: {}", report.build.build_timestamp);
            println!("Target: {}", report.build.target);
            println!("Profile: {}", report.build.profile);
        }
    }
    Ok(())
}

pub fn check(args: &CheckArgs) -> Result<()> {
    let current = version::current_tag();
    let ctx = LogContext::new()
        .with_version(current.as_str())
        .with_component("check");
    fme_info!(context = ctx, "comparing against minimum {}", args.minimum);
    if current < &args.minimum {
        bail!(
            "running version {} is older than required minimum {}",
            current,
            args.minimum
        );
    }
    println!("version {} satisfies minimum {}", current, args.minimum);
    Ok(())
}

pub fn verify() -> Result<()> {
    let checks = run_checks();
    for (name, passed) in &checks {
        println!("{} {}", if *passed { "ok  " } else { "FAIL" }, name);
    }
    let failed = checks.iter().filter(|(_, passed)| !passed).count();
    let ctx = LogContext::new()
        .with_version(version::version_string())
        .with_component("verify");
    if failed > 0 {
        log_system_event(
            Some(&ctx),
            "version.verify",
            "version metadata inconsistent",
            SystemEventOutcome::Fault,
        );
        bail!("{failed} version metadata check(s) failed");
    }
    log_system_event(
        Some(&ctx),
        "version.verify",
        "version metadata consistent",
        SystemEventOutcome::Success,
    );
    println!(
        "version metadata consistent: {} ({})",
        version::version_string(),
        version::version_number()
    );
    Ok(())
}

fn run_checks() -> Vec<(&'static str, bool)> {
    let number = version::version_number();
    let exported = &ffi::VWO_FMEVersionString[..version::VERSION_CSTR_LEN - 1];
    vec![
        (
            "version string is non-empty",
            !version::version_string().is_empty(),
        ),
        (
            "version string parses as a tag",
            VersionTag::parse(version::version_string()).is_ok(),
        ),
        (
            "version number agrees with the tag's major component",
            version::current_tag().is_consistent_with(number),
        ),
        (
            "VWO_FMEVersionNumber equals the version number",
            ffi::vwo_fme_version_number().to_bits() == number.to_bits(),
        ),
        (
            "VWO_FMEVersionString equals the version string",
            exported == version::version_bytes() && ffi::VERSION_C_STR.to_bytes() == exported,
        ),
    ]
}
