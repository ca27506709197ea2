//! ---
//! fme_section: "04-cli"
//! fme_subsection: "binary"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Control CLI for inspecting VWO FME version metadata."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;
use vwo_fme_config::{FmeConfig, LoadedFmeConfig, DEFAULT_CANDIDATES};
use vwo_fme_logging::{self as logging, fme_info, LogContext};
use vwo_fme_version::sdk_meta::{self, SdkMeta};
use vwo_fme_version::SdkProps;

use crate::OutputFormat;

const SERVICE_NAME: &str = "vwo-fmectl";

/// Options for `meta`.
#[derive(Debug, Args)]
pub struct MetaArgs {
    /// Configuration file carrying `[sdk]` overrides.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct MetaReport<'a> {
    #[serde(flatten)]
    meta: &'a SdkMeta,
    builtin: bool,
    props: SdkProps,
    query: String,
}

pub fn run(args: &MetaArgs) -> Result<()> {
    let config = match load_config(args)? {
        Some(LoadedFmeConfig { config, source }) => {
            logging::init_tracing(SERVICE_NAME, &config.logging).with_context(|| {
                format!(
                    "initialising logging in {}",
                    config.logging.directory.display()
                )
            })?;
            debug!(source = %source.display(), "using configuration");
            config
        }
        None => {
            logging::init();
            debug!("no configuration found; using builtin identity");
            FmeConfig::default()
        }
    };
    let meta = sdk_meta::install(config.sdk_meta()?)?;
    fme_info!(
        context = LogContext::from_meta(meta).with_component("meta"),
        "sdk identity installed"
    );

    let report = MetaReport {
        meta,
        builtin: meta.is_builtin(),
        props: meta.props(),
        query: meta
            .query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&"),
    };
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("SDK name: {}", report.meta.name);
            println!("SDK version: {}", report.meta.version);
            println!("Platform: {}", report.meta.platform);
            println!("Builtin: {}", report.builtin);
            println!("Props: {}", serde_json::to_string(&report.props)?);
            println!("Query: {}", report.query);
        }
    }
    Ok(())
}

/// An explicit `--config` or `VWO_FME_CONFIG` must load; otherwise the
/// default candidates are optional.
fn load_config(args: &MetaArgs) -> Result<Option<LoadedFmeConfig>> {
    if let Some(path) = &args.config {
        return FmeConfig::load_with_source(&[path]).map(Some);
    }
    let pinned = std::env::var(FmeConfig::ENV_CONFIG_PATH)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false);
    if !pinned && !DEFAULT_CANDIDATES.iter().any(|path| Path::new(path).exists()) {
        return Ok(None);
    }
    FmeConfig::load_with_source(&DEFAULT_CANDIDATES).map(Some)
}
