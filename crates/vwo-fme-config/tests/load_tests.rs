//! ---
//! fme_section: "03-configuration"
//! fme_subsection: "integration-tests"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "File-based loading tests for the configuration crate."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use std::fs;

use vwo_fme_config::FmeConfig;

// Single test so the VWO_FME_CONFIG mutations cannot race other tests.
#[test]
fn load_resolves_env_then_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let first = dir.path().join("first.toml");
    let pinned = dir.path().join("pinned.toml");
    fs::write(&first, "[sdk]\nname = \"from-candidate\"\n").unwrap();
    fs::write(&pinned, "[sdk]\nname = \"from-env\"\n").unwrap();

    std::env::remove_var(FmeConfig::ENV_CONFIG_PATH);
    let loaded = FmeConfig::load_with_source(&[&missing, &first]).unwrap();
    assert_eq!(loaded.source, first);
    assert_eq!(loaded.config.sdk.name.as_deref(), Some("from-candidate"));

    let err = FmeConfig::load(&[&missing]).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));

    std::env::set_var(FmeConfig::ENV_CONFIG_PATH, &pinned);
    let loaded = FmeConfig::load_with_source(&[&first]).unwrap();
    assert_eq!(loaded.source, pinned);
    assert_eq!(loaded.config.sdk_meta().unwrap().name, "from-env");

    std::env::set_var(FmeConfig::ENV_CONFIG_PATH, "   ");
    let loaded = FmeConfig::load_with_source(&[&first]).unwrap();
    assert_eq!(loaded.source, first);

    fs::write(&pinned, "[sdk]\nversion = \"\"\n").unwrap();
    std::env::set_var(FmeConfig::ENV_CONFIG_PATH, &pinned);
    let err = FmeConfig::load(&[&first]).unwrap_err();
    assert!(format!("{err:#}").contains("pinned.toml"));

    std::env::remove_var(FmeConfig::ENV_CONFIG_PATH);
}
