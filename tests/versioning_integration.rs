//! ---
//! fme_section: "05-testing-qa"
//! fme_subsection: "integration-tests"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Integration and validation tests for the VWO FME metadata stack."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use std::thread;

use vwo_fme_config::FmeConfig;
use vwo_fme_logging::LogContext;
use vwo_fme_version::{
    current_tag, version_number, version_string, SdkMeta, VersionInfo, VersionTag,
    VERSION_NUMBER, VERSION_STRING,
};

#[test]
fn tagged_build_scenario_derives_number_and_keeps_string() {
    let tag = VersionTag::parse("2.3.1").expect("valid tag");
    assert_eq!(tag.derived_number(), 2.3);
    assert_eq!(tag.as_str().as_bytes(), b"2.3.1");
    assert!(tag.is_consistent_with(tag.derived_number()));
}

#[test]
fn concurrent_reads_are_identical() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (0..1_000)
                    .map(|_| (version_number().to_bits(), version_string()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        for (bits, string) in handle.join().expect("reader thread") {
            assert_eq!(bits, VERSION_NUMBER.to_bits());
            assert_eq!(string, VERSION_STRING);
        }
    }
}

#[test]
fn build_info_serialises_version_identifiers() {
    let info = VersionInfo::current();
    let value = serde_json::to_value(&info).expect("serialize build info");
    assert_eq!(value["semver"], VERSION_STRING);
    assert_eq!(value["number"].as_f64(), Some(VERSION_NUMBER));
    for key in ["git_sha", "build_timestamp", "target", "profile"] {
        assert!(value[key].as_str().is_some_and(|v| !v.is_empty()), "{key}");
    }
}

#[test]
fn empty_config_resolves_builtin_identity() {
    let config: FmeConfig = "".parse().expect("empty config");
    let meta = config.sdk_meta().expect("builtin identity");
    assert_eq!(meta, SdkMeta::builtin());
    assert_eq!(meta.version, current_tag().as_str());

    let ctx = LogContext::from_meta(&meta);
    assert_eq!(ctx.version, Some(VERSION_STRING));
}

#[test]
fn release_ordering_matches_dotted_comparison() {
    let older = VersionTag::parse("17.2").unwrap();
    let newer = VersionTag::parse("17.2.1").unwrap();
    assert!(older < newer);
    assert!(newer > older);
    assert_eq!(older, VersionTag::parse("17.2").unwrap());
    assert!(VersionTag::parse("17.1").unwrap() < older);
    assert!(older.derived_number() <= newer.derived_number());
}
