#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rewardscope_agent::config::{self, Platform};
use rewardscope_core::RewardscopeError;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
telemetry:
  platfrom: mobile # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RewardscopeError::InvalidConfig(_)));
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.agent.listen, "127.0.0.1:9090");
    assert_eq!(cfg.telemetry.platform, Platform::Desktop);
    assert_eq!(cfg.telemetry.conversion_window_secs, 60);
    assert_eq!(cfg.telemetry.report_interval_secs, 86400);
}

#[test]
fn mobile_platform_parses() {
    let ok = r#"
version: 1
telemetry:
  platform: mobile
  report_interval_secs: 3600
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.telemetry.platform, Platform::Mobile);
    assert_eq!(cfg.telemetry.report_interval_secs, 3600);
}

#[test]
fn rejects_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RewardscopeError::UnsupportedVersion));
}

#[test]
fn rejects_out_of_range_window() {
    let bad = r#"
version: 1
telemetry:
  conversion_window_secs: 5
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, RewardscopeError::InvalidConfig(_)));
}
