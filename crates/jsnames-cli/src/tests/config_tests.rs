use clap::Parser;

use crate::args::CliArgs;
use crate::config::{parse_config, resolve_options};
use jsnames_naming::NamingMode;

#[test]
fn parses_partial_config() {
    let options = parse_config(r#"{ "prefix": "_n" }"#).expect("config should parse");
    assert_eq!(options.prefix, "_n");
    assert_eq!(options.mode, NamingMode::Mapped);
}

#[test]
fn rejects_malformed_config() {
    let err = parse_config("{ prefix: }").expect_err("invalid JSON");
    assert!(err.to_string().contains("failed to parse config JSON"));
}

#[test]
fn mode_flag_overrides_default() {
    let args = CliArgs::try_parse_from(["jsnames", "--mode", "unmapped", "app.js"])
        .expect("args should parse");
    let options = resolve_options(&args).expect("options should resolve");
    assert_eq!(options.mode, NamingMode::Unmapped);
}

#[test]
fn config_file_is_validated() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("jsnames.json");
    std::fs::write(&path, r#"{ "prefix": "1bad", "mode": "mapped" }"#).expect("write config");

    let args = CliArgs::try_parse_from([
        "jsnames",
        "--config",
        path.to_str().expect("utf-8 path"),
        "app.js",
    ])
    .expect("args should parse");
    let err = resolve_options(&args).expect_err("prefix must be rejected");
    assert!(format!("{err:#}").contains("not a valid identifier"));
}
