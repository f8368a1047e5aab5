// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use saoke::cli;
use saoke::commands::config::{apply_set, handle};
use saoke::config::{Settings, load_from, save_to};
use saoke::models::PageSize;
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let s = load_from(&dir.path().join("nope.json")).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.page_size, PageSize::Twenty);
    assert_eq!(s.timeout().as_secs(), 15);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"page_size": 50}"#).unwrap();
    let s = load_from(&path).unwrap();
    assert_eq!(s.page_size, PageSize::Fifty);
    assert_eq!(s.base_url, Settings::default().base_url);
}

#[test]
fn unsupported_page_size_in_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"page_size": 30}"#).unwrap();
    let err = load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn flag_beats_env_beats_file() {
    let file = Settings {
        base_url: "http://file".into(),
        ..Settings::default()
    };
    assert_eq!(
        file.clone()
            .with_overrides(Some("http://flag"), Some("http://env"))
            .base_url,
        "http://flag"
    );
    assert_eq!(
        file.clone().with_overrides(None, Some("http://env")).base_url,
        "http://env"
    );
    assert_eq!(file.clone().with_overrides(None, Some("  ")).base_url, "http://file");
    assert_eq!(file.with_overrides(None, None).base_url, "http://file");
}

#[test]
fn config_set_persists_changes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let matches = cli::build_cli().get_matches_from([
        "saoke",
        "config",
        "set",
        "--url",
        " https://saoke.example ",
        "--page-size",
        "100",
        "--timeout-secs",
        "30",
    ]);
    let Some(("config", sub)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    handle(&path, sub).unwrap();

    let saved = load_from(&path).unwrap();
    assert_eq!(saved.base_url, "https://saoke.example");
    assert_eq!(saved.page_size, PageSize::Hundred);
    assert_eq!(saved.timeout_secs, 30);
}

#[test]
fn config_set_leaves_unmentioned_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let start = Settings {
        base_url: "http://kept".into(),
        ..Settings::default()
    };
    save_to(&path, &start).unwrap();

    let matches =
        cli::build_cli().get_matches_from(["saoke", "config", "set", "--page-size", "50"]);
    let Some(("config", cfg)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    let Some(("set", set)) = cfg.subcommand() else {
        panic!("set not parsed");
    };
    let updated = apply_set(load_from(&path).unwrap(), set).unwrap();
    assert_eq!(updated.base_url, "http://kept");
    assert_eq!(updated.page_size, PageSize::Fifty);
}
