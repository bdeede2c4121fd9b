//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use treenote::config::{local_config_path, Settings};
use treenote::domain::GlyphStyle;

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "glyphs = \"ascii\"\ncomment_prefix = \"//\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.glyphs, GlyphStyle::Ascii);
    assert_eq!(settings.comment_prefix, "//");
}

#[test]
fn given_partial_local_config_when_load_then_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "glyphs = \"rounded\"\n").unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.glyphs, GlyphStyle::Rounded);
    assert_eq!(settings.comment_prefix, "#");
}

#[test]
fn given_invalid_local_config_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "glyphs = \"sparkly\"\n").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"));
}
