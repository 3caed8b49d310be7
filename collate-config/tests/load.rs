use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use collate_config::{ComparatorConfig, ConfigSource};
use collate_core::ObjectComparator;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_toml_and_json_by_extension() {
    let dir = TempDir::new().unwrap();
    let toml_path = write(
        dir.path(),
        "sorting.toml",
        "[presets]\nby_rank = \"rank,desc\"\n",
    );
    let json_path = write(
        dir.path(),
        "sorting.json",
        r#"{"defaults":{"ignore_case":false},"presets":{"by_name":"name"}}"#,
    );

    let from_toml = ComparatorConfig::load_from_file(&toml_path).unwrap();
    assert_eq!(from_toml.presets["by_rank"], "rank,desc");

    let from_json = ComparatorConfig::load_from_file(&json_path).unwrap();
    assert!(!from_json.defaults.ignore_case);
    let by_name = from_json.preset("by_name").unwrap();
    assert!(!by_name.fields()[0].is_ignore_case());
}

#[test]
fn unknown_extension_tries_both_formats() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "sorting.conf", r#"{"presets":{"p":"x"}}"#);
    let config = ComparatorConfig::load_from_file(&path).unwrap();
    assert_eq!(config.presets["p"], "x");
}

#[test]
fn invalid_files_name_the_path() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "broken.toml", "presets = [");
    let err = ComparatorConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));

    let missing = dir.path().join("missing.toml");
    let err = ComparatorConfig::load_from_file(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("cannot read comparator config"));
}

#[test]
fn default_files_are_discovered_below_root() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "config/collate.toml",
        "[presets]\nnested = \"a|b\"\n",
    );

    let (config, source) = ComparatorConfig::load_with(|_| None, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.preset("nested").unwrap().len(), 2);

    let top = write(dir.path(), "collate.json", r#"{"presets":{"top":"c"}}"#);
    let (config, source) = ComparatorConfig::load_with(|_| None, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(top));
    assert!(config.presets.contains_key("top"));
}

#[test]
fn path_variable_wins_over_inline_json() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "explicit.toml", "[presets]\nfile = \"x\"\n");
    let path_str = path.display().to_string();

    let lookup = |key: &str| match key {
        "COLLATE_CONFIG_PATH" => Some(path_str.clone()),
        "COLLATE_CONFIG_JSON" => Some(r#"{"presets":{"inline":"y"}}"#.to_string()),
        _ => None,
    };
    let (config, source) = ComparatorConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvPath(path));
    assert!(config.presets.contains_key("file"));

    let blank_path = |key: &str| match key {
        "COLLATE_CONFIG_PATH" => Some("  ".to_string()),
        "COLLATE_CONFIG_JSON" => Some(r#"{"presets":{"inline":"y"}}"#.to_string()),
        _ => None,
    };
    let (config, source) = ComparatorConfig::load_with(blank_path, dir.path()).unwrap();
    assert!(matches!(source, ConfigSource::EnvInline(_)));
    assert!(config.presets.contains_key("inline"));
}

#[test]
fn preset_chains_sort_documents() {
    let raw = "[defaults]\nasc = false\n\n[presets]\nleaderboard = \"score|name,asc\"\n";
    let config = ComparatorConfig::parse_from_str(raw).unwrap();
    let chain = config.chain("leaderboard").unwrap();

    let mut players = vec![
        serde_json::json!({ "name": "b", "score": 10 }),
        serde_json::json!({ "name": "a", "score": 10 }),
        serde_json::json!({ "name": "c", "score": 30 }),
    ];
    chain.sort(&mut players).unwrap();
    let names: Vec<_> = players.iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, ["c", "a", "b"]);
    assert_eq!(
        chain.compare(&players[0], &players[1]).unwrap(),
        Ordering::Less
    );
}

#[test]
fn presets_without_fields_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "collate.toml", "[presets]\nempty = \"  \"\n");

    let err = ComparatorConfig::load_with(|_| None, dir.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("rejected config from"));
    assert!(message.contains("sort preset 'empty' has no fields"));
    assert!(ComparatorConfig::load_from_file(&path).is_ok());
}
