//! Configuration layering: defaults, user file, explicit file, environment.

use super::support::with_env;
use navtree::config::{default_column_attributes, ColumnAttribute, ConfigLoader};
use navtree::tooling::CliContext;
use navtree::view::ColumnType;
use std::fs;
use tempfile::TempDir;

fn write_global(xdg: &TempDir, text: &str) {
    let dir = xdg.path().join("navtree");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), text).unwrap();
}

#[test]
fn defaults_without_any_file() {
    let xdg = TempDir::new().unwrap();
    let xdg_path = xdg.path().to_str().unwrap().to_string();
    let (config, global) = with_env(&[("XDG_CONFIG_HOME", xdg_path.as_str())], || {
        (ConfigLoader::load(None), ConfigLoader::global_config_path())
    });
    assert_eq!(config.unwrap(), ConfigLoader::default());
    assert_eq!(global.unwrap(), xdg.path().join("navtree").join("config.toml"));
}

#[test]
fn precedence_global_then_explicit_then_env() {
    let xdg = TempDir::new().unwrap();
    write_global(
        &xdg,
        r#"
        [navigation]
        sort_column = "item_count"
        show_percentage = false
        "#,
    );
    let explicit_dir = TempDir::new().unwrap();
    let explicit = explicit_dir.path().join("nav.toml");
    fs::write(
        &explicit,
        r#"
        [navigation]
        sort_column = "folder_name"

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    let xdg_path = xdg.path().to_str().unwrap().to_string();
    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", xdg_path.as_str()),
            ("NAVTREE__NAVIGATION__SORT_ASCENDING", "true"),
        ],
        || ConfigLoader::load(Some(&explicit)),
    )
    .unwrap();

    assert_eq!(config.navigation.sort_column, ColumnType::FolderName);
    assert!(!config.navigation.show_percentage);
    assert!(config.navigation.sort_ascending);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn load_from_file_ignores_global_file() {
    let xdg = TempDir::new().unwrap();
    write_global(&xdg, "[navigation]\nshow_percentage = false\n");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("only.toml");
    fs::write(&path, "[navigation]\nsort_ascending = true\n").unwrap();

    let xdg_path = xdg.path().to_str().unwrap().to_string();
    let config = with_env(&[("XDG_CONFIG_HOME", xdg_path.as_str())], || {
        ConfigLoader::load_from_file(&path)
    })
    .unwrap();
    assert!(config.navigation.show_percentage);
    assert!(config.navigation.sort_ascending);
}

#[test]
fn columns_are_made_consistent_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("columns.yaml");
    fs::write(
        &path,
        r#"
navigation:
  columns:
    - { column: bytes, offset: 80, stretch: 0, visible: false }
    - { column: bytes, offset: 10, stretch: 0, visible: true }
    - { column: folder_name, offset: -50, stretch: 1, visible: false }
"#,
    )
    .unwrap();

    let config = with_env(&[], || ConfigLoader::load_from_file(&path)).unwrap();
    assert_eq!(
        config.navigation.columns,
        vec![
            ColumnAttribute::new(ColumnType::Bytes, 80, 0, false),
            ColumnAttribute::new(ColumnType::FolderName, -50, 1, true),
            default_column_attributes()[1],
        ]
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let xdg = TempDir::new().unwrap();
    let xdg_path = xdg.path().to_str().unwrap().to_string();
    let missing = xdg.path().join("missing.toml");
    let result = with_env(&[("XDG_CONFIG_HOME", xdg_path.as_str())], || {
        CliContext::new(Some(missing.clone()))
    });
    assert!(result.is_err());
}

#[test]
fn invalid_value_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[navigation]\nsort_column = \"colour\"\n").unwrap();
    let result = with_env(&[], || ConfigLoader::load_from_file(&path));
    assert!(matches!(result, Err(navtree::ApiError::ConfigError(_))));
}
