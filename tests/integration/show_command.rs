//! The `show` and `config` commands against snapshot files.

use super::support::TWO_PAIRS_JSON;
use navtree::config::NavtreeConfig;
use navtree::hierarchy::ComparisonSnapshot;
use navtree::tooling::cli::{Commands, HideFlag, OutputFormat, SortColumn};
use navtree::tooling::CliContext;
use navtree::ApiError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn show(input: PathBuf) -> Commands {
    Commands::Show {
        input,
        sync_preview: false,
        hide: Vec::new(),
        show_excluded: true,
        sort: None,
        ascending: false,
        descending: false,
        expand_depth: None,
        expand_all: false,
        format: OutputFormat::Json,
    }
}

fn write_snapshot(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn run(command: &Commands) -> serde_json::Value {
    let context = CliContext::with_config(NavtreeConfig::default());
    let output = context.execute(command).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn show_json_lists_roots() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, "cmp.json", TWO_PAIRS_JSON);

    let value = run(&show(input));
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "root");
    assert_eq!(lines[0]["display_name"], "docs");
    assert_eq!(lines[0]["bytes"], 265);
    assert_eq!(lines[1]["display_name"], "photos");
    assert_eq!(value["sort"]["column"], "bytes");
    assert_eq!(value["sort"]["ascending"], false);
}

#[test]
fn show_hide_equal_with_full_expansion() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, "cmp.json", TWO_PAIRS_JSON);
    let mut command = show(input);
    if let Commands::Show {
        hide, expand_all, ..
    } = &mut command
    {
        hide.push(HideFlag::Equal);
        *expand_all = true;
    }

    let value = run(&command);
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["status"], "expanded");
    assert_eq!(lines[1]["kind"], "directory");
    assert_eq!(lines[1]["name"], "work");
    assert_eq!(lines[1]["level"], 1);
    assert_eq!(value["filter"]["mode"], "cmp_result");
    assert_eq!(value["filter"]["equal"], false);
}

#[test]
fn show_sorted_by_name_descending() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, "cmp.json", TWO_PAIRS_JSON);
    let mut command = show(input);
    if let Commands::Show {
        sort, descending, ..
    } = &mut command
    {
        *sort = Some(SortColumn::Name);
        *descending = true;
    }

    let value = run(&command);
    assert_eq!(value["lines"][0]["display_name"], "photos");
    assert_eq!(value["sort"]["column"], "folder_name");
}

#[test]
fn yaml_and_json_snapshots_agree() {
    let dir = TempDir::new().unwrap();
    let snapshot: ComparisonSnapshot = serde_json::from_str(TWO_PAIRS_JSON).unwrap();
    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    let json_input = write_snapshot(&dir, "cmp.json", TWO_PAIRS_JSON);
    let yaml_input = write_snapshot(&dir, "cmp.yaml", &yaml);

    assert_eq!(run(&show(json_input)), run(&show(yaml_input)));
}

#[test]
fn show_text_output_renders_table() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, "cmp.json", TWO_PAIRS_JSON);
    let mut command = show(input);
    if let Commands::Show { format, .. } = &mut command {
        *format = OutputFormat::Text;
    }

    let context = CliContext::with_config(NavtreeConfig::default());
    let text = context.execute(&command).unwrap();
    assert!(text.contains("docs"));
    assert!(text.contains("photos"));
    assert!(text.contains("57%"));
    assert!(text.contains("Size"));
}

#[test]
fn unknown_snapshot_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(&dir, "cmp.xml", "<base_folders/>");
    let context = CliContext::with_config(NavtreeConfig::default());
    let err = context.execute(&show(input)).unwrap_err();
    assert!(matches!(err, ApiError::SnapshotError(_)));
}

#[test]
fn missing_snapshot_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let context = CliContext::with_config(NavtreeConfig::default());
    let err = context
        .execute(&show(dir.path().join("nope.json")))
        .unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn config_command_prints_toml() {
    let context = CliContext::with_config(NavtreeConfig::default());
    let output = context.execute(&Commands::Config).unwrap();
    let parsed: NavtreeConfig = toml::from_str(&output).unwrap();
    assert_eq!(parsed, NavtreeConfig::default());
}

#[test]
fn sync_preview_hides_conflicts_without_explicit_operation() {
    let dir = TempDir::new().unwrap();
    let input = write_snapshot(
        &dir,
        "cmp.json",
        r#"{"base_folders":[{"left":"/a","right":"/b","items":[
            {"kind":"folder","name":"d","category":"conflict","items":[
                {"kind":"file","name":"clash.doc","category":"conflict","size_left":7,"size_right":5}
            ]}
        ]}]}"#,
    );
    let mut command = show(input);
    if let Commands::Show { sync_preview, .. } = &mut command {
        *sync_preview = true;
    }
    let value = run(&command);
    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["name"], "d");
    assert_eq!(lines[0]["bytes"], 7);

    if let Commands::Show { hide, .. } = &mut command {
        hide.push(HideFlag::Conflict);
    }
    let value = run(&command);
    assert!(value["lines"].as_array().unwrap().is_empty());
    assert_eq!(value["filter"]["mode"], "sync_preview");
    assert_eq!(value["filter"]["conflict"], false);
}
