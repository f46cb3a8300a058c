//! Command line parsing.

use clap::{CommandFactory, Parser};
use navtree::tooling::cli::{Cli, Commands, HideFlag, OutputFormat, SortColumn};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["navtree", "config"],
        vec!["navtree", "--config", "nav.toml", "config"],
        vec!["navtree", "show", "--input", "cmp.json"],
        vec!["navtree", "show", "--input", "cmp.yaml", "--sync-preview", "--hide", "do-nothing"],
        vec![
            "navtree", "show", "--input", "cmp.json", "--hide", "equal", "--hide", "left-only",
        ],
        vec!["navtree", "show", "--input", "cmp.json", "--sort", "name", "--ascending"],
        vec!["navtree", "show", "--input", "cmp.json", "--expand-depth", "2"],
        vec!["navtree", "show", "--input", "cmp.json", "--expand-all", "--format", "json"],
        vec!["navtree", "show", "--input", "cmp.json", "--log-level", "debug"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_show_fields() {
    let cli = Cli::try_parse_from([
        "navtree",
        "show",
        "--input",
        "cmp.json",
        "--hide",
        "equal",
        "--hide",
        "conflict",
        "--sort",
        "count",
        "--descending",
        "--format",
        "json",
    ])
    .unwrap();
    match cli.command {
        Commands::Show {
            input,
            hide,
            sort,
            descending,
            ascending,
            format,
            show_excluded,
            ..
        } => {
            assert_eq!(input.to_str(), Some("cmp.json"));
            assert_eq!(hide, vec![HideFlag::Equal, HideFlag::Conflict]);
            assert_eq!(sort, Some(SortColumn::Count));
            assert!(descending);
            assert!(!ascending);
            assert!(!show_excluded);
            assert_eq!(format, OutputFormat::Json);
        }
        Commands::Config => panic!("expected show"),
    }
}

#[test]
fn parse_rejects_conflicting_flags() {
    assert!(Cli::try_parse_from([
        "navtree", "show", "--input", "a.json", "--ascending", "--descending"
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "navtree", "show", "--input", "a.json", "--expand-depth", "1", "--expand-all"
    ])
    .is_err());
}

#[test]
fn parse_rejects_unknown_values() {
    assert!(Cli::try_parse_from(["navtree", "show", "--input", "a.json", "--sort", "size"]).is_err());
    assert!(Cli::try_parse_from(["navtree", "show", "--input", "a.json", "--hide", "all"]).is_err());
    assert!(Cli::try_parse_from(["navtree", "show"]).is_err());
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
