//! CLI Tooling
//!
//! Command-line interface for inspecting a comparison snapshot through the
//! navigation tree.

use crate::config::{ConfigLoader, NavtreeConfig};
use crate::error::ApiError;
use crate::hierarchy::ComparisonSnapshot;
use crate::logging::LoggingConfig;
use crate::tooling::format::{format_tree_json, format_tree_text};
use crate::types::Level;
use crate::view::{CmpResultFilter, ColumnType, SortOrder, SyncPreviewFilter, TreeView, ViewFilter};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// navtree - Navigate folder comparison results as an aggregated tree
#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Aggregate folder comparison results into a sortable, expandable tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the navigation tree of a comparison snapshot
    Show {
        /// Snapshot file (.json, .yaml, .yml or .toml)
        #[arg(long)]
        input: PathBuf,
        /// Filter by sync operation instead of comparison category
        #[arg(long)]
        sync_preview: bool,
        /// Hide items of a category (or sync operation group); repeatable
        #[arg(long, value_enum)]
        hide: Vec<HideFlag>,
        /// Include items excluded from synchronization
        #[arg(long)]
        show_excluded: bool,
        /// Sort column (defaults to the configured one)
        #[arg(long, value_enum)]
        sort: Option<SortColumn>,
        /// Sort ascending
        #[arg(long, conflicts_with = "descending")]
        ascending: bool,
        /// Sort descending
        #[arg(long)]
        descending: bool,
        /// Expand rows down to this depth
        #[arg(long, conflicts_with = "expand_all")]
        expand_depth: Option<Level>,
        /// Expand every row
        #[arg(long)]
        expand_all: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Name,
    Count,
    Bytes,
}

impl From<SortColumn> for ColumnType {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Name => ColumnType::FolderName,
            SortColumn::Count => ColumnType::ItemCount,
            SortColumn::Bytes => ColumnType::Bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Filter flags that `--hide` can switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HideFlag {
    LeftOnly,
    RightOnly,
    LeftNewer,
    RightNewer,
    Different,
    Equal,
    Conflict,
    CreateLeft,
    CreateRight,
    DeleteLeft,
    DeleteRight,
    OverwriteLeft,
    OverwriteRight,
    DoNothing,
}

fn wrong_mode(flag: HideFlag, mode: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "--hide {} is not available in {} mode",
        flag.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_else(|| format!("{:?}", flag)),
        mode
    ))
}

/// Build the view filter for the `show` command.
pub fn build_filter(sync_preview: bool, hide: &[HideFlag], show_excluded: bool) -> Result<ViewFilter, ApiError> {
    if sync_preview {
        let mut filter = SyncPreviewFilter {
            show_excluded,
            ..SyncPreviewFilter::default()
        };
        for flag in hide {
            match flag {
                HideFlag::CreateLeft => filter.create_left = false,
                HideFlag::CreateRight => filter.create_right = false,
                HideFlag::DeleteLeft => filter.delete_left = false,
                HideFlag::DeleteRight => filter.delete_right = false,
                HideFlag::OverwriteLeft => filter.overwrite_left = false,
                HideFlag::OverwriteRight => filter.overwrite_right = false,
                HideFlag::DoNothing => filter.do_nothing = false,
                HideFlag::Equal => filter.equal = false,
                HideFlag::Conflict => filter.conflict = false,
                other => return Err(wrong_mode(*other, "sync preview")),
            }
        }
        Ok(filter.into())
    } else {
        let mut filter = CmpResultFilter {
            show_excluded,
            ..CmpResultFilter::default()
        };
        for flag in hide {
            match flag {
                HideFlag::LeftOnly => filter.left_only = false,
                HideFlag::RightOnly => filter.right_only = false,
                HideFlag::LeftNewer => filter.left_newer = false,
                HideFlag::RightNewer => filter.right_newer = false,
                HideFlag::Different => filter.different = false,
                HideFlag::Equal => filter.equal = false,
                HideFlag::Conflict => filter.conflict = false,
                other => return Err(wrong_mode(*other, "comparison")),
            }
        }
        Ok(filter.into())
    }
}

/// Resolve the sort order: command line column and direction over the
/// configured order. A column given without direction uses its default one.
pub fn resolve_sort(
    configured: SortOrder,
    column: Option<SortColumn>,
    ascending: bool,
    descending: bool,
) -> SortOrder {
    let column = column.map(ColumnType::from);
    let base = match column {
        Some(column) if column != configured.column => SortOrder {
            column,
            ascending: TreeView::default_sort_direction(column),
        },
        _ => configured,
    };
    SortOrder {
        ascending: if ascending {
            true
        } else if descending {
            false
        } else {
            base.ascending
        },
        ..base
    }
}

/// CLI context: the effective configuration.
pub struct CliContext {
    config: NavtreeConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn with_config(config: NavtreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavtreeConfig {
        &self.config
    }

    /// Logging config with command line overrides applied.
    pub fn logging_config(&self, cli: &Cli) -> LoggingConfig {
        let mut logging = self.config.logging.clone();
        if let Some(level) = &cli.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &cli.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Show {
                input,
                sync_preview,
                hide,
                show_excluded,
                sort,
                ascending,
                descending,
                expand_depth,
                expand_all,
                format,
            } => {
                let filter = build_filter(*sync_preview, hide, *show_excluded)?;
                let order = resolve_sort(self.config.navigation.sort_order(), *sort, *ascending, *descending);
                let depth = if *expand_all {
                    None
                } else {
                    Some(expand_depth.unwrap_or(0))
                };
                self.show(input, filter, order, depth, *format)
            }
            Commands::Config => self.config.to_toml(),
        }
    }

    fn show(
        &self,
        input: &Path,
        filter: ViewFilter,
        order: SortOrder,
        depth: Option<Level>,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let snapshot = ComparisonSnapshot::from_path(input)?;
        let hierarchy = snapshot.to_hierarchy()?;
        info!(input = %input.display(), objects = hierarchy.len(), "Loaded comparison snapshot");

        let mut view = TreeView::with_sort(order);
        view.set_data(hierarchy.into_shared());
        view.update_filter(filter);
        if depth != Some(0) {
            view.expand_to_depth(depth);
        }

        let lines = view.lines();
        match format {
            OutputFormat::Text => Ok(format_tree_text(
                &lines,
                &self.config.navigation.consistent_columns(),
                self.config.navigation.show_percentage,
            )),
            OutputFormat::Json => format_tree_json(&lines, view.sort_direction(), view.filter()),
        }
    }
}
