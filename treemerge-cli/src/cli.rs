//! Command-line interface definitions for `treemerge`.

use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use treemerge::{ConflictResolver, ListMode, Strategy};

/// Strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Recurse into shared mappings.
    Deep,
    /// Merge top-level keys only.
    Shallow,
    /// Take the right-hand document.
    Replace,
    /// Deep merge, combining same-kind scalars.
    Combine,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Deep => Self::Deep,
            StrategyArg::Shallow => Self::Shallow,
            StrategyArg::Replace => Self::Replace,
            StrategyArg::Combine => Self::Combine,
        }
    }
}

/// Conflict resolvers selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolverArg {
    /// Keep the earlier value.
    Left,
    /// Keep the later value.
    Right,
    /// Combine same-kind values.
    Merge,
    /// Fail on the first conflict.
    Error,
}

impl From<ResolverArg> for ConflictResolver {
    fn from(arg: ResolverArg) -> Self {
        match arg {
            ResolverArg::Left => Self::Left,
            ResolverArg::Right => Self::Right,
            ResolverArg::Merge => Self::Merge,
            ResolverArg::Error => Self::Error,
        }
    }
}

/// List merge modes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListModeArg {
    /// Earlier items, then later items.
    Append,
    /// Later items, then earlier items.
    Prepend,
    /// Distinct items in first-seen order.
    Union,
    /// Earlier items also present later.
    Intersection,
    /// Keep the earlier list.
    Left,
    /// Keep the later list.
    Right,
    /// Merge items position by position.
    ByIndex,
}

impl From<ListModeArg> for ListMode {
    fn from(arg: ListModeArg) -> Self {
        match arg {
            ListModeArg::Append => Self::Append,
            ListModeArg::Prepend => Self::Prepend,
            ListModeArg::Union => Self::Union,
            ListModeArg::Intersection => Self::Intersection,
            ListModeArg::Left => Self::Left,
            ListModeArg::Right => Self::Right,
            ListModeArg::ByIndex => Self::ByIndex,
        }
    }
}

/// Parsed CLI arguments for `treemerge`.
#[derive(Debug, Parser)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent command-line switch"
)]
#[command(name = "treemerge")]
#[command(about = "Deep-merge JSON and TOML documents, later files taking precedence")]
#[command(version)]
pub struct Args {
    /// Documents to merge, lowest precedence first.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
    /// Top-level merge strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    /// How differing leaves are settled.
    #[arg(long, value_enum)]
    pub resolver: Option<ResolverArg>,
    /// How two lists are combined.
    #[arg(long, value_enum)]
    pub list_mode: Option<ListModeArg>,
    /// Maximum nesting depth walked on both sides.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<NonZeroUsize>,
    /// Reject non-finite numbers before merging.
    #[arg(long = "validate")]
    pub should_validate: bool,
    /// Skip documents that fail to merge instead of aborting.
    #[arg(long = "safe")]
    pub is_safe: bool,
    /// Write the conflict log as JSON to stderr.
    #[arg(long = "conflicts")]
    pub should_report_conflicts: bool,
    /// Write the diff of the first two documents as JSON to stderr.
    #[arg(long = "diff")]
    pub should_report_diff: bool,
    /// TOML settings file; flags override it.
    #[arg(long, value_name = "PATH")]
    pub settings: Option<Utf8PathBuf>,
}
