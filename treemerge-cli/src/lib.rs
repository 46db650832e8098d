//! Library interface for the `treemerge` command.
//!
//! [`run`] loads the settings and every input document, folds the documents
//! left to right with the configured merge, and returns a [`MergeReport`]
//! that [`MergeReport::write_to`] renders as JSON.

pub mod cli;
pub mod error;
pub mod input;

use std::io::Write;

use treemerge::{
    ConflictRecord, DiffResult, MergeComposer, MergeConfig, MergeSettings, Value, compose_traced,
    compose_with_fallback, diff_values,
};

use crate::cli::Args;
use crate::error::CliError;

/// Everything produced by one invocation.
#[derive(Debug)]
pub struct MergeReport {
    /// The merged document.
    pub merged: Value,
    /// Conflicts, when `--conflicts` was given.
    pub conflicts: Option<Vec<ConflictRecord>>,
    /// Diff of the first two inputs, when `--diff` was given.
    pub diff: Option<DiffResult>,
}

impl MergeReport {
    /// Write the merged document to `out` and any reports to `err`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document holds a non-finite number or a write
    /// fails.
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<(), CliError> {
        let json = serde_json::Value::try_from(self.merged.clone())?;
        writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        if let Some(conflicts) = &self.conflicts {
            writeln!(err, "{}", serde_json::to_string_pretty(conflicts)?)?;
        }
        if let Some(diff) = &self.diff {
            writeln!(err, "{}", serde_json::to_string_pretty(diff)?)?;
        }
        Ok(())
    }
}

/// Resolve the effective merge configuration: settings file and
/// `TREEMERGE_*` variables first, then command-line flags.
///
/// # Errors
///
/// Returns [`CliError::Settings`] if the settings cannot be loaded.
pub fn resolve_config(args: &Args) -> Result<MergeConfig, CliError> {
    let mut settings = MergeSettings::load(args.settings.as_deref())?;
    if let Some(strategy) = args.strategy {
        settings.strategy = strategy.into();
    }
    if let Some(resolver) = args.resolver {
        settings.resolver = resolver.into();
    }
    if let Some(list_mode) = args.list_mode {
        settings.list_mode = list_mode.into();
    }
    if let Some(max_depth) = args.max_depth {
        settings.max_depth = max_depth.get();
    }
    settings.validate |= args.should_validate;
    Ok(settings.into_config())
}

/// Merge the documents named by `args`.
///
/// # Errors
///
/// Returns a [`CliError`] if settings or inputs cannot be loaded, if `--diff`
/// is given with a single input, or if the merge fails without `--safe`.
/// With `--safe`, failing documents are skipped and the conflict log only
/// covers the documents that were merged.
pub fn run(args: &Args) -> Result<MergeReport, CliError> {
    let config = resolve_config(args)?;
    let mut composer = MergeComposer::with_capacity(args.files.len());
    for path in &args.files {
        composer.push_file(input::load_document(path)?, path.clone());
    }
    let layers = composer.layers();

    let diff = if args.should_report_diff {
        let [first, second, ..] = layers.as_slice() else {
            return Err(CliError::DiffNeedsTwoInputs);
        };
        Some(diff_values(first.value(), second.value()))
    } else {
        None
    };

    let (merged, conflicts) = if args.is_safe {
        compose_with_fallback(&layers, &config)
    } else {
        let (outcome, conflicts) = compose_traced(&layers, &config);
        (outcome?, conflicts)
    };
    tracing::debug!(
        files = args.files.len(),
        conflicts = conflicts.len(),
        "merged documents"
    );
    Ok(MergeReport {
        merged,
        conflicts: args.should_report_conflicts.then_some(conflicts),
        diff,
    })
}
