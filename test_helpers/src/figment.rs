//! Shared helpers for working with `figment::Jail` in tests.
//!
//! These utilities run a closure inside a jail (creating files, injecting
//! `TREEMERGE_*` variables) and propagate its return value as an
//! `anyhow::Result`.

use anyhow::{Result, anyhow};
use camino::Utf8Path;
use treemerge::{MergeSettings, SettingsError};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down automatically once the closure completes, even when
/// the closure returns an error.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers often own the error and passing by value avoids extra clones"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}

/// Write `contents` to `name` inside the jail and load settings from it.
///
/// The outer result carries jail failures; the inner one is the loader's own
/// outcome so callers can assert on [`SettingsError`] variants.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the file cannot be
/// written.
pub fn load_settings_in_jail(
    name: &str,
    contents: &str,
) -> Result<Result<MergeSettings, SettingsError>> {
    with_jail(|jail| {
        jail.create_file(name, contents)?;
        Ok(MergeSettings::load(Some(Utf8Path::new(name))))
    })
}
