//! Tests for settings loading.

use camino::Utf8Path;
use rstest::rstest;

use super::*;
use crate::{NumberCombine, Value, merge};

#[expect(
    clippy::result_large_err,
    reason = "figment::Jail requires figment::Error"
)]
fn load_in_jail(file: Option<&Utf8Path>) -> figment::error::Result<MergeSettings> {
    MergeSettings::load(file).map_err(|err| figment::Error::from(err.to_string()))
}

#[rstest]
fn defaults_match_the_default_config() {
    figment::Jail::expect_with(|_| {
        let settings = load_in_jail(None)?;
        let config = settings.into_config();
        assert_eq!(config.fingerprint(), MergeConfig::default().fingerprint());
        Ok(())
    });
}

#[rstest]
fn file_values_are_applied() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "merge.toml",
            concat!(
                "strategy = \"combine\"\n",
                "list_mode = \"by-index\"\n",
                "max_depth = 8\n",
                "[combine]\n",
                "numbers = \"max\"\n",
            ),
        )?;
        let settings = load_in_jail(Some(Utf8Path::new("merge.toml")))?;
        assert_eq!(settings.strategy, Strategy::Combine);
        assert_eq!(settings.list_mode.name(), "by-index");
        assert_eq!(settings.combine.numbers, NumberCombine::Max);
        assert_eq!(settings.combine.separator, " ");
        let config = settings.into_config();
        assert_eq!(config.max_depth(), 8);
        let merged = merge(&Value::from(3), &Value::from(9), &config)
            .map_err(|err| figment::Error::from(err.to_string()))?;
        assert_eq!(merged, Value::from(9));
        Ok(())
    });
}

#[rstest]
fn environment_overrides_the_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("merge.toml", "resolver = \"left\"\nvalidate = true\n")?;
        jail.set_env("TREEMERGE_RESOLVER", "error");
        jail.set_env("TREEMERGE_COMBINE__SEPARATOR", "-");
        let settings = load_in_jail(Some(Utf8Path::new("merge.toml")))?;
        assert_eq!(settings.resolver.name(), "error");
        assert!(settings.validate);
        assert_eq!(settings.combine.separator, "-");
        Ok(())
    });
}

#[rstest]
#[case::depth("TREEMERGE_MAX_DEPTH", "max_depth")]
#[case::nodes("TREEMERGE_NODE_BUDGET", "node_budget")]
#[case::time("TREEMERGE_TIME_BUDGET_MS", "time_budget_ms")]
fn zero_limits_are_rejected(#[case] variable: &str, #[case] expected_key: &str) {
    figment::Jail::expect_with(|jail| {
        jail.set_env(variable, "0");
        let err = MergeSettings::load(None).expect_err("zero limit must fail");
        assert!(
            matches!(err, SettingsError::Validation { ref key, .. } if key == expected_key),
            "unexpected error: {err}"
        );
        Ok(())
    });
}

#[rstest]
fn unknown_strategy_fails_to_gather() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("TREEMERGE_STRATEGY", "sideways");
        let err = MergeSettings::load(None).expect_err("unknown strategy must fail");
        assert!(matches!(err, SettingsError::Gathering(_)));
        Ok(())
    });
}

#[rstest]
fn missing_file_is_reported_with_its_path() {
    figment::Jail::expect_with(|_| {
        let err = MergeSettings::load(Some(Utf8Path::new("absent.toml")))
            .expect_err("missing file must fail");
        assert!(
            matches!(err, SettingsError::File { ref path, .. } if path.as_str() == "absent.toml")
        );
        Ok(())
    });
}

#[rstest]
fn budgets_become_config_limits() {
    let settings = MergeSettings {
        node_budget: Some(5),
        time_budget_ms: Some(250),
        ..MergeSettings::default()
    };
    let config = settings.into_config();
    assert_eq!(config.node_budget().map(NonZeroUsize::get), Some(5));
    assert_eq!(config.time_budget(), Some(Duration::from_millis(250)));
}
