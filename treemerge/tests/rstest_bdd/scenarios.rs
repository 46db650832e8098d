//! Binds the feature files to the step registry.

use crate::fixtures::{MergeContext, merge_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/deep_merge.feature",
    fixtures = [merge_context: MergeContext]
);
scenarios!(
    "tests/features/reporters.feature",
    fixtures = [merge_context: MergeContext]
);
