//! Step modules registered with `rstest-bdd`.

mod merge_steps;
mod report_steps;
