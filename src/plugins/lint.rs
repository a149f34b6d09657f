use super::TaskPlugin;

pub struct LintTask;

impl TaskPlugin for LintTask {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Lint with clippy"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        Some(&["clippy", "--", "-D", "warnings"])
    }
}
