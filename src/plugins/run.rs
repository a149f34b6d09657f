use super::TaskPlugin;

pub struct RunTask;

impl TaskPlugin for RunTask {
    fn name(&self) -> &'static str {
        "run"
    }

    fn description(&self) -> &'static str {
        "Run the interactive CLI"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        Some(&["run"])
    }
}
