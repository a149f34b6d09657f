use super::{TaskPlugin, TASKS};
use crate::toolchain::{command_line, write_stdout, Toolchain};
use crate::utils::TaskResult;

pub struct HelpTask;

impl TaskPlugin for HelpTask {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show available targets"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        None
    }

    fn execute(&self, _toolchain: &dyn Toolchain) -> TaskResult<i32> {
        write_stdout(&usage());
        Ok(0)
    }
}

/// The target listing. Always names `cargo`, whatever program is configured.
pub fn usage() -> String {
    let mut out = String::from("Available targets:\n");
    for task in TASKS {
        if let Some(args) = task.toolchain_args() {
            out.push_str(&format!(
                "  {:<5} - {} ({})\n",
                task.name(),
                task.description(),
                command_line("cargo", args)
            ));
        }
    }
    out
}
