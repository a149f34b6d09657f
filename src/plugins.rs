use crate::toolchain::Toolchain;
use crate::utils::{TaskError, TaskResult};

mod build;
mod clean;
mod fmt;
mod help;
mod lint;
mod run;

pub trait TaskPlugin: Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Fixed toolchain arguments, or `None` for tasks that run nothing.
    fn toolchain_args(&self) -> Option<&'static [&'static str]>;

    /// Returns the exit code the process should end with.
    fn execute(&self, toolchain: &dyn Toolchain) -> TaskResult<i32> {
        match self.toolchain_args() {
            Some(args) => toolchain.invoke(args),
            None => Ok(0),
        }
    }
}

/// Every task, in the order `help` lists them.
static TASKS: &[&dyn TaskPlugin] = &[
    &help::HelpTask,
    &run::RunTask,
    &build::BuildTask,
    &fmt::FmtTask,
    &lint::LintTask,
    &clean::CleanTask,
];

/// Task used when none is named on the command line.
pub const DEFAULT_TASK: &str = "help";

pub fn fetch_task(task: &str) -> TaskResult<&'static dyn TaskPlugin> {
    TASKS
        .iter()
        .copied()
        .find(|plugin| plugin.name() == task)
        .ok_or_else(|| TaskError::TaskNotFound(task.to_string()))
}

pub fn list_tasks() -> Vec<&'static str> {
    TASKS.iter().map(|plugin| plugin.name()).collect()
}

pub fn task_descriptions(task: &str) -> &'static str {
    match fetch_task(task) {
        Ok(plugin) => plugin.description(),
        Err(_) => "Unknown task",
    }
}
