use super::TaskPlugin;

pub struct CleanTask;

impl TaskPlugin for CleanTask {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn description(&self) -> &'static str {
        "Clean target directory"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        Some(&["clean"])
    }
}
