use super::TaskPlugin;

pub struct FmtTask;

impl TaskPlugin for FmtTask {
    fn name(&self) -> &'static str {
        "fmt"
    }

    fn description(&self) -> &'static str {
        "Format code"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        Some(&["fmt"])
    }
}
