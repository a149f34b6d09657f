use super::TaskPlugin;

pub struct BuildTask;

impl TaskPlugin for BuildTask {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build release"
    }

    fn toolchain_args(&self) -> Option<&'static [&'static str]> {
        Some(&["build", "--release"])
    }
}
