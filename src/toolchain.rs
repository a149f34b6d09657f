use std::io::{ErrorKind, Write};

use crate::config::Config;
use crate::utils::{status_code, TaskError, TaskResult};

/// Something that can run one toolchain subcommand to completion.
///
/// Returns the exit code of the finished command. A non-zero code is not an
/// error here; it is the task's result.
pub trait Toolchain {
    fn invoke(&self, args: &[&str]) -> TaskResult<i32>;
}

/// Runs the real toolchain in the current directory with inherited stdio.
pub struct Cargo {
    program: String,
}

impl Cargo {
    pub fn new(program: impl Into<String>) -> Self {
        Cargo {
            program: program.into(),
        }
    }
}

impl Toolchain for Cargo {
    fn invoke(&self, args: &[&str]) -> TaskResult<i32> {
        let cmdline = command_line(&self.program, args);
        info!("==> Running: {}", cmdline);

        let started = chrono::Local::now();
        let output = duct::cmd(&self.program, args.iter().copied())
            .unchecked()
            .run()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TaskError::CmdNotFound(self.program.clone()),
                _ => TaskError::Io(e),
            })?;
        let elapsed = chrono::Local::now() - started;

        let code = status_code(output.status);
        info!(
            "==> Finished `{}` in {:.2}s (exit {})",
            cmdline,
            elapsed.num_milliseconds() as f64 / 1000.0,
            code
        );
        Ok(code)
    }
}

/// Prints the command it would run instead of running it.
pub struct DryRun {
    program: String,
}

impl DryRun {
    pub fn new(program: impl Into<String>) -> Self {
        DryRun {
            program: program.into(),
        }
    }
}

impl Toolchain for DryRun {
    fn invoke(&self, args: &[&str]) -> TaskResult<i32> {
        write_stdout(&format!("{}\n", command_line(&self.program, args)));
        Ok(0)
    }
}

/// Reads configuration only when a task actually calls the toolchain.
pub struct Configured {
    dry_run: bool,
}

impl Configured {
    pub fn new(dry_run: bool) -> Self {
        Configured { dry_run }
    }
}

impl Toolchain for Configured {
    fn invoke(&self, args: &[&str]) -> TaskResult<i32> {
        let program = Config::load().toolchain.program;
        if self.dry_run {
            DryRun::new(program).invoke(args)
        } else {
            Cargo::new(program).invoke(args)
        }
    }
}

/// Best-effort write to stdout. A reader that went away (closed pipe,
/// `| head`) must not turn a finished task into a failure.
pub fn write_stdout(text: &str) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        debug!("stdout: {}", e);
    }
}

pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        assert_eq!(command_line("cargo", &["clean"]), "cargo clean");
        assert_eq!(
            command_line("cargo", &["clippy", "--", "-D", "warnings"]),
            "cargo clippy -- -D warnings"
        );
        assert_eq!(command_line("cargo", &[]), "cargo");
    }

    #[test]
    fn test_missing_program() {
        let cargo = Cargo::new("lofi-xtask-no-such-program");
        match cargo.invoke(&["build"]) {
            Err(TaskError::CmdNotFound(program)) => {
                assert_eq!(program, "lofi-xtask-no-such-program")
            }
            other => panic!("expected CmdNotFound, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_passes_through() {
        let sh = Cargo::new("sh");
        assert_eq!(sh.invoke(&["-c", "exit 0"]).unwrap(), 0);
        assert_eq!(sh.invoke(&["-c", "exit 3"]).unwrap(), 3);
        assert_eq!(sh.invoke(&["-c", "exit 101"]).unwrap(), 101);
    }

    #[test]
    fn test_dry_run_never_fails() {
        let dry = DryRun::new("lofi-xtask-no-such-program");
        assert_eq!(dry.invoke(&["build", "--release"]).unwrap(), 0);
    }
}
