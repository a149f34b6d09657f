use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("Command not found: {0}")]
    CmdNotFound(String),
    #[error("Task not found: {0}")]
    TaskNotFound(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// Exit code reported when the dispatcher itself fails.
    ///
    /// Failures of the delegated command never reach here; their status is
    /// returned as-is by the task.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::TaskNotFound(_) => 2,
            TaskError::CmdNotFound(_) => 127,
            TaskError::Io(_) => 1,
        }
    }
}

/// Turn a finished child's status into the code we exit with.
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TaskError::TaskNotFound("deploy".into()).exit_code(), 2);
        assert_eq!(TaskError::CmdNotFound("cargo".into()).exit_code(), 127);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(TaskError::from(io).exit_code(), 1);
    }

    #[test]
    fn test_task_not_found_message() {
        let err = TaskError::TaskNotFound("deploy".into());
        assert_eq!(err.to_string(), "Task not found: deploy");
    }

    #[cfg(unix)]
    #[test]
    fn test_status_code() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(status_code(ExitStatus::from_raw(0)), 0);
        // wait(2) encoding: exit code lives in the high byte
        assert_eq!(status_code(ExitStatus::from_raw(3 << 8)), 3);
        // killed by SIGKILL
        assert_eq!(status_code(ExitStatus::from_raw(9)), 137);
    }
}
