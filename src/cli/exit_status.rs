use std::process::ExitCode;

/// Process exit status.
///
/// `Failure` means a check ran and found errors (missing directories, syntax
/// errors, an existing config on `init`); `Error` means the command itself
/// could not complete.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished check. Errors only fail the run when `strict`.
    pub fn for_errors(error_count: usize, strict: bool) -> Self {
        if strict && error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
