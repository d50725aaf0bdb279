use std::process::ExitCode;

/// How a tidump run ends, as seen by the shell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Table written, or config file created.
    Success,
    /// `init` found a `.tidumprc.json` already in place and left it alone.
    Failure,
    /// Invalid config or options, or the table could not be written.
    Error,
}

impl ExitStatus {
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
