//! Process exit codes.

use std::fmt;

/// Exit code returned by a command.
///
/// # Examples
///
/// ```
/// use mermaid_ink_cli::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert!(!ExitCode::ERROR.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Command completed
    pub const SUCCESS: Self = Self(0);

    /// Conversion or command failure; the message went to stderr
    pub const ERROR: Self = Self(1);

    /// Returns the raw process exit code.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for [`ExitCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
