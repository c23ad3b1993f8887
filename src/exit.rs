// src/exit.rs
//! Process exit codes for `charnet`.
//!
//! Scripts running over the whole corpus can tell a bad record from a
//! partial run without parsing output.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CharnetExit {
    /// Every requested book was analyzed.
    Success = 0,
    /// Generic error (I/O, config, unknown book).
    Error = 1,
    /// A record failed to parse or build.
    InvalidInput = 2,
    /// Some books were skipped; the rest were written.
    PartialFailure = 3,
}

impl CharnetExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CharnetExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
