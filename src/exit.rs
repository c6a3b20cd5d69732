// src/exit.rs
//! Standardized process exit codes for `streamdash`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::DashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StreamDashExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. terminal, config).
    Error = 1,
    /// The catalogue could not be fetched or parsed.
    LoadFailure = 2,
    /// A requested genre is not in the genre index.
    InvalidSelection = 3,
}

impl StreamDashExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for an error surfaced at the binary edge.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<DashError>() {
            Some(DashError::Load(_)) => Self::LoadFailure,
            Some(DashError::Selection(_)) => Self::InvalidSelection,
            Some(DashError::Config(_)) | None => Self::Error,
        }
    }
}

impl Termination for StreamDashExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
