//! Operation feedback messages.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Matches the app's blocking-acknowledgment style: one line, success or
/// error, always shown to the user.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Booking confirmed");
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Slot unavailable");
        assert!(format!("{failure}").contains("Error:"));
    }
}
