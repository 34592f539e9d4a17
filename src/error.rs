/// Application-level error carrying the process exit code.
///
/// Exit codes:
/// - `1`: the comparison ran but the motors are not reconcilable
/// - `2`: usage, configuration or I/O problems
#[derive(Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::new(2, "Invalid divisions setting.");
        assert_eq!(err.to_string(), "Invalid divisions setting.");
        assert_eq!(err.exit_code(), 2);
    }
}
