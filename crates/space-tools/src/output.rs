//! Text result of a tool invocation

/// The single text payload a tool call produces
///
/// Failures are carried here too, flagged with `is_error`, rather than being
/// raised to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_error_flag() {
        let output = ToolOutput::success("Post liked successfully");
        assert_eq!(output.text, "Post liked successfully");
        assert!(!output.is_error);

        let output = ToolOutput::error(String::from("Error fetching feed: boom"));
        assert_eq!(output.text, "Error fetching feed: boom");
        assert!(output.is_error);
    }
}
