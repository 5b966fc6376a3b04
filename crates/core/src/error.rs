use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: Invalid command: \"{}\"", .0)]
    InvalidCommand(String),

    #[error("Error: Not enough arguments passed. Passed: {} required: {}.", .passed, .required)]
    NotEnoughArguments { passed: usize, required: usize },

    #[error("Error: Missing required parameter: --{}", .0)]
    MissingRequiredParameter(String),

    #[error("Error: Missing value for required parameter: --{}", .0)]
    MissingRequiredParameterValue(String),

    #[error("Error: Invalid stream name: \"{}\"", .0)]
    InvalidStreamName(String),

    #[error("Error writing to stream: {}", .0)]
    Stream(#[from] std::io::Error),

    #[error("The sub process exited with a non-success code.")]
    SubProcessExit,

    #[error("Error running sub process: {}", .0)]
    SubProcess(std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No commands were found in the command definition YAML. Is `{}` empty?", .path)]
    EmptyCommandDefinition { path: String },

    #[error("Found a non-unique command name: `{}`", .0)]
    NonUniqueCommandName(String),

    #[error("Command name `{}` is reserved for a built-in command", .0)]
    ReservedCommandName(String),

    #[error("Found a non-unique parameter name on command {}: `{}`", .0, .1)]
    NonUniqueParameterName(String, String),

    #[error("Command {} uses template key `{}` which is not a declared parameter", .0, .1)]
    UndeclaredTemplateKey(String, String),

    #[error("Invalid name: names may not be empty")]
    EmptyName,

    #[error("Invalid name `{}`: names may not contain spaces", .0)]
    NameWithSpace(String),

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering template string: {}", .0)]
    Render(#[from] RenderError),
}

impl Error {
    pub fn not_enough_arguments(passed: usize, required: usize) -> Self {
        Self::NotEnoughArguments { passed, required }
    }

    pub fn empty_command_definition(path: String) -> Self {
        Self::EmptyCommandDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error comes from binding or validating the invocation,
    /// in which case the failing command's usage is worth showing.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughArguments { .. }
                | Self::MissingRequiredParameter(_)
                | Self::MissingRequiredParameterValue(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_arguments_message() {
        let error = Error::not_enough_arguments(0, 1);
        assert_eq!(
            error.to_string(),
            "Error: Not enough arguments passed. Passed: 0 required: 1."
        );
    }

    #[test]
    fn test_missing_parameter_messages_are_distinct() {
        let missing = Error::MissingRequiredParameter("id".to_string());
        let missing_value = Error::MissingRequiredParameterValue("id".to_string());

        assert_eq!(missing.to_string(), "Error: Missing required parameter: --id");
        assert_eq!(
            missing_value.to_string(),
            "Error: Missing value for required parameter: --id"
        );
    }

    #[test]
    fn test_invalid_command_message() {
        let error = Error::InvalidCommand("test-command".to_string());
        assert_eq!(error.to_string(), "Error: Invalid command: \"test-command\"");
        assert!(!error.is_usage_error());
    }

    #[test]
    fn test_usage_errors() {
        assert!(Error::not_enough_arguments(1, 2).is_usage_error());
        assert!(Error::MissingRequiredParameter("a".to_string()).is_usage_error());
        assert!(Error::MissingRequiredParameterValue("a".to_string()).is_usage_error());
        assert!(!Error::InvalidStreamName("nothing".to_string()).is_usage_error());
    }
}
