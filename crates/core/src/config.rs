//! Configuration path utilities.
//!
//! This module resolves where command definitions are read from and which
//! shell runs them, expanding shell variables like `~` in paths.

/// Default path for the command definitions file
const DEFAULT_COMMANDS_PATH: &str = "~/.scaffold/commands.yml";

/// Environment variable overriding the command definitions path
pub const COMMANDS_PATH_ENV: &str = "SCAFFOLD_COMMANDS";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Resolves the command definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use scaffold_core::config::get_commands_path;
///
/// // Use default path
/// let default_path = get_commands_path(None);
///
/// // Use custom path
/// let custom_path = get_commands_path(Some("/path/to/commands.yml"));
/// assert_eq!(custom_path, "/path/to/commands.yml");
/// ```
#[must_use]
pub fn get_commands_path(commands_path_arg: Option<&str>) -> String {
    let commands_path = commands_path_arg.unwrap_or(DEFAULT_COMMANDS_PATH);

    shellexpand::tilde(commands_path).to_string()
}

/// Resolves the shell commands run in, falling back to [`DEFAULT_SHELL`].
#[must_use]
pub fn get_shell(shell_arg: Option<&str>) -> String {
    shell_arg
        .filter(|shell| !shell.is_empty())
        .unwrap_or(DEFAULT_SHELL)
        .to_string()
}

/// Expands shell variables in a working directory path.
///
/// # Examples
///
/// ```
/// use scaffold_core::config::expand_working_directory;
///
/// // Expand tilde
/// let expanded = expand_working_directory(Some("~/projects"));
/// assert!(expanded.is_some());
///
/// // Handle None input
/// let none_result = expand_working_directory(None);
/// assert!(none_result.is_none());
/// ```
#[must_use]
pub fn expand_working_directory(working_directory: Option<&str>) -> Option<String> {
    working_directory.map(|working_directory| shellexpand::tilde(working_directory).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_commands_path_with_custom_path() {
        let result = get_commands_path(Some("/custom/path/commands.yml"));
        assert_eq!(result, "/custom/path/commands.yml");
    }

    #[test]
    fn test_get_commands_path_with_none() {
        let result = get_commands_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".scaffold/commands.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_commands_path_with_tilde() {
        let result = get_commands_path(Some("~/my-commands.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-commands.yml"));
    }

    #[test]
    fn test_get_shell() {
        assert_eq!(get_shell(Some("/bin/zsh")), "/bin/zsh");
        assert_eq!(get_shell(Some("")), DEFAULT_SHELL);
        assert_eq!(get_shell(None), DEFAULT_SHELL);
    }

    #[test]
    fn test_expand_working_directory_with_some() {
        let result = expand_working_directory(Some("~/projects/scaffold"));

        let expanded = result.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("projects/scaffold"));
    }

    #[test]
    fn test_expand_working_directory_without_tilde() {
        let result = expand_working_directory(Some("/absolute/path"));
        assert_eq!(result.unwrap(), "/absolute/path");
    }

    #[test]
    fn test_expand_working_directory_with_none() {
        assert!(expand_working_directory(None).is_none());
    }
}
