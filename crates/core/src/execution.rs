use std::collections::HashMap;
use std::process::{Command, Stdio};

use log::info;

use crate::config;
use crate::error::{Error, Result};

/// Builds `<shell> -c <line>`, run from `working_directory` when given.
#[must_use]
pub fn shell_command(shell: &str, line: &str, working_directory: Option<&str>) -> Command {
    let mut command = Command::new(shell);
    command.args(["-c", line]);

    if let Some(working_directory) = config::expand_working_directory(working_directory) {
        command.current_dir(working_directory);
    }

    command
}

/// Executes a command with optional environment variables.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command<S: ::std::hash::BuildHasher>(
    mut command: Command,
    environment: Option<&HashMap<String, String, S>>,
) -> Result<()> {
    let mut command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(environment) = environment {
        info!("Executing with environment variables: {:?}", environment);
        command = command.envs(environment);
    };

    let subprocess_exit_success = command
        .spawn()
        .map_err(Error::SubProcess)?
        .wait()
        .map_err(Error::SubProcess)?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_arguments() {
        let command = shell_command("/bin/sh", "echo hi", Some("/tmp"));
        assert_eq!(command.get_program(), "/bin/sh");

        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-c", "echo hi"]);
        assert_eq!(command.get_current_dir().unwrap(), std::path::Path::new("/tmp"));
    }

    #[test]
    fn test_execute_success() {
        let command = shell_command(config::DEFAULT_SHELL, "exit 0", None);
        execute_command::<std::hash::RandomState>(command, None).unwrap();
    }

    #[test]
    fn test_execute_failure() {
        let command = shell_command(config::DEFAULT_SHELL, "exit 3", None);
        let result = execute_command::<std::hash::RandomState>(command, None);
        assert!(matches!(result, Err(Error::SubProcessExit)));
    }

    #[test]
    fn test_execute_with_environment() {
        let mut environment = HashMap::new();
        environment.insert("SCAFFOLD_TEST_VALUE".to_string(), "expected".to_string());

        let command = shell_command(
            config::DEFAULT_SHELL,
            "test \"$SCAFFOLD_TEST_VALUE\" = expected",
            None,
        );
        execute_command(command, Some(&environment)).unwrap();
    }

    #[test]
    fn test_execute_missing_program() {
        let command = shell_command("/this/shell/does/not/exist", "true", None);
        let result = execute_command::<std::hash::RandomState>(command, None);
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }
}
