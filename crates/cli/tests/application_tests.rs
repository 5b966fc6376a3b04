use scaffold_cli::load_commands;
use scaffold_core::application::{EXIT_FAILURE, EXIT_SUCCESS};
use scaffold_core::config::DEFAULT_SHELL;
use scaffold_core::{Application, ArgumentList, Command, Error, SharedBuffer, Stream};
use std::io::{self, Write};
use tempfile::NamedTempFile;

const COMMANDS_YAML: &str = r#"
- name: greet
  description: Greet someone
  command: ["test", "{name}", "=", "World", "{shout}"]
  parameters:
    named:
      - name: name
        required: true
        documentation: Who to greet
    options:
      - long: shout
        short: s
        documentation: Shout the greeting

- name: fail
  description: Always fails
  command: ["exit", "3"]
"#;

fn write_commands(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

fn run(commands_path: &str, tokens: &[&str]) -> (i32, String, String) {
    let commands = load_commands(commands_path, DEFAULT_SHELL).unwrap();

    let out = SharedBuffer::new();
    let error = SharedBuffer::new();
    let stream = Stream::new(io::empty(), out.clone(), error.clone());

    let status = Application::new(
        "Test commands",
        ArgumentList::new("scaffold", tokens.iter().copied()),
        commands,
    )
    .with_stream(stream)
    .run();

    (status, out.contents(), error.contents())
}

#[test]
fn test_missing_definitions_file_loads_nothing() {
    let commands = load_commands("/this/path/does/not/exist.yml", DEFAULT_SHELL).unwrap();
    assert!(commands.is_empty());
}

#[test]
fn test_invalid_definitions_file_is_an_error() {
    let temp_file = write_commands("- name: help\n  command: [\"true\"]\n");
    let result = load_commands(temp_file.path().to_str().unwrap(), DEFAULT_SHELL);
    assert!(matches!(result, Err(Error::ReservedCommandName(_))));
}

#[test]
fn test_loaded_commands_keep_file_order() {
    let temp_file = write_commands(COMMANDS_YAML);
    let commands = load_commands(temp_file.path().to_str().unwrap(), DEFAULT_SHELL).unwrap();

    let names: Vec<&str> = commands.iter().map(|command| command.name()).collect();
    assert_eq!(names, vec!["greet", "fail"]);
}

#[test]
fn test_run_defined_command() {
    let temp_file = write_commands(COMMANDS_YAML);
    let (status, out, error) = run(temp_file.path().to_str().unwrap(), &["greet", "World"]);

    assert_eq!(status, EXIT_SUCCESS, "stderr: {error}");
    assert_eq!(out, "Executing: test World = World\n");
}

#[test]
fn test_defined_command_missing_argument() {
    let temp_file = write_commands(COMMANDS_YAML);
    let (status, out, error) = run(temp_file.path().to_str().unwrap(), &["greet"]);

    assert_eq!(status, EXIT_FAILURE);
    assert!(out.is_empty());
    assert_eq!(
        error,
        "Error: Not enough arguments passed. Passed: 0 required: 1.\nUsage: greet name [--shout|-s]\n"
    );
}

#[test]
fn test_defined_command_failure() {
    let temp_file = write_commands(COMMANDS_YAML);
    let (status, out, error) = run(temp_file.path().to_str().unwrap(), &["fail"]);

    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(out, "Executing: exit 3\n");
    assert_eq!(error, "The sub process exited with a non-success code.\n");
}

#[test]
fn test_help_for_defined_command() {
    let temp_file = write_commands(COMMANDS_YAML);
    let (status, out, _) = run(temp_file.path().to_str().unwrap(), &["greet", "--help"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(
        out,
        "Greet someone\n\nUsage: greet name [--shout|-s]\n\n      name\t\tWho to greet\n  -s, --shout\t\t(Optional) Shout the greeting\n\n"
    );
}

#[test]
fn test_help_lists_defined_commands() {
    let temp_file = write_commands(COMMANDS_YAML);
    let (status, out, _) = run(temp_file.path().to_str().unwrap(), &["help"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert!(out.contains(" • greet      Greet someone\n"));
    assert!(out.contains(" • fail       Always fails\n"));
    assert!(out.contains("Type `scaffold help COMMAND` to show help for a command."));
}

#[test]
fn test_parameter_named_like_built_in_runs_command() {
    let temp_file = write_commands(
        r#"
- name: release
  description: Tag a release
  command: ["test", "{version}", "=", "1.2.3"]
  parameters:
    named:
      - name: version
        required: true
"#,
    );
    let (status, out, error) = run(temp_file.path().to_str().unwrap(), &["release", "1.2.3"]);

    assert_eq!(status, EXIT_SUCCESS, "stderr: {error}");
    assert_eq!(out, "Executing: test 1.2.3 = 1.2.3\n");
}

#[test]
fn test_help_for_command_without_description() {
    let temp_file = write_commands("- name: bare\n  command: [\"true\"]\n");
    let (status, out, _) = run(temp_file.path().to_str().unwrap(), &["bare", "--help"]);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "Usage: bare\n");
}
