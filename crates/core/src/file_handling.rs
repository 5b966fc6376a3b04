//! Reading and validating command definitions.
//!
//! This module loads command definitions from YAML, along with validation of
//! command names, parameter names and the keys command templates refer to.

use std::collections::HashSet;
use std::fs::File;

use itertools::Itertools;
use log::debug;

use crate::command::{HELP, VERSION};
use crate::command_definitions::CommandDefinition;
use crate::error::Error::{
    EmptyName, NameWithSpace, NonUniqueCommandName, NonUniqueParameterName, ReservedCommandName,
    UndeclaredTemplateKey,
};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.contains(' ') {
        return Err(NameWithSpace(name.to_string()));
    }

    Ok(())
}

fn validate_parameters(command: &CommandDefinition) -> Result<()> {
    for name in command.parameter_names() {
        validate_name(name)?;
    }

    if let Some(duplicate) = command.parameter_names().duplicates().next() {
        return Err(NonUniqueParameterName(
            command.name.clone(),
            duplicate.to_string(),
        ));
    }

    let names: HashSet<&str> = command.parameter_names().collect();
    for key in command.get_ordered_template_keys()? {
        if !names.contains(key.as_str()) {
            return Err(UndeclaredTemplateKey(command.name.clone(), key));
        }
    }

    Ok(())
}

fn validate_commands(commands: &[CommandDefinition]) -> Result<()> {
    for command in commands {
        validate_name(&command.name)?;

        if command.name == HELP || command.name == VERSION {
            return Err(ReservedCommandName(command.name.clone()));
        }
    }

    if let Some(duplicate) = commands.iter().map(|c| c.name.as_str()).duplicates().next() {
        return Err(NonUniqueCommandName(duplicate.to_string()));
    }

    commands.iter().try_for_each(validate_parameters)
}

/// Loads and validates command definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file defines no commands
/// - Command or parameter names are invalid, reserved or non-unique
/// - A command template refers to a key no parameter declares
///
/// # Examples
///
/// ```no_run
/// use scaffold_core::file_handling::get_command_definitions;
///
/// let commands = get_command_definitions("/home/me/.scaffold/commands.yml")?;
/// println!("Loaded {} commands", commands.len());
/// # Ok::<(), scaffold_core::error::Error>(())
/// ```
pub fn get_command_definitions(commands_path: &str) -> Result<Vec<CommandDefinition>> {
    let reader = get_reader("command definitions", commands_path)?;

    let parsed_command_defs: Vec<CommandDefinition> = serde_yaml::from_reader(reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "command definitions".to_string(),
                commands_path.to_string(),
                e,
            )
        })?;

    if parsed_command_defs.is_empty() {
        return Err(Error::empty_command_definition(commands_path.to_string()));
    }

    validate_commands(&parsed_command_defs)?;
    debug!(
        "Loaded {} command definitions from `{}`",
        parsed_command_defs.len(),
        commands_path
    );

    Ok(parsed_command_defs)
}
