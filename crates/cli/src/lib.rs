//! Scaffold CLI Library
//!
//! This crate provides the `scaffold` binary: a console application whose
//! commands are declared in a YAML definitions file and run through the
//! user's shell.
//!
//! # Architecture
//!
//! - [`defined_command`]: a [`scaffold_core::Command`] backed by a command definition
//! - [`load_commands`]: turns the definitions file into commands for an application
//!
//! # Examples
//!
//! ```bash
//! # List the commands the definitions file declares
//! scaffold help
//!
//! # Show usage for one of them
//! scaffold greet --help
//!
//! # Run it
//! scaffold greet World --shout
//!
//! # Use another definitions file
//! SCAFFOLD_COMMANDS=./commands.yml scaffold greet World
//! ```

pub mod defined_command;

use log::{debug, warn};
use scaffold_core::error::Result;
use scaffold_core::file_handling;
use scaffold_core::Command;
use std::path::Path;

use crate::defined_command::DefinedCommand;

/// Loads the commands declared at `commands_path`, run through `shell`.
///
/// A missing definitions file is not an error: the application still offers
/// its built-in commands.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or fails validation.
pub fn load_commands(commands_path: &str, shell: &str) -> Result<Vec<Box<dyn Command>>> {
    if !Path::new(commands_path).exists() {
        warn!("No command definitions found at `{commands_path}`");
        return Ok(Vec::new());
    }

    let definitions = file_handling::get_command_definitions(commands_path)?;
    debug!("Using shell `{shell}` for {} commands", definitions.len());

    Ok(definitions
        .into_iter()
        .map(|definition| Box::new(DefinedCommand::new(definition, shell)) as Box<dyn Command>)
        .collect())
}
