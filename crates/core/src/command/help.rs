use log::debug;

use super::{Command, HELP};
use crate::argument::ArgumentValueList;
use crate::error::{Error, Result};
use crate::parameter::{NamedParameter, ParameterSchema};
use crate::stream::{Stream, StreamName};

/// Key the help command reads the requested command name from.
pub const COMMAND_KEY: &str = "command";

/// What help needs to know about a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl CommandSummary {
    pub fn of(command: &dyn Command) -> Self {
        Self {
            name: command.name().to_string(),
            description: command.description().to_string(),
            usage: command.usage(true),
        }
    }
}

/// Lists the application's commands, or shows one command's usage.
#[derive(Debug, Clone)]
pub struct HelpCommand {
    application_description: String,
    script: String,
    commands: Vec<CommandSummary>,
    schema: ParameterSchema,
}

impl HelpCommand {
    pub fn new(
        application_description: impl Into<String>,
        script: impl Into<String>,
        commands: Vec<CommandSummary>,
    ) -> Self {
        Self {
            application_description: application_description.into(),
            script: script.into(),
            commands,
            schema: ParameterSchema::new().optional_named(
                NamedParameter::new(COMMAND_KEY).documentation("The command to show help for"),
            ),
        }
    }

    fn write_command_list(&self, stream: &mut Stream) -> Result<()> {
        write_description(&self.application_description, stream)?;
        stream.write_line("Available commands:", StreamName::Out)?;

        let names = self
            .commands
            .iter()
            .map(|summary| (summary.name.as_str(), summary.description.as_str()))
            .chain(std::iter::once((self.name(), self.description())))
            .collect::<Vec<_>>();
        let col_width = names.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 4;

        for (name, description) in names {
            stream.write_line(&format!(" • {name:col_width$}{description}"), StreamName::Out)?;
        }

        stream.write_line("", StreamName::Out)?;
        stream.write_line(
            &format!(
                "Type `{} help COMMAND` to show help for a command.",
                self.script
            ),
            StreamName::Out,
        )
    }

    fn write_command_help(&self, command_name: &str, stream: &mut Stream) -> Result<()> {
        let (description, usage) = if command_name == self.name() {
            (self.description().to_string(), self.usage(true))
        } else {
            let summary = self
                .commands
                .iter()
                .find(|summary| summary.name == command_name)
                .ok_or_else(|| Error::InvalidCommand(command_name.to_string()))?;
            (summary.description.clone(), summary.usage.clone())
        };

        write_description(&description, stream)?;
        stream.write_line(&usage, StreamName::Out)
    }
}

/// Writes a description and the blank line after it; nothing when empty.
fn write_description(description: &str, stream: &mut Stream) -> Result<()> {
    if description.is_empty() {
        return Ok(());
    }

    stream.write_line(description, StreamName::Out)?;
    stream.write_line("", StreamName::Out)
}

impl Command for HelpCommand {
    fn name(&self) -> &str {
        HELP
    }

    fn description(&self) -> &str {
        "Display information about available commands"
    }

    fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    fn run(&mut self, arguments: ArgumentValueList, stream: &mut Stream) -> Result<()> {
        match arguments.get(COMMAND_KEY) {
            Some(command_name) => {
                debug!("Showing help for `{command_name}`");
                self.write_command_help(command_name, stream)
            }
            None => self.write_command_list(stream),
        }
    }
}
