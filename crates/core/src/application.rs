//! Dispatching one invocation to the command it names.

use log::{debug, info, warn};

use crate::argument::{ArgumentKind, ArgumentList, ArgumentValueList};
use crate::command::help::COMMAND_KEY;
use crate::command::{Command, CommandSummary, HelpCommand, VersionCommand, HELP, VERSION};
use crate::error::{Error, Result};
use crate::stream::{Stream, StreamName};

/// Exit status of a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the command failed or was invoked incorrectly.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when no command was given at all.
pub const EXIT_NO_COMMAND: i32 = 2;

/// A built-in command requested in place of the named command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuiltIn {
    Help,
    Version,
}

impl BuiltIn {
    /// Looks at the first argument after the command name, either as a bare
    /// word (`app deploy help`) or as an option (`app deploy --help`). Option
    /// values never count.
    fn requested(arguments: &ArgumentList) -> Option<Self> {
        let argument = arguments
            .iter()
            .find(|argument| argument.kind() != ArgumentKind::CommandName)?;

        let word = match argument.kind() {
            ArgumentKind::NamedPositional => argument.value()?,
            ArgumentKind::LongOption | ArgumentKind::ShortOption => argument.key(),
            ArgumentKind::CommandName => return None,
        };

        match word {
            HELP => Some(Self::Help),
            VERSION => Some(Self::Version),
            _ => None,
        }
    }
}

pub struct Application {
    description: String,
    arguments: ArgumentList,
    commands: Vec<Box<dyn Command>>,
    help: HelpCommand,
    version: VersionCommand,
    stream: Stream,
}

impl Application {
    pub fn new(
        description: impl Into<String>,
        arguments: ArgumentList,
        commands: Vec<Box<dyn Command>>,
    ) -> Self {
        let description = description.into();
        let version = VersionCommand::default();
        let help = Self::build_help(&description, &arguments, &commands, &version);

        Self {
            description,
            arguments,
            commands,
            help,
            version,
            stream: Stream::stdio(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = VersionCommand::new(version);
        self
    }

    #[must_use]
    pub fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    fn build_help(
        description: &str,
        arguments: &ArgumentList,
        commands: &[Box<dyn Command>],
        version: &VersionCommand,
    ) -> HelpCommand {
        let summaries = commands
            .iter()
            .map(|command| CommandSummary::of(command.as_ref()))
            .chain(std::iter::once(CommandSummary::of(version)))
            .collect();

        HelpCommand::new(description, arguments.script(), summaries)
    }

    /// Runs the invocation and returns the process exit status.
    ///
    /// Failures are reported on the error stream, followed by the command's
    /// usage when the invocation did not fit the command's parameters.
    pub fn run(&mut self) -> i32 {
        let Some(command_name) = self.arguments.command_name().map(ToString::to_string) else {
            warn!("No command given to `{}`", self.description);
            self.report("Application has received no commands");
            return EXIT_NO_COMMAND;
        };

        let command_name = command_name.trim_matches('-').to_string();
        info!("Running command `{command_name}`");

        match self.dispatch(&command_name) {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                debug!("Command `{command_name}` failed: {error:?}");
                self.report(&error.to_string());

                if error.is_usage_error() {
                    if let Some(usage) = self.find_command(&command_name).map(|c| c.usage(false)) {
                        self.report(&usage);
                    }
                }

                EXIT_FAILURE
            }
        }
    }

    fn dispatch(&mut self, command_name: &str) -> Result<()> {
        let command = self
            .find_command(command_name)
            .ok_or_else(|| Error::InvalidCommand(command_name.to_string()))?;

        if let Some(built_in) = BuiltIn::requested(&self.arguments) {
            debug!("Built-in {built_in:?} requested for `{command_name}`");
            let mut built_in_values = ArgumentValueList::new();
            built_in_values.set(COMMAND_KEY, Some(command_name.to_string()));

            return match built_in {
                BuiltIn::Help => self.help.run(built_in_values, &mut self.stream),
                BuiltIn::Version => self.version.run(built_in_values, &mut self.stream),
            };
        }

        command.check_arguments(&self.arguments)?;
        let values = command.argument_value_list(&self.arguments);

        let Self {
            commands,
            help,
            version,
            stream,
            ..
        } = self;

        let command: &mut dyn Command =
            match commands.iter_mut().find(|c| c.name() == command_name) {
                Some(command) => command.as_mut(),
                None if command_name == HELP => help,
                None if command_name == VERSION => version,
                None => return Err(Error::InvalidCommand(command_name.to_string())),
            };

        command.run(values, stream)
    }

    fn find_command(&self, name: &str) -> Option<&dyn Command> {
        if let Some(command) = self.commands.iter().find(|c| c.name() == name) {
            return Some(command.as_ref());
        }

        match name {
            HELP => Some(&self.help),
            VERSION => Some(&self.version),
            _ => None,
        }
    }

    fn report(&mut self, message: &str) {
        if let Err(e) = self.stream.write_line(message, StreamName::Error) {
            warn!("Could not write to the error stream: {e}");
        }
    }
}
