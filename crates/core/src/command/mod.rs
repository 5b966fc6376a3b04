//! The unit of dispatch and the built-in commands every application carries.

pub mod help;
pub mod version;

pub use help::{CommandSummary, HelpCommand};
pub use version::VersionCommand;

use crate::argument::{ArgumentList, ArgumentValueList};
use crate::binder;
use crate::error::Result;
use crate::parameter::ParameterSchema;
use crate::stream::Stream;
use crate::usage;

/// Name of the built-in help command, also recognised as a request for help
/// on any other command.
pub const HELP: &str = "help";

/// Name of the built-in version command.
pub const VERSION: &str = "version";

/// A command an application can dispatch to.
///
/// Implementors declare what they accept through [`Command::schema`] and
/// receive the bound values in [`Command::run`]; validation, binding and
/// usage rendering come for free.
pub trait Command {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn schema(&self) -> &ParameterSchema;

    /// Runs the command with values already bound and validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; the application reports it on
    /// the error stream and exits unsuccessfully.
    fn run(&mut self, arguments: ArgumentValueList, stream: &mut Stream) -> Result<()>;

    fn usage(&self, include_documentation: bool) -> String {
        usage::render(self.name(), self.schema(), include_documentation)
    }

    /// # Errors
    ///
    /// See [`binder::check_arguments`].
    fn check_arguments(&self, arguments: &ArgumentList) -> Result<()> {
        binder::check_arguments(arguments, self.schema())
    }

    fn argument_value_list(&self, arguments: &ArgumentList) -> ArgumentValueList {
        binder::bind(arguments, self.schema())
    }
}
