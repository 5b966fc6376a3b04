//! Commands declared in the command definitions file.

use itertools::Itertools;
use log::{debug, info};
use scaffold_core::command_definitions::CommandDefinition;
use scaffold_core::error::Result;
use scaffold_core::stream::{Stream, StreamName};
use scaffold_core::{execution, interpolation, ArgumentValueList, Command, ParameterSchema};

/// Answer to the confirmation prompt that lets a command run.
const CONFIRM_ANSWER: &str = "y";

/// A shell command built from a [`CommandDefinition`].
#[derive(Debug, Clone)]
pub struct DefinedCommand {
    definition: CommandDefinition,
    schema: ParameterSchema,
    shell: String,
    description: String,
}

impl DefinedCommand {
    pub fn new(definition: CommandDefinition, shell: impl Into<String>) -> Self {
        let schema = definition.schema();
        let description = definition.description.clone().unwrap_or_default();

        Self {
            definition,
            schema,
            shell: shell.into(),
            description,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Renders the shell line for `values`. Parts that render empty, such as
    /// absent flags, are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the definition's command is not a valid template.
    pub fn command_line(&self, values: &ArgumentValueList) -> Result<String> {
        let templates = self.definition.get_templates()?;
        let context = interpolation::build_context(&self.schema, values);

        let line = interpolation::interpolate_command(&context, &templates)?
            .into_iter()
            .filter(|part| !part.is_empty())
            .join(" ");

        Ok(line)
    }

    fn write_environment(&self, stream: &mut Stream) -> Result<()> {
        if let Some(environment) = self.definition.environment.as_ref() {
            stream.write_line("With environment:", StreamName::Out)?;
            for (key, value) in environment.iter().sorted() {
                stream.write_line(&format!("\t\"{key}\": \"{value}\""), StreamName::Out)?;
            }
        }

        Ok(())
    }

    fn confirmed(stream: &mut Stream) -> Result<bool> {
        stream.write("Run this command? ", StreamName::Out)?;
        let answer = stream.prompt(Some(CONFIRM_ANSWER))?;

        Ok(answer.eq_ignore_ascii_case(CONFIRM_ANSWER))
    }
}

impl Command for DefinedCommand {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    fn run(&mut self, arguments: ArgumentValueList, stream: &mut Stream) -> Result<()> {
        let line = self.command_line(&arguments)?;

        stream.write_line(&format!("Executing: {line}"), StreamName::Out)?;
        self.write_environment(stream)?;

        if self.definition.confirm && !Self::confirmed(stream)? {
            info!("Command `{}` was not confirmed", self.definition.name);
            return stream.write_line("Cancelled.", StreamName::Out);
        }

        debug!("Running `{line}` with shell `{}`", self.shell);
        let command = execution::shell_command(
            &self.shell,
            &line,
            self.definition.working_directory.as_deref(),
        );

        execution::execute_command(command, self.definition.environment.as_ref())
    }
}
