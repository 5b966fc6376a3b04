use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use leon::Template;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interpolation;
use crate::parameter::{NamedParameter, Parameter, ParameterSchema};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedParameterDefinition {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub documentation: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub long: String,
    pub short: Option<char>,
    #[serde(default)]
    pub takes_value: bool,
    #[serde(default)]
    pub required: bool,
    pub example: Option<String>,
    pub documentation: Option<String>,
}

impl OptionDefinition {
    fn to_parameter(&self) -> Parameter {
        let mut parameter = if self.takes_value {
            let example = self
                .example
                .clone()
                .unwrap_or_else(|| self.long.to_uppercase());
            Parameter::value(self.long.clone(), example)
        } else {
            Parameter::flag(self.long.clone())
        };

        if let Some(short) = self.short {
            parameter = parameter.short(short);
        }

        if let Some(documentation) = &self.documentation {
            parameter = parameter.documentation(documentation.clone());
        }

        parameter
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParametersDefinition {
    #[serde(default)]
    pub named: Vec<NamedParameterDefinition>,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: Option<String>,
    pub command: Vec<String>,
    pub working_directory: Option<String>,
    pub environment: Option<HashMap<String, String>>,
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub parameters: ParametersDefinition,
}

impl CommandDefinition {
    /// The parameter schema the definition declares, in declaration order.
    #[must_use]
    pub fn schema(&self) -> ParameterSchema {
        let mut schema = ParameterSchema::new();

        for named in &self.parameters.named {
            let mut parameter = NamedParameter::new(named.name.clone());
            if let Some(documentation) = &named.documentation {
                parameter = parameter.documentation(documentation.clone());
            }

            schema = if named.required {
                schema.required_named(parameter)
            } else {
                schema.optional_named(parameter)
            };
        }

        for option in &self.parameters.options {
            let parameter = option.to_parameter();
            schema = if option.required {
                schema.required_option(parameter)
            } else {
                schema.optional_option(parameter)
            };
        }

        schema
    }

    /// Every name a template may refer to: named parameters, then long options.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .named
            .iter()
            .map(|named| named.name.as_str())
            .chain(self.parameters.options.iter().map(|option| option.long.as_str()))
    }

    /// # Errors
    ///
    /// Returns an error if any part of the command is not a valid template.
    pub fn get_templates(&self) -> Result<Vec<Template>> {
        interpolation::get_templates(&self.command)
    }

    /// Template keys in order of first appearance in the command.
    ///
    /// # Errors
    ///
    /// Returns an error if any part of the command is not a valid template.
    pub fn get_ordered_template_keys(&self) -> Result<IndexSet<String>> {
        Ok(interpolation::get_template_keys(&self.get_templates()?))
    }
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(formatter, "{} ({})", self.name, description),
            None => formatter.write_str(&self.name),
        }
    }
}
