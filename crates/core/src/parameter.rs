//! Declarative parameter schema for commands.
//!
//! A command accepts two sorts of parameters:
//! - **Named parameters** are addressed by their position among the bare
//!   tokens of an invocation (`deploy production`).
//! - **Option parameters** are addressed by a `--long` or `-s` key
//!   (`deploy --region eu-west-1`), and either take a value or act as a flag.
//!
//! Whether a parameter is required is decided by the [`ParameterSchema`] list
//! it is declared in.

/// An option-style parameter, matched by its long or short option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    long_option: String,
    short_option: Option<char>,
    takes_value: bool,
    example_value: String,
    documentation: Option<String>,
}

impl Parameter {
    /// A parameter that must be followed by a value when supplied.
    pub fn value(long_option: impl Into<String>, example_value: impl Into<String>) -> Self {
        Self {
            long_option: long_option.into(),
            short_option: None,
            takes_value: true,
            example_value: example_value.into(),
            documentation: None,
        }
    }

    /// A boolean flag; any value supplied with it is carried but never required.
    pub fn flag(long_option: impl Into<String>) -> Self {
        Self {
            long_option: long_option.into(),
            short_option: None,
            takes_value: false,
            example_value: String::new(),
            documentation: None,
        }
    }

    #[must_use]
    pub fn short(mut self, short_option: char) -> Self {
        self.short_option = Some(short_option);
        self
    }

    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn long_option(&self) -> &str {
        &self.long_option
    }

    #[must_use]
    pub fn short_option(&self) -> Option<char> {
        self.short_option
    }

    #[must_use]
    pub fn takes_value(&self) -> bool {
        self.takes_value
    }

    #[must_use]
    pub fn example_value(&self) -> &str {
        &self.example_value
    }

    #[must_use]
    pub fn get_documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Whether an argument key addresses this parameter.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        if key == self.long_option {
            return true;
        }

        let mut chars = key.chars();
        match (self.short_option, chars.next(), chars.next()) {
            (Some(short), Some(c), None) => short == c,
            _ => false,
        }
    }
}

/// A parameter addressed by its position among the bare tokens of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParameter {
    option_name: String,
    documentation: Option<String>,
}

impl NamedParameter {
    pub fn new(option_name: impl Into<String>) -> Self {
        Self {
            option_name: option_name.into(),
            documentation: None,
        }
    }

    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    #[must_use]
    pub fn get_documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}

/// Everything a command accepts, split into the four ordered lists the binder
/// and the usage renderer walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSchema {
    pub required_named: Vec<NamedParameter>,
    pub optional_named: Vec<NamedParameter>,
    pub required_options: Vec<Parameter>,
    pub optional_options: Vec<Parameter>,
}

impl ParameterSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required_named(mut self, parameter: NamedParameter) -> Self {
        self.required_named.push(parameter);
        self
    }

    #[must_use]
    pub fn optional_named(mut self, parameter: NamedParameter) -> Self {
        self.optional_named.push(parameter);
        self
    }

    #[must_use]
    pub fn required_option(mut self, parameter: Parameter) -> Self {
        self.required_options.push(parameter);
        self
    }

    #[must_use]
    pub fn optional_option(mut self, parameter: Parameter) -> Self {
        self.optional_options.push(parameter);
        self
    }

    /// Named parameters in binding order: required first, then optional.
    pub fn named_parameters(&self) -> impl Iterator<Item = &NamedParameter> {
        self.required_named.iter().chain(&self.optional_named)
    }

    /// Option parameters in matching order: required first, then optional.
    pub fn option_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.required_options.iter().chain(&self.optional_options)
    }

    /// Finds the first declared option parameter addressed by `key`.
    #[must_use]
    pub fn find_option(&self, key: &str) -> Option<&Parameter> {
        self.option_parameters()
            .find(|parameter| parameter.matches_key(key))
    }
}
