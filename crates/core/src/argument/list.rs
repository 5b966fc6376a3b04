use log::debug;

use super::{Argument, ArgumentKind};
use crate::parameter::Parameter;

/// The classified arguments of one invocation, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    script: String,
    arguments: Vec<Argument>,
}

impl ArgumentList {
    /// Classifies `tokens`, which must not include the script name. The first
    /// token is taken as the command name.
    pub fn new<I, T>(script: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut arguments = Vec::with_capacity(tokens.len());

        if let Some((command, mut remaining)) = tokens.split_first() {
            arguments.push(Argument::command(command.as_str()));

            while let Some((argument, rest)) = Argument::parse(remaining) {
                arguments.push(argument);
                remaining = rest;
            }
        }

        let list = Self {
            script: script.into(),
            arguments,
        };
        debug!("Classified arguments: {:?}", list.arguments);
        list
    }

    /// Classifies `args` in the same shape [`std::env::args`] returns them:
    /// the script name first.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = args.into_iter().map(Into::into);
        let script: String = iter.next().unwrap_or_default();
        Self::new(script, iter)
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args())
    }

    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The raw command name token, if the invocation had any tokens at all.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        self.arguments
            .iter()
            .find(|argument| argument.kind() == ArgumentKind::CommandName)
            .and_then(Argument::value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    /// Number of bare values supplied for named parameters.
    #[must_use]
    pub fn positional_count(&self) -> usize {
        self.arguments
            .iter()
            .filter(|argument| argument.kind() == ArgumentKind::NamedPositional)
            .count()
    }

    /// Whether any option argument addresses `parameter` by its long or short option.
    #[must_use]
    pub fn contains(&self, parameter: &Parameter) -> bool {
        self.find_option(parameter).is_some()
    }

    /// The value of the first option argument addressing `parameter`.
    ///
    /// `None` both when the parameter was not supplied and when it was supplied
    /// without a value; `Some("")` means an explicitly empty value (`--key=`).
    #[must_use]
    pub fn value_for(&self, parameter: &Parameter) -> Option<&str> {
        self.find_option(parameter).and_then(Argument::value)
    }

    fn find_option(&self, parameter: &Parameter) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|argument| argument.is_option() && parameter.matches_key(argument.key()))
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}
