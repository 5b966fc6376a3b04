//! Classification of raw command-line tokens.
//!
//! Every token of an invocation becomes exactly one [`Argument`]:
//! - the first token after the script name is the **command name**
//! - `--key`, `--key value` and `--key=value` are **long options**
//! - `-k`, `-k value` and `-k=value` are **short options**
//! - anything else is a **named positional** value, bound by position
//!
//! An option only takes the following token as its value when that token does
//! not itself start with `-`, so adjacent flags (`--all --force`) never swallow
//! one another.

pub mod list;
pub mod value_list;

pub use list::ArgumentList;
pub use value_list::{ArgumentValueList, USER_DATA};

/// The syntactic role of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    CommandName,
    NamedPositional,
    LongOption,
    ShortOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    kind: ArgumentKind,
    key: String,
    value: Option<String>,
}

impl Argument {
    pub fn command(name: impl Into<String>) -> Self {
        Self {
            kind: ArgumentKind::CommandName,
            key: String::new(),
            value: Some(name.into()),
        }
    }

    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            kind: ArgumentKind::NamedPositional,
            key: String::new(),
            value: Some(value.into()),
        }
    }

    pub fn long_option(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind: ArgumentKind::LongOption,
            key: key.into(),
            value,
        }
    }

    pub fn short_option(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind: ArgumentKind::ShortOption,
            key: key.into(),
            value,
        }
    }

    /// Classifies the first token of `args`, returning the argument and the
    /// tokens left after it. An option may consume the token that follows it.
    ///
    /// Returns `None` once `args` is empty.
    pub fn parse<'i, S: AsRef<str>>(args: &'i [S]) -> Option<(Self, &'i [S])> {
        let (arg, rest) = args.split_first()?;
        let arg = arg.as_ref();

        // A lone dash conventionally names stdin; neither dash form carries a key
        if arg == "-" || arg == "--" {
            return Some((Self::positional(arg), rest));
        }

        if let Some(long) = arg.strip_prefix("--") {
            return Some(Self::parse_option(ArgumentKind::LongOption, long, rest));
        }

        if let Some(short) = arg.strip_prefix('-') {
            return Some(Self::parse_option(ArgumentKind::ShortOption, short, rest));
        }

        Some((Self::positional(arg), rest))
    }

    fn parse_option<'i, S: AsRef<str>>(
        kind: ArgumentKind,
        body: &str,
        rest: &'i [S],
    ) -> (Self, &'i [S]) {
        let option = |key: &str, value: Option<&str>| Self {
            kind,
            key: key.to_string(),
            value: value.map(ToString::to_string),
        };

        // The value is in the same argument.
        // e.g. --message=hello
        if let Some((key, value)) = body.split_once('=') {
            return (option(key, Some(value)), rest);
        }

        // The value was given as a separate argument.
        // e.g. --message hello
        if let Some((next, remaining)) = rest.split_first() {
            if !next.as_ref().starts_with('-') {
                return (option(body, Some(next.as_ref())), remaining);
            }
        }

        (option(body, None), rest)
    }

    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// The option name without dashes; empty for command names and positionals.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn is_option(&self) -> bool {
        match self.kind {
            ArgumentKind::LongOption | ArgumentKind::ShortOption => true,
            ArgumentKind::CommandName | ArgumentKind::NamedPositional => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(args: &[&str]) -> (Argument, usize) {
        let (argument, rest) = Argument::parse(args).unwrap();
        (argument, rest.len())
    }

    #[test]
    fn test_parse_empty() {
        let args: [&str; 0] = [];
        assert!(Argument::parse(&args).is_none());
    }

    #[test]
    fn test_parse_positional() {
        let (argument, remaining) = parse_one(&["abcde", "--other"]);
        assert_eq!(argument.kind(), ArgumentKind::NamedPositional);
        assert_eq!(argument.key(), "");
        assert_eq!(argument.value(), Some("abcde"));
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_parse_long_option_with_equals() {
        let (argument, remaining) = parse_one(&["--id=a=b", "next"]);
        assert_eq!(argument.kind(), ArgumentKind::LongOption);
        assert_eq!(argument.key(), "id");
        assert_eq!(argument.value(), Some("a=b"));
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_parse_long_option_with_lookahead_value() {
        let (argument, remaining) = parse_one(&["--must-have-value", "1234"]);
        assert_eq!(argument.key(), "must-have-value");
        assert_eq!(argument.value(), Some("1234"));
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_equals_and_lookahead_forms_are_equivalent() {
        let (joined, _) = parse_one(&["--opt=value"]);
        let (separate, _) = parse_one(&["--opt", "value"]);
        assert_eq!(joined, separate);
    }

    #[test]
    fn test_parse_adjacent_flags() {
        let (argument, remaining) = parse_one(&["--all", "--force"]);
        assert_eq!(argument.key(), "all");
        assert_eq!(argument.value(), None);
        assert_eq!(remaining, 1);

        let (argument, remaining) = parse_one(&["-a", "-f"]);
        assert_eq!(argument.kind(), ArgumentKind::ShortOption);
        assert_eq!(argument.key(), "a");
        assert_eq!(argument.value(), None);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_parse_flag_at_end() {
        let (argument, remaining) = parse_one(&["--force"]);
        assert_eq!(argument.value(), None);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_parse_present_but_empty_value() {
        let (argument, _) = parse_one(&["--name="]);
        assert_eq!(argument.key(), "name");
        assert_eq!(argument.value(), Some(""));
    }

    #[test]
    fn test_parse_short_option() {
        let (argument, remaining) = parse_one(&["-f", "file.txt"]);
        assert_eq!(argument.kind(), ArgumentKind::ShortOption);
        assert_eq!(argument.key(), "f");
        assert_eq!(argument.value(), Some("file.txt"));
        assert_eq!(remaining, 0);

        let (argument, _) = parse_one(&["-f=file.txt"]);
        assert_eq!(argument.key(), "f");
        assert_eq!(argument.value(), Some("file.txt"));
    }

    #[test]
    fn test_parse_bare_dashes_are_positional() {
        let (argument, _) = parse_one(&["-"]);
        assert_eq!(argument.kind(), ArgumentKind::NamedPositional);
        assert_eq!(argument.value(), Some("-"));

        let (argument, _) = parse_one(&["--"]);
        assert_eq!(argument.kind(), ArgumentKind::NamedPositional);
        assert_eq!(argument.key(), "");
    }

    #[test]
    fn test_parse_is_pure() {
        let args = ["--opt", "value", "-x"];
        let first = Argument::parse(&args).unwrap();
        let second = Argument::parse(&args).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn test_command_argument_has_empty_key() {
        let argument = Argument::command("--help");
        assert_eq!(argument.kind(), ArgumentKind::CommandName);
        assert_eq!(argument.key(), "");
        assert_eq!(argument.value(), Some("--help"));
        assert!(!argument.is_option());
    }
}
