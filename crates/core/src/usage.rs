//! Usage synopsis and parameter documentation rendering.
//!
//! ```text
//! Usage: copy source [destination] --mode|-m MODE [--force|-f]
//!
//!       source		File to copy
//!   -m, --mode		How to copy
//!   -f, --force		(Optional) Overwrite existing files
//! ```

use indexmap::IndexMap;

use crate::parameter::{NamedParameter, Parameter, ParameterSchema};

/// Column documentation text is wrapped at.
pub const DOCUMENTATION_WIDTH: usize = 55;

const OPTIONAL_PREFIX: &str = "(Optional) ";

/// What a documentation entry describes; decides its indentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DocumentationKey {
    Named(String),
    Option {
        long: String,
        short: Option<char>,
    },
}

/// Renders `Usage: <command_name> ...` for `schema`, optionally followed by a
/// block documenting each documented parameter.
#[must_use]
pub fn render(command_name: &str, schema: &ParameterSchema, include_documentation: bool) -> String {
    let mut message = format!("Usage: {command_name}");
    let mut documentation: IndexMap<DocumentationKey, String> = IndexMap::new();

    for parameter in &schema.required_named {
        message.push(' ');
        message.push_str(parameter.option_name());
        document_named(&mut documentation, parameter, "");
    }

    for parameter in &schema.optional_named {
        message.push_str(&format!(" [{}]", parameter.option_name()));
        document_named(&mut documentation, parameter, OPTIONAL_PREFIX);
    }

    for parameter in &schema.required_options {
        message.push(' ');
        message.push_str(&option_synopsis(parameter));
        document_option(&mut documentation, parameter, "");
    }

    for parameter in &schema.optional_options {
        message.push_str(&format!(" [{}]", option_synopsis(parameter)));
        document_option(&mut documentation, parameter, OPTIONAL_PREFIX);
    }

    if include_documentation && !documentation.is_empty() {
        append_documentation(&mut message, &documentation);
    }

    message
}

fn option_synopsis(parameter: &Parameter) -> String {
    let mut synopsis = format!("--{}", parameter.long_option());

    if let Some(short) = parameter.short_option() {
        synopsis.push_str(&format!("|-{short}"));
    }

    if parameter.takes_value() {
        synopsis.push(' ');
        synopsis.push_str(parameter.example_value());
    }

    synopsis
}

fn document_named(
    documentation: &mut IndexMap<DocumentationKey, String>,
    parameter: &NamedParameter,
    prefix: &str,
) {
    if let Some(text) = parameter.get_documentation().filter(|text| !text.is_empty()) {
        documentation.insert(
            DocumentationKey::Named(parameter.option_name().to_string()),
            format!("{prefix}{text}"),
        );
    }
}

fn document_option(
    documentation: &mut IndexMap<DocumentationKey, String>,
    parameter: &Parameter,
    prefix: &str,
) {
    if let Some(text) = parameter.get_documentation().filter(|text| !text.is_empty()) {
        documentation.insert(
            DocumentationKey::Option {
                long: parameter.long_option().to_string(),
                short: parameter.short_option(),
            },
            format!("{prefix}{text}"),
        );
    }
}

fn append_documentation(message: &mut String, documentation: &IndexMap<DocumentationKey, String>) {
    message.push_str("\n\n");

    for (key, text) in documentation {
        let wrapped = word_wrap(text, DOCUMENTATION_WIDTH).join("\n\t\t\t");

        match key {
            DocumentationKey::Named(name) => {
                message.push_str(&format!("      {name}\t\t{wrapped}\n"));
            }
            DocumentationKey::Option { long, short } => {
                message.push_str("  ");
                match short {
                    Some(short) => message.push_str(&format!("-{short}, --{long}")),
                    None => message.push_str(&format!("--{long}   ")),
                }
                message.push_str(&format!("\t\t{wrapped}\n"));
            }
        }
    }
}

/// Greedily wraps `text` into lines of at most `width` characters, breaking
/// only at spaces. Words longer than `width` are kept whole on their own line.
#[must_use]
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split(' ');
        let mut line = words.next().unwrap_or_default().to_string();

        // Empty words keep runs of spaces intact
        for word in words {
            if line.chars().count() + 1 + word.chars().count() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }

        lines.push(line);
    }

    lines
}
