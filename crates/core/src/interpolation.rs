use std::collections::HashMap;

use indexmap::IndexSet;
use leon::Template;

use crate::argument::ArgumentValueList;
use crate::error::Result;
use crate::parameter::ParameterSchema;

/// Builds the template context for a bound invocation.
///
/// Every declared parameter gets an entry so templates always render:
/// values are used as given, a supplied flag renders as `--<long>`, and
/// anything not supplied renders empty.
#[must_use]
pub fn build_context(
    schema: &ParameterSchema,
    values: &ArgumentValueList,
) -> HashMap<String, String> {
    let mut context: HashMap<String, String> = HashMap::new();

    for parameter in schema.named_parameters() {
        let name = parameter.option_name();
        let value = values.get(name).unwrap_or_default();
        context.insert(name.to_string(), value.to_string());
    }

    for parameter in schema.option_parameters() {
        let long = parameter.long_option();
        let value = if parameter.takes_value() {
            values.get(long).unwrap_or_default().to_string()
        } else if values.contains(long) {
            format!("--{long}")
        } else {
            String::new()
        };
        context.insert(long.to_string(), value);
    }

    context
}

/// Find all keys in all templates of a command, in order of appearance.
#[must_use]
pub fn get_template_keys(templates: &[Template]) -> IndexSet<String> {
    let mut keys = IndexSet::new();

    for template in templates {
        for key in template.keys() {
            let _ = keys.insert((*key).to_string());
        }
    }

    keys
}

/// # Errors
///
/// Returns an error if any argument is not a valid template.
pub fn get_templates(command: &[String]) -> Result<Vec<Template>> {
    let mut templates: Vec<Template> = Vec::new();

    for argument in command {
        templates.push(Template::parse(argument.as_ref())?);
    }

    Ok(templates)
}

/// # Errors
///
/// Returns an error if a template refers to a key missing from `context`.
pub fn interpolate_command(
    context: &HashMap<String, String>,
    templates: &[Template],
) -> Result<Vec<String>> {
    let mut interpolated_arguments: Vec<String> = Vec::new();

    for template in templates {
        interpolated_arguments.push(template.render(&context)?);
    }

    Ok(interpolated_arguments)
}
