//! Matching classified arguments against a command's parameter schema.
//!
//! [`check_arguments`] enforces required parameters and required values,
//! [`bind`] produces the [`ArgumentValueList`] a command runs with. Binding
//! does not depend on validation having run, which lets the dispatcher peek at
//! the first bound value before enforcing anything.

use log::{debug, trace};

use crate::argument::{ArgumentKind, ArgumentList, ArgumentValueList, USER_DATA};
use crate::error::Error::{MissingRequiredParameter, MissingRequiredParameterValue};
use crate::error::{Error, Result};
use crate::parameter::{Parameter, ParameterSchema};

/// Validates that `arguments` satisfy the required parts of `schema`.
///
/// Positional count is checked first, then each required option in declared
/// order. The first violation found is returned.
///
/// # Errors
///
/// Returns:
/// - [`Error::NotEnoughArguments`] if fewer positional values were supplied
///   than there are required named parameters
/// - [`MissingRequiredParameter`] if a required option was not supplied
/// - [`MissingRequiredParameterValue`] if a required value-taking option was
///   supplied without its value
pub fn check_arguments(arguments: &ArgumentList, schema: &ParameterSchema) -> Result<()> {
    let required = schema.required_named.len();
    let passed = arguments.positional_count();

    if passed < required {
        return Err(Error::not_enough_arguments(passed, required));
    }

    for parameter in &schema.required_options {
        if !arguments.contains(parameter) {
            return Err(MissingRequiredParameter(
                parameter.long_option().to_string(),
            ));
        }

        if parameter.takes_value() && arguments.value_for(parameter).is_none() {
            return Err(MissingRequiredParameterValue(
                parameter.long_option().to_string(),
            ));
        }
    }

    Ok(())
}

/// Binds every argument to a key of the resulting [`ArgumentValueList`].
///
/// Positional values fill the named parameters left to right, required ones
/// first; values beyond the declared parameters go to [`USER_DATA`]. Options
/// are keyed by the long option of the declared parameter they match, or by
/// their own key when nothing declared matches.
#[must_use]
pub fn bind(arguments: &ArgumentList, schema: &ParameterSchema) -> ArgumentValueList {
    let mut named_parameters = schema.named_parameters();
    let mut values = ArgumentValueList::new();

    for argument in arguments {
        let value = argument.value().map(ToString::to_string);

        match argument.kind() {
            ArgumentKind::CommandName => continue,
            ArgumentKind::NamedPositional => {
                // The cursor advances even once the declared parameters run out
                let key = match named_parameters.next() {
                    Some(parameter) => parameter.option_name(),
                    None => {
                        trace!("Unclaimed positional value {:?}", value);
                        USER_DATA
                    }
                };
                values.set(key, value);
            }
            ArgumentKind::LongOption | ArgumentKind::ShortOption => {
                let key = schema
                    .find_option(argument.key())
                    .map_or(argument.key(), Parameter::long_option);
                values.set(key, value);
            }
        }
    }

    debug!("Bound argument values: {:?}", values);
    values
}
