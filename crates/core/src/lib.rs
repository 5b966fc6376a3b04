//! Scaffold Core Library
//!
//! This crate provides the core functionality for scaffold, a small framework
//! for building multi-command console applications: it classifies raw
//! command-line tokens, binds them to a command's declared parameters,
//! validates required inputs, renders usage text and dispatches to the
//! command the user named.
//!
//! # Key Features
//!
//! - **Argument Parsing**: Classify tokens into command names, positionals and options
//! - **Parameter Binding**: Map tokens onto declared named parameters and options
//! - **Usage Rendering**: Usage lines with word-wrapped parameter documentation
//! - **Dispatch**: Route an invocation to a command, with built-in help and version
//! - **Command Definitions**: Declare shell-backed commands in YAML
//!
//! # Examples
//!
//! Binding an invocation against a schema:
//!
//! ```
//! use scaffold_core::{binder, ArgumentList, NamedParameter, Parameter, ParameterSchema};
//!
//! let schema = ParameterSchema::new()
//!     .required_named(NamedParameter::new("path"))
//!     .optional_option(Parameter::flag("force").short('f'));
//!
//! let arguments = ArgumentList::new("app", ["copy", "a.txt", "-f"]);
//! binder::check_arguments(&arguments, &schema)?;
//!
//! let values = binder::bind(&arguments, &schema);
//! assert_eq!(values.get("path"), Some("a.txt"));
//! assert!(values.contains("force"));
//! # Ok::<(), scaffold_core::error::Error>(())
//! ```
//!
//! Loading command definitions from a configuration file:
//!
//! ```no_run
//! use scaffold_core::file_handling::get_command_definitions;
//!
//! let commands = get_command_definitions("/home/me/.scaffold/commands.yml")?;
//! for command in &commands {
//!     println!("Command: {}", command);
//! }
//! # Ok::<(), scaffold_core::error::Error>(())
//! ```

pub mod application;
pub mod argument;
pub mod binder;
pub mod command;
pub mod command_definitions;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod parameter;
pub mod stream;
pub mod usage;

pub use application::Application;
pub use argument::{Argument, ArgumentKind, ArgumentList, ArgumentValueList, USER_DATA};
pub use command::Command;
pub use error::{Error, Result};
pub use parameter::{NamedParameter, Parameter, ParameterSchema};
pub use stream::{SharedBuffer, Stream, StreamName};
