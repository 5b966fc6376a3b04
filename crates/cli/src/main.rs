use log::debug;
use scaffold_core::argument::ArgumentList;
use scaffold_core::config::{self, COMMANDS_PATH_ENV};
use scaffold_core::error::Result;
use scaffold_core::Application;
use std::env;
use std::process::ExitCode;

const DESCRIPTION: &str = "Run the commands declared in your scaffold definitions file";

fn build_application() -> Result<Application> {
    let commands_path = config::get_commands_path(env::var(COMMANDS_PATH_ENV).ok().as_deref());
    let shell = config::get_shell(env::var("SHELL").ok().as_deref());
    debug!("Commands path: `{commands_path}`");

    let commands = scaffold_cli::load_commands(&commands_path, &shell)?;

    Ok(
        Application::new(DESCRIPTION, ArgumentList::from_env(), commands)
            .with_version(env!("CARGO_PKG_VERSION")),
    )
}

fn main() -> ExitCode {
    env_logger::init();

    match build_application() {
        Ok(mut application) => {
            let status = application.run();
            ExitCode::from(u8::try_from(status).unwrap_or(u8::MAX))
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
