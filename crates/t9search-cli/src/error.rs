use anyhow::Error;
use clap::CommandFactory;
use std::process::ExitCode;
use t9search_config::ConfigError;
use t9search_core::CoreError;

use crate::input::InputError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
    if err.chain().any(|cause| cause.downcast_ref::<CoreError>().is_some()) {
        eprintln!("{}", crate::Cli::command().render_usage());
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    if is_invalid_input(err) {
        ExitCode::from(EXIT_INVALID_INPUT)
    } else {
        ExitCode::from(EXIT_FAILURE)
    }
}

fn is_invalid_input(err: &Error) -> bool {
    for cause in err.chain() {
        if let Some(input_err) = cause.downcast_ref::<InputError>() {
            return match input_err {
                InputError::Invalid { .. } => true,
                InputError::Io(_) => false,
            };
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_is_invalid_input(config_err);
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return true;
        }
    }
    false
}

fn config_is_invalid_input(err: &ConfigError) -> bool {
    match err {
        ConfigError::MissingHomeDir => false,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidOutputField { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => true,
    }
}
