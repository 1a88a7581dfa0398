//! Entry point for jvm-wrapper.
use clap::Parser;
use jvm_wrapper::{
    cli::LaunchArgs,
    launcher::{self, settings::LauncherSettings, LaunchExit},
    lib::telemetry,
};

fn main() {
    let code = match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    };
    std::process::exit(code);
}

fn bootstrap() -> Result<i32, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let args = LaunchArgs::parse();
    let settings = LauncherSettings::load_from_env().map_err(LaunchExit::from_error)?;
    let profile = args.build(settings).map_err(LaunchExit::from_error)?;

    launcher::run_launcher(&profile)
}
