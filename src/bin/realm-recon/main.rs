mod args;
mod logging;
mod output;

use std::process::ExitCode;

use clap::error::ErrorKind;
use realm_recon::{
    EmailAddress, RealmClient, RealmClientOptions, ReconError, parse_email, run, system_resolver,
};

use crate::args::Cli;
use crate::output::Console;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_env() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("warning: {err:#}");
    }

    let mut console = Console;
    match recon(&cli, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            console.failure(&err);
            if err.is_invalid_input() {
                eprintln!("{}", Cli::clap_command().render_help());
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn recon(cli: &Cli, console: &mut Console) -> Result<EmailAddress, ReconError> {
    // validate before touching resolver or HTTP setup
    let email = parse_email(cli.email.as_deref().unwrap_or_default())?;
    let resolver = system_resolver()?;
    let client = RealmClient::new(RealmClientOptions::default())?;
    run(email.as_str(), &resolver, &client, console)
}
