use std::ffi::OsString;

use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "realm-recon",
    version,
    about = "Unauthenticated identity-realm and mail-filter reconnaissance for an email domain"
)]
pub struct Cli {
    /// Email Address to Target
    #[arg(short = 'e', long = "email", value_name = "ADDRESS")]
    pub email: Option<String>,

    /// print debug diagnostics on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting `-email` as well as `--email`.
    pub fn try_parse_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(normalize_args(std::env::args_os()))
    }

    pub fn clap_command() -> clap::Command {
        <Self as CommandFactory>::command()
    }
}

/// Rewrite single-dash long flags (`-email x`, `-email=x`) to their
/// double-dash form. Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::clap_command();
    let longs: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help", "version"])
        .collect();

    let mut out = Vec::new();
    let mut passthrough = false;
    for (idx, arg) in args.into_iter().map(Into::into).enumerate() {
        if idx == 0 || passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                longs.contains(&name).then(|| OsString::from(format!("-{s}")))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
