use std::fmt::Display;

use colored::Colorize;
use realm_recon::{Finding, Reporter, Severity};

/// Terminal reporter: info/warning lines on stdout, errors on stderr.
pub struct Console;

impl Console {
    pub fn failure(&self, err: &dyn Display) {
        eprintln!("{}", render(Severity::Error, err));
    }
}

impl Reporter for Console {
    fn section(&mut self, title: &str) {
        println!("{}", render(Severity::Info, &title));
    }

    fn emit(&mut self, finding: &Finding) {
        let line = render(finding.severity(), finding);
        match finding.severity() {
            Severity::Error => eprintln!("{line}"),
            Severity::Info | Severity::Warning => println!("{line}"),
        }
    }
}

pub fn render(severity: Severity, message: &dyn Display) -> String {
    let tag = match severity {
        Severity::Info => "[+]".green().bold(),
        Severity::Warning => "[*]".yellow().bold(),
        Severity::Error => "[-]".red().bold(),
    };
    format!("{tag} {message}")
}
