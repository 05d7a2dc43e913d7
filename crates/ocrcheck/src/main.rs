use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::App;
use crate::verdict::Verdict;

mod cli;
mod run;
mod verdict;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "OCRCHECK_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // clap's own exit code for usage errors is 2; this tool's contract
    // is exit 1 for missing arguments (help/version stay 0).
    let app = match App::try_parse() {
        Ok(app) => app,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };

    // A failed text match is a reported verdict, not a process
    // failure; only setup, I/O and engine errors exit non-zero.
    match run::run(&app) {
        Ok(Verdict::Success) | Ok(Verdict::Failure) => {}
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn usage_exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arguments_exit_one() {
        let err = App::try_parse_from(["ocrcheck"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 1);

        let err = App::try_parse_from(["ocrcheck", "scan.png"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn help_and_version_exit_zero() {
        let err = App::try_parse_from(["ocrcheck", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);

        let err = App::try_parse_from(["ocrcheck", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }
}
