// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins when set; otherwise info, or debug with `verbose`.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose {
        "paper_classifier=debug,tower_http=debug"
    } else {
        "paper_classifier=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Outcome shown in front of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Warning,
    Info,
}

impl Status {
    fn marker(self) -> ColoredString {
        match self {
            Status::Success => "✓".green().bold(),
            Status::Failure => "✗".red().bold(),
            Status::Warning => "⚠".yellow().bold(),
            Status::Info => "ℹ".blue().bold(),
        }
    }
}

/// Marker plus message; failures and warnings tint the message too.
pub fn status_line(status: Status, msg: &str) -> String {
    let body = match status {
        Status::Failure => msg.red(),
        Status::Warning => msg.yellow(),
        Status::Success | Status::Info => msg.normal(),
    };
    format!("{} {}", status.marker(), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_plain() {
        colored::control::set_override(false);
        assert_eq!(status_line(Status::Success, "done"), "✓ done");
        assert_eq!(status_line(Status::Failure, "failed"), "✗ failed");
        assert_eq!(status_line(Status::Warning, "empty"), "⚠ empty");
        assert_eq!(status_line(Status::Info, "traditional (2)"), "ℹ traditional (2)");
    }
}
