use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uri_grammar::{Components, Dialect, Mode, Options, Span};

#[derive(Parser)]
#[command(name = "parse-uri", version, about = "Print the components of a URI reference")]
struct Cli {
    /// URI reference to decompose
    uri: String,
    /// Print the scheme
    #[arg(long)]
    scheme: bool,
    /// Print everything between the scheme's colon and the fragment
    #[arg(long)]
    scheme_specific_part: bool,
    /// Print the userinfo
    #[arg(long)]
    userinfo: bool,
    /// Print the host
    #[arg(long)]
    host: bool,
    /// Print the port
    #[arg(long)]
    port: bool,
    /// Print the authority
    #[arg(long)]
    authority: bool,
    /// Print the path
    #[arg(long)]
    path: bool,
    /// Print the query
    #[arg(long)]
    query: bool,
    /// Print the fragment
    #[arg(long)]
    fragment: bool,
    /// Reject relative references
    #[arg(long)]
    absolute: bool,
    /// Accept RFC 2396 registry-based authorities
    #[arg(long)]
    legacy: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn options(&self) -> Options {
        let mode = if self.absolute {
            Mode::Absolute
        } else {
            Mode::Reference
        };
        let dialect = if self.legacy {
            Dialect::Rfc2396
        } else {
            Dialect::Rfc3986
        };
        Options::new().with_mode(mode).with_dialect(dialect)
    }

    /// Requested components in output order, skipping absent ones.
    fn selected(&self, c: &Components) -> Vec<Span> {
        [
            (self.scheme, c.scheme()),
            (self.scheme_specific_part, c.scheme_specific_part()),
            (self.userinfo, c.userinfo()),
            (self.host, c.host()),
            (self.port, c.port()),
            (self.authority, c.authority()),
            (self.path, Some(c.path())),
            (self.query, c.query()),
            (self.fragment, c.fragment()),
        ]
        .into_iter()
        .filter(|&(requested, _)| requested)
        .filter_map(|(_, span)| span)
        .collect()
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let options = cli.options();
    debug!(uri = %cli.uri, ?options, "parsing");
    match Components::parse(&cli.uri, options) {
        Ok(c) => {
            for span in cli.selected(&c) {
                println!("{}", span.slice(&cli.uri));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("parse-uri: {e}");
            ExitCode::FAILURE
        }
    }
}
