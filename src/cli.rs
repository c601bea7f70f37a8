use clap::error::ErrorKind;
use clap::Parser;

/// Submit a finished recording to the local transcode queue.
#[derive(Debug, Clone, Parser)]
#[command(name = "queuetc", version, about)]
pub struct Cli {
    /// Report failures on stderr with debug output instead of the system log
    #[arg(short, long)]
    pub debug: bool,

    /// Job queue endpoint, overrides QUEUETC_URL
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// {path} {channel} {title} {status} [description]
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Command {
    Notify(Cli),
    /// Unparseable command line; print `usage()` and exit 1.
    Usage,
}

impl Command {
    /// Parse `argv`. `--help` and `--version` print and exit as usual; every
    /// other parse error becomes [`Command::Usage`].
    pub fn parse_from<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Cli::try_parse_from(argv) {
            Ok(cli) => Command::Notify(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => Command::Usage,
        }
    }
}

pub fn usage() -> String {
    [
        "Missing arguments.",
        "Usage: queuetc [-d] [-u URL] {path} {channel} {title} {status} [description]",
        r#"Your postprocessor command in tvheadend should be: /path/to/queuetc "%f" "%c" "%t" "%e""#,
        r#"To also send the programme description: /path/to/queuetc "%f" "%c" "%t" "%e" "%d""#,
    ]
    .join("\n")
}
