use clap::{ArgAction, Parser};
use tracing::Level;

/// Raw command line input, before defaults and configuration files are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpCommand {
    pub email: Option<String>,
    pub password: Option<String>,
    pub quality: Option<String>,
    pub media_types: Option<String>,
    pub directory: Option<String>,
    pub config_path: Option<String>,
    pub endpoint: Option<String>,
    pub client_type: Option<String>,
    pub verify_existing: bool,
}

pub struct Args {
    pub command: DumpCommand,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "quizdump",
    version,
    about = "Download a quiz provider's questions, localized texts and checksum-verified media"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(long = "email", env = "EMAIL", value_name = "EMAIL", help = "Account e-mail address")]
    email: Option<String>,

    #[arg(
        long = "password",
        env = "PASSWORD",
        value_name = "PASSWORD",
        hide_env_values = true,
        help = "Account password"
    )]
    password: Option<String>,

    #[arg(
        long = "quality",
        value_name = "QUALITY",
        help = "Media quality to download: high, low or both [default: both]"
    )]
    quality: Option<String>,

    #[arg(
        long = "media-types",
        value_name = "TYPES",
        help = "Media types to download: image, video or both [default: both]"
    )]
    media_types: Option<String>,

    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Output directory [default: dump]"
    )]
    directory: Option<String>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (YAML, TOML or JSON) providing defaults for the other options"
    )]
    config: Option<String>,

    #[arg(long = "endpoint", value_name = "URL", help = "Overrides the data endpoint URL")]
    endpoint: Option<String>,

    #[arg(
        long = "client-type",
        value_name = "NAME",
        help = "Overrides the client type reported to the data endpoint"
    )]
    client_type: Option<String>,

    #[arg(
        long = "verify-existing",
        help = "Re-hash media files that already exist and replace mismatching ones"
    )]
    verify_existing: bool,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = DumpCommand {
        email: cli.email,
        password: cli.password,
        quality: cli.quality,
        media_types: cli.media_types,
        directory: cli.directory,
        config_path: cli.config,
        endpoint: cli.endpoint,
        client_type: cli.client_type,
        verify_existing: cli.verify_existing,
    };

    Args { command, log_level }
}
