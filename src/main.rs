use queuetc::{
    cli::{usage, Command},
    utils::{init_logger, system_log},
    Config,
};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Command::parse_from(std::env::args_os()) {
        Command::Notify(cli) => cli,
        Command::Usage => {
            println!("{}", usage());
            return Ok(queuetc::Exit::MissingArguments.into());
        }
    };

    init_logger(cli.debug);

    // Load configuration
    let config = Config::from_env()?.with_url(cli.url.clone());
    debug!("Configuration loaded: {:?}", config);

    let log = system_log(cli.debug, &config.syslog_ident);
    let exit = queuetc::run(&cli, &config, log).await;

    Ok(exit.into())
}
