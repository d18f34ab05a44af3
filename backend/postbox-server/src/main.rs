//! postbox-server - terminal inbox on the console
//!
//! Runs one session for the holder of the given public key, reading input
//! from stdin and drawing plain-text frames on stdout.
//!
//! ```bash
//! postbox-server --public-key ~/.ssh/id_ed25519.pub
//! ```

use postbox_server::{AppState, Cli, LogSink, PlainRenderer, logger, parse_line};
use postbox_session::{Geometry, IntervalTicker, SessionRunner};

use std::error::Error;

use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const INPUT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = postbox_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        LogSink::new(config.log_file_path()?, config.logging.colored),
    )?;

    info!("Starting postbox-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::build(&config).await?;
    let identity = cli.identity()?;

    let geometry = Geometry {
        width: cli.width,
        height: cli.height,
    };
    let session = match state.gateway.open(identity, geometry).await {
        Ok(session) => session,
        Err(e) => {
            error!("Connection rejected: {}", e);
            eprintln!("{}", e.to_notice().message());
            return Err(e.into());
        }
    };

    let (tx, rx) = mpsc::channel(INPUT_BUFFER);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            for action in parse_line(&line) {
                if tx.send(action).await.is_err() {
                    return;
                }
            }
        }
    });

    println!("{}", postbox_server::console::HELP);

    let runner = SessionRunner::new(
        state.gateway.driver(),
        IntervalTicker::new(state.tick_interval),
        PlainRenderer::new(std::io::stdout()),
    );
    let session = runner.run(session, rx).await?;

    // Stdin may still be blocked on a read
    reader.abort();

    info!("Session for {} ended", session.identity());
    Ok(())
}
