use std::{io, process::ExitCode};

use common::utility::init_logging;
use game::{config::GameConfig, entrypoint::play_session};
use tracing::{error, info, Level};

fn main() -> ExitCode {
    init_logging(Level::WARN);
    let config = GameConfig::default();
    match play_session(&config, io::stdin().lock(), io::stdout(), io::stdout()) {
        Ok(summary) => {
            info!(
                "Session finished, winner {:?}: {}",
                summary.winner(),
                serde_json::to_string(&summary).unwrap_or_default()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
