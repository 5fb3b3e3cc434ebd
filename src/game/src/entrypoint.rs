use std::io::{BufRead, Write};

use agent::{catalog::StrategyKind, client::Client, strategy::Human, AgentError};
use chrono::Local;
use tracing::info;

use crate::{
    config::GameConfig, error::Result, model::summary::MatchSummary,
    service::game_loop::GameLoop, service::transcript::Transcript,
};

pub const COMPUTER_NAME: &str = "Computer";

/// Human vs a computer opponent picked at random from the catalog.
pub fn play_session<R, P, W>(
    config: &GameConfig,
    input: R,
    prompts: P,
    output: W,
) -> Result<MatchSummary>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let opponent = StrategyKind::choose(&mut rand::rng());
    play_session_against(config, opponent, input, prompts, output)
}

pub fn play_session_against<R, P, W>(
    config: &GameConfig,
    opponent: StrategyKind,
    mut input: R,
    mut prompts: P,
    output: W,
) -> Result<MatchSummary>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let name = read_name(&mut input, &mut prompts)?;
    info!("{} is playing against {:?}", name, opponent);

    let human = Client::new(name.clone(), Box::new(Human::new(name, input, prompts)));
    let computer = Client::new(COMPUTER_NAME, opponent.build());
    let transcript = Transcript::create(&config.log_dir, &Local::now())?;

    GameLoop::new(human, computer, transcript, output).play_game(config.rounds)
}

fn read_name<R: BufRead, P: Write>(input: &mut R, prompts: &mut P) -> Result<String> {
    write!(prompts, "Enter your name: ")?;
    prompts.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AgentError::InputClosed.into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
