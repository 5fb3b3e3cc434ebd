use std::io::Write;

use agent::client::Client;
use common::model::{
    game::{Move, Outcome},
    messages::Id,
};
use tracing::{debug, info, info_span};

use crate::{
    error::{GameError, Result},
    model::{narration::Narration, summary::MatchSummary},
    service::transcript::Transcript,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    RoundInProgress { round: u32 },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

struct GameState {
    phase: GamePhase,
    wins: (u32, u32),
    ties: u32,
    rounds_played: u32,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            phase: GamePhase::NotStarted,
            wins: (0, 0),
            ties: 0,
            rounds_played: 0,
        }
    }

    fn record(&mut self, winner: Option<Side>) {
        match winner {
            Some(Side::First) => self.wins.0 += 1,
            Some(Side::Second) => self.wins.1 += 1,
            None => self.ties += 1,
        }
        self.rounds_played += 1;
    }
}

/// Runs a match between two clients. Narration goes to `output` and to the
/// transcript; each round is strictly move, move, resolve, report, learn.
pub struct GameLoop<W> {
    id: Id,
    players: (Client, Client),
    transcript: Transcript,
    output: W,
    state: GameState,
}

impl<W> GameLoop<W>
where
    W: Write,
{
    pub fn new(player_1: Client, player_2: Client, transcript: Transcript, output: W) -> Self {
        GameLoop {
            id: Id::new(),
            players: (player_1, player_2),
            transcript,
            output,
            state: GameState::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn wins(&self) -> (u32, u32) {
        self.state.wins
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn play_game(&mut self, rounds: u32) -> Result<MatchSummary> {
        if self.state.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyPlayed);
        }
        let span = info_span!("match", id = %self.id);
        let _enter = span.enter();
        info!(
            "Starting {} rounds: {} vs {}, transcript {:?}",
            rounds,
            self.players.0.name(),
            self.players.1.name(),
            self.transcript.path()
        );

        self.announce(&Narration::GameStart)?;
        for round in 1..=rounds {
            self.state.phase = GamePhase::RoundInProgress { round };
            self.announce(&Narration::Round(round))?;
            self.play_round()?;
        }
        self.state.phase = GamePhase::Finished;

        let players = (self.players.0.name(), self.players.1.name());
        let final_scores = Narration::FinalScores {
            players,
            wins: self.state.wins,
        };
        writeln!(self.output, "{}", Narration::GameOver)?;
        writeln!(self.output, "{}", final_scores)?;
        self.output.flush()?;
        self.transcript.append(&Narration::GameOver.to_string())?;
        self.transcript.append(&final_scores.to_string())?;

        let summary = self.summary();
        info!(
            "Match over: {:?} after {} rounds ({} ties)",
            summary.wins, summary.rounds_played, summary.ties
        );
        Ok(summary)
    }

    fn play_round(&mut self) -> Result<()> {
        let move_1 = self.players.0.play()?;
        let move_2 = self.players.1.play()?;
        let winner = Self::get_winner(move_1, move_2);
        self.state.record(winner);
        debug!(
            "Round {}: {} vs {} -> {:?}",
            self.state.rounds_played, move_1, move_2, winner
        );

        let players = (self.players.0.name(), self.players.1.name());
        let winner_name = winner.map(|side| match side {
            Side::First => players.0,
            Side::Second => players.1,
        });
        let moves = (move_1, move_2);
        writeln!(self.output, "{}", Narration::Moves { players, moves })?;
        writeln!(self.output, "{}", Narration::outcome(winner_name))?;
        writeln!(
            self.output,
            "{}\n",
            Narration::Scores {
                players,
                wins: self.state.wins,
            }
        )?;
        self.output.flush()?;
        self.transcript.append(
            &Narration::RoundRecord {
                players,
                moves,
                winner: winner_name,
            }
            .to_string(),
        )?;

        self.players.0.learn(move_1, move_2);
        self.players.1.learn(move_2, move_1);
        Ok(())
    }

    // Print a marker line and log it
    fn announce(&mut self, narration: &Narration) -> Result<()> {
        writeln!(self.output, "{}", narration)?;
        self.output.flush()?;
        self.transcript.append(&narration.to_string())
    }

    fn get_winner(move_1: Move, move_2: Move) -> Option<Side> {
        match move_1.outcome_against(&move_2) {
            Outcome::Win => Some(Side::First),
            Outcome::Loss => Some(Side::Second),
            Outcome::Draw => None,
        }
    }

    fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.id,
            players: (
                self.players.0.name().to_owned(),
                self.players.1.name().to_owned(),
            ),
            wins: self.state.wins,
            ties: self.state.ties,
            rounds_played: self.state.rounds_played,
        }
    }
}
