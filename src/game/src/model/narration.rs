use std::fmt;

use common::model::game::Move;

/// Every sentence the game prints or writes to the transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Narration<'a> {
    GameStart,
    Round(u32),
    Moves {
        players: (&'a str, &'a str),
        moves: (Move, Move),
    },
    RoundWinner(&'a str),
    Tie,
    Scores {
        players: (&'a str, &'a str),
        wins: (u32, u32),
    },
    // Transcript form of a round: both moves and the outcome on one line
    RoundRecord {
        players: (&'a str, &'a str),
        moves: (Move, Move),
        winner: Option<&'a str>,
    },
    GameOver,
    FinalScores {
        players: (&'a str, &'a str),
        wins: (u32, u32),
    },
}

impl<'a> Narration<'a> {
    pub fn outcome(winner: Option<&'a str>) -> Self {
        match winner {
            Some(name) => Narration::RoundWinner(name),
            None => Narration::Tie,
        }
    }
}

impl fmt::Display for Narration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::GameStart => write!(f, "Game start!"),
            Narration::Round(n) => write!(f, "Round {}:", n),
            Narration::Moves { players, moves } => {
                write!(f, "{}: {}  {}: {}", players.0, moves.0, players.1, moves.1)
            }
            Narration::RoundWinner(name) => write!(f, "{} wins this round!", name),
            Narration::Tie => write!(f, "It's a tie!"),
            Narration::Scores { players, wins } => write!(
                f,
                "Scores: {} - {}, {} - {}",
                players.0, wins.0, players.1, wins.1
            ),
            Narration::RoundRecord {
                players,
                moves,
                winner,
            } => write!(
                f,
                "{}: {}, {}: {} - {}",
                players.0,
                moves.0,
                players.1,
                moves.1,
                Narration::outcome(*winner)
            ),
            Narration::GameOver => write!(f, "Game over!"),
            Narration::FinalScores { players, wins } => write!(
                f,
                "Final scores: {} - {}, {} - {}",
                players.0, wins.0, players.1, wins.1
            ),
        }
    }
}
