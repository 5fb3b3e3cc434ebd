use std::io::{BufRead, Write};

use common::model::game::{Move, MOVES};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::error::{AgentError, Result};

pub trait Strategy {
    fn make_move(&mut self) -> Result<Move>;

    // Called once per round, after both moves are known.
    fn learn(&mut self, _my_move: Move, _their_move: Move) {}
}

// Trivial strategies
#[derive(Default)]
pub struct OnlyRock {}
impl Strategy for OnlyRock {
    fn make_move(&mut self) -> Result<Move> {
        Ok(Move::Rock)
    }
}

// Random
pub struct RandomMove {
    rng: SmallRng,
}
impl RandomMove {
    pub fn new() -> Self {
        RandomMove {
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn with_seed(seed: u64) -> Self {
        RandomMove {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}
impl Default for RandomMove {
    fn default() -> Self {
        Self::new()
    }
}
impl Strategy for RandomMove {
    fn make_move(&mut self) -> Result<Move> {
        Ok(self.rng.random())
    }
}

// Plays whatever the opponent played last round
pub struct Mirror {
    rng: SmallRng,
    opponent_last_move: Option<Move>,
}
impl Mirror {
    pub fn new() -> Self {
        Mirror {
            rng: SmallRng::from_os_rng(),
            opponent_last_move: None,
        }
    }
    pub fn with_seed(seed: u64) -> Self {
        Mirror {
            rng: SmallRng::seed_from_u64(seed),
            opponent_last_move: None,
        }
    }
}
impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}
impl Strategy for Mirror {
    fn make_move(&mut self) -> Result<Move> {
        match self.opponent_last_move {
            Some(last) => Ok(last),
            None => Ok(self.rng.random()),
        }
    }

    fn learn(&mut self, _my_move: Move, their_move: Move) {
        self.opponent_last_move = Some(their_move);
    }
}

// rock -> paper -> scissors -> rock ...
#[derive(Default)]
pub struct Cycle {
    index: usize,
}
impl Strategy for Cycle {
    fn make_move(&mut self) -> Result<Move> {
        let next = MOVES[self.index];
        self.index = (self.index + 1) % MOVES.len();
        Ok(next)
    }
}

const MOVE_PROMPT: &str = "enter your move (rock, paper, scissors): ";
const RETRY_PROMPT: &str = "Invalid move. Please try again (rock, paper, scissors): ";

/// Prompts on `output` and reads moves from `input` until a valid one is
/// entered. There is no attempt limit; only end of input stops the loop.
pub struct Human<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R, W> Human<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Human {
            name: name.into(),
            input,
            output,
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgentError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_lowercase())
    }
}

impl<R, W> Strategy for Human<R, W>
where
    R: BufRead,
    W: Write,
{
    fn make_move(&mut self) -> Result<Move> {
        write!(self.output, "{}, {}", self.name, MOVE_PROMPT)?;
        loop {
            let answer = self.read_answer()?;
            match answer.parse::<Move>() {
                Ok(chosen) => return Ok(chosen),
                Err(e) => {
                    debug!("Rejected input from {}: {}", self.name, e);
                    write!(self.output, "{}", RETRY_PROMPT)?;
                }
            }
        }
    }
}
