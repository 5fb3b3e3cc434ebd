use common::model::game::Move;

use crate::{error::Result, strategy::Strategy};

/// A named participant in a match, driven by its strategy.
pub struct Client {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Client {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Client {
            name: name.into(),
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn play(&mut self) -> Result<Move> {
        self.strategy.make_move()
    }

    pub fn learn(&mut self, my_move: Move, their_move: Move) {
        self.strategy.learn(my_move, their_move);
    }
}
