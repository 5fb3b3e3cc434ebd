use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::strategy::{Cycle, Mirror, OnlyRock, RandomMove, Strategy};

/// The computer opponents a session can be matched against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Rock,
    Random,
    Reflect,
    Cycle,
}

pub const CATALOG: [StrategyKind; 4] = [
    StrategyKind::Rock,
    StrategyKind::Random,
    StrategyKind::Reflect,
    StrategyKind::Cycle,
];

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Rock => Box::new(OnlyRock {}),
            StrategyKind::Random => Box::new(RandomMove::new()),
            StrategyKind::Reflect => Box::new(Mirror::new()),
            StrategyKind::Cycle => Box::new(Cycle::default()),
        }
    }

    // Same as build, but randomised strategies draw from a fixed seed
    pub fn build_seeded(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomMove::with_seed(seed)),
            StrategyKind::Reflect => Box::new(Mirror::with_seed(seed)),
            other => other.build(),
        }
    }

    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *CATALOG.choose(rng).unwrap_or(&StrategyKind::Random)
    }
}
