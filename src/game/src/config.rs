use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub rounds: u32,
    // Directory the session transcript is written to
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rounds: 3,
            log_dir: PathBuf::from("."),
        }
    }
}
