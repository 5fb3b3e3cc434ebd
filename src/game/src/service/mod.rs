pub mod game_loop;
pub mod transcript;
