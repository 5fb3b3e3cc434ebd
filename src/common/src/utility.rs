use tracing::Level;

/// Install the fmt subscriber. Output goes to stderr so it never mixes with
/// the game narration on stdout. Ignores the error if one is already set.
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
