//! Five-die poker (generala) roll classification.
//!
//! Domain types for dice rolls and the evaluator that classifies a roll
//! into one of nine ranked hand categories.

pub mod dice;

pub use dice::*;

// ============================================================================
// GAME CONFIGURATION
// ============================================================================
/// Number of dice in a roll.
pub const ROW_LENGTH: usize = 5;
/// Lowest die face value.
pub const MIN_NOMINAL: u8 = 1;
/// Highest die face value.
pub const MAX_NOMINAL: u8 = 6;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the program.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
