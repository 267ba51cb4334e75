//! Dice Hand Binary
//!
//! Rolls (or accepts) five dice, prints the roll and its hand category.
//!
//! Usage: `generala` for a random roll, `generala 4 3 1 3 5` to classify
//! an explicit one.

use clap::Parser;
use generala::*;

#[derive(Parser)]
#[command(about = "Classify a five-die poker roll")]
struct Args {
    /// Die values, e.g. `4 3 1 3 5`; omit for a random roll.
    row: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let hand = match args.row.is_empty() {
        true => Hand::random(),
        false => Hand::try_from(args.row.join(" ").as_str())?,
    };
    log::debug!("classified {}", hand);
    println!("{}", hand.row());
    println!("{}", hand.name());
    Ok(())
}
