pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod nominal;
pub use nominal::*;

pub mod ranking;
pub use ranking::*;

pub mod roll;
pub use roll::*;
