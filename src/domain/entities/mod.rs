mod problem;
mod ranking;
mod score;

pub use problem::*;
pub use ranking::*;
pub use score::*;
