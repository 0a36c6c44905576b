mod list_rankings;
mod submit_ranking;

pub use list_rankings::*;
pub use submit_ranking::*;
