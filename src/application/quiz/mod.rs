mod generate_keywords;
mod generate_problem;

pub use generate_keywords::*;
pub use generate_problem::*;
