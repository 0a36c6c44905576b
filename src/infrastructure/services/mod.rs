mod llm_service;
pub mod offline;
pub mod prompts;
mod quiz_generator;

pub use llm_service::*;
pub use quiz_generator::*;
