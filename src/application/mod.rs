pub mod quiz;
pub mod ranking;
