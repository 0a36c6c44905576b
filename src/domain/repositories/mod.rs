mod ranking_repository;

pub use ranking_repository::*;
