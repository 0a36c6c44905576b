//! Game client: renderer-independent core plus the terminal session
//!
//! `game` holds the state machine; `layout`, `blocks` and `scroll` do the
//! pixel geometry a graphical frontend would draw with; `session` wires the
//! machine to the HTTP backend and the local score file.

pub mod api_client;
pub mod blocks;
pub mod command;
pub mod config;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scores;
pub mod scroll;
pub mod session;

pub use api_client::{ClientError, HttpBackend, QuizBackend};
pub use config::ClientConfig;
pub use game::{Game, InputEvent, LoadOutcome, LoadRequest, Screen};
pub use scores::ScoreStore;
pub use session::Session;
