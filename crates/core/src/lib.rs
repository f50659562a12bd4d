#![forbid(unsafe_code)]

pub mod game;
pub mod model;
pub mod time;

pub use game::{
    DEFAULT_REVEAL_MILLIS, DownloadOutcome, GameAction, GameEffect, GamePhase, GameSession,
    RevealProgress, Transition,
};
pub use time::Clock;
