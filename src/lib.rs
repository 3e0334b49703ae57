//! Single-player Battleship board model.
//!
//! A [`Board`] is built once from a fleet of vessel endpoint pairs, validated
//! for composition and spacing, and then driven by [`Board::fire`] calls.
//! Construction either yields a fully valid board or fails with a
//! [`BoardError`]; nothing in between is observable.

mod board;
mod cell;
mod common;
mod config;
mod logging;
mod render;
mod vessel;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use render::{print_board, render};
pub use vessel::*;
