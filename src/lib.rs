//! Tip calculator (tiptime)
//!
//! Computes a gratuity from a bill amount, a tip percentage and a round-up
//! preference, and formats it as currency for the user's locale.
//!
//! The library follows a Pure Core / Impure Shell layout: `model` and
//! `state` are pure and testable without a terminal, `view` owns the
//! terminal, and `config`/`logging` set up the process.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
