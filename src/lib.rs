//! VS.LOL: champion matchup advisor.
//!
//! [`analysis`] holds the pure scoring and narrative engine; [`data`] loads the
//! champion dataset it reads from; [`server`] exposes both over HTTP.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod server;
