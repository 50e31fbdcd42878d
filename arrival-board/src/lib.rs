//! Bus arrival board server.
//!
//! Polls LTA DataMall for the next buses at a fixed set of stops and
//! serves the result as a 600×800 PNG.

pub mod config;
pub mod datamall;
pub mod domain;
pub mod refresh;
pub mod render;
pub mod store;
pub mod web;
