#![doc = include_str!("../README.md")]

pub mod config;
pub mod controller;
pub mod error;
pub mod geo;
pub mod locate;
pub mod map;
pub mod render;
pub mod route;
pub mod session;
pub mod status;
pub mod util;

#[cfg(test)]
mod testing;

pub use controller::{InteractionController, Services};
pub use error::{Error, Result, Side};
