//! Momentum philosophies.
//!
//! - Mayer: the "100-bagger" composite of size, revenue and price to sales.

mod mayer;

pub use mayer::{Mayer, MayerConfig};
