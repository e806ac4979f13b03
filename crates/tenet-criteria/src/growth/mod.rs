//! Growth and quality philosophies.
//!
//! - Slater: small caps with strong earnings growth, high return on capital
//!   employed and a comfortable quick ratio.

mod slater;

pub use slater::{Slater, SlaterConfig};
