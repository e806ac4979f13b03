//! Value philosophies.
//!
//! - Buffett: durable competitive advantage read from margins, overhead,
//!   interest burden, liquidity, capital needs and long-term debt.

mod buffett;

pub use buffett::{Buffett, BuffettConfig};
