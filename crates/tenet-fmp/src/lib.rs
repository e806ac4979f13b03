//! Financial Modeling Prep (FMP) statement source for tenet.
//!
//! This crate fetches the quote and the four annual statements of a company
//! from the [Financial Modeling Prep](https://financialmodelingprep.com/) API
//! and turns them into a [`tenet_traits::Equity`]:
//! - [`FmpClient`]: the HTTP client
//! - [`FundamentalData::to_equity`]: FMP records to statement stores with canonical labels
//! - [`IsinDirectory`]: ISIN to ticker resolution
//! - [`EquityCache`]: one JSON snapshot per symbol on disk
//!
//! # Usage
//!
//! ```rust,ignore
//! use tenet_fmp::{EquityCache, FmpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!     let equity = client.fundamental_data("AAPL", 5).await?.to_equity()?;
//!     EquityCache::new("./cache").store(&equity)?;
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

pub mod cache;
mod client;
pub mod directory;
mod error;
mod mapping;
mod types;

pub use cache::{EquityCache, read_snapshot};
pub use client::FmpClient;
pub use directory::{IsinDirectory, is_isin};
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
