//! Execution price estimation
//!
//! Estimates the average price a market sell order would get when it
//! sweeps the top two bid levels of a book.

mod estimator;

pub use estimator::{average_sell_price, estimate_sell_price, FillRegime, SellEstimate};
