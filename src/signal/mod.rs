//! Signal generation module
//!
//! Cross-venue spread between the Gate sell estimate and the Binance ask,
//! and the alert message sent when it crosses the threshold

mod alert;
mod spread;

pub use alert::Alert;
pub use spread::SpreadObservation;
