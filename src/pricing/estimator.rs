//! Partial-fill-aware sell price estimator

use crate::orderbook::PriceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a sell of the requested quantity would fill against the top two bids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRegime {
    /// Best level alone covers the quantity
    ExactFill,
    /// Sweeps all of the best level and part (or all) of the second
    Blended,
    /// Both levels together are too thin; price falls back to the second bid
    InsufficientDepth,
}

impl fmt::Display for FillRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillRegime::ExactFill => "exact_fill",
            FillRegime::Blended => "blended",
            FillRegime::InsufficientDepth => "insufficient_depth",
        };
        f.write_str(name)
    }
}

/// Estimated execution price together with the fill regime it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellEstimate {
    /// Estimated average execution price
    pub price: Decimal,
    /// Which branch produced the price
    pub regime: FillRegime,
}

impl SellEstimate {
    /// Whether the price is a degraded fallback rather than a real fill price
    pub fn is_degraded(&self) -> bool {
        self.regime == FillRegime::InsufficientDepth
    }
}

/// Estimate the average price for selling `quantity` into the top two bids.
///
/// - Best level covers the quantity: best price, no blending.
/// - Both levels together fall short: second price, logged as a warning.
/// - Otherwise: volume-weighted average of all of level one and the
///   remainder taken from level two.
///
/// Inputs are not validated. The function never fails or panics; results
/// that cannot be represented fall back to the second price.
pub fn estimate_sell_price(
    best: &PriceLevel,
    second: &PriceLevel,
    quantity: Decimal,
) -> SellEstimate {
    if best.size >= quantity {
        return SellEstimate {
            price: best.price,
            regime: FillRegime::ExactFill,
        };
    }

    // An overflowing sum of positive sizes exceeds any representable quantity
    let covered = match best.size.checked_add(second.size) {
        Some(available) => available >= quantity,
        None => best.size.is_sign_positive(),
    };
    if !covered {
        tracing::warn!(
            %quantity,
            best_size = %best.size,
            second_size = %second.size,
            fallback_price = %second.price,
            "Top two bid levels cannot absorb sell quantity, using second bid price"
        );
        return insufficient(second);
    }

    // Zero quantity with negative level sizes, or decimal overflow
    match blended_price(best, second, quantity) {
        Some(price) => SellEstimate {
            price,
            regime: FillRegime::Blended,
        },
        None => {
            tracing::warn!(
                %quantity,
                fallback_price = %second.price,
                "Blended sell price not representable, using second bid price"
            );
            insufficient(second)
        }
    }
}

fn blended_price(best: &PriceLevel, second: &PriceLevel, quantity: Decimal) -> Option<Decimal> {
    let remaining = quantity.checked_sub(best.size)?;
    let notional = best
        .price
        .checked_mul(best.size)?
        .checked_add(second.price.checked_mul(remaining)?)?;
    notional.checked_div(quantity)
}

/// Scalar form of [`estimate_sell_price`]
pub fn average_sell_price(best: &PriceLevel, second: &PriceLevel, quantity: Decimal) -> Decimal {
    estimate_sell_price(best, second, quantity).price
}

fn insufficient(second: &PriceLevel) -> SellEstimate {
    SellEstimate {
        price: second.price,
        regime: FillRegime::InsufficientDepth,
    }
}
