//! Estimate command implementation

use crate::orderbook::PriceLevel;
use crate::pricing::estimate_sell_price;
use clap::Args;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Best bid as PRICE:QTY
    #[arg(long, value_parser = parse_level)]
    pub bid1: PriceLevel,

    /// Second-best bid as PRICE:QTY
    #[arg(long, value_parser = parse_level)]
    pub bid2: PriceLevel,

    /// Quantity to sell
    #[arg(long)]
    pub quantity: Decimal,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let estimate = estimate_sell_price(&self.bid1, &self.bid2, self.quantity);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        } else {
            println!("Price: {}", estimate.price.normalize());
            println!("Regime: {}", estimate.regime);
        }
        Ok(())
    }
}

fn parse_level(s: &str) -> Result<PriceLevel, String> {
    let (price, size) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PRICE:QTY, got {s:?}"))?;
    let price = Decimal::from_str(price.trim()).map_err(|e| format!("invalid price: {e}"))?;
    let size = Decimal::from_str(size.trim()).map_err(|e| format!("invalid quantity: {e}"))?;
    Ok(PriceLevel::new(price, size))
}
