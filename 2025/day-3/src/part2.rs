use miette::*;

use crate::bank;

/// Batteries turned on per bank once the safety override is engaged.
pub const BANK_SIZE: usize = 12;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = bank::parse(input)?;
    let total_joltage = bank::total_joltage(&banks, BANK_SIZE)?;

    Ok(total_joltage.to_string())
}
