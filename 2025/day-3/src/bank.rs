use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

use crate::selector;

/// One line of the input: the joltage rating of every battery, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank(Vec<u8>);

impl Bank {
    pub fn new(batteries: Vec<u8>) -> Self {
        Self(batteries)
    }

    pub fn batteries(&self) -> &[u8] {
        &self.0
    }

    /// Largest joltage reachable by turning on exactly `size` batteries.
    ///
    /// A bank with fewer than `size` batteries turns all of them on.
    pub fn max_joltage(&self, size: usize) -> Result<u64> {
        let batteries = self.batteries();
        let size = size.min(batteries.len());
        let selected = selector::select(batteries, size)?;
        let joltage = joltage(&selected)?;

        tracing::debug!(selected = %selected.iter().join(""), joltage, "bank");

        Ok(joltage)
    }
}

/// Reads the digits most significant first, e.g. `[9, 8, 7]` is `987`.
pub fn joltage(digits: &[u8]) -> Result<u64> {
    digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(digit)))
            .ok_or_else(|| miette!("Joltage of {} digits overflows u64", digits.len()))
    })
}

/// One bank per line. A blank line is an empty bank.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Bank>, extra::Err<Rich<'a, char>>> {
    let bank = text::digits(10).to_slice().or_not().map(|s: Option<&str>| {
        Bank::new(s.unwrap_or_default().bytes().map(|b| b - b'0').collect())
    });

    bank.separated_by(text::newline()).collect()
}

/// Parses the puzzle input. Line terminators at the end of the input do not
/// produce banks; any other whitespace is an error.
pub fn parse(input: &str) -> Result<Vec<Bank>> {
    let input = input.trim_end_matches(['\r', '\n']);
    if input.is_empty() {
        return Ok(Vec::new());
    }

    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Sums the best joltage of every bank when `size` batteries are turned on.
pub fn total_joltage(banks: &[Bank], size: usize) -> Result<u64> {
    banks.iter().try_fold(0u64, |total, bank| {
        let joltage = bank.max_joltage(size)?;
        total
            .checked_add(joltage)
            .ok_or_else(|| miette!("Total joltage overflows u64"))
    })
}
