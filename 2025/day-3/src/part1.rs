use miette::*;

use crate::bank;

/// Batteries turned on per bank.
pub const BANK_SIZE: usize = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = bank::parse(input)?;
    let total_joltage = bank::total_joltage(&banks, BANK_SIZE)?;

    Ok(total_joltage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bank::Bank;
    use rstest::rstest;

    /// Single right-to-left pass tracking the best digit seen so far.
    fn max_pair(bank: &[u8]) -> u64 {
        let Some((&last, rest)) = bank.split_last() else {
            return 0;
        };
        if rest.is_empty() {
            return last as u64;
        }

        let mut max_suffix_digit = last as u64;
        let mut best = 0;
        for &d in rest.iter().rev() {
            best = best.max(d as u64 * 10 + max_suffix_digit);
            max_suffix_digit = max_suffix_digit.max(d as u64);
        }
        best
    }

    #[rstest]
    #[case("987654321111111", 98)]
    #[case("811111111111119", 89)]
    #[case("234234234234278", 78)]
    #[case("818181911112111", 92)]
    fn test_max_joltage(#[case] line: &str, #[case] expected: u64) -> Result<()> {
        let banks = bank::parse(line)?;
        assert_eq!(banks[0].max_joltage(BANK_SIZE)?, expected);
        Ok(())
    }

    #[test]
    fn test_agrees_with_pair_scan() -> Result<()> {
        for a in 0..10u8 {
            for b in 0..10u8 {
                for c in 0..10u8 {
                    for d in 0..10u8 {
                        let digits = vec![a, b, c, d];
                        let bank = Bank::new(digits.clone());
                        assert_eq!(bank.max_joltage(BANK_SIZE)?, max_pair(&digits), "{digits:?}");
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "987654321111111
811111111111119
234234234234278
818181911112111";
        assert_eq!("357", process(input)?);
        Ok(())
    }
}
