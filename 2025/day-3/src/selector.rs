use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SelectError {
    /// The requested length is negative or longer than the sequence.
    ///
    /// `requested` saturates at `i128::MAX` for larger `u128` values.
    #[error("cannot keep {requested} digits out of a sequence of {len}")]
    #[diagnostic(
        code(selector::invalid_argument),
        help("the number of digits to keep must be between 0 and the sequence length")
    )]
    InvalidArgument { requested: i128, len: usize },
}

fn keep_count<K>(k: K, len: usize) -> Result<usize, SelectError>
where
    K: TryInto<usize> + TryInto<i128> + Copy,
{
    match TryInto::<usize>::try_into(k) {
        Ok(keep) if keep <= len => Ok(keep),
        _ => Err(SelectError::InvalidArgument {
            requested: TryInto::<i128>::try_into(k).unwrap_or(i128::MAX),
            len,
        }),
    }
}

/// Finds the positions of the `k` digits that form the largest number while
/// preserving their relative order.
///
/// The returned indices are strictly increasing. Among equal digits the
/// leftmost ones are kept.
///
/// # Examples:
/// ```
/// use aoc2025_day_3::selector::select_indices;
///
/// assert_eq!(select_indices(&[8, 1, 8, 1, 9], 3).unwrap(), vec![0, 2, 4]);
/// assert!(select_indices(&[1, 2], -1).is_err());
/// ```
pub fn select_indices<K>(digits: &[u8], k: K) -> Result<Vec<usize>, SelectError>
where
    K: TryInto<usize> + TryInto<i128> + Copy,
{
    let n = digits.len();
    let keep = keep_count(k, n)?;

    if keep == n {
        return Ok((0..n).collect());
    }

    let mut to_remove = n - keep;
    let mut stack: Vec<usize> = Vec::with_capacity(n);

    for (i, &digit) in digits.iter().enumerate() {
        // Strict comparison: an equal digit never displaces an earlier one.
        while to_remove > 0 && stack.last().is_some_and(|&top| digits[top] < digit) {
            stack.pop();
            to_remove -= 1;
        }
        stack.push(i);
    }

    // Whatever budget is left can only go to the tail, which is
    // non-increasing by now.
    stack.truncate(stack.len() - to_remove);
    debug_assert_eq!(stack.len(), keep);

    tracing::trace!(n, keep, ?stack, "selected positions");

    Ok(stack)
}

/// Keeps exactly `k` digits of `digits`, in order, so that their
/// concatenation is as large as possible.
///
/// Fails with [`SelectError::InvalidArgument`] when `k` is negative or
/// greater than `digits.len()`. Selecting every digit returns the input as is.
pub fn select<K>(digits: &[u8], k: K) -> Result<Vec<u8>, SelectError>
where
    K: TryInto<usize> + TryInto<i128> + Copy,
{
    let indices = select_indices(digits, k)?;
    Ok(indices.into_iter().map(|i| digits[i]).collect())
}
