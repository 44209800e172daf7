use crate::error::Error;

/// Enumerates every boolean vector of length `n`, 2ⁿ in total.
///
/// Combinations for `n` are the combinations for `n - 1` prefixed with
/// `true`, followed by the same prefixed with `false`. This fixes the
/// enumeration order the truth-table builder and its callers rely on:
/// the first combination is all-`true`, the last all-`false`.
///
/// Fails with [`Error::InvalidArgument`] when 2ⁿ rows cannot be addressed
/// (`n >= usize::BITS`).
pub fn combinations(n: usize) -> Result<Vec<Vec<bool>>, Error> {
    if n >= usize::BITS as usize {
        return Err(Error::InvalidArgument(format!(
            "cannot enumerate 2^{n} combinations"
        )));
    }

    Ok(combinations_recursive(n))
}

fn combinations_recursive(n: usize) -> Vec<Vec<bool>> {
    if n == 0 {
        return vec![Vec::new()];
    }

    let sub = combinations_recursive(n - 1);
    let mut result = Vec::with_capacity(sub.len() * 2);

    for prefix in [true, false] {
        for tail in &sub {
            let mut row = Vec::with_capacity(n);
            row.push(prefix);
            row.extend_from_slice(tail);
            result.push(row);
        }
    }

    result
}
