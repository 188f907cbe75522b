//! Fibonacci sequence generation

use super::error::MathError;

/// Largest term count whose every term fits in a `u64` (F(0)..=F(93)).
pub const MAX_FIBONACCI_TERMS: u32 = 94;

/// Generate the first `n` Fibonacci numbers, starting `0, 1`.
///
/// # Example
///
/// ```
/// use oneword_domain::math::generate_fibonacci;
///
/// assert_eq!(generate_fibonacci(6).unwrap(), vec![0, 1, 1, 2, 3, 5]);
/// assert!(generate_fibonacci(0).unwrap().is_empty());
/// ```
pub fn generate_fibonacci(n: u32) -> Result<Vec<u64>, MathError> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(MathError::Overflow {
            operation: "fibonacci",
        });
    }

    let mut terms = Vec::with_capacity(n as usize);
    let (mut current, mut next) = (0u64, 1u64);
    for _ in 0..n {
        terms.push(current);
        // The successor of the last admissible term may overflow; it is never pushed.
        let following = current.checked_add(next).unwrap_or(u64::MAX);
        current = next;
        next = following;
    }
    Ok(terms)
}
