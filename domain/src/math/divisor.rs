//! Greatest common divisor and least common multiple

use super::error::MathError;

/// Greatest common divisor of `|a|` and `|b|` (Euclid). `gcd(0, 0)` is 0.
///
/// # Example
///
/// ```
/// use oneword_domain::math::gcd;
///
/// assert_eq!(gcd(48, -18), 6);
/// ```
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two positive values.
pub fn lcm(a: u64, b: u64) -> Result<u64, MathError> {
    let divisor = gcd_u64(a, b);
    if divisor == 0 {
        return Ok(0);
    }
    (a / divisor)
        .checked_mul(b)
        .ok_or(MathError::Overflow { operation: "lcm" })
}

/// Highest common factor of a non-empty list of positive integers.
pub fn calculate_hcf(numbers: &[i64]) -> Result<u64, MathError> {
    let values = validate_positive(numbers)?;
    Ok(values.into_iter().reduce(gcd_u64).unwrap_or_default())
}

/// Least common multiple of a non-empty list of positive integers.
pub fn calculate_lcm(numbers: &[i64]) -> Result<u64, MathError> {
    let mut values = validate_positive(numbers)?.into_iter();
    let first = values.next().ok_or(MathError::EmptyInput)?;
    values.try_fold(first, lcm)
}

fn validate_positive(numbers: &[i64]) -> Result<Vec<u64>, MathError> {
    if numbers.is_empty() {
        return Err(MathError::EmptyInput);
    }
    numbers
        .iter()
        .map(|&n| {
            if n > 0 {
                Ok(n as u64)
            } else {
                Err(MathError::NonPositive(n))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    }

    #[test]
    fn test_lcm_pair() {
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(7, 1).unwrap(), 7);
        assert_eq!(
            lcm(u64::MAX, u64::MAX - 1),
            Err(MathError::Overflow { operation: "lcm" })
        );
    }

    #[test]
    fn test_hcf_of_list() {
        assert_eq!(calculate_hcf(&[12, 18, 24]).unwrap(), 6);
        assert_eq!(calculate_hcf(&[7]).unwrap(), 7);
        assert_eq!(calculate_hcf(&[9, 28]).unwrap(), 1);
    }

    #[test]
    fn test_lcm_of_list() {
        assert_eq!(calculate_lcm(&[4, 6, 8]).unwrap(), 24);
        assert_eq!(calculate_lcm(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap(), 2520);
        assert_eq!(calculate_lcm(&[5]).unwrap(), 5);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(calculate_hcf(&[]), Err(MathError::EmptyInput));
        assert_eq!(calculate_lcm(&[]), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_non_positive_rejected() {
        assert_eq!(calculate_hcf(&[4, 0, 8]), Err(MathError::NonPositive(0)));
        assert_eq!(calculate_lcm(&[4, -2]), Err(MathError::NonPositive(-2)));
    }

    #[test]
    fn test_lcm_list_overflow() {
        let big = i64::MAX;
        assert_eq!(
            calculate_lcm(&[big, big - 1]),
            Err(MathError::Overflow { operation: "lcm" })
        );
    }
}
