//! Primality testing and prime filtering

/// Check whether `n` is prime using trial division by odd divisors.
///
/// # Example
///
/// ```
/// use oneword_domain::math::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    let mut divisor = 3u64;
    // divisor <= sqrt(i64::MAX) so the square cannot overflow a u64
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Keep only the primes of `numbers`, preserving order and duplicates.
pub fn filter_primes(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_prime(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes: Vec<i64> = (-5..=30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_squares_of_primes_are_composite() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(7919 * 7919));
    }

    #[test]
    fn test_large_prime() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        assert_eq!(
            filter_primes(&[10, 7, 4, 3, 7, -3, 0, 1, 2]),
            vec![7, 3, 7, 2]
        );
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_primes(&[]).is_empty());
    }
}
