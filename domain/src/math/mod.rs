//! Elementary number theory.
//!
//! Pure functions with no I/O:
//!
//! - [`generate_fibonacci`]: first `n` Fibonacci numbers
//! - [`is_prime`] / [`filter_primes`]: trial-division primality
//! - [`gcd`] / [`calculate_hcf`]: greatest common divisor over a list
//! - [`lcm`] / [`calculate_lcm`]: least common multiple over a list
//!
//! List operations reject empty input and non-positive elements with
//! [`MathError`]; results that do not fit a `u64` are reported as
//! [`MathError::Overflow`] instead of wrapping.

mod divisor;
mod error;
mod fibonacci;
mod prime;

pub use divisor::{calculate_hcf, calculate_lcm, gcd, lcm};
pub use error::MathError;
pub use fibonacci::{MAX_FIBONACCI_TERMS, generate_fibonacci};
pub use prime::{filter_primes, is_prime};
