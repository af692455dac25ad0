//! Prime factorization by trial division.

/// Prime factors of `n` in ascending order, repeated per multiplicity.
///
/// `0` and `1` have no prime factors and yield an empty vector.
/// Runs in `O(√n)` divisor trials; the loop bound is written as
/// `d <= rest / d` so it cannot overflow near `u64::MAX`.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }
    let mut rest = n;
    let mut d = 2u64;
    while d <= rest / d {
        while rest % d == 0 {
            factors.push(d);
            rest /= d;
        }
        d += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::prime_factors;

    #[test]
    fn small_values() {
        assert!(prime_factors(0).is_empty());
        assert!(prime_factors(1).is_empty());
        assert_eq!(prime_factors(2), [2]);
        assert_eq!(prime_factors(12), [2, 2, 3]);
        assert_eq!(prime_factors(13), [13]);
        assert_eq!(prime_factors(360), [2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn large_prime_and_square() {
        // 2^31 - 1 is a Mersenne prime.
        assert_eq!(prime_factors(2_147_483_647), [2_147_483_647]);
        assert_eq!(prime_factors(65_521 * 65_521), [65_521, 65_521]);
    }

    #[test]
    fn power_of_two_near_u64_max() {
        assert_eq!(prime_factors(1u64 << 63), vec![2; 63]);
    }
}
