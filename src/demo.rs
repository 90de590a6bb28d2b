//! Small pipelines used by the `chanseq` binary.

use crate::source::Pipeline;

/// Squares of `1..=n`.
pub fn squares(pipeline: &Pipeline, n: i64) -> Vec<i64> {
    pipeline.range(1, n + 1).map(|x| x * x).collect()
}

/// `n!` for a positive `n`.
pub fn factorial(pipeline: &Pipeline, n: i64) -> i64 {
    pipeline.range(1, n + 1).reduce(1, |acc, cur| acc * cur)
}

/// The first `n` primes.
pub fn primes(pipeline: &Pipeline, n: usize) -> Vec<i64> {
    pipeline.seq().drop(2).filter(is_prime).take(n).collect()
}

/// True iff `n > 1` and no integer in `[2, floor(sqrt(n))]` divides it.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let found: Vec<i64> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(found, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn factorial_of_one() {
        assert_eq!(factorial(&Pipeline::default(), 1), 1);
    }
}
