//! Terminal operations. These run on the caller's thread and drain their input completely.
//!
//! # Blocking
//!
//! None of them return until the input closes. Given a sequence that never closes, such as
//! [`Sequence::seq`] without a [`take`](Sequence::take), they block forever.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::SeqError;
use crate::sequence::Sequence;

impl Sequence {
    /// Left fold of `f` over the whole sequence, starting from `init`.
    ///
    /// Blocks until the sequence closes, forever if it never does.
    pub fn reduce<F>(mut self, init: i64, mut f: F) -> i64
    where
        F: FnMut(i64, i64) -> i64,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Every remaining element, in emission order. Empty if the sequence was already closed.
    ///
    /// Blocks until the sequence closes, forever if it never does.
    pub fn collect(self) -> Vec<i64> {
        self.into_iter().collect()
    }

    /// Like [`reduce`](Sequence::reduce), but a failed stage comes back as an error instead of
    /// unwinding through the caller.
    pub fn try_reduce<F>(self, init: i64, f: F) -> Result<i64, SeqError>
    where
        F: FnMut(i64, i64) -> i64,
    {
        catch_unwind(AssertUnwindSafe(move || self.reduce(init, f))).map_err(SeqError::from_panic)
    }

    /// Like [`collect`](Sequence::collect), but a failed stage comes back as an error.
    pub fn try_collect(self) -> Result<Vec<i64>, SeqError> {
        catch_unwind(AssertUnwindSafe(move || self.collect())).map_err(SeqError::from_panic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{SeqError, Sequence};

    #[test]
    fn reduce_is_left_fold() {
        // (((0 - 1) - 2) - 3)
        assert_eq!(Sequence::range(1, 4).reduce(0, |acc, x| acc - x), -6);
    }

    #[test]
    fn reduce_empty_returns_init() {
        assert_eq!(Sequence::range(0, 0).reduce(99, |acc, x| acc + x), 99);
    }

    #[test]
    fn collect_empty() {
        assert_eq!(Sequence::range(4, 1).collect(), Vec::<i64>::new());
    }

    #[test]
    fn try_collect_ok() {
        assert_eq!(Sequence::range(0, 3).try_collect().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn try_reduce_reports_callback_panic() {
        let err = Sequence::range(0, 10)
            .map(|x| if x == 5 { panic!("no fives") } else { x })
            .try_reduce(0, |acc, x| acc + x)
            .unwrap_err();
        assert!(matches!(err, SeqError::StagePanicked { ref message } if message == "no fives"));
    }
}
