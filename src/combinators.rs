//! Transform stages. All of them are lazy and safe on infinite input.

use crate::sequence::Sequence;

impl Sequence {
    /// Emits `f(x)` for every `x` of `self`, in order.
    pub fn map<F>(self, mut f: F) -> Sequence
    where
        F: FnMut(i64) -> i64 + Send + 'static,
    {
        let pipeline = self.pipeline().clone();
        let mut upstream = self;
        Sequence::launch(pipeline, "map", move |out| {
            while let Some(x) = upstream.pull(out)? {
                out.emit(f(x))?;
            }
            Ok(())
        })
    }

    /// Keeps only the elements for which `pred` holds, in their original order.
    pub fn filter<P>(self, mut pred: P) -> Sequence
    where
        P: FnMut(i64) -> bool + Send + 'static,
    {
        let pipeline = self.pipeline().clone();
        let mut upstream = self;
        Sequence::launch(pipeline, "filter", move |out| {
            while let Some(x) = upstream.pull(out)? {
                if pred(x) {
                    out.emit(x)?;
                }
            }
            Ok(())
        })
    }

    /// The first `n` elements of `self`, or all of them if there are fewer.
    ///
    /// After the `n`-th element the upstream is dropped without being read further, which
    /// cancels its producer. `take(0)` is closed from the start.
    pub fn take(self, n: usize) -> Sequence {
        let pipeline = self.pipeline().clone();
        let mut upstream = self;
        Sequence::launch(pipeline, "take", move |out| {
            for _ in 0..n {
                match upstream.pull(out)? {
                    Some(x) => out.emit(x)?,
                    None => break,
                }
            }
            Ok(())
        })
    }

    /// Skips the first `n` elements of `self` and emits the rest. `drop(0)` passes everything
    /// through.
    pub fn drop(self, n: usize) -> Sequence {
        let pipeline = self.pipeline().clone();
        let mut upstream = self;
        Sequence::launch(pipeline, "drop", move |out| {
            for _ in 0..n {
                if upstream.pull(out)?.is_none() {
                    return Ok(());
                }
            }
            while let Some(x) = upstream.pull(out)? {
                out.emit(x)?;
            }
            Ok(())
        })
    }
}
