use std::sync::Arc;

use crate::config::Config;
use crate::error::EmitError;
use crate::handoff::Emitter;
use crate::sequence::Sequence;

/// Shared settings for a chain of stages. Every combinator inherits the pipeline of the
/// sequence it is applied to.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    config: Arc<Config>,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// An emitter/sequence pair with no thread behind it.
    ///
    /// Emitting blocks until the sequence is read, so the emitter has to be driven from a
    /// different thread than the one consuming.
    pub fn channel(&self) -> (Emitter, Sequence) {
        Sequence::detached(self.clone())
    }

    /// Runs `body` on its own thread, emitting into the returned sequence, and closes the
    /// sequence when `body` returns.
    pub fn spawn<F>(&self, body: F) -> Sequence
    where
        F: FnOnce(&Emitter) -> Result<(), EmitError> + Send + 'static,
    {
        Sequence::launch(self.clone(), "spawn", body)
    }

    /// The integers in `[from, to)`, ascending. Empty when `from >= to`.
    pub fn range(&self, from: i64, to: i64) -> Sequence {
        Sequence::launch(self.clone(), "range", move |out| {
            (from..to).try_for_each(|i| out.emit(i))
        })
    }

    /// `0, 1, 2, ...` without end.
    pub fn seq(&self) -> Sequence {
        Sequence::launch(self.clone(), "seq", |out| {
            let mut n = 0i64;
            loop {
                out.emit(n)?;
                n += 1;
            }
        })
    }

    pub fn from_iter<I>(&self, iter: I) -> Sequence
    where
        I: IntoIterator<Item = i64>,
        I::IntoIter: Send + 'static,
    {
        let mut iter = iter.into_iter();
        Sequence::launch(self.clone(), "iter", move |out| {
            iter.try_for_each(|x| out.emit(x))
        })
    }
}

impl Sequence {
    /// See [`Pipeline::channel`].
    pub fn channel() -> (Emitter, Sequence) {
        Pipeline::default().channel()
    }

    /// See [`Pipeline::spawn`].
    pub fn spawn<F>(body: F) -> Sequence
    where
        F: FnOnce(&Emitter) -> Result<(), EmitError> + Send + 'static,
    {
        Pipeline::default().spawn(body)
    }

    /// See [`Pipeline::range`].
    pub fn range(from: i64, to: i64) -> Sequence {
        Pipeline::default().range(from, to)
    }

    /// See [`Pipeline::seq`]. Never closes: bound it with [`take`](Sequence::take) before
    /// handing it to a terminal operation.
    pub fn seq() -> Sequence {
        Pipeline::default().seq()
    }

    /// See [`Pipeline::from_iter`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iter: I) -> Sequence
    where
        I: IntoIterator<Item = i64>,
        I::IntoIter: Send + 'static,
    {
        Pipeline::default().from_iter(iter)
    }
}
