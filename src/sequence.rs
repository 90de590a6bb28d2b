use std::panic::resume_unwind;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use crate::error::{EmitError, SeqError};
use crate::handoff::{self, Emitter, Outlet};
use crate::source::Pipeline;

/// A lazily produced, ordered stream of `i64`s with exactly one consumer.
///
/// Dropping it before it is exhausted cancels its producer.
pub struct Sequence {
    outlet: Outlet,
    producer: Option<Producer>,
    pipeline: Pipeline,
    exhausted: bool,
}

enum Producer {
    Running(JoinHandle<()>),
    Failed(SeqError),
}

impl Sequence {
    pub(crate) fn detached(pipeline: Pipeline) -> (Emitter, Sequence) {
        let (emitter, outlet) = handoff::pair();
        let seq = Sequence {
            outlet,
            producer: None,
            pipeline,
            exhausted: false,
        };
        (emitter, seq)
    }

    /// Runs `body` on a fresh stage thread and returns the sequence it emits into. The sequence
    /// is closed when `body` returns, whether it finished or bailed out with an error.
    pub(crate) fn launch<F>(pipeline: Pipeline, stage: &'static str, body: F) -> Sequence
    where
        F: FnOnce(&Emitter) -> Result<(), EmitError> + Send + 'static,
    {
        let (emitter, outlet) = handoff::pair();
        let config = pipeline.config();
        let mut builder = thread::Builder::new().name(config.thread_name(stage));
        if let Some(size) = config.stack_size {
            builder = builder.stack_size(size);
        }

        let spawned = builder.spawn(move || {
            let span = tracing::trace_span!("stage", name = stage);
            let _enter = span.enter();
            trace!("stage starting");
            match body(&emitter) {
                Ok(()) => trace!("stage finished"),
                Err(err) => debug!(%err, "stage stopped early"),
            }
        });

        match spawned {
            Ok(handle) => Sequence {
                outlet,
                producer: Some(Producer::Running(handle)),
                pipeline,
                exhausted: false,
            },
            Err(err) => {
                warn!(stage, %err, "failed to spawn stage thread");
                // nothing will ever emit; hand back a closed sequence carrying the failure
                let (emitter, mut seq) = Sequence::detached(pipeline);
                drop(emitter);
                seq.producer = Some(Producer::Failed(SeqError::Spawn(err)));
                seq
            }
        }
    }

    /// Blocks for the next element. `None` marks the end, and every call after it returns
    /// `None` without blocking.
    ///
    /// # Panics
    ///
    /// Re-raises a panic or spawn failure of the producer once the end is reached.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<i64> {
        if self.exhausted {
            return None;
        }
        let value = self.outlet.recv();
        self.observe(value)
    }

    /// [`next`](Sequence::next) for a producer reading from `self` on behalf of `out`: gives up
    /// with [`EmitError::Cancelled`] as soon as `out`'s consumer is dropped, even while the
    /// upstream has nothing to hand over.
    pub fn pull(&mut self, out: &Emitter) -> Result<Option<i64>, EmitError> {
        if self.exhausted {
            return Ok(None);
        }
        let value = self.outlet.recv_for(out)?;
        Ok(self.observe(value))
    }

    fn observe(&mut self, value: Option<i64>) -> Option<i64> {
        if value.is_none() {
            self.exhausted = true;
            self.settle();
        }
        value
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    fn settle(&mut self) {
        match self.producer.take() {
            None => {}
            Some(Producer::Running(handle)) => {
                if let Err(payload) = handle.join() {
                    if !thread::panicking() {
                        warn!("producer panicked; propagating to consumer");
                        resume_unwind(payload);
                    }
                }
            }
            Some(Producer::Failed(err)) => {
                if !thread::panicking() {
                    resume_unwind(Box::new(err));
                }
            }
        }
    }
}

impl Drop for Sequence {
    fn drop(&mut self) {
        if !self.exhausted {
            trace!("sequence dropped before exhaustion; cancelling producer");
        }
        self.outlet.cancel();
    }
}

impl IntoIterator for Sequence {
    type Item = i64;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter { seq: self }
    }
}

/// Blocking iterator over the elements of a [`Sequence`].
pub struct Iter {
    seq: Sequence,
}

impl Iter {
    pub fn into_inner(self) -> Sequence {
        self.seq
    }
}

impl Iterator for Iter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.seq.next()
    }
}

impl std::iter::FusedIterator for Iter {}
