use crossbeam_channel::{select, Receiver, Sender, TryRecvError};

use crate::error::EmitError;

// Nothing is ever sent on the cancel channel; the consumer dropping its sender is the signal.
pub(crate) fn pair() -> (Emitter, Outlet) {
    let (sink, source) = crossbeam_channel::bounded(0);
    let (cancel, cancelled) = crossbeam_channel::bounded(0);
    (
        Emitter {
            sink: Some(sink),
            cancelled,
        },
        Outlet {
            source,
            cancel: Some(cancel),
        },
    )
}

/// Producing end of a sequence. Closes the sequence when dropped.
pub struct Emitter {
    sink: Option<Sender<i64>>,
    cancelled: Receiver<()>,
}

impl Emitter {
    /// Hands `value` to the consumer, blocking until it is taken.
    pub fn emit(&self, value: i64) -> Result<(), EmitError> {
        let sink = self.sink.as_ref().ok_or(EmitError::Closed)?;
        self.check()?;
        sink.send(value).map_err(|_| EmitError::Cancelled)
    }

    /// Fails with [`EmitError::Cancelled`] once the consumer has dropped its end.
    pub fn check(&self) -> Result<(), EmitError> {
        match self.cancelled.try_recv() {
            Err(TryRecvError::Disconnected) => Err(EmitError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Marks the end of the sequence. Calling it again does nothing.
    pub fn close(&mut self) {
        self.sink.take();
    }

    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }
}

impl Drop for Emitter {
    fn drop(&mut self) {
        self.close();
    }
}

pub(crate) struct Outlet {
    source: Receiver<i64>,
    cancel: Option<Sender<()>>,
}

impl Outlet {
    /// `None` once the emitter is closed or gone.
    pub(crate) fn recv(&self) -> Option<i64> {
        self.source.recv().ok()
    }

    /// Like `recv`, but gives up as soon as whoever reads from `out` goes away.
    pub(crate) fn recv_for(&self, out: &Emitter) -> Result<Option<i64>, EmitError> {
        select! {
            recv(self.source) -> msg => Ok(msg.ok()),
            recv(out.cancelled) -> _ => Err(EmitError::Cancelled),
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.cancel.take();
    }
}
