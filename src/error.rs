use std::any::Any;
use std::io;

use thiserror::Error;

/// Failure of a pipeline stage, as seen by the consumer at the end of the chain.
#[derive(Error, Debug)]
pub enum SeqError {
    #[error("failed to spawn stage thread: {0}")]
    Spawn(#[from] io::Error),

    #[error("stage panicked: {message}")]
    StagePanicked { message: String },
}

impl SeqError {
    /// Turns an unwind payload caught at a terminal operation back into an error.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<SeqError>() {
            Ok(err) => return *err,
            Err(other) => other,
        };
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        SeqError::StagePanicked { message }
    }
}

/// Returned by [`Emitter::emit`](crate::Emitter::emit) when the value could not be handed off.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitError {
    #[error("sequence already closed")]
    Closed,

    #[error("consumer dropped the sequence")]
    Cancelled,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
