//! Lazy, composable integer sequences built from nothing but threads and rendezvous channels.
//!
//! Every source and every combinator runs its own producer thread, connected to the next stage
//! by a zero-capacity channel, so a stage is never more than one element ahead of whoever reads
//! it. Sources ([`Sequence::range`], [`Sequence::seq`], [`Sequence::spawn`]) have no upstream;
//! terminal operations ([`Sequence::reduce`], [`Sequence::collect`]) have no downstream and run
//! on the caller's thread.
//!
//! ```
//! use chanseq::Sequence;
//!
//! let squares = Sequence::range(1, 6).map(|x| x * x).collect();
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//!
//! let odd = Sequence::seq().filter(|x| x % 2 == 1).take(3).collect();
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```
//!
//! [`map`](Sequence::map), [`filter`](Sequence::filter), [`take`](Sequence::take) and
//! [`drop`](Sequence::drop) are lazy and fine on infinite input. `reduce` and `collect` are not:
//! they block until their input closes.
//!
//! A panic in a callback or producer ends that stage and is re-raised in whichever thread reads
//! from it, so it travels down the chain to the terminal operation. Use
//! [`Sequence::try_collect`] or [`Sequence::try_reduce`] to get it back as a [`SeqError`].

mod combinators;
mod handoff;
mod sequence;
mod source;
mod terminal;

pub mod config;
pub mod demo;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, EmitError, SeqError};
pub use handoff::Emitter;
pub use sequence::{Iter, Sequence};
pub use source::Pipeline;
