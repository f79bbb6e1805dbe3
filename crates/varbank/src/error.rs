//! Error types, organized by subsystem: bank, budget, and scheduler.

use std::error::Error;
use std::fmt;

use crate::id::{MessageId, SlotId};
use crate::value::VAR_SIZE;

/// Errors from [`VarBank`](crate::VarBank) operations.
///
/// Any failed operation leaves the bank unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// The slot id is at or beyond the bank's slot count.
    OutOfRange {
        /// The offending id.
        id: SlotId,
        /// Number of slots in the bank.
        slots: usize,
    },
    /// The source buffer is shorter than one word.
    ///
    /// Zero-extension is never implicit; widen the value before writing.
    Undersized {
        /// Length of the source buffer in bytes.
        len: usize,
    },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { id, slots } => {
                write!(f, "slot id {id} out of range: bank has {slots} slots")
            }
            Self::Undersized { len } => {
                write!(f, "source is {len} bytes, a slot needs {VAR_SIZE}")
            }
        }
    }
}

impl Error for SlotError {}

/// Errors from link budget assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetError {
    /// The configured baud rate is zero.
    ZeroBaudRate,
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBaudRate => write!(f, "baud rate is zero"),
        }
    }
}

impl Error for BudgetError {}

/// Errors from transmission scheduling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScheduleError {
    /// The line rate is zero; no message has a finite duration.
    ZeroBaudRate,
    /// A message's frequency is zero, negative, or not finite.
    NonPositiveFrequency {
        /// The offending message.
        message: MessageId,
        /// The rejected frequency in hertz.
        frequency_hz: f64,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBaudRate => write!(f, "baud rate is zero"),
            Self::NonPositiveFrequency {
                message,
                frequency_hz,
            } => {
                write!(
                    f,
                    "message {message} has non-positive frequency {frequency_hz} Hz"
                )
            }
        }
    }
}

impl Error for ScheduleError {}
