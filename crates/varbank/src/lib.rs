//! Fixed-slot telemetry variable bank and serial link planning.
//!
//! `varbank` covers the staging side of a telemetry link: variables are
//! written into a fixed bank of 4-byte slots, and planning helpers answer
//! whether (and how) the resulting traffic fits on the wire.
//!
//! # Architecture
//!
//! ```text
//! VarBank<N> (N fixed 4-byte slots, zeroed at creation)
//! ├── write / write_bytes — bounds-checked word writes
//! ├── read / read_as      — typed readback
//! └── frame               — byte image for the transmitter
//!
//! LinkBudget  — does the variable set fit the line rate?
//! schedule()  — greedy chunked layout of periodic messages
//! ```
//!
//! The bank is an owned value with a single writer (`&mut self`). Nothing
//! in this crate performs I/O; transmission belongs to the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bank;
pub mod budget;
pub mod error;
pub mod id;
pub mod schedule;
pub mod value;

// Public re-exports for the primary API surface.
pub use bank::{VarBank, MAX_VARS};
pub use budget::{BandwidthReport, LinkBudget, RateGroup, BITS_PER_BYTE, COMMON_BAUD_RATES};
pub use error::{BudgetError, ScheduleError, SlotError};
pub use id::{MessageId, SlotId};
pub use schedule::{schedule, Chunk, Message, MessageStats, Overrun, Schedule};
pub use value::{Word, WordValue, VAR_SIZE};
