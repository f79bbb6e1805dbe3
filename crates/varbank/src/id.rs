//! Strongly-typed identifiers for slots and scheduled messages.

use std::fmt;

/// Identifies a slot in a [`VarBank`](crate::VarBank).
///
/// Slots are addressed `0..N-1`. The newtype makes negative indices
/// unrepresentable; the only invalid ids are those at or beyond the
/// bank's slot count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a periodic message within one scheduling run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u32);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MessageId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
