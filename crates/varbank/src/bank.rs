//! The fixed-slot variable bank.
//!
//! [`VarBank`] holds `N` four-byte slots, zero-initialised at creation.
//! Callers mutate it only through the write operations and never receive
//! a reference into the storage; the read side returns copies.

use crate::error::SlotError;
use crate::id::SlotId;
use crate::value::{Word, WordValue, VAR_SIZE};

/// Default number of slots in a [`VarBank`].
pub const MAX_VARS: usize = 10;

/// A fixed bank of `N` four-byte variable slots.
///
/// The slot count is a compile-time constant; no slot is ever added or
/// removed for the lifetime of the bank. Writes take `&mut self`, so a
/// bank has exactly one writer at a time; callers that need sharing wrap
/// the bank in their own synchronisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarBank<const N: usize = MAX_VARS> {
    words: [Word; N],
}

impl<const N: usize> VarBank<N> {
    /// Create a bank with every slot zeroed.
    pub fn new() -> Self {
        Self {
            words: [[0; VAR_SIZE]; N],
        }
    }

    fn index(&self, id: SlotId) -> Result<usize, SlotError> {
        let idx = id.0 as usize;
        if idx >= N {
            return Err(SlotError::OutOfRange { id, slots: N });
        }
        Ok(idx)
    }

    /// Write a typed value into slot `id`.
    ///
    /// The value's little-endian word overwrites the slot's previous
    /// contents.
    pub fn write<T: WordValue>(&mut self, id: SlotId, value: T) -> Result<(), SlotError> {
        let idx = self.index(id)?;
        self.words[idx] = value.to_word();
        Ok(())
    }

    /// Write the leading [`VAR_SIZE`] bytes of `bytes` into slot `id`.
    ///
    /// Longer sources are truncated: only the first word is kept,
    /// byte-for-byte, and the rest is discarded. Sources shorter than one
    /// word are rejected with [`SlotError::Undersized`] rather than
    /// zero-extended.
    pub fn write_bytes(&mut self, id: SlotId, bytes: &[u8]) -> Result<(), SlotError> {
        let idx = self.index(id)?;
        if bytes.len() < VAR_SIZE {
            return Err(SlotError::Undersized { len: bytes.len() });
        }
        let mut word = [0u8; VAR_SIZE];
        word.copy_from_slice(&bytes[..VAR_SIZE]);
        self.words[idx] = word;
        Ok(())
    }

    /// Read slot `id` as a raw word.
    pub fn read(&self, id: SlotId) -> Result<Word, SlotError> {
        Ok(self.words[self.index(id)?])
    }

    /// Read slot `id`, decoding the word as `T`.
    pub fn read_as<T: WordValue>(&self, id: SlotId) -> Result<T, SlotError> {
        self.read(id).map(T::from_word)
    }

    /// Number of slots in the bank.
    pub const fn slots(&self) -> usize {
        N
    }

    /// Iterate over all words in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }

    /// The bank's byte image: all slots flattened in slot order.
    ///
    /// This is the payload a transmitter sends down the line.
    pub fn frame(&self) -> Vec<u8> {
        self.words.iter().flatten().copied().collect()
    }
}

impl<const N: usize> Default for VarBank<N> {
    fn default() -> Self {
        Self::new()
    }
}
