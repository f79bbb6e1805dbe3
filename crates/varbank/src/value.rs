//! The 4-byte word contract for slot values.

/// Bytes per slot.
pub const VAR_SIZE: usize = 4;

/// One slot's payload: exactly [`VAR_SIZE`] bytes.
pub type Word = [u8; VAR_SIZE];

/// A value that occupies exactly one 4-byte slot.
///
/// Words are encoded little-endian on every target, so a bank image is
/// portable across hosts and the "first four bytes" of a wider source
/// always means the low-order word.
///
/// Narrower integers deliberately do not implement this trait: callers
/// widen them explicitly (`u32::from(x)`), keeping zero-extension visible
/// at the call site.
pub trait WordValue: Copy {
    /// Encode the value as a little-endian word.
    fn to_word(self) -> Word;

    /// Decode a little-endian word back into the value.
    fn from_word(word: Word) -> Self;
}

impl WordValue for u32 {
    fn to_word(self) -> Word {
        self.to_le_bytes()
    }

    fn from_word(word: Word) -> Self {
        Self::from_le_bytes(word)
    }
}

impl WordValue for i32 {
    fn to_word(self) -> Word {
        self.to_le_bytes()
    }

    fn from_word(word: Word) -> Self {
        Self::from_le_bytes(word)
    }
}

impl WordValue for f32 {
    fn to_word(self) -> Word {
        self.to_le_bytes()
    }

    fn from_word(word: Word) -> Self {
        Self::from_le_bytes(word)
    }
}
