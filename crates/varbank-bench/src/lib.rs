//! Benchmark profiles and utilities for the varbank telemetry library.
//!
//! Provides pre-built message mixes and banks for benchmarking:
//!
//! - [`reference_mix`]: three-rate telemetry mix that fits a 115200 line
//! - [`stress_mix`]: denser mix that forces chunking and overruns
//! - [`full_bank`]: a default-size bank with every slot populated

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use varbank::{Message, MessageId, SlotId, VarBank, MAX_VARS};

/// Reference line rate used by the benches.
pub const REFERENCE_BAUD: u32 = 115_200;

/// Build the reference telemetry mix: a fast 4-byte channel, a medium
/// 10-byte status message, and a slow 33-byte housekeeping block.
///
/// Fits a 115200 line with headroom; scheduling it produces no overruns.
pub fn reference_mix() -> Vec<Message> {
    vec![
        Message {
            id: MessageId(1),
            size_bytes: 4,
            frequency_hz: 890.0,
        },
        Message {
            id: MessageId(2),
            size_bytes: 10,
            frequency_hz: 31.0,
        },
        Message {
            id: MessageId(3),
            size_bytes: 33,
            frequency_hz: 2.0,
        },
    ]
}

/// Build a stress mix: eight competing channels that oversubscribe the
/// reference line, forcing heavy chunking and overrun bookkeeping.
pub fn stress_mix() -> Vec<Message> {
    (0..8)
        .map(|i| Message {
            id: MessageId(i),
            size_bytes: 16 + 8 * i,
            frequency_hz: 400.0 / f64::from(i + 1),
        })
        .collect()
}

/// Build a default-size bank with every slot holding its own index.
pub fn full_bank() -> VarBank<MAX_VARS> {
    let mut bank = VarBank::new();
    for i in 0..MAX_VARS as u32 {
        bank.write(SlotId(i), i).unwrap();
    }
    bank
}

#[cfg(test)]
mod tests {
    use super::*;
    use varbank::schedule;

    #[test]
    fn reference_mix_is_feasible() {
        let result = schedule(&reference_mix(), 1.0, REFERENCE_BAUD).unwrap();
        assert!(result.is_feasible());
    }

    #[test]
    fn stress_mix_overruns() {
        let result = schedule(&stress_mix(), 1.0, REFERENCE_BAUD).unwrap();
        assert!(!result.is_feasible());
    }

    #[test]
    fn full_bank_has_no_zero_slots_after_slot_zero() {
        let bank = full_bank();
        for i in 1..MAX_VARS as u32 {
            assert_eq!(bank.read_as::<u32>(SlotId(i)).unwrap(), i);
        }
    }
}
