//! Property suite for the fixed-slot bank: writes land exactly where
//! addressed, failed writes change nothing, and slots are independent.

use proptest::prelude::*;

use varbank::{SlotError, SlotId, VarBank, MAX_VARS, VAR_SIZE};

fn arb_slot() -> impl Strategy<Value = SlotId> {
    (0u32..MAX_VARS as u32).prop_map(SlotId)
}

fn arb_word() -> impl Strategy<Value = [u8; VAR_SIZE]> {
    any::<[u8; VAR_SIZE]>()
}

proptest! {
    #[test]
    fn write_then_read_returns_the_word(id in arb_slot(), word in arb_word()) {
        let mut bank = VarBank::<MAX_VARS>::new();
        bank.write_bytes(id, &word).unwrap();
        prop_assert_eq!(bank.read(id).unwrap(), word);
    }

    #[test]
    fn typed_write_round_trips(id in arb_slot(), value in any::<u32>()) {
        let mut bank = VarBank::<MAX_VARS>::new();
        bank.write(id, value).unwrap();
        prop_assert_eq!(bank.read_as::<u32>(id).unwrap(), value);
    }

    #[test]
    fn out_of_range_write_changes_nothing(
        id in (MAX_VARS as u32..u32::MAX),
        word in arb_word(),
        seed in arb_word(),
    ) {
        let mut bank = VarBank::<MAX_VARS>::new();
        bank.write_bytes(SlotId(0), &seed).unwrap();
        let before = bank.clone();

        let err = bank.write_bytes(SlotId(id), &word).unwrap_err();
        prop_assert_eq!(err, SlotError::OutOfRange { id: SlotId(id), slots: MAX_VARS });
        prop_assert_eq!(bank, before);
    }

    #[test]
    fn undersized_write_changes_nothing(
        id in arb_slot(),
        short in prop::collection::vec(any::<u8>(), 0..VAR_SIZE),
    ) {
        let mut bank = VarBank::<MAX_VARS>::new();
        let before = bank.clone();

        let err = bank.write_bytes(id, &short).unwrap_err();
        prop_assert_eq!(err, SlotError::Undersized { len: short.len() });
        prop_assert_eq!(bank, before);
    }

    #[test]
    fn write_is_idempotent(id in arb_slot(), word in arb_word()) {
        let mut once = VarBank::<MAX_VARS>::new();
        once.write_bytes(id, &word).unwrap();

        let mut twice = VarBank::<MAX_VARS>::new();
        twice.write_bytes(id, &word).unwrap();
        twice.write_bytes(id, &word).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn writes_do_not_leak_into_other_slots(
        target in arb_slot(),
        word in arb_word(),
    ) {
        let mut bank = VarBank::<MAX_VARS>::new();
        bank.write_bytes(target, &word).unwrap();

        for other in 0..MAX_VARS as u32 {
            if SlotId(other) != target {
                prop_assert_eq!(bank.read(SlotId(other)).unwrap(), [0u8; VAR_SIZE]);
            }
        }
    }

    #[test]
    fn truncation_keeps_only_the_leading_word(
        id in arb_slot(),
        word in arb_word(),
        tail in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut source = word.to_vec();
        source.extend_from_slice(&tail);

        let mut bank = VarBank::<MAX_VARS>::new();
        bank.write_bytes(id, &source).unwrap();
        prop_assert_eq!(bank.read(id).unwrap(), word);
    }

    #[test]
    fn frame_reflects_every_slot(words in prop::collection::vec(arb_word(), MAX_VARS)) {
        let mut bank = VarBank::<MAX_VARS>::new();
        for (i, word) in words.iter().enumerate() {
            bank.write_bytes(SlotId(i as u32), word).unwrap();
        }

        let frame = bank.frame();
        prop_assert_eq!(frame.len(), MAX_VARS * VAR_SIZE);
        for (i, word) in words.iter().enumerate() {
            prop_assert_eq!(&frame[i * VAR_SIZE..(i + 1) * VAR_SIZE], &word[..]);
        }
    }
}
