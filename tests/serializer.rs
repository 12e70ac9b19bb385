//! Tests for the bit serializer, driven with hand-made edge pulses.

use i2s_tx::clock::EdgeState;
use i2s_tx::tx::Serializer;
use i2s_tx::verify::Verifier;
use i2s_tx::{
    Channel, Frame, SampleWidth, ShiftEdge, TimingViolation, VerifyMode, WordSelectPolarity,
};

fn shift() -> EdgeState {
    EdgeState {
        bclk_fall: true,
        ..Default::default()
    }
}

fn word_select(rise: bool) -> EdgeState {
    EdgeState {
        bclk_fall: true,
        ws_rise: rise,
        ws_fall: !rise,
        ..Default::default()
    }
}

fn serializer(width: SampleWidth) -> Serializer {
    Serializer::new(width, ShiftEdge::Falling, WordSelectPolarity::LeftLow)
}

/// Shifts the remaining bits of the current half period and returns the word.
fn collect(serializer: &mut Serializer, first: bool, verifier: &mut Verifier) -> u32 {
    let bits = serializer.width().bits();
    let mut word = first as u32;

    for _ in 1..bits {
        serializer.tick(&shift(), None, verifier);
        word = (word << 1) | serializer.data() as u32;
    }

    word
}

#[test]
fn msb_first_with_idle_register_reload() {
    let mut serializer = serializer(SampleWidth::Bits16);
    let mut verifier = Verifier::new(VerifyMode::Record);
    let staged = Frame::new(0x1234, -2);

    // Into the right channel: the left register takes the staged left word.
    serializer.tick(&word_select(true), Some(staged), &mut verifier);
    let state = serializer.state();
    assert_eq!(state.channel, Channel::Right);
    assert_eq!(state.left, 0x1234_0000);
    assert_eq!(state.bit_index, 1);
    assert!(!state.consumed);
    assert_eq!(collect(&mut serializer, state.data, &mut verifier), 0);

    // Into the left channel: the right register takes the staged right word.
    serializer.tick(&word_select(false), Some(staged), &mut verifier);
    let state = serializer.state();
    assert_eq!(state.channel, Channel::Left);
    assert_eq!(state.right, 0xFFFE_0000);
    assert!(state.consumed);
    assert_eq!(collect(&mut serializer, state.data, &mut verifier), 0x1234);
    assert_eq!(serializer.state().bit_index, 16);

    serializer.tick(&word_select(true), None, &mut verifier);
    let first = serializer.data();
    assert_eq!(collect(&mut serializer, first, &mut verifier), 0xFFFE);

    // Only the fetch of the last transition was missing.
    assert_eq!(verifier.count(), 1);
    assert_eq!(
        verifier.first().unwrap().violation,
        TimingViolation::FetchLate
    );
}

#[test]
fn consumed_pulse_lasts_one_tick() {
    let mut serializer = serializer(SampleWidth::Bits16);
    let mut verifier = Verifier::new(VerifyMode::Record);

    serializer.tick(&word_select(false), Some(Frame::default()), &mut verifier);
    assert!(serializer.consumed());

    serializer.tick(&shift(), None, &mut verifier);
    assert!(!serializer.consumed());

    serializer.tick(&EdgeState::default(), None, &mut verifier);
    assert!(!serializer.consumed());
}

#[test]
fn active_register_is_not_reloaded() {
    let mut serializer = serializer(SampleWidth::Bits24);
    let mut verifier = Verifier::new(VerifyMode::Record);

    serializer.tick(&word_select(true), Some(Frame::new(-1, 0)), &mut verifier);
    let first = serializer.data();
    collect(&mut serializer, first, &mut verifier);

    serializer.tick(&word_select(false), Some(Frame::new(0, 0x12_3456)), &mut verifier);
    assert_eq!(serializer.state().right, 0x1234_5600);

    // The left word loaded one half period earlier goes out unchanged.
    let first = serializer.data();
    let word = collect(&mut serializer, first, &mut verifier);
    assert_eq!(word, 0x00FF_FFFF);
    assert_eq!(SampleWidth::Bits24.sign_extend(word), -1);
    assert!(verifier.is_clean());
}

#[test]
fn exactly_width_bits_per_half_period() {
    for width in [SampleWidth::Bits16, SampleWidth::Bits24, SampleWidth::Bits32] {
        let mut serializer = serializer(width);
        let mut verifier = Verifier::new(VerifyMode::Record);
        let bits = width.bits();

        // The half period after reset is one edge short and not checked.
        for _ in 1..bits {
            serializer.tick(&shift(), None, &mut verifier);
        }

        for half in 0..8 {
            serializer.tick(&word_select(half % 2 == 0), Some(Frame::new(1, -1)), &mut verifier);
            for _ in 1..bits {
                serializer.tick(&shift(), None, &mut verifier);
            }
            assert_eq!(serializer.state().bit_index, bits);
        }

        assert!(verifier.is_clean(), "{width:?}");
    }
}

#[test]
fn short_half_period_is_an_underrun() {
    let mut serializer = serializer(SampleWidth::Bits16);
    let mut verifier = Verifier::new(VerifyMode::Record);

    serializer.tick(&word_select(true), Some(Frame::default()), &mut verifier);
    for _ in 0..10 {
        serializer.tick(&shift(), None, &mut verifier);
    }
    serializer.tick(&word_select(false), Some(Frame::default()), &mut verifier);

    assert_eq!(
        verifier.last().unwrap().violation,
        TimingViolation::BitUnderrun {
            channel: Channel::Right,
            bits: 11,
        }
    );
}

#[test]
fn extra_shift_is_an_overrun() {
    let mut serializer = serializer(SampleWidth::Bits16);
    let mut verifier = Verifier::new(VerifyMode::Record);

    serializer.tick(&word_select(true), Some(Frame::default()), &mut verifier);
    for _ in 0..16 {
        serializer.tick(&shift(), None, &mut verifier);
    }

    assert_eq!(serializer.state().bit_index, 16);
    assert_eq!(
        verifier.last().unwrap().violation,
        TimingViolation::BitOverrun {
            channel: Channel::Right
        }
    );
}

#[test]
#[should_panic]
fn word_select_off_the_shift_edge_panics_in_assert_mode() {
    let mut serializer = serializer(SampleWidth::Bits16);
    let mut verifier = Verifier::new(VerifyMode::Assert);
    let edges = EdgeState {
        ws_rise: true,
        ..Default::default()
    };

    serializer.tick(&edges, Some(Frame::default()), &mut verifier);
}

#[test]
fn rising_shift_edge_and_left_high() {
    let mut serializer = Serializer::new(
        SampleWidth::Bits16,
        ShiftEdge::Rising,
        WordSelectPolarity::LeftHigh,
    );
    let mut verifier = Verifier::new(VerifyMode::Record);

    // Falling edges are ignored.
    serializer.tick(&shift(), None, &mut verifier);
    assert_eq!(serializer.state().bit_index, 0);

    let edges = EdgeState {
        bclk_rise: true,
        ws_rise: true,
        ..Default::default()
    };
    serializer.tick(&edges, Some(Frame::new(7, 8)), &mut verifier);

    let state = serializer.state();
    assert_eq!(state.channel, Channel::Left);
    assert_eq!(state.right, 8 << 16);
    assert!(state.consumed);
    assert_eq!(state.bit_index, 1);
    assert!(verifier.is_clean());
}
