//! Tests for the sample sources and the tone tables.

use i2s_tx::resources::{self, sine_table};
use i2s_tx::source::latched::Latched;
use i2s_tx::source::ramp::RampSource;
use i2s_tx::{ConfigError, Frame, SampleSource, SampleTable, SampleWidth};

#[test]
fn width_ranges() {
    assert_eq!(SampleWidth::Bits16.min_value(), -32768);
    assert_eq!(SampleWidth::Bits16.max_value(), 32767);
    assert_eq!(SampleWidth::Bits24.min_value(), -8_388_608);
    assert_eq!(SampleWidth::Bits24.max_value(), 8_388_607);
    assert_eq!(SampleWidth::Bits32.min_value(), i32::MIN);
    assert_eq!(SampleWidth::Bits32.max_value(), i32::MAX);

    assert_eq!(SampleWidth::from_bits(24), Some(SampleWidth::Bits24));
    assert_eq!(SampleWidth::from_bits(20), None);
}

#[test]
fn align_and_sign_extend() {
    assert_eq!(SampleWidth::Bits24.align(-1), 0xFFFF_FF00);
    assert_eq!(SampleWidth::Bits16.align(0x1234), 0x1234_0000);
    assert_eq!(SampleWidth::Bits32.align(-5), 0xFFFF_FFFB);

    assert_eq!(SampleWidth::Bits24.sign_extend(0x00FF_FFFF), -1);
    assert_eq!(SampleWidth::Bits16.sign_extend(0x8000), -32768);
    assert_eq!(SampleWidth::Bits16.sign_extend(0x7FFF), 32767);
}

#[test]
fn table_rejects_empty_and_out_of_range() {
    assert_eq!(
        SampleTable::new(SampleWidth::Bits16, Vec::new()),
        Err(ConfigError::InvalidTableLength)
    );

    assert_eq!(
        SampleTable::new(
            SampleWidth::Bits16,
            vec![Frame::new(0, 0), Frame::new(1, 40_000)]
        ),
        Err(ConfigError::SampleOutOfRange {
            index: 1,
            value: 40_000,
            bits: 16,
        })
    );

    let table = SampleTable::from_mono(SampleWidth::Bits24, &[40_000, -40_000]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.read(1), Frame::new(-40_000, -40_000));
}

#[test]
fn ramp_counts_per_frame() {
    let ramp = RampSource::new(SampleWidth::Bits16, 300).unwrap();

    assert_eq!(ramp.len(), 300);
    assert_eq!(ramp.read(0), Frame::new(0, 0));
    assert_eq!(ramp.read(299), Frame::new(299, -299));

    assert_eq!(
        RampSource::new(SampleWidth::Bits16, 0),
        Err(ConfigError::InvalidTableLength)
    );
    assert_eq!(
        RampSource::new(SampleWidth::Bits16, 40_000),
        Err(ConfigError::SampleOutOfRange {
            index: 39_999,
            value: 39_999,
            bits: 16,
        })
    );
}

#[test]
fn latched_adds_one_tick() {
    let ramp = RampSource::new(SampleWidth::Bits32, 4).unwrap();
    let latched = Latched::new(ramp);

    assert_eq!(ramp.latency(), 0);
    assert_eq!(latched.latency(), 1);
    assert_eq!(latched.width(), SampleWidth::Bits32);
    assert_eq!(latched.read(3), ramp.read(3));
}

#[test]
fn reference_tone() {
    let table = resources::tone_1khz();

    assert_eq!(table.len(), 48);
    assert_eq!(table.width(), SampleWidth::Bits16);
    assert!(std::ptr::eq(table, resources::tone_1khz()));

    let frames = table.frames();
    assert_eq!(frames[0], Frame::new(0, 0));
    assert!((frames[12].left - 16384).abs() <= 1);
    assert!((frames[36].left + 16384).abs() <= 1);

    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.left, frame.right);
        // Odd symmetry over one period.
        if i > 0 {
            assert!((frame.left + frames[48 - i].left).abs() <= 1, "frame {i}");
        }
    }
}

#[test]
fn sine_table_needs_whole_period() {
    assert_eq!(
        sine_table(SampleWidth::Bits16, 7, 48_000, 0.5),
        Err(ConfigError::InvalidTableLength)
    );
    assert_eq!(
        sine_table(SampleWidth::Bits16, 0, 48_000, 0.5),
        Err(ConfigError::InvalidTableLength)
    );

    let table = sine_table(SampleWidth::Bits24, 500, 48_000, 2.0).unwrap();
    assert_eq!(table.len(), 96);
    assert!(table
        .frames()
        .iter()
        .all(|f| SampleWidth::Bits24.contains(f.left)));
    assert_eq!(
        table.frames().iter().map(|f| f.left).max(),
        Some(SampleWidth::Bits24.max_value())
    );
}
