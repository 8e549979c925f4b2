use byteorder::{BigEndian, LittleEndian};

use crate::{bytes::Bytes, error::ErrorKind, error::Result};

#[test]
fn slice_within_bounds() -> Result<()> {
    let bytes = Bytes::new(&[1, 2, 3, 4, 5]);

    assert_eq!(bytes.slice(1, 3)?.as_slice(), &[2, 3]);
    assert_eq!(bytes.slice(0, 5)?.len(), 5);
    assert!(bytes.slice(5, 5)?.is_empty());
    assert!(bytes.slice(0, 0)?.is_empty());
    assert!(Bytes::default().slice(0, 0)?.is_empty());
    Ok(())
}

#[test]
fn slice_out_of_bounds() {
    let bytes = Bytes::new(&[1, 2, 3]);

    let err = bytes.slice(2, 4).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::OutOfBounds {
            start: 2,
            end: 4,
            len: 3
        }
    );
    assert!(bytes.slice(3, 1).is_err());
}

#[test]
fn at_checks_index() -> Result<()> {
    let bytes = Bytes::new(&[9, 8]);

    assert_eq!(bytes.at(1)?, 8);
    assert!(bytes.at(2).is_err());
    assert!(Bytes::default().at(0).is_err());

    let err = Bytes::new(&[1, 2, 3]).at(usize::MAX).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::OutOfBounds {
            start: usize::MAX,
            end: usize::MAX,
            len: 3
        }
    );
    Ok(())
}

#[test]
fn integers_by_byte_order() -> Result<()> {
    let bytes = Bytes::new(&[0x01, 0x02, 0x03, 0x04]);

    assert_eq!(bytes.as_i32::<BigEndian>()?, 0x01020304);
    assert_eq!(bytes.as_i32::<LittleEndian>()?, 0x04030201);
    assert_eq!(bytes.slice(0, 2)?.as_i16::<BigEndian>()?, 0x0102);
    Ok(())
}

#[test]
fn uint_is_successive_multiply_add() -> Result<()> {
    let data = [0x00, 0x01, 0x00, 0xFF, 0x10];
    let expected = data.iter().fold(0u64, |acc, b| acc * 256 + *b as u64);

    assert_eq!(Bytes::new(&data).as_uint::<BigEndian>()?, expected);
    assert_eq!(Bytes::new(&[0x00, 0x03]).as_uint::<BigEndian>()?, 3);
    Ok(())
}

#[test]
fn int_is_sign_extended() -> Result<()> {
    assert_eq!(Bytes::new(&[0xFF, 0xFE]).as_int::<BigEndian>()?, -2);
    assert_eq!(Bytes::new(&[0x7F]).as_int::<BigEndian>()?, 127);
    Ok(())
}

#[test]
fn uint_rejects_bad_widths() {
    assert!(Bytes::default().as_uint::<BigEndian>().is_err());
    assert!(Bytes::new(&[0; 9]).as_uint::<BigEndian>().is_err());
}

#[test]
fn floats_need_exact_width() -> Result<()> {
    let f = 1.5f32.to_be_bytes();
    let d = (-0.25f64).to_be_bytes();

    assert_eq!(Bytes::new(&f).as_f32::<BigEndian>()?, 1.5);
    assert_eq!(Bytes::new(&d).as_f64::<BigEndian>()?, -0.25);

    let err = Bytes::new(&f).as_f64::<BigEndian>().unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::WidthMismatch {
            expected: 8,
            actual: 4
        }
    );
    assert!(Bytes::new(&d).as_f32::<BigEndian>().is_err());
    Ok(())
}

#[test]
fn float_bits_preserved() -> Result<()> {
    let nan = f64::from_bits(0x7FF8_0000_0000_0001);
    let bytes = nan.to_be_bytes();

    assert_eq!(
        Bytes::new(&bytes).as_f64::<BigEndian>()?.to_bits(),
        nan.to_bits()
    );
    Ok(())
}

#[test]
fn text_views() -> Result<()> {
    assert_eq!(Bytes::new(b"hello").as_str()?, "hello");
    assert_eq!(Bytes::new(&[0x0A, 0xFF, 0x01]).as_hex(), "0AFF01");
    Ok(())
}

#[test]
fn text_is_modified_utf8() -> Result<()> {
    // Java encodes the nul character as two bytes.
    assert_eq!(Bytes::new(&[0xC0, 0x80]).as_str()?, "\0");

    let emoji = cesu8::to_java_cesu8("🎉");
    assert_eq!(Bytes::new(&emoji).as_str()?, "🎉");
    Ok(())
}

#[test]
fn invalid_text() {
    let err = Bytes::new(&[0xFF, 0xFE]).as_str().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Nonunicode(vec![0xFF, 0xFE]));
}
