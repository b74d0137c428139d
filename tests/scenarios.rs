//! Literal conversions checked both as `const` items and at run time.

use bytecraft::{ByteOrder, Codec};

const FF: u8 = 0xFF;
const ZERO: u8 = 0x00;

macro_rules! check {
    ($order:ident, $t:ty, $value:expr, [$($byte:expr),* $(,)?]) => {{
        const FROM: $t = Codec::<$t>::from_bytes([$($byte),*], ByteOrder::$order);
        const TO: [u8; core::mem::size_of::<$t>()] = Codec::<$t>::to_bytes($value, ByteOrder::$order);

        let bytes = [$($byte),*];
        assert_eq!(FROM, $value);
        assert_eq!(TO, bytes);
        assert_eq!(Codec::<$t>::from_bytes(bytes, ByteOrder::$order), $value);
        assert_eq!(Codec::<$t>::to_bytes($value, ByteOrder::$order), bytes);
    }};
}

#[test]
fn test_all_ones() {
    check!(Little, i32, -1, [FF, FF, FF, FF]);
}

#[test]
fn test_alternating_bytes() {
    check!(Little, u32, 16711935, [FF, ZERO, FF, ZERO]);
    check!(Big, i32, -16711936, [FF, ZERO, FF, ZERO]);
    check!(Little, i32, -16711936, [ZERO, FF, ZERO, FF]);
    check!(Big, u32, 16711935, [ZERO, FF, ZERO, FF]);
}

#[test]
fn test_paired_bytes() {
    check!(Little, u32, 65535, [FF, FF, ZERO, ZERO]);
    check!(Big, i32, -65536, [FF, FF, ZERO, ZERO]);
    check!(Little, i32, -65536, [ZERO, ZERO, FF, FF]);
    check!(Big, u32, 65535, [ZERO, ZERO, FF, FF]);
}

#[test]
fn test_mixed_bytes() {
    check!(Little, i32, -123456789, [0xEB, 0x32, 0xA4, 0xF8]);
    check!(Big, i32, -123456789, [0xF8, 0xA4, 0x32, 0xEB]);
}

#[test]
fn test_encode_then_decode_in_const() {
    const BYTES: [u8; 4] = Codec::<i32>::to_bytes(-123456789, ByteOrder::Little);
    const VALUE: i32 = Codec::<i32>::from_bytes(BYTES, ByteOrder::Little);

    assert_eq!(BYTES, [0xEB, 0x32, 0xA4, 0xF8]);
    assert_eq!(VALUE, -123456789);
}

#[test]
fn test_narrow_decode_in_const() {
    const BE24: u32 = Codec::<u32>::decode([0x01, 0x02, 0x03], ByteOrder::Big);
    const LE24: i32 = Codec::<i32>::decode_extended([0x00, 0x00, 0x80], ByteOrder::Little);

    assert_eq!(BE24, 0x0001_0203);
    assert_eq!(LE24, -0x80_0000);
}

#[test]
fn test_wide_encode_in_const() {
    const PADDED: [u8; 8] = Codec::<i8>::encode(-128, ByteOrder::Big);
    const UNPADDED: i8 = Codec::<i8>::decode([0x80], ByteOrder::Big);

    assert_eq!(PADDED, [FF, FF, FF, FF, FF, FF, FF, 0x80]);
    assert_eq!(UNPADDED, -128);
}
