//! The two conversion directions, expressed over integers widened to `u128`.
//!
//! [gather] places each byte at its bit offset and ORs them together.
//! [scatter] and [scatter_into] isolate each byte of a wide value with a
//! shifted mask. The typed wrappers in [crate::int] handle widening and
//! truncation to concrete integer kinds.

use crate::{
    bits::{WIDE_BITS, WIDE_BYTES, mask_at},
    order::{ByteOrder, bit_offset, byte_slot},
};

/// Combines `bytes` laid out in `order` into a zero-extended wide value.
///
/// Panics if more than 16 bytes are supplied.
pub const fn gather(bytes: &[u8], order: ByteOrder) -> u128 {
    let width = bytes.len();
    assert!(width <= WIDE_BYTES, "more bytes than fit in 128 bits");

    let mut value = 0u128;
    let mut index = 0;

    while index < width {
        value |= (bytes[index] as u128) << bit_offset(index, order, width);
        index += 1;
    }

    value
}

/// The 8 bits of `wide` starting at bit `offset`.
pub const fn byte_at(wide: u128, offset: u32) -> u8 {
    ((wide & mask_at(8, offset)) >> offset) as u8
}

/// Byte that continues the widening of `wide` past 128 bits.
///
/// Only signed kinds with the sign bit set extend with ones.
pub const fn fill_byte(wide: u128, signed: bool) -> u8 {
    if signed && (wide >> (WIDE_BITS - 1)) == 1 {
        0xFF
    } else {
        0x00
    }
}

/// Byte held in `slot` (counted from the least significant byte) of `wide`
/// widened without limit, with `fill` past the 16 bytes of `wide`.
pub const fn byte_in_slot(wide: u128, fill: u8, slot: usize) -> u8 {
    if slot < WIDE_BYTES {
        byte_at(wide, (slot * 8) as u32)
    } else {
        fill
    }
}

/// Writes `wide` into `out` in `order`, one byte per index.
///
/// Bytes beyond the 16 held by `wide` take the value `fill`.
pub const fn scatter_into(wide: u128, fill: u8, order: ByteOrder, out: &mut [u8]) {
    let width = out.len();
    let mut index = 0;

    while index < width {
        out[index] = byte_in_slot(wide, fill, byte_slot(index, order, width));
        index += 1;
    }
}

/// Array form of [scatter_into].
pub const fn scatter<const W: usize>(wide: u128, fill: u8, order: ByteOrder) -> [u8; W] {
    let mut out = [0u8; W];
    scatter_into(wide, fill, order, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_little() {
        assert_eq!(gather(&[0x01, 0x02, 0x03], ByteOrder::Little), 0x03_0201);
    }

    #[test]
    fn test_gather_big() {
        assert_eq!(gather(&[0x01, 0x02, 0x03], ByteOrder::Big), 0x01_0203);
    }

    #[test]
    fn test_gather_empty() {
        assert_eq!(gather(&[], ByteOrder::Big), 0);
    }

    #[test]
    fn test_gather_does_not_sign_extend_bytes() {
        assert_eq!(gather(&[0xFF], ByteOrder::Little), 0xFF);
        assert_eq!(gather(&[0x80, 0x00], ByteOrder::Big), 0x8000);
    }

    #[test]
    fn test_gather_full_width() {
        let bytes = [0xAB; 16];
        assert_eq!(gather(&bytes, ByteOrder::Big), u128::from_be_bytes(bytes));
    }

    #[test]
    #[should_panic(expected = "more bytes than fit")]
    fn test_gather_too_many_bytes() {
        gather(&[0; 17], ByteOrder::Little);
    }

    #[test]
    fn test_byte_at() {
        assert_eq!(byte_at(0x1234_5678, 0), 0x78);
        assert_eq!(byte_at(0x1234_5678, 16), 0x34);
        assert_eq!(byte_at(u128::MAX, 120), 0xFF);
    }

    #[test]
    fn test_fill_byte() {
        assert_eq!(fill_byte(u128::MAX, true), 0xFF);
        assert_eq!(fill_byte(u128::MAX, false), 0x00);
        assert_eq!(fill_byte(1, true), 0x00);
    }

    #[test]
    fn test_byte_in_slot() {
        assert_eq!(byte_in_slot(0x1234, 0x00, 0), 0x34);
        assert_eq!(byte_in_slot(0x1234, 0x00, 1), 0x12);
        assert_eq!(byte_in_slot(u128::MAX, 0x00, 15), 0xFF);
        assert_eq!(byte_in_slot(u128::MAX, 0x00, 16), 0x00);
    }

    #[test]
    fn test_byte_in_slot_far_past_wide() {
        // Slots whose bit offset would overflow a u32.
        assert_eq!(byte_in_slot(0x1234, 0x00, 1 << 29), 0x00);
        assert_eq!(byte_in_slot(0x1234, 0x00, (1 << 29) + 1), 0x00);
        assert_eq!(byte_in_slot(u128::MAX, 0xFF, usize::MAX), 0xFF);
    }

    #[test]
    fn test_scatter() {
        assert_eq!(
            scatter::<4>(0x1234_5678, 0, ByteOrder::Big),
            [0x12, 0x34, 0x56, 0x78]
        );
        assert_eq!(
            scatter::<4>(0x1234_5678, 0, ByteOrder::Little),
            [0x78, 0x56, 0x34, 0x12]
        );
    }

    #[test]
    fn test_scatter_beyond_wide() {
        let out: [u8; 18] = scatter(u128::MAX, 0xFF, ByteOrder::Little);
        assert_eq!(out, [0xFF; 18]);

        let out: [u8; 18] = scatter(1, 0x00, ByteOrder::Big);
        assert_eq!(out[17], 0x01);
        assert!(out[..17].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_scatter_into_slice() {
        let mut out = [0u8; 3];
        scatter_into(0x0A_0B0C, 0, ByteOrder::Big, &mut out);
        assert_eq!(out, [0x0A, 0x0B, 0x0C]);
    }

    #[test]
    fn test_scatter_is_const() {
        const BYTES: [u8; 2] = scatter(0xBEEF, 0, ByteOrder::Big);
        assert_eq!(BYTES, [0xBE, 0xEF]);
    }
}
