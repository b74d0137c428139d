//! Bit mask construction and sign extension over the `u128` scratch type.
//!
//! Every conversion in the crate works on integers widened to `u128`, so
//! masks are built at that width and truncated by the caller.

/// Width of the scratch type in bits.
pub const WIDE_BITS: u32 = u128::BITS;

/// Width of the scratch type in bytes.
pub const WIDE_BYTES: usize = (u128::BITS / 8) as usize;

/// Mask with exactly the low `width_bits` bits set.
pub const fn mask(width_bits: u32) -> u128 {
    assert!(width_bits <= WIDE_BITS, "mask wider than 128 bits");

    if width_bits == 0 {
        0
    } else {
        1 | (mask(width_bits - 1) << 1)
    }
}

/// Mask of `width_bits` bits starting at bit `offset`.
pub const fn mask_at(width_bits: u32, offset: u32) -> u128 {
    assert!(
        width_bits + offset <= WIDE_BITS,
        "mask does not fit in 128 bits"
    );

    if width_bits == 0 {
        return 0;
    }

    mask(width_bits) << offset
}

/// Sign-extends the low `bits` of `value` to the full 128 bits.
pub const fn sign_extend(value: u128, bits: u32) -> u128 {
    assert!(bits <= WIDE_BITS, "sign bit beyond 128 bits");

    if bits == 0 {
        return 0;
    }

    let shift = WIDE_BITS - bits;
    (((value << shift) as i128) >> shift) as u128
}
