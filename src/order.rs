//! Byte ordering and the mapping from byte index to bit offset.

/// Order in which the bytes of an integer appear in a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (index 0 holds the highest-order byte).
    Big,
    /// Least significant byte first (index 0 holds the lowest-order byte).
    Little,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Byte order of the compilation target.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// The opposite ordering.
    pub const fn reversed(self) -> ByteOrder {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::NETWORK
    }
}

/// Position of byte `index` counted in bytes from the least significant
/// byte, in a sequence of `width` bytes laid out in `order`.
///
/// Panics if `index >= width`; in a const context this is a build error.
pub const fn byte_slot(index: usize, order: ByteOrder, width: usize) -> usize {
    assert!(index < width, "byte index out of range for width");

    match order {
        // [0][1][2][3]
        //  ^ -->
        ByteOrder::Little => index,
        // [0][1][2][3]
        //       <-- ^
        ByteOrder::Big => width - index - 1,
    }
}

/// Bit offset, counted from the least significant bit, of byte `index` in a
/// sequence of `width` bytes laid out in `order`.
///
/// Panics if `index >= width` or if the offset does not fit in a `u32`.
pub const fn bit_offset(index: usize, order: ByteOrder, width: usize) -> u32 {
    let slot = byte_slot(index, order, width);
    assert!(slot <= (u32::MAX / 8) as usize, "bit offset does not fit in u32");

    (slot * 8) as u32
}
