//! Typed entry points for every primitive integer kind.
//!
//! [Codec] carries the `const fn` API: each integer kind gets its own
//! inherent impl, so conversions can run inside `const` items. The sealed
//! [Integer] trait exposes the same operations generically, and the free
//! functions [decode] and [encode] forward to it.
//!
//! Width checks on the const-generic API happen at build time: decoding
//! zero bytes or more bytes than the kind holds, or encoding into fewer,
//! fails to compile.

use core::marker::PhantomData;
use core::mem::size_of;

use crate::{
    bits::sign_extend,
    extract::{fill_byte, gather, scatter},
    order::ByteOrder,
};

/// Conversions for the integer kind `T`.
///
/// ```
/// use bytecraft::{ByteOrder, Codec};
///
/// const VALUE: i32 = Codec::<i32>::decode([0xF8, 0xA4, 0x32, 0xEB], ByteOrder::Big);
/// assert_eq!(VALUE, -123456789);
///
/// // A 24-bit big-endian field read into a u32.
/// assert_eq!(Codec::<u32>::decode([0x12, 0x34, 0x56], ByteOrder::Big), 0x0012_3456);
///
/// // An i16 widened to four bytes.
/// let bytes: [u8; 4] = Codec::<i16>::encode(-2, ByteOrder::Little);
/// assert_eq!(bytes, [0xFE, 0xFF, 0xFF, 0xFF]);
/// ```
///
/// Reading more bytes than the integer holds does not build:
///
/// ```compile_fail
/// use bytecraft::{ByteOrder, Codec};
///
/// const VALUE: u16 = Codec::<u16>::decode([0x01, 0x02, 0x03], ByteOrder::Big);
/// ```
///
/// Nor does reading zero bytes:
///
/// ```compile_fail
/// use bytecraft::{ByteOrder, Codec};
///
/// const VALUE: i16 = Codec::<i16>::decode([], ByteOrder::Big);
/// ```
///
/// Neither does writing into fewer bytes than the integer holds:
///
/// ```compile_fail
/// use bytecraft::{ByteOrder, Codec};
///
/// const BYTES: [u8; 2] = Codec::<u32>::encode(1, ByteOrder::Big);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec<T>(PhantomData<T>);

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer kind that can be converted to and from bytes.
pub trait Integer: Copy + sealed::Sealed {
    /// Native storage width in bytes.
    const BYTES: usize;
    /// Whether the kind is two's-complement signed.
    const SIGNED: bool;

    /// See [Codec::decode]. Requires `0 < W <= Self::BYTES`.
    fn decode<const W: usize>(bytes: [u8; W], order: ByteOrder) -> Self;

    /// See [Codec::decode_extended]. Requires `0 < W <= Self::BYTES`.
    fn decode_extended<const W: usize>(bytes: [u8; W], order: ByteOrder) -> Self;

    /// See [Codec::encode]. Requires `W >= Self::BYTES`.
    fn encode<const W: usize>(self, order: ByteOrder) -> [u8; W];

    /// Widens to 128 bits: sign-extended if signed, zero-extended otherwise.
    fn to_wide(self) -> u128;

    /// Keeps the low `Self::BYTES` bytes of `wide`.
    fn from_wide(wide: u128) -> Self;
}

macro_rules! impl_codec {
    ($($t:ty),* $(,)?) => {$(
        impl Codec<$t> {
            /// Native storage width in bytes.
            pub const BYTES: usize = size_of::<$t>();
            /// Whether the kind is two's-complement signed.
            pub const SIGNED: bool = <$t>::MIN != 0;

            /// Interprets `W` bytes laid out in `order` as an integer.
            ///
            /// When `W` is smaller than the native width the missing
            /// high-order bytes are zero. `W` must be at least one.
            pub const fn decode<const W: usize>(bytes: [u8; W], order: ByteOrder) -> $t {
                const {
                    assert!(W > 0, "decode width must be at least one byte");
                    assert!(W <= size_of::<$t>(), "decode width exceeds the integer's size");
                };
                gather(&bytes, order) as $t
            }

            /// Like [Self::decode], but sign-extends signed kinds read from
            /// fewer bytes than their native width.
            pub const fn decode_extended<const W: usize>(bytes: [u8; W], order: ByteOrder) -> $t {
                const {
                    assert!(W > 0, "decode width must be at least one byte");
                    assert!(W <= size_of::<$t>(), "decode width exceeds the integer's size");
                };
                let wide = gather(&bytes, order);
                if Self::SIGNED {
                    sign_extend(wide, (W * 8) as u32) as $t
                } else {
                    wide as $t
                }
            }

            /// Writes `value` as `W` bytes in `order`.
            ///
            /// Bytes past the native width continue the value's sign, so
            /// decoding the result at the same width gives `value` back.
            pub const fn encode<const W: usize>(value: $t, order: ByteOrder) -> [u8; W] {
                const { assert!(W >= size_of::<$t>(), "encode width is smaller than the integer's size") };
                let wide = value as u128;
                scatter(wide, fill_byte(wide, Self::SIGNED), order)
            }

            /// Decodes exactly the native width.
            pub const fn from_bytes(bytes: [u8; size_of::<$t>()], order: ByteOrder) -> $t {
                Self::decode(bytes, order)
            }

            /// Encodes exactly the native width.
            pub const fn to_bytes(value: $t, order: ByteOrder) -> [u8; size_of::<$t>()] {
                Self::encode(value, order)
            }
        }

        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const BYTES: usize = Codec::<$t>::BYTES;
            const SIGNED: bool = Codec::<$t>::SIGNED;

            fn decode<const W: usize>(bytes: [u8; W], order: ByteOrder) -> Self {
                Codec::<$t>::decode(bytes, order)
            }

            fn decode_extended<const W: usize>(bytes: [u8; W], order: ByteOrder) -> Self {
                Codec::<$t>::decode_extended(bytes, order)
            }

            fn encode<const W: usize>(self, order: ByteOrder) -> [u8; W] {
                Codec::<$t>::encode(self, order)
            }

            fn to_wide(self) -> u128 {
                self as u128
            }

            fn from_wide(wide: u128) -> Self {
                wide as $t
            }
        }
    )*};
}

impl_codec!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Interprets `W` bytes laid out in `order` as a `T`.
pub fn decode<T: Integer, const W: usize>(bytes: [u8; W], order: ByteOrder) -> T {
    T::decode(bytes, order)
}

/// Writes `value` as `W` bytes in `order`.
pub fn encode<T: Integer, const W: usize>(value: T, order: ByteOrder) -> [u8; W] {
    value.encode(order)
}
