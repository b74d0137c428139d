//! # bytecraft
//!
//! Conversion between fixed-width integers and byte arrays with an explicit
//! byte order and an explicit width.
//!
//! The width may differ from the integer's own size: decoding may read fewer
//! bytes than the integer holds (a 24-bit field into an `i32`), and encoding
//! may write more (an `i16` padded to four bytes). Everything on the
//! [Codec] API is a `const fn`, and width violations fail the build.
//!
//! ## Example
//!
//! ```
//! use bytecraft::{ByteOrder, Codec};
//!
//! const BYTES: [u8; 4] = Codec::<i32>::to_bytes(-123456789, ByteOrder::Little);
//! assert_eq!(BYTES, [0xEB, 0x32, 0xA4, 0xF8]);
//! assert_eq!(Codec::<i32>::from_bytes(BYTES, ByteOrder::Little), -123456789);
//!
//! let value: u32 = bytecraft::decode([0x00, 0xFF, 0x00, 0xFF], ByteOrder::Big);
//! assert_eq!(value, 16711935);
//! ```
//!
//! Widths only known at run time go through [layout::Layout], which reports
//! violations as errors instead.

#![cfg_attr(not(test), no_std)]

pub mod bits;
pub mod errors;
pub mod extract;
pub mod int;
pub mod layout;
pub mod order;
#[cfg(feature = "serde")]
pub mod serde;

pub use int::{Codec, Integer, decode, encode};
pub use order::ByteOrder;
