//! Run-time description of an integer's byte layout.
//!
//! [crate::Codec] checks widths at build time. A [Layout] covers the case
//! where the width comes from data (a format description, a header field)
//! and violations have to be reported instead.

use log::debug;

use crate::{
    bits::sign_extend,
    errors::{ReadError, WriteError},
    extract::{fill_byte, gather, scatter_into},
    int::Integer,
    order::ByteOrder,
};

/// How the high-order bytes are filled when fewer bytes than the native
/// width are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extend {
    /// Missing bytes are zero.
    #[default]
    Zero,
    /// Signed kinds replicate the top bit of the last byte read.
    Sign,
}

/// Byte order plus an optional width for reading and writing integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Byte order of the encoded value.
    pub order: ByteOrder,
    /// Encoded width in bytes. `None` means the integer's native width.
    pub width: Option<usize>,
    /// Extension applied on narrow reads.
    pub extend: Extend,
}

impl Layout {
    pub const fn new(order: ByteOrder) -> Self {
        Layout {
            order,
            width: None,
            extend: Extend::Zero,
        }
    }

    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub const fn sign_extended(mut self) -> Self {
        self.extend = Extend::Sign;
        self
    }

    /// Width used for `T`: the explicit width, or `T`'s native size.
    pub fn width_for<T: Integer>(&self) -> usize {
        self.width.unwrap_or(T::BYTES)
    }

    /// Reads a `T` from `data`, which must be exactly the layout's width.
    pub fn read<T: Integer>(&self, data: &[u8]) -> Result<T, ReadError> {
        let width = self.width_for::<T>();

        if width == 0 {
            debug!("rejecting read: zero width");
            return Err(ReadError::ZeroWidth);
        }

        if data.len() != width {
            debug!("rejecting read: {} bytes for width {}", data.len(), width);
            return Err(ReadError::LengthMismatch {
                expected: width,
                actual: data.len(),
            });
        }

        if width > T::BYTES {
            debug!("rejecting read: width {} into {}-byte integer", width, T::BYTES);
            return Err(ReadError::WidthTooLarge {
                width,
                native: T::BYTES,
            });
        }

        let mut wide = gather(data, self.order);
        if self.extend == Extend::Sign && T::SIGNED {
            wide = sign_extend(wide, (width * 8) as u32);
        }

        Ok(T::from_wide(wide))
    }

    /// Writes `value` into `out`, which must be exactly the layout's width.
    /// Returns the number of bytes written. `out` is untouched on error.
    pub fn write<T: Integer>(&self, value: T, out: &mut [u8]) -> Result<usize, WriteError> {
        let width = self.width_for::<T>();

        if out.len() != width {
            debug!("rejecting write: {}-byte buffer for width {}", out.len(), width);
            return Err(WriteError::LengthMismatch {
                expected: width,
                actual: out.len(),
            });
        }

        if width < T::BYTES {
            debug!("rejecting write: {}-byte integer into width {}", T::BYTES, width);
            return Err(WriteError::WidthTooSmall {
                width,
                native: T::BYTES,
            });
        }

        let wide = value.to_wide();
        scatter_into(wide, fill_byte(wide, T::SIGNED), self.order, out);

        Ok(width)
    }
}
