//! Deserializable layout descriptions.
//!
//! These types describe how an integer field is laid out on the wire. They
//! are intended to be read from a format description (JSON, TOML, ...) and
//! converted into core `bytecraft` types.

use serde::{Deserialize, Serialize};

use crate::{
    layout::{Extend, Layout},
    order::ByteOrder,
};

/// Byte order as written in a description.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderDef {
    /// Most‑significant byte first.
    #[default]
    Big,
    /// Least‑significant byte first.
    Little,
    /// Whatever the target machine uses.
    Native,
}

impl From<ByteOrderDef> for ByteOrder {
    fn from(value: ByteOrderDef) -> Self {
        match value {
            ByteOrderDef::Big => ByteOrder::Big,
            ByteOrderDef::Little => ByteOrder::Little,
            ByteOrderDef::Native => ByteOrder::NATIVE,
        }
    }
}

/// Description of an integer field's encoding.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct LayoutDef {
    /// Byte order; defaults to big‑endian.
    #[serde(default)]
    pub order: ByteOrderDef,
    /// Width in bytes; defaults to the integer's native size.
    #[serde(default)]
    pub width: Option<usize>,
    /// Whether narrow reads of signed integers are sign‑extended.
    #[serde(default)]
    pub sign_extend: bool,
}

impl From<LayoutDef> for Layout {
    fn from(value: LayoutDef) -> Self {
        Layout {
            order: value.order.into(),
            width: value.width,
            extend: if value.sign_extend {
                Extend::Sign
            } else {
                Extend::Zero
            },
        }
    }
}
