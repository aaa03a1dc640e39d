// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Decoding of btrfs root records as handed out by the tree search ioctl
//!
//! The kernel packs `btrfs_root_item` and `btrfs_root_ref` without regard
//! for host alignment, so nothing here overlays a native struct on the raw
//! bytes. Every field is read at an explicit offset with explicit endianness.

#![forbid(unsafe_code)]

use std::io;

use thiserror::Error;

mod layout;
pub mod root_item;
pub mod root_ref;

pub use root_item::RootIdentity;
pub use root_ref::RootRef;

/// btrfs key type of a `btrfs_root_item`
pub const ROOT_ITEM_KEY: u8 = 132;

/// btrfs key type of a `btrfs_root_ref` stored under the parent root
pub const ROOT_REF_KEY: u8 = 156;

/// btrfs key type of a `btrfs_root_ref` stored under the child root
pub const ROOT_BACKREF_KEY: u8 = 144;

/// Supported list of record decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    RootItem,
    RootRef,
}

impl Kind {
    /// Item key types whose payload is this kind of record
    pub fn item_keys(&self) -> &'static [u8] {
        match &self {
            Kind::RootItem => &[ROOT_ITEM_KEY],
            Kind::RootRef => &[ROOT_REF_KEY, ROOT_BACKREF_KEY],
        }
    }

    /// Find the record kind carried by an item of the given key type
    pub fn for_item_key(key: u8) -> Option<Self> {
        [Kind::RootItem, Kind::RootRef]
            .into_iter()
            .find(|k| k.item_keys().contains(&key))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Kind::RootItem => f.write_str("root_item"),
            Kind::RootRef => f.write_str("root_ref"),
        }
    }
}

/// A fixed-layout kernel record that can be decoded from raw bytes
pub trait Record: Sized + std::fmt::Debug + Sync + Send {
    /// The record's kind
    const KIND: Kind;

    /// Decode the record from the start of `raw`
    fn decode(raw: &[u8]) -> Result<Self, self::Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("record too small: need {needed} bytes, have {actual}")]
    RecordTooSmall { needed: usize, actual: usize },

    #[error("invalid utf8 in decode: {0}")]
    Utf8Decoding(#[from] std::str::Utf8Error),

    #[error("io: {0}")]
    IO(#[from] io::Error),
}

/// Decode a record of the requested type from a raw item payload
pub fn decode<T: Record>(raw: &[u8]) -> Result<T, Error> {
    T::decode(raw)
}
