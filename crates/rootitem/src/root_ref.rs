// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! `btrfs_root_ref` handling
//!
//! Both ROOT_REF and ROOT_BACKREF items carry this record: a packed header
//! (`dirid: __le64`, `sequence: __le64`, `name_len: __le16`) followed by
//! `name_len` bytes of name, without NUL termination.

use crate::{
    layout::{ensure, read_le_u16, read_le_u64, slice},
    Error, Kind, Record,
};

const DIRID_OFFSET: usize = 0;
const SEQUENCE_OFFSET: usize = 8;
const NAME_LEN_OFFSET: usize = 16;

/// Size of the fixed header preceding the name
pub const HEADER_SIZE: usize = 18;

/// Link between a subvolume and the directory containing it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootRef {
    dirid: u64,
    sequence: u64,
    name: String,
}

impl RootRef {
    /// Inode of the directory holding the subvolume
    pub fn dirid(&self) -> u64 {
        self.dirid
    }

    /// Directory index sequence of the entry
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Name of the subvolume within its directory
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Decode a raw `btrfs_root_ref` and its trailing name
pub fn decode(raw: &[u8]) -> Result<RootRef, Error> {
    ensure(raw, HEADER_SIZE)?;

    let name_len = read_le_u16(raw, NAME_LEN_OFFSET)? as usize;
    let name = std::str::from_utf8(slice(raw, HEADER_SIZE, name_len)?)?;

    Ok(RootRef {
        dirid: read_le_u64(raw, DIRID_OFFSET)?,
        sequence: read_le_u64(raw, SEQUENCE_OFFSET)?,
        name: name.to_owned(),
    })
}

impl Record for RootRef {
    const KIND: Kind = Kind::RootRef;

    fn decode(raw: &[u8]) -> Result<Self, Error> {
        decode(raw)
    }
}
