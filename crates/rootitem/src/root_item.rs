// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! `btrfs_root_item` handling
//!
//! Only the identity and generation fields are extracted. Offsets follow the
//! packed kernel definition:
//!
//! ```text
//! 0    inode            btrfs_inode_item (160)
//! 160  generation       __le64
//! 168  root_dirid .. last_snapshot
//! 208  flags            __le64
//! 216  refs, drop_progress, drop_level, level, generation_v2
//! 247  uuid             [u8; 16]
//! 263  parent_uuid      [u8; 16]
//! 279  received_uuid    [u8; 16]
//! 295  ctransid         __le64
//! 303  otransid         __le64
//! 311  stransid, rtransid, timespecs, reserved
//! 439  end
//! ```

use std::io::Read;

use log;
use uuid::Uuid;

use crate::{
    layout::{ensure, read_fixed, read_le_u64},
    Error, Kind, Record,
};

/// Full size of a current `btrfs_root_item`
pub const ROOT_ITEM_SIZE: usize = 439;

const GENERATION_OFFSET: usize = 160;
const FLAGS_OFFSET: usize = 208;
const UUID_OFFSET: usize = 247;
const PARENT_UUID_OFFSET: usize = 263;
const RECEIVED_UUID_OFFSET: usize = 279;
const OTRANSID_OFFSET: usize = 303;
const UUID_SIZE: usize = 16;

/// Bytes required to reach the end of the last field we read (`otransid`)
pub const MIN_SIZE: usize = OTRANSID_OFFSET + 8;

/// Identity and generation metadata of a single filesystem root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootIdentity {
    uuid: Uuid,
    parent_uuid: Uuid,
    received_uuid: Uuid,
    generation: u64,
    origin_generation: u64,
    flags: u64,
}

impl RootIdentity {
    /// UUID of this root
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// UUID of the root this one was snapshotted from, nil if none
    pub fn parent_uuid(&self) -> Uuid {
        self.parent_uuid
    }

    /// UUID of the root on the sending side, nil if never received
    pub fn received_uuid(&self) -> Uuid {
        self.received_uuid
    }

    /// Transaction id of the last modification
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Transaction id at creation (`otransid`)
    pub fn origin_generation(&self) -> u64 {
        self.origin_generation
    }

    /// Raw root flags, uninterpreted
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Parent UUID, with the nil sentinel mapped to `None`
    pub fn parent(&self) -> Option<Uuid> {
        Some(self.parent_uuid).filter(|u| !u.is_nil())
    }

    /// Received UUID, with the nil sentinel mapped to `None`
    pub fn received_from(&self) -> Option<Uuid> {
        Some(self.received_uuid).filter(|u| !u.is_nil())
    }
}

/// Decode the identity fields of a raw `btrfs_root_item`
///
/// Trailing bytes past [`MIN_SIZE`] are ignored, so both the full record and
/// anything longer are accepted.
pub fn decode(raw: &[u8]) -> Result<RootIdentity, Error> {
    ensure(raw, MIN_SIZE)?;

    Ok(RootIdentity {
        uuid: Uuid::from_bytes(read_fixed::<UUID_SIZE>(raw, UUID_OFFSET)?),
        parent_uuid: Uuid::from_bytes(read_fixed::<UUID_SIZE>(raw, PARENT_UUID_OFFSET)?),
        received_uuid: Uuid::from_bytes(read_fixed::<UUID_SIZE>(raw, RECEIVED_UUID_OFFSET)?),
        generation: read_le_u64(raw, GENERATION_OFFSET)?,
        origin_generation: read_le_u64(raw, OTRANSID_OFFSET)?,
        flags: read_le_u64(raw, FLAGS_OFFSET)?,
    })
}

/// Attempt to decode a root item from the given read stream
///
/// At most [`ROOT_ITEM_SIZE`] bytes are consumed. A stream ending early is
/// reported the same way as a short slice.
pub fn from_reader<R: Read>(reader: &mut R) -> Result<RootIdentity, Error> {
    let mut data = Vec::with_capacity(ROOT_ITEM_SIZE);
    reader
        .by_ref()
        .take(ROOT_ITEM_SIZE as u64)
        .read_to_end(&mut data)?;

    let root = decode(&data)?;
    log::trace!(
        "decoded root item: UUID={} generation={}",
        root.uuid.hyphenated(),
        root.generation
    );
    Ok(root)
}

impl Record for RootIdentity {
    const KIND: Kind = Kind::RootItem;

    fn decode(raw: &[u8]) -> Result<Self, Error> {
        decode(raw)
    }
}
