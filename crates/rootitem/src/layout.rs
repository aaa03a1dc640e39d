// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Bounds-checked little-endian field access at fixed offsets

use crate::Error;

/// Ensure `raw` holds at least `needed` bytes
pub(crate) fn ensure(raw: &[u8], needed: usize) -> Result<(), Error> {
    if raw.len() < needed {
        Err(Error::RecordTooSmall {
            needed,
            actual: raw.len(),
        })
    } else {
        Ok(())
    }
}

/// Borrow `len` bytes starting at `offset`
pub(crate) fn slice(raw: &[u8], offset: usize, len: usize) -> Result<&[u8], Error> {
    // Saturate so an overflowing end still reports as too small
    let end = offset.saturating_add(len);
    ensure(raw, end)?;
    Ok(&raw[offset..end])
}

pub(crate) fn read_fixed<const N: usize>(raw: &[u8], offset: usize) -> Result<[u8; N], Error> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice(raw, offset, N)?);
    Ok(out)
}

pub(crate) fn read_le_u16(raw: &[u8], offset: usize) -> Result<u16, Error> {
    Ok(u16::from_le_bytes(read_fixed(raw, offset)?))
}

pub(crate) fn read_le_u64(raw: &[u8], offset: usize) -> Result<u64, Error> {
    Ok(u64::from_le_bytes(read_fixed(raw, offset)?))
}
