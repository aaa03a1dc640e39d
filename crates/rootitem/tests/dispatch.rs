// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Ensure search result payloads dispatch to the right decoder

use std::{fs, io::Read, thread};

use rootitem::{decode, Kind, Record, RootIdentity, RootRef, ROOT_BACKREF_KEY, ROOT_ITEM_KEY};

fn fixture() -> Vec<u8> {
    let mut fi = fs::File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/root_item.bin.zst"))
        .expect("cannot open root item");
    let mut stream = zstd::stream::Decoder::new(&mut fi).expect("Unable to decode stream");
    let mut raw = Vec::new();
    stream
        .read_to_end(&mut raw)
        .expect("Could not unpack root item in memory");
    raw
}

#[test]
fn dispatch_by_item_key() {
    let raw = fixture();
    assert_eq!(raw.len(), rootitem::root_item::ROOT_ITEM_SIZE);

    // (type, payload) pairs as laid out after each search header
    let mut backref = Vec::new();
    backref.extend_from_slice(&256u64.to_le_bytes());
    backref.extend_from_slice(&3u64.to_le_bytes());
    backref.extend_from_slice(&5u16.to_le_bytes());
    backref.extend_from_slice(b"@home");
    let items = [(ROOT_ITEM_KEY, raw.as_slice()), (ROOT_BACKREF_KEY, backref.as_slice())];

    for (key, payload) in items {
        match Kind::for_item_key(key).expect("unknown item key") {
            Kind::RootItem => {
                let root: RootIdentity = decode(payload).expect("Cannot decode root item");
                assert_eq!(root.generation(), 1289);
                assert_eq!(RootIdentity::KIND, Kind::RootItem);
            }
            Kind::RootRef => {
                let root_ref: RootRef = decode(payload).expect("Cannot decode root ref");
                assert_eq!(root_ref.name(), "@home");
                assert_eq!(root_ref.dirid(), 256);
                assert_eq!(RootRef::KIND, Kind::RootRef);
            }
        }
    }
}

#[test]
fn concurrent_decodes() {
    let raw = fixture();
    let expected = decode::<RootIdentity>(&raw).expect("Cannot decode root item");

    thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| decode::<RootIdentity>(&raw)))
            .collect::<Vec<_>>();
        for handle in handles {
            let root = handle.join().expect("decoder thread panicked");
            assert_eq!(root.expect("Cannot decode root item"), expected);
        }
    });
}
