use flatpack_deliver::{Archiver, ZipArchiver};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Read};
use zip::ZipArchive;

fn read_entries(bytes: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        entries.push((file.name().to_string(), data));
    }
    entries
}

#[test]
fn entries_are_written_in_insertion_order() {
    let mut archive = ZipArchiver.new_archive();
    archive.add_entry("b.png", b"bbb").unwrap();
    archive.add_entry("a.png", b"aaa").unwrap();
    archive.add_entry("c.png", b"ccc").unwrap();

    let entries = read_entries(archive.finalize().unwrap());
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["b.png", "a.png", "c.png"]);
}

#[test]
fn entry_content_roundtrips() {
    let mut archive = ZipArchiver.new_archive();
    archive.add_entry("layout.png", b"png payload").unwrap();

    let entries = read_entries(archive.finalize().unwrap());
    assert_eq!(entries[0].1, b"png payload");
}

#[test]
fn duplicate_name_overwrites_in_place() {
    let mut archive = ZipArchiver.new_archive();
    archive.add_entry("dup.png", b"first").unwrap();
    archive.add_entry("other.png", b"other").unwrap();
    archive.add_entry("dup.png", b"second").unwrap();

    let entries = read_entries(archive.finalize().unwrap());
    assert_eq!(entries.len(), 2);
    // Last write wins, position stays at first insertion.
    assert_eq!(entries[0].0, "dup.png");
    assert_eq!(entries[0].1, b"second");
    assert_eq!(entries[1].0, "other.png");
}

#[test]
fn empty_archive_finalizes() {
    let archive = ZipArchiver.new_archive();
    let entries = read_entries(archive.finalize().unwrap());
    assert!(entries.is_empty());
}
