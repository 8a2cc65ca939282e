//! Round-Trip Test - Writer → File → Reader
//!
//! Menulis file data nyata lalu membacanya kembali dengan berbagai batch
//! size dan strategi.
//!
//! Usage:
//!   cargo test --test roundtrip_test

use endio::config::{ReadStrategy, ReaderConfig, WriterConfig};
use endio::driver::{read_session, write_session};
use endio::io::{BatchedReader, MappedRecords, RecordWriter};
use endio::{ByteOrder, Record, RECORD_SIZE};
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn write_records(path: &Path, count: u64) {
    let config = WriterConfig {
        path: path.to_path_buf(),
        count,
        ..WriterConfig::default()
    };
    write_session(&config).unwrap();
}

fn read_all(path: &Path, batch: usize) -> Vec<Record> {
    let file = File::open(path).unwrap();
    let mut reader = BatchedReader::new(file, batch, ByteOrder::detect()).unwrap();
    let mut out = Vec::new();
    while let Some(record) = reader.next_record().unwrap() {
        out.push(record);
    }
    // End-of-stream bersifat terminal
    assert!(reader.next_record().unwrap().is_none());
    out
}

#[test]
fn concrete_three_record_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.dat");
    write_records(&path, 3);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 3 * RECORD_SIZE);
    assert_eq!(
        &bytes[..16],
        &[0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]
    );
    assert_eq!(&bytes[16..20], &[0x02, 0x00, 0x00, 0x02]);
    assert_eq!(&bytes[32..36], &[0x03, 0x00, 0x00, 0x03]);

    let records = read_all(&path, 2);
    assert_eq!(
        records,
        vec![
            Record::new(1, 1, 1, 1),
            Record::new(2, 2, 2, 2),
            Record::new(3, 3, 3, 3),
        ]
    );
}

#[test]
fn batch_size_independence_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.dat");
    write_records(&path, 2_500);

    let baseline = read_all(&path, 1);
    assert_eq!(baseline.len(), 2_500);
    for batch in [2, 7, 1000] {
        assert_eq!(read_all(&path, batch), baseline, "batch size {}", batch);
    }

    let mapped: Vec<Record> = MappedRecords::open(&path, ByteOrder::detect())
        .unwrap()
        .records()
        .collect();
    assert_eq!(mapped, baseline);
}

#[test]
fn seventeen_byte_file_yields_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.dat");
    write_records(&path, 1);
    {
        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&[0x5A]).unwrap();
    }
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 17);

    for batch in [2, 7, 1000] {
        assert_eq!(read_all(&path, batch), vec![Record::splat(1)]);
    }
}

#[test]
fn empty_file_every_batch_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.dat");
    File::create(&path).unwrap();

    for batch in [1, 2, 7, 1000] {
        assert!(read_all(&path, batch).is_empty());
    }

    for strategy in [
        ReadStrategy::Naive,
        ReadStrategy::Batched(3),
        ReadStrategy::Mapped,
    ] {
        let summary = read_session(&ReaderConfig {
            path: path.clone(),
            strategy,
            ..ReaderConfig::default()
        })
        .unwrap();
        assert_eq!(summary.records, 0);
        assert!(summary.last.is_none());
    }
}

#[test]
fn wraparound_values_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.dat");
    // Melewati wrap field16 (65535 → 0)
    write_records(&path, 70_000);

    let summary = read_session(&ReaderConfig {
        path: path.clone(),
        strategy: ReadStrategy::Batched(4096),
        ..ReaderConfig::default()
    })
    .unwrap();
    assert_eq!(summary.records, 70_000);

    let last = summary.last.unwrap();
    assert_eq!(last.field8, (70_000u64 % 256) as u8);
    assert_eq!(last.field16, (70_000u64 % 65_536) as u16);
    assert_eq!(last.field32, 70_000);
    assert_eq!(last.field64, 70_000);
}

#[test]
fn arbitrary_records_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.dat");
    let host = ByteOrder::detect();

    let records: Vec<Record> = (0..64u64)
        .map(|i| {
            let x = i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            Record::new(x as u8, (x >> 8) as u16, (x >> 16) as u32, x)
        })
        .collect();

    let mut writer = RecordWriter::new(File::create(&path).unwrap(), host);
    for r in &records {
        writer.write_record(r).unwrap();
    }
    writer.finish().unwrap();

    assert_eq!(read_all(&path, 5), records);
}
