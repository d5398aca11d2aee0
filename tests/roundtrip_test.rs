//! Split followed by join reproduces the source byte for byte.

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use splitjoin::config::Settings;
use splitjoin::domain::SplitStrategy;
use splitjoin::infrastructure::ServiceContainer;
use splitjoin::util::testing::{init_test_setup, sample_bytes, write_file};

#[ctor::ctor]
fn init() {
    init_test_setup();
}

/// Split `data` in `split_dir`, move the parts to `join_dir`, join them there.
fn roundtrip(data: &[u8], strategy: SplitStrategy, buffer_size: usize) -> (usize, Vec<u8>) {
    let split_dir = TempDir::new().unwrap();
    let join_dir = TempDir::new().unwrap();
    let container = ServiceContainer::new(Settings { buffer_size });

    let source = write_file(split_dir.path(), "payload.bin", data);
    let report = container.split_service.split(&source, strategy).unwrap();
    for part in &report.parts {
        let name = part.path.file_name().unwrap();
        fs::rename(&part.path, join_dir.path().join(name)).unwrap();
    }

    let base = join_dir.path().join("payload.bin");
    container.join_service.join(&base).unwrap();
    (report.parts.len(), read(&base))
}

fn read(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap()
}

#[rstest]
#[case(0, 1)]
#[case(0, 5)]
#[case(1, 1)]
#[case(10, 3)]
#[case(10, 20)]
#[case(4096, 4)]
#[case(9_999, 7)]
fn given_any_part_count_when_roundtrip_then_identical(#[case] len: usize, #[case] parts: u64) {
    let data = sample_bytes(len);

    let (count, joined) = roundtrip(&data, SplitStrategy::Parts(parts), 4096);

    assert_eq!(count as u64, parts);
    assert_eq!(joined, data);
}

#[rstest]
#[case(0, 4)]
#[case(1, 1)]
#[case(10, 4)]
#[case(12, 4)]
#[case(4097, 4096)]
#[case(9_999, 1000)]
fn given_any_part_size_when_roundtrip_then_identical(#[case] len: usize, #[case] size: u64) {
    let data = sample_bytes(len);

    let (count, joined) = roundtrip(&data, SplitStrategy::Size(size), 5);

    assert_eq!(count as u64, (len as u64).div_ceil(size));
    assert_eq!(joined, data);
}
