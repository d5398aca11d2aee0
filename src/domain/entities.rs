//! Domain entities: split strategies, part plans and part naming

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// How a source file is divided into parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Exactly this many parts; the first `len % parts` get one extra byte.
    Parts(u64),
    /// Parts of at most this many bytes; only the last may be shorter.
    Size(u64),
}

impl SplitStrategy {
    /// Reject strategies that cannot produce a plan.
    pub fn validate(self) -> Result<Self, DomainError> {
        match self {
            SplitStrategy::Parts(0) => Err(DomainError::ZeroPartCount),
            SplitStrategy::Size(0) => Err(DomainError::ZeroPartSize),
            valid => Ok(valid),
        }
    }
}

/// One planned part: its index and exact byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSpec {
    pub index: u64,
    pub len: u64,
}

/// Lazily yields the parts a source of `source_len` bytes is cut into.
///
/// Parts come out in index order and their lengths always sum to
/// `source_len`. With [`SplitStrategy::Parts`] exactly `n` parts are yielded,
/// trailing ones empty when `n > source_len`. With [`SplitStrategy::Size`] an
/// empty source yields no parts at all.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    strategy: SplitStrategy,
    source_len: u64,
    next_index: u64,
    remaining: u64,
}

impl SplitPlan {
    pub fn new(source_len: u64, strategy: SplitStrategy) -> Result<Self, DomainError> {
        let strategy = strategy.validate()?;
        Ok(Self {
            strategy,
            source_len,
            next_index: 0,
            remaining: source_len,
        })
    }

    /// Total number of parts the plan produces.
    pub fn part_count(&self) -> u64 {
        match self.strategy {
            SplitStrategy::Parts(parts) => parts,
            SplitStrategy::Size(size) => self.source_len.div_ceil(size),
        }
    }
}

impl Iterator for SplitPlan {
    type Item = PartSpec;

    fn next(&mut self) -> Option<PartSpec> {
        let len = match self.strategy {
            SplitStrategy::Parts(parts) => {
                if self.next_index >= parts {
                    return None;
                }
                let base = self.source_len / parts;
                let larger = self.source_len % parts;
                if self.next_index < larger {
                    base + 1
                } else {
                    base
                }
            }
            SplitStrategy::Size(size) => {
                if self.remaining == 0 {
                    return None;
                }
                size.min(self.remaining)
            }
        };

        let part = PartSpec {
            index: self.next_index,
            len,
        };
        self.next_index += 1;
        self.remaining -= len;
        Some(part)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.part_count().saturating_sub(self.next_index);
        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Path of part `index` for `base`: `<base>.<index>`, decimal, no padding.
pub fn part_path(base: &Path, index: u64) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// A part file written by a split or consumed by a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFile {
    pub index: u64,
    pub path: PathBuf,
    /// Bytes actually copied
    pub len: u64,
}

/// Outcome of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub source: PathBuf,
    pub source_len: u64,
    pub parts: Vec<PartFile>,
}

/// Outcome of a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReport {
    pub output: PathBuf,
    pub parts: Vec<PartFile>,
}

impl JoinReport {
    /// Bytes written to the joined file.
    pub fn total_len(&self) -> u64 {
        self.parts.iter().map(|p| p.len).sum()
    }
}
