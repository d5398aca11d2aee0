//! Join service: concatenate `<base>.0`, `<base>.1`, ... into `<base>`

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::copy::copy_bounded;
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{part_path, JoinReport, PartFile};
use crate::infrastructure::traits::FileSystem;

/// Joins numbered parts back into one file.
pub struct JoinService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl JoinService {
    /// Create a new join service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Join the parts of `base` into a new file at `base`.
    ///
    /// Parts are read in index order starting at 0. The first missing index
    /// ends the scan, even if higher indices exist. With no parts at all the
    /// output is created empty.
    ///
    /// # Errors
    /// - `OutputExists` if `base` already exists
    /// - `OperationFailed` for any other I/O failure
    #[instrument(skip(self))]
    pub fn join(&self, base: &Path) -> ApplicationResult<JoinReport> {
        let mut writer = self.fs.create_new(base).or_output_exists(base)?;
        let mut buf = vec![0u8; self.settings.buffer_size.max(1)];
        let mut parts = Vec::new();

        for index in 0u64.. {
            let path = part_path(base, index);
            if !self.fs.exists(&path) {
                debug!(index, "no more parts");
                break;
            }

            let mut reader = self
                .fs
                .open_read(&path)
                .with_path_context("open part", &path)?;
            let copied = copy_bounded(reader.as_mut(), writer.as_mut(), None, &mut buf)
                .with_path_context("copy part", &path)?;
            debug!(index, len = copied, "appended part");

            parts.push(PartFile {
                index,
                path,
                len: copied,
            });
        }

        writer.flush().with_path_context("flush output", base)?;

        let report = JoinReport {
            output: base.to_path_buf(),
            parts,
        };
        info!(
            parts = report.parts.len(),
            total_len = report.total_len(),
            "join complete"
        );
        Ok(report)
    }
}
