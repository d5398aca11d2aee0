//! Split service: cut one source file into numbered parts
//!
//! ```text
//! movie.avi (10 bytes)
//!   --parts 3  ->  movie.avi.0 (4)  movie.avi.1 (3)  movie.avi.2 (3)
//!   --size 4   ->  movie.avi.0 (4)  movie.avi.1 (4)  movie.avi.2 (2)
//! ```
//!
//! Parts are created write-once. A collision aborts the split and leaves the
//! parts already written on disk.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::copy::copy_bounded;
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{part_path, PartFile, SplitPlan, SplitReport, SplitStrategy};
use crate::infrastructure::traits::FileSystem;

/// Splits files into `<source>.<index>` parts.
pub struct SplitService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl SplitService {
    /// Create a new split service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Split `source` according to `strategy`.
    ///
    /// Part `i` is fully written and closed before part `i + 1` is created.
    ///
    /// # Errors
    /// - `Domain` if the strategy asks for zero parts or zero-byte parts
    /// - `SourceNotFound` if `source` does not exist
    /// - `OutputExists` if a part file already exists
    /// - `OperationFailed` for any other I/O failure
    #[instrument(skip(self))]
    pub fn split(&self, source: &Path, strategy: SplitStrategy) -> ApplicationResult<SplitReport> {
        let strategy = strategy.validate()?;
        let source_len = self.fs.file_len(source).or_source_not_found(source)?;
        let mut reader = self.fs.open_read(source).or_source_not_found(source)?;

        let plan = SplitPlan::new(source_len, strategy)?;
        debug!(source_len, parts = plan.part_count(), "planned split");

        let mut buf = vec![0u8; self.settings.buffer_size.max(1)];
        let mut parts = Vec::new();

        for spec in plan {
            let path = part_path(source, spec.index);
            let mut writer = self.fs.create_new(&path).or_output_exists(&path)?;

            let copied = copy_bounded(reader.as_mut(), writer.as_mut(), Some(spec.len), &mut buf)
                .with_path_context("write part", &path)?;
            writer.flush().with_path_context("flush part", &path)?;

            if copied < spec.len {
                warn!(
                    index = spec.index,
                    expected = spec.len,
                    copied,
                    "source ended early"
                );
            }
            debug!(index = spec.index, len = copied, "wrote part");

            parts.push(PartFile {
                index: spec.index,
                path,
                len: copied,
            });
        }

        info!(parts = parts.len(), source_len, "split complete");
        Ok(SplitReport {
            source: source.to_path_buf(),
            source_len,
            parts,
        })
    }
}
