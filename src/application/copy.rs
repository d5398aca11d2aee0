//! Bounded stream copy through a caller-owned buffer.

use std::io::{self, Read, Write};

/// Copy bytes from `reader` to `writer` through `buf`.
///
/// With `limit = Some(n)` at most `n` bytes are copied; with `None` the reader
/// is drained. Copying stops early at EOF, so the returned count may be less
/// than `limit`. Nothing is read past `limit`, which lets consecutive calls
/// carve one reader into adjacent pieces.
pub fn copy_bounded(
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    limit: Option<u64>,
    buf: &mut [u8],
) -> io::Result<u64> {
    let mut copied: u64 = 0;
    loop {
        let want = match limit {
            Some(limit) => {
                let left = limit - copied;
                if left == 0 {
                    break;
                }
                usize::try_from(left).map_or(buf.len(), |left| left.min(buf.len()))
            }
            None => buf.len(),
        };

        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        copied += n as u64;
    }
    Ok(copied)
}
