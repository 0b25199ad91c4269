//! Report file output.
//!
//! Writes keyframe summary lines to the destination, one per line. The file
//! is created or truncated; an empty summary list produces an empty file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Writes `summaries` to `path`, each followed by a newline.
///
/// The parent directory is not created. A failure part way through leaves a
/// truncated file behind and is returned as `CoreError::OutputWrite`.
pub fn write_report<S: AsRef<str>>(summaries: &[S], path: &Path) -> CoreResult<()> {
    let to_error = |source| CoreError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for line in summaries {
        writeln!(writer, "{}", line.as_ref()).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;

    log::debug!("Wrote {} line(s) to {}", summaries.len(), path.display());
    Ok(())
}
