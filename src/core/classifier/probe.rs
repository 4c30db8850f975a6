use crate::domain::error::{ClassifyError, ClassifyResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw facts about an input file, gathered before classification
#[derive(Debug, Clone)]
pub struct FileProbe {
    /// Total file length in bytes
    pub len: u64,
    /// Up to `head_limit` leading bytes of the file
    pub head: Vec<u8>,
}

/// Validate an input file and read its leading bytes.
///
/// Fails with `FileNotFound` for missing paths and `EmptyFile` for
/// zero-length files, in that order.
pub fn probe_file(path: &Path, head_limit: usize) -> ClassifyResult<FileProbe> {
    if !path.exists() {
        return Err(ClassifyError::FileNotFound);
    }

    let len = std::fs::metadata(path)
        .map_err(|source| ClassifyError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if len == 0 {
        return Err(ClassifyError::EmptyFile);
    }

    let file = File::open(path).map_err(|source| ClassifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut head = Vec::with_capacity(head_limit.min(len as usize));
    file.take(head_limit as u64)
        .read_to_end(&mut head)
        .map_err(|source| ClassifyError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(FileProbe { len, head })
}
