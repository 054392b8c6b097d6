//! File-system [`FileProbe`].

use std::path::Path;

use super::FileProbe;

/// Asks the operating system whether a regular file exists at a path.
///
/// Directories, dangling symlinks, and paths the process cannot stat all
/// count as "no file".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsFileProbe;

impl FileProbe for FsFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
