use crate::error::{CoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Size above which the UI shows a warning. Larger files are still accepted.
pub const ADVISORY_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

/// Extensions offered by the file dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// The file picked by the user. Replaced wholesale on a new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Location on disk, absent for files built in memory.
    pub path: Option<PathBuf>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            path: None,
        }
    }

    /// Reads name and size of a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            size: meta.len(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Name length in UTF-16 code units, as a browser file input reports it.
    pub fn name_len(&self) -> usize {
        self.name.encode_utf16().count()
    }

    pub fn exceeds_advisory_limit(&self) -> bool {
        self.size > ADVISORY_SIZE_LIMIT
    }
}

/// Simulated binary outcome of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Cancer indicators detected.
    Positive,
    /// No indicators detected.
    Negative,
}

/// Classification with its confidence percentage in `55..=98`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub classification: Classification,
    pub confidence: u8,
}

pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn from_path_reads_name_and_size() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("scan.png");
        let mut f = File::create(&path)?;
        f.write_all(&[0u8; 1234])?;
        drop(f);

        let file = SelectedFile::from_path(&path)?;
        assert_eq!(file.name, "scan.png");
        assert_eq!(file.size, 1234);
        assert_eq!(file.path.as_deref(), Some(path.as_path()));
        Ok(())
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = SelectedFile::from_path(dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[rstest]
    #[case("scan.png", 8)]
    #[case("", 0)]
    #[case("röntgen.jpg", 11)]
    #[case("📷.png", 6)]
    fn name_len_counts_utf16_units(#[case] name: &str, #[case] expected: usize) {
        assert_eq!(SelectedFile::new(name, 0).name_len(), expected);
    }

    #[test]
    fn advisory_limit_is_exclusive() {
        assert!(!SelectedFile::new("a.png", ADVISORY_SIZE_LIMIT).exceeds_advisory_limit());
        assert!(SelectedFile::new("a.png", ADVISORY_SIZE_LIMIT + 1).exceeds_advisory_limit());
    }

    #[rstest]
    #[case("a.PNG", true)]
    #[case("b.jpeg", true)]
    #[case("c.Gif", true)]
    #[case("d.webp", true)]
    #[case("notes.txt", false)]
    #[case("no_extension", false)]
    fn supported_image_extensions(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_supported_image(Path::new(name)), expected);
    }
}
