use std::fmt;
use std::path::Path;

use crate::error::ClrError;

/// Encoding chosen from the output file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Bmp,
}

impl OutputFormat {
    /// Pick the encoder for `path`. Extensions match case-insensitively:
    /// `jpg`/`jpeg`, `png`, `bmp`/`dib`.
    pub fn from_path(path: &Path) -> Result<Self, ClrError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                ClrError::Usage(format!(
                    "unable to infer output image format from '{}'",
                    path.display()
                ))
            })?;

        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "bmp" | "dib" => Ok(OutputFormat::Bmp),
            _ => Err(ClrError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        let cases = [
            ("out.jpg", OutputFormat::Jpeg),
            ("out.JPEG", OutputFormat::Jpeg),
            ("dir.v2/out.png", OutputFormat::Png),
            ("out.Bmp", OutputFormat::Bmp),
            ("out.dib", OutputFormat::Bmp),
        ];
        for (path, expected) in cases {
            assert_eq!(OutputFormat::from_path(Path::new(path)).unwrap(), expected, "{path}");
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = OutputFormat::from_path(Path::new("out.gif")).unwrap_err();
        assert!(matches!(&err, ClrError::UnsupportedFormat(ext) if ext == "gif"));
    }

    #[test]
    fn test_missing_extension() {
        for path in ["out", "out.", "dir.d/out"] {
            let err = OutputFormat::from_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, ClrError::Usage(_)), "{path}");
        }
    }
}
