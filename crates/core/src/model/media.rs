use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("media reference cannot be empty")]
    EmptyMediaUri,

    #[error("invalid media url: {0}")]
    InvalidUrl(String),
}

//
// ─── MEDIA URI ─────────────────────────────────────────────────────────────────
//

/// Reference to an illustration shown alongside a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::InvalidUrl(s.to_string()))?;
        Ok(MediaUri::Url(u))
    }

    /// Parses a raw reference from question configuration.
    ///
    /// Anything with a `scheme://` prefix is treated as a URL, the rest as a
    /// file path relative to wherever the presenter resolves assets.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        if s.contains("://") {
            Self::from_url(s)
        } else {
            Self::from_file(s)
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaUri::FilePath(p) => write!(f, "{}", p.display()),
            MediaUri::Url(u) => write!(f, "{u}"),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_urls() {
        let uri = MediaUri::parse("https://example.com/paris.jpg").unwrap();
        assert_eq!(
            uri.as_url().map(Url::as_str),
            Some("https://example.com/paris.jpg")
        );
        assert!(uri.as_path().is_none());
    }

    #[test]
    fn parse_falls_back_to_file_path() {
        let uri = MediaUri::parse("images/mercury.png").unwrap();
        assert_eq!(uri.as_path(), Some(Path::new("images/mercury.png")));
        assert_eq!(uri.to_string(), "images/mercury.png");
    }

    #[test]
    fn blank_reference_is_rejected() {
        assert_eq!(
            MediaUri::parse("   ").unwrap_err(),
            MediaValidationError::EmptyMediaUri
        );
    }

    #[test]
    fn malformed_url_is_rejected() {
        let err = MediaUri::parse("http://").unwrap_err();
        assert!(matches!(err, MediaValidationError::InvalidUrl(_)));
    }
}
