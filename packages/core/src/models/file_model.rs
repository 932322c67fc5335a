//! Type-Safe File Model
//!
//! Specialized model for `record_type = "file"` records (attachments).
//! Demonstrates the model contract on top of the universal [`Record`]:
//! read accessors with paired `has_` checks, and a lazily loaded
//! per-instance metadata blob for the expensive derived data (dimensions).
//!
//! # Record fields used
//!
//! - `mime_type` - e.g. "image/jpeg", "video/x-msvideo"
//! - `file_name` - used for extension fallback classification
//! - `file_size` - raw byte count
//! - `url` - download URL
//! - `copyright` - attribution text
//!
//! # Examples
//!
//! ```rust
//! use modelkit_core::models::{FileKind, FileModel, FromRecord, Record};
//! use serde_json::json;
//!
//! let record = Record::new(
//!     "file".to_string(),
//!     "Launch photo".to_string(),
//!     json!({
//!         "mime_type": "image/jpeg",
//!         "file_name": "launch.jpg",
//!         "file_size": 524_288,
//!         "url": "https://cdn.example.org/launch.jpg",
//!     }),
//! );
//!
//! let file = FileModel::from_record(record).unwrap();
//! assert_eq!(file.kind(), Some(FileKind::Image));
//! assert_eq!(file.size().as_deref(), Some("512 kB"));
//! assert!(file.has_download_url());
//! ```

use crate::models::{FromRecord, Record, RecordModel, ValidationError};
use crate::store::{FileMetadata, MetadataProvider};
use std::any::Any;
use std::fmt;

const KB_IN_BYTES: u64 = 1024;
const MB_IN_BYTES: u64 = 1024 * KB_IN_BYTES;
const GB_IN_BYTES: u64 = 1024 * MB_IN_BYTES;
const TB_IN_BYTES: u64 = 1024 * GB_IN_BYTES;

/// Coarse file classification derived from the mime type
///
/// One special case: `.avi` videos are reported verbatim as "avi" rather
/// than the generic "video" label. Unrecognized mime types fall back to the
/// raw file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    /// `.avi` video, reported verbatim
    Avi,
    Audio,
    Pdf,
    /// Fallback: the lowercased file extension
    Extension(String),
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Avi => write!(f, "avi"),
            Self::Audio => write!(f, "audio"),
            Self::Pdf => write!(f, "pdf"),
            Self::Extension(ext) => write!(f, "{}", ext),
        }
    }
}

/// Type-safe model for file records
///
/// Wraps one file record and derives presentation-ready data from its
/// fields. The dimensions come from an external metadata provider and are
/// fetched at most once per instance (see [`FileModel::metadata`]).
#[derive(Debug)]
pub struct FileModel {
    record: Record,
    /// Lazily populated, owned by this instance for its lifetime
    metadata: Option<FileMetadata>,
}

impl FromRecord for FileModel {
    const RECORD_TYPE: &'static str = "file";

    fn from_record(record: Record) -> Result<Self, ValidationError> {
        if record.record_type != Self::RECORD_TYPE {
            return Err(ValidationError::InvalidRecordType(format!(
                "Expected '{}', got '{}'",
                Self::RECORD_TYPE,
                record.record_type
            )));
        }
        Ok(Self {
            record,
            metadata: None,
        })
    }
}

impl RecordModel for FileModel {
    fn record(&self) -> &Record {
        &self.record
    }

    fn into_record(self: Box<Self>) -> Record {
        self.record
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl FileModel {
    /// The file's mime type, if the record carries one
    pub fn mime_type(&self) -> Option<&str> {
        self.record.field_str("mime_type")
    }

    /// The file's name, if the record carries one
    pub fn file_name(&self) -> Option<&str> {
        self.record.field_str("file_name")
    }

    /// The lowercased file extension, derived from the file name
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Coarse classification of the file
    ///
    /// Derived from the mime type: image, video (with `.avi` reported
    /// verbatim), audio, or pdf. Unrecognized mime types fall back to the
    /// raw extension. `None` when neither a mime type nor an extension is
    /// available.
    pub fn kind(&self) -> Option<FileKind> {
        match self.mime_type() {
            Some(mime) if mime.contains("image") => Some(FileKind::Image),
            Some(mime) if mime.contains("video") => {
                if self.extension().as_deref() == Some("avi") {
                    Some(FileKind::Avi)
                } else {
                    Some(FileKind::Video)
                }
            }
            Some(mime) if mime.contains("audio") => Some(FileKind::Audio),
            Some(mime) if mime.contains("pdf") => Some(FileKind::Pdf),
            _ => self.extension().map(FileKind::Extension),
        }
    }

    /// Whether the file could be classified at all
    pub fn has_kind(&self) -> bool {
        self.kind().is_some()
    }

    /// The raw byte count, if known and non-zero
    pub fn size_bytes(&self) -> Option<u64> {
        self.record.field_u64("file_size").filter(|size| *size > 0)
    }

    /// Human-readable file size, e.g. "512 kB"
    ///
    /// Scales the byte count into the largest unit whose magnitude it meets
    /// or exceeds, formatted with zero decimal places. A value exactly at a
    /// unit boundary reports in that larger unit (1024 bytes is "1 kB",
    /// never "1024 B"). `None` when the size is unknown or zero.
    pub fn size(&self) -> Option<String> {
        self.size_bytes().map(format_size)
    }

    /// Whether a displayable size is available
    pub fn has_size(&self) -> bool {
        self.size().is_some()
    }

    /// The file's download URL, if the record carries one
    pub fn download_url(&self) -> Option<&str> {
        self.record.field_str("url")
    }

    /// Whether a download URL is available
    pub fn has_download_url(&self) -> bool {
        self.download_url().is_some()
    }

    /// Attribution text stored on the record
    pub fn copyright(&self) -> Option<&str> {
        self.record.field_str("copyright")
    }

    /// Whether attribution text is available
    pub fn has_copyright(&self) -> bool {
        self.copyright().is_some()
    }

    /// The record's title, empty treated as absent
    pub fn title(&self) -> Option<&str> {
        Some(self.record.title.as_str()).filter(|t| !t.is_empty())
    }

    /// Whether a title is available
    pub fn has_title(&self) -> bool {
        self.title().is_some()
    }

    /// Short "(kind. size)" summary, e.g. "(pdf. 180 kB)"
    ///
    /// `None` when either half is missing.
    pub fn summary(&self) -> Option<String> {
        let kind = self.kind()?;
        let size = self.size()?;
        Some(format!("({}. {})", kind, size))
    }

    /// Whether a summary is available
    pub fn has_summary(&self) -> bool {
        self.has_kind() && self.has_size()
    }

    /// The file's metadata blob, fetched lazily
    ///
    /// Fetches from the provider at most once per instance and caches the
    /// result for the instance's lifetime; subsequent calls return the
    /// cached value without touching the provider. A missing or failing
    /// metadata source yields a zero-valued blob rather than an error.
    pub async fn metadata(&mut self, provider: &dyn MetadataProvider) -> &FileMetadata {
        if self.metadata.is_none() {
            let fetched = match provider.file_metadata(&self.record.id).await {
                Ok(Some(metadata)) => metadata,
                Ok(None) => FileMetadata::default(),
                Err(error) => {
                    tracing::debug!(
                        record_id = %self.record.id,
                        %error,
                        "metadata unavailable, using empty blob"
                    );
                    FileMetadata::default()
                }
            };
            self.metadata = Some(fetched);
        }

        self.metadata.get_or_insert_with(FileMetadata::default)
    }

    /// The file's width in pixels, 0 when the metadata source has nothing
    pub async fn width(&mut self, provider: &dyn MetadataProvider) -> u32 {
        self.metadata(provider).await.width
    }

    /// The file's height in pixels, 0 when the metadata source has nothing
    pub async fn height(&mut self, provider: &dyn MetadataProvider) -> u32 {
        self.metadata(provider).await.height
    }
}

/// Format a non-zero byte count into the largest fitting unit
///
/// Units are checked from largest to smallest; the first whose magnitude
/// the count meets or exceeds wins.
fn format_size(bytes: u64) -> String {
    const UNITS: [(&str, u64); 5] = [
        ("TB", TB_IN_BYTES),
        ("GB", GB_IN_BYTES),
        ("MB", MB_IN_BYTES),
        ("kB", KB_IN_BYTES),
        ("B", 1),
    ];

    for (unit, magnitude) in UNITS {
        if bytes >= magnitude {
            return format!("{:.0} {}", bytes as f64 / magnitude as f64, unit);
        }
    }

    // Only reachable for bytes == 0, which size() filters out
    String::new()
}
