//! Tests for the FileModel wrapper

#[cfg(test)]
mod tests {
    use crate::models::{FileKind, FileModel, FromRecord, Record, RecordModel};
    use crate::store::{FileMetadata, MemoryStore};
    use serde_json::json;

    fn file_record(fields: serde_json::Value) -> Record {
        Record::new("file".to_string(), "Attachment".to_string(), fields)
    }

    fn file_model(fields: serde_json::Value) -> FileModel {
        FileModel::from_record(file_record(fields)).unwrap()
    }

    #[test]
    fn test_from_record_validates_type() {
        assert!(FileModel::from_record(file_record(json!({}))).is_ok());

        let wrong = Record::new("page".to_string(), "Nope".to_string(), json!({}));
        let result = FileModel::from_record(wrong);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Expected 'file'"));
    }

    #[test]
    fn test_record_passthrough() {
        let record = file_record(json!({"mime_type": "image/png"}));
        let id = record.id.clone();

        let file = FileModel::from_record(record).unwrap();
        assert_eq!(file.id(), id);
        assert_eq!(file.record_type(), "file");
        assert_eq!(file.field_str("mime_type"), Some("image/png"));
    }

    #[test]
    fn test_kind_image() {
        let file = file_model(json!({"mime_type": "image/jpeg", "file_name": "a.jpg"}));
        assert_eq!(file.kind(), Some(FileKind::Image));
        assert_eq!(file.kind().unwrap().to_string(), "image");
    }

    #[test]
    fn test_kind_avi_special_case() {
        // .avi video is reported verbatim, not as the generic video label
        let avi = file_model(json!({
            "mime_type": "video/x-msvideo",
            "file_name": "clip.AVI",
        }));
        assert_eq!(avi.kind(), Some(FileKind::Avi));
        assert_eq!(avi.kind().unwrap().to_string(), "avi");

        let mp4 = file_model(json!({
            "mime_type": "video/mp4",
            "file_name": "clip.mp4",
        }));
        assert_eq!(mp4.kind(), Some(FileKind::Video));
        assert_eq!(mp4.kind().unwrap().to_string(), "video");
    }

    #[test]
    fn test_kind_audio_and_pdf() {
        let audio = file_model(json!({"mime_type": "audio/mpeg"}));
        assert_eq!(audio.kind(), Some(FileKind::Audio));

        let pdf = file_model(json!({"mime_type": "application/pdf"}));
        assert_eq!(pdf.kind(), Some(FileKind::Pdf));
    }

    #[test]
    fn test_kind_falls_back_to_extension() {
        let sheet = file_model(json!({
            "mime_type": "application/vnd.ms-excel",
            "file_name": "Budget.XLSX",
        }));
        assert_eq!(sheet.kind(), Some(FileKind::Extension("xlsx".to_string())));
        assert_eq!(sheet.kind().unwrap().to_string(), "xlsx");
    }

    #[test]
    fn test_kind_absent_without_mime_and_extension() {
        let bare = file_model(json!({}));
        assert_eq!(bare.kind(), None);
        assert!(!bare.has_kind());

        // A file name without an extension does not help either
        let no_ext = file_model(json!({"file_name": "README"}));
        assert_eq!(no_ext.kind(), None);
    }

    #[test]
    fn test_size_boundaries() {
        // Exactly one kilobyte reports in kilobytes, never bytes
        let boundary = file_model(json!({"file_size": 1024}));
        assert_eq!(boundary.size().as_deref(), Some("1 kB"));

        let below = file_model(json!({"file_size": 1023}));
        assert_eq!(below.size().as_deref(), Some("1023 B"));

        let exact_mb = file_model(json!({"file_size": 1_048_576}));
        assert_eq!(exact_mb.size().as_deref(), Some("1 MB"));

        let exact_gb = file_model(json!({"file_size": 1_073_741_824u64}));
        assert_eq!(exact_gb.size().as_deref(), Some("1 GB"));

        let exact_tb = file_model(json!({"file_size": 1_099_511_627_776u64}));
        assert_eq!(exact_tb.size().as_deref(), Some("1 TB"));
    }

    #[test]
    fn test_size_rounds_to_zero_decimals() {
        // 1536 B = 1.5 kB, rendered with zero decimal places
        let file = file_model(json!({"file_size": 1536}));
        assert_eq!(file.size().as_deref(), Some("2 kB"));
    }

    #[test]
    fn test_size_absent_or_zero() {
        let missing = file_model(json!({}));
        assert_eq!(missing.size(), None);
        assert!(!missing.has_size());

        let zero = file_model(json!({"file_size": 0}));
        assert_eq!(zero.size(), None);
    }

    #[test]
    fn test_has_accessors_mirror_get_accessors() {
        let full = file_model(json!({
            "mime_type": "application/pdf",
            "file_name": "report.pdf",
            "file_size": 184_320,
            "url": "https://cdn.example.org/report.pdf",
            "copyright": "Example Corp",
        }));
        assert!(full.has_kind());
        assert!(full.has_size());
        assert!(full.has_download_url());
        assert!(full.has_copyright());
        assert!(full.has_title());
        assert!(full.has_summary());

        let empty = file_model(json!({"copyright": "", "url": ""}));
        assert!(!empty.has_download_url());
        assert!(!empty.has_copyright());
        assert!(!empty.has_size());
        assert!(!empty.has_summary());
    }

    #[test]
    fn test_summary_composition() {
        let file = file_model(json!({
            "mime_type": "application/pdf",
            "file_size": 184_320,
        }));
        assert_eq!(file.summary().as_deref(), Some("(pdf. 180 kB)"));

        let no_size = file_model(json!({"mime_type": "application/pdf"}));
        assert_eq!(no_size.summary(), None);
    }

    #[tokio::test]
    async fn test_metadata_fetched_once_per_instance() {
        let store = MemoryStore::new();
        let record = file_record(json!({"mime_type": "image/png"}));
        let id = record.id.clone();
        store.set_metadata(
            &id,
            FileMetadata {
                width: 800,
                height: 600,
            },
        );

        let mut file = FileModel::from_record(record).unwrap();
        assert_eq!(file.width(&store).await, 800);
        assert_eq!(file.height(&store).await, 600);
        assert_eq!(file.metadata(&store).await.width, 800);

        // Three accessor calls, exactly one provider hit
        assert_eq!(store.metadata_fetch_count(), 1);
    }

    #[test]
    fn test_missing_metadata_yields_zero_values() {
        // No metadata registered for this record at all
        let store = MemoryStore::new();
        let mut file = file_model(json!({}));

        tokio_test::block_on(async {
            assert_eq!(file.width(&store).await, 0);
            assert_eq!(file.height(&store).await, 0);
        });

        // The empty result is cached like any other
        assert_eq!(store.metadata_fetch_count(), 1);
    }
}
