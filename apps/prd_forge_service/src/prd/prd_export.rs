use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDateTime;
use serde::Serialize;

use super::prd_types::ExportFormat;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: Vec<u8>,
}

impl ExportFile {
    pub fn content_base64(&self) -> String {
        STANDARD.encode(&self.content)
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.mime_type,
            self.content_base64()
        )
    }

    pub fn summary(&self) -> ExportSummary {
        ExportSummary {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.to_string(),
            content_base64: self.content_base64(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub file_name: String,
    pub mime_type: String,
    pub content_base64: String,
}

pub fn file_name(app_name: &str, timestamp: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "{}_PRD_{}.{}",
        app_name.replace(' ', "_"),
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// The file body is the document's UTF-8 bytes, untouched.
pub fn export_file(
    app_name: &str,
    text: &str,
    format: ExportFormat,
    timestamp: NaiveDateTime,
) -> ExportFile {
    ExportFile {
        file_name: file_name(app_name, timestamp, format),
        mime_type: format.mime_type(),
        content: text.as_bytes().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            file_name("My App", fixed_timestamp(), ExportFormat::Markdown),
            "My_App_PRD_20240101_120000.md"
        );
        assert_eq!(
            file_name("My App", fixed_timestamp(), ExportFormat::Text),
            "My_App_PRD_20240101_120000.txt"
        );
    }

    #[test]
    fn test_only_spaces_are_replaced() {
        assert_eq!(
            file_name("  Two  Spaces\tTab", fixed_timestamp(), ExportFormat::Text),
            "__Two__Spaces\tTab_PRD_20240101_120000.txt"
        );
    }

    #[test]
    fn test_mime_types() {
        let markdown = export_file("A", "x", ExportFormat::Markdown, fixed_timestamp());
        let text = export_file("A", "x", ExportFormat::Text, fixed_timestamp());

        assert_eq!(markdown.mime_type, "text/markdown");
        assert_eq!(text.mime_type, "text/plain");
    }

    #[test]
    fn test_content_is_exact_utf8() {
        let document = "# ट्रेल बडी\n\n1. Overview → ✓\r\ntrailing space ";
        let file = export_file("Trail Buddy", document, ExportFormat::Markdown, fixed_timestamp());

        assert_eq!(String::from_utf8(file.content.clone()).unwrap(), document);
        assert_eq!(STANDARD.decode(file.content_base64()).unwrap(), document.as_bytes());
        assert!(file.data_url().starts_with("data:text/markdown;charset=utf-8;base64,"));
    }
}
