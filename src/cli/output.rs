//! Output formatting utilities

use crate::application::ExportReport;

/// One-line summary of an export run
pub fn format_export_summary(report: &ExportReport) -> String {
    let mut output = format!(
        "Exported {} page(s) from {} note(s), {} failure(s)",
        report.pages_written(),
        report.notes_scanned,
        report.failures
    );
    if report.attachment_failures > 0 {
        output.push_str(&format!(
            ", {} attachment(s) not copied",
            report.attachment_failures
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ExportedPage;
    use crate::domain::NoteId;
    use std::path::PathBuf;

    #[test]
    fn test_format_empty_report() {
        let report = ExportReport::default();
        assert_eq!(
            format_export_summary(&report),
            "Exported 0 page(s) from 0 note(s), 0 failure(s)"
        );
    }

    #[test]
    fn test_format_report_with_attachment_failures() {
        let report = ExportReport {
            notes_scanned: 4,
            exports: vec![ExportedPage {
                id: NoteId::from_filename("202102012138.md").unwrap(),
                slug: "my-note".to_string(),
                path: PathBuf::from("/site/content/posts/202102012138.md"),
                attachments: 1,
            }],
            failures: 1,
            attachment_failures: 2,
            pages_skipped: 0,
        };
        assert_eq!(
            format_export_summary(&report),
            "Exported 1 page(s) from 4 note(s), 1 failure(s), 2 attachment(s) not copied"
        );
    }
}
