use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::DocumentReadError;

/// Yields a document's paragraphs in order
pub trait DocumentReader {
    /// File extension (without the dot) this reader understands
    fn extension(&self) -> &str;

    fn read_paragraphs(&self, path: &Path) -> Result<Vec<String>, DocumentReadError>;

    /// Full document text, paragraphs joined with newlines
    fn read_text(&self, path: &Path) -> Result<String, DocumentReadError> {
        Ok(self.read_paragraphs(path)?.join("\n"))
    }
}

/// Reads Word `.docx` transcripts
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocumentReader for DocxReader {
    fn extension(&self) -> &str {
        "docx"
    }

    fn read_paragraphs(&self, path: &Path) -> Result<Vec<String>, DocumentReadError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let docx = docx_rs::read_docx(&bytes).map_err(|e| DocumentReadError::Parse {
            path: path.to_path_buf(),
            message: format!("{:?}", e),
        })?;

        // Blank paragraphs are kept so line positions match the document
        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs)
    }
}

/// Concatenate the text runs of a paragraph. Tabs and line breaks inside
/// runs become `\t` and `\n`.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }

    text
}

/// Reads plain-text transcripts, one paragraph per line
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn extension(&self) -> &str {
        "txt"
    }

    fn read_paragraphs(&self, path: &Path) -> Result<Vec<String>, DocumentReadError> {
        let content = std::fs::read_to_string(path).map_err(|source| DocumentReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use docx_rs::{BreakType, Docx, Run};

    use super::*;
    use crate::heuristics::{ExtractSpeakerCounts, SpeakerExtractor};

    #[test]
    fn test_docx_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Week 1.docx");
        let file = std::fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("July 8, 2025, 8:30AM")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Jane Doe rep"))
                    .add_run(Run::new().add_text("lied")),
            )
            .build()
            .pack(file)
            .unwrap();

        let paragraphs = DocxReader.read_paragraphs(&path).unwrap();

        assert_eq!(paragraphs, vec!["July 8, 2025, 8:30AM", "Jane Doe replied"]);
    }

    #[test]
    fn test_docx_tabs_and_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Week 1.docx");
        let file = std::fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Jane Doe").add_tab().add_text("0:03")),
            )
            .add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text("Bob Lee")
                        .add_break(BreakType::TextWrapping)
                        .add_text("hello all"),
                ),
            )
            .build()
            .pack(file)
            .unwrap();

        let paragraphs = DocxReader.read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe\t0:03", "Bob Lee\nhello all"]);

        let counts = SpeakerExtractor::default().extract(&DocxReader.read_text(&path).unwrap());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Jane Doe"], 1);
        assert_eq!(counts["Bob Lee"], 1);
    }

    #[test]
    fn test_docx_not_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Week 1.docx");
        std::fs::write(&path, "plain text, not a zip").unwrap();

        let err = DocxReader.read_paragraphs(&path).unwrap_err();
        assert!(matches!(err, DocumentReadError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlainTextReader
            .read_paragraphs(&dir.path().join("absent.txt"))
            .unwrap_err();

        assert!(matches!(err, DocumentReadError::Io { .. }));
    }

    #[test]
    fn test_plain_text_keeps_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Week 1.txt");
        std::fs::write(&path, "\nJuly 8, 2025\nJohn Smith said hello\n").unwrap();

        let paragraphs = PlainTextReader.read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["", "July 8, 2025", "John Smith said hello"]);

        let text = PlainTextReader.read_text(&path).unwrap();
        assert_eq!(text, "\nJuly 8, 2025\nJohn Smith said hello");
    }
}
