//! Binary-document boundary.
//!
//! PDF, Office and image processing happens outside this workspace, behind
//! [`DocumentService`]. This module owns what the site decides before and
//! after calling it: the catalogue of document tools, input validation,
//! page-range parsing and suggested output names.

use std::fmt;
use std::str::FromStr;

use ck_core::{ensure, Error, Result};

/// MIME type of PDF files.
pub const PDF_MIME: &str = "application/pdf";
/// MIME type of JPEG images.
pub const JPEG_MIME: &str = "image/jpeg";
/// MIME type of `.xlsx` workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Most pages rendered by `pdf-to-jpg`.
pub const PDF_TO_JPG_MAX_PAGES: u32 = 10;

/// Image formats the image converter can produce.
pub const IMAGE_FORMATS: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// A tool backed by the document collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentTool {
    /// Concatenate PDFs.
    MergePdf,
    /// Keep selected pages of a PDF.
    SplitPdf,
    /// Re-save a PDF smaller.
    CompressPdf,
    /// Render PDF pages as JPEG images.
    PdfToJpg,
    /// Render a `.docx` document as PDF.
    WordToPdf,
    /// Convert a CSV file to an `.xlsx` workbook.
    CsvToExcel,
    /// Re-encode an image in another format.
    ImageConverter,
    /// Re-encode an image at lower quality.
    ImageCompressor,
}

impl DocumentTool {
    /// Every document tool.
    pub const ALL: [DocumentTool; 8] = [
        DocumentTool::MergePdf,
        DocumentTool::SplitPdf,
        DocumentTool::CompressPdf,
        DocumentTool::PdfToJpg,
        DocumentTool::WordToPdf,
        DocumentTool::CsvToExcel,
        DocumentTool::ImageConverter,
        DocumentTool::ImageCompressor,
    ];

    /// Stable tool id.
    pub fn id(self) -> &'static str {
        match self {
            DocumentTool::MergePdf => "merge-pdf",
            DocumentTool::SplitPdf => "split-pdf",
            DocumentTool::CompressPdf => "compress-pdf",
            DocumentTool::PdfToJpg => "pdf-to-jpg",
            DocumentTool::WordToPdf => "word-to-pdf",
            DocumentTool::CsvToExcel => "csv-to-excel",
            DocumentTool::ImageConverter => "image-converter",
            DocumentTool::ImageCompressor => "image-compressor",
        }
    }

    /// Whether the tool takes several inputs.
    pub fn accepts_many(self) -> bool {
        self == DocumentTool::MergePdf
    }
}

impl fmt::Display for DocumentTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DocumentTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentTool::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| Error::UnknownTool(s.to_string()))
    }
}

/// A file uploaded by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Original file name.
    pub name: String,
    /// MIME type reported by the browser.
    pub mime_type: String,
    /// Contents.
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Create an input file.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Tool-specific options, validated before the collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOptions {
    /// No options.
    None,
    /// Page range text for `split-pdf`, resolved by the service with
    /// [`PageSelection::parse`] once the page count is known.
    PageRange(String),
    /// Target MIME type for `image-converter`.
    Format(String),
    /// JPEG/WebP quality (1–100) for `image-compressor`.
    Quality(u8),
}

/// One call to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// The tool to run.
    pub tool: DocumentTool,
    /// Inputs, in upload order.
    pub files: Vec<InputFile>,
    /// Validated options.
    pub options: DocumentOptions,
}

/// A file produced by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Contents.
    pub bytes: Vec<u8>,
    /// Name offered to the user; filled in from [`suggested_filename`] when
    /// the service leaves it empty.
    pub suggested_filename: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
}

/// Failures reported by the collaborator.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An input could not be read as the expected format.
    #[error("File {0} is not a valid document")]
    InvalidDocument(String),
    /// A required processing library is unavailable.
    #[error("{0} failed to load")]
    Unavailable(String),
    /// Processing failed.
    #[error("{0}")]
    Failed(String),
}

/// The external binary-document processor.
pub trait DocumentService {
    /// Run `request`, returning one or more files.
    fn process(&self, request: &DocumentRequest) -> Result<Vec<FileArtifact>, DocumentError>;
}

/// Pages selected from a document, 1-based, sorted and de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pages: Vec<u32>,
}

impl PageSelection {
    /// Parse `"1-3, 5, 8-9"` against a document of `total_pages` pages.
    ///
    /// Pages outside `1..=total_pages` and malformed parts are dropped.
    /// Fails when nothing remains.
    pub fn parse(range: &str, total_pages: u32) -> Result<Self> {
        let mut pages = Vec::new();
        for part in range.split(',').map(str::trim) {
            match part.split_once('-') {
                Some((start, end)) => {
                    if let (Ok(start), Ok(end)) =
                        (start.trim().parse::<u32>(), end.trim().parse::<u32>())
                    {
                        let first = start.max(1);
                        let last = end.min(total_pages);
                        if start > 0 && first <= last {
                            pages.extend(first..=last);
                        }
                    }
                }
                None => {
                    if let Ok(page) = part.parse::<u32>() {
                        if (1..=total_pages).contains(&page) {
                            pages.push(page);
                        }
                    }
                }
            }
        }
        pages.sort_unstable();
        pages.dedup();
        ensure!(!pages.is_empty(), "Invalid page range.");
        Ok(Self { pages })
    }

    /// Selected 1-based page numbers.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// Selected 0-based page indices.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().map(|p| p - 1)
    }
}

fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(i) => &name[..i],
    }
}

/// Name offered for the `index`-th (1-based) output of `tool` run on
/// `input_name`.
pub fn suggested_filename(
    tool: DocumentTool,
    input_name: &str,
    options: &DocumentOptions,
    index: usize,
) -> String {
    match tool {
        DocumentTool::MergePdf => "merged_document.pdf".to_string(),
        DocumentTool::SplitPdf => format!("split_{input_name}"),
        DocumentTool::CompressPdf | DocumentTool::ImageCompressor => {
            format!("compressed_{input_name}")
        }
        DocumentTool::PdfToJpg => format!("{}_page_{index}.jpg", stem(input_name)),
        DocumentTool::WordToPdf => format!("{}.pdf", stem(input_name)),
        DocumentTool::CsvToExcel => format!("{}.xlsx", stem(input_name)),
        DocumentTool::ImageConverter => {
            let ext = match options {
                DocumentOptions::Format(mime) => mime.rsplit('/').next().unwrap_or("png"),
                _ => "png",
            };
            format!("{}.{ext}", stem(input_name))
        }
    }
}

/// MIME type of the outputs of `tool`.
pub fn output_mime(tool: DocumentTool, input: &InputFile, options: &DocumentOptions) -> String {
    match (tool, options) {
        (DocumentTool::MergePdf, _)
        | (DocumentTool::SplitPdf, _)
        | (DocumentTool::CompressPdf, _)
        | (DocumentTool::WordToPdf, _) => PDF_MIME.to_string(),
        (DocumentTool::PdfToJpg, _) => JPEG_MIME.to_string(),
        (DocumentTool::CsvToExcel, _) => XLSX_MIME.to_string(),
        (DocumentTool::ImageConverter, DocumentOptions::Format(mime)) => mime.clone(),
        _ => input.mime_type.clone(),
    }
}

/// Check the inputs the way the site does before calling the collaborator.
pub fn validate_inputs(tool: DocumentTool, files: &[InputFile]) -> Result<()> {
    if tool.accepts_many() {
        ensure!(
            files.len() >= 2,
            "Please select at least 2 PDF files to merge."
        );
        if let Some(bad) = files.iter().find(|f| f.mime_type != PDF_MIME) {
            return Err(Error::invalid_input(format!(
                "File {} is not a valid PDF.",
                bad.name
            )));
        }
    } else {
        ensure!(!files.is_empty(), "Please select a file.");
        ensure!(files.len() == 1, "{tool} accepts a single file.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> InputFile {
        InputFile::new(name, PDF_MIME, vec![b'%'])
    }

    #[test]
    fn page_ranges() {
        let sel = PageSelection::parse("3, 1-2, 2, 9-12", 10).unwrap();
        assert_eq!(sel.pages(), &[1, 2, 3, 9, 10]);
        assert_eq!(sel.indices().collect::<Vec<_>>(), vec![0, 1, 2, 8, 9]);
    }

    #[test]
    fn invalid_page_ranges() {
        assert_eq!(
            PageSelection::parse("0, 11, x, 5-", 10).unwrap_err(),
            Error::invalid_input("Invalid page range.")
        );
        assert!(PageSelection::parse("", 10).is_err());
        assert!(PageSelection::parse("4-2", 10).is_err());
    }

    #[test]
    fn filenames() {
        let none = DocumentOptions::None;
        assert_eq!(
            suggested_filename(DocumentTool::MergePdf, "a.pdf", &none, 1),
            "merged_document.pdf"
        );
        assert_eq!(
            suggested_filename(DocumentTool::SplitPdf, "report.pdf", &none, 1),
            "split_report.pdf"
        );
        assert_eq!(
            suggested_filename(DocumentTool::PdfToJpg, "report.pdf", &none, 3),
            "report_page_3.jpg"
        );
        assert_eq!(
            suggested_filename(DocumentTool::WordToPdf, "cv.docx", &none, 1),
            "cv.pdf"
        );
        assert_eq!(
            suggested_filename(DocumentTool::CsvToExcel, "data.csv", &none, 1),
            "data.xlsx"
        );
        let webp = DocumentOptions::Format("image/webp".into());
        assert_eq!(
            suggested_filename(DocumentTool::ImageConverter, "photo.png", &webp, 1),
            "photo.webp"
        );
    }

    #[test]
    fn merge_validation() {
        assert!(validate_inputs(DocumentTool::MergePdf, &[pdf("a.pdf")]).is_err());
        assert!(validate_inputs(DocumentTool::MergePdf, &[pdf("a.pdf"), pdf("b.pdf")]).is_ok());
        let txt = InputFile::new("a.txt", "text/plain", vec![]);
        assert_eq!(
            validate_inputs(DocumentTool::MergePdf, &[pdf("a.pdf"), txt]).unwrap_err(),
            Error::invalid_input("File a.txt is not a valid PDF.")
        );
        assert!(validate_inputs(DocumentTool::CompressPdf, &[pdf("a.pdf"), pdf("b.pdf")]).is_err());
        assert!(validate_inputs(DocumentTool::CompressPdf, &[]).is_err());
    }

    #[test]
    fn tool_ids_round_trip() {
        for tool in DocumentTool::ALL {
            assert_eq!(tool.id().parse::<DocumentTool>(), Ok(tool));
        }
        assert!("pdf-to-mobi".parse::<DocumentTool>().is_err());
    }
}
