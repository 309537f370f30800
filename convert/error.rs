use thiserror::Error;

/// Extraction failures. `MissingLink` is recovered at the row loop; the
/// rest abort the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no link in cell: {snippet}")]
    MissingLink { snippet: String },

    #[error("found {tables} data tables but {headings} section headings")]
    SectionMismatch { tables: usize, headings: usize },
}
