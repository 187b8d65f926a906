//! page2pdf engine: fetch a page, flatten it to text, lay the text out as a PDF.
mod decode;
mod driver;
mod extract;
mod fetch;
mod persist;
mod render;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use driver::{
    output_filename, read_url_list, Driver, DriverError, NullReporter, Reporter,
};
pub use extract::{Extractor, PlainTextExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, write_document, PersistError};
pub use render::{layout_pages, PdfRenderer, RenderError, RenderSettings, Renderer};
pub use types::{
    BulkSummary, FailureKind, FetchError, PageFetchResult, PipelineEvent, SingleOutcome,
    ACCESS_FAILURE_STATUSES,
};
