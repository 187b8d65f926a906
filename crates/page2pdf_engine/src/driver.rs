use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use thiserror::Error;

use crate::extract::{Extractor, PlainTextExtractor};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::persist::{ensure_output_dir, PersistError};
use crate::render::{PdfRenderer, RenderError, Renderer};
use crate::{BulkSummary, PipelineEvent, SingleOutcome};

/// Receives progress and failure notices as the driver works.
pub trait Reporter {
    fn report(&self, event: PipelineEvent);
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: PipelineEvent) {}
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error("cannot prepare output directory: {0}")]
    OutputDir(#[source] PersistError),
    #[error("cannot read url list {path}: {source}")]
    UrlList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot render {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

/// Fetch, extract and render, for one URL or a list of them.
pub struct Driver {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
    renderer: Box<dyn Renderer>,
}

impl Driver {
    /// Reqwest fetcher, plain-text extractor and A4 PDF renderer, all with defaults.
    pub fn with_defaults() -> Result<Self, DriverError> {
        let fetcher =
            ReqwestFetcher::new(FetchSettings::default()).map_err(DriverError::HttpClient)?;
        Ok(Self::new(
            Box::new(fetcher),
            Box::new(PlainTextExtractor),
            Box::new(PdfRenderer::default()),
        ))
    }

    pub fn new(
        fetcher: Box<dyn Fetcher>,
        extractor: Box<dyn Extractor>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            renderer,
        }
    }

    /// Convert one page. A fetch failure is reported and returned as `Skipped`;
    /// only a render failure is an error.
    pub fn process_single(
        &self,
        url: &str,
        output_path: &Path,
        reporter: &dyn Reporter,
    ) -> Result<SingleOutcome, DriverError> {
        reporter.report(PipelineEvent::SingleStarted {
            url: url.to_string(),
        });

        let html = match self.fetcher.fetch(url) {
            Ok(html) => html,
            Err(error) => {
                engine_info!("{} not converted: {}", url, error.kind);
                reporter.report(PipelineEvent::FetchFailed {
                    index: None,
                    error: error.clone(),
                });
                return Ok(SingleOutcome::Skipped(error));
            }
        };

        let text = self.extractor.extract(Some(html.as_str()));
        self.renderer
            .render(&text, output_path)
            .map_err(|source| DriverError::Render {
                path: output_path.to_path_buf(),
                source,
            })?;

        engine_info!("{} saved to {}", url, output_path.display());
        reporter.report(PipelineEvent::Saved {
            index: None,
            path: output_path.to_path_buf(),
        });
        Ok(SingleOutcome::Saved(output_path.to_path_buf()))
    }

    /// Convert every URL in `list_path` into `output_dir/output_<n>.pdf`, in order.
    ///
    /// Failed items are reported and skipped; their number is not reused.
    pub fn process_bulk(
        &self,
        list_path: &Path,
        output_dir: &Path,
        reporter: &dyn Reporter,
    ) -> Result<BulkSummary, DriverError> {
        ensure_output_dir(output_dir).map_err(DriverError::OutputDir)?;
        let urls = read_url_list(list_path)?;
        engine_info!("{} url(s) listed in {}", urls.len(), list_path.display());

        let mut summary = BulkSummary::default();
        for (index, url) in urls.iter().enumerate().map(|(i, url)| (i + 1, url)) {
            reporter.report(PipelineEvent::ItemStarted {
                index,
                url: url.clone(),
            });

            let html = match self.fetcher.fetch(url) {
                Ok(html) => html,
                Err(error) => {
                    engine_info!("item {} ({}) skipped: {}", index, url, error.kind);
                    reporter.report(PipelineEvent::FetchFailed {
                        index: Some(index),
                        error,
                    });
                    reporter.report(PipelineEvent::Skipped { index });
                    summary.skipped.push(index);
                    continue;
                }
            };

            let text = self.extractor.extract(Some(html.as_str()));
            let path = output_dir.join(output_filename(index));
            match self.renderer.render(&text, &path) {
                Ok(()) => {
                    reporter.report(PipelineEvent::Saved {
                        index: Some(index),
                        path: path.clone(),
                    });
                    summary.saved.push(path);
                }
                Err(err) => {
                    engine_warn!("item {} ({}) could not be rendered: {}", index, url, err);
                    reporter.report(PipelineEvent::RenderFailed {
                        index,
                        path,
                        message: err.to_string(),
                    });
                    summary.render_failed.push(index);
                }
            }
        }
        Ok(summary)
    }
}

/// `output_<index>.pdf`, with `index` starting at 1.
pub fn output_filename(index: usize) -> String {
    format!("output_{index}.pdf")
}

/// One trimmed entry per line, blank lines included so numbering follows the file.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, DriverError> {
    let content = fs::read_to_string(path).map_err(|source| DriverError::UrlList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}
