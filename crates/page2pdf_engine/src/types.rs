use std::fmt;
use std::path::PathBuf;

/// Statuses treated as "cannot access this page" rather than generic HTTP errors.
pub const ACCESS_FAILURE_STATUSES: [u16; 5] = [401, 403, 404, 500, 503];

/// Outcome of fetching one page: decoded markup or a classified failure.
pub type PageFetchResult = Result<String, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind,
            message: message.into(),
        }
    }

    /// True for the access statuses; everything else is a network-class failure.
    pub fn is_access_failure(&self) -> bool {
        matches!(self.kind, FailureKind::HttpStatus(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::HttpStatus(code) => {
                write!(f, "Cannot access {}. Status code: {code}", self.url)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// One of [`ACCESS_FAILURE_STATUSES`].
    HttpStatus(u16),
    /// Any other 4xx/5xx status.
    ErrorStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::ErrorStatus(code) => write!(f, "error status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything the driver tells its reporter, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    SingleStarted {
        url: String,
    },
    ItemStarted {
        index: usize,
        url: String,
    },
    FetchFailed {
        index: Option<usize>,
        error: FetchError,
    },
    Saved {
        index: Option<usize>,
        path: PathBuf,
    },
    Skipped {
        index: usize,
    },
    RenderFailed {
        index: usize,
        path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleOutcome {
    Saved(PathBuf),
    Skipped(FetchError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSummary {
    pub saved: Vec<PathBuf>,
    pub skipped: Vec<usize>,
    pub render_failed: Vec<usize>,
}
