// ============================================================================
// Resource Gateway
// ============================================================================
//
// Read-only view of a fixed directory that serves PDF documents only.
//
// Endpoints:
// GET /api/resources/{filename}   - single file at the root
// GET /api/resources/{...path}    - file in a nested directory
//
// Both shapes are one wildcard route: a request is a sequence of one or more
// segments. The capture is split on literal `/` before percent-decoding, so an
// encoded `%2F` stays inside its segment and is rejected. Segments are
// validated before any filesystem access, and a failed read is always
// reported as 404.
//
// ============================================================================

use async_trait::async_trait;
use axum::{
    extract::{RawPathParams, State},
    http::header,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::io;
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use crate::error::{ResourceError, ResourceResult};
use crate::utils::attachment_disposition;

const TRAVERSAL_SEQUENCE: &str = "..";
const SEPARATORS: [char; 2] = ['/', '\\'];
const PDF_SUFFIX: &str = ".pdf";
const PDF_CONTENT_TYPE: &str = "application/pdf";
const PATH_PARAM: &str = "path";

// ============================================================================
// Requested Path
// ============================================================================

/// A client-supplied relative file location that passed validation.
///
/// Holds one or more segments; none contains `..`, `/` or `\`, none is empty,
/// and the last ends in `.pdf` (any case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedPath {
    segments: Vec<String>,
}

impl RequestedPath {
    /// Validate a segment sequence. Checks run in order and stop at the first
    /// failure: traversal, then separators, then the file extension.
    pub fn from_segments<I, S>(segments: I) -> ResourceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        if segments.is_empty() {
            return Err(ResourceError::InvalidPathSegment);
        }

        if segments.iter().any(|s| s.contains(TRAVERSAL_SEQUENCE)) {
            return Err(ResourceError::InvalidPathSegment);
        }

        if segments.iter().any(|s| !is_plain_segment(s)) {
            return Err(ResourceError::InvalidPathSegment);
        }

        let filename = &segments[segments.len() - 1];
        if !filename.to_lowercase().ends_with(PDF_SUFFIX) {
            return Err(ResourceError::InvalidFileType);
        }

        Ok(Self { segments })
    }

    /// Split an undecoded wildcard capture (`a/b/report%202.pdf`) on `/`,
    /// percent-decode each segment and validate them.
    pub fn parse(raw: &str) -> ResourceResult<Self> {
        let segments = raw
            .split('/')
            .map(decode_segment)
            .collect::<ResourceResult<Vec<String>>>()?;
        Self::from_segments(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment, exactly as supplied
    pub fn filename(&self) -> &str {
        // from_segments guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Join the segments onto `base`
    pub fn resolve(&self, base: &FsPath) -> PathBuf {
        self.segments
            .iter()
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }
}

fn decode_segment(segment: &str) -> ResourceResult<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| ResourceError::InvalidPathSegment)
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(SEPARATORS)
}

// ============================================================================
// Storage
// ============================================================================

/// Read access to the resources directory
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Read the whole file at `path`
    async fn read(&self, path: &FsPath) -> io::Result<Vec<u8>>;
}

/// Reads straight from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResourceStore;

#[async_trait]
impl ResourceStore for FsResourceStore {
    async fn read(&self, path: &FsPath) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

// ============================================================================
// Gateway
// ============================================================================

/// A fetched document ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl IntoResponse for PdfDocument {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, header::HeaderValue::from_static(PDF_CONTENT_TYPE)),
                (
                    header::CONTENT_DISPOSITION,
                    attachment_disposition(&self.filename),
                ),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// Serves PDF documents from a fixed root directory
pub struct ResourceGateway {
    root: PathBuf,
    store: Arc<dyn ResourceStore>,
}

impl ResourceGateway {
    /// Resources root, relative to the working directory of the process
    pub const RESOURCES_DIR: &'static str = "public/resources";

    pub fn new(root: impl Into<PathBuf>, store: Arc<dyn ResourceStore>) -> Self {
        Self {
            root: root.into(),
            store,
        }
    }

    /// Gateway over `RESOURCES_DIR` under the current working directory
    pub fn from_working_dir() -> io::Result<Self> {
        let root = std::env::current_dir()?.join(Self::RESOURCES_DIR);
        Ok(Self::new(root, Arc::new(FsResourceStore)))
    }

    pub fn root(&self) -> &FsPath {
        &self.root
    }

    /// Validate an undecoded wildcard capture and fetch it
    pub async fn serve(&self, raw: &str) -> ResourceResult<PdfDocument> {
        let path = RequestedPath::parse(raw)?;
        self.fetch(&path).await
    }

    /// Read a validated path. Any read failure becomes `NotFound`.
    pub async fn fetch(&self, path: &RequestedPath) -> ResourceResult<PdfDocument> {
        let location = path.resolve(&self.root);

        let bytes = self.store.read(&location).await.map_err(|e| {
            tracing::warn!(
                error = %e,
                location = %location.display(),
                "Failed to read resource"
            );
            ResourceError::NotFound(e)
        })?;

        tracing::debug!(
            filename = %path.filename(),
            depth = path.segments().len(),
            size_bytes = bytes.len(),
            "Serving resource"
        );

        Ok(PdfDocument {
            filename: path.filename().to_string(),
            bytes,
        })
    }
}

/// GET /api/resources/*path
pub async fn serve_resource(
    State(gateway): State<Arc<ResourceGateway>>,
    params: RawPathParams,
) -> Result<PdfDocument, ResourceError> {
    let raw = params
        .iter()
        .find(|(name, _)| *name == PATH_PARAM)
        .map(|(_, value)| value)
        .ok_or(ResourceError::InvalidPathSegment)?;

    gateway.serve(raw).await
}

// ============================================================================
// Tests
// ============================================================================
