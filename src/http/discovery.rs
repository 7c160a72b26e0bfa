//! Discovery endpoint.
//!
//! # Responsibilities
//! - Write the rendered page to the response
//! - Log write failures and carry on
//!
//! # Design Decisions
//! - The page is pushed through an in-memory pipe by a spawned task, so a
//!   client that disconnects shows up as a failed write
//! - Always 200; no Content-Type is set
//! - `report_write_error` is the only place errors are swallowed

use std::io;

use axum::body::{Body, Bytes};
use axum::response::{IntoResponse, Response};
use futures_util::stream::{self, Stream};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::index::Registry;

/// Label attached to write failures from this endpoint.
pub const WRITE_BLOCK: &str = "WriteError for discovery page";

const PIPE_CAPACITY: usize = 16 * 1024;
const CHUNK_SIZE: usize = 8 * 1024;

/// Serves the registry's page.
#[derive(Debug, Clone)]
pub struct DiscoveryHandler {
    registry: Registry,
}

impl DiscoveryHandler {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Write the current page to `writer`. Failures are logged, not returned.
    pub async fn write_page<W>(&self, writer: &mut W)
    where
        W: AsyncWrite + Unpin,
    {
        let page = self.registry.render();
        let mut result = writer.write_all(page.as_bytes()).await;
        if result.is_ok() {
            result = writer.flush().await;
        }

        if let Err(err) = result {
            report_write_error(WRITE_BLOCK, &err);
        }
    }
}

impl IntoResponse for DiscoveryHandler {
    /// Must be called from within a Tokio runtime.
    fn into_response(self) -> Response {
        let (mut writer, reader) = tokio::io::duplex(PIPE_CAPACITY);
        tokio::spawn(async move {
            self.write_page(&mut writer).await;
        });
        Response::new(Body::from_stream(read_chunks(reader)))
    }
}

/// Log a failed response write. The caller still reports success.
pub fn report_write_error(block: &str, err: &io::Error) {
    tracing::error!(
        block = %block,
        error = %err,
        kind = ?err.kind(),
        "Error in block {block}: {err}; end error report"
    );
}

fn read_chunks<R>(reader: R) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream::unfold(Some(reader), |reader| async move {
        let Some(mut reader) = reader else {
            return None;
        };
        let mut buf = vec![0u8; CHUNK_SIZE];
        match reader.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((Ok(Bytes::from(buf)), Some(reader)))
            }
            // End the stream after the first error.
            Err(err) => Some((Err(err), None)),
        }
    })
}
