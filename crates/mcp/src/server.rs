//! Server loop - line-delimited JSON-RPC over a byte stream.
//!
//! Reads one line, dispatches, writes one line, repeats until the input
//! stream is exhausted. A line that fails to decode carries no usable
//! request id, so it is logged to the diagnostic stream and skipped; the
//! loop never dies on bad input.

use crate::dispatcher::Dispatcher;
use crate::protocol;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::error;

/// Drive the request/response loop until EOF on `reader`.
///
/// One request is in flight at a time: each dispatch completes and its
/// response is flushed before the next line is read.
pub async fn run<R, W>(reader: R, mut writer: W, dispatcher: &Dispatcher) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let request = match protocol::decode(&line) {
            Ok(request) => request,
            Err(e) => {
                error!("Failed to parse request: {}", e);
                continue;
            }
        };

        let response = dispatcher.dispatch(request).await;
        writer.write_all(protocol::encode(&response).as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
