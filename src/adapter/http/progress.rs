//! Progress-reporting request body
//!
//! ボディをチャンクに分けてストリーム送信し、送信済みバイト数を通知する

use futures_util::stream::{self, StreamExt};
use reqwest::Body;
use std::io;

use crate::domain::entities::upload_progress::UploadProgress;
use crate::domain::repositories::prediction_gateway::ProgressSender;

/// Split content into owned chunks of at most `chunk_size` bytes
pub fn split_chunks(content: &[u8], chunk_size: usize) -> Vec<Vec<u8>> {
    content
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Build a streaming body that reports progress as hyper pulls each chunk
///
/// `total` is the file part only. Multipart boundaries and part headers are not
/// counted, so the percentage runs slightly ahead of the bytes on the wire.
///
/// The receiver may already be gone (the caller stopped listening); sends are then ignored.
pub fn progress_body(content: &[u8], chunk_size: usize, progress: ProgressSender) -> Body {
    let total = content.len() as u64;
    let mut sent = 0u64;

    let chunks = stream::iter(split_chunks(content, chunk_size)).map(move |chunk| {
        sent += chunk.len() as u64;
        let _ = progress.send(UploadProgress::new(sent, Some(total)));
        Ok::<Vec<u8>, io::Error>(chunk)
    });

    Body::wrap_stream(chunks)
}
