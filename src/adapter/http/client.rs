//! HTTP Prediction Gateway
//!
//! reqwestによる予測サービスとの通信

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::time::Duration;

use super::progress::progress_body;
use crate::adapter::config::Config;
use crate::domain::entities::csv_upload::CsvUpload;
use crate::domain::entities::download_artifact::CSV_MIME_TYPE;
use crate::domain::errors::TransportError;
use crate::domain::repositories::prediction_gateway::{
    HttpReply, PredictionGateway, ProgressSender,
};

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = error_chain_to_string(&e);
        if e.is_timeout() {
            TransportError::Timeout(message)
        } else if e.is_connect() {
            TransportError::Connect(message)
        } else {
            TransportError::Request(message)
        }
    }
}

/// Join an error and all of its sources into one line
fn error_chain_to_string(e: &(dyn std::error::Error + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}

/// reqwestベースの予測ゲートウェイ
pub struct HttpPredictionGateway {
    client: Client,
    predict_url: Url,
    health_url: Url,
    chunk_size: usize,
}

impl HttpPredictionGateway {
    pub fn new(
        predict_url: Url,
        health_url: Url,
        request_timeout: Duration,
        chunk_size: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            predict_url,
            health_url,
            chunk_size,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.predict_url()?,
            config.health_url()?,
            config.request_timeout(),
            config.upload_chunk_size,
        )
    }

    pub fn predict_url(&self) -> &Url {
        &self.predict_url
    }

    async fn into_reply(response: reqwest::Response) -> Result<HttpReply, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("HTTP {} ({} bytes)", status, body.len());
        Ok(HttpReply::new(status, body))
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn upload(
        &self,
        upload: &CsvUpload,
        progress: ProgressSender,
    ) -> Result<HttpReply, TransportError> {
        let body = progress_body(upload.content(), self.chunk_size, progress);
        let part = Part::stream_with_length(body, upload.len() as u64)
            .file_name(upload.file_name().to_string())
            .mime_str(CSV_MIME_TYPE)?;
        let form = Form::new().part(FILE_FIELD, part);

        info!("POST {}", self.predict_url);
        let response = self
            .client
            .post(self.predict_url.clone())
            .multipart(form)
            .send()
            .await?;

        Self::into_reply(response).await
    }

    async fn health(&self) -> Result<HttpReply, TransportError> {
        info!("GET {}", self.health_url);
        let response = self.client.get(self.health_url.clone()).send().await?;
        Self::into_reply(response).await
    }
}
