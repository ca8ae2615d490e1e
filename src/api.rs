use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logic::query::{encode as encode_query, params as query_params};

/// One editable entity managed by the table.
///
/// The id is server-assigned and immutable; only name and email change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// One page of records plus pagination metadata, as returned by the
/// listing endpoint. Transient, rebuilt on every fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Record>,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub per_page: u64,
    pub total: u64,
}

/// Outcome envelope for add/update/delete/import.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Newly assigned id (add only).
    #[serde(default)]
    pub id: Option<i64>,
}

impl MutationAck {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Server message, or a fallback when the server sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Outcome envelope for batch delete, which uses a boolean flag
/// instead of a status string.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Fully resolved parameters for one listing (or export) request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter_id: String,
    pub filter_name: String,
    pub filter_email: String,
    pub sort_by: &'static str,
    pub order: &'static str,
    pub page: u64,
    pub per_page: u64,
}

#[derive(Clone)]
pub struct RecordsClient {
    base_url: String,
    client: Client,
}

impl RecordsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_page(&self, query: &ListQuery) -> Result<PageEnvelope> {
        let url = format!("{}/get_data", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&query_params(query))
            .send()
            .await
            .context("Failed to fetch records")?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Listing request failed: {} - {}", status, text);
        }

        response
            .json()
            .await
            .context("Failed to parse listing envelope")
    }

    pub async fn add_record(&self, name: &str, email: &str) -> Result<MutationAck> {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
        });
        self.post_for_ack("/add_data", &payload).await
    }

    pub async fn update_record(&self, record: &Record) -> Result<MutationAck> {
        let payload = serde_json::json!({
            "id": record.id,
            "name": record.name,
            "email": record.email,
        });
        self.post_for_ack("/update_data", &payload).await
    }

    pub async fn delete_record(&self, id: i64) -> Result<MutationAck> {
        let payload = serde_json::json!({ "id": id });
        self.post_for_ack("/delete_data", &payload).await
    }

    /// The wire contract takes the ids as strings (the original client
    /// posted raw checkbox values), so they are stringified here.
    pub async fn batch_delete(&self, ids: &[i64]) -> Result<BatchAck> {
        let payload = serde_json::json!({
            "ids": ids.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        });

        let url = format!("{}/batch_delete", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to post batch delete")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read batch delete response")?;

        // Business failures arrive as non-2xx with a JSON body; try the
        // body before giving up on the response.
        match serde_json::from_str::<BatchAck>(&text) {
            Ok(ack) => Ok(ack),
            Err(_) => anyhow::bail!("Batch delete failed: {} - {}", status, text),
        }
    }

    pub async fn import_csv(&self, path: &Path) -> Result<MutationAck> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import.csv".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .context("Failed to build multipart body")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/import_data", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to upload CSV")?;

        Self::ack_from_response(response, "/import_data").await
    }

    /// Export is a browser navigation, not a fetch: this only builds the
    /// download URL from the current listing parameters.
    pub fn export_url(&self, query: &ListQuery) -> String {
        format!("{}/export_data?{}", self.base_url, encode_query(query))
    }

    async fn post_for_ack(
        &self,
        path: &str,
        payload: &serde_json::Value,
    ) -> Result<MutationAck> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to post {}", path))?;

        Self::ack_from_response(response, path).await
    }

    async fn ack_from_response(
        response: reqwest::Response,
        path: &str,
    ) -> Result<MutationAck> {
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response", path))?;

        // The backend reports business failures (missing field, unknown id)
        // as non-2xx with the same JSON envelope, so parse the body first.
        match serde_json::from_str::<MutationAck>(&text) {
            Ok(ack) => Ok(ack),
            Err(_) => anyhow::bail!("{} failed: {} - {}", path, status, text),
        }
    }
}
