//! REST client for collection tables.
//!
//! Speaks the PostgREST dialect used by Supabase projects: filters are
//! query parameters (`id=eq.42`), inserts are plain POSTs, and stored
//! procedures hang off `/rest/v1/rpc/`.

use crate::config::CloudConfig;
use crate::error::{CloudError, CloudResult};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the hosted backend's table interface.
#[derive(Debug, Clone)]
pub struct CloudClient {
    config: CloudConfig,
    client: Client,
}

impl CloudClient {
    /// Creates a new backend client.
    pub fn new(config: CloudConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Returns the connection settings this client was built with.
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.api_base_url, table)
    }

    /// Attaches the project key headers every request needs.
    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn ensure_configured(&self) -> CloudResult<()> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(CloudError::Unconfigured)
        }
    }

    async fn check_status(response: Response, context: &str) -> CloudResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            debug!("{context} failed with status {status}: {message}");
            Err(CloudError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Issues the cheapest possible request that proves the backend is
    /// reachable and the credentials work.
    pub async fn probe(&self) -> CloudResult<()> {
        self.ensure_configured()?;

        let response = self
            .authed(self.client.get(self.table_url("users")))
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("probe failed: {e}")))?;

        Self::check_status(response, "probe").await?;
        Ok(())
    }

    /// Fetches every row of a table, newest-first when an order column
    /// is given.
    pub async fn list(&self, table: &str, order: Option<&str>) -> CloudResult<Vec<Value>> {
        self.ensure_configured()?;

        let mut request = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*")]);

        if let Some(column) = order {
            request = request.query(&[("order", format!("{column}.desc"))]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("list {table} failed: {e}")))?;

        let response = Self::check_status(response, "list").await?;
        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| CloudError::Network(format!("failed to parse {table} rows: {e}")))?;

        Ok(rows)
    }

    /// Inserts rows into a table.
    pub async fn insert_rows(&self, table: &str, rows: &[Value]) -> CloudResult<()> {
        self.ensure_configured()?;
        if rows.is_empty() {
            return Ok(());
        }

        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("insert into {table} failed: {e}")))?;

        Self::check_status(response, "insert").await?;
        debug!("inserted {} row(s) into {table}", rows.len());
        Ok(())
    }

    /// Applies a partial update to the row with the given id.
    pub async fn update_row(&self, table: &str, id: &str, patch: &Value) -> CloudResult<()> {
        self.ensure_configured()?;

        let response = self
            .authed(self.client.patch(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("update {table}/{id} failed: {e}")))?;

        Self::check_status(response, "update").await?;
        Ok(())
    }

    /// Deletes the row with the given id. A 404 counts as success.
    pub async fn delete_row(&self, table: &str, id: &str) -> CloudResult<()> {
        self.ensure_configured()?;

        let response = self
            .authed(self.client.delete(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("delete {table}/{id} failed: {e}")))?;

        if !response.status().is_success() && response.status().as_u16() != 404 {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CloudError::Api { status, message });
        }

        Ok(())
    }

    /// Deletes every row matching a PostgREST filter, e.g.
    /// `("role", "neq.SUPER_ADMIN")`.
    pub async fn delete_rows_where(
        &self,
        table: &str,
        column: &str,
        condition: &str,
    ) -> CloudResult<()> {
        self.ensure_configured()?;

        let response = self
            .authed(self.client.delete(self.table_url(table)))
            .query(&[(column, condition)])
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("bulk delete from {table} failed: {e}")))?;

        Self::check_status(response, "bulk delete").await?;
        Ok(())
    }

    /// Deletes every row of a table.
    ///
    /// PostgREST refuses an unfiltered DELETE, so this matches all rows
    /// with an always-true id filter.
    pub async fn delete_all(&self, table: &str) -> CloudResult<()> {
        self.delete_rows_where(table, "id", "neq.").await
    }

    /// Invokes a stored procedure with no arguments.
    pub async fn rpc(&self, function: &str) -> CloudResult<()> {
        self.ensure_configured()?;

        let url = format!("{}/rest/v1/rpc/{}", self.config.api_base_url, function);
        let response = self
            .authed(self.client.post(url))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("rpc {function} failed: {e}")))?;

        Self::check_status(response, "rpc").await?;
        Ok(())
    }
}
