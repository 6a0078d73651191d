use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use time::Date;

use crate::{
    domain::{
        NewTimeEntryPayload, Project, SummaryReport, SummaryReportRequest, TimeEntry, Workspace,
    },
    TogglURL,
};

use super::Credentials;

#[derive(Clone)]
pub struct TogglClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: TogglURL,
}

impl TogglClient {
    pub fn new(credentials: Credentials) -> Result<Self, TogglFetchError> {
        Self::with_base_url(credentials, TogglURL::default())
    }

    pub fn with_base_url(
        credentials: Credentials,
        base_url: TogglURL,
    ) -> Result<Self, TogglFetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("toggl-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TogglFetchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(
            self.credentials.api_token(),
            Some(self.credentials.password()),
        )
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, TogglFetchError> {
        let resp = self
            .authorized(request)
            .send()
            .await
            .map_err(TogglFetchError::from_transport)?;

        check_status(resp.status())?;

        let body = resp.text().await.map_err(TogglFetchError::from_transport)?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            TogglFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    pub async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, TogglFetchError> {
        let url = self.base_url.api().append_path("/me/workspaces");
        let workspaces: Option<Vec<Workspace>> = self.send(self.http.get(url.as_ref())).await?;

        Ok(workspaces.unwrap_or_default())
    }

    pub async fn fetch_active_projects(
        &self,
        workspace_id: u64,
    ) -> Result<Vec<Project>, TogglFetchError> {
        let url = self
            .base_url
            .api()
            .append_path(&format!("/workspaces/{}/projects", workspace_id))
            .with_query("active", "true");
        let projects: Option<Vec<Project>> = self.send(self.http.get(url.as_ref())).await?;

        Ok(projects.unwrap_or_default())
    }

    /// The running time entry, or `None` when no timer is running.
    pub async fn fetch_current_entry(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Option<TimeEntry>, TogglFetchError> {
        let url = self.base_url.api().append_path("/me/time_entries/current");
        let request = with_timeout(self.http.get(url.as_ref()), timeout);

        self.send(request).await
    }

    pub async fn fetch_summary_report(
        &self,
        workspace_id: u64,
        date: Date,
        timeout: Option<Duration>,
    ) -> Result<SummaryReport, TogglFetchError> {
        let url = self
            .base_url
            .reports()
            .append_path(&format!("/workspace/{}/summary/time_entries", workspace_id));
        let payload = SummaryReportRequest::projects_for_day(date);
        let request = with_timeout(self.http.post(url.as_ref()).json(&payload), timeout);

        let report: Option<SummaryReport> = self.send(request).await?;
        Ok(report.unwrap_or_default())
    }

    pub async fn create_time_entry(
        &self,
        payload: &NewTimeEntryPayload,
    ) -> Result<TimeEntry, TogglFetchError> {
        let url = self
            .base_url
            .api()
            .append_path(&format!("/workspaces/{}/time_entries", payload.workspace_id));
        tracing::debug!(workspace_id = payload.workspace_id, "creating time entry");

        self.send(self.http.post(url.as_ref()).json(payload)).await
    }

    pub async fn stop_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
    ) -> Result<TimeEntry, TogglFetchError> {
        let url = self.base_url.api().append_path(&format!(
            "/workspaces/{}/time_entries/{}/stop",
            workspace_id, time_entry_id
        ));
        tracing::debug!(workspace_id, time_entry_id, "stopping time entry");

        self.send(self.http.patch(url.as_ref())).await
    }
}

fn with_timeout(request: RequestBuilder, timeout: Option<Duration>) -> RequestBuilder {
    match timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    }
}

fn check_status(status: StatusCode) -> Result<(), TogglFetchError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TogglFetchError::Unauthorized);
    }

    if status == StatusCode::PAYMENT_REQUIRED {
        return Err(TogglFetchError::PaymentRequired);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TogglFetchError::RateLimited);
    }

    if status.is_server_error() {
        return Err(TogglFetchError::ServerError(format!(
            "Toggl API error: {}",
            status
        )));
    }

    if !status.is_success() {
        return Err(TogglFetchError::ResponseError(format!(
            "Toggl API error: {}",
            status
        )));
    }

    Ok(())
}

#[derive(Error, Debug)]
pub enum TogglFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Payment required")]
    PaymentRequired,
    #[error("Rate limited")]
    RateLimited,
    #[error("Timeout")]
    Timeout,
    #[error("ServerError: {0}")]
    ServerError(String),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

impl TogglFetchError {
    fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::ResponseError(e.to_string())
        }
    }
}
