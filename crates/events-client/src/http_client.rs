//! reqwest-based events API client
//!
//! Direct implementation of the `EventsClient` trait over HTTP/JSON.

use crate::client::EventsClient;
use crate::error::{ClientError, ClientResult};
use crate::filter::EventFilter;
use crate::types::{Event, EventId, NewEvent};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

const EVENTS_PATH: &str = "/api/events";
const SEARCH_PATH: &str = "/api/events/search";

/// Direct events API client using reqwest
#[derive(Debug, Clone)]
pub struct HttpEventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpEventsClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:3000`)
    ///
    /// `timeout` bounds every request; a request that exceeds it fails
    /// with [`ClientError::Request`].
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Request {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn event_url(&self, id: EventId) -> String {
        format!("{}{}/{}", self.base_url, EVENTS_PATH, id)
    }

    async fn send(
        &self,
        method: &'static str,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<(String, reqwest::Response)> {
        let response = request.send().await.map_err(|source| ClientError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                method,
                url,
                status: status.as_u16(),
            });
        }
        Ok((url, response))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let (url, response) = self.send(method, url, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }
}

/// Strip trailing slashes and check the scheme
fn normalize_base_url(base_url: &str) -> ClientResult<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::InvalidUrl(base_url.to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl EventsClient for HttpEventsClient {
    async fn list_events(&self) -> ClientResult<Vec<Event>> {
        let url = self.url(EVENTS_PATH);
        debug!("Fetching events from {}", url);

        let events: Vec<Event> = self
            .send_json("GET", url.clone(), self.http.get(&url))
            .await?;

        debug!("Fetched {} events", events.len());
        Ok(events)
    }

    async fn create_event(&self, event: &NewEvent) -> ClientResult<Event> {
        let url = self.url(EVENTS_PATH);
        debug!("Creating event for band {}", event.band.name);

        let created: Event = self
            .send_json("POST", url.clone(), self.http.post(&url).json(event))
            .await?;

        debug!("Created event {}", created.id);
        Ok(created)
    }

    async fn delete_event(&self, id: EventId) -> ClientResult<()> {
        let url = self.event_url(id);
        debug!("Deleting event {}", id);

        self.send("DELETE", url.clone(), self.http.delete(&url))
            .await?;
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> ClientResult<Event> {
        let url = self.event_url(event.id);
        debug!("Updating event {}", event.id);

        self.send_json("PUT", url.clone(), self.http.put(&url).json(event))
            .await
    }

    async fn search_events(&self, filter: &EventFilter) -> ClientResult<Vec<Event>> {
        let url = self.url(SEARCH_PATH);
        let pairs = filter.query_pairs();
        debug!("Searching events with {:?}", pairs);

        let events: Vec<Event> = self
            .send_json("GET", url.clone(), self.http.get(&url).query(&pairs))
            .await?;

        debug!("Search returned {} events", events.len());
        Ok(events)
    }
}
