use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::auth::{Credentials, timestamp};
use super::{Character, Story};

/// Page size for listing endpoints (the API caps `limit` at 100).
const PAGE_LIMIT: u32 = 100;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no character named {0:?} found")]
    CharacterNotFound(String),
    #[error("character {0} has no stories")]
    NoStories(u64),
    #[error("story {0} does not exist")]
    StoryNotFound(u64),
    #[error("Marvel API returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Common envelope wrapping every API response.
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "attributionHTML", default)]
    attribution_html: String,
    data: Page<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Page<T> {
    #[serde(default)]
    total: u32,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    results: Vec<T>,
}

#[derive(Deserialize)]
struct StorySummary {
    id: u64,
}

#[derive(Deserialize)]
struct StoryResource {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    creators: ResourceList,
    #[serde(default)]
    series: ResourceList,
    #[serde(default)]
    events: ResourceList,
}

#[derive(Deserialize)]
struct CharacterResource {
    id: u64,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    path: String,
    extension: String,
}

#[derive(Deserialize, Default)]
struct ResourceList {
    #[serde(default)]
    items: Vec<ResourceSummary>,
}

#[derive(Deserialize)]
struct ResourceSummary {
    name: String,
    #[serde(default)]
    role: Option<String>,
}

impl StoryResource {
    fn into_story(self, attribution_html: String) -> Story {
        Story {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            authors: join_credits(&self.creators),
            series: join_names(&self.series),
            events: join_names(&self.events),
            attribution_html,
        }
    }
}

impl From<CharacterResource> for Character {
    fn from(resource: CharacterResource) -> Self {
        Self {
            name: resource.name,
            description: resource.description,
            thumbnail_url: resource
                .thumbnail
                .map(|t| format!("{}.{}", t.path, t.extension))
                .unwrap_or_default(),
        }
    }
}

fn join_names(list: &ResourceList) -> String {
    let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();
    names.join(", ")
}

fn join_credits(list: &ResourceList) -> String {
    let credits: Vec<String> = list
        .items
        .iter()
        .map(|i| match &i.role {
            Some(role) => format!("{} ({role})", i.name),
            None => i.name.clone(),
        })
        .collect();
    credits.join(", ")
}

/// Offset of the next page, or `None` when the listing is exhausted.
/// An empty page also terminates, so a lying `total` cannot loop forever.
fn next_offset(offset: u32, count: u32, total: u32) -> Option<u32> {
    if count == 0 {
        return None;
    }
    let next = offset + count;
    if next >= total { None } else { Some(next) }
}

fn page_params(offset: u32) -> [(&'static str, String); 2] {
    [
        ("limit", PAGE_LIMIT.to_string()),
        ("offset", offset.to_string()),
    ]
}

/// Marvel API client. Holds the credentials and gateway URL explicitly;
/// one instance per run.
pub struct Client {
    http: reqwest::Client,
    gateway: String,
    credentials: Credentials,
}

impl Client {
    pub fn new(gateway: &str, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway: gateway.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Resolve a character's unique ID from their exact name.
    pub async fn character_id(&self, name: &str) -> Result<u64, ApiError> {
        let envelope: Envelope<CharacterResource> = self
            .get("characters", &[("name", name.to_string())])
            .await?;
        envelope
            .data
            .results
            .into_iter()
            .next()
            .map(|c| c.id)
            .ok_or_else(|| ApiError::CharacterNotFound(name.to_string()))
    }

    /// Collect the IDs of every story the character appears in,
    /// walking the paginated listing until exhausted.
    pub async fn character_story_ids(&self, character_id: u64) -> Result<Vec<u64>, ApiError> {
        let path = format!("characters/{character_id}/stories");
        let mut ids: Vec<u64> = Vec::new();
        let mut offset = 0u32;
        loop {
            let envelope: Envelope<StorySummary> = self.get(&path, &page_params(offset)).await?;
            let page = envelope.data;
            if page.total < 1 {
                return Err(ApiError::NoStories(character_id));
            }
            ids.extend(page.results.iter().map(|s| s.id));
            debug!(offset, count = page.count, total = page.total, "fetched story page");
            match next_offset(offset, page.count, page.total) {
                Some(next) => offset = next,
                None => break,
            }
        }
        Ok(ids)
    }

    /// Fetch one story with its attribution markup.
    pub async fn story(&self, story_id: u64) -> Result<Story, ApiError> {
        let envelope: Envelope<StoryResource> =
            match self.get(&format!("stories/{story_id}"), &[]).await {
                Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                    return Err(ApiError::StoryNotFound(story_id));
                }
                other => other?,
            };
        let attribution_html = envelope.attribution_html;
        envelope
            .data
            .results
            .into_iter()
            .next()
            .map(|resource| resource.into_story(attribution_html))
            .ok_or(ApiError::StoryNotFound(story_id))
    }

    /// List the characters appearing in a story. An empty list is valid.
    pub async fn story_characters(&self, story_id: u64) -> Result<Vec<Character>, ApiError> {
        let path = format!("stories/{story_id}/characters");
        let mut characters: Vec<Character> = Vec::new();
        let mut offset = 0u32;
        loop {
            let envelope: Envelope<CharacterResource> =
                self.get(&path, &page_params(offset)).await?;
            let page = envelope.data;
            characters.extend(page.results.into_iter().map(Character::from));
            debug!(offset, count = page.count, total = page.total, "fetched character page");
            match next_offset(offset, page.count, page.total) {
                Some(next) => offset = next,
                None => break,
            }
        }
        Ok(characters)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        let url = format!("{}/{path}", self.gateway);
        let ts = timestamp();
        let response = self
            .http
            .get(&url)
            .query(&self.credentials.auth_params(&ts))
            .query(extra)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}
