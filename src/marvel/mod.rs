pub mod auth;
pub mod client;

pub use self::auth::Credentials;
pub use self::client::{ApiError, Client};

/// A story ready for rendering, with the list fields already flattened
/// into display strings.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// "Name (role), Name (role)" over the story's creators.
    pub authors: String,
    /// Comma-joined series names.
    pub series: String,
    /// Comma-joined event names.
    pub events: String,
    /// Copyright attribution markup from the API envelope. Trusted HTML.
    pub attribution_html: String,
}

/// A character appearing in a story.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub description: String,
    /// Full image URL, or empty when the API has no thumbnail.
    pub thumbnail_url: String,
}
