use serde::{Deserialize, Serialize};

/// Application token as returned by the client-credentials exchange.
///
/// `expires_in` is the validity duration in seconds as reported by the
/// token endpoint. Both fields are required; a response missing either is
/// treated as a failed exchange rather than papered over with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
}

// Upstream playlist representation. Every nested field is optional so a
// partial or malformed upstream document degrades to absent fields instead
// of a deserialization error.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<PlaylistOwner>,
    pub images: Option<Vec<PlaylistImage>>,
    pub tracks: Option<PlaylistTracks>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistImage {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub items: Option<Vec<PlaylistItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artists: Option<Vec<TrackArtist>>,
    pub duration_ms: Option<u64>,
    pub preview_url: Option<String>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// Reduced playlist shape served to the browser client.
///
/// Scalar fields are omitted from the JSON output when absent. The track
/// sequence preserves upstream order and always has one entry per upstream
/// item, even when the item's track object is null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedPlaylist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tracks: Vec<ProjectedTrack>,
}

/// One entry of the projected track sequence.
///
/// `index` is 1-based. `preview_url` and `external_url` are serialized as
/// explicit nulls when absent; the frontend distinguishes "no preview" from
/// "field not sent".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedTrack {
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub preview_url: Option<String>,
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
