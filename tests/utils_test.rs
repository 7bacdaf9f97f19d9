use playlist_proxy::types::{PlaylistResponse, ProjectedPlaylist};
use playlist_proxy::utils::{SUPPORTED_MARKETS, project_playlist, resolve_market};
use serde_json::{Value, json};

// Helper to build an upstream playlist document from literal JSON
fn upstream(value: Value) -> PlaylistResponse {
    serde_json::from_value(value).expect("upstream document should deserialize")
}

fn project(value: Value) -> ProjectedPlaylist {
    project_playlist(upstream(value))
}

#[test]
fn test_resolve_market_uppercases_supported_values() {
    assert_eq!(resolve_market(Some("us"), "FR"), "US");
    assert_eq!(resolve_market(Some("US"), "FR"), "US");
    assert_eq!(resolve_market(Some("de"), "FR"), "DE");
}

#[test]
fn test_resolve_market_falls_back_to_default() {
    // Unsupported values fall back silently
    assert_eq!(resolve_market(Some("xx"), "FR"), "FR");
    assert_eq!(resolve_market(Some(""), "FR"), "FR");

    // Absent value uses the default
    assert_eq!(resolve_market(None, "FR"), "FR");
    assert_eq!(resolve_market(None, "US"), "US");
}

#[test]
fn test_resolve_market_result_is_always_supported() {
    for requested in ["fr", "us", "ca", "br", "gb", "de", "es", "it", "zz", "usa"] {
        let effective = resolve_market(Some(requested), "FR");
        assert!(SUPPORTED_MARKETS.contains(&effective.as_str()));
    }
}

#[test]
fn test_projection_of_complete_document() {
    let projected = project(json!({
        "id": "p1",
        "name": "Mix",
        "owner": { "display_name": "Alice" },
        "images": [{ "url": "http://img/x.jpg" }],
        "tracks": { "items": [{ "track": {
            "name": "Song",
            "artists": [{ "name": "A" }],
            "duration_ms": 1000,
            "id": "t1"
        }}]}
    }));

    assert_eq!(projected.id.as_deref(), Some("p1"));
    assert_eq!(projected.name.as_deref(), Some("Mix"));
    assert_eq!(projected.description, None);
    assert_eq!(projected.owner.as_deref(), Some("Alice"));
    assert_eq!(projected.image.as_deref(), Some("http://img/x.jpg"));

    assert_eq!(projected.tracks.len(), 1);
    let track = &projected.tracks[0];
    assert_eq!(track.index, 1);
    assert_eq!(track.name.as_deref(), Some("Song"));
    assert_eq!(track.artist.as_deref(), Some("A"));
    assert_eq!(track.duration_ms, Some(1000));
    assert_eq!(track.id.as_deref(), Some("t1"));
    assert_eq!(track.preview_url, None);
    assert_eq!(track.external_url, None);
}

#[test]
fn test_projection_preserves_track_order_and_positions() {
    let projected = project(json!({
        "tracks": { "items": [
            { "track": { "name": "First" } },
            { "track": { "name": "Second" } },
            { "track": { "name": "Third" } }
        ]}
    }));

    let names: Vec<_> = projected
        .tracks
        .iter()
        .map(|t| (t.index, t.name.as_deref().unwrap()))
        .collect();
    assert_eq!(names, vec![(1, "First"), (2, "Second"), (3, "Third")]);
}

#[test]
fn test_projection_of_null_track_item() {
    // A null track object still produces an entry; only the position is set
    let projected = project(json!({
        "tracks": { "items": [{ "track": null }] }
    }));

    assert_eq!(projected.tracks.len(), 1);
    let track = &projected.tracks[0];
    assert_eq!(track.index, 1);
    assert_eq!(track.name, None);
    assert_eq!(track.artist, None);
    assert_eq!(track.duration_ms, None);
    assert_eq!(track.preview_url, None);
    assert_eq!(track.external_url, None);
    assert_eq!(track.id, None);
}

#[test]
fn test_projection_of_empty_document() {
    let projected = project(json!({}));

    assert_eq!(projected.id, None);
    assert_eq!(projected.name, None);
    assert_eq!(projected.owner, None);
    assert_eq!(projected.image, None);
    assert!(projected.tracks.is_empty());
}

#[test]
fn test_projection_of_partial_nested_fields() {
    let projected = project(json!({
        "id": "p2",
        "owner": {},
        "images": [],
        "tracks": { "items": [{ "track": {
            "name": "Loose",
            "artists": [],
            "external_urls": {}
        }}]}
    }));

    assert_eq!(projected.owner, None);
    assert_eq!(projected.image, None);

    let track = &projected.tracks[0];
    assert_eq!(track.artist.as_deref(), Some(""));
    assert_eq!(track.external_url, None);
}

#[test]
fn test_projection_joins_artist_names() {
    let projected = project(json!({
        "tracks": { "items": [{ "track": {
            "artists": [{ "name": "A" }, { "name": "B" }, { "name": "C" }]
        }}]}
    }));

    assert_eq!(projected.tracks[0].artist.as_deref(), Some("A, B, C"));
}

#[test]
fn test_projection_takes_first_image() {
    let projected = project(json!({
        "images": [{ "url": "http://img/large.jpg" }, { "url": "http://img/small.jpg" }]
    }));

    assert_eq!(projected.image.as_deref(), Some("http://img/large.jpg"));
}

#[test]
fn test_projected_serialization_shape() {
    let projected = project(json!({
        "id": "p1",
        "name": "Mix",
        "tracks": { "items": [{ "track": null }] }
    }));

    let value = serde_json::to_value(&projected).unwrap();

    // Absent scalars are omitted entirely
    assert!(value.get("description").is_none());
    assert!(value.get("owner").is_none());
    assert!(value.get("image").is_none());

    // The preview and external link fields are explicit nulls
    let track = &value["tracks"][0];
    assert_eq!(track["index"], 1);
    assert!(track["preview_url"].is_null());
    assert!(track["external_url"].is_null());
    assert!(track.get("name").is_none());
    assert!(track.get("id").is_none());
}
