use crate::types::{
    PlaylistResponse, PlaylistTrack, ProjectedPlaylist, ProjectedTrack, TrackArtist,
};

/// Markets the proxy will forward upstream. Anything else falls back to the
/// configured default.
pub const SUPPORTED_MARKETS: [&str; 8] = ["FR", "US", "CA", "BR", "GB", "DE", "ES", "IT"];

/// Resolves the effective market for a request.
///
/// The caller-supplied value is upper-cased and used iff it belongs to
/// [`SUPPORTED_MARKETS`]; otherwise the configured default applies. An
/// unsupported market never rejects the request.
pub fn resolve_market(requested: Option<&str>, default: &str) -> String {
    match requested {
        Some(market) => {
            let market = market.to_uppercase();
            if SUPPORTED_MARKETS.contains(&market.as_str()) {
                market
            } else {
                default.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Projects the upstream playlist document into the reduced client shape.
///
/// Total over any input: a missing owner, image list, track list, track
/// object, artist list or nested field degrades to an absent value or an
/// empty sequence. Track order is preserved and positions are 1-based.
pub fn project_playlist(playlist: PlaylistResponse) -> ProjectedPlaylist {
    let items = playlist
        .tracks
        .and_then(|tracks| tracks.items)
        .unwrap_or_default();

    let tracks = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| project_track(i as u32 + 1, item.track))
        .collect();

    ProjectedPlaylist {
        id: playlist.id,
        name: playlist.name,
        description: playlist.description,
        owner: playlist.owner.and_then(|owner| owner.display_name),
        image: playlist
            .images
            .and_then(|images| images.into_iter().next())
            .and_then(|image| image.url),
        tracks,
    }
}

fn project_track(index: u32, track: Option<PlaylistTrack>) -> ProjectedTrack {
    let Some(track) = track else {
        return ProjectedTrack {
            index,
            name: None,
            artist: None,
            duration_ms: None,
            preview_url: None,
            external_url: None,
            id: None,
        };
    };

    ProjectedTrack {
        index,
        name: track.name,
        artist: track.artists.map(join_artist_names),
        duration_ms: track.duration_ms,
        preview_url: track.preview_url,
        external_url: track.external_urls.and_then(|urls| urls.spotify),
        id: track.id,
    }
}

fn join_artist_names(artists: Vec<TrackArtist>) -> String {
    artists
        .into_iter()
        .filter_map(|artist| artist.name)
        .collect::<Vec<_>>()
        .join(", ")
}
