//! Spotify Web API track source (client-credentials flow).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode, Url};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{profile_for, LiveTrack, SourceError, TrackSource};
use crate::config::MusicServiceConfig;

/// Refresh the token this long before the service says it expires
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct Credentials {
    client_id: String,
    client_secret: String,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Live source backed by the Spotify recommendations and search endpoints
pub struct SpotifyClient {
    client: Client,
    credentials: Option<Credentials>,
    token_url: String,
    api_base_url: String,
    /// Cached access token, shared by concurrent requests
    token: RwLock<Option<AccessToken>>,
}

impl SpotifyClient {
    /// Create a client from configuration.
    ///
    /// Missing credentials are not an error here: every call then fails with
    /// [`SourceError::MissingCredentials`] and callers fall back to the
    /// catalog.
    pub fn new(config: &MusicServiceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("moodtune/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .map_err(|e| SourceError::Request(format!("Failed to create HTTP client: {e}")))?;

        let credentials = match (&config.client_id, &config.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some(Credentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => {
                warn!("Music service credentials not provided, catalog data will be served");
                None
            }
        };

        Ok(Self {
            client,
            credentials,
            token_url: config.token_url.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Return a valid access token, authenticating if needed
    async fn access_token(&self) -> Result<String, SourceError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SourceError::MissingCredentials)?;

        {
            let token = self.token.read().await;
            if let Some(token) = token.as_ref() {
                if token.expires_at > Instant::now() {
                    return Ok(token.value.clone());
                }
            }
        }

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(|e| SourceError::Authentication(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Authentication(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Authentication(format!("Invalid token response: {e}")))?;

        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let token = AccessToken {
            value: body.access_token,
            expires_at: Instant::now() + lifetime,
        };
        let value = token.value.clone();
        *self.token.write().await = Some(token);

        info!("Authenticated with music service");
        Ok(value)
    }

    /// Authenticated GET returning the decoded JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let token = self.access_token().await?;
        let url = Url::parse_with_params(&format!("{}{}", self.api_base_url, path), query)
            .map_err(|e| SourceError::Request(format!("Invalid URL: {e}")))?;

        debug!(%url, "Querying music service");

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token revoked or expired early: authenticate again next time
            *self.token.write().await = None;
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TrackSource for SpotifyClient {
    fn name(&self) -> &'static str {
        "spotify"
    }

    async fn recommend(&self, mood: &str, limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        let profile = profile_for(mood);
        let query = [
            ("seed_genres", profile.seed_param()),
            ("target_valence", profile.target_valence.to_string()),
            ("target_energy", profile.target_energy.to_string()),
            ("limit", limit.to_string()),
        ];

        let body: RecommendationsResponse = self.get_json("/recommendations", &query).await?;
        Ok(body.tracks.into_iter().map(LiveTrack::from).collect())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<LiveTrack>, SourceError> {
        let params = [
            ("q", query.to_string()),
            ("type", "track".to_string()),
            ("limit", limit.to_string()),
        ];

        let body: SearchResponse = self.get_json("/search", &params).await?;
        Ok(body
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .map(LiveTrack::from)
            .collect())
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
    album: SpotifyAlbum,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    external_urls: ExternalUrls,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    popularity: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpotifyAlbum {
    name: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    images: Vec<SpotifyImage>,
}

#[derive(Debug, Deserialize)]
struct SpotifyImage {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    #[serde(default)]
    spotify: Option<String>,
}

impl From<SpotifyTrack> for LiveTrack {
    fn from(track: SpotifyTrack) -> Self {
        let artist = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let year = track
            .album
            .release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.chars().take(4).collect::<String>());

        LiveTrack {
            title: track.name,
            artist,
            album: track.album.name,
            year,
            preview_url: track.preview_url,
            external_url: track.external_urls.spotify,
            album_art: track.album.images.into_iter().next().map(|i| i.url),
            duration_ms: track.duration_ms,
            popularity: track.popularity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_credentials() -> MusicServiceConfig {
        MusicServiceConfig {
            client_id: None,
            client_secret: None,
            ..MusicServiceConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_without_network() {
        let client = SpotifyClient::new(&config_without_credentials()).unwrap();
        assert!(!client.has_credentials());

        let err = client.recommend("happy", 5).await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredentials));

        let err = client.search("queen", 5).await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredentials));
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let config = MusicServiceConfig {
            client_id: Some(String::new()),
            client_secret: Some("secret".to_string()),
            ..MusicServiceConfig::default()
        };
        assert!(!SpotifyClient::new(&config).unwrap().has_credentials());
    }

    #[test]
    fn test_track_conversion() {
        let json = r#"{
            "name": "Mr. Blue Sky",
            "artists": [{"name": "Electric Light Orchestra"}, {"name": "Jeff Lynne"}],
            "album": {
                "name": "Out of the Blue",
                "release_date": "1977-10-03",
                "images": [{"url": "https://i.scdn.co/large"}, {"url": "https://i.scdn.co/small"}]
            },
            "preview_url": null,
            "external_urls": {"spotify": "https://open.spotify.com/track/abc"},
            "duration_ms": 303000,
            "popularity": 78
        }"#;
        let track: SpotifyTrack = serde_json::from_str(json).unwrap();
        let live = LiveTrack::from(track);

        assert_eq!(live.title, "Mr. Blue Sky");
        assert_eq!(live.artist, "Electric Light Orchestra, Jeff Lynne");
        assert_eq!(live.album, "Out of the Blue");
        assert_eq!(live.year.as_deref(), Some("1977"));
        assert_eq!(live.preview_url, None);
        assert_eq!(
            live.external_url.as_deref(),
            Some("https://open.spotify.com/track/abc")
        );
        assert_eq!(live.album_art.as_deref(), Some("https://i.scdn.co/large"));
        assert_eq!(live.duration_ms, Some(303000));
        assert_eq!(live.popularity, Some(78));
    }

    #[test]
    fn test_track_conversion_sparse() {
        let json = r#"{"name": "Untitled", "album": {"name": "Demo", "release_date": ""}}"#;
        let live = LiveTrack::from(serde_json::from_str::<SpotifyTrack>(json).unwrap());

        assert_eq!(live.artist, "");
        assert_eq!(live.year, None);
        assert_eq!(live.album_art, None);
        assert_eq!(live.external_url, None);
    }

    #[test]
    fn test_search_response_without_tracks() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.tracks.is_none());

        let body: SearchResponse =
            serde_json::from_str(r#"{"tracks": {"items": []}}"#).unwrap();
        assert!(body.tracks.unwrap().items.is_empty());
    }

    #[test]
    fn test_token_response_default_expiry() {
        let body: TokenResponse = serde_json::from_str(r#"{"access_token": "t"}"#).unwrap();
        assert_eq!(body.expires_in, 3600);
    }
}
