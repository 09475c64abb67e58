//! Display URL resolution for media references.
//!
//! Two resolver variants share one contract. The server variant addresses
//! media under the application's own `/storage/` prefix, where the origin
//! proxies stored files itself. The client variant addresses the public
//! media origin (CDN / object-store worker), because browser code cannot
//! reach server-local path conventions. The variant is chosen by the call
//! site through dependency injection, never by an ambient runtime check;
//! collapsing the two would either leak internal paths to the browser or
//! break server-side rendering that has no public route to its own assets.

use fleura_core::config::media::MediaConfig;
use fleura_entity::media::MediaItem;

/// Resolution contract shared by both variants.
///
/// Total over its input: any reference, including `None` and an empty
/// [`MediaItem`], yields a non-empty display URL. A missing reference is a
/// normal case, not an error.
pub trait MediaResolver: Send + Sync + 'static {
    /// Produce a display URL for a media reference.
    ///
    /// Precedence: a present `file_url` is returned verbatim; otherwise a
    /// present `file_path` is resolved against the variant's origin;
    /// otherwise the placeholder is returned.
    fn resolve(&self, media: Option<&MediaItem>) -> String;
}

/// Resolver for request-handling code on the server.
#[derive(Debug, Clone)]
pub struct ServerMediaResolver {
    storage_prefix: String,
    placeholder: String,
}

impl ServerMediaResolver {
    /// Build a server resolver from media configuration.
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            storage_prefix: config.storage_prefix.trim_end_matches('/').to_string(),
            placeholder: config.placeholder.clone(),
        }
    }
}

impl MediaResolver for ServerMediaResolver {
    fn resolve(&self, media: Option<&MediaItem>) -> String {
        match split_reference(media) {
            Reference::Url(url) => url.to_string(),
            Reference::Path(path) => format!("{}/{}", self.storage_prefix, path),
            Reference::Absent => self.placeholder.clone(),
        }
    }
}

/// Resolver for URLs handed to browser code.
#[derive(Debug, Clone)]
pub struct ClientMediaResolver {
    public_origin: String,
    placeholder: String,
}

impl ClientMediaResolver {
    /// Build a client resolver from media configuration.
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            public_origin: config.public_origin.trim_end_matches('/').to_string(),
            placeholder: config.placeholder.clone(),
        }
    }
}

impl MediaResolver for ClientMediaResolver {
    fn resolve(&self, media: Option<&MediaItem>) -> String {
        match split_reference(media) {
            Reference::Url(url) => url.to_string(),
            Reference::Path(path) => format!("{}/{}", self.public_origin, path),
            Reference::Absent => self.placeholder.clone(),
        }
    }
}

/// The usable part of a media reference after applying field precedence.
enum Reference<'a> {
    Url(&'a str),
    Path(&'a str),
    Absent,
}

fn split_reference(media: Option<&MediaItem>) -> Reference<'_> {
    let Some(item) = media else {
        return Reference::Absent;
    };
    if let Some(url) = item.file_url.as_deref()
        && !url.is_empty()
    {
        return Reference::Url(url);
    }
    if let Some(path) = item.file_path.as_deref()
        && !path.is_empty()
    {
        return Reference::Path(path.trim_start_matches('/'));
    }
    Reference::Absent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MediaConfig {
        MediaConfig {
            public_origin: "https://media.example.com".to_string(),
            storage_prefix: "/storage".to_string(),
            placeholder: "/images/placeholder.jpg".to_string(),
        }
    }

    #[test]
    fn test_none_resolves_to_placeholder_in_both_variants() {
        let server = ServerMediaResolver::new(&config());
        let client = ClientMediaResolver::new(&config());
        assert_eq!(server.resolve(None), "/images/placeholder.jpg");
        assert_eq!(client.resolve(None), "/images/placeholder.jpg");
    }

    #[test]
    fn test_empty_item_resolves_to_placeholder() {
        let server = ServerMediaResolver::new(&config());
        let item = MediaItem::default();
        assert_eq!(server.resolve(Some(&item)), "/images/placeholder.jpg");
    }

    #[test]
    fn test_file_url_wins_verbatim_over_file_path() {
        let server = ServerMediaResolver::new(&config());
        let client = ClientMediaResolver::new(&config());
        let item = MediaItem {
            file_url: Some("https://x".to_string()),
            file_path: Some("a/b.jpg".to_string()),
        };
        assert_eq!(server.resolve(Some(&item)), "https://x");
        assert_eq!(client.resolve(Some(&item)), "https://x");
    }

    #[test]
    fn test_server_path_resolution_uses_storage_prefix() {
        let server = ServerMediaResolver::new(&config());
        let item = MediaItem::from_path("a/b.jpg");
        assert_eq!(server.resolve(Some(&item)), "/storage/a/b.jpg");
    }

    #[test]
    fn test_client_path_resolution_uses_public_origin() {
        let client = ClientMediaResolver::new(&config());
        let item = MediaItem::from_path("a/b.jpg");
        assert_eq!(
            client.resolve(Some(&item)),
            "https://media.example.com/a/b.jpg"
        );
    }

    #[test]
    fn test_variants_diverge_on_the_same_path() {
        let server = ServerMediaResolver::new(&config());
        let client = ClientMediaResolver::new(&config());
        let item = MediaItem::from_path("a/b.jpg");
        assert_ne!(server.resolve(Some(&item)), client.resolve(Some(&item)));
    }

    #[test]
    fn test_leading_slash_and_trailing_origin_slash_normalize() {
        let mut cfg = config();
        cfg.public_origin = "https://media.example.com/".to_string();
        let client = ClientMediaResolver::new(&cfg);
        let item = MediaItem::from_path("/a/b.jpg");
        assert_eq!(
            client.resolve(Some(&item)),
            "https://media.example.com/a/b.jpg"
        );
    }

    #[test]
    fn test_resolution_is_always_non_empty() {
        let server = ServerMediaResolver::new(&config());
        let client = ClientMediaResolver::new(&config());
        let cases = [
            None,
            Some(MediaItem::default()),
            Some(MediaItem::from_url("https://x")),
            Some(MediaItem::from_path("a/b.jpg")),
        ];
        for case in &cases {
            assert!(!server.resolve(case.as_ref()).is_empty());
            assert!(!client.resolve(case.as_ref()).is_empty());
        }
    }
}
