//! Artwork data model
//!
//! Records of the append-only on-chain registry. Every field except `likes`
//! is immutable once registered; `likes` only ever grows and is observed
//! through full resyncs rather than patched in place.

use serde::{Deserialize, Serialize};

/// Image file extensions a presentation layer will attempt to render inline
const IMAGE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// A single registered artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Sequential id assigned by the contract at registration time
    pub id: u64,
    pub title: String,
    pub artist: String,
    /// Either an ordinary `http(s)` URL or an `ipfs://` reference
    pub nft_url: String,
    /// Like counter, monotonically non-decreasing
    pub likes: u64,
}

impl Artwork {
    /// Whether a presentation layer should attempt inline image rendering
    pub fn is_image(&self) -> bool {
        if self.nft_url.starts_with("ipfs://") {
            return true;
        }
        match self.nft_url.rsplit_once('.') {
            Some((_, ext)) => IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)),
            None => false,
        }
    }
}

/// Rewrite an `ipfs://` reference to a gateway URL; pass anything else through
///
/// The gateway comes from configuration; see
/// [`RegistryConfig::artwork_url`](crate::config::RegistryConfig::artwork_url)
/// for the usual entry point.
pub fn resolve_url(url: &str, gateway: &str) -> String {
    match url.strip_prefix("ipfs://") {
        Some(cid) => format!("{gateway}{cid}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork_with_url(url: &str) -> Artwork {
        Artwork {
            id: 0,
            title: "Sunrise".to_string(),
            artist: "Zahra".to_string(),
            nft_url: url.to_string(),
            likes: 0,
        }
    }

    #[test]
    fn test_ipfs_url_resolves_to_gateway() {
        assert_eq!(
            resolve_url(
                "ipfs://QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
                crate::config::IPFS_GATEWAY
            ),
            "https://ipfs.io/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
        );
    }

    #[test]
    fn test_http_url_passes_through() {
        assert_eq!(
            resolve_url("https://example.com/piece.png", crate::config::IPFS_GATEWAY),
            "https://example.com/piece.png"
        );
    }

    #[test]
    fn test_custom_gateway() {
        assert_eq!(
            resolve_url("ipfs://Qm123", "https://cloudflare-ipfs.com/ipfs/"),
            "https://cloudflare-ipfs.com/ipfs/Qm123"
        );
    }

    #[test]
    fn test_image_detection_by_extension() {
        assert!(artwork_with_url("https://example.com/a.png").is_image());
        assert!(artwork_with_url("https://example.com/a.JPG").is_image());
        assert!(!artwork_with_url("https://example.com/a.html").is_image());
        assert!(!artwork_with_url("https://example.com/metadata").is_image());
    }

    #[test]
    fn test_ipfs_always_attempts_image() {
        assert!(artwork_with_url("ipfs://Qm123").is_image());
    }
}
