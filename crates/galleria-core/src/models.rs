//! Core data models for galleria.
//!
//! Albums form a tree per gallery (one root, parent pointers by id); media
//! items are leaves owned by exactly one album. Both carry metadata items.
//! The search core only ever reads these values; the owning store is the
//! single writer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataItem;

// =============================================================================
// ALBUM TYPES
// =============================================================================

/// Kind of a synthesized (virtual) album.
///
/// Virtual albums are created fresh per search call to present computed
/// result sets as a single container. They are never written back to the
/// store and never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtualAlbumType {
    /// A real, persisted album.
    #[default]
    NotVirtual,
    /// Container for multiple viewable top-level albums.
    Root,
    /// Container for title/caption search results.
    TitleOrCaption,
    /// Container for tag search results.
    Tag,
    /// Container for people search results.
    People,
    /// Container for keyword search results.
    Search,
}

/// A container node in the gallery hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: i32,
    pub gallery_id: i32,
    /// `None` for the gallery root and for virtual albums.
    pub parent_id: Option<i32>,
    pub is_private: bool,
    pub is_virtual: bool,
    #[serde(default)]
    pub virtual_album_type: VirtualAlbumType,
    pub owner_user_name: String,
    pub title: String,
    pub caption: String,
    /// Ordered references to child albums (display sequence).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_album_ids: Vec<i32>,
    /// Materialized child albums. Populated only on synthesized virtual
    /// albums, where the children are a computed list of real albums.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Album>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataItem>,
    pub date_added: DateTime<Utc>,
}

impl Album {
    /// Whether this album is the true root of its gallery.
    pub fn is_root(&self) -> bool {
        !self.is_virtual && self.parent_id.is_none()
    }
}

// =============================================================================
// MEDIA ITEM TYPES
// =============================================================================

/// A leaf gallery object (photo/video/audio/document) owned by one album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i32,
    pub gallery_id: i32,
    /// The owning album.
    pub album_id: i32,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataItem>,
    pub date_added: DateTime<Utc>,
}

// =============================================================================
// GALLERY OBJECT
// =============================================================================

/// Either an album or a media item.
///
/// Searches return both kinds in one ordered sequence; the enum carries the
/// small common capability set the callers need without downcasting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryObject {
    Album(Album),
    MediaItem(MediaItem),
}

impl GalleryObject {
    pub fn id(&self) -> i32 {
        match self {
            Self::Album(a) => a.id,
            Self::MediaItem(m) => m.id,
        }
    }

    pub fn gallery_id(&self) -> i32 {
        match self {
            Self::Album(a) => a.gallery_id,
            Self::MediaItem(m) => m.gallery_id,
        }
    }

    pub fn is_private(&self) -> bool {
        match self {
            Self::Album(a) => a.is_private,
            Self::MediaItem(m) => m.is_private,
        }
    }

    pub fn metadata(&self) -> &[MetadataItem] {
        match self {
            Self::Album(a) => &a.metadata,
            Self::MediaItem(m) => &m.metadata,
        }
    }

    /// The album governing this object's visibility: the album itself, or
    /// the owning album for a media item.
    pub fn governing_album_id(&self) -> i32 {
        match self {
            Self::Album(a) => a.id,
            Self::MediaItem(m) => m.album_id,
        }
    }

    pub fn as_album(&self) -> Option<&Album> {
        match self {
            Self::Album(a) => Some(a),
            Self::MediaItem(_) => None,
        }
    }
}
