//! Core traits for galleria's external collaborators.
//!
//! The object store, tag-association index, and role store are owned by the
//! surrounding application. These traits define the read-only interface the
//! search core consumes, enabling pluggable backends and synthetic trees in
//! tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::metadata::MetaName;
use crate::models::{Album, MediaItem};
use crate::roles::GalleryRoleSet;

// =============================================================================
// GALLERY OBJECT STORE
// =============================================================================

/// Read access to albums and media items.
///
/// Implementations are expected to provide a consistent snapshot (or at
/// least read-committed semantics) for the duration of one search call.
/// Single-object loads return `Ok(None)` for missing ids; the caller decides
/// whether "missing" is a recoverable traversal boundary or a reportable
/// not-found condition.
#[async_trait]
pub trait GalleryObjectStore: Send + Sync {
    /// All albums of a gallery, metadata included.
    async fn albums_in_gallery(&self, gallery_id: i32) -> Result<Vec<Album>>;

    /// All media items of a gallery, metadata included.
    async fn media_items_in_gallery(&self, gallery_id: i32) -> Result<Vec<MediaItem>>;

    /// Load a single album by id.
    async fn load_album(&self, album_id: i32) -> Result<Option<Album>>;

    /// Load a single media item by id.
    async fn load_media_item(&self, media_item_id: i32) -> Result<Option<MediaItem>>;

    /// Load the root album of a gallery. Every gallery has exactly one.
    async fn load_root_album(&self, gallery_id: i32) -> Result<Album>;
}

// =============================================================================
// TAG INDEX
// =============================================================================

/// The tag-association index: (field, tag name) -> owning object ids.
///
/// Lookups are OR-membership over the requested tags, scoped to one gallery,
/// with album ids and media item ids reported separately. The index narrows
/// candidates; exact multi-tag AND semantics are re-verified against the raw
/// metadata value by the search core.
#[async_trait]
pub trait TagIndex: Send + Sync {
    /// Ids of albums whose `field` metadata references ANY of `tags`.
    async fn album_ids_with_any_tag(
        &self,
        field: MetaName,
        tags: &[String],
        gallery_id: i32,
    ) -> Result<Vec<i32>>;

    /// Ids of media items whose `field` metadata references ANY of `tags`.
    async fn media_item_ids_with_any_tag(
        &self,
        field: MetaName,
        tags: &[String],
        gallery_id: i32,
    ) -> Result<Vec<i32>>;
}

// =============================================================================
// ROLE STORE
// =============================================================================

/// Read access to the caller's roles.
///
/// Consumed by callers to populate search options; the searcher itself only
/// reads the role set handed to it.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// The roles held by `user_name`.
    async fn roles_for_user(&self, user_name: &str) -> Result<GalleryRoleSet>;
}
