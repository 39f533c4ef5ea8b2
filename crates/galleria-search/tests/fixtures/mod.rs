//! Test fixtures for the search integration tests.
//!
//! Provides an in-memory implementation of the store collaborators and
//! constructors for synthetic album trees.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use galleria_core::{
    parse_tag_list, Album, Error, GalleryObjectStore, GalleryRole, MediaItem, MetaName,
    MetadataItem, Result, TagIndex, VirtualAlbumType,
};

/// In-memory gallery store backing both `GalleryObjectStore` and `TagIndex`.
///
/// Insertion order is preserved so tests can assert on result ordering; the
/// tag index is derived from the metadata the same way the real association
/// index is maintained.
#[derive(Default)]
pub struct InMemoryGallery {
    albums: HashMap<i32, Album>,
    media_items: HashMap<i32, MediaItem>,
    album_order: Vec<i32>,
    media_order: Vec<i32>,
}

impl InMemoryGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an album, registering it as a child of its parent.
    pub fn add_album(&mut self, album: Album) {
        if let Some(parent_id) = album.parent_id {
            if let Some(parent) = self.albums.get_mut(&parent_id) {
                parent.child_album_ids.push(album.id);
            }
        }
        self.album_order.push(album.id);
        self.albums.insert(album.id, album);
    }

    pub fn add_media_item(&mut self, item: MediaItem) {
        self.media_order.push(item.id);
        self.media_items.insert(item.id, item);
    }

    /// Delete an album outright, simulating concurrent removal between a
    /// candidate fetch and the ancestor walk.
    pub fn remove_album(&mut self, album_id: i32) {
        self.albums.remove(&album_id);
        self.album_order.retain(|&id| id != album_id);
    }

    fn tag_candidates(&self, metadata: &[MetadataItem], field: MetaName, tags: &[String]) -> bool {
        let requested: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        metadata
            .iter()
            .filter(|md| md.name == field)
            .any(|md| parse_tag_list(&md.value).iter().any(|t| requested.contains(t)))
    }
}

#[async_trait]
impl GalleryObjectStore for InMemoryGallery {
    async fn albums_in_gallery(&self, gallery_id: i32) -> Result<Vec<Album>> {
        Ok(self
            .album_order
            .iter()
            .filter_map(|id| self.albums.get(id))
            .filter(|a| a.gallery_id == gallery_id)
            .cloned()
            .collect())
    }

    async fn media_items_in_gallery(&self, gallery_id: i32) -> Result<Vec<MediaItem>> {
        Ok(self
            .media_order
            .iter()
            .filter_map(|id| self.media_items.get(id))
            .filter(|m| m.gallery_id == gallery_id)
            .cloned()
            .collect())
    }

    async fn load_album(&self, album_id: i32) -> Result<Option<Album>> {
        Ok(self.albums.get(&album_id).cloned())
    }

    async fn load_media_item(&self, media_item_id: i32) -> Result<Option<MediaItem>> {
        Ok(self.media_items.get(&media_item_id).cloned())
    }

    async fn load_root_album(&self, gallery_id: i32) -> Result<Album> {
        self.album_order
            .iter()
            .filter_map(|id| self.albums.get(id))
            .find(|a| a.gallery_id == gallery_id && a.parent_id.is_none() && !a.is_virtual)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("root album for gallery {}", gallery_id)))
    }
}

#[async_trait]
impl TagIndex for InMemoryGallery {
    async fn album_ids_with_any_tag(
        &self,
        field: MetaName,
        tags: &[String],
        gallery_id: i32,
    ) -> Result<Vec<i32>> {
        Ok(self
            .album_order
            .iter()
            .filter_map(|id| self.albums.get(id))
            .filter(|a| a.gallery_id == gallery_id)
            .filter(|a| self.tag_candidates(&a.metadata, field, tags))
            .map(|a| a.id)
            .collect())
    }

    async fn media_item_ids_with_any_tag(
        &self,
        field: MetaName,
        tags: &[String],
        gallery_id: i32,
    ) -> Result<Vec<i32>> {
        Ok(self
            .media_order
            .iter()
            .filter_map(|id| self.media_items.get(id))
            .filter(|m| m.gallery_id == gallery_id)
            .filter(|m| self.tag_candidates(&m.metadata, field, tags))
            .map(|m| m.id)
            .collect())
    }
}

// =============================================================================
// OBJECT CONSTRUCTORS
// =============================================================================

pub fn album(id: i32, gallery_id: i32, parent_id: Option<i32>) -> Album {
    Album {
        id,
        gallery_id,
        parent_id,
        is_private: false,
        is_virtual: false,
        virtual_album_type: VirtualAlbumType::NotVirtual,
        owner_user_name: "admin".to_string(),
        title: format!("Album {}", id),
        caption: String::new(),
        child_album_ids: Vec::new(),
        children: Vec::new(),
        metadata: Vec::new(),
        date_added: Utc::now(),
    }
}

pub fn private_album(id: i32, gallery_id: i32, parent_id: Option<i32>) -> Album {
    Album {
        is_private: true,
        ..album(id, gallery_id, parent_id)
    }
}

pub fn media_item(id: i32, gallery_id: i32, album_id: i32) -> MediaItem {
    MediaItem {
        id,
        gallery_id,
        album_id,
        is_private: false,
        metadata: Vec::new(),
        date_added: Utc::now(),
    }
}

pub fn meta(name: MetaName, value: &str) -> MetadataItem {
    MetadataItem::new(name, value)
}

/// An album with metadata attached.
pub fn album_with_meta(
    id: i32,
    gallery_id: i32,
    parent_id: Option<i32>,
    metadata: Vec<MetadataItem>,
) -> Album {
    Album {
        metadata,
        ..album(id, gallery_id, parent_id)
    }
}

/// A media item with metadata attached.
pub fn media_item_with_meta(
    id: i32,
    gallery_id: i32,
    album_id: i32,
    metadata: Vec<MetadataItem>,
) -> MediaItem {
    MediaItem {
        metadata,
        ..media_item(id, gallery_id, album_id)
    }
}

// =============================================================================
// ROLE CONSTRUCTORS
// =============================================================================

/// A role granting view permission rooted at `root_album_ids`.
pub fn viewer_role(name: &str, gallery_id: i32, root_album_ids: &[i32]) -> GalleryRole {
    let mut role = GalleryRole::new(name).with_view().with_gallery(gallery_id);
    for &id in root_album_ids {
        role = role.with_root_album(id);
    }
    role
}

/// A role granting add-child-album and add-media permission (no view).
pub fn contributor_role(name: &str, gallery_id: i32, root_album_ids: &[i32]) -> GalleryRole {
    let mut role = GalleryRole::new(name).with_gallery(gallery_id);
    role.allow_add_child_album = true;
    role.allow_add_media_object = true;
    for &id in root_album_ids {
        role = role.with_root_album(id);
    }
    role
}
