//! Result assembly and virtual-root synthesis.
//!
//! Searches always return an owned, ordered collection — never a null-ish
//! value. When a caller's viewable top-level albums cannot be presented as a
//! single real album, a virtual root album is synthesized to contain them.
//! Virtual albums live only in the result; nothing here (or anywhere in this
//! core) writes them to the store or a cache.

use chrono::Utc;

use galleria_core::{defaults, Album, GalleryObject, VirtualAlbumType};

/// Wrap an optional album in a result collection: empty for `None`.
pub fn wrap_album(album: Option<Album>) -> Vec<GalleryObject> {
    match album {
        Some(album) => vec![GalleryObject::Album(album)],
        None => Vec::new(),
    }
}

/// Synthesize a virtual root album containing `children`.
///
/// The children are real albums, stored in the order produced by top-level
/// reduction. The synthesized album carries the fixed virtual-album title,
/// an empty caption, and the id sentinel for never-persisted albums.
pub fn virtual_root_album(gallery_id: i32, children: Vec<Album>) -> Album {
    Album {
        id: defaults::VIRTUAL_ALBUM_ID,
        gallery_id,
        parent_id: None,
        is_private: false,
        is_virtual: true,
        virtual_album_type: VirtualAlbumType::Root,
        owner_user_name: String::new(),
        title: defaults::VIRTUAL_ALBUM_TITLE.to_string(),
        caption: String::new(),
        child_album_ids: children.iter().map(|a| a.id).collect(),
        children,
        metadata: Vec::new(),
        date_added: Utc::now(),
    }
}

/// Package the caller's viewable top-level albums into zero or one album.
///
/// One viewable root is returned as-is (a real album); several are wrapped
/// in a synthesized virtual root; none yields `None`.
pub fn assemble_root_for_user(gallery_id: i32, mut viewable_roots: Vec<Album>) -> Option<Album> {
    match viewable_roots.len() {
        0 => None,
        1 => viewable_roots.pop(),
        _ => Some(virtual_root_album(gallery_id, viewable_roots)),
    }
}
