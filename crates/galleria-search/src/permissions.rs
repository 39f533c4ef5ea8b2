//! Permission evaluation against the role-based hierarchical grant model.
//!
//! A role's grant is anchored at a set of root albums and covers each root
//! and all of its descendants. Evaluating an action therefore means walking
//! the target album's ancestor chain and asking whether any granted root is
//! on it. Anonymous callers never consult roles: they see exactly the
//! non-private objects.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use galleria_core::{
    Album, Error, GalleryObject, GalleryObjectStore, GalleryRole, GalleryRoleSet, MediaItem,
    Result,
};

use crate::hierarchy;

/// An action a caller may be authorized to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityAction {
    ViewAlbumOrMediaObject,
    ViewOriginalMediaObject,
    AddChildAlbum,
    AddMediaObject,
    EditAlbum,
    EditMediaObject,
    DeleteChildAlbum,
    DeleteMediaObject,
    Synchronize,
    AdministerGallery,
    AdministerSite,
    HideWatermark,
}

/// Whether `role` grants `action`, ignoring album scoping.
///
/// Site administration implies gallery administration; both administrative
/// flags imply every ordinary action. Watermark hiding is the exception and
/// always requires its explicit flag.
pub fn role_grants(role: &GalleryRole, action: SecurityAction) -> bool {
    let is_admin = role.allow_administer_site || role.allow_administer_gallery;

    match action {
        SecurityAction::AdministerSite => role.allow_administer_site,
        SecurityAction::AdministerGallery => is_admin,
        SecurityAction::HideWatermark => role.allow_hide_watermark,
        SecurityAction::ViewAlbumOrMediaObject => {
            is_admin || role.allow_view_album_or_media_object
        }
        SecurityAction::ViewOriginalMediaObject => {
            is_admin || role.allow_view_original_media_object
        }
        SecurityAction::AddChildAlbum => is_admin || role.allow_add_child_album,
        SecurityAction::AddMediaObject => is_admin || role.allow_add_media_object,
        SecurityAction::EditAlbum => is_admin || role.allow_edit_album,
        SecurityAction::EditMediaObject => is_admin || role.allow_edit_media_object,
        SecurityAction::DeleteChildAlbum => is_admin || role.allow_delete_child_album,
        SecurityAction::DeleteMediaObject => is_admin || role.allow_delete_media_object,
        SecurityAction::Synchronize => is_admin || role.allow_synchronize,
    }
}

/// Decide whether the caller may perform `action` on `album`.
///
/// Anonymous callers are granted view actions on non-private albums and
/// nothing else. Authenticated callers are governed strictly by role grants:
/// a grant applies when the role carries the action flag, the role covers
/// the album's gallery, and the album or one of its ancestors is among the
/// role's root albums. A missing parent during the ancestor walk ends the
/// walk (treated as having reached a root).
pub async fn is_user_authorized(
    store: &dyn GalleryObjectStore,
    action: SecurityAction,
    roles: &GalleryRoleSet,
    album: &Album,
    is_authenticated: bool,
) -> Result<bool> {
    if !is_authenticated {
        let allowed = matches!(
            action,
            SecurityAction::ViewAlbumOrMediaObject | SecurityAction::ViewOriginalMediaObject
        ) && !album.is_private;
        return Ok(allowed);
    }

    // A virtual album is a synthesized container holding only objects the
    // caller was already cleared to see, so viewing it is always permitted.
    if album.is_virtual && action == SecurityAction::ViewAlbumOrMediaObject {
        return Ok(true);
    }

    // Union the granted roots across every role that both carries the
    // action and covers this gallery; the ancestor walk then runs once.
    let mut granted_roots: HashSet<i32> = HashSet::new();
    for role in roles.iter() {
        if role.applies_to_gallery(album.gallery_id) && role_grants(role, action) {
            granted_roots.extend(role.root_album_ids.iter().copied());
        }
    }

    if granted_roots.is_empty() {
        return Ok(false);
    }

    let authorized = hierarchy::album_or_ancestor_in(store, album, &granted_roots).await?;

    trace!(
        album_id = album.id,
        gallery_id = album.gallery_id,
        ?action,
        authorized,
        "evaluated role grant"
    );

    Ok(authorized)
}

/// Decide whether the caller may view `object`.
///
/// Media items are evaluated through their owning album; a media item whose
/// owning album no longer exists is not viewable.
pub async fn can_user_view(
    store: &dyn GalleryObjectStore,
    roles: &GalleryRoleSet,
    object: &GalleryObject,
    is_authenticated: bool,
) -> Result<bool> {
    if !is_authenticated {
        return Ok(!object.is_private());
    }

    match object {
        GalleryObject::Album(album) => can_user_view_album(store, roles, album, is_authenticated).await,
        GalleryObject::MediaItem(item) => {
            let Some(album) = store.load_album(item.album_id).await? else {
                return Ok(false);
            };
            can_user_view_album(store, roles, &album, is_authenticated).await
        }
    }
}

/// Decide whether the caller may view `album`.
pub async fn can_user_view_album(
    store: &dyn GalleryObjectStore,
    roles: &GalleryRoleSet,
    album: &Album,
    is_authenticated: bool,
) -> Result<bool> {
    is_user_authorized(
        store,
        SecurityAction::ViewAlbumOrMediaObject,
        roles,
        album,
        is_authenticated,
    )
    .await
}

/// Error when the caller may not perform `action` on `album`.
///
/// The search paths never raise this — they silently filter instead. It
/// exists for the permission-gated single-object fetches elsewhere in the
/// system.
pub async fn ensure_user_authorized(
    store: &dyn GalleryObjectStore,
    action: SecurityAction,
    roles: &GalleryRoleSet,
    album: &Album,
    is_authenticated: bool,
) -> Result<()> {
    if is_user_authorized(store, action, roles, album, is_authenticated).await? {
        Ok(())
    } else {
        Err(Error::Unauthorized(format!(
            "caller may not perform {:?} on album {}",
            action, album.id
        )))
    }
}

/// Load an album the caller has asked for by id, enforcing view permission.
///
/// Unlike the search paths, a direct fetch surfaces both failure modes: a
/// missing id is a reportable not-found condition (the id was the target,
/// not a traversal step), and a permission miss is `Unauthorized` rather
/// than silent filtering.
pub async fn load_album_for_user(
    store: &dyn GalleryObjectStore,
    roles: &GalleryRoleSet,
    album_id: i32,
    is_authenticated: bool,
) -> Result<Album> {
    let album = store
        .load_album(album_id)
        .await?
        .ok_or(Error::AlbumNotFound(album_id))?;

    ensure_user_authorized(
        store,
        SecurityAction::ViewAlbumOrMediaObject,
        roles,
        &album,
        is_authenticated,
    )
    .await?;

    Ok(album)
}

/// Load a media item the caller has asked for by id, enforcing view
/// permission through its owning album.
pub async fn load_media_item_for_user(
    store: &dyn GalleryObjectStore,
    roles: &GalleryRoleSet,
    media_item_id: i32,
    is_authenticated: bool,
) -> Result<MediaItem> {
    let item = store
        .load_media_item(media_item_id)
        .await?
        .ok_or(Error::MediaItemNotFound(media_item_id))?;

    let album = store
        .load_album(item.album_id)
        .await?
        .ok_or(Error::AlbumNotFound(item.album_id))?;

    ensure_user_authorized(
        store,
        SecurityAction::ViewAlbumOrMediaObject,
        roles,
        &album,
        is_authenticated,
    )
    .await?;

    Ok(item)
}
