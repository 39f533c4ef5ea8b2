//! Highest album for a set of required permissions.
//!
//! Upload and album-creation flows need "the highest album the caller may
//! add content to" rather than a search result set. The shape is the same
//! three-step pipeline the highest-viewable-root search uses: collect the
//! granted roots, reduce them to top-level albums, then descend from the
//! gallery root to the highest, left-most of them.

use std::collections::HashSet;

use tracing::debug;

use galleria_core::{Album, GalleryObjectStore, GalleryRoleSet, Result};

use crate::hierarchy;
use crate::permissions::{role_grants, SecurityAction};

/// The highest album in `gallery_id` at which the caller's roles grant ALL
/// of `required_actions`. `None` when no album qualifies.
pub async fn highest_album_for_actions(
    store: &dyn GalleryObjectStore,
    roles: &GalleryRoleSet,
    gallery_id: i32,
    required_actions: &[SecurityAction],
) -> Result<Option<Album>> {
    // Step 1: union the granted roots across roles carrying every required
    // action, in role-declaration order.
    let mut candidate_ids: Vec<i32> = Vec::new();
    for role in roles.iter() {
        if !role.applies_to_gallery(gallery_id) {
            continue;
        }
        if !required_actions
            .iter()
            .all(|&action| role_grants(role, action))
        {
            continue;
        }
        for &album_id in &role.root_album_ids {
            if !candidate_ids.contains(&album_id) {
                candidate_ids.push(album_id);
            }
        }
    }

    // Step 2: keep only top-level grants in this gallery.
    let top_level = hierarchy::reduce_to_top_level(store, &candidate_ids, gallery_id).await?;
    if top_level.is_empty() {
        debug!(
            gallery_id,
            ?required_actions,
            "no albums grant the required actions"
        );
        return Ok(None);
    }

    // Step 3: the highest of the remaining candidates is the first one
    // encountered walking down from the gallery root, siblings first.
    let root = store.load_root_album(gallery_id).await?;
    let top_level_ids: HashSet<i32> = top_level.iter().map(|a| a.id).collect();

    hierarchy::find_first_matching_descendant(store, &root, &top_level_ids).await
}
