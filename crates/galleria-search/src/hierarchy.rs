//! Hierarchy navigation: ancestor walks, top-level reduction, and
//! highest-match descent.
//!
//! The album tree is navigated as an arena of nodes indexed by id: walks are
//! bounded loops over store lookups of explicit parent ids, never pointer
//! chasing. Missing data — an id that no longer exists, a parent that cannot
//! be loaded — is treated as having reached a root, not as corruption, so
//! the walks tolerate concurrent hierarchy mutation between the candidate
//! fetch and the walk.

use std::collections::HashSet;

use tracing::{debug, trace};

use galleria_core::{Album, GalleryObjectStore, Result};

/// Whether `album` itself or any of its ancestors is in `ids`.
pub async fn album_or_ancestor_in(
    store: &dyn GalleryObjectStore,
    album: &Album,
    ids: &HashSet<i32>,
) -> Result<bool> {
    if ids.contains(&album.id) {
        return Ok(true);
    }

    let mut parent_id = album.parent_id;
    while let Some(id) = parent_id {
        if ids.contains(&id) {
            return Ok(true);
        }
        match store.load_album(id).await? {
            Some(parent) => parent_id = parent.parent_id,
            // Parent vanished underneath us; the walk is over.
            None => break,
        }
    }

    Ok(false)
}

/// Reduce `candidate_ids` to the minimal set of top-level albums in
/// `gallery_id` whose descendant closure equals the declared set.
///
/// Candidates from other galleries are discarded before any ancestor work.
/// A candidate is discarded when any of its ancestors is itself in the
/// candidate set (it is covered by that ancestor). Output preserves the
/// input iteration order with covered entries removed, which also makes the
/// operation idempotent.
pub async fn reduce_to_top_level(
    store: &dyn GalleryObjectStore,
    candidate_ids: &[i32],
    gallery_id: i32,
) -> Result<Vec<Album>> {
    let candidate_set: HashSet<i32> = candidate_ids.iter().copied().collect();
    let mut top_level = Vec::new();
    let mut seen = HashSet::new();

    for &candidate_id in candidate_ids {
        if !seen.insert(candidate_id) {
            continue;
        }

        // Ids may have been deleted since the grant was declared.
        let Some(album) = store.load_album(candidate_id).await? else {
            trace!(album_id = candidate_id, "candidate album no longer exists");
            continue;
        };

        // Gallery filtering happens before the ancestor walk so grants
        // rooted in other galleries can never leak in.
        if album.gallery_id != gallery_id {
            trace!(
                album_id = candidate_id,
                album_gallery_id = album.gallery_id,
                gallery_id,
                "candidate album belongs to another gallery"
            );
            continue;
        }

        let mut covered = false;
        let mut parent_id = album.parent_id;
        while let Some(id) = parent_id {
            if candidate_set.contains(&id) {
                covered = true;
                break;
            }
            match store.load_album(id).await? {
                Some(parent) => parent_id = parent.parent_id,
                None => break,
            }
        }

        if !covered {
            top_level.push(album);
        }
    }

    debug!(
        candidate_count = candidate_ids.len(),
        top_level_count = top_level.len(),
        gallery_id,
        "reduced candidates to top-level albums"
    );

    Ok(top_level)
}

/// Find the highest, left-most album under `root` whose id is in `ids`.
///
/// The node itself is checked first, then ALL direct children in their
/// defined sort order, and only then the children's subtrees in that same
/// order — a match among siblings always beats a deeper match further left.
pub async fn find_first_matching_descendant(
    store: &dyn GalleryObjectStore,
    root: &Album,
    ids: &HashSet<i32>,
) -> Result<Option<Album>> {
    if ids.contains(&root.id) {
        return Ok(Some(root.clone()));
    }

    let mut children = Vec::with_capacity(root.child_album_ids.len());
    for &child_id in &root.child_album_ids {
        if let Some(child) = store.load_album(child_id).await? {
            children.push(child);
        }
    }

    // Siblings before nephews: scan the whole level before descending.
    for child in &children {
        if ids.contains(&child.id) {
            return Ok(Some(child.clone()));
        }
    }

    for child in &children {
        let found = Box::pin(find_first_matching_descendant(store, child, ids)).await?;
        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}
