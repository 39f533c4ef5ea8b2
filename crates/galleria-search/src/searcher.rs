//! The gallery object searcher.
//!
//! One searcher is constructed per request from validated options plus the
//! store collaborators, dispatches to the strategy for the requested search
//! type, and is discarded with the call. Searches are read-only; the only
//! state a searcher accumulates is the per-invocation memo of the gallery's
//! root album and whether the caller can view it.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;
use uuid::Uuid;

use galleria_core::{
    any_field_contains, contains_all_tags, find_meta, Album, Error, GalleryObject,
    GalleryObjectSearchOptions, GalleryObjectStore, GalleryRoleSet, MediaItem, MetaName,
    MetadataItem, Result, SearchType, TagIndex,
};

use crate::permissions;
use crate::results;

/// Metadata fields consulted by a title/caption search.
const TITLE_OR_CAPTION_FIELDS: &[MetaName] = &[MetaName::Title, MetaName::Caption];

/// Finds gallery objects matching one set of search options.
pub struct GalleryObjectSearcher<'a> {
    options: GalleryObjectSearchOptions,
    roles: GalleryRoleSet,
    store: &'a dyn GalleryObjectStore,
    tag_index: &'a dyn TagIndex,
    /// Correlation id tying this invocation's log events together.
    search_id: Uuid,
    root_album: Option<Album>,
    user_can_view_root: Option<bool>,
}

impl<'a> GalleryObjectSearcher<'a> {
    /// Build a searcher from `options`, validating them first. The role set
    /// defaults to empty when the (anonymous) caller supplied none.
    pub fn new(
        options: GalleryObjectSearchOptions,
        store: &'a dyn GalleryObjectStore,
        tag_index: &'a dyn TagIndex,
    ) -> Result<Self> {
        options.validate()?;
        let roles = options.roles_or_empty();

        Ok(Self {
            options,
            roles,
            store,
            tag_index,
            search_id: Uuid::new_v4(),
            root_album: None,
            user_can_view_root: None,
        })
    }

    /// Find all gallery objects matching the search criteria. Never returns
    /// a null-ish collection; no match is an empty vec.
    pub async fn find_all(&mut self) -> Result<Vec<GalleryObject>> {
        let started = Instant::now();

        let found = match self.options.search_type {
            SearchType::TitleOrCaption => {
                self.find_matching_text(Some(TITLE_OR_CAPTION_FIELDS)).await?
            }
            SearchType::Keyword => self.find_matching_text(None).await?,
            SearchType::Tag | SearchType::People => self.find_matching_tags().await?,
            SearchType::HighestViewableRoot => {
                results::wrap_album(self.load_root_album_for_user().await?)
            }
            // Validation rejects this before we get here; reaching it means
            // a caller bypassed `new`.
            SearchType::NotSpecified => {
                return Err(Error::Config(
                    "find_all dispatched with an unspecified search type".to_string(),
                ))
            }
        };

        debug!(
            search_id = %self.search_id,
            search_type = ?self.options.search_type,
            gallery_id = self.options.gallery_id,
            result_count = found.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "search complete"
        );

        Ok(found)
    }

    /// Find the first gallery object matching the criteria. Use this when a
    /// single item is expected.
    pub async fn find_first(&mut self) -> Result<Option<GalleryObject>> {
        Ok(self.find_all().await?.into_iter().next())
    }

    // =========================================================================
    // TEXT SEARCH (TitleOrCaption, Keyword)
    // =========================================================================

    /// Albums and media items of the gallery where EVERY search term appears
    /// in at least one of the candidate metadata fields. `fields` of `None`
    /// means all fields (keyword search).
    async fn find_matching_text(
        &self,
        fields: Option<&[MetaName]>,
    ) -> Result<Vec<GalleryObject>> {
        let mut found = Vec::new();

        for album in self.store.albums_in_gallery(self.options.gallery_id).await? {
            if self.all_terms_match(&album.metadata, fields) {
                found.push(GalleryObject::Album(album));
            }
        }

        for item in self
            .store
            .media_items_in_gallery(self.options.gallery_id)
            .await?
        {
            if self.all_terms_match(&item.metadata, fields) {
                found.push(GalleryObject::MediaItem(item));
            }
        }

        Ok(found)
    }

    fn all_terms_match(&self, metadata: &[MetadataItem], fields: Option<&[MetaName]>) -> bool {
        self.options.search_terms.iter().all(|term| {
            any_field_contains(
                metadata,
                fields,
                term,
                self.options.case_sensitive_text_match,
            )
        })
    }

    // =========================================================================
    // TAG / PEOPLE SEARCH
    // =========================================================================

    /// The tag/people search strategy: index lookup for OR candidates,
    /// permission pruning, exact multi-tag re-check, then loads. Albums come
    /// first in the result, then media items, each in candidate order.
    async fn find_matching_tags(&mut self) -> Result<Vec<GalleryObject>> {
        let mut found: Vec<GalleryObject> = Vec::new();

        for album in self.albums_having_tags().await? {
            found.push(GalleryObject::Album(album));
        }

        for item in self.media_items_having_tags().await? {
            found.push(GalleryObject::MediaItem(item));
        }

        Ok(found)
    }

    /// Candidate restriction for authenticated callers: `None` when the
    /// caller can see the gallery root (no restriction needed), otherwise
    /// the declared viewable album id set.
    async fn viewable_restriction(&mut self) -> Result<Option<HashSet<i32>>> {
        if !self.options.is_user_authenticated {
            return Ok(None);
        }

        if self.user_can_view_root_album().await? {
            return Ok(None);
        }

        let viewable: HashSet<i32> = self
            .roles
            .viewable_album_ids_for_gallery(self.options.gallery_id)
            .into_iter()
            .collect();

        debug!(
            search_id = %self.search_id,
            viewable_count = viewable.len(),
            "caller cannot view gallery root; restricting to granted albums"
        );

        Ok(Some(viewable))
    }

    /// Albums carrying all requested tags that the caller may view.
    ///
    /// Mirrors `media_items_having_tags`; changes here usually need a
    /// matching change there.
    async fn albums_having_tags(&mut self) -> Result<Vec<Album>> {
        let field = self.options.search_type.tag_field();
        let candidate_ids = self
            .tag_index
            .album_ids_with_any_tag(field, &self.options.tags, self.options.gallery_id)
            .await?;

        debug!(
            search_id = %self.search_id,
            candidate_count = candidate_ids.len(),
            field = %field,
            "tag index produced album candidates"
        );

        let restriction = self.viewable_restriction().await?;
        let mut albums = Vec::new();

        for album_id in candidate_ids {
            if let Some(viewable) = &restriction {
                if !viewable.contains(&album_id) {
                    continue;
                }
            }

            // The candidate may have been deleted since the index lookup.
            let Some(album) = self.store.load_album(album_id).await? else {
                continue;
            };

            // Anonymous callers never see private albums.
            if !self.options.is_user_authenticated && album.is_private {
                continue;
            }

            if self.carries_all_requested_tags(&album.metadata, field) {
                albums.push(album);
            }
        }

        Ok(albums)
    }

    /// Media items carrying all requested tags that the caller may view.
    async fn media_items_having_tags(&mut self) -> Result<Vec<MediaItem>> {
        let field = self.options.search_type.tag_field();
        let candidate_ids = self
            .tag_index
            .media_item_ids_with_any_tag(field, &self.options.tags, self.options.gallery_id)
            .await?;

        debug!(
            search_id = %self.search_id,
            candidate_count = candidate_ids.len(),
            field = %field,
            "tag index produced media item candidates"
        );

        let restriction = self.viewable_restriction().await?;
        let mut items = Vec::new();

        for item_id in candidate_ids {
            let Some(item) = self.store.load_media_item(item_id).await? else {
                continue;
            };

            if let Some(viewable) = &restriction {
                if !viewable.contains(&item.album_id) {
                    continue;
                }
            }

            if !self.options.is_user_authenticated {
                // Visibility of a media item follows its owning album; an
                // orphaned item is not visible to anyone.
                let Some(owning_album) = self.store.load_album(item.album_id).await? else {
                    continue;
                };
                if owning_album.is_private {
                    continue;
                }
            }

            if self.carries_all_requested_tags(&item.metadata, field) {
                items.push(item);
            }
        }

        Ok(items)
    }

    /// The exact-match refinement: with a single requested tag, index
    /// membership is sufficient proof; with several, re-check the raw field
    /// value for AND semantics.
    fn carries_all_requested_tags(&self, metadata: &[MetadataItem], field: MetaName) -> bool {
        if self.options.tags.len() == 1 {
            return true;
        }

        find_meta(metadata, field)
            .map(|md| contains_all_tags(&md.value, &self.options.tags))
            .unwrap_or(false)
    }

    // =========================================================================
    // HIGHEST VIEWABLE ROOT
    // =========================================================================

    /// The top-level album the caller has permission to view: the real root
    /// when viewable, a synthesized virtual root when only a subset of
    /// top-level albums is, or nothing at all.
    async fn load_root_album_for_user(&mut self) -> Result<Option<Album>> {
        let viewable_roots = self.root_albums_user_can_view().await?;
        Ok(results::assemble_root_for_user(
            self.options.gallery_id,
            viewable_roots,
        ))
    }

    /// The top-level albums the caller can view. Empty when the caller has
    /// access to nothing.
    async fn root_albums_user_can_view(&mut self) -> Result<Vec<Album>> {
        if self.user_can_view_root_album().await? {
            let root = self.root_album().await?;
            return Ok(vec![root]);
        }

        if !self.options.is_user_authenticated {
            // Anonymous and the root is private: nothing is viewable.
            return Ok(Vec::new());
        }

        let declared = self
            .roles
            .viewable_album_ids_for_gallery(self.options.gallery_id);

        crate::hierarchy::reduce_to_top_level(self.store, &declared, self.options.gallery_id).await
    }

    // =========================================================================
    // PER-INVOCATION MEMOS
    // =========================================================================

    async fn root_album(&mut self) -> Result<Album> {
        if let Some(album) = &self.root_album {
            return Ok(album.clone());
        }

        let album = self.store.load_root_album(self.options.gallery_id).await?;
        self.root_album = Some(album.clone());
        Ok(album)
    }

    async fn user_can_view_root_album(&mut self) -> Result<bool> {
        if let Some(can_view) = self.user_can_view_root {
            return Ok(can_view);
        }

        let root = self.root_album().await?;
        let can_view = permissions::can_user_view_album(
            self.store,
            &self.roles,
            &root,
            self.options.is_user_authenticated,
        )
        .await?;

        debug!(
            search_id = %self.search_id,
            gallery_id = self.options.gallery_id,
            can_view_root = can_view,
            "memoized root album visibility"
        );

        self.user_can_view_root = Some(can_view);
        Ok(can_view)
    }
}
