//! Role model for the hierarchical permission system.
//!
//! A role is a named grant of permission flags scoped to a set of "root"
//! album ids; a grant applies to each root album and every descendant of it.
//! Roles are owned and mutated by the external role store — this crate only
//! reads them.

use serde::{Deserialize, Serialize};

/// A named permission grant.
///
/// The flag set mirrors the gallery's administrative surface. Within the
/// search core only the view flags and the administrative flags matter, but
/// callers use the rest through `is_user_authorized`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryRole {
    pub role_name: String,

    pub allow_view_album_or_media_object: bool,
    pub allow_view_original_media_object: bool,
    pub allow_add_child_album: bool,
    pub allow_add_media_object: bool,
    pub allow_edit_album: bool,
    pub allow_edit_media_object: bool,
    pub allow_delete_child_album: bool,
    pub allow_delete_media_object: bool,
    pub allow_synchronize: bool,
    pub allow_administer_gallery: bool,
    pub allow_administer_site: bool,
    pub allow_hide_watermark: bool,

    /// Album ids at which the grant is rooted. The grant covers each of
    /// these albums and all of their descendants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_album_ids: Vec<i32>,

    /// Galleries this role applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_ids: Vec<i32>,
}

impl GalleryRole {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            ..Self::default()
        }
    }

    /// Grant view permission.
    pub fn with_view(mut self) -> Self {
        self.allow_view_album_or_media_object = true;
        self
    }

    /// Add a root album the grant is anchored at.
    pub fn with_root_album(mut self, album_id: i32) -> Self {
        self.root_album_ids.push(album_id);
        self
    }

    /// Add a gallery the role applies to.
    pub fn with_gallery(mut self, gallery_id: i32) -> Self {
        self.gallery_ids.push(gallery_id);
        self
    }

    pub fn applies_to_gallery(&self, gallery_id: i32) -> bool {
        self.gallery_ids.contains(&gallery_id)
    }
}

/// The set of roles held by one caller for the duration of one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryRoleSet {
    pub roles: Vec<GalleryRole>,
}

impl GalleryRoleSet {
    pub fn new(roles: Vec<GalleryRole>) -> Self {
        Self { roles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryRole> {
        self.roles.iter()
    }

    /// The declared grant set: the union of `root_album_ids` across all
    /// roles granting view permission in `gallery_id`, deduplicated, in
    /// role-declaration order.
    ///
    /// This is the pre-reduction set — it may contain albums that are
    /// descendants of other granted albums. Reduction to a minimal top-level
    /// antichain is a separate step owned by the hierarchy navigator, and
    /// its output order follows the order returned here.
    pub fn viewable_album_ids_for_gallery(&self, gallery_id: i32) -> Vec<i32> {
        let mut ids = Vec::new();
        for role in &self.roles {
            if role.allow_view_album_or_media_object && role.applies_to_gallery(gallery_id) {
                for id in &role.root_album_ids {
                    if !ids.contains(id) {
                        ids.push(*id);
                    }
                }
            }
        }
        ids
    }
}
