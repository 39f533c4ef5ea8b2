//! # galleria-search
//!
//! The query/search and permission-filtering core of the galleria media
//! hierarchy.
//!
//! This crate provides:
//! - Multi-criterion search over albums and media items (title/caption,
//!   keyword, tag, people, highest-viewable-root)
//! - Role-based hierarchical permission evaluation
//! - Ancestor walks and top-level reduction over the album tree
//! - Virtual-root synthesis for multi-root result presentation
//!
//! ## Example
//!
//! ```ignore
//! use galleria_search::{GalleryObjectSearcher, GalleryObjectSearchOptions, SearchType};
//!
//! let options = GalleryObjectSearchOptions::new(SearchType::Tag, gallery_id)
//!     .with_tag("beach")
//!     .with_tag("sunset")
//!     .anonymous();
//!
//! let mut searcher = GalleryObjectSearcher::new(options, &store, &tag_index)?;
//! let found = searcher.find_all().await?;
//! ```

pub mod hierarchy;
pub mod highest;
pub mod permissions;
pub mod results;
pub mod searcher;

// Re-export core types
pub use galleria_core::*;

// Re-export search types
pub use hierarchy::{album_or_ancestor_in, find_first_matching_descendant, reduce_to_top_level};
pub use highest::highest_album_for_actions;
pub use permissions::{
    can_user_view, can_user_view_album, ensure_user_authorized, is_user_authorized,
    load_album_for_user, load_media_item_for_user, role_grants, SecurityAction,
};
pub use results::{assemble_root_for_user, virtual_root_album, wrap_album};
pub use searcher::GalleryObjectSearcher;
