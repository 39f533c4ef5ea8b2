//! # galleria-core
//!
//! Core types, traits, and abstractions for the galleria search core.
//!
//! This crate provides the domain model (albums, media items, metadata,
//! roles), the search option types, the error taxonomy, and the trait
//! definitions for the external store collaborators that `galleria-search`
//! depends on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod models;
pub mod roles;
pub mod search;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use metadata::{any_field_contains, find_meta, MetaName, MetadataItem};
pub use models::{Album, GalleryObject, MediaItem, VirtualAlbumType};
pub use roles::{GalleryRole, GalleryRoleSet};
pub use search::{GalleryObjectSearchOptions, SearchType};
pub use tags::{contains_all_tags, parse_tag_list};
pub use traits::{GalleryObjectStore, RoleStore, TagIndex};
