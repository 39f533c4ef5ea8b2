//! Search option types for the gallery object searcher.
//!
//! A [`GalleryObjectSearchOptions`] value is created per request, validated
//! once before any store access, and treated as immutable for the rest of
//! the call.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};
use crate::metadata::MetaName;
use crate::roles::GalleryRoleSet;

/// The kind of search being performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// No search type configured. Fails validation; exists so an
    /// options value can be built up field by field.
    #[default]
    NotSpecified,
    /// Match search terms against Title and Caption metadata.
    TitleOrCaption,
    /// Match search terms against all metadata fields.
    Keyword,
    /// Match a set of tags against the Tags metadata field.
    Tag,
    /// Match a set of tags against the People metadata field.
    People,
    /// Locate the highest album (real or virtual) the caller can view.
    HighestViewableRoot,
}

impl SearchType {
    /// The metadata field a tag search reads. Meaningful only for
    /// `Tag` and `People`.
    pub fn tag_field(&self) -> MetaName {
        match self {
            Self::People => MetaName::People,
            _ => MetaName::Tags,
        }
    }

    pub fn is_tag_search(&self) -> bool {
        matches!(self, Self::Tag | Self::People)
    }
}

/// Options for one gallery object search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryObjectSearchOptions {
    pub search_type: SearchType,

    /// Text terms. Applies to `TitleOrCaption` and `Keyword` searches.
    /// Every term must match somewhere for an object to qualify.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_terms: Vec<String>,

    /// Tags to search for. Applies to `Tag` and `People` searches; an
    /// object qualifies only when it carries ALL of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Only objects in this gallery are returned.
    pub gallery_id: i32,

    /// The caller's roles. Required when `is_user_authenticated` is true;
    /// otherwise may be omitted and defaults to the empty set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<GalleryRoleSet>,

    pub is_user_authenticated: bool,

    /// Whether substring matching of search terms is case sensitive.
    #[serde(default = "defaults::case_sensitive_text_match")]
    pub case_sensitive_text_match: bool,
}

impl GalleryObjectSearchOptions {
    pub fn new(search_type: SearchType, gallery_id: i32) -> Self {
        Self {
            search_type,
            gallery_id,
            case_sensitive_text_match: defaults::case_sensitive_text_match(),
            ..Self::default()
        }
    }

    /// Add a search term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.search_terms.push(term.into());
        self
    }

    /// Add a tag to search for.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the caller's roles and mark the caller authenticated.
    pub fn with_roles(mut self, roles: GalleryRoleSet) -> Self {
        self.roles = Some(roles);
        self.is_user_authenticated = true;
        self
    }

    /// Mark the caller as anonymous.
    pub fn anonymous(mut self) -> Self {
        self.roles = None;
        self.is_user_authenticated = false;
        self
    }

    /// Set substring-match case sensitivity.
    pub fn with_case_sensitive_text_match(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_text_match = case_sensitive;
        self
    }

    /// Validate the options. Fails fast, before any store access.
    pub fn validate(&self) -> Result<()> {
        if self.search_type == SearchType::NotSpecified {
            return Err(Error::InvalidInput(
                "search_type must be set to a valid search type".to_string(),
            ));
        }

        if self.is_user_authenticated && self.roles.is_none() {
            return Err(Error::InvalidInput(
                "roles must be specified when is_user_authenticated is true".to_string(),
            ));
        }

        // Galleries from early schema versions begin at id 0, so only
        // negative ids are invalid.
        if self.gallery_id < 0 {
            return Err(Error::InvalidInput(format!(
                "invalid gallery id {}",
                self.gallery_id
            )));
        }

        if self.search_type.is_tag_search() && self.tags.is_empty() {
            return Err(Error::InvalidInput(
                "tags must be specified for tag and people searches".to_string(),
            ));
        }

        Ok(())
    }

    /// The caller's roles, defaulted to the empty set when absent.
    pub fn roles_or_empty(&self) -> GalleryRoleSet {
        self.roles.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::GalleryRole;

    #[test]
    fn test_validate_well_formed_never_errors() {
        let options = GalleryObjectSearchOptions::new(SearchType::Keyword, 1).with_term("sunset");
        assert!(options.validate().is_ok());

        let options = GalleryObjectSearchOptions::new(SearchType::Tag, 0).with_tag("beach");
        assert!(options.validate().is_ok());

        let options = GalleryObjectSearchOptions::new(SearchType::HighestViewableRoot, 2)
            .with_roles(GalleryRoleSet::new(vec![GalleryRole::new("viewer")]));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unspecified_search_type() {
        let options = GalleryObjectSearchOptions::default();
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidInput(msg)) if msg.contains("search_type")
        ));
    }

    #[test]
    fn test_validate_rejects_tag_search_without_tags() {
        for search_type in [SearchType::Tag, SearchType::People] {
            let options = GalleryObjectSearchOptions::new(search_type, 1);
            assert!(matches!(
                options.validate(),
                Err(Error::InvalidInput(msg)) if msg.contains("tags")
            ));
        }
    }

    #[test]
    fn test_validate_rejects_negative_gallery_id() {
        let options = GalleryObjectSearchOptions::new(SearchType::Keyword, -1).with_term("x");
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidInput(msg)) if msg.contains("gallery")
        ));
    }

    #[test]
    fn test_validate_rejects_authenticated_without_roles() {
        let mut options = GalleryObjectSearchOptions::new(SearchType::Keyword, 1).with_term("x");
        options.is_user_authenticated = true;
        assert!(matches!(
            options.validate(),
            Err(Error::InvalidInput(msg)) if msg.contains("roles")
        ));
    }

    #[test]
    fn test_gallery_id_zero_is_valid() {
        // Galleries migrated from early schema versions are id 0.
        let options = GalleryObjectSearchOptions::new(SearchType::Keyword, 0).with_term("x");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_tag_field_selection() {
        assert_eq!(SearchType::Tag.tag_field(), MetaName::Tags);
        assert_eq!(SearchType::People.tag_field(), MetaName::People);
    }

    #[test]
    fn test_roles_or_empty() {
        let options = GalleryObjectSearchOptions::new(SearchType::Keyword, 1);
        assert!(options.roles_or_empty().is_empty());

        let options = options.with_roles(GalleryRoleSet::new(vec![GalleryRole::new("r")]));
        assert_eq!(options.roles_or_empty().roles.len(), 1);
    }

    #[test]
    fn test_case_sensitivity_default_is_insensitive() {
        let options = GalleryObjectSearchOptions::new(SearchType::Keyword, 1);
        assert!(!options.case_sensitive_text_match);
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = GalleryObjectSearchOptions::new(SearchType::Tag, 1)
            .with_tag("beach")
            .with_tag("sunset");

        let json = serde_json::to_string(&options).unwrap();
        let back: GalleryObjectSearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.search_type, SearchType::Tag);
        assert_eq!(back.tags, vec!["beach", "sunset"]);
    }
}
