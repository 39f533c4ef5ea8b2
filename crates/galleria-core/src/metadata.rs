//! Metadata vocabulary for gallery objects.
//!
//! Every album and media item carries a list of [`MetadataItem`] values keyed
//! by a semantic field name ([`MetaName`]). The `Tags` and `People` fields
//! hold comma-delimited free-text lists; all other fields hold plain strings.

use serde::{Deserialize, Serialize};

/// Semantic name of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaName {
    Title,
    Caption,
    Tags,
    People,
    DateAdded,
    Description,
    FileName,
    Author,
    CameraModel,
    DatePictureTaken,
    Rating,
}

impl MetaName {
    /// Parse a field name, case-insensitively. Returns `None` for names this
    /// vocabulary does not know about.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" => Some(Self::Title),
            "caption" => Some(Self::Caption),
            "tags" => Some(Self::Tags),
            "people" => Some(Self::People),
            "date_added" | "dateadded" => Some(Self::DateAdded),
            "description" => Some(Self::Description),
            "file_name" | "filename" => Some(Self::FileName),
            "author" => Some(Self::Author),
            "camera_model" | "cameramodel" => Some(Self::CameraModel),
            "date_picture_taken" | "datepicturetaken" => Some(Self::DatePictureTaken),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    /// Whether this field holds a comma-delimited tag list.
    pub fn is_tag_field(&self) -> bool {
        matches!(self, Self::Tags | Self::People)
    }
}

impl std::fmt::Display for MetaName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Caption => "caption",
            Self::Tags => "tags",
            Self::People => "people",
            Self::DateAdded => "date_added",
            Self::Description => "description",
            Self::FileName => "file_name",
            Self::Author => "author",
            Self::CameraModel => "camera_model",
            Self::DatePictureTaken => "date_picture_taken",
            Self::Rating => "rating",
        };
        write!(f, "{}", name)
    }
}

/// One metadata entry on a gallery object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    pub name: MetaName,
    pub value: String,
}

impl MetadataItem {
    pub fn new(name: MetaName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Find the first metadata entry with the given field name.
pub fn find_meta<'a>(items: &'a [MetadataItem], name: MetaName) -> Option<&'a MetadataItem> {
    items.iter().find(|md| md.name == name)
}

/// Whether any entry among `names` has a value containing `term`.
///
/// This is the per-term half of the text search contract: a term matches when
/// ANY of the candidate fields contains it. Terms are combined with AND by
/// the caller.
pub fn any_field_contains(
    items: &[MetadataItem],
    names: Option<&[MetaName]>,
    term: &str,
    case_sensitive: bool,
) -> bool {
    items
        .iter()
        .filter(|md| names.map(|ns| ns.contains(&md.name)).unwrap_or(true))
        .any(|md| {
            if case_sensitive {
                md.value.contains(term)
            } else {
                md.value.to_lowercase().contains(&term.to_lowercase())
            }
        })
}
