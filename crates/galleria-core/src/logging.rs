//! Structured logging schema and field name constants for galleria.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points (dispatch, permission pruning, reduction) |
//! | TRACE | Per-item iteration (candidates, ancestor hops) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation id for one search invocation. Format: UUIDv4.
pub const SEARCH_ID: &str = "search_id";

/// Subsystem originating the log event.
/// Values: "search", "permissions", "hierarchy"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "find_all", "can_user_view", "reduce_to_top_level"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Gallery the operation is scoped to.
pub const GALLERY_ID: &str = "gallery_id";

/// Album being operated on.
pub const ALBUM_ID: &str = "album_id";

/// Media item being operated on.
pub const MEDIA_ITEM_ID: &str = "media_item_id";

/// Search type enum variant.
pub const SEARCH_TYPE: &str = "search_type";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of objects returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of candidate ids produced by the tag index before pruning.
pub const CANDIDATE_COUNT: &str = "candidate_count";

/// Number of tags or terms in the request.
pub const TERM_COUNT: &str = "term_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Whether the caller can view the gallery's true root album.
pub const CAN_VIEW_ROOT: &str = "can_view_root";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
