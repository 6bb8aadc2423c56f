// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a missing or blank username
pub const ERR_USERNAME_REQUIRED: &str = "Username is required";

/// Error message for a missing or blank exercise description
pub const ERR_DESCRIPTION_REQUIRED: &str = "Description is required";

/// Error message for an absent duration value
pub const ERR_DURATION_REQUIRED: &str = "Duration is required";

/// Error message for a duration that is not a positive integer
pub const ERR_DURATION_POSITIVE: &str = "Duration must be a positive number";

/// Error message for an unparseable exercise date
pub const ERR_INVALID_DATE: &str = "Invalid date format";

// =============================================================================
// Formatting
// =============================================================================

/// Render format for dates in API responses, e.g. "Mon Jan 01 2024"
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";
