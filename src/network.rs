//! Network URL constants for the Crescendo SDK.

/// Default platform API base URL (token issuance).
pub const DEFAULT_API_URL: &str = "https://api.crescendo.io/v1";

/// Default communications API base URL.
pub const DEFAULT_COMMS_URL: &str = "https://comms.api.crescendo.io/v1";

/// Default media processing API base URL.
pub const DEFAULT_MEDIA_URL: &str = "https://api.crescendo-media.io";
