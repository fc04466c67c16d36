/// Page hooks the effect attaches to. The markup and CSS live outside the
/// crate; these must stay in sync with it.
// Persistent cursor indicator element
pub const CURSOR_SELECTOR: &str = ".cursor";

// Container receiving transient trail particle nodes
pub const TRAIL_CONTAINER_SELECTOR: &str = ".cursor-trail";

// Class applied to every particle node
pub const PARTICLE_CLASS: &str = "trail-particle";

// Video overlay collaborator
pub const VIDEO_BUTTON_ID: &str = "video-button";
pub const VIDEO_OVERLAY_ID: &str = "video-overlay";
pub const OVERLAY_VIDEO_ID: &str = "overlay-video";
pub const OVERLAY_ACTIVE_CLASS: &str = "active";
