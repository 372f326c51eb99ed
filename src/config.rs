//! Tuning constants shared across the page.

/// Probe offset compensating for the fixed header when deciding which
/// section counts as "in view".
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// Simulated round trip for a contact form submission.
pub const SUBMIT_ROUND_TRIP_MS: u32 = 2000;

/// Delay before a freshly mounted notification slides in.
pub const NOTICE_ENTER_MS: u32 = 100;

/// How long a notification stays on screen before it starts leaving.
pub const NOTICE_VISIBLE_MS: u32 = 5000;

/// Duration of the notification exit transition.
pub const NOTICE_EXIT_MS: u32 = 300;

/// Scroll depth past which the back-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Coalescing window for the decorative reveal-on-scroll handler (~60fps).
pub const REVEAL_DEBOUNCE_MS: u32 = 16;

/// An element counts as revealed once its top clears the viewport bottom by
/// this margin.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;
