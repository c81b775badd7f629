//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 6.0;

/// Large radius - cards, overlays
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Full/pill radius - the voice orb
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Icon size - small (inline with text)
pub const ICON_SIZE_SM: f32 = 16.0;

/// Icon size - medium (navigation bar)
pub const ICON_SIZE_MD: f32 = 20.0;

/// Width of the centered page column
pub const CONTENT_WIDTH: f32 = 560.0;

/// Diameter of the voice assistant orb
pub const ORB_SIZE: f32 = 120.0;
