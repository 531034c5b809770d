//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site.
//! The CMS location can be overridden at build time with `CHAMBERS_CMS_URL`.

// =============================================================================
// Site Metadata
// =============================================================================

/// Firm name shown in the navbar, footer and document title.
pub const SITE_NAME: &str = "Andego Gachagua Advocates LLP";

/// Short tagline under the footer logo.
pub const SITE_TAGLINE: &str = "Integrity. Trust. Commercial awareness.";

/// Meta description for the home page.
pub const SITE_DESCRIPTION: &str = "We firmly believe in doing our work well, guided by a keen \
    sense of professional integrity, trust and commercial awareness.";

/// Logo shown in the navbar and footer.
pub const LOGO_URL: &str = "/logo.png";

/// Firm contact details shown in the footer.
pub mod firm {
    pub const EMAIL: &str = "info@andegogachagua.com";
    /// `(display, tel: target)` pairs.
    pub const PHONES: &[(&str, &str)] = &[
        ("+254 759 803001", "+254759803001"),
        ("+254 704 208484", "+254704208484"),
    ];
    pub const ADDRESSES: &[&str] = &[
        "Madonna House, 3rd Floor, Suite 314 and 315 Westlands Rd, Westlands",
        "Adala Otuko Road, Behind St.Joseph's Catholic Church, Milimani, Kisumu",
    ];
}

// =============================================================================
// Content Source
// =============================================================================

/// Base URL of the CMS REST API (no trailing slash).
pub const CMS_API_URL: &str = match option_env!("CHAMBERS_CMS_URL") {
    Some(url) => url,
    None => "/api",
};

/// Relationship depth requested so blocks arrive with related documents populated.
pub const CMS_DEPTH: u8 = 2;

/// Upper bound on team profiles fetched for related-member suggestions.
pub const TEAM_FETCH_LIMIT: usize = 100;

/// Newsletter subscription endpoint.
pub const SUBSCRIBE_URL: &str = "/api/subscribe";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Domains allowed for outbound social links coming from the CMS.
pub const ALLOWED_LINK_DOMAINS: &[&str] = &[
    "linkedin.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
];

// =============================================================================
// Page Slugs
// =============================================================================

/// CMS page slugs backing each static route.
pub mod slugs {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
    pub const PRACTICE_AREAS: &str = "practice-areas";
    pub const OUR_TEAM: &str = "our-team";
}

// =============================================================================
// Carousel Configuration
// =============================================================================

/// Paged carousel settings.
pub mod carousel {
    /// How long a page change holds the navigation lock (ms).
    pub const TRANSITION_MS: u32 = 500;
    /// Service cards per page on the home page.
    pub const SERVICES_PAGE_SIZE: usize = 3;
    /// Related profiles per row on a team member page.
    pub const RELATED_PAGE_SIZE: usize = 4;
    /// Attorney cards per page in the team directory.
    pub const TEAM_PAGE_SIZE: usize = 9;
}

// =============================================================================
// Animation Configuration
// =============================================================================

/// Why-us statistic counters.
pub mod counters {
    /// Total count-up duration (ms).
    pub const DURATION_MS: u64 = 2000;
    /// Interval between counter updates (ms).
    pub const TICK_MS: u32 = 20;
    /// Fraction of the section that must be visible to start counting.
    pub const VISIBILITY_THRESHOLD: f64 = 0.3;
}

/// How long success notices stay on screen (ms).
pub const NOTICE_DISMISS_MS: u32 = 5000;

/// Scroll offset (px) after which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

/// Viewport width at which the navbar switches from the mobile drawer.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key prefix for fetched pages.
    pub const PAGE_KEY_PREFIX: &str = "page_cache:";
    /// sessionStorage key prefix for single team profiles.
    pub const MEMBER_KEY_PREFIX: &str = "member_cache:";
    /// sessionStorage key for the team roster.
    pub const TEAM_KEY: &str = "team_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
