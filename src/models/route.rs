//! Hash-based routing for static hosting.
//!
//! URL format: `#/our-team/jane-doe`. Every page is served from the same
//! `index.html`, so the hash is the only routing state.

use crate::config::slugs;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash
    Home,
    /// `#/about`
    About,
    /// `#/contact`
    Contact,
    /// `#/practice-areas`
    PracticeAreas,
    /// `#/our-team`
    OurTeam,
    /// `#/our-team/<slug>`
    TeamMember { slug: String },
    /// Anything else
    NotFound { path: String },
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Self::Home,
            (Some("about"), None, _) => Self::About,
            (Some("contact"), None, _) => Self::Contact,
            (Some("practice-areas"), None, _) => Self::PracticeAreas,
            (Some("our-team"), None, _) => Self::OurTeam,
            (Some("our-team"), Some(slug), None) => Self::TeamMember {
                slug: slug.to_string(),
            },
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::About => "#/about".to_string(),
            Self::Contact => "#/contact".to_string(),
            Self::PracticeAreas => "#/practice-areas".to_string(),
            Self::OurTeam => "#/our-team".to_string(),
            Self::TeamMember { slug } => format!("#/our-team/{}", slug),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// CMS page slug rendered by this route, if it is a block page.
    pub fn page_slug(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some(slugs::HOME),
            Self::About => Some(slugs::ABOUT),
            Self::Contact => Some(slugs::CONTACT),
            Self::PracticeAreas => Some(slugs::PRACTICE_AREAS),
            Self::OurTeam => Some(slugs::OUR_TEAM),
            Self::TeamMember { .. } | Self::NotFound { .. } => None,
        }
    }

    /// Document title for this route.
    pub fn title(&self) -> String {
        use crate::config::SITE_NAME;
        match self {
            Self::Home => SITE_NAME.to_string(),
            Self::About => format!("About Us - {}", SITE_NAME),
            Self::Contact => format!("Contact Us - {}", SITE_NAME),
            Self::PracticeAreas => format!("Practice Areas - {}", SITE_NAME),
            Self::OurTeam => format!("Our Team - {}", SITE_NAME),
            Self::TeamMember { .. } => format!("Our Team - {}", SITE_NAME),
            Self::NotFound { .. } => format!("Page not found - {}", SITE_NAME),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::About);
        assert_eq!(AppRoute::from_hash("#/contact/"), AppRoute::Contact);
        assert_eq!(
            AppRoute::from_hash("#/practice-areas"),
            AppRoute::PracticeAreas
        );
        assert_eq!(AppRoute::from_hash("#/our-team"), AppRoute::OurTeam);
        assert_eq!(
            AppRoute::from_hash("#/our-team/jane-doe"),
            AppRoute::TeamMember {
                slug: "jane-doe".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(
            AppRoute::from_hash("#/publications"),
            AppRoute::NotFound {
                path: "publications".to_string(),
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/our-team/jane/extra"),
            AppRoute::NotFound {
                path: "our-team/jane/extra".to_string(),
            }
        );
    }

    #[test]
    fn test_route_to_hash_roundtrip() {
        for route in [
            AppRoute::Home,
            AppRoute::About,
            AppRoute::Contact,
            AppRoute::PracticeAreas,
            AppRoute::OurTeam,
            AppRoute::TeamMember {
                slug: "sam-lee".to_string(),
            },
        ] {
            assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_page_slugs() {
        assert_eq!(AppRoute::Home.page_slug(), Some("home"));
        assert_eq!(AppRoute::OurTeam.page_slug(), Some("our-team"));
        assert_eq!(
            AppRoute::TeamMember {
                slug: "x".to_string()
            }
            .page_slug(),
            None
        );
    }
}
