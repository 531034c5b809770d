//! Primary navigation entries.

use super::AppRoute;

/// A link in the navbar and footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: AppRoute,
}

impl NavItem {
    /// Whether `current` belongs to this section.
    ///
    /// Team member pages highlight the "Our Team" entry.
    pub fn is_active(&self, current: &AppRoute) -> bool {
        match (&self.route, current) {
            (AppRoute::OurTeam, AppRoute::TeamMember { .. }) => true,
            (route, current) => route == current,
        }
    }
}

/// Navbar entries in display order.
pub fn primary_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Home",
            route: AppRoute::Home,
        },
        NavItem {
            label: "About Us",
            route: AppRoute::About,
        },
        NavItem {
            label: "Practice Areas",
            route: AppRoute::PracticeAreas,
        },
        NavItem {
            label: "Our Team",
            route: AppRoute::OurTeam,
        },
        NavItem {
            label: "Contact",
            route: AppRoute::Contact,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_member_highlights_team() {
        let member = AppRoute::TeamMember {
            slug: "jane-doe".to_string(),
        };
        let active: Vec<_> = primary_nav()
            .into_iter()
            .filter(|item| item.is_active(&member))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Our Team"]);
    }

    #[test]
    fn test_exact_match() {
        let nav = primary_nav();
        assert!(nav[0].is_active(&AppRoute::Home));
        assert!(!nav[0].is_active(&AppRoute::About));
    }
}
