//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight, LuAward as Award,
        LuBriefcase as Briefcase, LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuClock as Clock, LuGlobe as Globe,
        LuGraduationCap as Education, LuMail as Mail, LuMapPin as Location, LuMenu as Menu,
        LuPhone as Phone, LuScale as Scale, LuSearch as Search, LuSend as Send,
        LuSlidersHorizontal as Filter, LuUser as User, LuUsers as Users, LuX as Close,
    };

    // Lucide ships no brand marks.
    pub use icondata::{
        BsFacebook as Facebook, BsInstagram as Instagram, BsLinkedin as LinkedIn,
        BsTwitter as Twitter,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight, BsAward as Award,
        BsBank as Scale, BsBriefcase as Briefcase, BsCheckLg as Check,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsClock as Clock,
        BsEnvelope as Mail, BsFacebook as Facebook, BsGeoAltFill as Location, BsGlobe as Globe,
        BsInstagram as Instagram, BsLinkedin as LinkedIn, BsList as Menu,
        BsMortarboard as Education, BsPeople as Users, BsPerson as User, BsSearch as Search,
        BsSend as Send, BsSliders as Filter, BsTelephone as Phone, BsTwitter as Twitter,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Navigation
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);

// Directory
themed_icon!(SEARCH, Search);
themed_icon!(FILTER, Filter);
themed_icon!(USER, User);
themed_icon!(USERS, Users);
themed_icon!(CHECK, Check);

// Contact details
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);
themed_icon!(CLOCK, Clock);
themed_icon!(GLOBE, Globe);
themed_icon!(SEND, Send);
themed_icon!(EDUCATION, Education);

// Statistics
themed_icon!(SCALE, Scale);
themed_icon!(AWARD, Award);
themed_icon!(BRIEFCASE, Briefcase);

// Social
themed_icon!(LINKEDIN, LinkedIn);
themed_icon!(FACEBOOK, Facebook);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(TWITTER, Twitter);

/// Icon for a social network.
pub fn social(network: chambers_core::content::SocialNetwork) -> Icon {
    use chambers_core::content::SocialNetwork;
    match network {
        SocialNetwork::LinkedIn => LINKEDIN,
        SocialNetwork::Facebook => FACEBOOK,
        SocialNetwork::Instagram => INSTAGRAM,
        SocialNetwork::Twitter => TWITTER,
    }
}
