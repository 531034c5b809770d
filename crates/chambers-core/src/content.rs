//! Typed CMS records.
//!
//! Pages are documents with a `layout` of blocks, tagged by `blockType` the
//! way the admin schema names them. Decoding is lenient where the CMS is:
//! optional text that arrives as a non-string (an unpopulated relation id,
//! a rich-text tree) decodes as `None` instead of failing the whole page,
//! and unknown block types decode as [`Block::Unknown`].

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::directory::Entity;

// ============================================================================
// Defaults
// ============================================================================

/// Fallback copy used when an editor leaves a field empty.
pub mod defaults {
    pub const HERO_HEADING: &str = "Expert Legal Representation For Complex Matters";
    pub const HERO_SUBHEADING: &str =
        "Dedicated advocates providing strategic counsel for individuals and businesses.";
    pub const HERO_IMAGE: &str = "/bg.jpg";
    pub const SERVICES_HEADING: &str = "Our Services";
    pub const LANDING_HEADING: &str = "About Our Law Firm";
    pub const LANDING_DESCRIPTION: &str = "We firmly believe in doing our work well, guided by a \
        keen sense of professional integrity, trust and commercial awareness.";
    pub const CONTACT_HEADING: &str = "Let's Connect";
    pub const CONTACT_DESCRIPTION: &str =
        "Have a question or need assistance? We're here to help you every step of the way.";
    pub const CONTACT_EMAIL: &str = "hello@company.com";
}

// ============================================================================
// Lenient field decoding
// ============================================================================

/// Decodes a string field, treating any non-string value as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decodes an upload relation, treating a bare id as absent.
fn lenient_media<'de, D>(deserializer: D) -> Result<Option<Media>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value::<Media>(v).ok()))
}

/// Decodes an array or has-many relation, keeping only decodable entries.
///
/// Anything other than an array decodes as empty.
fn populated<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(values)) = value else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

// ============================================================================
// Shared records
// ============================================================================

/// Uploaded image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub alt: Option<String>,
}

/// Social profile links; blank entries are treated as missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub instagram: Option<String>,
}

/// Social network identifiers, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    LinkedIn,
    Facebook,
    Instagram,
    Twitter,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
        }
    }
}

impl SocialLinks {
    /// Non-blank links paired with their network.
    pub fn present(&self) -> Vec<(SocialNetwork, String)> {
        [
            (SocialNetwork::LinkedIn, &self.linkedin),
            (SocialNetwork::Facebook, &self.facebook),
            (SocialNetwork::Instagram, &self.instagram),
            (SocialNetwork::Twitter, &self.twitter),
        ]
        .into_iter()
        .filter_map(|(network, link)| {
            link.as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(|l| (network, l.to_string()))
        })
        .collect()
    }
}

// ============================================================================
// Directory entities
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, alias = "language", deserialize_with = "lenient_string")]
    pub title: Option<String>,
}

/// Team member profile (the `team` collection).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttorneyProfile {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_media")]
    pub photo: Option<Media>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub sociallinks: Option<SocialLinks>,
    #[serde(default, deserialize_with = "populated")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "populated")]
    pub languages: Vec<Language>,
    /// Biography as markdown.
    #[serde(default, deserialize_with = "lenient_string")]
    pub bio: Option<String>,
}

impl AttorneyProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    /// Up to two initials, used when a profile has no photo.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Entity for AttorneyProfile {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
}

/// Practice area listed on the practice-areas page, grouped by department.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PracticeArea {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
}

impl Entity for PracticeArea {
    fn name(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.department.as_ref().and_then(|d| d.title.as_deref())
    }
}

/// Service card shown in the home-page carousel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl Entity for Service {
    fn name(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn category(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Blocks
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroCard {
    pub title: String,
    pub content: String,
}

impl HeroCard {
    /// Cards shown when the block has none of its own.
    pub fn defaults() -> Vec<HeroCard> {
        [
            (
                "Strategic Counsel",
                "We provide nuanced legal strategies tailored to your specific needs and objectives.",
            ),
            (
                "Expert Representation",
                "Our attorneys bring deep experience to every case, ensuring skilled advocacy at every turn.",
            ),
            (
                "Client-Centered Focus",
                "We prioritize your goals, communicating clearly throughout your legal journey.",
            ),
            (
                "Proven Results",
                "Our track record demonstrates our commitment to achieving favorable outcomes.",
            ),
        ]
        .into_iter()
        .map(|(title, content)| HeroCard {
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    #[serde(default, deserialize_with = "lenient_string")]
    pub physical_address: Option<String>,
}

/// Labelled statistic shown as an animated counter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: f64,
}

/// Decodes a `{ <label-field>: "...", value: n }` group.
fn stat_group<'de, D>(deserializer: D, label_field: &str) -> Result<Stat, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?.unwrap_or_default();
    let label = value
        .get(label_field)
        .or_else(|| value.get("label"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let number = value.get("value").and_then(|v| v.as_f64()).unwrap_or(0.0);
    Ok(Stat {
        label,
        value: number,
    })
}

fn stat_case<'de, D: Deserializer<'de>>(d: D) -> Result<Stat, D::Error> {
    stat_group(d, "case")
}

fn stat_advocate<'de, D: Deserializer<'de>>(d: D) -> Result<Stat, D::Error> {
    stat_group(d, "advocate")
}

fn stat_client<'de, D: Deserializer<'de>>(d: D) -> Result<Stat, D::Error> {
    stat_group(d, "client")
}

fn stat_cases<'de, D: Deserializer<'de>>(d: D) -> Result<Stat, D::Error> {
    stat_group(d, "cases")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subheading: Option<String>,
    #[serde(default, deserialize_with = "lenient_media")]
    pub hero_image: Option<Media>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroCardsBlock {
    #[serde(default, deserialize_with = "populated")]
    pub cards: Vec<HeroCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingAboutBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "populated")]
    pub practice_areas: Vec<Service>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OurTeamBlock {
    #[serde(default, deserialize_with = "populated")]
    pub attorney_profiles: Vec<AttorneyProfile>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_media")]
    pub background_image: Option<Media>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "populated")]
    pub tel: Vec<Phone>,
    #[serde(default, deserialize_with = "populated")]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub sociallinks: Option<SocialLinks>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutBlock {
    #[serde(default)]
    pub clause: String,
    #[serde(default, deserialize_with = "lenient_media")]
    pub photo: Option<Media>,
}

impl AboutBlock {
    /// Splits the clause into paragraphs of up to three sentences.
    pub fn paragraphs(&self) -> Vec<String> {
        let sentences: Vec<&str> = self
            .clause
            .split(". ")
            .map(|s| s.trim().trim_end_matches('.'))
            .filter(|s| !s.is_empty())
            .collect();
        sentences
            .chunks(3)
            .map(|group| {
                group
                    .iter()
                    .map(|s| format!("{}.", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WhyUsBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "stat_case")]
    pub cases_closed: Stat,
    #[serde(default, deserialize_with = "stat_advocate")]
    pub advocates: Stat,
    #[serde(default, deserialize_with = "stat_client")]
    pub clients: Stat,
    #[serde(default, deserialize_with = "stat_cases")]
    pub successful_cases: Stat,
}

impl WhyUsBlock {
    /// The four headline statistics in display order.
    pub fn stats(&self) -> [&Stat; 4] {
        [
            &self.cases_closed,
            &self.advocates,
            &self.clients,
            &self.successful_cases,
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeAreasBlock {
    #[serde(default, deserialize_with = "populated")]
    pub practice_areas: Vec<PracticeArea>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeLocation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hours: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeDetailsBlock {
    #[serde(default, deserialize_with = "lenient_string")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "populated")]
    pub offices: Vec<OfficeLocation>,
}

/// One entry in a page layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum Block {
    #[serde(rename = "hero")]
    Hero(HeroBlock),
    #[serde(rename = "hero-cards")]
    HeroCards(HeroCardsBlock),
    #[serde(rename = "home-about")]
    LandingAbout(LandingAboutBlock),
    #[serde(rename = "services")]
    Services(ServicesBlock),
    #[serde(rename = "our-team")]
    OurTeam(OurTeamBlock),
    #[serde(rename = "cta-section")]
    Cta(CtaBlock),
    #[serde(rename = "contact")]
    Contact(ContactBlock),
    #[serde(rename = "about")]
    About(AboutBlock),
    #[serde(rename = "whyus")]
    WhyUs(WhyUsBlock),
    #[serde(rename = "practice-areas-block")]
    PracticeAreas(PracticeAreasBlock),
    #[serde(rename = "office")]
    OfficeDetails(OfficeDetailsBlock),
    /// Block type this build does not know how to render.
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Pages and collection responses
// ============================================================================

/// A CMS page: a title, a slug, and a layout of blocks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "blocks")]
    pub layout: Vec<Block>,
}

/// Decodes a layout, turning individually malformed blocks into `Unknown`.
fn blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(values)) = value else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .map(|v| match serde_json::from_value::<Block>(v) {
            Ok(block) => block,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed block");
                Block::Unknown
            }
        })
        .collect())
}

/// Paginated collection response (`{ "docs": [...] }`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Docs<T> {
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
}

impl<T> Docs<T> {
    pub fn into_first(self) -> Option<T> {
        self.docs.into_iter().next()
    }
}

/// Profiles to suggest beside `slug`: everyone else, in order, at most `limit`.
pub fn related_members<'a>(
    all: &'a [AttorneyProfile],
    slug: &str,
    limit: usize,
) -> Vec<&'a AttorneyProfile> {
    all.iter()
        .filter(|m| m.slug.as_deref() != Some(slug))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{FilterState, compute_visible, unique_categories};

    #[test]
    fn test_about_paragraphs_group_three_sentences() {
        let block = AboutBlock {
            clause: "One. Two. Three. Four. Five.".into(),
            photo: None,
        };
        assert_eq!(
            block.paragraphs(),
            vec!["One. Two. Three.".to_string(), "Four. Five.".to_string()]
        );
        assert!(AboutBlock::default().paragraphs().is_empty());
    }

    const HOME_PAGE: &str = r#"{
        "docs": [{
            "id": 1,
            "title": "Home",
            "slug": "home",
            "layout": [
                { "blockType": "hero", "heading": "Counsel you can trust", "hero_image": 12 },
                { "blockType": "hero-cards", "cards": [{ "title": "A", "content": "a" }] },
                { "blockType": "services", "practiceAreas": [
                    { "id": 1, "title": "Conveyancing", "slug": "conveyancing", "description": "Land" },
                    7
                ]},
                { "blockType": "whyus", "heading": "Why us", "description": "d",
                  "cases_closed": { "case": "Cases Closed", "value": 1200 },
                  "advocates": { "advocate": "Advocates", "value": 12 },
                  "clients": { "client": "Clients", "value": 800 },
                  "successful_cases": { "cases": "Success Rate", "value": 98 } },
                { "blockType": "newsletter-popup", "delay": 3 },
                { "blockType": "contact", "email": "info@firm.co.ke",
                  "tel": [{ "phone": "+254 700 000000" }],
                  "offices": [{ "physicalAddress": "Upper Hill, Nairobi" }],
                  "sociallinks": { "linkedin": "https://linkedin.com/x", "twitter": "" } }
            ]
        }]
    }"#;

    fn home() -> Page {
        serde_json::from_str::<Docs<Page>>(HOME_PAGE)
            .unwrap()
            .into_first()
            .unwrap()
    }

    #[test]
    fn test_decode_page_layout() {
        let page = home();
        assert_eq!(page.slug, "home");
        assert_eq!(page.layout.len(), 6);

        match &page.layout[0] {
            Block::Hero(hero) => {
                assert_eq!(hero.heading.as_deref(), Some("Counsel you can trust"));
                assert_eq!(hero.hero_image, None, "bare upload id is not a populated image");
            }
            other => panic!("expected hero, got {:?}", other),
        }
        assert_eq!(page.layout[4], Block::Unknown);
    }

    #[test]
    fn test_unpopulated_relations_are_skipped() {
        let page = home();
        let Block::Services(services) = &page.layout[2] else {
            panic!("expected services block");
        };
        assert_eq!(services.practice_areas.len(), 1);
        assert_eq!(services.practice_areas[0].title.as_deref(), Some("Conveyancing"));
    }

    #[test]
    fn test_why_us_stats() {
        let page = home();
        let Block::WhyUs(why) = &page.layout[3] else {
            panic!("expected why-us block");
        };
        let labels: Vec<_> = why.stats().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Cases Closed", "Advocates", "Clients", "Success Rate"]
        );
        assert_eq!(why.cases_closed.value, 1200.0);
    }

    #[test]
    fn test_contact_block_and_social_links() {
        let page = home();
        let Block::Contact(contact) = &page.layout[5] else {
            panic!("expected contact block");
        };
        assert_eq!(contact.tel[0].phone.as_deref(), Some("+254 700 000000"));
        assert_eq!(
            contact.offices[0].physical_address.as_deref(),
            Some("Upper Hill, Nairobi")
        );
        let links = contact.sociallinks.as_ref().unwrap().present();
        assert_eq!(
            links,
            vec![(SocialNetwork::LinkedIn, "https://linkedin.com/x".to_string())]
        );
    }

    #[test]
    fn test_malformed_block_becomes_unknown() {
        let json = r#"{ "title": "T", "slug": "t", "layout": [
            { "blockType": "hero-cards", "cards": "oops" },
            { "blockType": "about", "clause": 5 }
        ]}"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert!(matches!(page.layout[0], Block::HeroCards(ref b) if b.cards.is_empty()));
        assert_eq!(page.layout[1], Block::Unknown);
    }

    #[test]
    fn test_profile_with_missing_fields_still_filters() {
        let json = r#"[
            { "id": 1, "name": "Jane Doe", "slug": "jane-doe", "role": "Partner",
              "photo": { "url": "/media/jane.jpg" }, "bio": { "root": {} } },
            { "id": 2, "slug": "ghost" },
            { "id": 3, "name": "Sam Lee", "slug": "sam-lee", "role": "Associate" }
        ]"#;
        let team: Vec<AttorneyProfile> = serde_json::from_str(json).unwrap();
        assert_eq!(team[0].bio, None);
        assert_eq!(team[0].photo.as_ref().map(|p| p.url.as_str()), Some("/media/jane.jpg"));

        assert_eq!(compute_visible(&team, &FilterState::new()).len(), 3);
        assert_eq!(unique_categories(&team), vec!["Partner", "Associate"]);
    }

    #[test]
    fn test_practice_area_category_is_department() {
        let area: PracticeArea = serde_json::from_str(
            r#"{ "id": 4, "title": "Mergers", "department": { "title": "Corporate" } }"#,
        )
        .unwrap();
        assert_eq!(area.category(), Some("Corporate"));
    }

    #[test]
    fn test_initials() {
        let profile = AttorneyProfile {
            name: Some("jane wanjiru doe".into()),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "JW");
    }

    #[test]
    fn test_related_members_excludes_self() {
        let team: Vec<AttorneyProfile> = ["a", "b", "c", "d", "e", "f"]
            .into_iter()
            .map(|slug| AttorneyProfile {
                slug: Some(slug.to_string()),
                ..Default::default()
            })
            .collect();

        let related = related_members(&team, "b", 4);
        let slugs: Vec<_> = related.iter().filter_map(|m| m.slug.as_deref()).collect();
        assert_eq!(slugs, vec!["a", "c", "d", "e"]);
    }
}
