//! Page-layout blocks.
//!
//! Each CMS block type has one component. [`BlockView`] picks the component
//! for a decoded [`Block`]; unknown blocks render nothing.

mod about;
mod cards;
mod contact;
mod cta;
mod hero;
mod landing_about;
mod office;
mod practice_areas;
mod services;
mod team;
mod why_us;

use chambers_core::content::Block;
use leptos::prelude::*;

use about::AboutHero;
use cards::HeroCards;
pub use contact::ContactSection;
use cta::CallToAction;
use hero::Hero;
use landing_about::LandingAbout;
use office::OfficeDetails;
use practice_areas::PracticeAreas;
use services::Services;
use team::OurTeam;
use why_us::WhyUs;

#[component]
pub fn BlockView(block: Block) -> impl IntoView {
    match block {
        Block::Hero(block) => view! { <Hero block=block /> }.into_any(),
        Block::HeroCards(block) => view! { <HeroCards block=block /> }.into_any(),
        Block::LandingAbout(block) => view! { <LandingAbout block=block /> }.into_any(),
        Block::Services(block) => view! { <Services block=block /> }.into_any(),
        Block::OurTeam(block) => view! { <OurTeam block=block /> }.into_any(),
        Block::Cta(block) => view! { <CallToAction block=block /> }.into_any(),
        Block::Contact(block) => view! { <ContactSection block=block /> }.into_any(),
        Block::About(block) => view! { <AboutHero block=block /> }.into_any(),
        Block::WhyUs(block) => view! { <WhyUs block=block /> }.into_any(),
        Block::PracticeAreas(block) => view! { <PracticeAreas block=block /> }.into_any(),
        Block::OfficeDetails(block) => view! { <OfficeDetails block=block /> }.into_any(),
        Block::Unknown => {
            tracing::debug!("skipping unknown block");
            ().into_any()
        }
    }
}
