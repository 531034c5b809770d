//! Attorney profile page.
//!
//! The profile and the roster load independently; suggestions appear once
//! the roster arrives and are paged [`RELATED_PAGE_SIZE`] at a time.

use chambers_core::content::{AttorneyProfile, related_members};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{ContentFailure, Loading};
use crate::components::carousel::CarouselControls;
use crate::components::hooks::use_directory_view;
use crate::components::icons as ic;
use crate::components::social::SocialLinks;
use crate::config::TEAM_FETCH_LIMIT;
use crate::config::carousel::RELATED_PAGE_SIZE;
use crate::models::AppRoute;
use crate::utils::{cms, dom, markdown_to_html};

stylance::import_crate_style!(css, "src/components/pages/team_member.module.css");

#[component]
pub fn TeamMemberPage(slug: String) -> impl IntoView {
    let member = {
        let slug = slug.clone();
        LocalResource::new(move || {
            let slug = slug.clone();
            async move { cms::fetch_member(&slug).await }
        })
    };
    let team = LocalResource::new(cms::fetch_team);
    let slug = StoredValue::new(slug);

    view! {
        <div class=css::page>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || {
                    member.get().map(|result| match result {
                        Ok(profile) => view! { <Profile profile=profile /> }.into_any(),
                        Err(error) => view! { <ContentFailure error=error /> }.into_any(),
                    })
                }}
            </Suspense>

            <Suspense fallback=|| ()>
                {move || {
                    team.get().map(|result| match result {
                        Ok(all) => {
                            let related: Vec<AttorneyProfile> = slug.with_value(|slug| {
                                related_members(&all, slug, TEAM_FETCH_LIMIT)
                                    .into_iter()
                                    .cloned()
                                    .collect()
                            });
                            view! { <RelatedMembers members=related /> }.into_any()
                        }
                        Err(error) => {
                            tracing::warn!(error = %error, "related members unavailable");
                            ().into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Profile(profile: AttorneyProfile) -> impl IntoView {
    let name = profile.display_name().to_string();
    dom::set_title(&format!("{} - {}", name, crate::config::SITE_NAME));

    let initials = profile.initials();
    let bio_html = profile
        .bio
        .as_deref()
        .filter(|bio| !bio.trim().is_empty())
        .map(markdown_to_html);
    let languages: Vec<String> = profile
        .languages
        .into_iter()
        .filter_map(|l| l.title)
        .collect();
    let education: Vec<String> = profile
        .education
        .into_iter()
        .filter_map(|e| e.description)
        .collect();

    view! {
        <section class=css::hero>
            <div class=css::inner>
                <a class=css::back href=AppRoute::OurTeam.to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    "Back to Our Team"
                </a>
                <div class=css::profile>
                    <div class=css::photo>
                        {match profile.photo {
                            Some(photo) => view! {
                                <img src=photo.url alt=photo.alt.unwrap_or_else(|| name.clone()) />
                            }
                            .into_any(),
                            None => view! { <span class=css::initials>{initials}</span> }.into_any(),
                        }}
                    </div>
                    <div class=css::summary>
                        <h1 class=css::name>{name.clone()}</h1>
                        {profile.role.map(|role| view! { <p class=css::role>{role}</p> })}
                        <div class=css::contacts>
                            {profile.email.map(|email| view! {
                                <a class=css::contact href=format!("mailto:{}", email)>
                                    <Icon icon=ic::MAIL />
                                    {email.clone()}
                                </a>
                            })}
                            {profile.phone.map(|phone| view! {
                                <a class=css::contact href=format!("tel:{}", phone)>
                                    <Icon icon=ic::PHONE />
                                    {phone.clone()}
                                </a>
                            })}
                        </div>
                        {(!languages.is_empty()).then(|| view! {
                            <p class=css::languages>
                                <Icon icon=ic::GLOBE />
                                {languages.join(", ")}
                            </p>
                        })}
                        <SocialLinks
                            links=profile.sociallinks
                            container_class=css::socials
                            link_class=css::socialLink
                        />
                    </div>
                </div>
            </div>
        </section>

        <section class=css::details>
            <div class=css::inner>
                <div class=css::columns>
                    <article class=css::bio>
                        <h2 class=css::sectionHeading>"Biography"</h2>
                        {match bio_html {
                            Some(html) => view! { <div class=css::markdown inner_html=html /> }.into_any(),
                            None => view! { <p class=css::muted>"No biography available."</p> }.into_any(),
                        }}
                    </article>
                    {(!education.is_empty()).then(|| view! {
                        <aside class=css::education>
                            <h2 class=css::sectionHeading>
                                <Icon icon=ic::EDUCATION />
                                "Education"
                            </h2>
                            <ul class=css::educationList>
                                {education
                                    .into_iter()
                                    .map(|entry| view! { <li>{entry}</li> })
                                    .collect_view()}
                            </ul>
                        </aside>
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn RelatedMembers(members: Vec<AttorneyProfile>) -> impl IntoView {
    if members.is_empty() {
        return ().into_any();
    }

    let directory = use_directory_view(members, RELATED_PAGE_SIZE);
    let items = directory.current_items();
    let locked = directory.is_transitioning();
    let dispatch = Callback::new(move |command| directory.dispatch(command));
    let track_class = move || {
        if locked.get() {
            format!("{} {}", css::relatedGrid, css::transitioning)
        } else {
            css::relatedGrid.to_string()
        }
    };

    view! {
        <section class=css::related>
            <div class=css::inner>
                <h2 class=css::sectionHeading>"Other Team Members"</h2>
                <div class=track_class>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|profile| view! { <RelatedCard profile=profile /> })
                            .collect_view()
                    }}
                </div>
                <CarouselControls
                    page_count=directory.page_count()
                    current_page=directory.current_page()
                    locked=locked
                    on_command=dispatch
                />
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn RelatedCard(profile: AttorneyProfile) -> impl IntoView {
    let name = profile.display_name().to_string();
    let initials = profile.initials();
    let href = profile
        .slug
        .clone()
        .map(|slug| AppRoute::TeamMember { slug }.to_hash())
        .unwrap_or_else(|| AppRoute::OurTeam.to_hash());

    view! {
        <a class=css::relatedCard href=href>
            <div class=css::relatedPhoto>
                {match profile.photo {
                    Some(photo) => view! { <img src=photo.url alt=name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <span class=css::initials>{initials}</span> }.into_any(),
                }}
            </div>
            <h3 class=css::relatedName>{name.clone()}</h3>
            {profile.role.map(|role| view! { <p class=css::relatedRole>{role}</p> })}
        </a>
    }
}
