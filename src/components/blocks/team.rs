//! Searchable, filterable team directory.
//!
//! Search matches name or role; role chips narrow the roster further. The
//! grid pages [`TEAM_PAGE_SIZE`] cards at a time through the shared
//! directory view, so paging is clamped whenever a filter shrinks the list.

use chambers_core::content::{AttorneyProfile, OurTeamBlock};
use chambers_core::{Command, unique_categories};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::carousel::CarouselControls;
use crate::components::hooks::use_directory_view;
use crate::components::icons as ic;
use crate::components::social::SocialLinks;
use crate::config::carousel::TEAM_PAGE_SIZE;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/team.module.css");

/// "Showing 3 attorneys with applied filters"
fn results_summary(count: usize, filtered: bool) -> String {
    let noun = if count == 1 { "attorney" } else { "attorneys" };
    let suffix = if filtered { " with applied filters" } else { "" };
    format!("Showing {} {}{}", count, noun, suffix)
}

#[component]
pub fn OurTeam(block: OurTeamBlock) -> impl IntoView {
    let roles = unique_categories(&block.attorney_profiles);
    let directory = use_directory_view(block.attorney_profiles, TEAM_PAGE_SIZE);
    let show_filters = RwSignal::new(false);

    let dispatch = Callback::new(move |command: Command| directory.dispatch(command));
    let query = Signal::derive(move || directory.with(|s| s.filter().query.clone()));
    let filtered = Signal::derive(move || directory.with(|s| s.filter().is_active()));
    let visible_count = Signal::derive(move || directory.with(|s| s.visible().len()));
    let items = directory.current_items();

    let role_chips = move || {
        roles
            .iter()
            .map(|role| {
                let role = role.clone();
                let label = role.clone();
                let chip_role = role.clone();
                let class = move || {
                    if directory.with(|s| s.filter().is_selected(&role)) {
                        format!("{} {}", css::chip, css::chipActive)
                    } else {
                        css::chip.to_string()
                    }
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| dispatch.run(Command::ToggleCategory(chip_role.clone()))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <section class=css::section>
            <div class=css::inner>
                <header class=css::header>
                    <span class=css::badge>"Expert Legal Representation"</span>
                    <h2 class=css::heading>"Our Legal Team"</h2>
                    <p class=css::lead>
                        "Experienced attorneys dedicated to excellence in legal representation and client service"
                    </p>
                    <div class=css::rule />
                </header>

                <div class=css::toolbar>
                    <label class=css::search>
                        <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            class=css::searchInput
                            type="text"
                            placeholder="Search attorneys..."
                            prop:value=query
                            on:input=move |ev| dispatch.run(Command::SetQuery(event_target_value(&ev)))
                        />
                    </label>
                    <div class=css::toolbarActions>
                        <button
                            class=css::toolbarButton
                            aria-expanded=move || show_filters.get().to_string()
                            on:click=move |_| show_filters.update(|open| *open = !*open)
                        >
                            <Icon icon=ic::FILTER />
                            {move || if show_filters.get() { "Hide Filters" } else { "Filter by Role" }}
                        </button>
                        <Show when=move || filtered.get()>
                            <button class=css::clearButton on:click=move |_| dispatch.run(Command::Clear)>
                                <Icon icon=ic::CLOSE />
                                "Clear All"
                            </button>
                        </Show>
                    </div>
                </div>

                <Show when=move || show_filters.get()>
                    <div class=css::filters>
                        <h4 class=css::filtersHeading>
                            <Icon icon=ic::USER />
                            "Filter by Role"
                        </h4>
                        <div class=css::chips>{role_chips.clone()}</div>
                    </div>
                </Show>

                <p class=css::summary>
                    {move || results_summary(visible_count.get(), filtered.get())}
                </p>

                <Show
                    when=move || { visible_count.get() > 0 }
                    fallback=move || view! {
                        <div class=css::empty>
                            <p class=css::emptyTitle>"No attorneys found matching your criteria"</p>
                            <p class=css::emptyHint>"Try adjusting your search or filters"</p>
                            <button class=css::toolbarButton on:click=move |_| dispatch.run(Command::Clear)>
                                "Clear Filters"
                            </button>
                        </div>
                    }
                >
                    <div class=css::grid>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|profile| view! { <AttorneyCard profile=profile /> })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <CarouselControls
                    page_count=directory.page_count()
                    current_page=directory.current_page()
                    locked=directory.is_transitioning()
                    on_command=dispatch
                    inverted=true
                />
            </div>
        </section>
    }
}

#[component]
fn AttorneyCard(profile: AttorneyProfile) -> impl IntoView {
    let name = profile.display_name().to_string();
    let initials = profile.initials();
    let href = profile
        .slug
        .clone()
        .map(|slug| AppRoute::TeamMember { slug }.to_hash());
    let photo = profile.photo.map(|p| p.url);

    view! {
        <article class=css::card>
            <div class=css::photo>
                {match photo {
                    Some(url) => view! { <img src=url alt=name.clone() loading="lazy" /> }.into_any(),
                    None => view! { <span class=css::initials>{initials}</span> }.into_any(),
                }}
                <div class=css::photoShade />
                <div class=css::caption>
                    <h3 class=css::name>{name.clone()}</h3>
                    {profile.role.map(|role| view! { <p class=css::role>{role}</p> })}
                </div>
            </div>
            <div class=css::cardBody>
                <div class=css::contactRow>
                    {profile.email.map(|email| view! {
                        <a class=css::contactLink href=format!("mailto:{}", email)>
                            <Icon icon=ic::MAIL />
                            "Email"
                        </a>
                    })}
                    {profile.phone.map(|phone| view! {
                        <a class=css::contactLink href=format!("tel:{}", phone)>
                            <Icon icon=ic::PHONE />
                            "Call"
                        </a>
                    })}
                    <SocialLinks
                        links=profile.sociallinks
                        container_class=css::socials
                        link_class=css::socialLink
                    />
                </div>
                {href.map(|href| view! {
                    <a class=css::profileLink href=href>
                        "View Profile"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </a>
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(1, false), "Showing 1 attorney");
        assert_eq!(results_summary(0, true), "Showing 0 attorneys with applied filters");
        assert_eq!(results_summary(12, false), "Showing 12 attorneys");
    }
}
