//! Practice areas grouped by department.
//!
//! Department chips narrow the list through the same filter engine the team
//! directory uses. A modal lists every department and its areas at once.

use chambers_core::content::{PracticeArea, PracticeAreasBlock};
use chambers_core::{Entity, FilterState, compute_visible, unique_categories};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/practice_areas.module.css");

/// Heading for areas with no department.
const UNGROUPED: &str = "General Practice";

/// Groups areas by department in order of first appearance.
fn group_by_department(areas: &[&PracticeArea]) -> Vec<(String, Vec<PracticeArea>)> {
    let mut groups: Vec<(String, Vec<PracticeArea>)> = Vec::new();
    for area in areas {
        let department = area
            .category()
            .filter(|d| !d.is_empty())
            .unwrap_or(UNGROUPED);
        match groups.iter_mut().find(|(name, _)| name == department) {
            Some((_, members)) => members.push((*area).clone()),
            None => groups.push((department.to_string(), vec![(*area).clone()])),
        }
    }
    groups
}

#[component]
pub fn PracticeAreas(block: PracticeAreasBlock) -> impl IntoView {
    let departments = unique_categories(&block.practice_areas);
    let areas = StoredValue::new(block.practice_areas);
    let filter = RwSignal::new(FilterState::new());
    let modal_open = RwSignal::new(false);

    let groups = Memo::new(move |_| {
        filter.with(|f| areas.with_value(|all| group_by_department(&compute_visible(all, f))))
    });
    let all_groups = Memo::new(move |_| {
        areas.with_value(|all| group_by_department(&all.iter().collect::<Vec<_>>()))
    });

    let chip_class = move |active: bool| {
        if active {
            format!("{} {}", css::chip, css::chipActive)
        } else {
            css::chip.to_string()
        }
    };

    let chips = departments
        .into_iter()
        .map(|department| {
            let selected = department.clone();
            let toggled = department.clone();
            view! {
                <button
                    class=move || chip_class(filter.with(|f| f.is_selected(&selected)))
                    on:click=move |_| filter.update(|f| f.toggle(&toggled))
                >
                    {department}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class=css::section>
            <div class=css::inner>
                <header class=css::header>
                    <h2 class=css::heading>"Practice Areas"</h2>
                    <div class=css::rule />
                    <p class=css::lead>
                        "Explore our specialized legal services across various domains"
                    </p>
                </header>

                <div class=css::toolbar>
                    <div class=css::chips>
                        <button
                            class=move || chip_class(filter.with(|f| !f.is_active()))
                            on:click=move |_| filter.update(FilterState::clear)
                        >
                            "All"
                        </button>
                        {chips}
                    </div>
                    <button class=css::browse on:click=move |_| modal_open.set(true)>
                        <Icon icon=ic::BRIEFCASE />
                        "All Departments"
                    </button>
                </div>

                {move || {
                    let groups = groups.get();
                    if groups.is_empty() {
                        view! { <p class=css::empty>"No practice areas found."</p> }.into_any()
                    } else {
                        groups
                            .into_iter()
                            .map(|(department, members)| view! {
                                <div class=css::group>
                                    <h3 class=css::groupHeading>{department.clone()}</h3>
                                    <div class=css::grid>
                                        {members
                                            .into_iter()
                                            .map(|area| view! {
                                                <AreaCard area=area department=department.clone() />
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || modal_open.get()>
                <DepartmentModal
                    groups=all_groups
                    on_close=Callback::new(move |_| modal_open.set(false))
                />
            </Show>
        </section>
    }
}

#[component]
fn AreaCard(area: PracticeArea, department: String) -> impl IntoView {
    let title = area.title.unwrap_or_default();
    view! {
        <a class=css::card href=AppRoute::PracticeAreas.to_hash()>
            <h4 class=css::cardTitle>{title}</h4>
            <div class=css::cardRule />
            <span class=css::cardBadge>{department}</span>
        </a>
    }
}

#[component]
fn DepartmentModal(
    #[prop(into)] groups: Signal<Vec<(String, Vec<PracticeArea>)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    // Focus the dialog so Escape reaches it
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = dialog_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div
                node_ref=dialog_ref
                class=css::modal
                role="dialog"
                aria-modal="true"
                aria-label="All departments"
                tabindex="-1"
                on:keydown=handle_keydown
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::modalHeader>
                    <h3 class=css::modalTitle>"Departments"</h3>
                    <button
                        class=css::close
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::modalBody>
                    {move || {
                        groups
                            .get()
                            .into_iter()
                            .map(|(department, members)| view! {
                                <div class=css::modalGroup>
                                    <h4 class=css::modalDepartment>{department}</h4>
                                    <ul class=css::modalList>
                                        {members
                                            .into_iter()
                                            .filter_map(|a| a.title)
                                            .map(|title| view! { <li>{title}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chambers_core::content::Department;

    fn area(title: &str, department: Option<&str>) -> PracticeArea {
        PracticeArea {
            title: Some(title.to_string()),
            department: department.map(|d| Department {
                title: Some(d.to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_department_keeps_first_seen_order() {
        let areas = vec![
            area("Mergers", Some("Corporate")),
            area("Land Disputes", Some("Litigation")),
            area("Banking", Some("Corporate")),
            area("Pro Bono", None),
        ];
        let refs: Vec<&PracticeArea> = areas.iter().collect();
        let groups = group_by_department(&refs);

        let names: Vec<&str> = groups.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(names, vec!["Corporate", "Litigation", UNGROUPED]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].title.as_deref(), Some("Banking"));
    }

    #[test]
    fn test_group_by_department_empty() {
        assert!(group_by_department(&[]).is_empty());
    }
}
