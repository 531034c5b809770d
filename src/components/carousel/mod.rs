//! Carousel navigation controls.
//!
//! Previous/next buttons and one dot per page. Renders nothing for a single
//! page. Buttons are disabled while a transition holds the lock.

use chambers_core::Command;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/carousel/carousel.module.css");

#[component]
pub fn CarouselControls(
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] locked: Signal<bool>,
    on_command: Callback<Command>,
    /// Light controls for dark sections.
    #[prop(optional)]
    inverted: bool,
) -> impl IntoView {
    let container_class = if inverted {
        format!("{} {}", css::controls, css::inverted)
    } else {
        css::controls.to_string()
    };

    view! {
        <Show when=move || { page_count.get() > 1 }>
            <div class=container_class.clone()>
                <button
                    class=css::arrow
                    aria-label="Previous page"
                    disabled=move || locked.get()
                    on:click=move |_| on_command.run(Command::Prev)
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                <div class=css::dots>
                    {move || {
                        let current = current_page.get();
                        (0..page_count.get())
                            .map(|index| {
                                let class = if index == current {
                                    format!("{} {}", css::dot, css::dotActive)
                                } else {
                                    css::dot.to_string()
                                };
                                view! {
                                    <button
                                        class=class
                                        aria-label=format!("Go to slide {}", index + 1)
                                        aria-current=(index == current).then_some("true")
                                        disabled=move || locked.get()
                                        on:click=move |_| on_command.run(Command::JumpTo(index))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    class=css::arrow
                    aria-label="Next page"
                    disabled=move || locked.get()
                    on:click=move |_| on_command.run(Command::Next)
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </Show>
    }
}
