//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::models::AppRoute;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. It is `Copy` because every field is a
/// signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route, kept in sync with the URL hash by the router.
    pub route: RwSignal<AppRoute>,
}

impl AppContext {
    /// Creates a context starting at the route in the current URL.
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the site in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #0b0b0b;
                    color: #f3f4f6;
                    font-family: Georgia, 'Times New Roman', serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #cb8547; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #9ca3af; margin-bottom: 2rem;">
                            "We could not display this page. Please try reloading."
                        </p>
                        <details style="
                            text-align: left;
                            background: #111827;
                            padding: 1rem;
                            border-radius: 6px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #9ca3af;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #fca5a5;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #cb8547;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
