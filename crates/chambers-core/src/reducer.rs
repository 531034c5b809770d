//! Command reducer for a filterable, paged directory view.
//!
//! UI events become [`Command`]s, folded through [`reduce`] into the next
//! [`ViewState`]. Anything time-based comes back as an [`Effect`] for the
//! host to schedule, which keeps the fold deterministic and testable without
//! a renderer or a clock.

use std::time::Duration;

use crate::carousel::{Carousel, Navigation, PageSize};
use crate::directory::{Entity, FilterState, visible_cloned};

/// User or timer input to a directory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    JumpTo(usize),
    SetQuery(String),
    ToggleCategory(String),
    /// Resets query and selection in one step.
    Clear,
    /// The transition timer for `epoch` fired.
    Release(u64),
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send `Command::Release(epoch)` after `after` has elapsed.
    ScheduleRelease { epoch: u64, after: Duration },
}

/// Filter plus carousel over a fixed entity list.
///
/// The carousel always pages over the entities that pass the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    entities: Vec<T>,
    filter: FilterState,
    carousel: Carousel<T>,
    transition: Duration,
}

/// Outcome of one reducer step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub state: ViewState<T>,
    pub effect: Option<Effect>,
}

impl<T: Entity + Clone> ViewState<T> {
    /// Creates an unfiltered view on page 0.
    ///
    /// `transition` is how long each page change holds the navigation lock.
    pub fn new(entities: Vec<T>, page_size: PageSize, transition: Duration) -> Self {
        let carousel = Carousel::new(entities.clone(), page_size);
        Self {
            entities,
            filter: FilterState::new(),
            carousel,
            transition,
        }
    }

    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    /// Entities passing the current filter, in source order.
    pub fn visible(&self) -> &[T] {
        self.carousel.items()
    }

    /// Items on the current carousel page.
    pub fn current_items(&self) -> &[T] {
        self.carousel.current_items()
    }

    /// Swaps in a freshly fetched entity list, keeping filter and page.
    pub fn replace_entities(mut self, entities: Vec<T>) -> Self {
        self.entities = entities;
        self.refilter();
        self
    }

    fn refilter(&mut self) {
        let visible = visible_cloned(&self.entities, &self.filter);
        self.carousel.set_items(visible);
    }

    fn navigated(&self, nav: Navigation) -> Option<Effect> {
        nav.epoch().map(|epoch| Effect::ScheduleRelease {
            epoch,
            after: self.transition,
        })
    }
}

/// Folds one command into the view state.
pub fn reduce<T: Entity + Clone>(mut state: ViewState<T>, command: Command) -> Step<T> {
    let effect = match command {
        Command::Next => {
            let nav = state.carousel.next();
            state.navigated(nav)
        }
        Command::Prev => {
            let nav = state.carousel.prev();
            state.navigated(nav)
        }
        Command::JumpTo(index) => {
            let nav = state.carousel.jump_to(index);
            state.navigated(nav)
        }
        Command::SetQuery(query) => {
            state.filter.set_query(query);
            state.refilter();
            None
        }
        Command::ToggleCategory(category) => {
            state.filter.toggle(&category);
            state.refilter();
            None
        }
        Command::Clear => {
            state.filter.clear();
            state.refilter();
            None
        }
        Command::Release(epoch) => {
            state.carousel.release(epoch);
            None
        }
    };

    Step { state, effect }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Area(&'static str, &'static str);

    impl Entity for Area {
        fn name(&self) -> Option<&str> {
            Some(self.0)
        }

        fn category(&self) -> Option<&str> {
            Some(self.1)
        }
    }

    const TRANSITION: Duration = Duration::from_millis(500);

    fn areas() -> Vec<Area> {
        vec![
            Area("Conveyancing", "Property"),
            Area("Land Disputes", "Property"),
            Area("Mergers", "Corporate"),
            Area("Employment", "Corporate"),
            Area("Family Law", "Private Client"),
        ]
    }

    #[test]
    fn test_navigation_requests_release() {
        let state = ViewState::new(areas(), PageSize::new(2), TRANSITION);
        let step = reduce(state, Command::Next);

        assert_eq!(step.state.carousel().current_page(), 1);
        assert_eq!(
            step.effect,
            Some(Effect::ScheduleRelease {
                epoch: 0,
                after: TRANSITION
            })
        );
    }

    #[test]
    fn test_locked_navigation_has_no_effect() {
        let state = ViewState::new(areas(), PageSize::new(2), TRANSITION);
        let step = reduce(state, Command::Next);
        let step = reduce(step.state, Command::Next);

        assert_eq!(step.state.carousel().current_page(), 1);
        assert_eq!(step.effect, None);
    }

    #[test]
    fn test_filter_feeds_carousel() {
        let state = ViewState::new(areas(), PageSize::new(2), TRANSITION);
        let step = reduce(state, Command::ToggleCategory("Corporate".into()));

        let names: Vec<_> = step.state.current_items().iter().map(|a| a.0).collect();
        assert_eq!(names, vec!["Mergers", "Employment"]);
        assert_eq!(step.state.carousel().page_count(), 1);
    }

    #[test]
    fn test_clear_restores_full_list() {
        let state = ViewState::new(areas(), PageSize::new(2), TRANSITION);
        let state = reduce(state, Command::SetQuery("law".into())).state;
        let state = reduce(state, Command::ToggleCategory("Property".into())).state;
        assert!(state.visible().is_empty());

        let state = reduce(state, Command::Clear).state;
        assert!(!state.filter().is_active());
        assert_eq!(state.visible(), areas().as_slice());
    }

    #[test]
    fn test_replace_entities_clamps_page() {
        let state = ViewState::new(areas(), PageSize::new(2), TRANSITION);
        let step = reduce(state, Command::JumpTo(2));
        let state = reduce(step.state, Command::Release(0)).state;
        assert_eq!(state.carousel().current_page(), 2);

        let state = state.replace_entities(vec![Area("Tax", "Corporate")]);
        assert_eq!(state.carousel().current_page(), 0);
        assert_eq!(state.current_items().len(), 1);
    }
}
