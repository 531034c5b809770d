//! Custom hooks shared by the block components.
//!
//! - [`use_directory_view`] - filter + carousel state driven by [`Command`]s
//! - [`use_timer`] - a one-shot timer owned by the calling component

use std::time::Duration;

use chambers_core::{Command, Effect, Entity, PageSize, Step, ViewState, reduce};
use leptos::prelude::*;

use crate::config::carousel::TRANSITION_MS;
use crate::utils::TimerSlot;

/// Timer slot owned by the current reactive owner.
///
/// `gloo` timeouts are not `Send`, so the slot lives in local storage. The
/// slot is dropped with its owner, which clears any pending timeout.
pub type LocalTimer = StoredValue<TimerSlot, LocalStorage>;

/// Create a timer slot tied to the calling component's lifetime.
pub fn use_timer() -> LocalTimer {
    StoredValue::new_local(TimerSlot::new())
}

/// Reactive handle to a filterable, paged directory.
///
/// Every UI event goes through [`DirectoryView::dispatch`]; the transition
/// lock is released by a timer scheduled from the reducer's effect.
pub struct DirectoryView<T: Send + Sync + 'static> {
    state: RwSignal<ViewState<T>>,
    timer: LocalTimer,
}

impl<T: Send + Sync + 'static> Clone for DirectoryView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DirectoryView<T> {}

impl<T> DirectoryView<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    /// Fold one command into the view, scheduling any requested release.
    pub fn dispatch(&self, command: Command) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let Step { state, effect } = reduce(current, command);
        if self.state.try_set(state).is_some() {
            // owner already disposed
            return;
        }

        if let Some(Effect::ScheduleRelease { epoch, after }) = effect {
            let view = *self;
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            self.timer.try_update_value(|slot| {
                slot.schedule_once(millis, move || view.dispatch(Command::Release(epoch)));
            });
        }
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn page_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.carousel().page_count()))
    }

    pub fn current_page(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.carousel().current_page()))
    }

    pub fn is_transitioning(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.carousel().is_transitioning()))
    }

    /// Items on the current page.
    pub fn current_items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current_items().to_vec()))
    }
}

/// Create a directory view over `entities`, `page_size` per page.
pub fn use_directory_view<T>(entities: Vec<T>, page_size: usize) -> DirectoryView<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    let transition = Duration::from_millis(u64::from(TRANSITION_MS));
    DirectoryView {
        state: RwSignal::new(ViewState::new(
            entities,
            PageSize::new(page_size),
            transition,
        )),
        timer: use_timer(),
    }
}
