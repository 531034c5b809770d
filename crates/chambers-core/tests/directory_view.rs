//! End-to-end behaviour of the filter + carousel view through the reducer.

use std::collections::BTreeSet;
use std::time::Duration;

use chambers_core::content::AttorneyProfile;
use chambers_core::{
    Carousel, Command, Effect, FilterState, PageSize, ViewState, compute_visible, reduce,
    toggle_category,
};

const TRANSITION: Duration = Duration::from_millis(500);

fn profile(name: &str, role: &str) -> AttorneyProfile {
    AttorneyProfile {
        name: Some(name.to_string()),
        slug: Some(name.to_lowercase().replace(' ', "-")),
        role: Some(role.to_string()),
        ..Default::default()
    }
}

fn two_member_roster() -> Vec<AttorneyProfile> {
    vec![profile("Jane Doe", "Partner"), profile("Sam Lee", "Associate")]
}

fn large_roster(n: usize) -> Vec<AttorneyProfile> {
    (0..n)
        .map(|i| {
            let role = if i % 2 == 0 { "Partner" } else { "Associate" };
            profile(&format!("Member {i}"), role)
        })
        .collect()
}

fn names(items: &[AttorneyProfile]) -> Vec<&str> {
    items.iter().map(|p| p.display_name()).collect()
}

/// Applies commands, releasing every transition immediately.
fn run(mut state: ViewState<AttorneyProfile>, commands: Vec<Command>) -> ViewState<AttorneyProfile> {
    for command in commands {
        let step = reduce(state, command);
        state = step.state;
        if let Some(Effect::ScheduleRelease { epoch, .. }) = step.effect {
            state = reduce(state, Command::Release(epoch)).state;
        }
    }
    state
}

#[test]
fn test_search_by_lowercase_name() {
    let state = ViewState::new(two_member_roster(), PageSize::new(3), TRANSITION);
    let state = run(state, vec![Command::SetQuery("jane".into())]);
    assert_eq!(names(state.visible()), vec!["Jane Doe"]);
}

#[test]
fn test_filter_by_selected_role() {
    let state = ViewState::new(two_member_roster(), PageSize::new(3), TRANSITION);
    let state = run(state, vec![Command::ToggleCategory("Associate".into())]);
    assert_eq!(names(state.visible()), vec!["Sam Lee"]);
}

#[test]
fn test_filter_idempotence_and_identity() {
    let roster = large_roster(9);

    let identity = compute_visible(&roster, &FilterState::new());
    assert_eq!(identity.len(), roster.len());
    assert!(identity.iter().zip(&roster).all(|(a, b)| *a == b));

    let mut filter = FilterState::new();
    filter.set_query("member 1");
    filter.toggle("Associate");
    let once = compute_visible(&roster, &filter);
    let twice = compute_visible(&once, &filter);
    assert_eq!(once.len(), twice.len());
    assert!(once.iter().zip(&twice).all(|(a, b)| a == *b));
}

#[test]
fn test_toggle_twice_restores_selection() {
    let empty = BTreeSet::new();
    assert_eq!(toggle_category(&toggle_category(&empty, "Partner"), "Partner"), empty);
}

#[test]
fn test_next_wraps_after_last_page() {
    let mut state = ViewState::new(large_roster(9), PageSize::new(3), TRANSITION);
    let mut pages = Vec::new();
    for _ in 0..3 {
        state = run(state, vec![Command::Next]);
        pages.push(state.carousel().current_page());
    }
    assert_eq!(pages, vec![1, 2, 0]);
}

#[test]
fn test_transition_lock_until_release() {
    let state = ViewState::new(large_roster(9), PageSize::new(3), TRANSITION);

    let first = reduce(state, Command::Next);
    assert_eq!(first.state.carousel().current_page(), 1);
    let Some(Effect::ScheduleRelease { epoch, after }) = first.effect else {
        panic!("navigation should schedule a release");
    };
    assert_eq!(after, TRANSITION);

    // Second press inside the window is dropped.
    let second = reduce(first.state, Command::Next);
    assert_eq!(second.state.carousel().current_page(), 1);
    assert_eq!(second.effect, None);

    // Timer fires, then navigation works again.
    let released = reduce(second.state, Command::Release(epoch)).state;
    let third = reduce(released, Command::Next);
    assert_eq!(third.state.carousel().current_page(), 2);
}

#[test]
fn test_page_clamped_when_list_shrinks() {
    let mut carousel = Carousel::new((0..10).collect::<Vec<_>>(), PageSize::new(3));
    assert_eq!(carousel.page_count(), 4);
    let epoch = carousel.jump_to(3).epoch().unwrap();
    carousel.release(epoch);
    assert_eq!(carousel.current_page(), 3);

    carousel.set_items(vec![10, 11]);
    assert_eq!(carousel.current_page(), 0);
    assert_eq!(carousel.current_items(), &[10, 11]);
}

#[test]
fn test_filter_shrinking_list_clamps_page() {
    let state = ViewState::new(large_roster(10), PageSize::new(3), TRANSITION);
    let state = run(state, vec![Command::JumpTo(3)]);
    assert_eq!(state.carousel().current_page(), 3);

    let state = run(state, vec![Command::SetQuery("member 1".into())]);
    // "Member 1" only
    assert_eq!(state.carousel().current_page(), 0);
    assert_eq!(names(state.current_items()), vec!["Member 1"]);
}

#[test]
fn test_jump_to_last_short_page() {
    let state = ViewState::new(large_roster(7), PageSize::new(3), TRANSITION);
    assert_eq!(state.carousel().page_count(), 3);

    let state = run(state, vec![Command::JumpTo(2)]);
    assert_eq!(names(state.current_items()), vec!["Member 6"]);
}

#[test]
fn test_stale_index_after_filter_is_ignored() {
    let state = ViewState::new(large_roster(9), PageSize::new(3), TRANSITION);
    let state = run(state, vec![Command::ToggleCategory("Partner".into())]);
    assert_eq!(state.carousel().page_count(), 2);

    let step = reduce(state, Command::JumpTo(2));
    assert_eq!(step.effect, None);
    assert_eq!(step.state.carousel().current_page(), 0);
}

#[test]
fn test_clear_is_single_step() {
    let state = ViewState::new(two_member_roster(), PageSize::new(3), TRANSITION);
    let state = run(
        state,
        vec![
            Command::SetQuery("zzz".into()),
            Command::ToggleCategory("Partner".into()),
        ],
    );
    assert!(state.visible().is_empty());

    let step = reduce(state, Command::Clear);
    assert_eq!(step.state.filter(), &FilterState::new());
    assert_eq!(names(step.state.visible()), vec!["Jane Doe", "Sam Lee"]);
}
