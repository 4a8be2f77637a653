use std::cell::RefCell;
use std::rc::Rc;
use verdant_ui::core::control::{
    ControlMode, Controllable, ModeLatch, PendingValue, resolve_value,
};
use verdant_ui::core::disclosure::{Disclosure, DisclosureEvent, SurfaceKind};
use verdant_ui::core::floating::{Placement, Rect, Viewport, compute_position};
use verdant_ui::core::outside::is_outside_interaction;
use verdant_ui::core::pagination::{ListFooter, ListView, PageStatus, flatten_pages};
use verdant_ui::core::selection::{is_commit_key, label_for, toggle_value};
use verdant_ui::core::toast::ToastDraft;
use verdant_ui::store::{ConfirmDialogStore, ToastStore};
use verdant_ui::{UiConfig, UiError};
use yew::Callback;

fn run(state: Disclosure, kind: SurfaceKind, events: &[DisclosureEvent]) -> (Disclosure, usize) {
    let mut transitions = 0;
    let mut current = state;
    for event in events {
        if let Some(next) = current.transition(kind, *event) {
            current = next;
            transitions += 1;
        }
    }
    (current, transitions)
}

#[test]
fn single_select_menu_opens_commits_and_closes() {
    let (state, transitions) = run(
        Disclosure::Closed,
        SurfaceKind::SingleSelectMenu,
        &[
            DisclosureEvent::TriggerActivated,
            DisclosureEvent::Escape,
            DisclosureEvent::SelectionCommitted,
        ],
    );
    assert_eq!(state, Disclosure::Closed);
    assert_eq!(transitions, 2);
}

#[test]
fn multi_select_stays_open_while_building_selection() {
    let options = [("red", "Red"), ("green", "Green"), ("blue", "Blue")];
    let mut state = Disclosure::Closed
        .apply(SurfaceKind::MultiSelectMenu, DisclosureEvent::TriggerActivated);
    let mut selected: Vec<&str> = Vec::new();

    for pick in ["blue", "red", "blue", "green"] {
        selected = toggle_value(&selected, &pick);
        state = state.apply(SurfaceKind::MultiSelectMenu, DisclosureEvent::SelectionCommitted);
        assert!(state.is_open());
    }
    assert_eq!(selected, vec!["red", "green"]);

    let labels: Vec<&str> = selected.iter().map(|v| label_for(&options, v)).collect();
    assert_eq!(labels, vec!["Red", "Green"]);

    let outside = is_outside_interaction([Some(false), Some(false)]);
    assert!(outside);
    state = state.apply(SurfaceKind::MultiSelectMenu, DisclosureEvent::OutsideInteraction);
    assert!(!state.is_open());
}

#[test]
fn controlled_multi_select_proposes_from_caller_value() {
    let mode = ControlMode::Controlled;
    let held = vec!["a", "b"];
    let mut pending = PendingValue::new(held.clone());
    let mut emitted = Vec::new();

    for pick in ["c", "d", "a"] {
        let next = toggle_value(pending.base(mode), &pick);
        emitted.push(pending.propose(mode, next));
        // The caller caps the selection at two values and keeps `held`.
        pending.sync(held.clone());
    }

    assert_eq!(
        emitted,
        vec![vec!["a", "b", "c"], vec!["a", "b", "d"], vec!["b"]]
    );
}

#[test]
fn guarded_dialog_keeps_requesting_close() {
    let mode = ControlMode::Controlled;
    let mut pending = PendingValue::new(Disclosure::Open);
    let mut requests = 0;

    for event in [DisclosureEvent::Escape, DisclosureEvent::OutsideInteraction] {
        let next = pending.base(mode).transition(SurfaceKind::Dialog, event);
        if let Some(next) = next {
            assert_eq!(pending.propose(mode, next), Disclosure::Closed);
            requests += 1;
        }
    }
    assert_eq!(requests, 2);
}

#[test]
fn uncontrolled_dialog_burst_closes_once() {
    let mode = ControlMode::Uncontrolled;
    let mut pending = PendingValue::new(Disclosure::Open);
    let mut requests = 0;

    for _ in 0..3 {
        let next = pending.base(mode).transition(SurfaceKind::Dialog, DisclosureEvent::Escape);
        if let Some(next) = next {
            pending.propose(mode, next);
            requests += 1;
        }
    }
    assert_eq!(requests, 1);
}

#[test]
fn unmounted_menu_never_reports_outside_interaction() {
    assert!(!is_outside_interaction([Some(false), None]));
}

#[test]
fn dialog_escape_closes_once() {
    let (state, transitions) = run(
        Disclosure::Open,
        SurfaceKind::Dialog,
        &[DisclosureEvent::Escape, DisclosureEvent::Escape, DisclosureEvent::Escape],
    );
    assert_eq!(state, Disclosure::Closed);
    assert_eq!(transitions, 1);
}

#[test]
fn keyboard_commit_keys() {
    assert!(is_commit_key("Enter"));
    assert!(is_commit_key(" "));
    assert!(!is_commit_key("Tab"));
}

#[test]
fn controlled_widget_ignores_switch_to_uncontrolled() {
    let mut latch = ModeLatch::default();
    let controlled = Controllable::controlled(true, Callback::noop());
    let mode = latch
        .observe("Dialog", controlled.mode())
        .expect("first mode pins");
    assert_eq!(mode, ControlMode::Controlled);

    let switched: Controllable<bool> = Controllable::uncontrolled(false);
    let err = latch
        .observe("Dialog", switched.mode())
        .expect_err("switch rejected");
    assert!(matches!(err, UiError::ModeSwitched { widget: "Dialog", .. }));

    let shown = resolve_value(ControlMode::Controlled, &switched, &false, Some(&true));
    assert!(shown);
}

#[test]
fn dropdown_panel_flips_near_viewport_bottom() {
    let config = UiConfig::default();
    let trigger = Rect {
        top: 560.0,
        left: 40.0,
        bottom: 592.0,
        width: 180.0,
    };
    let viewport = Viewport {
        height: 640.0,
        scroll_x: 0.0,
        scroll_y: 0.0,
    };
    let pos = compute_position(trigger, 120.0, viewport, config.floating_gap);
    assert_eq!(pos.placement, Placement::Above);
    assert!((pos.top - (560.0 - 120.0 - 4.0)).abs() < f64::EPSILON);
    assert!((pos.min_width - 180.0).abs() < f64::EPSILON);
}

#[test]
fn toast_timers_run_independently() {
    let mut store = ToastStore::default();
    let short = store.add_toast(
        ToastDraft::titled("Saved").with_duration_ms(3_000),
        10_000.0,
    );
    let long = store.add_toast(ToastDraft::titled("Uploaded"), 10_000.0);

    let delays: Vec<_> = store
        .queue
        .entries()
        .iter()
        .map(|entry| (entry.id, entry.remaining_ms(12_999.0)))
        .collect();
    assert_eq!(delays, vec![(short, 1), (long, 2_001)]);
    let saved = &store.queue.entries()[0];
    assert_eq!(saved.remaining_ms(13_001.0), 0);

    assert!(store.remove_toast(short));
    assert!(!store.remove_toast(short));
    assert_eq!(store.queue.entries()[0].id, long);
    assert!(store.remove_toast(long));
    assert!(store.queue.is_empty());
}

#[test]
fn confirm_store_runs_action_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut store = ConfirmDialogStore::default();
    let sink = log.clone();
    store.set_confirm(
        "Delete item",
        "This cannot be undone.",
        Callback::from(move |()| sink.borrow_mut().push("deleted")),
    );
    assert!(store.dialog.open);

    for action in [store.confirm(), store.confirm()].into_iter().flatten() {
        action.emit(());
    }
    assert_eq!(*log.borrow(), vec!["deleted"]);
    assert!(!store.dialog.open);
    assert!(store.dialog.title.is_empty());
}

#[test]
fn confirm_action_can_open_a_follow_up_prompt() {
    let store = Rc::new(RefCell::new(ConfirmDialogStore::default()));
    let chained = store.clone();
    store.borrow_mut().set_confirm(
        "Delete item",
        "This cannot be undone.",
        Callback::from(move |()| {
            chained
                .borrow_mut()
                .set_confirm("Undo", "Restore the item?", Callback::noop());
        }),
    );

    let action = store.borrow_mut().confirm();
    if let Some(action) = action {
        action.emit(());
    }

    let store = store.borrow();
    assert!(store.dialog.open);
    assert_eq!(store.dialog.title, "Undo");
    assert_eq!(store.dialog.description, "Restore the item?");
}

#[test]
fn pagination_walks_from_loading_to_end() {
    let mut status = PageStatus {
        is_loading: true,
        has_next_page: true,
        ..PageStatus::default()
    };
    assert_eq!(status.view(0), ListView::Loading);
    assert!(!status.gate().should_observe());

    let pages = vec![vec![1, 2, 3], vec![4, 5]];
    let items = flatten_pages(&pages);
    status.is_loading = false;
    assert_eq!(status.view(items.len()), ListView::Items);
    assert_eq!(status.footer(), ListFooter::Idle);
    assert!(status.gate().should_fetch(Some(true)));

    status.is_fetching_next_page = true;
    assert_eq!(status.footer(), ListFooter::FetchingMore);
    assert!(!status.gate().should_fetch(Some(true)));

    status.is_fetching_next_page = false;
    status.has_next_page = false;
    assert_eq!(status.footer(), ListFooter::End);
    assert!(!status.gate().should_observe());
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[test]
fn config_overrides_feed_observer_options() -> Result<(), UiError> {
    let config = UiConfig::from_json(r#"{"observer_threshold":0.5,"observer_root_margin":"64px"}"#)?;
    let options = config.observer_options()?;
    assert!((options.threshold() - 0.5).abs() < f64::EPSILON);
    assert_eq!(options.root_margin(), "64px");
    Ok(())
}
