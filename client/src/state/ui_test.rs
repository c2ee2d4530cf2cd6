use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("saved");
    let second = state.error("failed to save job");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn levels_are_preserved() {
    let mut state = ToastState::default();
    state.success("Client added successfully!");
    state.error("Failed to add client.");
    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert!(second > first);
}
