use super::*;

#[test]
fn default_is_idle() {
    let cell: Remote<Vec<String>> = Remote::default();
    assert_eq!(cell, Remote::Idle);
    assert!(!cell.is_loading());
}

#[test]
fn loading_reports_is_loading() {
    let cell: Remote<u32> = Remote::Loading;
    assert!(cell.is_loading());
    assert!(cell.ready().is_none());
    assert!(cell.error().is_none());
}

#[test]
fn ok_result_becomes_ready() {
    let cell = Remote::from_result(Ok(vec![1, 2, 3]));
    assert_eq!(cell.ready(), Some(&vec![1, 2, 3]));
    assert!(!cell.is_loading());
}

#[test]
fn err_result_becomes_failed() {
    let cell: Remote<u32> = Remote::from_result(Err("record store unreachable".into()));
    assert_eq!(cell.error(), Some("record store unreachable"));
    assert!(cell.ready().is_none());
}
