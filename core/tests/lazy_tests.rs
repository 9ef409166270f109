use std::cell::Cell;

use enclose::{
    Deferred, NameList, NameListError, Removal, deferred, eval_explicit, eval_lazy, eval_when,
};

fn names(list: &NameList) -> Vec<&str> {
    list.iter().collect()
}

// ============================================================================
// Autoclosure Form
// ============================================================================

#[test]
fn test_eval_lazy_removes_first() {
    let mut friends = NameList::kakao_friends();

    let removed = eval_lazy!(friends.remove_first()).unwrap();

    assert_eq!(removed, "muzi");
    assert_eq!(names(&friends), vec!["ryon", "apeach", "neo", "tube", "con"]);
}

#[test]
fn test_eval_lazy_then_remove_last() {
    let mut friends = NameList::kakao_friends();

    assert_eq!(eval_lazy!(friends.remove_first()).unwrap(), "muzi");
    assert_eq!(eval_lazy!(friends.remove_last()).unwrap(), "con");
    assert_eq!(names(&friends), vec!["ryon", "apeach", "neo", "tube"]);
}

#[test]
fn test_deferred_does_not_run_at_construction() {
    let mut friends = NameList::kakao_friends();

    {
        let pending = deferred!(friends.remove_first());
        // Dropped without being forced
        drop(pending);
    }

    assert_eq!(friends.len(), 6);
}

#[test]
fn test_eval_lazy_runs_exactly_once() {
    let calls = Cell::new(0);

    let value = eval_lazy!({
        calls.set(calls.get() + 1);
        "evaluated"
    });

    assert_eq!(value, "evaluated");
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// Explicit Closure Form
// ============================================================================

#[test]
fn test_eval_explicit_removes_first() {
    let mut friends = NameList::kakao_friends();

    let removed = eval_explicit(|| friends.remove_first()).unwrap();

    assert_eq!(removed, "muzi");
    assert_eq!(names(&friends), vec!["ryon", "apeach", "neo", "tube", "con"]);

    let last = eval_explicit(|| friends.remove_last()).unwrap();
    assert_eq!(last, "con");
    assert_eq!(names(&friends), vec!["ryon", "apeach", "neo", "tube"]);
}

#[test]
fn test_both_forms_agree() {
    let mut lazy = NameList::kakao_friends();
    let mut explicit = NameList::kakao_friends();

    assert_eq!(
        eval_lazy!(lazy.remove_first()),
        eval_explicit(|| explicit.remove_first())
    );
    assert_eq!(lazy, explicit);
}

#[test]
fn test_deferred_built_by_hand() {
    let mut friends = NameList::kakao_friends();
    let removed = eval_lazy(Deferred::new(|| friends.remove_last())).unwrap();
    assert_eq!(removed, "con");
}

// ============================================================================
// Conditional Forcing
// ============================================================================

#[test]
fn test_eval_when_false_never_mutates() {
    let mut friends = NameList::kakao_friends();

    let removed = eval_when(false, deferred!(friends.remove_first()));

    assert!(removed.is_none());
    assert_eq!(friends, NameList::kakao_friends());
}

#[test]
fn test_eval_when_true_mutates_once() {
    let mut friends = NameList::kakao_friends();

    let removed = eval_when(true, deferred!(friends.remove_first()));

    assert_eq!(removed, Some(Ok("muzi".to_string())));
    assert_eq!(friends.len(), 5);
}

// ============================================================================
// Empty List
// ============================================================================

#[test]
fn test_remove_from_empty_is_an_error() {
    let mut empty = NameList::new();

    assert_eq!(
        eval_lazy!(empty.remove_first()),
        Err(NameListError::Empty { op: Removal::First })
    );
    assert_eq!(
        eval_explicit(|| empty.remove_last()),
        Err(NameListError::Empty { op: Removal::Last })
    );
}

#[test]
fn test_drain_until_empty() {
    let mut friends = NameList::kakao_friends();

    for _ in 0..6 {
        assert!(eval_explicit(|| friends.remove_first()).is_ok());
    }

    assert!(friends.is_empty());
    assert!(friends.remove_first().is_err());
    assert!(friends.remove_last().is_err());
}
