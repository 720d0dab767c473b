use pharma_portal::domain::search::{PAGE_SIZE, SearchState};
use pharma_portal::domain::selection::SelectionList;
use pharma_portal::domain::types::{PatientTc, PrescriptionId, TypeConstraintError};

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("med-{i}")).collect()
}

/// Drives one search to a settled state with the given total count.
fn searched(query: &str, total_count: usize) -> SearchState {
    let mut state = SearchState::default();
    let fetch = state.begin_search(query).expect("non-empty query fetches");
    assert!(state.apply(fetch.seq, total_count, names(total_count.min(PAGE_SIZE))));
    state
}

#[test]
fn total_pages_is_ceiling_of_count_over_page_size() {
    for (count, pages) in [(0, 0), (1, 1), (9, 1), (10, 1), (11, 2), (25, 3), (30, 3)] {
        let mut state = SearchState::default();
        let fetch = state.begin_search("aspirin").unwrap();
        state.apply(fetch.seq, count, vec![]);
        assert_eq!(state.total_pages(), pages, "count {count}");
    }
}

#[test]
fn empty_query_fetches_nothing_and_clears_results() {
    let mut state = searched("aspirin", 25);
    assert!(!state.results.is_empty());

    assert!(state.begin_search("   ").is_none());
    assert!(state.results.is_empty());
    assert_eq!(state.total_count, 0);
    assert_eq!(state.current_page, 1);
    assert!(!state.has_next());
    assert!(!state.has_prev());
}

#[test]
fn manual_search_reissues_unchanged_query_from_page_one() {
    let mut state = searched("aspirin", 25);
    let fetch = state.next_page().unwrap();
    state.apply(fetch.seq, 25, names(10));
    assert_eq!(state.current_page, 2);

    let fetch = state.begin_search("aspirin").expect("re-issues the fetch");
    assert_eq!(fetch.page, 1);
    assert_eq!(state.current_page, 1);
}

#[test]
fn navigation_stays_within_page_bounds() {
    // 25 results, 10 per page: three pages.
    let mut state = searched("aspirin", 25);
    assert_eq!(state.total_pages(), 3);
    assert!(!state.has_prev());

    for expected in [2, 3] {
        let fetch = state.next_page().expect("next enabled");
        assert_eq!(fetch.page, expected);
        assert!(state.apply(fetch.seq, 25, names(if expected == 3 { 5 } else { 10 })));
    }

    // Page 3 of 3: next disabled, previous enabled.
    assert_eq!(state.current_page, 3);
    assert!(!state.has_next());
    assert!(state.has_prev());
    assert!(state.next_page().is_none());
    assert_eq!(state.current_page, 3);

    for expected in [2, 1] {
        let fetch = state.prev_page().expect("previous enabled");
        assert_eq!(fetch.page, expected);
        assert!(state.apply(fetch.seq, 25, names(10)));
    }

    assert!(!state.has_prev());
    assert!(state.prev_page().is_none());
    assert_eq!(state.current_page, 1);
}

#[test]
fn shrinking_total_clamps_current_page() {
    let mut state = searched("aspirin", 25);
    let fetch = state.next_page().unwrap();
    state.apply(fetch.seq, 25, names(10));
    let fetch = state.next_page().unwrap();

    // The catalog shrank while we were on page 3: 5 results fit on one page.
    assert!(state.apply(fetch.seq, 5, names(5)));
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.current_page, 1);
    assert!(!state.has_next());
    assert!(!state.has_prev());
}

#[test]
fn result_for_zero_matches_keeps_page_at_one() {
    let mut state = SearchState::default();
    let fetch = state.begin_search("nosuchmedicine").unwrap();
    assert!(state.apply(fetch.seq, 0, vec![]));
    assert_eq!(state.total_pages(), 0);
    assert_eq!(state.current_page, 1);
    assert!(!state.has_next());
    assert!(!state.has_prev());
}

#[test]
fn stale_responses_are_discarded() {
    let mut state = SearchState::default();
    let first = state.begin_search("aspirin").unwrap();
    let second = state.begin_search("ibuprofen").unwrap();
    assert!(second.seq > first.seq);

    // The response for the superseded query resolves late and must lose.
    assert!(!state.apply(first.seq, 25, names(10)));
    assert!(state.results.is_empty());
    assert_eq!(state.total_count, 0);

    assert!(state.apply(second.seq, 4, names(4)));
    assert_eq!(state.results, names(4));
}

#[test]
fn results_are_replaced_not_appended() {
    let mut state = searched("aspirin", 25);
    assert_eq!(state.results.len(), 10);

    let fetch = state.next_page().unwrap();
    state.apply(fetch.seq, 25, vec!["other".to_string()]);
    assert_eq!(state.results, vec!["other".to_string()]);
}

#[test]
fn selection_add_then_remove_last_is_identity() {
    let mut selection = SelectionList::default();
    selection.add("aspirin");
    selection.add("ibuprofen");
    let before = selection.clone();

    selection.add("aspirin"); // duplicates are allowed
    assert_eq!(selection.len(), 3);
    assert_eq!(selection.remove_last(), Some("aspirin".to_string()));
    assert_eq!(selection, before);
}

#[test]
fn selection_remove_last_on_empty_is_noop() {
    let mut selection = SelectionList::default();
    assert_eq!(selection.remove_last(), None);
    assert!(selection.is_empty());
}

#[test]
fn selection_keeps_insertion_order_and_duplicates() {
    let mut selection = SelectionList::default();
    for name in ["b", "a", "b"] {
        selection.add(name);
    }
    assert_eq!(selection.to_vec(), ["b", "a", "b"]);
}

#[test]
fn patient_tc_requires_eleven_digits() {
    assert!(PatientTc::new("12345678901").is_ok());
    assert!(PatientTc::new(" 12345678901 ").is_ok());
    assert_eq!(
        PatientTc::new("1234567890"),
        Err(TypeConstraintError::InvalidPatientTc)
    );
    assert_eq!(
        PatientTc::new("1234567890a"),
        Err(TypeConstraintError::InvalidPatientTc)
    );
    assert_eq!(PatientTc::new("  "), Err(TypeConstraintError::EmptyString));
}

#[test]
fn prescription_id_rejects_blank_values() {
    assert!(PrescriptionId::new("RX-1").is_ok());
    assert_eq!(
        PrescriptionId::new("   "),
        Err(TypeConstraintError::EmptyString)
    );
}
