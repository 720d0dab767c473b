//! Paginated search orchestration.
//!
//! The state transitions live in [`SearchState`]; these functions perform the
//! fetch the state machine asks for and feed the result back. A failed fetch
//! is logged and dropped so the previously displayed results stay untouched,
//! which leaves the caller with nothing to handle.

use crate::domain::search::SearchFetch;
use crate::domain::session::PortalSession;
use crate::gateway::{MedicineApi, MedicineSearchQuery};

/// Runs a search from page one, as triggered by the search button or a query
/// change. An empty query clears the results without calling the gateway.
pub async fn run_search<G>(gateway: &G, session: &mut PortalSession, query: &str)
where
    G: MedicineApi + ?Sized,
{
    if let Some(fetch) = session.search.begin_search(query) {
        fetch_page(gateway, session, fetch).await;
    }
}

/// Advances to the next result page; no-op when already at the last page.
pub async fn next_page<G>(gateway: &G, session: &mut PortalSession)
where
    G: MedicineApi + ?Sized,
{
    if let Some(fetch) = session.search.next_page() {
        fetch_page(gateway, session, fetch).await;
    }
}

/// Moves back one result page; no-op when already at page one.
pub async fn prev_page<G>(gateway: &G, session: &mut PortalSession)
where
    G: MedicineApi + ?Sized,
{
    if let Some(fetch) = session.search.prev_page() {
        fetch_page(gateway, session, fetch).await;
    }
}

async fn fetch_page<G>(gateway: &G, session: &mut PortalSession, fetch: SearchFetch)
where
    G: MedicineApi + ?Sized,
{
    let query = MedicineSearchQuery::new(&fetch.query).page(fetch.page);

    match gateway.search_medicines(query).await {
        Ok((total_count, medicines)) => {
            let names = medicines.into_iter().map(|m| m.name).collect();
            if !session.search.apply(fetch.seq, total_count, names) {
                log::debug!("Discarded stale search response (seq {})", fetch.seq);
            }
        }
        Err(err) => {
            // Search failures are not surfaced; prior results stay as-is.
            log::error!("Medicine search failed: {err}");
        }
    }
}
