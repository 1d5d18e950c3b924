// src/api/pagination.rs
//! Cursor-driven pagination helpers.
//!
//! Every paginated endpoint takes an optional start cursor and returns
//! one [`PaginatedList`]. These helpers follow `next_cursor` until the
//! service reports the end, using async closures directly.

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::{self, Stream};

use crate::error::Result;
use crate::model::PaginatedList;
use crate::types::StartCursor;

/// Fetches all pages of a listing and collects the results.
///
/// `fetch_fn` is called with `None` first, then with each cursor the
/// service hands back. `max_pages` caps the number of round trips.
pub async fn collect_all<T, F, Fut>(mut fetch_fn: F, max_pages: Option<u32>) -> Result<Vec<T>>
where
    F: FnMut(Option<StartCursor>) -> Fut,
    Fut: Future<Output = Result<PaginatedList<T>>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let page = fetch_fn(cursor).await?;
        cursor = page.next_page_cursor();
        all_items.extend(page.results);
        pages_fetched += 1;

        if cursor.is_none() {
            break;
        }
    }

    Ok(all_items)
}

/// Streams the items of a listing one by one, fetching pages lazily as
/// the consumer pulls past each page boundary.
pub fn stream_all<T, F, Fut>(fetch_fn: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Option<StartCursor>) -> Fut,
    Fut: Future<Output = Result<PaginatedList<T>>>,
{
    struct State<T, F> {
        fetch_fn: F,
        buffer: VecDeque<T>,
        cursor: Option<StartCursor>,
        exhausted: bool,
    }

    stream::try_unfold(
        State {
            fetch_fn,
            buffer: VecDeque::new(),
            cursor: None,
            exhausted: false,
        },
        |mut state| async move {
            loop {
                if let Some(item) = state.buffer.pop_front() {
                    return Ok(Some((item, state)));
                }
                if state.exhausted {
                    return Ok(None);
                }
                let page = (state.fetch_fn)(state.cursor.take()).await?;
                state.cursor = page.next_page_cursor();
                state.exhausted = state.cursor.is_none();
                state.buffer.extend(page.results);
            }
        },
    )
}
