//! The query executor facade.
//!
//! [`CompetitionStore`] is the only seam through which the HTTP layer reaches
//! the data store. Handlers receive it as `Arc<dyn CompetitionStore>`, which
//! lets tests substitute an in-memory implementation without touching any
//! global state.

use async_trait::async_trait;

use crate::error::Result;
use crate::filters::{EventFilter, ResultFilter};
use crate::models::{AthleteResult, Event, StatMetric};
use crate::pagination::PageWindow;

/// Read-only access to competition data.
///
/// Contract notes:
/// - Every implementation must parameterize its queries; filter values are
///   never interpolated into query text.
/// - `get_event` distinguishes absence (`Ok(None)`) from store failure
///   (`Err`); an identity miss is not an error at this layer.
/// - Count and fetch are independent round-trips. No transaction spans them,
///   so totals may drift from items under concurrent writes; callers accept
///   that.
/// - No implementation retries or caches.
#[async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Count events matching the filter, ignoring pagination.
    async fn count_events(&self, filter: &EventFilter) -> Result<i64>;

    /// Fetch one page of events matching the filter.
    async fn list_events(&self, filter: &EventFilter, window: PageWindow) -> Result<Vec<Event>>;

    /// Fetch a single event by database id, or `None` if absent.
    async fn get_event(&self, id: i64) -> Result<Option<Event>>;

    /// Count athlete results matching the filter, ignoring pagination.
    async fn count_results(&self, filter: &ResultFilter) -> Result<i64>;

    /// Fetch one page of athlete results matching the filter.
    async fn list_results(
        &self,
        filter: &ResultFilter,
        window: PageWindow,
    ) -> Result<Vec<AthleteResult>>;

    /// Compute the ordered aggregate site metrics.
    async fn site_stats(&self) -> Result<Vec<StatMetric>>;

    /// Lightweight connectivity check, independent of business queries.
    async fn probe(&self) -> Result<bool>;
}
