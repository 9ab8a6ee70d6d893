//! Calendar: event dates and the events of one selected day.

use chrono::NaiveDate;
use cosmos_client::PortalApi;
use cosmos_config::SessionConfig;
use cosmos_core::entities::Event;
use cosmos_core::views::events_by_date;
use serde::Serialize;

use crate::loaded::{DataSource, settle};
use crate::placeholder;

/// Day selected when the caller does not pick one.
#[must_use]
pub fn default_selected_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 7).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarPage {
    pub selected_date: NaiveDate,
    /// Every UTC date carrying at least one event, ascending.
    pub event_dates: Vec<NaiveDate>,
    /// Events on `selected_date`, in load order. Empty for a quiet day.
    pub selected_events: Vec<Event>,
    pub source: DataSource,
}

pub async fn load_calendar<A: PortalApi>(
    api: &A,
    session: &SessionConfig,
    selected: Option<NaiveDate>,
) -> CalendarPage {
    let events = settle(
        "events",
        api.cohort_events(session.cohort_id).await,
        placeholder::calendar_events,
    );

    let selected_date = selected.unwrap_or_else(default_selected_date);
    let mut by_date = events_by_date(&events.records);

    CalendarPage {
        selected_date,
        event_dates: by_date.keys().copied().collect(),
        selected_events: by_date.remove(&selected_date).unwrap_or_default(),
        source: events.source,
    }
}
