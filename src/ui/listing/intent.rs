use crate::gateway::CountrySummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListingIntent {
    /// Advance the sort field to the next option.
    CycleSortField,
    /// Flip between ascending and descending.
    ToggleOrder,
    /// Advance the limit to the next supported page size.
    CycleLimit,
    /// A new list request was initiated; the previous sequence is discarded.
    FetchStarted,
    Loaded(Vec<CountrySummary>),
    Failed(String),
    MoveSelection(i32),
}

impl Intent for ListingIntent {}
