use crate::gateway::{CountrySummary, ListQuery};
use crate::ui::load::LoadState;
use crate::ui::mvi::ViewState;

/// Shown when the list request fails; the diagnostic form goes to the log.
pub const LIST_ERROR_MESSAGE: &str = "Failed to fetch countries. Please try again later.";

/// State of the listing view: the query it owns, the summary sequence in
/// server order, and the selection cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub query: ListQuery,
    pub countries: LoadState<Vec<CountrySummary>>,
    pub selected: usize,
}

impl ViewState for ListingState {}

impl ListingState {
    pub fn selected_country(&self) -> Option<&CountrySummary> {
        self.countries
            .data()
            .and_then(|countries| countries.get(self.selected))
    }
}
