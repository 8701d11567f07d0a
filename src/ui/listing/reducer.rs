use crate::ui::listing::intent::ListingIntent;
use crate::ui::listing::state::ListingState;
use crate::ui::load::LoadState;
use crate::ui::mvi::Reducer;

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::CycleSortField => {
                state.query.sort_by = state.query.sort_by.next();
            }
            ListingIntent::ToggleOrder => {
                state.query.order_by = state.query.order_by.toggled();
            }
            ListingIntent::CycleLimit => {
                state.query.cycle_limit();
            }
            ListingIntent::FetchStarted => {
                // No result merging: once a new request is initiated the
                // prior sequence is gone.
                state.countries = LoadState::Loading;
            }
            ListingIntent::Loaded(countries) => {
                state.selected = state.selected.min(countries.len().saturating_sub(1));
                state.countries = LoadState::Ready(countries);
            }
            ListingIntent::Failed(message) => {
                state.countries = LoadState::Error(message);
                state.selected = 0;
            }
            ListingIntent::MoveSelection(delta) => {
                let len = state.countries.data().map(Vec::len).unwrap_or(0);
                if len > 0 {
                    let current = state.selected.min(len - 1);
                    state.selected = if delta.is_negative() {
                        if current == 0 {
                            len - 1
                        } else {
                            current - 1
                        }
                    } else if current + 1 >= len {
                        0
                    } else {
                        current + 1
                    };
                }
            }
        }
        state
    }
}
