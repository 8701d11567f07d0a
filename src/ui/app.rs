use std::path::PathBuf;

use crate::gateway::{
    CountryDetail, CountrySummary, GalleryImage, GatewayCommand, GatewayCommandSender,
    GatewayError, ImageSubmission,
};
use crate::ui::detail::{
    DetailIntent, DetailReducer, DetailState, UploadPhase, IMAGES_ERROR_MESSAGE,
    INFO_ERROR_MESSAGE, UPLOAD_ERROR_MESSAGE,
};
use crate::ui::listing::{ListingIntent, ListingReducer, ListingState, LIST_ERROR_MESSAGE};
use crate::ui::mvi::Reducer;

/// Which view currently owns the screen.
///
/// Navigation is the only coupling between views: the lookup key is written
/// on row selection and read once when the detail view mounts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Route {
    #[default]
    Listing,
    Detail,
}

pub struct App {
    should_quit: bool,
    route: Route,
    listing: ListingState,
    detail: Option<DetailState>,
    gateway: Option<GatewayCommandSender>,
    /// Staleness guards: every command carries the generation current at
    /// send time, and responses tagged with an older one are dropped.
    list_generation: u64,
    detail_generation: u64,
    command_error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Listing,
            listing: ListingState::default(),
            detail: None,
            gateway: None,
            list_generation: 0,
            detail_generation: 0,
            command_error: None,
        }
    }

    pub fn attach_gateway(&mut self, sender: GatewayCommandSender) {
        self.gateway = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn command_error(&self) -> Option<&str> {
        self.command_error.as_deref()
    }

    // ------------------------------------------------------------------
    // Listing view
    // ------------------------------------------------------------------

    /// Issue exactly one list request reflecting the current query. Any
    /// response still in flight from an earlier request is superseded.
    pub fn refresh_countries(&mut self) {
        self.list_generation += 1;
        self.dispatch_listing(ListingIntent::FetchStarted);
        let query = self.listing.query.clone();
        self.send(GatewayCommand::ListCountries {
            query,
            generation: self.list_generation,
        });
    }

    pub fn cycle_sort_field(&mut self) {
        self.dispatch_listing(ListingIntent::CycleSortField);
        self.refresh_countries();
    }

    pub fn toggle_order(&mut self) {
        self.dispatch_listing(ListingIntent::ToggleOrder);
        self.refresh_countries();
    }

    pub fn cycle_limit(&mut self) {
        self.dispatch_listing(ListingIntent::CycleLimit);
        self.refresh_countries();
    }

    pub fn move_selection(&mut self, delta: i32) {
        self.dispatch_listing(ListingIntent::MoveSelection(delta));
    }

    /// Navigate to the detail view for the selected row. Pure navigation:
    /// the only data passed along is the lookup key.
    pub fn open_selected(&mut self) {
        let Some(country) = self.listing.selected_country() else {
            return;
        };
        let name = country.name.clone();

        self.route = Route::Detail;
        self.detail_generation += 1;
        let mut detail = DetailState::new(name.clone());
        detail = DetailReducer::reduce(detail, DetailIntent::InfoLoading);
        detail = DetailReducer::reduce(detail, DetailIntent::ImagesLoading);
        self.detail = Some(detail);

        // Info and images load independently and concurrently.
        self.send(GatewayCommand::LoadCountry {
            name: name.clone(),
            generation: self.detail_generation,
        });
        self.send(GatewayCommand::LoadImages {
            name,
            generation: self.detail_generation,
        });
    }

    /// Return to the listing view. Any in-flight detail response is
    /// logically invalidated and will be dropped on arrival.
    pub fn go_back(&mut self) {
        self.route = Route::Listing;
        self.detail = None;
    }

    // ------------------------------------------------------------------
    // Detail view
    // ------------------------------------------------------------------

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        if let Some(detail) = self.detail.take() {
            self.detail = Some(DetailReducer::reduce(detail, intent));
        }
    }

    /// Run the submission guard and, if it passes, hand the upload to the
    /// gateway worker. A validation failure never reaches the network.
    pub fn submit_upload(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };
        if detail.upload == UploadPhase::Uploading {
            return;
        }

        self.dispatch_detail(DetailIntent::SubmitUpload);

        let Some(detail) = &self.detail else {
            return;
        };
        if detail.upload != UploadPhase::Uploading {
            return;
        }

        let submission = ImageSubmission {
            file_path: PathBuf::from(detail.form.file_path.trim()),
            title: detail.form.title.trim().to_string(),
            description: detail.form.description.trim().to_string(),
        };
        self.send(GatewayCommand::UploadImage {
            name: detail.country.clone(),
            submission,
            generation: self.detail_generation,
        });
    }

    // ------------------------------------------------------------------
    // Gateway responses
    // ------------------------------------------------------------------

    pub fn on_countries_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<CountrySummary>, GatewayError>,
    ) {
        if generation != self.list_generation {
            tracing::debug!(
                generation,
                current = self.list_generation,
                "dropping stale list response"
            );
            return;
        }
        match result {
            Ok(countries) => self.dispatch_listing(ListingIntent::Loaded(countries)),
            Err(err) => {
                tracing::warn!(error = %err, "list countries failed");
                self.dispatch_listing(ListingIntent::Failed(LIST_ERROR_MESSAGE.to_string()));
            }
        }
    }

    pub fn on_country_loaded(
        &mut self,
        generation: u64,
        result: Result<CountryDetail, GatewayError>,
    ) {
        if !self.detail_event_current(generation) {
            tracing::debug!(generation, "dropping stale country info response");
            return;
        }
        match result {
            Ok(detail) => self.dispatch_detail(DetailIntent::InfoLoaded(detail)),
            Err(err) => {
                tracing::warn!(error = %err, "country info failed");
                self.dispatch_detail(DetailIntent::InfoFailed(INFO_ERROR_MESSAGE.to_string()));
            }
        }
    }

    pub fn on_images_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<GalleryImage>, GatewayError>,
    ) {
        if !self.detail_event_current(generation) {
            tracing::debug!(generation, "dropping stale images response");
            return;
        }
        match result {
            Ok(images) => self.dispatch_detail(DetailIntent::ImagesLoaded(images)),
            Err(err) => {
                tracing::warn!(error = %err, "country images failed");
                self.dispatch_detail(DetailIntent::ImagesFailed(IMAGES_ERROR_MESSAGE.to_string()));
            }
        }
    }

    pub fn on_upload_finished(&mut self, generation: u64, result: Result<(), GatewayError>) {
        if !self.detail_event_current(generation) {
            tracing::debug!(generation, "dropping stale upload response");
            return;
        }
        match result {
            Ok(()) => self.dispatch_detail(DetailIntent::UploadSucceeded),
            Err(err) => {
                tracing::warn!(error = %err, "image upload failed");
                self.dispatch_detail(DetailIntent::UploadFailed(UPLOAD_ERROR_MESSAGE.to_string()));
            }
        }
    }

    fn detail_event_current(&self, generation: u64) -> bool {
        self.detail.is_some() && generation == self.detail_generation
    }

    fn dispatch_listing(&mut self, intent: ListingIntent) {
        self.listing = ListingReducer::reduce(std::mem::take(&mut self.listing), intent);
    }

    fn send(&mut self, command: GatewayCommand) {
        let Some(sender) = &self.gateway else {
            return;
        };
        match sender.try_send(command) {
            Ok(()) => self.command_error = None,
            Err(err) => {
                tracing::error!(error = %err, "gateway command channel unavailable");
                self.command_error = Some("Gateway is not responding".to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
