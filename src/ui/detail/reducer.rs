use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{
    DetailFocus, DetailState, UploadForm, UploadPhase, UPLOAD_VALIDATION_MESSAGE,
};
use crate::ui::load::LoadState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::InfoLoading => {
                state.info = LoadState::Loading;
            }
            DetailIntent::InfoLoaded(detail) => {
                state.info = LoadState::Ready(detail);
            }
            DetailIntent::InfoFailed(message) => {
                state.info = LoadState::Error(message);
            }
            DetailIntent::ImagesLoading => {
                state.images = LoadState::Loading;
            }
            DetailIntent::ImagesLoaded(images) => {
                state.selected_image = state.selected_image.min(images.len().saturating_sub(1));
                state.images = LoadState::Ready(images);
                // The refreshed collection is the implicit end of a
                // successful upload.
                if state.upload == UploadPhase::Succeeded {
                    state.upload = UploadPhase::Idle;
                }
            }
            DetailIntent::ImagesFailed(message) => {
                state.images = LoadState::Error(message);
                if state.upload == UploadPhase::Succeeded {
                    state.upload = UploadPhase::Idle;
                }
            }
            DetailIntent::MoveImageSelection(delta) => {
                let len = state.images.data().map(Vec::len).unwrap_or(0);
                if len > 0 {
                    let current = state.selected_image.min(len - 1);
                    state.selected_image = if delta.is_negative() {
                        current.checked_sub(1).unwrap_or(len - 1)
                    } else if current + 1 >= len {
                        0
                    } else {
                        current + 1
                    };
                }
            }
            DetailIntent::FocusNext => {
                state.focus = state.focus.next();
            }
            DetailIntent::FocusPrev => {
                state.focus = state.focus.prev();
            }
            DetailIntent::FocusGallery => {
                state.focus = DetailFocus::Gallery;
            }
            DetailIntent::Input(c) => {
                if let Some(field) = state.form.field_mut(state.focus) {
                    field.push(c);
                }
            }
            DetailIntent::Backspace => {
                if let Some(field) = state.form.field_mut(state.focus) {
                    field.pop();
                }
            }
            DetailIntent::Paste(text) => {
                if let Some(field) = state.form.field_mut(state.focus) {
                    field.push_str(&text);
                }
            }
            DetailIntent::SubmitUpload => {
                // One upload in flight at a time; repeated submissions are
                // dropped until it resolves.
                if state.upload != UploadPhase::Uploading {
                    state.upload = if state.form.is_complete() {
                        UploadPhase::Uploading
                    } else {
                        UploadPhase::Failed(UPLOAD_VALIDATION_MESSAGE.to_string())
                    };
                }
            }
            DetailIntent::UploadSucceeded => {
                state.upload = UploadPhase::Succeeded;
                state.form = UploadForm::default();
                // The worker has already started the refresh for this key.
                state.images = LoadState::Loading;
            }
            DetailIntent::UploadFailed(message) => {
                // Form input is kept so the user can retry without
                // re-entering anything.
                state.upload = UploadPhase::Failed(message);
            }
        }
        state
    }
}
