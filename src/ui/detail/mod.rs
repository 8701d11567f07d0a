mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{
    DetailFocus, DetailState, UploadForm, UploadPhase, IMAGES_ERROR_MESSAGE, INFO_ERROR_MESSAGE,
    UPLOAD_ERROR_MESSAGE, UPLOAD_VALIDATION_MESSAGE,
};
