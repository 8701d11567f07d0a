use crate::gateway::{CountryDetail, GalleryImage};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    InfoLoading,
    InfoLoaded(CountryDetail),
    InfoFailed(String),
    ImagesLoading,
    ImagesLoaded(Vec<GalleryImage>),
    ImagesFailed(String),
    MoveImageSelection(i32),
    FocusNext,
    FocusPrev,
    FocusGallery,
    /// Type into the focused form field.
    Input(char),
    Backspace,
    Paste(String),
    /// User pressed submit. The reducer validates the form: complete input
    /// enters `Uploading`, anything else fails locally with no network call.
    SubmitUpload,
    UploadSucceeded,
    UploadFailed(String),
}

impl Intent for DetailIntent {}
