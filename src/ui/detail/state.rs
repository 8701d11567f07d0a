use crate::gateway::{CountryDetail, GalleryImage};
use crate::ui::load::LoadState;
use crate::ui::mvi::ViewState;

pub const INFO_ERROR_MESSAGE: &str = "Failed to fetch country information";
pub const IMAGES_ERROR_MESSAGE: &str = "Failed to fetch country images";
pub const UPLOAD_ERROR_MESSAGE: &str = "Failed to upload image";
pub const UPLOAD_VALIDATION_MESSAGE: &str = "Please provide an image, title, and description.";

/// Which part of the detail view receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Gallery,
    FileField,
    TitleField,
    DescriptionField,
}

impl DetailFocus {
    pub fn next(self) -> Self {
        match self {
            DetailFocus::Gallery => DetailFocus::FileField,
            DetailFocus::FileField => DetailFocus::TitleField,
            DetailFocus::TitleField => DetailFocus::DescriptionField,
            DetailFocus::DescriptionField => DetailFocus::Gallery,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailFocus::Gallery => DetailFocus::DescriptionField,
            DetailFocus::FileField => DetailFocus::Gallery,
            DetailFocus::TitleField => DetailFocus::FileField,
            DetailFocus::DescriptionField => DetailFocus::TitleField,
        }
    }
}

/// User input for the upload workflow. Preserved verbatim on failure so a
/// retry needs no re-entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadForm {
    pub file_path: String,
    pub title: String,
    pub description: String,
}

impl UploadForm {
    /// The submission guard: file, title, and description must all be set.
    pub fn is_complete(&self) -> bool {
        !self.file_path.trim().is_empty()
            && !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
    }

    pub fn field_mut(&mut self, focus: DetailFocus) -> Option<&mut String> {
        match focus {
            DetailFocus::FileField => Some(&mut self.file_path),
            DetailFocus::TitleField => Some(&mut self.title),
            DetailFocus::DescriptionField => Some(&mut self.description),
            DetailFocus::Gallery => None,
        }
    }
}

/// Phase of the upload state machine. Validation happens on submission:
/// an incomplete form goes straight to `Failed` with no network call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    /// Upload accepted; waiting for the gallery refresh to resolve.
    Succeeded,
    Failed(String),
}

/// State of the detail view for one lookup key. Info, images, and upload
/// each carry their own status so a failure in one never corrupts another.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub country: String,
    pub info: LoadState<CountryDetail>,
    pub images: LoadState<Vec<GalleryImage>>,
    pub selected_image: usize,
    pub focus: DetailFocus,
    pub form: UploadForm,
    pub upload: UploadPhase,
}

impl ViewState for DetailState {}

impl DetailState {
    pub fn new(country: String) -> Self {
        Self {
            country,
            ..Default::default()
        }
    }

    pub fn selected_gallery_image(&self) -> Option<&GalleryImage> {
        self.images
            .data()
            .and_then(|images| images.get(self.selected_image))
    }

    pub fn is_editing(&self) -> bool {
        self.focus != DetailFocus::Gallery
    }
}
