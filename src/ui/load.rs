/// Tagged status of an asynchronous sub-resource.
///
/// One value per resource slot keeps illegal combinations (loading with an
/// error set) unrepresentable. Each of list, info, and images carries its
/// own independent `LoadState`; a failure in one never blocks the others.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}
