use crate::preview::entry::PreviewEntry;
use crate::source::FetchError;

/// State of the preview page
///
/// Starts as `Loading` and settles once from the result of the fetch chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<PreviewEntry>),
}

impl PageState {
    pub fn settle(result: Result<Vec<PreviewEntry>, FetchError>) -> Self {
        match result {
            Ok(entries) => Self::Loaded(entries),
            Err(e) => Self::Error(e.to_string()),
        }
    }

    pub fn entries(&self) -> &[PreviewEntry] {
        match self {
            Self::Loaded(entries) => entries.as_slice(),
            Self::Loading | Self::Error(_) => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_loading() {
        assert_eq!(PageState::default(), PageState::Loading);
    }

    #[test]
    fn settle_keeps_error_message_verbatim() {
        let state = PageState::settle(Err(FetchError::InvalidResponse("bad json".to_string())));

        assert_eq!(
            state,
            PageState::Error("Invalid response: bad json".to_string())
        );
        assert!(state.entries().is_empty());
    }

    #[test]
    fn settle_with_empty_list_is_loaded_not_error() {
        let state = PageState::settle(Ok(vec![]));

        assert_eq!(state, PageState::Loaded(vec![]));
        assert!(!state.is_error());
    }
}
