use crate::FetchError;

/// Snapshot of one fetch lifecycle, as observed by a consumer.
///
/// After an invocation resolves exactly one of `data` and `error` is set.
/// While a newer invocation is in flight both keep the values of the last
/// resolution, so views never flash back to empty on refetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        self.data.is_some()
    }

    /// Loading for the first time: nothing resolved yet.
    pub fn is_initial_loading(&self) -> bool {
        self.loading && self.data.is_none() && self.error.is_none()
    }

    pub(crate) fn resolve(&mut self, result: Result<T, FetchError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.data = None;
                self.error = Some(e);
            }
        }
    }
}
