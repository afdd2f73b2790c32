use contracts::shared::error::ErrorResponse;

/// State of data a page fetches after it is mounted.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(ErrorResponse),
}

impl<T> From<Result<T, ErrorResponse>> for Loadable<T> {
    fn from(result: Result<T, ErrorResponse>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(error) => Loadable::Failed(error),
        }
    }
}
