//! Tri-state query results

use std::fmt;

/// Observation of a query: exactly one of loading, failed or ready holds.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    /// Settle a query from its result, keeping only the error's message
    pub fn settle<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => QueryState::Ready(data),
            Err(e) => QueryState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

/// A pending resource (`None`) is still loading.
impl<T, E: fmt::Display> From<Option<Result<T, E>>> for QueryState<T> {
    fn from(value: Option<Result<T, E>>) -> Self {
        value.map(QueryState::settle).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    #[test]
    fn test_exactly_one_state_holds() {
        let loading: QueryState<u32> = QueryState::Loading;
        assert!(loading.is_loading());
        assert!(loading.error().is_none() && loading.data().is_none());

        let failed: QueryState<u32> = QueryState::settle(Err(QueryError::Timeout));
        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some("Request timeout"));
        assert!(failed.data().is_none());

        let ready: QueryState<u32> = QueryState::settle(Ok::<_, QueryError>(7));
        assert_eq!(ready.data(), Some(&7));
        assert!(ready.error().is_none());
    }

    #[test]
    fn test_from_pending_resource() {
        let pending: QueryState<u32> = None::<Result<u32, QueryError>>.into();
        assert!(pending.is_loading());

        let done: QueryState<u32> = Some(Ok::<_, QueryError>(3)).into();
        assert_eq!(done, QueryState::Ready(3));
    }
}
