//! List window parameters
//!
//! List endpoints take a plain skip/limit window rather than page numbers.

use serde::Deserialize;

/// Default number of records per page
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for list endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Number of leading records to skip (SQL OFFSET).
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    /// Maximum number of records to return (SQL LIMIT).
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = ListParams::default();
        assert_eq!(params.skip(), 0);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn explicit_values_pass_through() {
        let params = ListParams {
            skip: Some(25),
            limit: Some(50),
        };
        assert_eq!(params.skip(), 25);
        assert_eq!(params.limit(), 50);
    }

    #[test]
    fn deserializes_from_query_shape() {
        let params: ListParams = serde_json::from_str(r#"{"skip": 5}"#).expect("parse");
        assert_eq!(params.skip(), 5);
        assert_eq!(params.limit(), 10);
    }
}
