//! Custom serde helpers for backend wire formats.

use serde::Deserialize;

/// A list response that arrives either as a bare JSON array or wrapped in a
/// `{"data": [...]}` envelope.
///
/// The backend is inconsistent across endpoints (and across versions of the
/// same endpoint), so every list-returning call deserializes through this.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Rows<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Rows<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Rows::Bare(rows) => rows,
            Rows::Wrapped { data } => data,
        }
    }
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Rows::Bare(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_bare_array() {
        let rows: Rows<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(rows.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rows_wrapped_envelope() {
        let rows: Rows<u32> = serde_json::from_str(r#"{"data": [4, 5]}"#).unwrap();
        assert_eq!(rows.into_vec(), vec![4, 5]);
    }

    #[test]
    fn test_rows_empty_forms() {
        let bare: Rows<u32> = serde_json::from_str("[]").unwrap();
        assert!(bare.into_vec().is_empty());
        let wrapped: Rows<u32> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(wrapped.into_vec().is_empty());
    }
}
