//! Request DTOs for pricing API endpoints.

use serde::{Deserialize, Deserializer};

/// Query for `GET /prices`
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "type")]
    pub ticket_type: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Query for `PUT /prices`
#[derive(Debug, Clone, Deserialize)]
pub struct SetPriceQuery {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub cost: u32,
}

/// Treat a missing or blank query value as absent, otherwise parse it.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::rejection::QueryRejection;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(query: &str) -> Result<PriceQuery, QueryRejection> {
        let uri: Uri = format!("/prices?{}", query).parse().unwrap();
        Query::<PriceQuery>::try_from_uri(&uri).map(|Query(q)| q)
    }

    #[test]
    fn test_price_query_full() {
        let q = parse("type=1jour&age=30&date=2019-02-18").unwrap();
        assert_eq!(q.ticket_type, "1jour");
        assert_eq!(q.age, Some(30));
        assert_eq!(q.date.as_deref(), Some("2019-02-18"));
    }

    #[test]
    fn test_price_query_optional_fields() {
        let q = parse("type=night").unwrap();
        assert_eq!(q.age, None);
        assert_eq!(q.date, None);

        let q = parse("type=night&age=&date=").unwrap();
        assert_eq!(q.age, None);
        assert_eq!(q.date.as_deref(), Some(""));
    }

    #[test]
    fn test_price_query_rejects_bad_age() {
        assert!(parse("type=1jour&age=abc").is_err());
        assert!(parse("type=1jour&age=-3").is_err());
    }

    #[test]
    fn test_price_query_requires_type() {
        assert!(parse("age=30").is_err());
    }
}
