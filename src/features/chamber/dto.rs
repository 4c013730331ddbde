use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::core::error::AppError;
use crate::core::params::{parse_int, parse_int_list};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
    IntList(Vec<i64>),
}

impl FilterValue {
    pub fn to_query_values(&self) -> Vec<String> {
        match self {
            Self::Int(value) => vec![value.to_string()],
            Self::Text(value) => vec![value.clone()],
            Self::IntList(values) => values.iter().map(|value| value.to_string()).collect(),
        }
    }
}

pub type FilterSet = Vec<(&'static str, Option<FilterValue>)>;

#[derive(Debug, Clone, PartialEq)]
pub struct DeputiesQuery {
    pub id: Option<Vec<i64>>,
    pub name: Option<String>,
    pub state_code: Option<String>,
    pub party_code: Option<String>,
    pub page: i64,
    pub page_size: i64,
}

impl Default for DeputiesQuery {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            state_code: None,
            party_code: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DeputiesQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, AppError> {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "id" => query
                    .id
                    .get_or_insert_with(Vec::new)
                    .extend(parse_int_list("id", value)?),
                "name" | "nome" => query.name = Some(value.clone()),
                "stateCode" | "siglaUf" => query.state_code = Some(value.clone()),
                "partyCode" | "siglaPartido" => query.party_code = Some(value.clone()),
                "page" | "pagina" => query.page = parse_int(key, value)?,
                "pageSize" | "itens" => query.page_size = parse_int(key, value)?,
                _ => {}
            }
        }

        Ok(query)
    }

    pub fn into_filter_set(self) -> FilterSet {
        vec![
            ("id", self.id.map(FilterValue::IntList)),
            ("nome", self.name.map(FilterValue::Text)),
            ("siglaUf", self.state_code.map(FilterValue::Text)),
            ("siglaPartido", self.party_code.map(FilterValue::Text)),
            ("pagina", Some(FilterValue::Int(self.page))),
            ("itens", Some(FilterValue::Int(self.page_size))),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn applies_paging_defaults() {
        let query = DeputiesQuery::from_pairs(&[]).expect("empty query");
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.id, None);
        assert_eq!(query.name, None);
    }

    #[test]
    fn merges_repeated_and_comma_separated_ids() {
        let query =
            DeputiesQuery::from_pairs(&pairs(&[("id", "1"), ("id", "2,3")])).expect("ids");
        assert_eq!(query.id, Some(vec![1, 2, 3]));
    }

    #[test]
    fn accepts_portuguese_aliases() {
        let query = DeputiesQuery::from_pairs(&pairs(&[
            ("nome", "Silva"),
            ("siglaUf", "SP"),
            ("siglaPartido", "PT"),
            ("pagina", "2"),
            ("itens", "50"),
        ]))
        .expect("aliases");

        assert_eq!(query.name.as_deref(), Some("Silva"));
        assert_eq!(query.state_code.as_deref(), Some("SP"));
        assert_eq!(query.party_code.as_deref(), Some("PT"));
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 50);
    }

    #[test]
    fn keeps_empty_strings_as_set() {
        let query = DeputiesQuery::from_pairs(&pairs(&[("name", "")])).expect("empty name");
        assert_eq!(query.name.as_deref(), Some(""));
    }

    #[test]
    fn rejects_non_integer_paging() {
        let err = DeputiesQuery::from_pairs(&pairs(&[("pageSize", "many")]))
            .expect_err("should reject");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn filter_set_uses_upstream_names_in_order() {
        let set = DeputiesQuery::default().into_filter_set();
        let names: Vec<&str> = set.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["id", "nome", "siglaUf", "siglaPartido", "pagina", "itens"]
        );
        assert_eq!(set[4].1, Some(FilterValue::Int(1)));
        assert_eq!(set[5].1, Some(FilterValue::Int(15)));
    }
}
