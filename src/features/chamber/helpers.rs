use reqwest::Url;

use crate::core::error::AppError;
use crate::features::chamber::dto::FilterValue;

pub fn retain_present<K, V>(entries: impl IntoIterator<Item = (K, Option<V>)>) -> Vec<(K, V)> {
    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

pub fn to_query_pairs<K: AsRef<str>>(entries: &[(K, FilterValue)]) -> Vec<(String, String)> {
    entries
        .iter()
        .flat_map(|(key, value)| {
            value
                .to_query_values()
                .into_iter()
                .map(move |item| (key.as_ref().to_string(), item))
        })
        .collect()
}

pub fn build_request_url(
    base_url: &str,
    path: &str,
    pairs: &[(String, String)],
) -> Result<Url, AppError> {
    let mut url = Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), path))
        .map_err(|err| AppError::internal(format!("invalid upstream url: {err}")))?;

    if !pairs.is_empty() {
        let mut query_pairs = url.query_pairs_mut();
        for (key, value) in pairs {
            query_pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_present_drops_only_absent_entries() {
        let filtered = retain_present(vec![
            ("a", Some(1)),
            ("b", None),
            ("c", Some(0)),
            ("d", None),
        ]);
        assert_eq!(filtered, vec![("a", 1), ("c", 0)]);
    }

    #[test]
    fn retain_present_keeps_empty_text() {
        let filtered = retain_present(vec![
            ("nome", Some(FilterValue::Text(String::new()))),
            ("siglaUf", None),
        ]);
        assert_eq!(filtered, vec![("nome", FilterValue::Text(String::new()))]);
    }

    #[test]
    fn list_values_expand_in_order() {
        let pairs = to_query_pairs(&[
            ("id", FilterValue::IntList(vec![1, 2, 3])),
            ("pagina", FilterValue::Int(1)),
        ]);
        assert_eq!(
            pairs,
            vec![
                ("id".to_string(), "1".to_string()),
                ("id".to_string(), "2".to_string()),
                ("id".to_string(), "3".to_string()),
                ("pagina".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn builds_url_without_placeholders() {
        let pairs = to_query_pairs(&retain_present(vec![
            ("id", None),
            ("nome", Some(FilterValue::Text("Maria".to_string()))),
            ("siglaUf", None),
            ("pagina", Some(FilterValue::Int(1))),
            ("itens", Some(FilterValue::Int(15))),
        ]));
        let url = build_request_url("https://example.org/api/v2/", "deputados", &pairs)
            .expect("url builds");

        assert_eq!(
            url.as_str(),
            "https://example.org/api/v2/deputados?nome=Maria&pagina=1&itens=15"
        );
    }

    #[test]
    fn omits_query_when_nothing_to_forward() {
        let url = build_request_url("https://example.org/api/v2", "deputados/204554", &[])
            .expect("url builds");
        assert_eq!(url.as_str(), "https://example.org/api/v2/deputados/204554");
        assert_eq!(url.query(), None);
    }
}
