//! Listing/export query composition.
//!
//! Both the listing fetch and the export URL are driven by the same
//! `ListQuery`, so filters, sort, and pagination can never drift apart
//! between the two paths. Empty filters are omitted entirely; the
//! server treats a missing parameter as "no filter on this column".

use crate::api::ListQuery;

/// Key/value pairs for the listing request.
pub fn params(query: &ListQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let filter_id = query.filter_id.trim();
    if !filter_id.is_empty() {
        pairs.push(("filter_id", filter_id.to_string()));
    }
    let filter_name = query.filter_name.trim();
    if !filter_name.is_empty() {
        pairs.push(("filter_name", filter_name.to_string()));
    }
    let filter_email = query.filter_email.trim();
    if !filter_email.is_empty() {
        pairs.push(("filter_email", filter_email.to_string()));
    }

    pairs.push(("sort_by", query.sort_by.to_string()));
    pairs.push(("order", query.order.to_string()));
    pairs.push(("page", query.page.to_string()));
    pairs.push(("per_page", query.per_page.to_string()));

    pairs
}

/// Percent-encoded query string for the export download URL.
pub fn encode(query: &ListQuery) -> String {
    params(query)
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ListQuery {
        ListQuery {
            filter_id: String::new(),
            filter_name: "  Ann ".to_string(),
            filter_email: String::new(),
            sort_by: "id",
            order: "asc",
            page: 3,
            per_page: 25,
        }
    }

    #[test]
    fn empty_filters_are_omitted() {
        let pairs = params(&query());
        assert!(pairs.iter().all(|(k, _)| *k != "filter_id"));
        assert!(pairs.iter().all(|(k, _)| *k != "filter_email"));
    }

    #[test]
    fn filter_values_are_trimmed() {
        let pairs = params(&query());
        let name = pairs.iter().find(|(k, _)| *k == "filter_name").unwrap();
        assert_eq!(name.1, "Ann");
    }

    #[test]
    fn pagination_and_sort_are_always_present() {
        let pairs = params(&query());
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("page").as_deref(), Some("3"));
        assert_eq!(get("per_page").as_deref(), Some("25"));
        assert_eq!(get("sort_by").as_deref(), Some("id"));
        assert_eq!(get("order").as_deref(), Some("asc"));
    }

    #[test]
    fn encode_percent_escapes_values() {
        let mut q = query();
        q.filter_email = "a b@example.com".to_string();
        let encoded = encode(&q);
        assert!(encoded.contains("filter_email=a%20b%40example.com"));
        assert!(!encoded.contains(' '));
    }
}
