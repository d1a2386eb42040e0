//! Route modules

pub mod export;
pub mod filters;
pub mod transactions;

use std::collections::HashMap;

/// Read a parameter from query params first, then from a form-encoded or
/// bare body (mirrors how the UI posts filter changes)
pub(crate) fn param(
    query: &HashMap<String, String>,
    body: &str,
    key: &str,
) -> Option<String> {
    if let Some(value) = query.get(key) {
        return Some(value.clone());
    }

    if body.contains('=') {
        for pair in body.split('&') {
            let mut parts = pair.splitn(2, '=');
            if parts.next() == Some(key) {
                if let Some(raw) = parts.next() {
                    return Some(urlencoding::decode(raw).unwrap_or_default().into_owned());
                }
            }
        }
        return None;
    }

    if !body.trim().is_empty() {
        // Body is just the bare value
        return Some(body.trim().to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_prefers_query() {
        let mut query = HashMap::new();
        query.insert("value".to_string(), "visa".to_string());
        assert_eq!(param(&query, "value=amex", "value"), Some("visa".to_string()));
    }

    #[test]
    fn test_param_parses_form_body() {
        let query = HashMap::new();
        assert_eq!(
            param(&query, "value=qr&other=1", "value"),
            Some("qr".to_string())
        );
        assert_eq!(param(&query, "other=1", "value"), None);
    }

    #[test]
    fn test_param_accepts_bare_body() {
        let query = HashMap::new();
        assert_eq!(param(&query, "monthly", "value"), Some("monthly".to_string()));
        assert_eq!(param(&query, "", "value"), None);
    }

    #[test]
    fn test_param_decodes_urlencoding() {
        let query = HashMap::new();
        assert_eq!(
            param(&query, "value=link%20de%20pago", "value"),
            Some("link de pago".to_string())
        );
    }
}
