//! Raw annotation lookup.
//!
//! Field annotations use the conventional `key:"value"` microformat, with
//! space-separated pairs and comma-separated flags inside the value:
//! `json:"apiKey,omitempty" doc:"API key"`.

/// Returns the value for a key inside a raw annotation string.
pub(crate) fn lookup(annotation: &str, key: &str) -> Option<String> {
    let mut rest = annotation.trim_start();

    while !rest.is_empty() {
        let colon = rest.find(':')?;
        let (name, after) = rest.split_at(colon);
        let after = after.strip_prefix(':')?;
        let after = after.strip_prefix('"')?;
        let end = after.find('"')?;
        let value = &after[..end];

        if name == key {
            return Some(value.to_string());
        }

        rest = after[end + 1..].trim_start();
    }

    None
}

/// Splits an annotation value into its name part and trailing flags.
pub(crate) fn split_value(value: &str) -> (String, Vec<String>) {
    let mut parts = value.split(',');
    let name = parts.next().unwrap_or_default().to_string();
    let flags = parts.map(str::to_string).collect();
    (name, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_single_key() {
        assert_eq!(
            lookup("json:\"apiKey,omitempty\"", "json"),
            Some("apiKey,omitempty".to_string())
        );
    }

    #[test]
    fn test_lookup_multiple_keys() {
        let raw = "json:\"name\" doc:\"display name\"";
        assert_eq!(lookup(raw, "json"), Some("name".to_string()));
        assert_eq!(lookup(raw, "doc"), Some("display name".to_string()));
        assert_eq!(lookup(raw, "yaml"), None);
    }

    #[test]
    fn test_lookup_missing_or_empty() {
        assert_eq!(lookup("", "json"), None);
        assert_eq!(lookup("json:\"\"", "json"), Some(String::new()));
    }

    #[test]
    fn test_split_value() {
        let (name, flags) = split_value("apiKey,omitempty");
        assert_eq!(name, "apiKey");
        assert_eq!(flags, vec!["omitempty".to_string()]);

        let (name, flags) = split_value("-");
        assert_eq!(name, "-");
        assert!(flags.is_empty());

        let (name, flags) = split_value("");
        assert!(name.is_empty());
        assert!(flags.is_empty());
    }
}
