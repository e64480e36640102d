//! Name conversions between wire names, Rust field names and model names,
//! and schema source parsing

use url::Url;

/// Parse `location` as a URL when it is an http(s) URL
pub fn http_url(location: &str) -> Option<Url> {
    let url = Url::parse(location).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Convert a wire name such as `documentUrl` or `until-date` to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if !result.is_empty() && !result.ends_with('_') {
            // '-', '_', ' ', '.' and friends all become a single separator
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_end_matches('_').to_string()
}

/// Convert a string to UpperCamelCase (PascalCase)
pub fn to_upper_camel_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url() {
        assert_eq!(
            http_url("https://example.com/openapi.yaml").and_then(|u| u.host_str().map(String::from)),
            Some("example.com".to_string())
        );
        assert!(http_url("specs/openapi.yaml").is_none());
        assert!(http_url("file:///tmp/openapi.yaml").is_none());
        assert!(http_url("C:\\specs\\openapi.yaml").is_none());
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("documentUrl"), "document_url");
        assert_eq!(to_snake_case("DocumentUrl"), "document_url");
        assert_eq!(to_snake_case("until-date"), "until_date");
        assert_eq!(to_snake_case("until_occurrences"), "until_occurrences");
        assert_eq!(to_snake_case("storage.tier"), "storage_tier");
        assert_eq!(to_snake_case("HTTPResponse"), "httpresponse");
        assert_eq!(to_snake_case("getHTTPResponse"), "get_httpresponse");
        assert_eq!(to_snake_case("v2Api"), "v2_api");
        assert_eq!(to_snake_case("_private_"), "private");
    }

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(
            to_upper_camel_case("incident_attachment_link_attributes_attachment_object"),
            "IncidentAttachmentLinkAttributesAttachmentObject"
        );
        assert_eq!(to_upper_camel_case("logsQueryFilter"), "LogsQueryFilter");
        assert_eq!(to_upper_camel_case("downtime-recurrence"), "DowntimeRecurrence");
        assert_eq!(to_upper_camel_case("LogsQueryFilter"), "LogsQueryFilter");
    }
}
