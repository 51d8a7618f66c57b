//! Request checks shared by the HTTP layer and the use cases

/// Whether a `Content-Type` header value denotes a multipart body
pub fn is_multipart_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.trim_start().to_ascii_lowercase())
        .is_some_and(|ct| ct.starts_with("multipart/"))
}

/// Reject anything that is not a multipart request
///
/// Returns the message used for the `InvalidRequest` error.
pub fn ensure_multipart(content_type: Option<&str>) -> Result<(), String> {
    if is_multipart_content_type(content_type) {
        Ok(())
    } else {
        Err(format!(
            "Expected a multipart request, but got {}",
            content_type.unwrap_or("no content type")
        ))
    }
}

/// Normalize an optional form/query value: blank means absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_multipart_content_type() {
        assert!(is_multipart_content_type(Some(
            "multipart/form-data; boundary=----abc"
        )));
        assert!(is_multipart_content_type(Some("Multipart/Mixed")));
        assert!(!is_multipart_content_type(Some("application/json")));
        assert!(!is_multipart_content_type(Some("")));
        assert!(!is_multipart_content_type(None));
    }

    #[test]
    fn test_ensure_multipart_message() {
        let err = ensure_multipart(Some("application/json")).unwrap_err();
        assert_eq!(
            err,
            "Expected a multipart request, but got application/json"
        );
        assert!(ensure_multipart(None).is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("a".to_string())), Some("a".to_string()));
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
