//! HTTP verb names accepted by the dispatcher.

/// HTTP verb for a dispatch call.
///
/// Parsing is case-insensitive and total: `"get"`, `"GET"` and `"Get"` all
/// normalize to [`Verb::Get`], while any unrecognized name is carried
/// verbatim in [`Verb::Other`]. Unrecognized verbs take no special encoding
/// path and are forwarded to the transport as-is; callers should treat them
/// as unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum Verb {
    /// Query-string encoded read, no request body
    #[strum(serialize = "GET")]
    Get,
    /// Insert, body-encoded
    #[strum(serialize = "POST")]
    Post,
    /// Update, body-encoded
    #[strum(serialize = "PUT")]
    Put,
    /// Delete, body-encoded (requires a transport that supports DELETE bodies)
    #[strum(serialize = "DELETE")]
    Delete,
    /// Any other verb name, forwarded without a dedicated encoding path
    #[strum(default)]
    Other(String),
}

impl std::str::FromStr for Verb {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("GET") {
            Verb::Get
        } else if s.eq_ignore_ascii_case("POST") {
            Verb::Post
        } else if s.eq_ignore_ascii_case("PUT") {
            Verb::Put
        } else if s.eq_ignore_ascii_case("DELETE") {
            Verb::Delete
        } else {
            Verb::Other(s.to_string())
        })
    }
}

impl From<&str> for Verb {
    fn from(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Verb::Other(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_parse_is_case_insensitive() {
        assert_eq!(Verb::from("get"), Verb::Get);
        assert_eq!(Verb::from("Post"), Verb::Post);
        assert_eq!(Verb::from("PUT"), Verb::Put);
        assert_eq!(Verb::from("delete"), Verb::Delete);
    }

    #[test]
    fn test_verb_normalizes_to_upper_case() {
        assert_eq!(Verb::from("get").to_string(), "GET");
        assert_eq!(Verb::from("Delete").to_string(), "DELETE");
    }

    #[test]
    fn test_unrecognized_verb_is_forwarded_verbatim() {
        let verb = Verb::from("PATCH");
        assert_eq!(verb, Verb::Other("PATCH".to_string()));
        assert_eq!(verb.to_string(), "PATCH");
    }
}
