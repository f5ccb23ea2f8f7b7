//! Descriptor for the single outbound request.

/// Describes the one request the client issues.
///
/// `method` and `background` are fixed by the contract: the client only ever
/// sends a background GET. They are carried explicitly so callers and tests
/// can observe exactly what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method. Always `"GET"`.
    pub method: &'static str,
    /// Target URL.
    pub url: String,
    /// True when the transfer runs off the caller's task (on a blocking
    /// worker thread) rather than blocking it.
    pub background: bool,
}

impl RequestDescriptor {
    /// Descriptor for a background GET to `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET",
            url: url.into(),
            background: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_descriptor_is_background_get() {
        let d = RequestDescriptor::get("http://localhost:8081/demoEntities");
        assert_eq!(d.method, "GET");
        assert_eq!(d.url, "http://localhost:8081/demoEntities");
        assert!(d.background);
    }
}
