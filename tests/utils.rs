use std::fs;
use wiremock::{Match, Request};

/// # Panics
///
/// Will panic if a file can't be read or missing
#[must_use = "This function returns the body of the file as a string"]
pub fn body_from_file(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

/// Matches when the decoded query string holds exactly the given parameters
pub struct QueryParamsExactMatcher(Vec<(String, String)>);

impl QueryParamsExactMatcher {
    pub fn new<K: Into<String>, V: Into<String>>(params: Vec<(K, V)>) -> Self {
        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        params.sort();
        Self(params)
    }
}

/// Shorthand for [`QueryParamsExactMatcher::new`].
pub fn query_params<K, V>(params: Vec<(K, V)>) -> QueryParamsExactMatcher
where
    K: Into<String>,
    V: Into<String>,
{
    QueryParamsExactMatcher::new(params)
}

impl Match for QueryParamsExactMatcher {
    fn matches(&self, request: &Request) -> bool {
        let query = request.url.query().unwrap_or_default();
        let mut actual: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        actual.sort();
        actual == self.0
    }
}
