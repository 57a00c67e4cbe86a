/// Adds or updates a query string parameter in a URL.
///
/// The name and value are trimmed and a blank name leaves the URL
/// unchanged. Existing parameters keep their relative order; only
/// `key=value` shaped pairs survive rewriting. No percent-encoding is
/// applied.
///
/// # Examples
///
/// ```
/// use strkit::query::set_query_param;
///
/// assert_eq!(set_query_param("a.b.com", "id", "123"), "a.b.com?id=123");
/// assert_eq!(set_query_param("a.b.com/?a=b", "id", "123"), "a.b.com/?a=b&id=123");
/// assert_eq!(set_query_param("a.b.com?id=1", "id", "2"), "a.b.com?id=2");
/// ```
pub fn set_query_param(url: &str, name: &str, value: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return url.to_owned();
    }
    let value = value.trim();

    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, query),
        None => (url, ""),
    };

    let mut params: Vec<(&str, &str)> = Vec::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.split('=');
        if let (Some(key), Some(val), None) = (parts.next(), parts.next(), parts.next()) {
            upsert(&mut params, key, val);
        }
    }
    upsert(&mut params, name, value);

    let query = params
        .iter()
        .map(|(key, val)| format!("{}={}", key, val))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}

fn upsert<'a>(params: &mut Vec<(&'a str, &'a str)>, name: &'a str, value: &'a str) {
    match params.iter_mut().find(|(key, _)| *key == name) {
        Some(entry) => entry.1 = value,
        None => params.push((name, value)),
    }
}
