use crate::url::NormalizedUrl;

/// Decides whether a URL's path passes the include/exclude prefix rules
///
/// Matching is a plain string prefix test on the path, not a path-segment
/// comparison: an exclude prefix of `/en` rejects `/en/about` and also
/// `/english`. Exclude prefixes are checked first and always win; an empty
/// include list means every non-excluded path is in scope.
///
/// # Examples
///
/// ```
/// use sitescribe::url::{normalize_url, should_visit};
///
/// let url = normalize_url("https://example.com/english/news").unwrap();
/// assert!(!should_visit(&url, &["/en".to_string()], &[]));
/// ```
pub fn should_visit(url: &NormalizedUrl, exclude: &[String], include: &[String]) -> bool {
    path_in_scope(url.path(), exclude, include)
}

/// Same decision as [`should_visit`], on a bare path
pub fn path_in_scope(path: &str, exclude: &[String], include: &[String]) -> bool {
    if exclude.iter().any(|prefix| path.starts_with(prefix.as_str())) {
        return false;
    }

    if include.is_empty() {
        return true;
    }

    include.iter().any(|prefix| path.starts_with(prefix.as_str()))
}
