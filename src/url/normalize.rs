use crate::UrlError;
use std::fmt;
use url::Url;

/// Canonical string form of a page URL, used as the crawl identity
///
/// Two URLs refer to the same page iff their `NormalizedUrl` strings are
/// byte-equal. The value is `scheme://authority` followed by the path with
/// trailing slashes removed; query and fragment are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedUrl {
    value: String,
    authority_start: usize,
    path_start: usize,
}

impl NormalizedUrl {
    /// Builds the normalized form of an already parsed URL
    pub fn from_url(url: &Url) -> Result<Self, UrlError> {
        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "Only HTTP and HTTPS schemes are supported, got: {}",
                scheme
            )));
        }

        let host = url
            .host_str()
            .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;

        let mut authority = String::new();
        if !url.username().is_empty() {
            authority.push_str(url.username());
            if let Some(password) = url.password() {
                authority.push(':');
                authority.push_str(password);
            }
            authority.push('@');
        }
        authority.push_str(host);
        if let Some(port) = url.port() {
            authority.push(':');
            authority.push_str(&port.to_string());
        }

        // Strips every trailing slash, so the root path becomes empty
        let path = url.path().trim_end_matches('/');

        let authority_start = scheme.len() + 3;
        let path_start = authority_start + authority.len();
        let value = format!("{}://{}{}", scheme, authority, path);

        Ok(Self {
            value,
            authority_start,
            path_start,
        })
    }

    /// The full normalized URL string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Host plus optional userinfo and non-default port
    pub fn authority(&self) -> &str {
        &self.value[self.authority_start..self.path_start]
    }

    /// The path component; empty for the site root
    pub fn path(&self) -> &str {
        &self.value[self.path_start..]
    }

    /// Returns true if the URL points at a PDF file (case-insensitive)
    pub fn is_pdf(&self) -> bool {
        self.value.to_ascii_lowercase().ends_with(".pdf")
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Normalizes a URL string for deduplication and scope comparisons
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Keep the scheme and the authority as the URL parser canonicalizes them
///    (host lowercased, default port dropped)
/// 3. Strip all trailing slashes from the path (`/a/` becomes `/a`, `/`
///    becomes the empty path)
/// 4. Drop the query string and the fragment
///
/// Path segments are neither percent-decoded nor case-folded.
///
/// # Examples
///
/// ```
/// use sitescribe::url::normalize_url;
///
/// let url = normalize_url("http://example.com/docs/?page=2#top").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/docs");
/// ```
pub fn normalize_url(url_str: &str) -> Result<NormalizedUrl, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;
    NormalizedUrl::from_url(&url)
}

/// Resolves an href relative to the page it was found on, then normalizes it
pub fn resolve_url(href: &str, base: &Url) -> Result<NormalizedUrl, UrlError> {
    let url = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;
    NormalizedUrl::from_url(&url)
}
