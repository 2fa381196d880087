//! Percipio site URL policy: validation and origin normalization.

use url::Url;

/// Settings section owned by this crate
pub const SETTINGS_SECTION: &str = "percipioSearch";

/// Fully qualified key of the site URL setting
pub const SITE_URL_KEY: &str = "percipioSearch.siteUrl";

/// Hostname suffix every accepted site must carry
pub const PERCIPIO_HOST_SUFFIX: &str = ".percipio.com";

/// Message shown by the input prompt for a rejected value
pub const INVALID_SITE_MESSAGE: &str =
    "Please enter a valid Percipio URL, such as https://demo.percipio.com";

/// Whether `candidate` is an absolute `https` URL on a `*.percipio.com` host.
///
/// Absent, empty and unparseable values are rejected; any path, query or
/// fragment is allowed.
pub fn is_valid_percipio_url(candidate: Option<&str>) -> bool {
    let Some(candidate) = candidate.filter(|c| !c.is_empty()) else {
        return false;
    };

    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };

    parsed.scheme() == "https"
        && parsed
            .host_str()
            .map(|host| {
                host.to_ascii_lowercase()
                    .ends_with(PERCIPIO_HOST_SUFFIX)
            })
            .unwrap_or(false)
}

/// Validation hook for the site URL prompt: empty when valid, otherwise the
/// corrective message.
pub fn validate_percipio_input(value: &str) -> String {
    if is_valid_percipio_url(Some(value)) {
        String::new()
    } else {
        INVALID_SITE_MESSAGE.to_string()
    }
}

/// Reduce a URL to its origin (scheme, host and non-default port).
///
/// Returns `None` when the value does not parse or has no tuple origin.
pub fn normalize_site_url(value: &str) -> Option<String> {
    let parsed = Url::parse(value).ok()?;
    let origin = parsed.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
