//! Search URL construction and hand-off to the browser.

use crate::editor::get_language_id;
use crate::host::Host;
use crate::site::{SETTINGS_SECTION, SITE_URL_KEY};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Message shown when a search runs before a site is configured
pub const CONFIGURE_SITE_MESSAGE: &str = "You need to configure the Percipio Site";

/// Action offered alongside [`CONFIGURE_SITE_MESSAGE`]
pub const OPEN_SETTINGS_ACTION: &str = "Open Settings";

/// Characters escaped in the query component. Unreserved marks
/// `- _ . ! ~ * ' ( )` pass through unchanged.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// What a search invocation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The search URL was handed to the browser opener
    Opened { url: String },
    /// The term was blank; nothing happened
    EmptyTerm,
    /// No site is configured; the user was asked to configure one
    SiteNotConfigured,
    /// The search prompt was dismissed
    Cancelled,
}

/// Query text: `"<term>" <language>` when a language is known, otherwise the
/// trimmed term alone.
pub fn build_search_query(term: &str, language: &str) -> String {
    let term = term.trim();
    if language.is_empty() {
        term.to_string()
    } else {
        format!("\"{}\" {}", term, language)
    }
}

/// Full search URL on `site`. The site is used verbatim.
pub fn build_search_url(site: &str, term: &str, language: &str) -> String {
    let query = build_search_query(term, language);
    format!(
        "{}/search?q={}",
        site,
        utf8_percent_encode(&query, QUERY_COMPONENT)
    )
}

/// Show the "configure the site" message and open settings if asked to
pub fn prompt_to_configure(host: &mut dyn Host) {
    let choice = host.show_information_message(CONFIGURE_SITE_MESSAGE, &[OPEN_SETTINGS_ACTION]);
    if choice.as_deref() == Some(OPEN_SETTINGS_ACTION) {
        host.open_settings(SETTINGS_SECTION);
    }
}

/// Configured site URL, if set to something non-blank
pub fn configured_site(host: &dyn Host) -> Option<String> {
    host.get_setting(SITE_URL_KEY)
        .filter(|site| !site.trim().is_empty())
}

/// Search the configured Percipio site for `term`, annotated with the active
/// document's language, and open the result page in the browser.
///
/// Blank terms are ignored. Without a configured site the user is prompted
/// to configure one and no search happens.
pub fn execute_search(host: &mut dyn Host, term: &str) -> SearchOutcome {
    if term.trim().is_empty() {
        log::debug!("Ignoring empty search term");
        return SearchOutcome::EmptyTerm;
    }

    let Some(site) = configured_site(&*host) else {
        log::debug!("Search requested but {} is not set", SITE_URL_KEY);
        prompt_to_configure(host);
        return SearchOutcome::SiteNotConfigured;
    };

    let language = get_language_id(host.active_editor().as_ref());
    let url = build_search_url(&site, term, &language);

    host.open_external(&url);
    SearchOutcome::Opened { url }
}
