//! Derivation of entry titles from login URLs.

use crate::{Pif2PassError, Result};
use std::net::IpAddr;
use url::{Host, ParseError, Url};

/// Derives the canonical entry title for a URL.
///
/// - A bare IP address is returned unchanged.
/// - A URL whose host is an IP address yields that address.
/// - Otherwise the registrable domain is returned, so every subdomain of a
///   service maps to the same title.
///
/// Hosts without a registrable domain (`localhost`, intranet names) are
/// returned as-is.
///
/// # Example
///
/// ```
/// use pif2pass::domain::domain_title;
///
/// assert_eq!(domain_title("https://accounts.example.co.uk/login")?, "example.co.uk");
/// assert_eq!(domain_title("http://192.168.1.5/admin")?, "192.168.1.5");
/// assert_eq!(domain_title("10.0.0.1")?, "10.0.0.1");
/// # Ok::<(), pif2pass::Pif2PassError>(())
/// ```
///
/// # Errors
///
/// - [`Pif2PassError::InvalidUrl`]: the text cannot be parsed as a URL
/// - [`Pif2PassError::MissingHost`]: the URL has no host (`mailto:`, `file:`)
pub fn domain_title(url: &str) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.parse::<IpAddr>().is_ok() {
        return Ok(trimmed.to_string());
    }

    let parsed = parse_url(trimmed)?;
    match parsed.host() {
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.');
            let title = psl::domain_str(host).unwrap_or(host);
            Ok(title.to_lowercase())
        }
        None => Err(Pif2PassError::MissingHost(url.to_string())),
    }
}

/// Parses a URL, assuming `http://` when the scheme is missing.
fn parse_url(text: &str) -> Result<Url> {
    let invalid = |source: ParseError| Pif2PassError::InvalidUrl {
        url: text.to_string(),
        source,
    };

    match Url::parse(text) {
        // `example.com:8080` and `localhost:3000` parse with the host as the
        // scheme; a port-like path or a dotted scheme gives them away.
        Ok(parsed) if parsed.host().is_none() && looks_like_host_port(&parsed) => {
            Url::parse(&format!("http://{}", text)).map_err(invalid)
        }
        Ok(parsed) => Ok(parsed),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("http://{}", text)).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

fn looks_like_host_port(parsed: &Url) -> bool {
    if parsed.scheme().contains('.') {
        return true;
    }
    let port = parsed.path().split('/').next().unwrap_or_default();
    parsed.cannot_be_a_base() && port.parse::<u16>().is_ok()
}
