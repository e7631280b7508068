//! Route processing utilities.
//!
//! A route is the canonical, base-URL-free form of a site path:
//! - always starts with `/`
//! - never ends with `/` (except the root route `/`)
//! - percent-decoded, without query string or fragment
//!
//! Links are normalized into routes before lookup, so `/docs/intro/`,
//! `/docs/intro/index.html` and `/docs/intro#setup` all name `/docs/intro`.

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// Returns `(path, fragment)` where fragment is empty if no `#` found.
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Normalize an internal link into a route.
///
/// `base_url` is the deployment prefix (`/` or `/project/`); when the link
/// carries it, it is stripped so routes stay prefix-free.
pub fn normalize_route(link: &str, base_url: &str) -> String {
    let (path, _) = split_path_fragment(link);
    let path = path.split('?').next().unwrap_or(path);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let mut route = if decoded.starts_with('/') {
        decoded
    } else {
        format!("/{decoded}")
    };

    let base = base_url.trim_end_matches('/');
    if !base.is_empty() {
        if route == base {
            route = "/".to_string();
        } else if let Some(rest) = route.strip_prefix(base)
            && rest.starts_with('/')
        {
            route = rest.to_string();
        }
    }

    if let Some(stripped) = route.strip_suffix("index.html") {
        route = stripped.to_string();
    }
    while route.len() > 1 && route.ends_with('/') {
        route.pop();
    }
    route
}

/// Join a route onto the deployment base URL for use in `href` attributes.
pub fn href_for(route: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if route == "/" {
        format!("{base}/")
    } else {
        format!("{base}{route}")
    }
}

/// Map a route to its output file, relative to the output directory.
///
/// | Route        | Output                  |
/// |--------------|-------------------------|
/// | `/`          | `index.html`            |
/// | `/docs/intro`| `docs/intro/index.html` |
pub fn route_output_path(route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://fireproof.storage/"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/docs/react-tutorial"));
        assert!(!is_external_link("./basics.md"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
    }

    #[test]
    fn test_normalize_route_variants() {
        assert_eq!(normalize_route("/docs/intro", "/"), "/docs/intro");
        assert_eq!(normalize_route("/docs/intro/", "/"), "/docs/intro");
        assert_eq!(normalize_route("/docs/intro/index.html", "/"), "/docs/intro");
        assert_eq!(normalize_route("/docs/intro#setup", "/"), "/docs/intro");
        assert_eq!(normalize_route("/docs/intro?x=1", "/"), "/docs/intro");
        assert_eq!(normalize_route("docs/intro", "/"), "/docs/intro");
        assert_eq!(normalize_route("/", "/"), "/");
        assert_eq!(normalize_route("/index.html", "/"), "/");
    }

    #[test]
    fn test_normalize_route_decodes() {
        assert_eq!(normalize_route("/docs/my%20page", "/"), "/docs/my page");
    }

    #[test]
    fn test_normalize_route_strips_base() {
        assert_eq!(normalize_route("/site/docs/intro", "/site/"), "/docs/intro");
        assert_eq!(normalize_route("/site/", "/site/"), "/");
        assert_eq!(normalize_route("/site", "/site/"), "/");
        // A route that merely shares the prefix text is left alone
        assert_eq!(normalize_route("/sitemap.xml", "/site/"), "/sitemap.xml");
    }

    #[test]
    fn test_href_for() {
        assert_eq!(href_for("/", "/"), "/");
        assert_eq!(href_for("/docs/intro", "/"), "/docs/intro");
        assert_eq!(href_for("/docs/intro", "/site/"), "/site/docs/intro");
        assert_eq!(href_for("/", "/site/"), "/site/");
    }

    #[test]
    fn test_route_output_path() {
        assert_eq!(route_output_path("/"), PathBuf::from("index.html"));
        assert_eq!(
            route_output_path("/docs/intro"),
            PathBuf::from("docs/intro/index.html")
        );
    }
}
