/// Path prefix the static bundle is deployed under.
#[cfg(debug_assertions)]
pub fn base_path() -> &'static str {
    ""  // Served from the root by `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> &'static str {
    "/hulelab-landing"  // GitHub Pages project path
}

/// Router basename; `None` when served from the root.
pub fn router_basename() -> Option<&'static str> {
    Some(base_path()).filter(|path| !path.is_empty())
}

/// Resolves a file from `assets/` against the deployment prefix.
pub fn asset_url(file: &str) -> String {
    format!("{}/assets/{}", base_path(), file.trim_start_matches('/'))
}

/// Resolves an in-page link such as `/#projects` against the deployment prefix.
pub fn page_url(path: &str) -> String {
    format!("{}{}", base_path(), path)
}

// Header switches to its solid style past this many pixels.
pub const SCROLLED_THRESHOLD_PX: f64 = 30.0;

pub const THEME_STORAGE_KEY: &str = "theme";

pub const CONTACT_EMAIL: &str = "hello@humanlearninglab.com";

/// Tuning for the reveal-on-scroll observer.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible before it reveals.
    pub threshold: f64,
    /// CSS margin applied to the viewport; a negative bottom fires a little early.
    pub root_margin: &'static str,
    pub selector: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "0px 0px -80px 0px",
            selector: ".reveal",
        }
    }
}

impl RevealConfig {
    /// Looser tuning for short pages where most content starts below the fold.
    pub fn eager() -> Self {
        Self {
            threshold: 0.05,
            root_margin: "0px 0px -50px 0px",
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_strips_leading_slash() {
        assert_eq!(asset_url("/logo.svg"), asset_url("logo.svg"));
        assert!(asset_url("luna.png").ends_with("/assets/luna.png"));
    }

    #[test]
    fn eager_reveal_keeps_selector() {
        let eager = RevealConfig::eager();
        assert_eq!(eager.selector, RevealConfig::default().selector);
        assert!(eager.threshold < RevealConfig::default().threshold);
    }
}
