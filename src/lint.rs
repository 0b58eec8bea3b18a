//! Data-quality checks that never fail a load

use std::collections::BTreeMap;
use std::fmt;

use crate::social::{self, SocialLink, KNOWN_NETWORKS};

/// A suspicious but structurally valid entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// The renderer has no icon for this name
    UnknownNetwork(String),

    /// Several visible entries point at the same target
    SharedHref { href: String, names: Vec<String> },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::UnknownNetwork(name) => {
                write!(f, "social link '{}' has no known icon", name)
            }
            LintWarning::SharedHref { href, names } => {
                write!(f, "active links {} all point at {}", names.join(", "), href)
            }
        }
    }
}

/// Collect warnings for a social catalog
///
/// Inactive entries only count for the icon check: placeholder targets on
/// hidden links are never shown to readers.
pub fn lint(links: &[SocialLink]) -> Vec<LintWarning> {
    let mut warnings: Vec<LintWarning> = links
        .iter()
        .filter(|link| !KNOWN_NETWORKS.contains(&link.name.as_str()))
        .map(|link| LintWarning::UnknownNetwork(link.name.clone()))
        .collect();

    let mut by_href: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for link in social::active(links) {
        by_href.entry(link.href.as_str()).or_default().push(link.name.clone());
    }
    warnings.extend(
        by_href
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(href, names)| LintWarning::SharedHref {
                href: href.to_string(),
                names,
            }),
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, href: &str, active: bool) -> SocialLink {
        SocialLink::titled(name, href, "Ordinary Days", active)
    }

    #[test]
    fn test_clean_catalog() {
        let links = vec![
            link("Github", "https://github.com/yuzhouu/b3", true),
            link("Facebook", "https://yuzhou.github.io/b3", false),
            link("Twitter", "https://yuzhou.github.io/b3", false),
        ];
        assert!(lint(&links).is_empty());
    }

    #[test]
    fn test_unknown_network() {
        let links = vec![link("Myspace", "https://myspace.com/me", false)];
        assert_eq!(lint(&links), vec![LintWarning::UnknownNetwork("Myspace".to_string())]);
    }

    #[test]
    fn test_shared_href_among_active() {
        let links = vec![
            link("Github", "https://github.com/yuzhouu/b3", true),
            link("Twitter", "https://yuzhou.github.io/b3", true),
            link("Reddit", "https://yuzhou.github.io/b3", true),
        ];
        let warnings = lint(&links);
        assert_eq!(
            warnings,
            vec![LintWarning::SharedHref {
                href: "https://yuzhou.github.io/b3".to_string(),
                names: vec!["Twitter".to_string(), "Reddit".to_string()],
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "active links Twitter, Reddit all point at https://yuzhou.github.io/b3"
        );
    }
}
