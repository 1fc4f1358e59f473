use crate::patch_manifest::domain::is_os_package_type;

/// UpdateScope policy deciding which qualifying fix records become updates
///
/// OS identity capture is independent of the scope: it always looks at
/// every qualifying record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateScope {
    /// Every qualifying record becomes an update (default)
    #[default]
    AllComponents,
    /// Only records whose installed component is an OS package
    OsPackagesOnly,
}

impl UpdateScope {
    /// Returns true if a record whose installed PURL has `purl_type` is kept
    pub fn includes(self, purl_type: &str) -> bool {
        match self {
            UpdateScope::AllComponents => true,
            UpdateScope::OsPackagesOnly => is_os_package_type(purl_type),
        }
    }
}

impl std::str::FromStr for UpdateScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(UpdateScope::AllComponents),
            "os" | "os-only" => Ok(UpdateScope::OsPackagesOnly),
            _ => Err(format!(
                "Invalid scope: {}. Please specify 'all' or 'os'",
                s
            )),
        }
    }
}

impl std::fmt::Display for UpdateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateScope::AllComponents => write!(f, "all"),
            UpdateScope::OsPackagesOnly => write!(f, "os"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_all_components() {
        assert_eq!(UpdateScope::default(), UpdateScope::AllComponents);
    }

    #[test]
    fn test_all_components_includes_everything() {
        assert!(UpdateScope::AllComponents.includes("apk"));
        assert!(UpdateScope::AllComponents.includes("pypi"));
    }

    #[test]
    fn test_os_packages_only_filters_language_ecosystems() {
        assert!(UpdateScope::OsPackagesOnly.includes("apk"));
        assert!(UpdateScope::OsPackagesOnly.includes("DEB"));
        assert!(!UpdateScope::OsPackagesOnly.includes("npm"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(UpdateScope::from_str("all").unwrap(), UpdateScope::AllComponents);
        assert_eq!(UpdateScope::from_str("OS").unwrap(), UpdateScope::OsPackagesOnly);
        assert_eq!(
            UpdateScope::from_str("os-only").unwrap(),
            UpdateScope::OsPackagesOnly
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let error = UpdateScope::from_str("apps").unwrap_err();
        assert!(error.contains("Invalid scope"));
        assert!(error.contains("apps"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for scope in [UpdateScope::AllComponents, UpdateScope::OsPackagesOnly] {
            assert_eq!(UpdateScope::from_str(&scope.to_string()).unwrap(), scope);
        }
    }
}
