/// Package URL types whose records describe the base operating system's
/// package manager rather than an application dependency
pub const OS_PACKAGE_TYPES: [&str; 8] = ["alpm", "apk", "deb", "rpm", "nix", "oci", "docker", "qpkg"];

/// Returns true if `purl_type` names an OS package ecosystem (case-insensitive)
pub fn is_os_package_type(purl_type: &str) -> bool {
    OS_PACKAGE_TYPES
        .iter()
        .any(|os_type| os_type.eq_ignore_ascii_case(purl_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_table_entries_are_os_types() {
        for os_type in OS_PACKAGE_TYPES {
            assert!(is_os_package_type(os_type), "{} should be an OS type", os_type);
        }
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        assert!(is_os_package_type("APK"));
        assert!(is_os_package_type("Deb"));
        assert!(is_os_package_type("rPm"));
    }

    #[test]
    fn test_language_ecosystems_are_not_os_types() {
        assert!(!is_os_package_type("pypi"));
        assert!(!is_os_package_type("npm"));
        assert!(!is_os_package_type("golang"));
        assert!(!is_os_package_type("maven"));
        assert!(!is_os_package_type(""));
    }
}
