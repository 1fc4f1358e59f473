use packageurl::PackageUrl;
use std::str::FromStr;

pub use packageurl::Error as PurlError;

/// Qualifier key carrying the source distribution, e.g. `alpine-3.18.0`
pub const DISTRO_QUALIFIER: &str = "distro";

/// Qualifier key carrying the package architecture
pub const ARCH_QUALIFIER: &str = "arch";

/// Decomposes a package URL string
///
/// The type is lowercased and type-specific rules are applied (for example
/// `deb` and `rpm` namespaces are lowercased), so `pkg:deb/Debian/curl`
/// yields the namespace `debian`.
///
/// # Errors
/// Returns a [`PurlError`] when the scheme, type or name is missing or a
/// component is not valid percent-encoded UTF-8.
pub fn decompose_purl(input: &str) -> Result<PackageUrl<'static>, PurlError> {
    PackageUrl::from_str(input)
}

/// Looks up a qualifier by its (lowercased) key
pub fn qualifier<'p>(purl: &'p PackageUrl<'_>, key: &str) -> Option<&'p str> {
    purl.qualifiers().get(key).map(|value| value.as_ref())
}

/// Extracts the distribution version from the `distro` qualifier
///
/// `alpine-3.18.0` yields `3.18.0`; a value without a hyphen is returned
/// unchanged and an absent qualifier yields an empty string.
pub fn extract_distro(purl: &PackageUrl<'_>) -> String {
    match qualifier(purl, DISTRO_QUALIFIER) {
        Some(distro) if !distro.is_empty() => match distro.split_once('-') {
            Some((_, version)) => version.to_string(),
            None => distro.to_string(),
        },
        _ => String::new(),
    }
}
