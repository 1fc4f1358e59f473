pub mod fix_record;
pub mod manifest;
pub mod os_classification;
pub mod purl;

pub use fix_record::FixRecord;
pub use manifest::{
    Config, ImageDetails, Metadata, Os, OsIdentity, UpdateManifest, UpdatePackage, API_VERSION,
};
pub use os_classification::{is_os_package_type, OS_PACKAGE_TYPES};
pub use purl::{decompose_purl, extract_distro, qualifier, PurlError};
