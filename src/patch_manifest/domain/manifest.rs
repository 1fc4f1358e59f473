use serde::{Deserialize, Serialize};

/// Schema version of the update manifest consumed by the patcher
pub const API_VERSION: &str = "v1alpha1";

/// Update manifest handed to the image patcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManifest {
    pub api_version: String,
    pub plugin_version: String,
    pub metadata: Metadata,
    pub image_details: ImageDetails,
    pub updates: Vec<UpdatePackage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub os: Os,
    pub config: Config,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    #[serde(rename = "type")]
    pub os_type: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub arch: String,
}

/// Descriptive metadata about the scanned image, copied from the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    pub platform: String,
    pub image_repository: String,
    pub image_name: String,
    pub image_version: String,
    pub image_digest: String,
    pub private: bool,
}

/// One corrected component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePackage {
    pub name: String,
    #[serde(rename = "installedVersion")]
    pub installed_version: String,
    #[serde(rename = "installedPURL")]
    pub installed_purl: String,
    #[serde(rename = "fixedVersion")]
    pub fixed_version: String,
    #[serde(rename = "fixedPURL")]
    pub fixed_purl: String,
    #[serde(rename = "vulnerabilityID")]
    pub vulnerability_id: String,
}

/// Operating system identity inferred from the first OS package record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsIdentity {
    pub os_type: String,
    pub version: String,
    pub arch: String,
}

impl OsIdentity {
    pub fn is_empty(&self) -> bool {
        self.os_type.is_empty() && self.version.is_empty() && self.arch.is_empty()
    }
}

impl UpdateManifest {
    /// Creates an empty manifest stamped with the schema and plugin versions
    pub fn new(plugin_version: impl Into<String>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            plugin_version: plugin_version.into(),
            metadata: Metadata::default(),
            image_details: ImageDetails::default(),
            updates: Vec::new(),
        }
    }

    pub fn os_identity(&self) -> OsIdentity {
        OsIdentity {
            os_type: self.metadata.os.os_type.clone(),
            version: self.metadata.os.version.clone(),
            arch: self.metadata.config.arch.clone(),
        }
    }

    pub fn apply_os_identity(&mut self, identity: OsIdentity) {
        self.metadata.os.os_type = identity.os_type;
        self.metadata.os.version = identity.version;
        self.metadata.config.arch = identity.arch;
    }
}
