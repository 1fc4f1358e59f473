use crate::patch_manifest::domain::{ImageDetails, OsIdentity, UpdateManifest, UpdatePackage};

/// ManifestAssembler owns the output envelope during a conversion run
///
/// The envelope starts out stamped with the schema and plugin versions and
/// is only handed out by [`ManifestAssembler::finish`], so callers never
/// observe a half-built manifest.
#[derive(Debug)]
pub struct ManifestAssembler {
    manifest: UpdateManifest,
}

impl ManifestAssembler {
    pub fn new(plugin_version: impl Into<String>) -> Self {
        Self {
            manifest: UpdateManifest::new(plugin_version),
        }
    }

    pub fn image_details_mut(&mut self) -> &mut ImageDetails {
        &mut self.manifest.image_details
    }

    pub fn push_update(&mut self, update: UpdatePackage) {
        self.manifest.updates.push(update);
    }

    /// Completes the envelope; a missing OS identity leaves the OS fields empty
    pub fn finish(mut self, os_identity: Option<OsIdentity>) -> UpdateManifest {
        if let Some(identity) = os_identity {
            self.manifest.apply_os_identity(identity);
        }
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch_manifest::domain::API_VERSION;

    fn update(name: &str) -> UpdatePackage {
        UpdatePackage {
            name: name.to_string(),
            installed_version: "1.0.0".to_string(),
            installed_purl: format!("pkg:apk/alpine/{}@1.0.0", name),
            fixed_version: "1.0.1".to_string(),
            fixed_purl: format!("pkg:apk/alpine/{}@1.0.1", name),
            vulnerability_id: "CVE-2024-0001".to_string(),
        }
    }

    #[test]
    fn test_finish_without_os_identity() {
        let assembler = ManifestAssembler::new("copa-lineaje version 1.0.0");
        let manifest = assembler.finish(None);

        assert_eq!(manifest.api_version, API_VERSION);
        assert_eq!(manifest.plugin_version, "copa-lineaje version 1.0.0");
        assert_eq!(manifest.metadata.os.os_type, "");
        assert_eq!(manifest.metadata.config.arch, "");
        assert!(manifest.updates.is_empty());
    }

    #[test]
    fn test_updates_keep_insertion_order() {
        let mut assembler = ManifestAssembler::new("test");
        assembler.push_update(update("musl"));
        assembler.push_update(update("busybox"));
        assembler.push_update(update("musl"));

        let manifest = assembler.finish(None);
        let names: Vec<&str> = manifest.updates.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["musl", "busybox", "musl"]);
    }

    #[test]
    fn test_finish_applies_os_identity_and_image_details() {
        let mut assembler = ManifestAssembler::new("test");
        assembler.image_details_mut().image_name = "alpine".to_string();
        assembler.image_details_mut().private = true;

        let manifest = assembler.finish(Some(OsIdentity {
            os_type: "alpine".to_string(),
            version: "3.18.0".to_string(),
            arch: "x86_64".to_string(),
        }));

        assert_eq!(manifest.metadata.os.os_type, "alpine");
        assert_eq!(manifest.metadata.os.version, "3.18.0");
        assert_eq!(manifest.metadata.config.arch, "x86_64");
        assert_eq!(manifest.image_details.image_name, "alpine");
        assert!(manifest.image_details.private);
    }
}
