use crate::patch_manifest::domain::purl::ARCH_QUALIFIER;
use crate::patch_manifest::domain::{
    decompose_purl, extract_distro, is_os_package_type, qualifier, FixRecord, OsIdentity,
    UpdatePackage,
};
use packageurl::PackageUrl;
use crate::patch_manifest::policies::UpdateScope;
use crate::patch_manifest::services::ManifestAssembler;
use crate::shared::error::ConvertError;
use std::cell::OnceCell;

/// Counters collected while streaming the fix-plan array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records decoded from the array
    pub records_seen: usize,
    /// Records dropped because a component PURL was empty
    pub records_skipped: usize,
    /// Qualifying records excluded by the update scope
    pub records_out_of_scope: usize,
    /// Update entries produced
    pub updates: usize,
}

/// FixListAccumulator converts fix records into update entries as they stream past
///
/// The OS identity is captured from the first qualifying record whose
/// installed component is an OS package; the `OnceCell` makes later
/// candidates unable to overwrite it.
#[derive(Debug, Default)]
pub struct FixListAccumulator {
    scope: UpdateScope,
    os_identity: OnceCell<OsIdentity>,
    stats: ConversionStats,
}

impl FixListAccumulator {
    pub fn new(scope: UpdateScope) -> Self {
        Self {
            scope,
            os_identity: OnceCell::new(),
            stats: ConversionStats::default(),
        }
    }

    /// Processes one record, appending its update entry to `assembler`
    ///
    /// # Errors
    /// Returns [`ConvertError::Purl`] if a PURL of a qualifying record
    /// cannot be decomposed.
    pub fn accept(
        &mut self,
        record: FixRecord,
        assembler: &mut ManifestAssembler,
    ) -> Result<(), ConvertError> {
        self.stats.records_seen += 1;

        if !record.is_qualifying() {
            self.stats.records_skipped += 1;
            return Ok(());
        }

        let installed = decompose(&record.current_component_purl)?;
        if is_os_package_type(installed.ty()) {
            self.os_identity.get_or_init(|| OsIdentity {
                os_type: installed.namespace().unwrap_or_default().to_string(),
                version: extract_distro(&installed),
                arch: qualifier(&installed, ARCH_QUALIFIER)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        if !self.scope.includes(installed.ty()) {
            self.stats.records_out_of_scope += 1;
            return Ok(());
        }

        let fixed = decompose(&record.target_component_purl)?;
        assembler.push_update(UpdatePackage {
            name: fixed.name().to_string(),
            installed_version: installed.version().unwrap_or_default().to_string(),
            installed_purl: record.current_component_purl,
            fixed_version: fixed.version().unwrap_or_default().to_string(),
            fixed_purl: record.target_component_purl,
            vulnerability_id: record.vulnerability_id,
        });
        self.stats.updates += 1;

        Ok(())
    }

    pub fn finish(self) -> (Option<OsIdentity>, ConversionStats) {
        (self.os_identity.into_inner(), self.stats)
    }
}

fn decompose(purl: &str) -> Result<PackageUrl<'static>, ConvertError> {
    decompose_purl(purl).map_err(|source| ConvertError::Purl {
        purl: purl.to_string(),
        source,
    })
}
