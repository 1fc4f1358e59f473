use crate::patch_manifest::domain::{FixRecord, UpdateManifest};
use crate::patch_manifest::policies::UpdateScope;
use crate::patch_manifest::services::{ConversionStats, FixListAccumulator, ManifestAssembler};
use crate::shared::error::ConvertError;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::error::Category;
use std::fmt;
use std::io::{BufReader, Read};

/// Root key holding the fix-plan arrays
pub const METADATA_KEY: &str = "meta_data";

/// Root key holding the scanned image description
pub const IMAGE_DETAILS_KEY: &str = "image_details";

/// Key of the fix-plan array converted into updates
pub const FIXES_KEY: &str = "basic_plan_component_vulnerability_fixes";

/// Result of a successful conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub manifest: UpdateManifest,
    pub stats: ConversionStats,
}

/// ReportConverter streams a fix-plan report into an update manifest
///
/// The report is consumed as a token stream: only the two root objects of
/// interest are decoded, fix records are processed one at a time, and every
/// other value is skipped without being materialized.
///
/// # Example
///
/// ```
/// use copa_lineaje::patch_manifest::services::ReportConverter;
///
/// let report = r#"{
///     "image_details": {"image_name": "alpine", "image_version": "3.18.0"},
///     "meta_data": {"basic_plan_component_vulnerability_fixes": [{
///         "current_component_purl": "pkg:apk/alpine/musl@1.2.4-r0?arch=x86_64&distro=alpine-3.18.0",
///         "target_component_purl": "pkg:apk/alpine/musl@1.2.4-r3",
///         "vulnerability_id": "CVE-1234-567"
///     }]}
/// }"#;
///
/// let conversion = ReportConverter::new("copa-lineaje version 1.0.0")
///     .convert_reader(report.as_bytes())
///     .unwrap();
/// assert_eq!(conversion.manifest.metadata.os.os_type, "alpine");
/// assert_eq!(conversion.manifest.updates.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConverter {
    plugin_version: String,
    scope: UpdateScope,
}

impl ReportConverter {
    pub fn new(plugin_version: impl Into<String>) -> Self {
        Self {
            plugin_version: plugin_version.into(),
            scope: UpdateScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: UpdateScope) -> Self {
        self.scope = scope;
        self
    }

    /// Converts a report read from `reader`
    ///
    /// Reading stops as soon as both root objects have been processed;
    /// whatever follows them is never inspected.
    ///
    /// # Errors
    /// Any [`ConvertError`] aborts the whole run; no partial manifest is returned.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<Conversion, ConvertError> {
        let mut run = ConversionRun::new(&self.plugin_version, self.scope);
        let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(reader));

        match deserializer.deserialize_map(RootVisitor { run: &mut run }) {
            Ok(()) => run.finish(),
            // the root visitor unwinds deliberately once both keys are processed
            Err(_) if run.is_complete() => run.finish(),
            Err(err) => Err(run.classify(err)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootKey {
    Metadata,
    ImageDetails,
}

impl RootKey {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            METADATA_KEY => Some(RootKey::Metadata),
            IMAGE_DETAILS_KEY => Some(RootKey::ImageDetails),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            RootKey::Metadata => METADATA_KEY,
            RootKey::ImageDetails => IMAGE_DETAILS_KEY,
        }
    }
}

/// Position of the reader within the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Init,
    SeekingRootKeys,
    ExpectingObject(RootKey),
    InMetadata,
    ExpectingFixesArray,
    InFixes,
    DrainingMetadata,
    InImageDetails,
    Done,
}

impl ScanState {
    fn expectation(self) -> String {
        match self {
            ScanState::Init => "start of report object".to_string(),
            ScanState::SeekingRootKeys => "well-formed report object".to_string(),
            ScanState::ExpectingObject(key) => format!("start of {} object", key.as_str()),
            ScanState::InMetadata | ScanState::DrainingMetadata => {
                format!("well-formed {} object", METADATA_KEY)
            }
            ScanState::ExpectingFixesArray => "start of array for fixes".to_string(),
            ScanState::InFixes => "fix record or end of array for fixes".to_string(),
            ScanState::InImageDetails => format!("well-formed {} object", IMAGE_DETAILS_KEY),
            ScanState::Done => "end of report object".to_string(),
        }
    }
}

/// Per-run context shared by the visitors
struct ConversionRun {
    state: ScanState,
    seen_metadata: bool,
    seen_image_details: bool,
    assembler: ManifestAssembler,
    accumulator: FixListAccumulator,
    failure: Option<ConvertError>,
}

impl ConversionRun {
    fn new(plugin_version: &str, scope: UpdateScope) -> Self {
        Self {
            state: ScanState::Init,
            seen_metadata: false,
            seen_image_details: false,
            assembler: ManifestAssembler::new(plugin_version),
            accumulator: FixListAccumulator::new(scope),
            failure: None,
        }
    }

    fn begin_root(&mut self) {
        self.state = ScanState::SeekingRootKeys;
    }

    /// Returns false when `key` was already processed and must be skipped
    fn enter_root_key(&mut self, key: RootKey) -> bool {
        let seen = match key {
            RootKey::Metadata => self.seen_metadata,
            RootKey::ImageDetails => self.seen_image_details,
        };
        if seen {
            return false;
        }
        self.state = ScanState::ExpectingObject(key);
        true
    }

    fn open_object(&mut self, key: RootKey) {
        self.state = match key {
            RootKey::Metadata => ScanState::InMetadata,
            RootKey::ImageDetails => ScanState::InImageDetails,
        };
    }

    /// Returns false once the fixes array has been consumed
    fn expect_fixes_array(&mut self) -> bool {
        if self.state != ScanState::InMetadata {
            return false;
        }
        self.state = ScanState::ExpectingFixesArray;
        true
    }

    fn open_fixes_array(&mut self) {
        self.state = ScanState::InFixes;
    }

    fn close_fixes_array(&mut self) {
        self.state = ScanState::DrainingMetadata;
    }

    fn accept(&mut self, record: FixRecord) -> Result<(), ConvertError> {
        self.accumulator.accept(record, &mut self.assembler)
    }

    fn close_object(&mut self, key: RootKey) -> Result<(), ConvertError> {
        match key {
            RootKey::Metadata => {
                if self.state != ScanState::DrainingMetadata {
                    return Err(ConvertError::KeyNotFound {
                        keys: vec![FIXES_KEY],
                    });
                }
                self.seen_metadata = true;
            }
            RootKey::ImageDetails => self.seen_image_details = true,
        }

        self.state = if self.seen_metadata && self.seen_image_details {
            ScanState::Done
        } else {
            ScanState::SeekingRootKeys
        };
        Ok(())
    }

    fn is_complete(&self) -> bool {
        self.state == ScanState::Done && self.failure.is_none()
    }

    fn missing_root_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if !self.seen_metadata {
            keys.push(METADATA_KEY);
        }
        if !self.seen_image_details {
            keys.push(IMAGE_DETAILS_KEY);
        }
        keys
    }

    /// Records a conversion failure and hands serde an error to unwind with
    fn raise<E: de::Error>(&mut self, err: ConvertError) -> E {
        let unwind = E::custom(&err);
        self.failure = Some(err);
        unwind
    }

    fn finish(self) -> Result<Conversion, ConvertError> {
        if self.state != ScanState::Done {
            return Err(ConvertError::KeyNotFound {
                keys: self.missing_root_keys(),
            });
        }
        let (os_identity, stats) = self.accumulator.finish();
        Ok(Conversion {
            manifest: self.assembler.finish(os_identity),
            stats,
        })
    }

    /// Maps a stream error onto the conversion error taxonomy
    fn classify(mut self, err: serde_json::Error) -> ConvertError {
        if let Some(failure) = self.failure.take() {
            return failure;
        }

        let details = err.to_string();
        match (err.classify(), self.state) {
            (Category::Io, _) => ConvertError::Io(err.into()),
            (Category::Eof, ScanState::Init | ScanState::SeekingRootKeys) => {
                ConvertError::KeyNotFound {
                    keys: self.missing_root_keys(),
                }
            }
            (Category::Data, ScanState::InFixes) => ConvertError::Decode {
                context: "fix record",
                details,
            },
            (Category::Data, ScanState::InImageDetails) => ConvertError::Decode {
                context: "image_details field",
                details,
            },
            (_, state) => ConvertError::Structural {
                expected: state.expectation(),
                details,
            },
        }
    }
}

struct RootVisitor<'a> {
    run: &'a mut ConversionRun,
}

impl<'de, 'a> Visitor<'de> for RootVisitor<'a> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Lineaje report object")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        self.run.begin_root();
        while let Some(key) = map.next_key::<String>()? {
            match RootKey::from_key(&key) {
                Some(root) if self.run.enter_root_key(root) => match root {
                    RootKey::Metadata => {
                        map.next_value_seed(MetadataSeed { run: &mut *self.run })?
                    }
                    RootKey::ImageDetails => {
                        map.next_value_seed(ImageDetailsSeed { run: &mut *self.run })?
                    }
                },
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }

            if self.run.state == ScanState::Done {
                return Err(de::Error::custom("report scan complete"));
            }
        }
        Ok(())
    }
}

/// Decoder for the `meta_data` object
struct MetadataSeed<'a> {
    run: &'a mut ConversionRun,
}

impl<'de, 'a> DeserializeSeed<'de> for MetadataSeed<'a> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a> Visitor<'de> for MetadataSeed<'a> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "start of {} object", METADATA_KEY)
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        self.run.open_object(RootKey::Metadata);
        while let Some(key) = map.next_key::<String>()? {
            if key == FIXES_KEY && self.run.expect_fixes_array() {
                map.next_value_seed(FixListSeed { run: &mut *self.run })?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        if let Err(err) = self.run.close_object(RootKey::Metadata) {
            return Err(self.run.raise(err));
        }
        Ok(())
    }
}

/// Decoder for the fix-plan array; records are handled one at a time
struct FixListSeed<'a> {
    run: &'a mut ConversionRun,
}

impl<'de, 'a> DeserializeSeed<'de> for FixListSeed<'a> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, 'a> Visitor<'de> for FixListSeed<'a> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("start of array for fixes")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.run.open_fixes_array();
        while let Some(record) = seq.next_element_seed(FixRecordSeed)? {
            if let Err(err) = self.run.accept(record.unwrap_or_default()) {
                return Err(self.run.raise(err));
            }
        }
        self.run.close_fixes_array();
        Ok(())
    }
}

/// Decoder for one fix-plan element
///
/// Only objects are records; `null` decodes to `None` and is skipped like a
/// record without PURLs.
struct FixRecordSeed;

impl<'de> DeserializeSeed<'de> for FixRecordSeed {
    type Value = Option<FixRecord>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(self)
    }
}

impl<'de> Visitor<'de> for FixRecordSeed {
    type Value = Option<FixRecord>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a fix record object")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        FixRecord::deserialize(de::value::MapAccessDeserializer::new(map)).map(Some)
    }
}

/// Fixed-schema decoder for the `image_details` object
struct ImageDetailsSeed<'a> {
    run: &'a mut ConversionRun,
}

impl<'de, 'a> DeserializeSeed<'de> for ImageDetailsSeed<'a> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a> Visitor<'de> for ImageDetailsSeed<'a> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "start of {} object", IMAGE_DETAILS_KEY)
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        self.run.open_object(RootKey::ImageDetails);
        let details = self.run.assembler.image_details_mut();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "platform" => details.platform = next_or_default(&mut map)?,
                "image_repository" => details.image_repository = next_or_default(&mut map)?,
                "image_name" => details.image_name = next_or_default(&mut map)?,
                "image_version" => details.image_version = next_or_default(&mut map)?,
                "image_digest" => details.image_digest = next_or_default(&mut map)?,
                "private" => details.private = next_or_default(&mut map)?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        if let Err(err) = self.run.close_object(RootKey::ImageDetails) {
            return Err(self.run.raise(err));
        }
        Ok(())
    }
}

/// Reads the next value, treating `null` as the type's default
fn next_or_default<'de, M, T>(map: &mut M) -> Result<T, M::Error>
where
    M: MapAccess<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(map.next_value::<Option<T>>()?.unwrap_or_default())
}
