/// Report-to-manifest transformation engine
///
/// Pure conversion logic: package-URL decomposition, OS classification,
/// and the streaming reader that turns a fix-plan report into an
/// [`domain::UpdateManifest`].
pub mod domain;
pub mod policies;
pub mod services;
