use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Destination of the rendered manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Maps an optional `--output` value onto a destination
    pub fn from_output(output: Option<&str>) -> Self {
        match output {
            Some(path) => PresenterType::File(PathBuf::from(path)),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
///
/// Chooses between stdout and file output; file output goes through the
/// symlink and parent-directory checks of [`FileSystemWriter`].
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the given destination
    ///
    /// # Examples
    /// ```
    /// use copa_lineaje::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("{}").is_ok());
    }

    #[test]
    fn test_create_file_presenter_writes_to_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("{\"updates\":[]}").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"updates\":[]}"
        );
    }

    #[test]
    fn test_from_output_option() {
        assert_eq!(PresenterType::from_output(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output(Some("manifest.json")),
            PresenterType::File(PathBuf::from("manifest.json"))
        );
    }

    #[test]
    fn test_presenter_type_equality() {
        let stdout1 = PresenterType::Stdout;
        let stdout2 = PresenterType::Stdout;
        assert_eq!(stdout1, stdout2);

        let file1 = PresenterType::File(PathBuf::from("manifest-a.json"));
        let file2 = PresenterType::File(PathBuf::from("manifest-a.json"));
        assert_eq!(file1, file2);

        let file3 = PresenterType::File(PathBuf::from("manifest-b.json"));
        assert_ne!(file1, file3);
    }

    #[test]
    fn test_presenter_type_clone() {
        let original = PresenterType::File(PathBuf::from("manifest.json"));
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
