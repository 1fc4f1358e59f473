use copa_lineaje::prelude::*;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportSource serving an in-memory report
#[derive(Default, Clone)]
pub struct MockReportSource {
    pub content: String,
    pub should_fail: bool,
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockReportSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl ReportSource for MockReportSource {
    fn open_report(&self, path: &Path) -> Result<Box<dyn Read>> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock report open failure");
        }
        Ok(Box::new(Cursor::new(self.content.clone().into_bytes())))
    }
}
