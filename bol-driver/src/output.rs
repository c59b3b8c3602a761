use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes returned PDFs into the output directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Creates `dir` (and parents) if needed
    pub fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `pdf` verbatim and returns its path
    pub fn write(&self, iteration: u32, pdf: &[u8]) -> io::Result<PathBuf> {
        self.write_at(iteration, pdf, Local::now())
    }

    pub fn write_at(&self, iteration: u32, pdf: &[u8], at: DateTime<Local>) -> io::Result<PathBuf> {
        let path = self.dir.join(artifact_name(iteration, at));
        fs::write(&path, pdf)?;
        Ok(path)
    }
}

/// `bill_of_lading_<iteration>_<YYYYMMDDHHMMSSmmm>.pdf`
pub fn artifact_name(iteration: u32, at: DateTime<Local>) -> String {
    format!(
        "bill_of_lading_{iteration}_{}.pdf",
        at.format("%Y%m%d%H%M%S%3f")
    )
}
