//! Test fixture utilities for integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment holding a skill directory on disk.
///
/// The temp directory is cleaned up automatically on drop.
pub struct TestSkill {
    _temp_dir: TempDir,
    skill_path: PathBuf,
}

impl TestSkill {
    /// Writes `content` as the SKILL.md of a fresh temp directory.
    pub fn new(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let skill_path = temp_dir.path().join("SKILL.md");
        std::fs::write(&skill_path, content).expect("Failed to write skill file");
        Self {
            _temp_dir: temp_dir,
            skill_path,
        }
    }

    /// Returns the path to the skill file.
    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.skill_path
    }

    /// Writes a supporting file next to the skill file.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write support file");
        path
    }

    /// Creates a command running skillcheck against this skill file.
    pub fn cmd(&self) -> Command {
        let mut cmd = skillcheck_cmd();
        cmd.arg(&self.skill_path);
        cmd
    }
}

/// Creates a bare command for the skillcheck binary.
pub fn skillcheck_cmd() -> Command {
    Command::cargo_bin("skillcheck").expect("Failed to find skillcheck binary")
}

/// A skill file that passes every check without warnings.
pub fn valid_skill() -> String {
    "---\n\
     name: pdf-extractor\n\
     description: \"Use when extracting tables from PDF bank statements into CSV files.\"\n\
     ---\n\
     # PDF Extractor\n\
     \n\
     Instructions go here.\n"
        .to_string()
}
