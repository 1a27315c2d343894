//! Output locations for the generated record files.
//!
//! Both programs write into fixed directories below a root (the working
//! directory when run from the command line). The directories are never
//! created here; provisioning them is left to whoever deploys the tools.

use std::path::{Path, PathBuf};

/// Directory holding one file per submitted activity
pub const SUBMISSIONS_DIR: &str = "atividades_alunos";

/// Directory holding one roster file per class session
pub const ATTENDANCE_DIR: &str = "relatorios_presenca";

/// Extension appended to every generated file
pub const FILE_EXTENSION: &str = "txt";

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub root: PathBuf,
    pub submissions_dir: &'static str,
    pub attendance_dir: &'static str,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::with_root(".")
    }
}

impl OutputConfig {
    /// Config whose output directories live below `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        OutputConfig {
            root: root.into(),
            submissions_dir: SUBMISSIONS_DIR,
            attendance_dir: ATTENDANCE_DIR,
        }
    }

    /// `<root>/atividades_alunos/<activity_id>_<registration_number>.txt`
    pub fn submission_path(&self, activity_id: &str, registration_number: &str) -> PathBuf {
        self.file_in(
            self.submissions_dir,
            &format!("{}_{}", activity_id, registration_number),
        )
    }

    /// `<root>/relatorios_presenca/<file_base_name>.txt`
    pub fn attendance_path(&self, file_base_name: &str) -> PathBuf {
        self.file_in(self.attendance_dir, file_base_name)
    }

    fn file_in(&self, dir: &str, base_name: &str) -> PathBuf {
        // Not `with_extension`: base names such as "1.0" must keep their dots.
        Path::new(&self.root)
            .join(dir)
            .join(format!("{}.{}", base_name, FILE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_path_joins_activity_and_registration() {
        let config = OutputConfig::default();
        assert_eq!(
            config.submission_path("XYZ1111", "A12345B"),
            Path::new(".").join("atividades_alunos").join("XYZ1111_A12345B.txt")
        );
    }

    #[test]
    fn attendance_path_uses_base_name_verbatim() {
        let config = OutputConfig::with_root("/srv/escola");
        assert_eq!(
            config.attendance_path("SI1A23_25102023"),
            PathBuf::from("/srv/escola/relatorios_presenca/SI1A23_25102023.txt")
        );
        assert_eq!(
            config.attendance_path("turma.v2"),
            PathBuf::from("/srv/escola/relatorios_presenca/turma.v2.txt")
        );
    }
}
