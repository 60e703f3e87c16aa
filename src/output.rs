//! 生成テキストの保存

use crate::error::Result;
use resume_assist_common::Artifact;
use std::path::{Path, PathBuf};

/// `--output` の解決。パス省略時は固定ファイル名でカレントディレクトリに保存
pub fn resolve_path(artifact: Artifact, output: Option<PathBuf>, cwd: &Path) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(artifact.file_name()),
        Some(path) => path,
        None => cwd.join(artifact.file_name()),
    }
}

/// 表示中テキストをそのままのバイト列で書き出す
pub fn save(artifact: Artifact, text: &str, path: &Path) -> Result<()> {
    let file = artifact.package(text);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &file.bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_default_name() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Artifact::CoverLetter, None, cwd),
            PathBuf::from("/work/cover-letter.txt")
        );
    }

    #[test]
    fn test_resolve_directory() {
        let dir = tempdir().unwrap();
        let path = resolve_path(
            Artifact::RewrittenResume,
            Some(dir.path().to_path_buf()),
            Path::new("."),
        );
        assert_eq!(path, dir.path().join("rewritten-resume.txt"));
    }

    #[test]
    fn test_save_writes_exact_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("letter.txt");
        let text = "Dear Hiring Manager,\n\n日本語\r\n";

        save(Artifact::CoverLetter, text, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes());
    }
}
