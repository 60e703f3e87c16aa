//! ダウンロード用テキスト成果物

/// 生成テキストの種類とファイル名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    RewrittenResume,
    CoverLetter,
}

impl Artifact {
    pub const MIME_TYPE: &'static str = "text/plain";

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::RewrittenResume => "rewritten-resume.txt",
            Artifact::CoverLetter => "cover-letter.txt",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Artifact::RewrittenResume => "Rewritten Resume",
            Artifact::CoverLetter => "Generated Cover Letter",
        }
    }

    /// 表示中のテキストをそのままファイル化する
    pub fn package(&self, text: &str) -> DownloadFile {
        DownloadFile {
            file_name: self.file_name().to_string(),
            mime_type: Self::MIME_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_file_names() {
        assert_eq!(Artifact::RewrittenResume.file_name(), "rewritten-resume.txt");
        assert_eq!(Artifact::CoverLetter.file_name(), "cover-letter.txt");
    }

    #[test]
    fn test_package_is_byte_identical() {
        let text = "Dear Hiring Manager,\n\nI am excited - 日本語も可\r\n";
        let file = Artifact::CoverLetter.package(text);
        assert_eq!(file.bytes, text.as_bytes());
        assert_eq!(file.file_name, "cover-letter.txt");
        assert_eq!(file.mime_type, "text/plain");
    }
}
