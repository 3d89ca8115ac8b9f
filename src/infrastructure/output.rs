//! 渲染结果的输出目标

use crate::domain::error::Result;
use crate::infrastructure::paths::write_file_safe;
use std::io::Write;
use std::path::PathBuf;

/// 输出目标
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }

    /// 写出渲染好的文本（已包含行尾换行）
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
            OutputSink::File(path) => {
                write_file_safe(path, content)?;
                tracing::info!(path = %path.display(), "已写入输出文件");
            }
        }
        Ok(())
    }
}
