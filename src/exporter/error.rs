// ==========================================
// 运动目录数据整合工具 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("输出写入失败: {0}")]
    WriteFailure(String),

    #[error("CSV 生成失败: {0}")]
    CsvWriteError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailure(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

// 实现 From<tempfile::PersistError>
impl From<tempfile::PersistError> for ExportError {
    fn from(err: tempfile::PersistError) -> Self {
        ExportError::WriteFailure(format!("原子改名失败: {}", err))
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
