// ==========================================
// 运动目录数据整合工具 - 导入层接口
// ==========================================
// 职责: 文件解析的抽象边界
// ==========================================

use std::collections::HashMap;
use std::path::Path;

use crate::importer::error::ImportResult;

/// 文件解析器接口
///
/// 把一份表格文件解析为"列名 → 单元格值"的原始行序列,
/// 保持行序,不做业务校验
pub trait FileParser {
    fn parse_to_raw_records(&self, file_path: &Path)
        -> ImportResult<Vec<HashMap<String, String>>>;
}
