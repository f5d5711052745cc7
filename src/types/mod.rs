use serde::{Deserialize, Serialize};

mod language;

pub use language::Language;

/// 生成的代码文件
///
/// 由单次生成请求创建，创建后不可变，由调用方独占所有权直至写入磁盘。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// 相对文件路径
    pub filename: String,
    /// 清洗后的文件内容
    pub content: String,
    /// 语言标签
    pub language: Language,
    /// 外部依赖名（首次出现顺序，无重复，不含相对路径导入）
    pub dependencies: Vec<String>,
}

impl GeneratedFile {
    /// 构造生成文件，并在此处维护dependencies的不变量：
    /// 去重（保留首次出现）、剔除相对/本地导入
    pub fn new(
        filename: String,
        content: String,
        language: Language,
        dependencies: Vec<String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for dep in dependencies {
            if dep.starts_with('.') {
                continue;
            }
            if !unique.contains(&dep) {
                unique.push(dep);
            }
        }

        Self {
            filename,
            content,
            language,
            dependencies: unique,
        }
    }
}

/// 项目结构计划
///
/// 由结构响应解析器产出，驱动逐文件生成，之后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStructure {
    /// 项目名称
    #[serde(default = "default_project_name")]
    pub name: String,

    /// 计划生成的文件列表（保持顺序）
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

/// 结构计划中的单个文件描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSpec {
    /// 相对文件路径
    pub path: String,

    /// 语言标签，计划中未知的标签反序列化为text
    #[serde(default)]
    pub language: Language,

    /// 文件用途描述
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// 计划声明的依赖列表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

fn default_project_name() -> String {
    "project".to_string()
}

impl ProjectStructure {
    /// 结构解析完全失败时的兜底结构：一个入口文件加一个文档文件
    pub fn fallback() -> Self {
        Self {
            name: default_project_name(),
            files: vec![
                FileSpec {
                    path: "main.py".to_string(),
                    language: Language::Python,
                    purpose: None,
                    dependencies: None,
                },
                FileSpec {
                    path: "README.md".to_string(),
                    language: Language::Markdown,
                    purpose: None,
                    dependencies: None,
                },
            ],
        }
    }
}
