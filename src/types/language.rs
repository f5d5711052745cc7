use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 语言标签 - 封闭集合，未识别的扩展名回退为Text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    React,
    ReactTs,
    Java,
    Cpp,
    C,
    Rust,
    Go,
    Ruby,
    Php,
    Html,
    Css,
    Markdown,
    Json,
    Yaml,
    Toml,
    Bash,
    Sql,
    #[default]
    Text,
}

impl Language {
    /// 根据文件名的扩展名检测语言（大小写不敏感，永不失败）
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "py" => Language::Python,
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "jsx" => Language::React,
            "tsx" => Language::ReactTs,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "rs" => Language::Rust,
            "go" => Language::Go,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "html" => Language::Html,
            "css" => Language::Css,
            "md" => Language::Markdown,
            "json" => Language::Json,
            "yml" | "yaml" => Language::Yaml,
            "toml" => Language::Toml,
            "sh" => Language::Bash,
            "sql" => Language::Sql,
            _ => Language::Text,
        }
    }

    /// 获取语言标签字符串（与结构计划JSON中的language字段一致）
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::React => "react",
            Language::ReactTs => "react-ts",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Html => "html",
            Language::Css => "css",
            Language::Markdown => "markdown",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Toml => "toml",
            Language::Bash => "bash",
            Language::Sql => "sql",
            Language::Text => "text",
        }
    }

    /// 根据标签字符串还原语言，未识别的标签回退为Text（永不失败）
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "python" => Language::Python,
            "javascript" => Language::JavaScript,
            "typescript" => Language::TypeScript,
            "react" => Language::React,
            "react-ts" => Language::ReactTs,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "rust" => Language::Rust,
            "go" => Language::Go,
            "ruby" => Language::Ruby,
            "php" => Language::Php,
            "html" => Language::Html,
            "css" => Language::Css,
            "markdown" => Language::Markdown,
            "json" => Language::Json,
            "yaml" => Language::Yaml,
            "toml" => Language::Toml,
            "bash" => Language::Bash,
            "sql" => Language::Sql,
            _ => Language::Text,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Language::from_tag(&tag))
    }
}

// Include tests
#[cfg(test)]
mod tests;
