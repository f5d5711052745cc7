//! 提示词构造 - 结构规划与逐文件生成的prompt模板

use crate::types::{FileSpec, Language, ProjectStructure};

/// 代码生成的通用规则，注入到每个prompt的开头
const CODING_RULES: &str = r#"## CODING RULES

1. **PROFESSIONAL QUALITY**
   - Clean, modular, maintainable code
   - Descriptive English names (snake_case for Python, camelCase for JS)
   - Documentation and comments where necessary
   - Robust error handling

2. **BEST PRACTICES**
   - Single responsibility principle
   - Small, focused functions
   - No duplicated code (DRY)
   - Separation of concerns

3. **SECURITY**
   - Validate all external inputs
   - Never expose sensitive information
   - Use prepared statements for SQL
   - Sanitize user input

4. **CONSISTENT STYLE**
   - Follow the language's style guide
   - Consistent indentation (4 spaces for Python, 2 for JS)
   - Lines at most 80-100 characters
"#;

/// 结构规划prompt
pub fn structure_prompt(requirements: &str) -> String {
    format!(
        r#"{CODING_RULES}
## TASK: PLAN A PROJECT STRUCTURE

### REQUIREMENTS:
{requirements}

### INSTRUCTIONS:
1. Analyze the requirements and design a professional project structure
2. List every file needed, with its path and language
3. Aim for a scalable, maintainable architecture
4. Include the configuration files the project needs

### RESPONSE FORMAT:
```json
{{
  "name": "project_name",
  "description": "short_description",
  "files": [
    {{
      "path": "path/to/file.py",
      "language": "python",
      "purpose": "what this file is for",
      "dependencies": ["dep1", "dep2"]
    }}
  ]
}}
```"#
    )
}

/// 整体项目中单个文件的生成prompt，携带项目上下文
pub fn file_prompt(requirements: &str, file: &FileSpec, structure: &ProjectStructure) -> String {
    let purpose = file.purpose.as_deref().unwrap_or("see project requirements");
    let sibling_files = structure
        .files
        .iter()
        .map(|f| format!("- {}", f.path))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"{CODING_RULES}
## TASK: GENERATE ONE PROJECT FILE

### PROJECT REQUIREMENTS:
{requirements}

### PROJECT: {name}
All planned files:
{sibling_files}

### FILE TO GENERATE:
- path: {path}
- language: {language}
- purpose: {purpose}

### INSTRUCTIONS:
Write the complete content of `{path}` and nothing else.
Do not wrap the code in markdown fences."#,
        name = structure.name,
        path = file.path,
        language = file.language,
    )
}

/// 孤立单文件的生成prompt
pub fn single_file_prompt(requirements: &str, filename: &str, language: Language) -> String {
    format!(
        r#"{CODING_RULES}
## TASK: GENERATE A SINGLE FILE

### REQUIREMENTS:
{requirements}

### FILE TO GENERATE:
- filename: {filename}
- language: {language}

### INSTRUCTIONS:
Write the complete content of `{filename}` and nothing else.
Do not wrap the code in markdown fences."#
    )
}
