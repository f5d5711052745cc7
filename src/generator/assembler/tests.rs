#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::generator::assembler::ProjectAssembler;
    use crate::generator::context::GeneratorContext;
    use crate::generator::structure::PlanConfidence;
    use crate::llm::{GenerateOptions, ModelClient};
    use crate::types::Language;

    /// 按脚本顺序返回响应的模型，耗尽后报错
    struct ScriptedModel {
        responses: Mutex<VecDeque<Result<String, String>>>,
    }

    impl ScriptedModel {
        fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedModel {
        async fn generate(&self, _prompt: &str, _options: &GenerateOptions) -> Result<String> {
            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(text)) => Ok(text),
                Some(Err(message)) => Err(anyhow!(message)),
                None => Err(anyhow!("scripted model exhausted")),
            }
        }
    }

    fn context_with(responses: Vec<Result<String, String>>) -> GeneratorContext {
        GeneratorContext::with_model(Config::default(), Arc::new(ScriptedModel::new(responses)))
    }

    const TWO_FILE_PLAN: &str = r#"```json
{
  "name": "demo_app",
  "files": [
    {"path": "src/main.py", "language": "python", "dependencies": ["flask"]},
    {"path": "src/util.py", "language": "python"}
  ]
}
```"#;

    #[tokio::test]
    async fn test_generate_project_writes_planned_and_auxiliary_files() {
        let context = context_with(vec![
            Ok(TWO_FILE_PLAN.to_string()),
            Ok("import flask\napp = flask.Flask(__name__)\n".to_string()),
            Ok("def helper():\n    return 1\n".to_string()),
        ]);
        let assembler = ProjectAssembler::new(&context);
        let output = TempDir::new().unwrap();

        let summary = assembler
            .generate_project("a flask demo", output.path())
            .await
            .unwrap();

        assert_eq!(summary.project_name, "demo_app");
        assert_eq!(summary.plan_confidence, PlanConfidence::Parsed);
        assert_eq!(
            summary.files,
            vec!["src/main.py", "src/util.py", "README.md"]
        );

        assert!(output.path().join("src/main.py").exists());
        assert!(output.path().join("src/util.py").exists());
        let readme = std::fs::read_to_string(output.path().join("README.md")).unwrap();
        assert!(readme.contains("demo_app"));
        assert!(readme.contains("a flask demo"));
    }

    #[tokio::test]
    async fn test_project_generation_trusts_plan_dependencies() {
        // 生成的代码导入requests，但计划声明的是flask；
        // 整体项目路径信任计划，不做代码扫描。该不对称是有意为之。
        let plan = r#"```json
{
  "name": "demo",
  "files": [{"path": "main.py", "language": "python", "dependencies": ["flask"]}]
}
```"#;
        let context = context_with(vec![
            Ok(plan.to_string()),
            Ok("import requests\n".to_string()),
        ]);
        let assembler = ProjectAssembler::new(&context);
        let output = TempDir::new().unwrap();

        let summary = assembler
            .generate_project("demo", output.path())
            .await
            .unwrap();
        assert_eq!(summary.files[0], "main.py");

        let written = std::fs::read_to_string(output.path().join("main.py")).unwrap();
        assert_eq!(written, "import requests");
    }

    #[tokio::test]
    async fn test_single_file_generation_extracts_dependencies() {
        // 单文件路径总是扫描清洗后的代码提取依赖
        let context = context_with(vec![Ok(
            "```python\nimport requests\nimport os\n\nprint('ok')\n```".to_string(),
        )]);
        let assembler = ProjectAssembler::new(&context);

        let file = assembler
            .generate_single_file("fetch a url", "fetch.py")
            .await
            .unwrap();

        assert_eq!(file.filename, "fetch.py");
        assert_eq!(file.language, Language::Python);
        assert_eq!(file.content, "import requests\nimport os\n\nprint('ok')");
        assert_eq!(file.dependencies, vec!["requests", "os"]);
    }

    #[tokio::test]
    async fn test_model_failure_aborts_remaining_plan() {
        let context = context_with(vec![
            Ok(TWO_FILE_PLAN.to_string()),
            Ok("print('first file')\n".to_string()),
            Err("backend unavailable".to_string()),
        ]);
        let assembler = ProjectAssembler::new(&context);
        let output = TempDir::new().unwrap();

        let result = assembler.generate_project("a flask demo", output.path()).await;
        assert!(result.is_err());

        // 失败前已写入的文件保留，其后的文件与辅助文档都不存在
        assert!(output.path().join("src/main.py").exists());
        assert!(!output.path().join("src/util.py").exists());
        assert!(!output.path().join("README.md").exists());
    }

    #[tokio::test]
    async fn test_defaulted_plan_still_generates() {
        // 结构响应完全不可解析时退回兜底结构，仍然产出两个文件
        let context = context_with(vec![
            Ok("```json\nnot json at all\n```".to_string()),
            Ok("print('entry')\n".to_string()),
            Ok("# fallback readme\n".to_string()),
        ]);
        let assembler = ProjectAssembler::new(&context);
        let output = TempDir::new().unwrap();

        let summary = assembler
            .generate_project("anything", output.path())
            .await
            .unwrap();

        assert_eq!(summary.plan_confidence, PlanConfidence::Defaulted);
        assert_eq!(summary.files, vec!["main.py", "README.md", "README.md"]);
        assert!(output.path().join("main.py").exists());
    }
}
