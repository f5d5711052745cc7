#[cfg(test)]
mod tests {
    use crate::generator::structure::{PlanConfidence, StructureOutcome, StructureParser};
    use crate::types::Language;

    #[test]
    fn test_parse_json_fence() {
        let parser = StructureParser::new();
        let response = r#"Here is the plan:

```json
{
  "name": "todo_api",
  "description": "a small REST API",
  "files": [
    {
      "path": "app/main.py",
      "language": "python",
      "purpose": "application entry point",
      "dependencies": ["fastapi", "uvicorn"]
    },
    {
      "path": "app/models.py",
      "language": "python"
    }
  ]
}
```

Let me know if you need anything else."#;

        let outcome = parser.parse(response);
        assert_eq!(outcome.confidence(), PlanConfidence::Parsed);

        let structure = outcome.into_structure();
        assert_eq!(structure.name, "todo_api");
        assert_eq!(structure.files.len(), 2);
        assert_eq!(structure.files[0].path, "app/main.py");
        assert_eq!(structure.files[0].language, Language::Python);
        assert_eq!(
            structure.files[0].dependencies,
            Some(vec!["fastapi".to_string(), "uvicorn".to_string()])
        );
        assert_eq!(structure.files[1].purpose, None);
    }

    #[test]
    fn test_parse_json_fence_with_missing_name() {
        let parser = StructureParser::new();
        let response = "```json\n{\"files\": [{\"path\": \"main.py\", \"language\": \"python\"}]}\n```";

        let outcome = parser.parse(response);
        assert_eq!(outcome.confidence(), PlanConfidence::Parsed);
        assert_eq!(outcome.structure().name, "project");
        assert_eq!(outcome.structure().files.len(), 1);
    }

    #[test]
    fn test_parse_plain_lines_fallback() {
        let parser = StructureParser::new();
        let response = "\
Project layout:

- src/main.py
- src/utils.py
- frontend/app.js
some prose that is not a file
- README notes
";

        let outcome = parser.parse(response);
        assert_eq!(outcome.confidence(), PlanConfidence::Recovered);

        let structure = outcome.into_structure();
        assert_eq!(structure.name, "project");
        let paths: Vec<&str> = structure.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/main.py", "src/utils.py", "frontend/app.js"]);
        assert_eq!(structure.files[0].language, Language::Python);
        assert_eq!(structure.files[2].language, Language::JavaScript);
    }

    #[test]
    fn test_parse_plain_lines_preserves_order() {
        let parser = StructureParser::new();
        let response = "server.go\nhandler.rs\nlib.cpp\n";

        let structure = parser.parse(response).into_structure();
        let paths: Vec<&str> = structure.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["server.go", "handler.rs", "lib.cpp"]);
    }

    #[test]
    fn test_malformed_json_returns_default() {
        let parser = StructureParser::new();
        let response = "```json\n{\"name\": \"broken\", \"files\": [}\n```";

        let outcome = parser.parse(response);
        assert_eq!(outcome.confidence(), PlanConfidence::Defaulted);

        let structure = outcome.structure();
        assert_eq!(structure.name, "project");
        assert_eq!(structure.files.len(), 2);
        assert_eq!(structure.files[0].path, "main.py");
        assert_eq!(structure.files[1].path, "README.md");

        match outcome {
            StructureOutcome::Defaulted { reason, .. } => {
                assert!(reason.contains("json fence"));
            }
            _ => panic!("expected Defaulted outcome"),
        }
    }

    #[test]
    fn test_empty_response_recovers_empty_file_list() {
        let parser = StructureParser::new();
        let outcome = parser.parse("");

        assert_eq!(outcome.confidence(), PlanConfidence::Recovered);
        assert!(outcome.structure().files.is_empty());
    }
}
