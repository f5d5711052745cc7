#[cfg(test)]
mod tests {
    use crate::types::Language;

    #[test]
    fn test_from_filename_common_sources() {
        assert_eq!(Language::from_filename("main.py"), Language::Python);
        assert_eq!(Language::from_filename("app.js"), Language::JavaScript);
        assert_eq!(Language::from_filename("index.ts"), Language::TypeScript);
        assert_eq!(Language::from_filename("App.jsx"), Language::React);
        assert_eq!(Language::from_filename("App.tsx"), Language::ReactTs);
        assert_eq!(Language::from_filename("Main.java"), Language::Java);
        assert_eq!(Language::from_filename("lib.rs"), Language::Rust);
        assert_eq!(Language::from_filename("server.go"), Language::Go);
    }

    #[test]
    fn test_from_filename_markup_and_config() {
        assert_eq!(Language::from_filename("README.md"), Language::Markdown);
        assert_eq!(Language::from_filename("config.yml"), Language::Yaml);
        assert_eq!(Language::from_filename("config.yaml"), Language::Yaml);
        assert_eq!(Language::from_filename("Cargo.toml"), Language::Toml);
        assert_eq!(Language::from_filename("package.json"), Language::Json);
        assert_eq!(Language::from_filename("setup.sh"), Language::Bash);
        assert_eq!(Language::from_filename("schema.sql"), Language::Sql);
    }

    #[test]
    fn test_from_filename_case_insensitive() {
        assert_eq!(Language::from_filename("MAIN.PY"), Language::Python);
        assert_eq!(Language::from_filename("Index.Ts"), Language::TypeScript);
    }

    #[test]
    fn test_from_filename_fallback_is_text() {
        assert_eq!(Language::from_filename("Makefile"), Language::Text);
        assert_eq!(Language::from_filename("data.bin"), Language::Text);
        assert_eq!(Language::from_filename(""), Language::Text);
        assert_eq!(Language::from_filename("noextension"), Language::Text);
    }

    #[test]
    fn test_from_filename_nested_path() {
        assert_eq!(Language::from_filename("src/api/routes.py"), Language::Python);
    }

    #[test]
    fn test_from_tag_roundtrip_and_fallback() {
        assert_eq!(Language::from_tag("python"), Language::Python);
        assert_eq!(Language::from_tag("react-ts"), Language::ReactTs);
        assert_eq!(Language::from_tag("cobol"), Language::Text);
    }

    #[test]
    fn test_serde_tag_roundtrip() {
        let json = serde_json::to_string(&Language::ReactTs).unwrap();
        assert_eq!(json, "\"react-ts\"");

        let lang: Language = serde_json::from_str("\"python\"").unwrap();
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn test_serde_unknown_tag_falls_back_to_text() {
        let lang: Language = serde_json::from_str("\"brainfuck\"").unwrap();
        assert_eq!(lang, Language::Text);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Language::Python.to_string(), "python");
        assert_eq!(Language::ReactTs.to_string(), "react-ts");
        assert_eq!(Language::Text.to_string(), "text");
    }
}
