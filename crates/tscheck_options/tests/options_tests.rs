//! Compiler option and tsconfig.json tests.
//!
//! Covers the derived accessors and JSON loading.

use tscheck_options::*;

fn options_from(json: &str) -> CompilerOptions {
    let config = parse_tsconfig(json).expect("valid tsconfig");
    config.compiler_options
}

// ============================================================================
// Derived Accessors
// ============================================================================

#[test]
fn test_class_fields_default_from_es2022() {
    let old = options_from(r#"{ "compilerOptions": { "target": "es2021" } }"#);
    let new = options_from(r#"{ "compilerOptions": { "target": "ES2022" } }"#);
    assert!(!old.use_define_for_class_fields());
    assert!(new.use_define_for_class_fields());
    assert!(new.emit_standard_class_fields());
}

#[test]
fn test_explicit_define_false_disables_standard_fields() {
    let options = options_from(r#"{ "compilerOptions": { "target": "esnext", "useDefineForClassFields": false } }"#);
    assert!(!options.emit_standard_class_fields());
}

#[test]
fn test_verbatim_module_syntax_enables_isolated_modules() {
    let options = options_from(r#"{ "compilerOptions": { "verbatimModuleSyntax": true } }"#);
    assert!(options.isolated_modules_enabled());
    assert_eq!(options.isolated_modules_flag_name(), "verbatimModuleSyntax");

    let options = options_from(r#"{ "compilerOptions": { "isolatedModules": true } }"#);
    assert_eq!(options.isolated_modules_flag_name(), "isolatedModules");
}

#[test]
fn test_always_strict_follows_strict() {
    let options = options_from(r#"{ "compilerOptions": { "strict": true } }"#);
    assert!(options.always_strict_enabled());
    let options = options_from(r#"{ "compilerOptions": { "strict": true, "alwaysStrict": false } }"#);
    assert!(!options.always_strict_enabled());
}

// ============================================================================
// tsconfig.json
// ============================================================================

#[test]
fn test_module_kind_is_case_insensitive() {
    let options = options_from(r#"{ "compilerOptions": { "module": "NodeNext" } }"#);
    assert_eq!(options.module, Some(ModuleKind::NodeNext));
    let options = options_from(r#"{ "compilerOptions": { "module": "esnext" } }"#);
    assert_eq!(options.module, Some(ModuleKind::ESNext));
}

#[test]
fn test_unknown_target_is_an_error() {
    let result = parse_tsconfig(r#"{ "compilerOptions": { "target": "es1999" } }"#);
    assert!(matches!(result, Err(ConfigError::Json(_))), "got {:?}", result);
}

#[test]
fn test_include_and_files_are_read() {
    let config = parse_tsconfig(r#"{ "include": ["src"], "files": ["a.ts", "b.ts"] }"#).expect("valid tsconfig");
    assert_eq!(config.include.as_deref(), Some(&["src".to_string()][..]));
    assert_eq!(config.files.map(|f| f.len()), Some(2));
    assert_eq!(config.compiler_options, CompilerOptions::default());
}

#[test]
fn test_missing_file_reports_path() {
    let path = std::path::Path::new("/nonexistent/tscheck/tsconfig.json");
    let err = load_tsconfig(path).expect_err("file does not exist");
    assert!(err.to_string().contains("tsconfig.json"), "message {:?}", err.to_string());
}

#[test]
fn test_options_round_trip_through_json() {
    let options = options_from(r#"{ "compilerOptions": { "target": "es2017", "noEmit": true } }"#);
    let json = serde_json::to_string(&options).expect("serializable");
    assert!(json.contains("\"target\":\"ES2017\""), "json {}", json);
    assert!(json.contains("\"noEmit\":true"), "json {}", json);
}
