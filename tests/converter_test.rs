//! Integration tests for the converter registry.

use manuform::convert::ConverterRegistry;
use manuform::error::Result;
use manuform::{Engine, Error, PairConverter};
use std::path::Path;
use std::sync::Arc;

/// Mock converter for testing.
struct MockConverter {
    from: &'static str,
    to: &'static str,
    name: &'static str,
}

impl MockConverter {
    fn new(from: &'static str, to: &'static str, name: &'static str) -> Self {
        Self { from, to, name }
    }
}

impl PairConverter for MockConverter {
    fn source_ext(&self) -> &'static str {
        self.from
    }

    fn target_ext(&self) -> &'static str {
        self.to
    }

    fn name(&self) -> &str {
        self.name
    }

    fn convert(&self, _input: &Path, output: &Path) -> Result<()> {
        std::fs::write(output, format!("converted by {}", self.name))?;
        Ok(())
    }
}

#[test]
fn test_register_custom_converter() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new("rtf", "txt", "mock-rtf")));

    assert!(registry.supports("rtf", "txt"));
    assert!(registry.supports("RTF", "TXT"));
    assert!(!registry.supports("txt", "rtf"));
    assert_eq!(registry.get("rtf", "txt").unwrap().name(), "mock-rtf");
}

#[test]
fn test_custom_converter_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.rtf");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "ignored").unwrap();

    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new("rtf", "txt", "mock-rtf")));
    registry.convert(&input, &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "converted by mock-rtf"
    );
}

#[test]
fn test_later_registration_wins() {
    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new("rtf", "txt", "first")));
    registry.register(Arc::new(MockConverter::new("rtf", "txt", "second")));

    assert_eq!(registry.get("rtf", "txt").unwrap().name(), "second");
}

#[test]
fn test_engine_with_custom_registry() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.rtf");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "ignored").unwrap();

    let mut registry = ConverterRegistry::new();
    registry.register(Arc::new(MockConverter::new("rtf", "txt", "mock-rtf")));
    let engine = Engine::with_registry(registry);

    engine.quick_convert(&input, &output).unwrap();
    assert!(output.exists());

    // The default pairs were not registered on this engine.
    let err = engine
        .quick_convert(Path::new("a.md"), Path::new("b.txt"))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedConversion { .. }));
}

#[test]
fn test_empty_registry_supports_nothing() {
    let registry = ConverterRegistry::new();
    assert!(registry.supported_pairs().is_empty());
    assert!(!registry.supports("txt", "docx"));
}
