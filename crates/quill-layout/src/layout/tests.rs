//! Unit tests for layout composition and construction.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use quill_config::{LayoutConfig, LineEndingMode, RendererSpec};
use rstest::{fixture, rstest};
use tracing::Level;

use super::*;
use crate::renderers::{LiteralRenderer, MessageRenderer, ProcessNameRenderer};
use crate::tests::support::{FixedIdentity, fixed_environment};

/// Counts how often it is asked to render.
#[derive(Debug, Clone, Default)]
struct CountingRenderer {
    calls: Arc<AtomicUsize>,
}

impl CountingRenderer {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LayoutRenderer for CountingRenderer {
    fn append(&self, buffer: &mut String, _event: &LogEvent<'_>) {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        buffer.push_str(&call.to_string());
    }
}

#[fixture]
fn registry() -> RendererRegistry {
    RendererRegistry::with_builtins()
}

fn build(registry: &RendererRegistry, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    LayoutBuilder::new(registry, fixed_environment()).build(config)
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn empty_layout_renders_nothing() {
    let layout = Layout::new();
    assert!(layout.is_empty());
    assert_eq!(layout.render(&LogEvent::default()), "");
    assert!(layout.is_thread_agnostic());
}

#[test]
fn parts_render_in_order() {
    let identity = FixedIdentity::new("/usr/bin/myapp", "myapp");
    let layout = Layout::new()
        .with_declared(ProcessNameRenderer::new(&identity))
        .with_declared(LiteralRenderer::new(": "))
        .with_declared(MessageRenderer);
    let event = LogEvent::new(Level::INFO, "app", "started");
    assert_eq!(layout.len(), 3);
    assert_eq!(layout.render(&event), "myapp: started");
}

#[test]
fn render_into_appends_to_existing_text() {
    let layout = Layout::new().with_declared(MessageRenderer);
    let mut buffer = String::from("> ");
    layout.render_into(&mut buffer, &LogEvent::new(Level::INFO, "", "hi"));
    assert_eq!(buffer, "> hi");
}

#[test]
fn process_invariant_parts_render_once() {
    let counter = CountingRenderer::default();
    let layout = Layout::new().with_part(counter.clone(), RendererTraits::PROCESS_INVARIANT);
    for _ in 0..5 {
        assert_eq!(layout.render(&LogEvent::default()), "1");
    }
    assert_eq!(counter.calls(), 1);
    assert!(layout.is_process_invariant());
}

#[test]
fn per_event_parts_render_every_time() {
    let counter = CountingRenderer::default();
    let layout = Layout::new().with_part(counter.clone(), RendererTraits::PER_EVENT);
    let outputs: Vec<String> = (0..3)
        .map(|_| layout.render(&LogEvent::default()))
        .collect();
    assert_eq!(outputs, vec!["1", "2", "3"]);
    assert_eq!(counter.calls(), 3);
    assert!(!layout.is_process_invariant());
}

#[test]
fn cached_part_is_shared_across_threads() {
    let counter = CountingRenderer::default();
    let layout = &Layout::new().with_part(counter.clone(), RendererTraits::PROCESS_INVARIANT);
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(move || assert_eq!(layout.render(&LogEvent::default()), "1"));
        }
    });
    assert_eq!(counter.calls(), 1);
}

#[test]
fn thread_affine_part_marks_layout() {
    let layout = Layout::new()
        .with_declared(MessageRenderer)
        .with_part(LiteralRenderer::new("x"), RendererTraits::new(false, false));
    assert!(!layout.is_thread_agnostic());
}

#[rstest]
#[case(LineEndingMode::CRLF, "hi\r\n")]
#[case(LineEndingMode::LF, "hi\n")]
#[case(LineEndingMode::CR, "hi\r")]
#[case(LineEndingMode::NULL, "hi\0")]
#[case(LineEndingMode::NONE, "hi")]
fn render_line_appends_terminator(#[case] mode: LineEndingMode, #[case] expected: &str) {
    let layout = Layout::new()
        .with_declared(MessageRenderer)
        .with_line_ending(mode);
    assert_eq!(layout.line_ending(), mode);
    assert_eq!(layout.render_line(&LogEvent::new(Level::INFO, "", "hi")), expected);
}

// ---------------------------------------------------------------------------
// Construction from configuration
// ---------------------------------------------------------------------------

#[rstest]
fn builder_applies_options_and_line_ending(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("ProcessName").with_option("fullname", "true"))
        .with_renderer(RendererSpec::new("literal").with_option("text", " "))
        .with_renderer(RendererSpec::new("level"))
        .with_renderer(RendererSpec::new("literal").with_option("text", " "))
        .with_renderer(RendererSpec::new("message"))
        .with_line_ending(LineEndingMode::CRLF);
    let layout = build(&registry, &config).expect("valid layout");
    let event = LogEvent::new(Level::ERROR, "app", "boom");
    assert_eq!(layout.render_line(&event), "/usr/bin/myapp ERROR boom\r\n");
}

#[cfg(unix)]
#[rstest]
fn builder_configures_special_folder(registry: RendererRegistry) {
    let config = LayoutConfig::default().with_renderer(
        RendererSpec::new("specialfolder")
            .with_option("folder", "MyDocuments")
            .with_option("dir", "logs")
            .with_option("file", "app.log"),
    );
    let layout = build(&registry, &config).expect("valid layout");
    assert!(layout.is_process_invariant());
    assert_eq!(
        layout.render(&LogEvent::default()),
        "/home/alice/Documents/logs/app.log"
    );
}

#[rstest]
#[case::named_folder("MyDocuments", "/home/alice/Documents/")]
#[case::alias("desktop", "/home/alice/Desktop")]
fn builder_routes_unnamed_value_to_default_option(
    registry: RendererRegistry,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("specialfolder").with_option("", value));
    let layout = build(&registry, &config).expect("valid layout");
    assert_eq!(layout.render(&LogEvent::default()), expected);
}

#[rstest]
fn builder_reports_default_option_by_its_name(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("specialfolder").with_option(" ", "Attic"));
    assert!(matches!(
        build(&registry, &config),
        Err(LayoutError::InvalidOption { option, .. }) if option == "folder"
    ));
}

#[rstest]
fn builder_rejects_unnamed_value_without_default_option(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("processname").with_option("", "true"));
    assert_eq!(
        build(&registry, &config).expect_err("no default option"),
        LayoutError::UnknownOption {
            renderer: String::from("processname"),
            option: String::new(),
        }
    );
}

#[rstest]
fn builder_rejects_unknown_renderer(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("message"))
        .with_renderer(RendererSpec::new("nonexistent"));
    assert_eq!(
        build(&registry, &config).expect_err("unknown renderer"),
        LayoutError::UnknownRenderer {
            name: String::from("nonexistent"),
        }
    );
}

#[rstest]
fn builder_rejects_unknown_option(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("ProcessName").with_option("colour", "red"));
    assert_eq!(
        build(&registry, &config).expect_err("unknown option"),
        LayoutError::UnknownOption {
            renderer: String::from("processname"),
            option: String::from("colour"),
        }
    );
}

#[rstest]
fn builder_rejects_invalid_option_value(registry: RendererRegistry) {
    let config = LayoutConfig::default()
        .with_renderer(RendererSpec::new("specialfolder").with_option("folder", "Attic"));
    let err = build(&registry, &config).expect_err("invalid folder");
    assert_eq!(
        err,
        LayoutError::InvalidOption {
            renderer: String::from("specialfolder"),
            option: String::from("folder"),
            message: String::from("unknown special folder 'Attic'"),
        }
    );
    assert!(err.to_string().contains("Attic"));
}

#[rstest]
fn builder_accepts_json_configuration(registry: RendererRegistry) {
    let config = LayoutConfig::from_json_str(
        r#"{
            "renderers": [
                { "name": "processname" },
                { "name": "literal", "options": { "text": "|" } },
                { "name": "logger", "options": { "shortname": "true" } }
            ],
            "line_ending": "LF"
        }"#,
    )
    .expect("valid json");
    let layout = build(&registry, &config).expect("valid layout");
    let event = LogEvent::new(Level::INFO, "app::db", "");
    assert_eq!(layout.render_line(&event), "myapp|db\n");
}
