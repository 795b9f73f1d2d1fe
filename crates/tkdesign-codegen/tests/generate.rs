//! End-to-end generation over a design-file fixture.

use serde_json::{json, Value};
use tkdesign_codegen::{
    AssetKind, CodegenError, Element, ElementKind, Generator, GeneratorOptions, Geometry, Node,
};
use tkdesign_core::DesignError;

const LOGIN: &str = include_str!("fixtures/login.json");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn login_frame(file: &Value) -> &Value {
    &file["document"]["children"][0]["children"][0]
}

fn generator() -> Generator<'static> {
    Generator::new(GeneratorOptions::default()).unwrap()
}

#[test]
fn test_document_yields_one_program_per_frame() {
    init_tracing();
    let programs = generator().generate_document_str(LOGIN).unwrap();

    let names: Vec<_> = programs.iter().map(|p| p.frame_name.as_str()).collect();
    assert_eq!(names, ["Login", "Empty"]);

    let empty = &programs[1];
    assert!(empty.elements.is_empty());
    assert_eq!(empty.window.width, 121);
    assert_eq!(empty.window.height, 80);
    assert_eq!(empty.window.bg_color, "#ffffff");
}

#[test]
fn test_elements_in_traversal_order() {
    let programs = generator().generate_document_str(LOGIN).unwrap();
    let login = &programs[0];

    let kinds: Vec<_> = login.elements.iter().map(Element::kind).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Rectangle,
            ElementKind::Text,
            ElementKind::Button,
            ElementKind::TextEntry,
            ElementKind::Image,
            ElementKind::TextEntry,
            ElementKind::Button,
        ]
    );
    assert_eq!(login.window.width, 400);
    assert_eq!(login.window.height, 300);
    assert_eq!(login.window.bg_color, "#336699");
}

#[test]
fn test_identifiers_and_assets() {
    let programs = generator().generate_document_str(LOGIN).unwrap();
    let login = &programs[0];

    let identifiers: Vec<_> = login.elements.iter().filter_map(Element::identifier).collect();
    assert_eq!(identifiers, ["login", "email", "3", "notes", "5"]);

    let assets: Vec<_> = login
        .assets
        .iter()
        .map(|a| (a.node_id.as_str(), a.kind, a.path.as_str()))
        .collect();
    assert_eq!(
        assets,
        [
            ("2:4", AssetKind::Button, "button_login.png"),
            ("2:5", AssetKind::Entry, "entry_email.png"),
            ("2:6", AssetKind::Image, "image_3.png"),
            ("2:8", AssetKind::Entry, "entry_notes.png"),
            ("2:9", AssetKind::Button, "button_5.png"),
        ]
    );
}

#[test]
fn test_geometry_is_frame_relative() {
    let programs = generator().generate_document_str(LOGIN).unwrap();
    let geometry: Vec<Geometry> = programs[0].elements.iter().map(Element::geometry).collect();

    assert_eq!(geometry[0], Geometry::new(0.0, 0.0, 400.0, 60.0));
    assert_eq!(geometry[1], Geometry::new(10.0, 20.0, 200.0, 40.0));
    assert_eq!(geometry[2], Geometry::new(20.0, 200.0, 160.0, 40.0));
    // Centered backgrounds for the entry and the image.
    assert_eq!(geometry[3], Geometry::new(120.0, 115.0, 200.0, 30.0));
    assert_eq!(geometry[4], Geometry::new(340.0, 50.0, 80.0, 80.0));

    match &programs[0].elements[3] {
        Element::TextEntry(entry) => {
            assert_eq!(entry.entry, Geometry::new(28.0, 100.0, 184.0, 28.0));
            assert_eq!(entry.widget.as_deref(), Some("Entry"));
        }
        other => panic!("expected a text entry, got {other:?}"),
    }
    match &programs[0].elements[5] {
        Element::TextEntry(entry) => assert_eq!(entry.widget.as_deref(), Some("Text")),
        other => panic!("expected a text entry, got {other:?}"),
    }
}

#[test]
fn test_text_fragment_in_program() {
    let programs = generator().generate_document_str(LOGIN).unwrap();
    let source = &programs[0].source;

    assert!(source.contains(
        "canvas.create_text(\n    10,\n    20,\n    anchor=\"nw\",\n    text=\"HELLO\\nWORLD\",\n    fill=\"#000000\",\n    font=(\"Arial\", -16)\n)"
    ));
    assert!(source.contains("command=lambda: print(\"button_login clicked\")"));
    assert!(source.contains("entry_notes = Text("));
    assert!(source.contains("entry_email = Entry("));
    assert!(source.contains(r#"window.geometry("400x300")"#));

    // Later elements are drawn on top, so fragment order follows traversal.
    let rect = source.find("canvas.create_rectangle(").unwrap();
    let text = source.find("canvas.create_text(").unwrap();
    let last_button = source.find("button_5 = Button(").unwrap();
    assert!(rect < text && text < last_button);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generator().generate_document_str(LOGIN).unwrap();
    let second = generator().generate_document_str(LOGIN).unwrap();
    assert_eq!(first[0].source, second[0].source);
    assert_eq!(first[0].elements, second[0].elements);
}

#[test]
fn test_counter_seed_changes_fallback_identifiers() {
    let generator = Generator::new(GeneratorOptions::default().with_counter_seed(10)).unwrap();
    let programs = generator.generate_document_str(LOGIN).unwrap();
    let identifiers: Vec<_> = programs[0]
        .elements
        .iter()
        .filter_map(Element::identifier)
        .collect();
    assert_eq!(identifiers, ["login", "email", "12", "notes", "14"]);
}

#[test]
fn test_scope_is_threaded_across_frames() {
    let file: Value = serde_json::from_str(LOGIN).unwrap();
    let frame = Node::new(login_frame(&file));
    let generator = generator();

    let mut scope = generator.new_scope();
    generator.generate_frame_with_scope(&frame, &mut scope).unwrap();
    assert_eq!(scope.counter(), 6);

    let again = generator.generate_frame_with_scope(&frame, &mut scope).unwrap();
    let identifiers: Vec<_> = again.elements.iter().filter_map(Element::identifier).collect();
    assert_eq!(identifiers, ["6", "7", "8", "9", "10"]);
    assert_eq!(scope.counter(), 11);
}

fn frame_with(child: Value) -> Value {
    json!({
        "id": "1:1",
        "name": "Frame",
        "type": "FRAME",
        "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 100.0, "height": 100.0},
        "children": [child]
    })
}

#[test]
fn test_missing_fill_aborts_generation() {
    let frame = frame_with(json!({
        "id": "3:1",
        "name": "bare",
        "type": "RECTANGLE",
        "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0}
    }));
    let err = generator().generate_frame(&Node::new(&frame)).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Design(DesignError::MissingField { ref field, .. }) if field == "fills"
    ));
}

#[test]
fn test_unlisted_entry_prefix_stays_a_rectangle() {
    let frame = frame_with(json!({
        "id": "3:2",
        "name": "TextField_phone",
        "type": "RECTANGLE",
        "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 80.0, "height": 20.0},
        "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}]
    }));

    let program = generator().generate_frame(&Node::new(&frame)).unwrap();
    assert_eq!(program.elements[0].kind(), ElementKind::Rectangle);
    assert!(program.assets.is_empty());

    let options = GeneratorOptions::default().with_entry_marker("(?i)^textfield$");
    let err = Generator::new(options)
        .unwrap()
        .generate_frame(&Node::new(&frame))
        .unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Configuration { ref prefix, .. } if prefix == "TextField"
    ));

    let options = GeneratorOptions::default().with_input_kind("TextField", "Entry");
    let program = Generator::new(options)
        .unwrap()
        .generate_frame(&Node::new(&frame))
        .unwrap();
    assert!(program.source.contains("entry_phone = Entry("));
}

#[test]
fn test_extended_input_kinds_classify_as_entries() {
    let frame = frame_with(json!({
        "id": "3:5",
        "name": "Search_query",
        "type": "RECTANGLE",
        "cornerRadius": 4.0,
        "absoluteBoundingBox": {"x": 10.0, "y": 10.0, "width": 120.0, "height": 24.0},
        "fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 1.0, "b": 1.0}}]
    }));
    let options = GeneratorOptions::default().with_input_kind("Search", "Entry");
    let program = Generator::new(options)
        .unwrap()
        .generate_frame(&Node::new(&frame))
        .unwrap();

    assert_eq!(program.elements[0].kind(), ElementKind::TextEntry);
    assert_eq!(program.assets[0].path, "entry_query.png");
    assert!(program.source.contains("entry_query = Entry("));
}

#[test]
fn test_options_from_json() {
    let options = GeneratorOptions::from_json(
        r#"{"assets_path": "./build/assets", "asset_extension": "gif", "button_marker": "(?i)^btn$"}"#,
    )
    .unwrap();
    let frame = frame_with(json!({
        "id": "3:3",
        "name": "btn_go",
        "type": "RECTANGLE",
        "absoluteBoundingBox": {"x": 5.0, "y": 5.0, "width": 10.0, "height": 10.0},
        "fills": [{"type": "IMAGE", "imageRef": "x"}]
    }));
    let program = Generator::new(options)
        .unwrap()
        .generate_frame(&Node::new(&frame))
        .unwrap();

    assert_eq!(program.elements[0].kind(), ElementKind::Button);
    assert_eq!(program.assets[0].path, "button_go.gif");
    assert!(program.source.contains(r#"Path("./build/assets")"#));
}

#[test]
fn test_document_without_pages() {
    let err = generator()
        .generate_document(&json!({"document": {"type": "DOCUMENT", "children": []}}))
        .unwrap_err();
    assert!(matches!(err, CodegenError::InvalidDocument(_)));
}

#[test]
fn test_custom_program_template() {
    let generator = generator()
        .with_template("{{window.width}}x{{window.height}}{{#each fragments}}{{this}}{{/each}}")
        .unwrap();
    let frame = frame_with(json!({
        "id": "3:4",
        "name": "Rectangle",
        "type": "RECTANGLE",
        "absoluteBoundingBox": {"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0},
        "fills": [{"type": "SOLID", "color": {"r": 0.0, "g": 1.0, "b": 0.0}}]
    }));
    let program = generator.generate_frame(&Node::new(&frame)).unwrap();
    assert_eq!(
        program.source,
        "100x100\ncanvas.create_rectangle(\n    1,\n    2,\n    4,\n    6,\n    fill=\"#00ff00\",\n    outline=\"\")\n"
    );
    assert_eq!(generator.options().counter_seed, 1);
    assert!(generator.policy().entry_widget("TextBox").is_some());
}
