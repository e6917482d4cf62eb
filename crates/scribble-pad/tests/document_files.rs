use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use scribble_pad::codec::{self, DocumentError, FormatError};
use scribble_pad::keymap::Command;
use scribble_pad::prelude::*;

fn drawn_canvas() -> Canvas {
    let mut canvas = Canvas::new();
    canvas.pointer(PointerEvent::Down { pos: Vec2::new(1.0, 2.0), pressure: Some(0.25) });
    canvas.pointer(PointerEvent::Move { pos: Vec2::new(3.0, 4.0), pressure: Some(0.75) });
    canvas.pointer(PointerEvent::Up { pos: Vec2::new(5.0, 6.0), pressure: None });
    canvas.pointer(PointerEvent::Down { pos: Vec2::new(9.0, 9.0), pressure: None });
    canvas.pointer(PointerEvent::Up { pos: Vec2::new(9.0, 9.0), pressure: None });
    canvas.set_thickness(2);
    canvas.toggle_shadows();
    canvas.cycle_background();
    canvas
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sketch.canvas");

    let source = drawn_canvas().with_path(&path);
    assert!(matches!(source.save_to(&path), Outcome::Saved));

    let mut target = Canvas::new().with_path(&path);
    assert!(matches!(target.load(), Outcome::Loaded));
    assert_eq!(target.document(), source.document());
}

#[test]
fn bare_path_gets_the_canvas_extension() {
    let dir = TempDir::new().unwrap();
    let bare = dir.path().join("sketch");

    let canvas = drawn_canvas().with_path(&bare);
    let saved = dir.path().join("sketch.canvas");
    assert_eq!(canvas.path(), Some(saved.as_path()));

    assert!(matches!(canvas.save(), Outcome::Saved));
    assert!(saved.exists());
    assert!(!bare.exists());

    // No temporary file is left behind.
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn bare_path_reopens_what_it_saved() {
    let dir = TempDir::new().unwrap();
    let bare = dir.path().join("sketch");

    let mut source = drawn_canvas().with_path(&bare);
    assert!(matches!(source.execute(Command::Save), Response::File(Outcome::Saved)));

    let mut target = Canvas::new().with_path(&bare);
    assert!(matches!(target.load(), Outcome::Loaded));
    assert_eq!(target.document(), source.document());
}

#[test]
fn failed_load_keeps_previously_loaded_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.canvas");
    assert!(matches!(drawn_canvas().save_to(&path), Outcome::Saved));

    let mut canvas = Canvas::new().with_path(&path);
    assert!(matches!(canvas.load(), Outcome::Loaded));
    let loaded = canvas.document().clone();
    assert_eq!(loaded.strokes().len(), 2);

    fs::write(
        &path,
        r#"{"strokes": [[[0, 0, 1]]], "show_shadows": true, "bg_index": 0}"#,
    )
    .unwrap();

    match canvas.load() {
        Outcome::Failed(DocumentError::Format { source: FormatError::Json(e), .. }) => {
            assert!(e.to_string().contains("thickness"), "{e}");
        }
        other => panic!("expected a format failure, got {other:?}"),
    }
    assert_eq!(canvas.document(), &loaded);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.canvas");

    let mut canvas = Canvas::new().with_path(&path);
    match canvas.load() {
        Outcome::Failed(err @ DocumentError::Io { .. }) => assert_eq!(err.path(), path.as_path()),
        other => panic!("expected an io failure, got {other:?}"),
    }
    assert!(canvas.document().strokes().is_empty());
}

#[test]
fn failed_save_leaves_existing_file_intact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keep.canvas");
    let original = codec::to_bytes(&Document::default()).unwrap();
    fs::write(&path, &original).unwrap();

    // A directory where the temp sibling should go makes the write fail.
    fs::create_dir(dir.path().join("keep.canvas.tmp")).unwrap();

    let canvas = drawn_canvas();
    assert!(matches!(canvas.save_to(&path), Outcome::Failed(DocumentError::Io { .. })));
    assert_eq!(fs::read(&path).unwrap(), original);
}

#[test]
fn load_while_drawing_ends_the_gesture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.canvas");
    codec::save(&path, &Document::default()).unwrap();

    let mut canvas = Canvas::new().with_path(&path);
    canvas.pointer(PointerEvent::Down { pos: Vec2::new(0.0, 0.0), pressure: None });
    assert!(matches!(canvas.load(), Outcome::Loaded));
    assert!(!canvas.is_drawing());

    assert!(!canvas.pointer(PointerEvent::Move { pos: Vec2::new(1.0, 1.0), pressure: None }));
    assert!(canvas.document().strokes().is_empty());
}

#[test]
fn round_trip_of_extreme_values() {
    let stroke = Stroke::from_points(vec![
        StrokePoint::new(Vec2::new(-1.5e6, 0.1), Some(0.0)),
        StrokePoint::new(Vec2::new(3.3333333, 1e-7), Some(1.0)),
    ])
    .unwrap();
    let doc = Document::new(vec![stroke], u32::MAX, false, PALETTE.len() - 1);

    let decoded = codec::from_bytes(&codec::to_bytes(&doc).unwrap()).unwrap();
    assert_eq!(decoded, doc);
}
