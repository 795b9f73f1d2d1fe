//! Property tests for geometry and style resolution.

use proptest::prelude::*;
use serde_json::json;
use tkdesign_core::{apply_text_case, clamp_corner_radius, Node, TextCase};

fn finite() -> impl Strategy<Value = f64> {
    -10_000.0f64..10_000.0
}

proptest! {
    #[test]
    fn position_is_componentwise_difference(
        nx in finite(), ny in finite(), fx in finite(), fy in finite()
    ) {
        let frame = json!({
            "absoluteBoundingBox": {"x": fx, "y": fy, "width": 100.0, "height": 100.0}
        });
        let node = json!({
            "absoluteBoundingBox": {"x": nx, "y": ny, "width": 10.0, "height": 10.0}
        });
        let (x, y) = Node::new(&node).position(&Node::new(&frame)).unwrap();
        prop_assert_eq!(x, nx - fx);
        prop_assert_eq!(y, ny - fy);
    }

    #[test]
    fn text_case_is_idempotent(text in "[a-zA-Z0-9 '\n.-]{0,40}") {
        for case in [TextCase::Upper, TextCase::Lower, TextCase::Title] {
            let once = apply_text_case(&text, case);
            let twice = apply_text_case(&once, case);
            prop_assert_eq!(once, twice);
        }
        prop_assert_eq!(apply_text_case(&text, TextCase::Original), text.clone());
    }

    #[test]
    fn corner_radius_never_exceeds_half_height(r in 0.0f64..1_000.0, h in 0.0f64..1_000.0) {
        let clamped = clamp_corner_radius(r, h);
        prop_assert!(clamped <= h / 2.0);
        prop_assert_eq!(clamped, r.min(h / 2.0));
    }
}

#[test]
fn color_resolution_examples() {
    let red = json!({"fills": [{"type": "SOLID", "color": {"r": 1.0, "g": 0.0, "b": 0.0}}]});
    let black = json!({"fills": [{"type": "SOLID", "color": {"r": 0.0, "g": 0.0, "b": 0.0}}]});
    assert_eq!(Node::new(&red).color().unwrap(), "#ff0000");
    assert_eq!(Node::new(&black).color().unwrap(), "#000000");
}
