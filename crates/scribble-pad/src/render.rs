//! Draw-list construction for a document: backdrop, shadow pass, ink pass.
//!
//! Widths taper per segment: each segment takes the pressure of its leading
//! point, with no interpolation towards the next one.

use scribble_engine::coords::Vec2;
use scribble_engine::paint::Color;
use scribble_engine::scene::{DrawList, ZIndex};

use crate::backdrop::{BACKDROP_Z, Backdrop};
use crate::color::{INK, SHADOW};
use crate::document::Document;
use crate::stroke::Stroke;

pub const SHADOW_Z: ZIndex = BACKDROP_Z.above();
pub const INK_Z: ZIndex = SHADOW_Z.above();

/// Offset of the shadow pass relative to the ink.
pub const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);

/// Extra width of shadows over ink, in logical pixels at full pressure.
pub const SHADOW_EXTRA_WIDTH: u32 = 2;

/// Records a full frame for `doc` into `list`. The document is not modified.
pub fn render(list: &mut DrawList, doc: &Document, backdrop: &Backdrop, window_size: Vec2) {
    backdrop.paint(list, window_size, doc.bg_index());
    paint_strokes(list, doc);
}

/// Records the shadow pass (when enabled) and the ink pass.
pub fn paint_strokes(list: &mut DrawList, doc: &Document) {
    let thickness = doc.thickness() as f32;

    if doc.show_shadows() {
        let pass = Pass {
            z: SHADOW_Z,
            offset: SHADOW_OFFSET,
            base_width: thickness + SHADOW_EXTRA_WIDTH as f32,
            color: SHADOW.to_color(),
        };
        pass.record(list, doc.strokes());
    }

    let pass = Pass {
        z: INK_Z,
        offset: Vec2::zero(),
        base_width: thickness,
        color: INK.to_color(),
    };
    pass.record(list, doc.strokes());
}

struct Pass {
    z: ZIndex,
    offset: Vec2,
    base_width: f32,
    color: Color,
}

impl Pass {
    fn record(&self, list: &mut DrawList, strokes: &[Stroke]) {
        for stroke in strokes {
            if stroke.is_single_point() {
                let p = stroke.first();
                list.push_solid_circle(
                    self.z,
                    p.pos + self.offset,
                    self.base_width * p.pressure,
                    self.color,
                );
                continue;
            }

            for (p1, p2) in stroke.segments() {
                list.push_round_line(
                    self.z,
                    p1.pos + self.offset,
                    p2.pos + self.offset,
                    self.base_width * p1.pressure,
                    self.color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribble_engine::scene::DrawCmd;

    use crate::stroke::StrokePoint;

    fn doc_with(strokes: Vec<Stroke>, shadows: bool) -> Document {
        Document::new(strokes, 3, shadows, 0)
    }

    #[test]
    fn shadows_off_emits_ink_only() {
        let doc = doc_with(vec![Stroke::begin(StrokePoint::at(1.0, 1.0))], false);
        let mut list = DrawList::new();
        paint_strokes(&mut list, &doc);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].key.z, INK_Z);
    }

    #[test]
    fn shadow_pass_is_offset_and_wider() {
        let doc = doc_with(
            vec![Stroke::begin(StrokePoint::new(Vec2::new(1.0, 1.0), Some(0.5)))],
            true,
        );
        let mut list = DrawList::new();
        paint_strokes(&mut list, &doc);

        let DrawCmd::Circle(shadow) = &list.items()[0].cmd else {
            panic!("expected a shadow disc");
        };
        assert_eq!(list.items()[0].key.z, SHADOW_Z);
        assert_eq!(shadow.center, Vec2::new(3.0, 3.0));
        assert_eq!(shadow.radius, 2.5);
        assert_eq!(shadow.color, SHADOW.to_color());

        let DrawCmd::Circle(ink) = &list.items()[1].cmd else {
            panic!("expected an ink disc");
        };
        assert_eq!(ink.center, Vec2::new(1.0, 1.0));
        assert_eq!(ink.radius, 1.5);
    }

    #[test]
    fn layers_stack_backdrop_shadow_ink() {
        assert!(BACKDROP_Z < SHADOW_Z);
        assert!(SHADOW_Z < INK_Z);
    }

    #[test]
    fn render_leaves_document_untouched() {
        let doc = doc_with(vec![Stroke::begin(StrokePoint::at(1.0, 1.0))], true);
        let before = doc.clone();
        let mut list = DrawList::new();
        render(&mut list, &doc, &Backdrop::new(), Vec2::new(100.0, 100.0));

        assert_eq!(doc, before);
        assert_eq!(list.len(), 3);
    }
}
