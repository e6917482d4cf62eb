use bytemuck::{Pod, Zeroable};

use crate::paint::{Paint, SpreadMode};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::RectCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuads;

/// Rectangle renderer.
///
/// Supported paints:
/// - `Paint::Solid`
/// - `Paint::RadialGradient` (2-stop; uses first and last stop for gradients with more stops)
///
/// Geometry is provided as logical pixels, converted to NDC in the vertex shader using viewport.
pub struct RectRenderer {
    quads: InstancedQuads,
    warned_multi_stop: bool,
}

const RECT_WGSL: &str = include_str!("shaders/rect.wgsl");

impl Default for RectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RectRenderer {
    pub fn new() -> Self {
        Self {
            quads: InstancedQuads::new(
                "scribble rect",
                RECT_WGSL,
                RectInstance::layout(),
            ),
            warned_multi_stop: false,
        }
    }

    /// Renders every `DrawCmd::Rect` in `draw_list` into `target`, in paint order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let mut instances: Vec<RectInstance> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Rect(cmd) = &item.cmd else { continue };

            if let Paint::RadialGradient(g) = &cmd.paint {
                if g.stops.len() > 2 && !self.warned_multi_stop {
                    log::debug!("RectRenderer: only 2-stop gradients supported; using first and last stop");
                    self.warned_multi_stop = true;
                }
            }

            if let Some(inst) = RectInstance::from_cmd(cmd) {
                instances.push(inst);
            }
        }

        self.quads.draw(ctx, target, &instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (72 bytes):
///
///  offset  0  origin      [f32; 2]   loc 1
///  offset  8  size        [f32; 2]   loc 2
///  offset 16  color0      [f32; 4]   loc 3
///  offset 32  color1      [f32; 4]   loc 4
///  offset 48  gradient    [f32; 4]   loc 5  (.xy = center, .z = radius, .w = spread mode)
///  offset 64  stop_range  [f32; 2]   loc 6  (t of first and last stop)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color0: [f32; 4],
    color1: [f32; 4],
    gradient: [f32; 4],
    stop_range: [f32; 2],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // color0
        4 => Float32x4, // color1
        5 => Float32x4, // gradient
        6 => Float32x2  // stop_range
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// Converts a rect command into instance data.
    ///
    /// Returns `None` for empty rects and unusable gradients. Solid fills carry a
    /// zero radius, which the shader treats as "no gradient".
    fn from_cmd(cmd: &RectCmd) -> Option<Self> {
        let r = cmd.rect.normalized();
        if r.is_empty() || !r.is_finite() {
            return None;
        }

        let (color0, color1, gradient, stop_range) = match &cmd.paint {
            Paint::Solid(c) => (c.to_array(), c.to_array(), [0.0; 4], [0.0, 1.0]),
            Paint::RadialGradient(g) => {
                if !g.is_valid() {
                    return None;
                }
                let (c0, c1) = g.end_colors()?;
                let t0 = g.stops.first()?.t;
                let t1 = g.stops.last()?.t;
                (
                    c0.to_array(),
                    c1.to_array(),
                    [g.center.x, g.center.y, g.radius, spread_code(g.spread)],
                    [t0, t1],
                )
            }
        };

        Some(Self {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            color0,
            color1,
            gradient,
            stop_range,
        })
    }
}

/// Spread mode as the float code `rect.wgsl` switches on.
fn spread_code(spread: SpreadMode) -> f32 {
    match spread {
        SpreadMode::Pad => 0.0,
        SpreadMode::Repeat => 1.0,
        SpreadMode::Reflect => 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, ColorStop, RadialGradient};

    fn black() -> Color {
        Color::from_premul(0.0, 0.0, 0.0, 1.0)
    }

    fn white() -> Color {
        Color::from_premul(1.0, 1.0, 1.0, 1.0)
    }

    #[test]
    fn solid_rect_has_no_gradient() {
        let cmd = RectCmd::new(Rect::new(0.0, 0.0, 10.0, 20.0), Paint::Solid(white()));
        let inst = RectInstance::from_cmd(&cmd).expect("instance");
        assert_eq!(inst.size, [10.0, 20.0]);
        assert_eq!(inst.color0, inst.color1);
        assert_eq!(inst.gradient[2], 0.0);
    }

    #[test]
    fn radial_rect_carries_center_radius_and_end_stops() {
        let g = RadialGradient::new(
            Vec2::new(40.0, 10.0),
            70.0,
            vec![ColorStop::new(0.0, white()), ColorStop::new(1.0, black())],
            SpreadMode::Pad,
        );
        let cmd = RectCmd::new(Rect::new(0.0, 0.0, 80.0, 60.0), Paint::RadialGradient(g));
        let inst = RectInstance::from_cmd(&cmd).expect("instance");
        assert_eq!(inst.gradient, [40.0, 10.0, 70.0, 0.0]);
        assert_eq!(inst.color0, white().to_array());
        assert_eq!(inst.color1, black().to_array());
        assert_eq!(inst.stop_range, [0.0, 1.0]);
    }

    #[test]
    fn empty_rect_is_skipped() {
        let cmd = RectCmd::new(Rect::new(5.0, 5.0, 0.0, 10.0), Paint::Solid(white()));
        assert!(RectInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn invalid_gradient_is_skipped() {
        let g = RadialGradient::new(Vec2::zero(), 0.0, vec![], SpreadMode::Pad);
        let cmd = RectCmd::new(Rect::new(0.0, 0.0, 10.0, 10.0), Paint::RadialGradient(g));
        assert!(RectInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn gradient_stops_blend_in_srgb() {
        assert!(RECT_WGSL.contains("return mix_srgb(in.color0, in.color1, t);"));
        assert!(!RECT_WGSL.contains("return mix(in.color0, in.color1, t);"));
    }
}
