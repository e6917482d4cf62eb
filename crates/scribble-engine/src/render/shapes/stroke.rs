use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::{CircleCmd, LineCap, LineCmd};
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuads;

/// Renderer for `DrawCmd::Circle` and `DrawCmd::Line`.
///
/// Both are drawn as anti-aliased capsules (a segment dilated by a radius) in a
/// single instanced pass, so discs and segments interleave in paint order:
/// - a disc is a capsule whose endpoints coincide, dilated by its radius
/// - a round-capped line is a capsule dilated by half its width
///
/// Consecutive segments sharing an endpoint overlap in their caps, which gives
/// round joins for free.
pub struct StrokeRenderer {
    quads: InstancedQuads,
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self {
            quads: InstancedQuads::new(
                "scribble stroke",
                include_str!("shaders/stroke.wgsl"),
                CapsuleInstance::layout(),
            ),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let instances: Vec<CapsuleInstance> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(cmd) => CapsuleInstance::from_circle(cmd),
                DrawCmd::Line(cmd) => CapsuleInstance::from_line(cmd),
                DrawCmd::Rect(_) => None,
            })
            .collect();

        self.quads.draw(ctx, target, &instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  a        [f32; 2]   loc 1
///  offset  8  b        [f32; 2]   loc 2
///  offset 16  radius   [f32; 2]   loc 3  (.x = dilation radius, .y unused)
///  offset 24  color    [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CapsuleInstance {
    a: [f32; 2],
    b: [f32; 2],
    radius: [f32; 2],
    color: [f32; 4],
}

impl CapsuleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // a
        2 => Float32x2, // b
        3 => Float32x2, // radius
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CapsuleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    fn new(a: [f32; 2], b: [f32; 2], radius: f32, color: Color) -> Option<Self> {
        if !(radius > 0.0 && radius.is_finite()) || color.a <= 0.0 {
            return None;
        }
        if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
            return None;
        }
        Some(Self {
            a,
            b,
            radius: [radius, 0.0],
            color: color.to_array(),
        })
    }

    fn from_circle(cmd: &CircleCmd) -> Option<Self> {
        let c = [cmd.center.x, cmd.center.y];
        Self::new(c, c, cmd.radius, cmd.color)
    }

    fn from_line(cmd: &LineCmd) -> Option<Self> {
        match cmd.cap {
            LineCap::Round => Self::new(
                [cmd.from.x, cmd.from.y],
                [cmd.to.x, cmd.to.y],
                cmd.width * 0.5,
                cmd.color,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn ink() -> Color {
        Color::from_premul(0.9, 0.9, 0.9, 1.0)
    }

    #[test]
    fn circle_is_a_point_capsule_with_its_radius() {
        let inst = CapsuleInstance::from_circle(&CircleCmd::new(Vec2::new(12.0, 8.0), 3.0, ink()))
            .expect("instance");
        assert_eq!(inst.a, [12.0, 8.0]);
        assert_eq!(inst.b, [12.0, 8.0]);
        assert_eq!(inst.radius[0], 3.0);
    }

    #[test]
    fn line_dilates_by_half_width() {
        let cmd = LineCmd::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0), 1.5, ink(), LineCap::Round);
        let inst = CapsuleInstance::from_line(&cmd).expect("instance");
        assert_eq!(inst.a, [10.0, 10.0]);
        assert_eq!(inst.b, [20.0, 10.0]);
        assert_eq!(inst.radius[0], 0.75);
    }

    #[test]
    fn zero_length_line_still_draws_a_dot() {
        let p = Vec2::new(20.0, 10.0);
        let cmd = LineCmd::new(p, p, 3.0, ink(), LineCap::Round);
        assert!(cmd.is_degenerate());
        assert!(CapsuleInstance::from_line(&cmd).is_some());
    }

    #[test]
    fn zero_width_and_transparent_are_skipped() {
        let p = Vec2::new(1.0, 1.0);
        assert!(CapsuleInstance::from_circle(&CircleCmd::new(p, 0.0, ink())).is_none());
        assert!(CapsuleInstance::from_circle(&CircleCmd::new(p, 2.0, Color::transparent())).is_none());
    }

    #[test]
    fn instance_stride_matches_attributes() {
        assert_eq!(std::mem::size_of::<CapsuleInstance>(), 40);
    }
}
