//! Builds the per-frame flat buffers the host renderer consumes from the
//! scene graph. World positions are resolved through the ancestor chain,
//! so a planet container that moved this frame carries its moons, label,
//! and rings along without per-child bookkeeping.

use crate::core::scene::{Renderable, SceneGraph};
use crate::renderer::instance::{
    ColorVertex, LabelBuffer, LabelInstance, PathBuffer, PointBuffer, RingBuffer, RingInstance,
    SphereBuffer, SphereInstance,
};

/// All host-visible buffers, rebuilt every frame.
pub struct RenderBuffers {
    pub spheres: SphereBuffer,
    pub rings: RingBuffer,
    pub labels: LabelBuffer,
    pub paths: PathBuffer,
    pub points: PointBuffer,
}

impl RenderBuffers {
    pub fn with_capacity(
        max_spheres: usize,
        max_rings: usize,
        max_labels: usize,
        max_path_vertices: usize,
        max_points: usize,
    ) -> Self {
        Self {
            spheres: SphereBuffer::with_capacity(max_spheres),
            rings: RingBuffer::with_capacity(max_rings),
            labels: LabelBuffer::with_capacity(max_labels),
            paths: PathBuffer::with_capacity(max_path_vertices),
            points: PointBuffer::with_capacity(max_points),
        }
    }
}

/// Walk the scene and fill every buffer from visible nodes.
pub fn build_render_buffers(scene: &SceneGraph, out: &mut RenderBuffers) {
    out.spheres.clear();
    out.rings.clear();
    out.labels.clear();
    out.paths.clear();
    out.points.clear();

    for (id, node) in scene.iter() {
        let Some(renderable) = &node.renderable else { continue };
        if !scene.effectively_visible(id) {
            continue;
        }
        let world = scene.world_position(id);

        match renderable {
            Renderable::Sphere { radius, color, emissive } => {
                out.spheres.push(SphereInstance {
                    x: world.x,
                    y: world.y,
                    z: world.z,
                    radius: *radius,
                    r: color[0],
                    g: color[1],
                    b: color[2],
                    emissive: *emissive,
                    spin: node.spin,
                    ..Default::default()
                });
            }
            Renderable::Ring { inner, outer, color, opacity, tilt } => {
                out.rings.push(RingInstance {
                    x: world.x,
                    y: world.y,
                    z: world.z,
                    inner: *inner,
                    outer: *outer,
                    r: color[0],
                    g: color[1],
                    b: color[2],
                    opacity: *opacity,
                    tilt: *tilt,
                    ..Default::default()
                });
            }
            Renderable::Label { text_id, scale } => {
                out.labels.push(LabelInstance {
                    x: world.x,
                    y: world.y,
                    z: world.z,
                    text_id: *text_id as f32,
                    scale: *scale,
                    ..Default::default()
                });
            }
            Renderable::Path { points, color, closed } => {
                out.paths.push_polyline(world, points, *color, *closed);
            }
            Renderable::Points { points, color, size } => {
                for p in points {
                    out.points.push(ColorVertex::new(world + *p, *size, *color));
                }
            }
        }
    }
}
