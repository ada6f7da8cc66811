//! Click resolution: cast a ray from a screen point, intersect the
//! clickable spheres, and map the hit node back to its catalog body.

use glam::Vec2;
use orrery_engine::{nearest_hit, NodeId, OrbitCamera, SceneGraph};

use crate::builder::SceneBodies;
use crate::catalog::{BodyId, Catalog};

/// Outcome of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// A pickable body was hit.
    Body { body: BodyId, node: NodeId },
    /// The click hit empty space (or an unresolvable node).
    Blank,
}

/// Pick against the current scene. Pickable spheres are tested at their
/// world positions with their mesh radii; the nearest hit wins.
pub fn pick(
    screen: Vec2,
    camera: &OrbitCamera,
    scene: &SceneGraph,
    bodies: &SceneBodies,
    catalog: &Catalog,
) -> PickOutcome {
    let ray = camera.screen_ray(screen);
    let spheres = bodies.pickable.iter().map(|&(node, body)| {
        (node, scene.world_position(node), catalog.get(body).mesh_radius())
    });
    match nearest_hit(&ray, spheres) {
        Some((node, _)) => resolve(node, scene, bodies),
        None => PickOutcome::Blank,
    }
}

/// Map a hit node to a body, walking up the ancestor chain until a node
/// with metadata is found. Hits on decorated children (rings, labels)
/// resolve to the body that owns them.
fn resolve(hit: NodeId, scene: &SceneGraph, bodies: &SceneBodies) -> PickOutcome {
    let mut cursor = Some(hit);
    while let Some(node) = cursor {
        if let Some(&body) = bodies.body_of_node.get(&node) {
            return PickOutcome::Body { body, node };
        }
        cursor = scene.parent_of(node);
    }
    PickOutcome::Blank
}
