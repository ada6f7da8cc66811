//! Scene assembly. Spawns the starfield, the sun, one container per
//! planet (mesh + label + optional rings + moons), and the orbit guide
//! circles, and records which nodes map to which catalog bodies.

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_8, TAU};

use glam::Vec3;
use orrery_engine::{Node, NodeId, Renderable, SceneGraph};

use crate::catalog::{BodyId, BodyKind, Catalog, MOON_ORBIT_SCALE, PLANET_ORBIT_SCALE};

pub const SUN_EMISSIVE: f32 = 3.5;

const STAR_COUNT: usize = 5000;
const STAR_SPREAD: f32 = 2000.0;
const STAR_SIZE: f32 = 0.5;

const PLANET_GUIDE_SAMPLES: usize = 128;
const MOON_GUIDE_SAMPLES: usize = 64;
const PLANET_GUIDE_ALPHA: f32 = 0.5;
const MOON_GUIDE_ALPHA: f32 = 0.2;

/// Ring band radii as multiples of the planet's size, with per-band
/// color and opacity.
const RING_BANDS: [(f32, f32, [f32; 3], f32); 4] = [
    (1.4, 1.6, [0.788, 0.722, 0.588], 0.3),
    (1.6, 1.8, [0.831, 0.769, 0.659], 0.5),
    (1.8, 2.0, [0.788, 0.722, 0.588], 0.4),
    (2.0, 2.2, [0.749, 0.690, 0.588], 0.3),
];
const RING_TILT: f32 = FRAC_PI_8;

/// One orbiting body: the container that carries the orbital position
/// and the mesh that carries the axial spin.
pub struct OrbitingEntry {
    pub container: NodeId,
    pub mesh: NodeId,
    pub body: BodyId,
}

/// Everything the viewer needs to know about the spawned scene.
pub struct SceneBodies {
    /// Node → catalog body, for resolving picks through the ancestor chain.
    pub body_of_node: HashMap<NodeId, BodyId>,
    /// Click targets: the sun and planet meshes with their radii.
    /// Moons are intentionally not pickable.
    pub pickable: Vec<(NodeId, BodyId)>,
    pub planets: Vec<OrbitingEntry>,
    /// Moon meshes live in their parent planet's local frame, so the
    /// `container` here is the parent planet's container.
    pub moons: Vec<OrbitingEntry>,
}

/// Build the whole scene from a catalog.
pub fn build_scene(catalog: &Catalog, scene: &mut SceneGraph) -> SceneBodies {
    let mut out = SceneBodies {
        body_of_node: HashMap::new(),
        pickable: Vec::new(),
        planets: Vec::new(),
        moons: Vec::new(),
    };

    spawn_starfield(scene);

    // Planet container lookup for attaching moons, keyed by BodyId.
    let mut container_of_planet: HashMap<BodyId, NodeId> = HashMap::new();

    for (id, body) in catalog.iter() {
        match body.kind {
            BodyKind::Star => {
                let container = scene.spawn(Node::new().with_tag(&body.name_en));
                let radius = body.mesh_radius();
                let mesh = scene.spawn_child(
                    container,
                    Node::new().with_renderable(Renderable::Sphere {
                        radius,
                        color: body.color,
                        emissive: SUN_EMISSIVE,
                    }),
                );
                spawn_label(scene, container, id, radius, -radius * 2.0);
                out.body_of_node.insert(container, id);
                out.body_of_node.insert(mesh, id);
                out.pickable.push((mesh, id));
            }
            BodyKind::Planet => {
                spawn_orbit_guide(
                    scene,
                    None,
                    body.distance * PLANET_ORBIT_SCALE,
                    PLANET_GUIDE_SAMPLES,
                    PLANET_GUIDE_ALPHA,
                );

                let container = scene.spawn(Node::new().with_tag(&body.name_en));
                let mesh = scene.spawn_child(
                    container,
                    Node::new().with_renderable(Renderable::Sphere {
                        radius: body.size,
                        color: body.color,
                        emissive: 0.0,
                    }),
                );
                spawn_label(scene, container, id, body.size, -body.size * 1.5);

                if body.has_rings {
                    for (inner, outer, color, opacity) in RING_BANDS {
                        scene.spawn_child(
                            mesh,
                            Node::new().with_renderable(Renderable::Ring {
                                inner: body.size * inner,
                                outer: body.size * outer,
                                color,
                                opacity,
                                tilt: RING_TILT,
                            }),
                        );
                    }
                }

                out.body_of_node.insert(container, id);
                out.body_of_node.insert(mesh, id);
                out.pickable.push((mesh, id));
                container_of_planet.insert(id, container);
                out.planets.push(OrbitingEntry { container, mesh, body: id });
            }
            BodyKind::Moon => {
                // validate() guarantees a parent name is present
                let parent_name = body.parent.as_deref().unwrap_or("");
                let Some(parent_container) = catalog
                    .find_planet(parent_name)
                    .and_then(|pid| container_of_planet.get(&pid).copied())
                else {
                    log::warn!("moon {} has unknown parent {parent_name:?}, skipping", body.name_en);
                    continue;
                };

                spawn_orbit_guide(
                    scene,
                    Some(parent_container),
                    body.distance * MOON_ORBIT_SCALE,
                    MOON_GUIDE_SAMPLES,
                    MOON_GUIDE_ALPHA,
                );

                let mesh = scene.spawn_child(
                    parent_container,
                    Node::new().with_tag(&body.name_en).with_renderable(Renderable::Sphere {
                        radius: body.size,
                        color: body.color,
                        emissive: 0.0,
                    }),
                );
                out.body_of_node.insert(mesh, id);
                out.moons.push(OrbitingEntry { container: parent_container, mesh, body: id });
            }
        }
    }

    out
}

/// Deterministic starfield: a 24-bit hash spreads points through a cube
/// centered on the origin.
fn spawn_starfield(scene: &mut SceneGraph) {
    let mut points = Vec::with_capacity(STAR_COUNT);
    for i in 0..STAR_COUNT as u32 {
        points.push(Vec3::new(
            (hash01(i * 3) - 0.5) * STAR_SPREAD,
            (hash01(i * 3 + 1) - 0.5) * STAR_SPREAD,
            (hash01(i * 3 + 2) - 0.5) * STAR_SPREAD,
        ));
    }
    scene.spawn(Node::new().with_tag("starfield").with_renderable(Renderable::Points {
        points,
        color: [1.0, 1.0, 1.0, 1.0],
        size: STAR_SIZE,
    }));
}

fn hash01(seed: u32) -> f32 {
    let mut h = seed.wrapping_mul(0x9E37_79B9);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}

/// A closed circle in the XZ plane, either a root (planet orbits) or a
/// child of the planet container (moon orbits).
fn spawn_orbit_guide(
    scene: &mut SceneGraph,
    parent: Option<NodeId>,
    radius: f32,
    samples: usize,
    alpha: f32,
) {
    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let angle = i as f32 / samples as f32 * TAU;
        points.push(Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius));
    }
    let node = Node::new().with_renderable(Renderable::Path {
        points,
        color: [1.0, 1.0, 1.0, alpha],
        closed: true,
    });
    match parent {
        Some(p) => scene.spawn_child(p, node),
        None => scene.spawn(node),
    };
}

/// Labels hang below their body; `text_id` is the catalog index, which
/// the host resolves to the localized name.
fn spawn_label(scene: &mut SceneGraph, parent: NodeId, body: BodyId, scale: f32, offset_y: f32) {
    scene.spawn_child(
        parent,
        Node::new()
            .with_pos(Vec3::new(0.0, offset_y, 0.0))
            .with_renderable(Renderable::Label { text_id: body.0 as u32, scale }),
    );
}
