use glam::Vec3;
use crate::api::types::NodeId;

/// What a node contributes to the frame, if anything.
/// Plain containers (planet groups) carry `None` and exist only to give
/// their children a shared reference frame.
#[derive(Debug, Clone)]
pub enum Renderable {
    /// A shaded sphere (sun, planet, moon).
    Sphere {
        radius: f32,
        color: [f32; 3],
        /// Emissive strength; 0 for lit bodies, > 0 for the sun.
        emissive: f32,
    },
    /// A flat annulus band (planetary rings), tilted about X.
    Ring {
        inner: f32,
        outer: f32,
        color: [f32; 3],
        opacity: f32,
        tilt: f32,
    },
    /// A billboard text label. The host resolves `text_id` to localized
    /// text; the engine only places it.
    Label { text_id: u32, scale: f32 },
    /// A polyline in the node's local frame (orbit guides).
    Path {
        points: Vec<Vec3>,
        color: [f32; 4],
        closed: bool,
    },
    /// A static point cloud (starfield backdrop).
    Points { points: Vec<Vec3>, color: [f32; 4], size: f32 },
}

/// A scene-graph node. Position is local to the parent; the world
/// position is the sum of local positions up the ancestor chain
/// (this graph has no rotational frames — spin affects only the node's
/// own rendering, never its children).
#[derive(Debug, Clone)]
pub struct Node {
    /// String tag for finding nodes by name.
    pub tag: String,
    pub visible: bool,
    /// Position relative to the parent (world position for roots).
    pub local_pos: Vec3,
    /// Axial rotation in radians, applied to this node's mesh only.
    pub spin: f32,
    pub renderable: Option<Renderable>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self {
            tag: String::new(),
            visible: true,
            local_pos: Vec3::ZERO,
            spin: 0.0,
            renderable: None,
            parent: None,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.local_pos = pos;
        self
    }

    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena-backed scene graph. Nodes are spawned once during construction
/// and never despawned; a `NodeId` is the node's index for the lifetime
/// of the graph. Parents are always spawned before their children, so a
/// parent index is strictly smaller than any child index and ancestor
/// walks terminate.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Add a root node. Returns its id.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a node as a child of `parent`. Returns its id.
    pub fn spawn_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        if let Some(p) = self.nodes.get_mut(parent.0 as usize) {
            p.children.push(id);
        }
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// World position of a node: its local position plus every
    /// ancestor's local position.
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut pos = Vec3::ZERO;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.get(current) else { break };
            pos += node.local_pos;
            cursor = node.parent;
        }
        pos
    }

    /// Whether a node and all of its ancestors are visible.
    pub fn effectively_visible(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.get(current) else { return false };
            if !node.visible {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.tag == tag)
            .map(|i| NodeId(i as u32))
    }

    /// Iterate over all nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_get() {
        let mut scene = SceneGraph::new();
        let id = scene.spawn(Node::new().with_pos(Vec3::new(10.0, 0.0, 20.0)));
        let n = scene.get(id).unwrap();
        assert_eq!(n.local_pos, Vec3::new(10.0, 0.0, 20.0));
    }

    #[test]
    fn world_position_sums_ancestors() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn(Node::new().with_pos(Vec3::new(100.0, 0.0, 0.0)));
        let child = scene.spawn_child(root, Node::new().with_pos(Vec3::new(0.0, 0.0, 15.0)));
        assert_eq!(scene.world_position(child), Vec3::new(100.0, 0.0, 15.0));
        // Moving the root carries the child with it.
        scene.get_mut(root).unwrap().local_pos = Vec3::new(-50.0, 0.0, 0.0);
        assert_eq!(scene.world_position(child), Vec3::new(-50.0, 0.0, 15.0));
    }

    #[test]
    fn parent_chain() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn(Node::new());
        let mid = scene.spawn_child(root, Node::new());
        let leaf = scene.spawn_child(mid, Node::new());
        assert_eq!(scene.parent_of(leaf), Some(mid));
        assert_eq!(scene.parent_of(mid), Some(root));
        assert_eq!(scene.parent_of(root), None);
        assert_eq!(scene.get(root).unwrap().children(), &[mid]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = SceneGraph::new();
        scene.spawn(Node::new().with_tag("sun"));
        let earth = scene.spawn(Node::new().with_tag("earth"));
        assert_eq!(scene.find_by_tag("earth"), Some(earth));
        assert_eq!(scene.find_by_tag("vulcan"), None);
    }

    #[test]
    fn hidden_parent_hides_children() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn(Node::new());
        let child = scene.spawn_child(root, Node::new());
        assert!(scene.effectively_visible(child));
        scene.get_mut(root).unwrap().visible = false;
        assert!(!scene.effectively_visible(child));
    }
}
