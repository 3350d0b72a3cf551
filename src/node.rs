use crate::colour::Colour;
use std::collections::BTreeSet;

/// Index of a node within its owning `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/**
 * A named entity, and the set of its enemies.
 *
 * Enemies are stored as indices into the graph that owns this node, so the
 * node never owns its neighbours. Symmetry of the enmity relation is the
 * responsibility of the graph, as `add_enemy` only updates this node.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    colour: Colour,
    enemies: BTreeSet<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colour: Colour::None,
            enemies: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = colour;
        self
    }

    // -- ENEMY FUNCTIONS -- //

    /// Returns `false` if `other` was already an enemy.
    pub fn add_enemy(&mut self, other: NodeId) -> bool {
        self.enemies.insert(other)
    }

    pub fn is_enemy_of(&self, other: NodeId) -> bool {
        self.enemies.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemies(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.enemies.iter().copied()
    }
}
