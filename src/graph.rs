use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::colour::Colour;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId};

/**
 * The enmity graph for a single test case.
 *
 * Nodes live in an arena, and are found by name through an ordered index, so
 * that iteration (and hence the colouring) is the same from run to run.
 * Enmities are undirected, and always inserted in both directions.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    index: BTreeMap<String, NodeId>,
    nodes: Vec<Node>,
}

/// A borrowed view of one node, as returned by `Graph::lookup`.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn colour(&self) -> Colour {
        self.node.colour()
    }

    pub fn degree(&self) -> usize {
        self.node.degree()
    }

    pub fn is_enemy_of(&self, other: &NodeRef) -> bool {
        self.node.is_enemy_of(other.id)
    }
}

/// Two enemies that ended up with the same colour, which proves that the
/// component contains an odd cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub name: String,
    pub enemy: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { components: usize },
    Conflict(Conflict),
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }
}

/// The two factions of a solved graph, each in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Factions {
    pub red: Vec<String>,
    pub black: Vec<String>,
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Graph {{")?;
        writeln!(f, "    nodes: {}", self.node_count())?;
        writeln!(f, "    edges: {}", self.edge_count())?;
        for (name, &id) in self.index.iter() {
            let node = &self.nodes[id.index()];
            let enemies: Vec<&str> = node
                .enemies()
                .map(|e| self.nodes[e.index()].name())
                .collect();
            writeln!(f, "    {} ({}): {:?}", name, node.colour(), enemies)?;
        }
        writeln!(f, "}}")
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // -- PRIVATE NODE FUNCTIONS -- //

    fn find_or_insert(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        trace!("new node: '{}' ({:?})", name, id);
        id
    }

    // -- PUBLIC CONSTRUCTION FUNCTIONS -- //

    /**
     *  Records that `name` and `enemy` are enemies, creating either node if
     *  it is not yet known. Repeated pairings (in either order) are ignored.
     *
     *  Note: a name cannot be its own enemy, and such a pairing is rejected
     *    without modifying the graph.
     */
    pub fn add_pairing(&mut self, name: &str, enemy: &str) -> Result<()> {
        if name == enemy {
            return Err(Error::self_pairing(name));
        }
        let a = self.find_or_insert(name);
        let b = self.find_or_insert(enemy);
        self.nodes[a.index()].add_enemy(b);
        self.nodes[b.index()].add_enemy(a);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    pub fn lookup(&self, name: &str) -> Result<NodeRef<'_>> {
        let &id = self.index.get(name).ok_or_else(|| Error::not_found(name))?;
        Ok(NodeRef {
            id,
            node: &self.nodes[id.index()],
        })
    }

    // -- COLOURING -- //

    fn reset_colours(&mut self) {
        for node in self.nodes.iter_mut() {
            node.set_colour(Colour::None);
        }
    }

    /**
     *  Colours the component containing `root`, which must be uncoloured,
     *  starting with `Red` at the root. Uses an explicit stack, so that long
     *  chains of enemies cannot overflow the call-stack.
     */
    fn colour_component(
        &mut self,
        root: NodeId,
    ) -> std::result::Result<(), Conflict> {
        self.nodes[root.index()].set_colour(Colour::Red);
        let mut stack = vec![root];
        let mut enemies = Vec::new();

        while let Some(u) = stack.pop() {
            let colour = self.nodes[u.index()].colour();
            enemies.clear();
            enemies.extend(self.nodes[u.index()].enemies());

            for &v in enemies.iter() {
                let enemy = &mut self.nodes[v.index()];
                match enemy.colour() {
                    Colour::None => {
                        enemy.set_colour(colour.opposite());
                        stack.push(v);
                    }
                    c if c == colour => {
                        return Err(Conflict {
                            name: self.nodes[u.index()].name().to_string(),
                            enemy: self.nodes[v.index()].name().to_string(),
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /**
     *  Two-colours every connected component, in name order, and stops at the
     *  first pair of same-coloured enemies. Any previous colouring is
     *  discarded first, so repeated calls give the same outcome.
     */
    pub fn colour_components(&mut self) -> Outcome {
        self.reset_colours();
        let roots: Vec<NodeId> = self.index.values().copied().collect();
        let mut components = 0;

        for root in roots {
            if self.nodes[root.index()].colour().is_set() {
                continue;
            }
            components += 1;
            trace!(
                "component {} rooted at '{}'",
                components,
                self.nodes[root.index()].name()
            );
            if let Err(conflict) = self.colour_component(root) {
                debug!(
                    "odd cycle: enemies '{}' and '{}' share a colour",
                    conflict.name, conflict.enemy,
                );
                return Outcome::Conflict(conflict);
            }
        }

        debug!("two-coloured {} component(s)", components);
        Outcome::Solved { components }
    }

    /// Returns whether the enemies can be split into two factions.
    pub fn solve(&mut self) -> bool {
        self.colour_components().is_solved()
    }

    /// The factions, if every node has been coloured. Only meaningful after
    /// a successful `solve`.
    pub fn factions(&self) -> Option<Factions> {
        let mut factions = Factions::default();
        for (name, &id) in self.index.iter() {
            match self.nodes[id.index()].colour() {
                Colour::Red => factions.red.push(name.clone()),
                Colour::Black => factions.black.push(name.clone()),
                Colour::None => return None,
            }
        }
        Some(factions)
    }
}
