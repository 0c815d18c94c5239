//! Prefix tree of key chord sequences


use crate::{chord::Chord, data::KeyCallback, error::BindingsError};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = NodeId(0);
}

#[derive(Debug)]
pub struct KeyNode {
    chord: Chord,
    depth: usize,
    /// Whether the node continues a chain. Chain nodes never carry callbacks and
    /// terminal nodes never have children.
    chain: bool,
    callbacks: Vec<KeyCallback>,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl KeyNode {
    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_chain(&self) -> bool {
        self.chain
    }

    pub fn callbacks(&self) -> &[KeyCallback] {
        &self.callbacks
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Lookup {
    /// The sequence ends in an existing terminal node.
    Found(NodeId),
    /// A prefix of the sequence is bound, or the sequence is a prefix of a binding.
    Conflict,
    NotFound,
}

/// An arena of trie nodes. Node 0 is the root; its chord is unused and it never has
/// siblings.
///
/// Nodes are only ever appended. `clear` drops everything but the root, which
/// invalidates every other `NodeId`.
#[derive(Debug)]
pub struct KeyTree {
    nodes: Vec<KeyNode>,
}

impl Default for KeyTree {
    fn default() -> Self {
        Self {
            nodes: vec![KeyNode {
                chord: Chord::default(),
                depth: 0,
                chain: true,
                callbacks: vec![],
                first_child: None,
                next_sibling: None,
            }],
        }
    }
}

pub struct Children<'a> {
    tree: &'a KeyTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a KeyNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.tree.node(id);
        self.next = node.next_sibling;
        Some((id, node))
    }
}

impl KeyTree {
    pub fn node(&self, id: NodeId) -> &KeyNode {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut KeyNode {
        &mut self.nodes[id.0 as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.node(NodeId::ROOT).first_child.is_none()
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    pub fn child(&self, parent: NodeId, chord: Chord) -> Option<NodeId> {
        self.children(parent)
            .find(|(_, node)| node.chord == chord)
            .map(|(id, _)| id)
    }

    /// Walks the tree in lockstep with `seq`.
    pub fn find(&self, seq: &[Chord]) -> Lookup {
        let mut cur = self.node(NodeId::ROOT).first_child;
        let mut depth = 0;
        while let Some(id) = cur {
            if depth == seq.len() {
                break;
            }
            let node = self.node(id);
            if node.chord != seq[depth] {
                cur = node.next_sibling;
                continue;
            }
            let chain = depth + 1 < seq.len();
            if node.chain != chain {
                return Lookup::Conflict;
            }
            if !node.chain {
                return Lookup::Found(id);
            }
            cur = node.first_child;
            depth += 1;
        }
        Lookup::NotFound
    }

    /// Merges `seq` into the tree and returns the terminal node holding `callback`.
    ///
    /// The longest existing prefix is shared. The remainder becomes a new linear branch
    /// appended after the last sibling at the level where the walk stopped. If the whole
    /// sequence already exists, the callback is appended to the existing terminal.
    pub fn assimilate(
        &mut self,
        seq: &[Chord],
        callback: KeyCallback,
    ) -> Result<NodeId, BindingsError> {
        if seq.is_empty() {
            return Err(BindingsError::EmptySequence);
        }
        let mut parent = NodeId::ROOT;
        let mut depth = 0;
        loop {
            let terminal = depth + 1 == seq.len();
            let Some(id) = self.child(parent, seq[depth]) else {
                return Ok(self.graft(parent, &seq[depth..], callback));
            };
            let node = self.node_mut(id);
            match (node.chain, terminal) {
                (true, false) => {
                    parent = id;
                    depth += 1;
                }
                (false, true) => {
                    node.callbacks.push(callback);
                    return Ok(id);
                }
                _ => return Err(BindingsError::Conflict),
            }
        }
    }

    fn graft(&mut self, parent: NodeId, rest: &[Chord], callback: KeyCallback) -> NodeId {
        let mut callback = Some(callback);
        let mut depth = self.node(parent).depth;
        let mut prev = None;
        let mut leaf = parent;
        for (idx, &chord) in rest.iter().enumerate() {
            let terminal = idx + 1 == rest.len();
            depth += 1;
            let id = NodeId(self.nodes.len() as u32);
            self.nodes.push(KeyNode {
                chord,
                depth,
                chain: !terminal,
                callbacks: match terminal {
                    true => callback.take().into_iter().collect(),
                    false => vec![],
                },
                first_child: None,
                next_sibling: None,
            });
            match prev {
                None => self.append_child(parent, id),
                Some(prev) => self.node_mut(prev).first_child = Some(id),
            }
            prev = Some(id);
            leaf = id;
        }
        leaf
    }

    fn append_child(&mut self, parent: NodeId, id: NodeId) {
        let Some(mut last) = self.node(parent).first_child else {
            self.node_mut(parent).first_child = Some(id);
            return;
        };
        while let Some(next) = self.node(last).next_sibling {
            last = next;
        }
        self.node_mut(last).next_sibling = Some(id);
    }

    pub fn push_callback(&mut self, terminal: NodeId, callback: KeyCallback) {
        let node = self.node_mut(terminal);
        debug_assert!(!node.chain);
        node.callbacks.push(callback);
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.node_mut(NodeId::ROOT).first_child = None;
    }
}
