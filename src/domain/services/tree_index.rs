//! Tree index
//!
//! Read-only adjacency view over the flat node list. Built once per node
//! list; afterwards id lookup and child lookup are O(1), and ancestor /
//! descendant walks touch only the nodes on the path.

use std::collections::HashMap;

use crate::domain::entities::{Node, NodeId};
use crate::error::{SlicerError, SlicerResult};

/// Separator used by the persisted key lists; ids may not contain it
pub const KEY_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParentLink {
    Root,
    Node(NodeId),
    /// `parent_id` does not resolve; reported lazily on ancestor walks
    Missing(String),
}

/// Adjacency index keyed by node id
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    own_ids: Vec<String>,
    by_id: HashMap<String, NodeId>,
    parents: Vec<ParentLink>,
    children: Vec<Vec<NodeId>>,
    roots: Vec<NodeId>,
    max_level: Option<usize>,
}

impl TreeIndex {
    /// Index a node list.
    ///
    /// Fails on duplicate ids, on ids that cannot round-trip through the
    /// persisted key lists, on parent cycles, and on levels that disagree
    /// with the parent links (roots at 0, children one below their parent).
    /// Dangling parent references are accepted here and surface as
    /// [`SlicerError::BrokenChain`] when an ancestor walk hits them.
    pub fn build(nodes: &[Node]) -> SlicerResult<Self> {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            validate_id(&node.own_id)?;
            if by_id.insert(node.own_id.clone(), NodeId::new(i)).is_some() {
                return Err(SlicerError::DuplicateNode {
                    id: node.own_id.clone(),
                });
            }
        }

        let mut parents = Vec::with_capacity(nodes.len());
        let mut children = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (i, node) in nodes.iter().enumerate() {
            let id = NodeId::new(i);
            let link = if node.is_root() {
                roots.push(id);
                ParentLink::Root
            } else {
                match by_id.get(&node.parent_id) {
                    Some(&parent) => {
                        children[parent.index()].push(id);
                        ParentLink::Node(parent)
                    }
                    None => ParentLink::Missing(node.parent_id.clone()),
                }
            };
            parents.push(link);
        }

        check_acyclic(nodes, &parents)?;
        check_levels(nodes, &parents)?;

        Ok(Self {
            own_ids: nodes.iter().map(|n| n.own_id.clone()).collect(),
            by_id,
            parents,
            children,
            roots,
            max_level: nodes.iter().map(|n| n.level).max(),
        })
    }

    pub fn len(&self) -> usize {
        self.own_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.own_ids.is_empty()
    }

    /// Handle of the node with this `own_id`
    pub fn by_id(&self, own_id: &str) -> Option<NodeId> {
        self.by_id.get(own_id).copied()
    }

    /// Immediate parent; `None` for roots
    pub fn parent_of(&self, id: NodeId) -> SlicerResult<Option<NodeId>> {
        match &self.parents[id.index()] {
            ParentLink::Root => Ok(None),
            ParentLink::Node(parent) => Ok(Some(*parent)),
            ParentLink::Missing(parent) => Err(SlicerError::BrokenChain {
                node: self.own_ids[id.index()].clone(),
                parent: parent.clone(),
            }),
        }
    }

    /// Immediate children in node-list order
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.index()]
    }

    /// Every node below `id`, in pre-order
    pub fn descendants_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; self.len()];
        visited[id.index()] = true;

        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children_of(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            if std::mem::replace(&mut visited[next.index()], true) {
                continue;
            }
            out.push(next);
            stack.extend(self.children_of(next).iter().rev().copied());
        }
        out
    }

    /// Strict ancestors ordered from the root down to the immediate parent
    pub fn ancestor_chain(&self, id: NodeId) -> SlicerResult<Vec<NodeId>> {
        let mut chain = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_of(current)? {
            // A node has at most len - 1 strict ancestors.
            if chain.len() + 1 >= self.len() {
                return Err(SlicerError::CyclicParent {
                    node: self.own_ids[id.index()].clone(),
                });
            }
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        Ok(chain)
    }

    /// Nodes without a parent, in node-list order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Deepest level over all nodes, selected or not
    pub fn max_level(&self) -> Option<usize> {
        self.max_level
    }

    /// Children before parents, starting from every node without a resolvable parent
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut visited = vec![false; self.len()];
        let mut out = Vec::with_capacity(self.len());
        let starts = self
            .parents
            .iter()
            .enumerate()
            .filter(|(_, link)| !matches!(link, ParentLink::Node(_)))
            .map(|(i, _)| NodeId::new(i));

        for start in starts {
            // (node, children already pushed)
            let mut stack = vec![(start, false)];
            while let Some((id, expanded)) = stack.pop() {
                if expanded {
                    out.push(id);
                    continue;
                }
                if std::mem::replace(&mut visited[id.index()], true) {
                    continue;
                }
                stack.push((id, true));
                stack.extend(
                    self.children_of(id)
                        .iter()
                        .rev()
                        .filter(|c| !visited[c.index()])
                        .map(|&c| (c, false)),
                );
            }
        }
        out
    }
}

/// Follow every resolved parent link once; revisiting a node on the
/// current path means the links loop.
fn check_acyclic(nodes: &[Node], parents: &[ParentLink]) -> SlicerResult<()> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unseen; nodes.len()];
    for start in 0..nodes.len() {
        let mut path = Vec::new();
        let mut current = start;
        while marks[current] == Mark::Unseen {
            marks[current] = Mark::OnPath;
            path.push(current);
            match parents[current] {
                ParentLink::Node(parent) => current = parent.index(),
                ParentLink::Root | ParentLink::Missing(_) => break,
            }
        }
        if marks[current] == Mark::OnPath && matches!(parents[current], ParentLink::Node(_)) {
            return Err(SlicerError::CyclicParent {
                node: nodes[current].own_id.clone(),
            });
        }
        for visited in path {
            marks[visited] = Mark::Done;
        }
    }
    Ok(())
}

/// Roots sit at level 0 and every resolved child one level below its parent
fn check_levels(nodes: &[Node], parents: &[ParentLink]) -> SlicerResult<()> {
    for (node, link) in nodes.iter().zip(parents) {
        let expected = match link {
            ParentLink::Root => 0,
            ParentLink::Node(parent) => nodes[parent.index()].level + 1,
            ParentLink::Missing(_) => continue,
        };
        if node.level != expected {
            return Err(SlicerError::LevelMismatch {
                node: node.own_id.clone(),
                expected,
                found: node.level,
            });
        }
    }
    Ok(())
}

fn validate_id(id: &str) -> SlicerResult<()> {
    if id.is_empty() {
        return Err(SlicerError::InvalidNodeId {
            id: id.to_string(),
            reason: "id is empty",
        });
    }
    if id.contains(KEY_SEPARATOR) {
        return Err(SlicerError::InvalidNodeId {
            id: id.to_string(),
            reason: "contains ','",
        });
    }
    Ok(())
}
