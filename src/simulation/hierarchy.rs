//! Parent/child ordering for locked bodies.
//!
//! A locked body is placed relative to its parent's *current* position, so
//! parents must be placed before their children within a step. The
//! hierarchy resolves every parent link to a slot index once and produces a
//! parents-first visiting order, independent of how the caller ordered the
//! collection.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use bevy::prelude::*;

use crate::body::{BodyId, CelestialBody};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("body id {0} appears more than once")]
    DuplicateId(BodyId),

    #[error("parent links form a cycle through body {0}")]
    Cycle(BodyId),
}

/// Identity and parent link of every body, in collection order.
///
/// Two collections with equal shapes share the same hierarchy.
pub type HierarchyShape = Vec<(BodyId, Option<BodyId>)>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Resolved parent slots plus a parents-first visiting order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyHierarchy {
    order: Vec<usize>,
    parents: Vec<Option<usize>>,
}

impl BodyHierarchy {
    /// Build the hierarchy, rejecting duplicate ids and parent cycles.
    pub fn build(bodies: &[CelestialBody]) -> Result<Self, HierarchyError> {
        Self::resolve(bodies, true)
    }

    /// Build the hierarchy without failing.
    ///
    /// Duplicate ids resolve to their first occurrence. A parent link that
    /// would close a cycle is dropped, so that body orbits the origin.
    pub fn build_lenient(bodies: &[CelestialBody]) -> Self {
        match Self::resolve(bodies, false) {
            Ok(hierarchy) => hierarchy,
            // resolve never fails in lenient mode
            Err(_) => Self::default(),
        }
    }

    pub fn shape(bodies: &[CelestialBody]) -> HierarchyShape {
        bodies.iter().map(|b| (b.id, b.parent_id())).collect()
    }

    /// Slot indices with every resolvable parent ahead of its children.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Resolved parent slot of the body at `index`.
    ///
    /// `None` for bodies without a parent, with a dangling parent id, or
    /// whose link was dropped to break a cycle.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.parents.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn resolve(bodies: &[CelestialBody], strict: bool) -> Result<Self, HierarchyError> {
        let mut slots: HashMap<BodyId, usize> = HashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            match slots.entry(body.id) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(_) if strict => return Err(HierarchyError::DuplicateId(body.id)),
                Entry::Occupied(_) => {
                    warn!(
                        "Duplicate body id {} ({}); parent lookups use the first",
                        body.id, body.name
                    );
                }
            }
        }

        let mut parents: Vec<Option<usize>> = bodies
            .iter()
            .map(|b| b.parent_id().and_then(|p| slots.get(&p).copied()))
            .collect();

        let mut marks = vec![Mark::Unvisited; bodies.len()];
        let mut order = Vec::with_capacity(bodies.len());

        for i in 0..bodies.len() {
            visit(i, bodies, &mut parents, &mut marks, &mut order, strict)?;
        }

        Ok(Self { order, parents })
    }
}

/// Walk up from `start` until reaching a placed body or a root, then emit
/// the walked chain root-most first.
fn visit(
    start: usize,
    bodies: &[CelestialBody],
    parents: &mut [Option<usize>],
    marks: &mut [Mark],
    order: &mut Vec<usize>,
    strict: bool,
) -> Result<(), HierarchyError> {
    let mut chain = Vec::new();
    let mut current = start;

    while marks[current] == Mark::Unvisited {
        marks[current] = Mark::InProgress;
        chain.push(current);

        match parents[current] {
            Some(parent) if marks[parent] == Mark::InProgress => {
                if strict {
                    return Err(HierarchyError::Cycle(bodies[current].id));
                }
                warn!(
                    "Parent cycle at body {} ({}); it will orbit the origin",
                    bodies[current].id, bodies[current].name
                );
                parents[current] = None;
                break;
            }
            Some(parent) => current = parent,
            None => break,
        }
    }

    for &index in chain.iter().rev() {
        marks[index] = Mark::Done;
        order.push(index);
    }
    Ok(())
}
