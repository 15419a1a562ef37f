//! Breadth-first and depth-first walks over any indexed adjacency source.
//!
//! Vertices are dense indices `0..vertex_count()`. Every call owns its own
//! frontier and visited set, so walks never share state.

use std::collections::VecDeque;

use ahash::AHashSet;

/// Ordered out-neighbours of dense vertex indices.
pub trait Adjacency {
    fn vertex_count(&self) -> usize;
    fn out_neighbors(&self, vertex: usize) -> &[usize];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    BreadthFirst,
    DepthFirst,
}

/// Vertices reachable from `start` in discovery order, `start` first.
pub fn walk<A: Adjacency + ?Sized>(
    adjacency: &A,
    start: usize,
    order: TraversalOrder,
) -> Vec<usize> {
    match order {
        TraversalOrder::BreadthFirst => breadth_first(adjacency, start)
            .into_iter()
            .map(|(vertex, _)| vertex)
            .collect(),
        TraversalOrder::DepthFirst => depth_first(adjacency, start),
    }
}

/// BFS discovery order paired with the vertex that discovered each entry.
/// The first entry is `(start, None)`.
pub fn discovery_parents<A: Adjacency + ?Sized>(
    adjacency: &A,
    start: usize,
) -> Vec<(usize, Option<usize>)> {
    breadth_first(adjacency, start)
}

fn breadth_first<A: Adjacency + ?Sized>(
    adjacency: &A,
    start: usize,
) -> Vec<(usize, Option<usize>)> {
    let mut visited = Vec::new();
    let mut seen = AHashSet::with_capacity(adjacency.vertex_count());
    let mut queue = VecDeque::new();
    queue.push_back((start, None));
    seen.insert(start);
    while let Some((node, parent)) = queue.pop_front() {
        visited.push((node, parent));
        for &next in adjacency.out_neighbors(node) {
            if seen.insert(next) {
                queue.push_back((next, Some(node)));
            }
        }
    }
    visited
}

fn depth_first<A: Adjacency + ?Sized>(adjacency: &A, start: usize) -> Vec<usize> {
    let mut visited = vec![start];
    let mut seen = AHashSet::with_capacity(adjacency.vertex_count());
    seen.insert(start);
    // (vertex, index of the next out-neighbour to try)
    let mut stack = vec![(start, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let neighbors = adjacency.out_neighbors(node);
        match neighbors[cursor..].iter().position(|next| !seen.contains(next)) {
            Some(offset) => {
                let next = neighbors[cursor + offset];
                frame.1 = cursor + offset + 1;
                seen.insert(next);
                visited.push(next);
                stack.push((next, 0));
            }
            None => {
                stack.pop();
            }
        }
    }
    visited
}
