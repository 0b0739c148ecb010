// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Connected and strongly connected components.
//!
//! Connected components of undirected graphs are the trees of a
//! depth-first search. Strongly connected components of directed graphs are
//! computed by Tarjan's algorithm, implemented as a depth-first search
//! visitor ([`TarjanSccVisitor`]).
//!
//! # Example
//!
//! ```
//! use rs_adjgraph::DirectedAdjacencyGraph;
//! use rs_adjgraph::components::strongly_connected_components;
//!
//! let g: DirectedAdjacencyGraph<char> = vec![('a', 'b'), ('b', 'c'), ('c', 'a'), ('c', 'd')]
//!     .into_iter()
//!     .collect();
//! let scc = strongly_connected_components(&g).unwrap();
//! assert_eq!(scc.num_components(), 2);
//! assert_eq!(scc.component(&'a'), scc.component(&'c'));
//! assert_ne!(scc.component(&'a'), scc.component(&'d'));
//! ```

use crate::adjacency::DirectedAdjacencyGraph;
use crate::error::Result;
use crate::mutable::MutableGraph;
use crate::search::dfs::depth_first_search;
use crate::traits::{ensure_directed, ensure_undirected, neighbors, Graph, Vertex};
use crate::visitor::{ColorMap, Control, DfsVisitor, GraphVisitor, CONTINUE};

use std::collections::HashMap;
use std::mem;

use tracing::debug;

/// Collects the vertices of each depth-first tree.
struct ComponentCollector<V, F> {
    colors: ColorMap<V>,
    current: Vec<V>,
    report: F,
}

impl<V, F> ComponentCollector<V, F>
where
    F: FnMut(Vec<V>),
{
    fn flush(&mut self) {
        if !self.current.is_empty() {
            (self.report)(mem::take(&mut self.current));
        }
    }
}

impl<V, F> GraphVisitor<V> for ComponentCollector<V, F>
where
    V: Vertex,
    F: FnMut(Vec<V>),
{
    fn color_map(&self) -> &ColorMap<V> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<V> {
        &mut self.colors
    }

    fn finish_vertex(&mut self, u: &V) -> Control {
        self.current.push(u.clone());
        CONTINUE
    }
}

impl<V, F> DfsVisitor<V> for ComponentCollector<V, F>
where
    V: Vertex,
    F: FnMut(Vec<V>),
{
    fn start_vertex(&mut self, _u: &V) -> Control {
        self.flush();
        CONTINUE
    }
}

/// Call `f` with the vertices of each connected component of `g`.
///
/// Fails with [`GraphError::NotUndirected`](crate::GraphError::NotUndirected)
/// for directed graphs.
pub fn each_connected_component<G, F>(g: &G, f: F) -> Result<()>
where
    G: Graph,
    F: FnMut(Vec<G::Vertex>),
{
    ensure_undirected(g, "each_connected_component")?;
    let mut vis = ComponentCollector {
        colors: ColorMap::new(),
        current: vec![],
        report: f,
    };
    // the collector never aborts
    let _ = depth_first_search(g, &mut vis);
    vis.flush();
    Ok(())
}

/// Return the connected components of `g`.
///
/// # Example
///
/// ```
/// use rs_adjgraph::UndirectedAdjacencyGraph;
/// use rs_adjgraph::components::connected_components;
///
/// let g: UndirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 3), (4, 5), (6, 6)].into_iter().collect();
/// let mut comps = connected_components(&g).unwrap();
/// for c in comps.iter_mut() {
///     c.sort();
/// }
/// comps.sort();
/// assert_eq!(comps, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
/// ```
pub fn connected_components<G>(g: &G) -> Result<Vec<Vec<G::Vertex>>>
where
    G: Graph,
{
    let mut components = vec![];
    each_connected_component(g, |comp| components.push(comp))?;
    debug!("found {} connected components", components.len());
    Ok(components)
}

/// The strongly connected components of a directed graph.
#[derive(Clone, Debug)]
pub struct StrongComponents<V> {
    comp_map: HashMap<V, usize>,
    num_components: usize,
}

impl<V> StrongComponents<V>
where
    V: Vertex,
{
    /// Number of components. The components are numbered `0..num_components()`.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Component of a vertex.
    pub fn component(&self, v: &V) -> Option<usize> {
        self.comp_map.get(v).copied()
    }

    /// The map from vertices to components.
    pub fn comp_map(&self) -> &HashMap<V, usize> {
        &self.comp_map
    }

    pub fn into_comp_map(self) -> HashMap<V, usize> {
        self.comp_map
    }

    /// The (sorted) members of each component, indexed by component.
    pub fn components(&self) -> Vec<Vec<V>> {
        let mut members = vec![vec![]; self.num_components];
        for (v, &c) in &self.comp_map {
            members[c].push(v.clone());
        }
        for m in members.iter_mut() {
            m.sort();
        }
        members
    }
}

/// Tarjan's strongly connected components algorithm as a DFS visitor.
///
/// Each vertex gets a discovery index and a root candidate when examined and
/// is pushed to an auxiliary stack. When a vertex `v` is finished, its root
/// becomes the root with the smallest discovery index among `v` and its
/// neighbors that have not been assigned to a component. If `v` is its own
/// root, the stack is popped down to `v` and all popped vertices form a new
/// component.
pub struct TarjanSccVisitor<'g, G>
where
    G: Graph,
{
    graph: &'g G,
    colors: ColorMap<G::Vertex>,
    discover_time: HashMap<G::Vertex, usize>,
    root_map: HashMap<G::Vertex, G::Vertex>,
    comp_map: HashMap<G::Vertex, usize>,
    stack: Vec<G::Vertex>,
    num_components: usize,
}

impl<'g, G> TarjanSccVisitor<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G) -> Self {
        TarjanSccVisitor {
            graph,
            colors: ColorMap::new(),
            discover_time: HashMap::new(),
            root_map: HashMap::new(),
            comp_map: HashMap::new(),
            stack: vec![],
            num_components: 0,
        }
    }

    /// Return the components found so far.
    pub fn into_components(self) -> StrongComponents<G::Vertex> {
        StrongComponents {
            comp_map: self.comp_map,
            num_components: self.num_components,
        }
    }

    fn discover_time(&self, v: &G::Vertex) -> usize {
        self.discover_time.get(v).copied().unwrap_or(usize::MAX)
    }
}

impl<'g, G> GraphVisitor<G::Vertex> for TarjanSccVisitor<'g, G>
where
    G: Graph,
{
    fn color_map(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    fn color_map_mut(&mut self) -> &mut ColorMap<G::Vertex> {
        &mut self.colors
    }

    fn examine_vertex(&mut self, v: &G::Vertex) -> Control {
        self.root_map.insert(v.clone(), v.clone());
        self.discover_time.insert(v.clone(), self.discover_time.len());
        self.stack.push(v.clone());
        CONTINUE
    }

    fn finish_vertex(&mut self, v: &G::Vertex) -> Control {
        let mut root = self.root_map.get(v).unwrap_or(v);
        for w in neighbors(self.graph, v) {
            if self.comp_map.contains_key(w) {
                continue;
            }
            if let Some(root_w) = self.root_map.get(w) {
                if self.discover_time(root_w) < self.discover_time(root) {
                    root = root_w;
                }
            }
        }
        let root = root.clone();

        if root == *v {
            while let Some(w) = self.stack.pop() {
                let done = w == *v;
                self.comp_map.insert(w, self.num_components);
                if done {
                    break;
                }
            }
            self.num_components += 1;
        }
        self.root_map.insert(v.clone(), root);
        CONTINUE
    }
}

impl<'g, G> DfsVisitor<G::Vertex> for TarjanSccVisitor<'g, G> where G: Graph {}

/// Compute the strongly connected components of a directed graph.
///
/// Fails with [`GraphError::NotDirected`](crate::GraphError::NotDirected)
/// for undirected graphs.
pub fn strongly_connected_components<G>(g: &G) -> Result<StrongComponents<G::Vertex>>
where
    G: Graph,
{
    ensure_directed(g, "strongly_connected_components")?;
    let mut vis = TarjanSccVisitor::new(g);
    // the visitor never aborts
    let _ = depth_first_search(g, &mut vis);
    let scc = vis.into_components();
    debug!("found {} strongly connected components", scc.num_components());
    Ok(scc)
}

/// The condensation of a directed graph.
///
/// Each strongly connected component is contracted to a single vertex,
/// identified by the component number. The condensation is acyclic.
#[derive(Clone, Debug)]
pub struct Condensation<V> {
    graph: DirectedAdjacencyGraph<usize>,
    members: Vec<Vec<V>>,
    components: StrongComponents<V>,
}

impl<V> Condensation<V>
where
    V: Vertex,
{
    /// The condensed graph on the component numbers.
    pub fn graph(&self) -> &DirectedAdjacencyGraph<usize> {
        &self.graph
    }

    pub fn into_graph(self) -> DirectedAdjacencyGraph<usize> {
        self.graph
    }

    /// The (sorted) members of component `c`.
    pub fn members(&self, c: usize) -> &[V] {
        self.members.get(c).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The component of an original vertex.
    pub fn component(&self, v: &V) -> Option<usize> {
        self.components.component(v)
    }

    pub fn num_components(&self) -> usize {
        self.members.len()
    }
}

/// Compute the condensation of a directed graph.
///
/// The condensation has one vertex per strongly connected component of `g`
/// and an edge between two distinct components if `g` has an edge between
/// any of their members.
///
/// # Example
///
/// ```
/// use rs_adjgraph::{DirectedAdjacencyGraph, Graph};
/// use rs_adjgraph::components::condensation_graph;
///
/// let g: DirectedAdjacencyGraph<u32> = vec![(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)].into_iter().collect();
/// let cond = condensation_graph(&g).unwrap();
/// assert_eq!(cond.num_components(), 2);
/// let (a, b) = (cond.component(&1).unwrap(), cond.component(&3).unwrap());
/// assert_eq!(cond.members(a), &[1, 2]);
/// assert_eq!(cond.graph().num_edges(), 1);
/// assert!(cond.graph().has_edge(&a, &b));
/// ```
pub fn condensation_graph<G>(g: &G) -> Result<Condensation<G::Vertex>>
where
    G: Graph,
{
    let components = strongly_connected_components(g)?;
    let members = components.components();

    let mut graph = DirectedAdjacencyGraph::with_capacity(members.len());
    graph.add_vertices(0..members.len());
    for u in g.vertices_iter() {
        if let Some(cu) = components.component(u) {
            for v in neighbors(g, u) {
                match components.component(v) {
                    Some(cv) if cu != cv => graph.add_edge(cu, cv),
                    _ => {}
                }
            }
        }
    }

    Ok(Condensation {
        graph,
        members,
        components,
    })
}
