// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, collections::{BinaryHeap, HashMap, hash_map::Entry}, hash::Hash};


/// An implicitly defined graph with non-negative edge weights.
pub(crate) trait Graph {
	type Node: Clone + Eq + Hash + std::fmt::Debug;

	/// Returns whether `node` lies within the graph's domain.
	fn contains(&self, node: &Self::Node) -> bool;

	/// Pairs of adjacent node and the weight of the edge leading to it.
	fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = (Self::Node, usize)>;

	/// Lower bound on the cost from `node` to `target`. Must never
	/// overestimate; the default turns the search into plain Dijkstra.
	fn heuristic(&self, _node: &Self::Node, _target: &Self::Node) -> usize { 0 }
}


#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchError {
	SourceOutOfBounds,
}

impl std::fmt::Display for SearchError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SearchError::SourceOutOfBounds => f.write_str("Search source is out of bounds"),
		}
	}
}

impl std::error::Error for SearchError {}


struct Frontier<N> {
	estimate: usize,
	cost: usize,
	node: N,
}

impl<N> PartialEq for Frontier<N> {
	fn eq(&self, other: &Self) -> bool {
		self.estimate == other.estimate && self.cost == other.cost
	}
}

impl<N> Eq for Frontier<N> {}

impl<N> PartialOrd for Frontier<N> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<N> Ord for Frontier<N> {
	// Reversed, as `BinaryHeap` is a max-heap
	fn cmp(&self, other: &Self) -> Ordering {
		self.estimate.cmp(&other.estimate).reverse()
			.then_with(|| self.cost.cmp(&other.cost))
	}
}


fn search<G: Graph>(
	graph: &G,
	source: G::Node,
	target: Option<&G::Node>,
) -> Result<(Option<usize>, HashMap<G::Node, usize>), SearchError> {
	if !graph.contains(&source) { return Err(SearchError::SourceOutOfBounds) }

	let heur = |node: &G::Node| target.map_or(0, |target| graph.heuristic(node, target));

	let mut distances = HashMap::new();
	let mut frontier = BinaryHeap::new();
	distances.insert(source.clone(), 0);
	frontier.push(Frontier { estimate: heur(&source), cost: 0, node: source });

	while let Some(Frontier { cost, node, .. }) = frontier.pop() {
		if Some(&node) == target { return Ok((Some(cost), distances)) }

		if cost > distances[&node] {
			#[cfg(LOGGING)]
			println!("- {node:?} @ {cost} -- was reached at {}", distances[&node]);
			continue
		}

		#[cfg(LOGGING)]
		println!("{node:?} @ {cost}; est.: {}", cost + heur(&node));

		for (next, weight) in graph.neighbors(&node) {
			let next_cost = cost + weight;
			match distances.entry(next) {
				Entry::Occupied(entry) if *entry.get() <= next_cost => continue,
				Entry::Occupied(mut entry) => {
					entry.insert(next_cost);
					let next = entry.key().clone();
					frontier.push(Frontier { estimate: next_cost + heur(&next), cost: next_cost, node: next });
				}
				Entry::Vacant(entry) => {
					let next = entry.key().clone();
					entry.insert(next_cost);
					frontier.push(Frontier { estimate: next_cost + heur(&next), cost: next_cost, node: next });
				}
			}
		}
	}

	Ok((None, distances))
}

/// Returns the least total weight of any path from `source` to `target`,
/// or `None` if `target` can not be reached.
pub(crate) fn shortest_path<G: Graph>(graph: &G, source: G::Node, target: &G::Node)
-> Result<Option<usize>, SearchError> {
	search(graph, source, Some(target)).map(|(cost, _)| cost)
}

/// Least total weights to every node reachable from `source`.
#[cfg(test)]
pub(crate) fn distances<G: Graph>(graph: &G, source: G::Node)
-> Result<HashMap<G::Node, usize>, SearchError> {
	search(graph, source, None).map(|(_, distances)| distances)
}
