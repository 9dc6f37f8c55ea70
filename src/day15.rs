// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::search::{self, Graph, SearchError};


struct RiskMap {
	risks: Vec<u8>,
	stride: usize,
}

impl RiskMap {
	fn size(&self) -> [usize; 2] {
		[self.stride, self.risks.len() / self.stride]
	}

	fn risk(&self, [x, y]: [usize; 2]) -> u8 {
		self.risks[y * self.stride + x]
	}
}

/// Risk level of a position in the tile at offset `[tile_dx, tile_dy]` from
/// the top-left one, wrapped back around to `1..=9` past 9.
fn tiled_risk(base: u8, [tile_dx, tile_dy]: [usize; 2]) -> u8 {
	let risk = base as usize + tile_dx + tile_dy;
	if risk >= 10 { ((risk - 1) % 9 + 1) as u8 } else { risk as u8 }
}


/// The risk map repeated `tiles` times in both directions.
struct Cave<'m> {
	map: &'m RiskMap,
	tiles: usize,
}

impl Cave<'_> {
	fn size(&self) -> [usize; 2] {
		let [dx, dy] = self.map.size();
		[dx * self.tiles, dy * self.tiles]
	}

	fn risk(&self, [x, y]: [usize; 2]) -> u8 {
		let [dx, dy] = self.map.size();
		tiled_risk(self.map.risk([x % dx, y % dy]), [x / dx, y / dy])
	}
}

impl Graph for Cave<'_> {
	type Node = [usize; 2];

	fn contains(&self, &[x, y]: &[usize; 2]) -> bool {
		let [dx, dy] = self.size();
		x < dx && y < dy
	}

	fn neighbors(&self, &[x, y]: &[usize; 2]) -> impl Iterator<Item = ([usize; 2], usize)> {
		let [dx, dy] = self.size();
		[
			(y > 0).then(|| [x, y - 1]),
			(x > 0).then(|| [x - 1, y]),
			(x + 1 < dx).then(|| [x + 1, y]),
			(y + 1 < dy).then(|| [x, y + 1]),
		].into_iter().flatten().map(move |pos| (pos, self.risk(pos) as usize))
	}
}


fn input_risk_map_from_str(s: &str) -> Result<RiskMap, parsing::RiskMapError> {
	s.parse()
}


fn part1and2_impl<const TILES: usize>(input_risk_map: &RiskMap) -> Result<Option<usize>, SearchError> {
	let cave = Cave { map: input_risk_map, tiles: TILES };
	let [dx, dy] = cave.size();
	search::shortest_path(&cave, [0, 0], &[dx - 1, dy - 1])
}

pub(crate) fn part1(input: &str) -> crate::util::Answer {
	Ok(part1and2_impl::<1>(&input_risk_map_from_str(input)?)?)
}

pub(crate) fn part2(input: &str) -> crate::util::Answer {
	Ok(part1and2_impl::<5>(&input_risk_map_from_str(input)?)?)
}


mod parsing {
	use std::str::FromStr;
	use super::RiskMap;

	#[derive(Debug, PartialEq, Eq)]
	pub(super) enum RiskMapError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl std::fmt::Display for RiskMapError {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			match self {
				RiskMapError::Empty => f.write_str("Empty risk map"),
				RiskMapError::LineLen { line, len, found } =>
					write!(f, "Line {line} has length {found} (expected {len})"),
				RiskMapError::InvalidByte { line, column, found } =>
					write!(f, "Invalid byte {:?} at {line}:{column}", *found as char),
			}
		}
	}

	impl std::error::Error for RiskMapError {}

	impl FromStr for RiskMap {
		type Err = RiskMapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut risks = vec![];
			let mut stride = None;

			for (l, line) in s.lines().enumerate() {
				match stride {
					None => stride = Some(line.len()),
					Some(len) if line.len() != len => return Err(
						RiskMapError::LineLen { line: l + 1, len, found: line.len() }),
					_ => (),
				}

				for (c, b) in line.bytes().enumerate() {
					match b {
						b'0'..=b'9' => risks.push(b - b'0'),
						found => return Err(
							RiskMapError::InvalidByte { line: l + 1, column: c + 1, found }),
					}
				}
			}

			match stride {
				None | Some(0) => Err(RiskMapError::Empty),
				Some(stride) => Ok(RiskMap { risks, stride }),
			}
		}
	}
}


#[cfg(test)]
mod tests {
	use super::{*, parsing::RiskMapError};
	use test_case::test_case;

	const INPUT: &str = indoc::indoc! { "
		1163751742
		1381373672
		2136511328
		3694931569
		7463417111
		1319128137
		1359912421
		3125421639
		1293138521
		2311944581
	" };

	#[test]
	fn tests() {
		assert_eq!(part1and2_impl::<1>(&input_risk_map_from_str(INPUT).unwrap()), Ok(Some(40)));
		assert_eq!(part1and2_impl::<5>(&input_risk_map_from_str(INPUT).unwrap()), Ok(Some(315)));
		assert_eq!(part1(INPUT).unwrap(), Some(40));
		assert_eq!(part2(INPUT).unwrap(), Some(315));
	}

	#[test_case(8, [1, 1] => 1; "wraps")]
	#[test_case(9, [0, 0] => 9; "origin tile")]
	#[test_case(9, [1, 0] => 1; "just past nine")]
	#[test_case(1, [4, 4] => 9; "far corner")]
	#[test_case(5, [4, 4] => 4; "far corner wraps")]
	#[test_case(0, [0, 1] => 1; "zero risk")]
	fn tiling(base: u8, tile: [usize; 2]) -> u8 {
		tiled_risk(base, tile)
	}

	#[test]
	fn tiled_cave() {
		let map = input_risk_map_from_str("8").unwrap();
		let cave = Cave { map: &map, tiles: 5 };
		assert_eq!(cave.size(), [5, 5]);
		let row = (0..5).map(|x| cave.risk([x, 0])).collect::<Vec<_>>();
		assert_eq!(row, [8, 9, 1, 2, 3]);
		let diagonal = (0..5).map(|i| cave.risk([i, i])).collect::<Vec<_>>();
		assert_eq!(diagonal, [8, 1, 3, 5, 7]);

		// Tiles start over at the base map's size
		let map = input_risk_map_from_str(INPUT).unwrap();
		let cave = Cave { map: &map, tiles: 5 };
		assert_eq!(cave.size(), [50, 50]);
		assert_eq!(cave.risk([10, 0]), 2);
		assert_eq!(cave.risk([49, 49]), 9);
	}

	#[test]
	fn neighbors() {
		let map = input_risk_map_from_str("123\n456\n789").unwrap();
		let cave = Cave { map: &map, tiles: 1 };
		let neighbors = |pos: [usize; 2]| cave.neighbors(&pos).collect::<Vec<_>>();
		assert_eq!(neighbors([0, 0]), [([1, 0], 2), ([0, 1], 4)]);
		assert_eq!(neighbors([1, 1]), [([1, 0], 2), ([0, 1], 4), ([2, 1], 6), ([1, 2], 8)]);
		assert_eq!(neighbors([2, 2]), [([2, 1], 6), ([1, 2], 8)]);

		let cave = Cave { map: &map, tiles: 2 };
		assert_eq!(cave.neighbors(&[2, 2]).count(), 4);
		assert_eq!(cave.neighbors(&[5, 5]).count(), 2);
	}

	#[test_case("11\n11", [1, 1] => Ok(Some(2)); "two by two")]
	#[test_case("9119", [3, 0] => Ok(Some(11)); "source risk excluded")]
	#[test_case("9119", [0, 0] => Ok(Some(0)); "source is target")]
	#[test_case("9119", [4, 0] => Ok(None); "target out of bounds")]
	#[test_case("11\n11", [0, 7] => Ok(None); "target far out of bounds")]
	fn scenarios(input: &str, target: [usize; 2]) -> Result<Option<usize>, SearchError> {
		let map = input_risk_map_from_str(input).unwrap();
		search::shortest_path(&Cave { map: &map, tiles: 1 }, [0, 0], &target)
	}

	#[test]
	fn source_out_of_bounds() {
		let map = input_risk_map_from_str("11\n11").unwrap();
		let cave = Cave { map: &map, tiles: 1 };
		assert_eq!(search::shortest_path(&cave, [2, 0], &[1, 1]), Err(SearchError::SourceOutOfBounds));
	}

	/// Least risk of any simple path, by exhaustive depth-first enumeration.
	fn brute_force(cave: &Cave, target: [usize; 2]) -> Option<usize> {
		fn walk(cave: &Cave, pos: [usize; 2], target: [usize; 2], risk: usize,
			visited: &mut Vec<[usize; 2]>) -> Option<usize> {
			if pos == target { return Some(risk) }
			let mut best = None::<usize>;
			for (next, weight) in cave.neighbors(&pos) {
				if visited.contains(&next) { continue }
				visited.push(next);
				if let Some(total) = walk(cave, next, target, risk + weight, visited) {
					best = Some(best.map_or(total, |best| best.min(total)));
				}
				visited.pop();
			}
			best
		}
		walk(cave, [0, 0], target, 0, &mut vec![[0, 0]])
	}

	#[test_case("19\n11"; "two by two")]
	#[test_case("191\n191\n111"; "detour")]
	#[test_case("1999\n1191\n9111"; "snake")]
	#[test_case("5312\n4967\n2228"; "mixed")]
	#[test_case("1919\n1111\n9191\n1111"; "comb")]
	#[test_case("0000\n0900\n0000"; "zeroes")]
	fn matches_brute_force(input: &str) {
		let map = input_risk_map_from_str(input).unwrap();
		let cave = Cave { map: &map, tiles: 1 };
		let [dx, dy] = cave.size();
		let target = [dx - 1, dy - 1];
		let expected = brute_force(&cave, target);
		assert!(expected.is_some());
		assert_eq!(search::shortest_path(&cave, [0, 0], &target), Ok(expected));
	}

	#[test]
	fn matches_full_distances() {
		let map = input_risk_map_from_str(INPUT).unwrap();
		for tiles in [1, 2] {
			let cave = Cave { map: &map, tiles };
			let distances = search::distances(&cave, [0, 0]).unwrap();
			assert_eq!(distances.len(), cave.size()[0] * cave.size()[1]);
			for target in [[9, 9], [3, 7], [0, 0], [cave.size()[0] - 1, 0]] {
				assert_eq!(search::shortest_path(&cave, [0, 0], &target),
					Ok(Some(distances[&target])));
			}
		}
	}

	#[test]
	fn idempotent() {
		let map = input_risk_map_from_str(INPUT).unwrap();
		let first = [part1and2_impl::<1>(&map), part1and2_impl::<5>(&map)];
		for _ in 0..3 {
			assert_eq!([part1and2_impl::<1>(&map), part1and2_impl::<5>(&map)], first);
		}
	}

	#[test_case("" => RiskMapError::Empty; "empty")]
	#[test_case("\n\n" => RiskMapError::Empty; "blank")]
	#[test_case("123\n45\n" => RiskMapError::LineLen { line: 2, len: 3, found: 2 }; "jagged")]
	#[test_case("123\n4x6\n" => RiskMapError::InvalidByte { line: 2, column: 2, found: b'x' }; "invalid byte")]
	fn parse_errors(input: &str) -> RiskMapError {
		match input_risk_map_from_str(input) {
			Ok(_) => panic!("parsed invalid risk map"),
			Err(e) => e,
		}
	}
}
