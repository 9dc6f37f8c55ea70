// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::search::{self, Graph, SearchError};


#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
enum Amphipod { Amber, Bronze, Copper, Desert }

impl Amphipod {
	const ALL: [Amphipod; 4] = [Amphipod::Amber, Amphipod::Bronze, Amphipod::Copper, Amphipod::Desert];

	fn energy(self) -> usize {
		10usize.pow(self as u32)
	}

	fn room(self) -> usize {
		self as usize
	}
}

const HALLWAY_LEN: usize = 11;

/// Hallway positions right outside each room; never stopped on.
const ENTRANCES: [usize; 4] = [2, 4, 6, 8];


#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
struct Arrangement<const DEPTH: usize> {
	hallway: [Option<Amphipod>; HALLWAY_LEN],
	/// Room spaces, from top to bottom.
	rooms: [[Option<Amphipod>; DEPTH]; 4],
}

impl<const DEPTH: usize> Arrangement<DEPTH> {
	fn organized() -> Self {
		Arrangement {
			hallway: [None; HALLWAY_LEN],
			rooms: Amphipod::ALL.map(|amphipod| [Some(amphipod); DEPTH]),
		}
	}

	/// Returns whether `room` holds no amphipods other than those it's for.
	fn is_room_clean(&self, room: usize) -> bool {
		self.rooms[room].iter().flatten().all(|amphipod| amphipod.room() == room)
	}

	/// Returns whether the hallway is clear after `from` up to and including `to`.
	fn is_hallway_clear(&self, from: usize, to: usize) -> bool {
		let range = if from < to { from + 1..=to } else { to..=from - 1 };
		self.hallway[range].iter().all(Option::is_none)
	}

	/// Arrangements after any single move, paired with the energy it takes.
	fn moves(&self) -> Vec<(Self, usize)> {
		let mut moves = vec![];

		// From the hallway, straight into the amphipod's own room
		for (x, amphipod) in self.hallway.iter().enumerate() {
			let Some(amphipod) = *amphipod else { continue };
			let room = amphipod.room();
			if !self.is_room_clean(room) || !self.is_hallway_clear(x, ENTRANCES[room]) { continue }
			let Some(depth) = self.rooms[room].iter().rposition(Option::is_none) else { continue };

			let mut next = *self;
			next.hallway[x] = None;
			next.rooms[room][depth] = Some(amphipod);
			moves.push((next, (x.abs_diff(ENTRANCES[room]) + depth + 1) * amphipod.energy()));
		}

		// From the top of a room that still needs emptying, into the hallway
		for room in 0..ENTRANCES.len() {
			if self.is_room_clean(room) { continue }
			let Some((depth, amphipod)) = self.rooms[room].iter()
				.enumerate()
				.find_map(|(depth, amphipod)| amphipod.map(|amphipod| (depth, amphipod)))
				else { continue };

			for x in (0..HALLWAY_LEN).filter(|x| !ENTRANCES.contains(x)) {
				if !self.is_hallway_clear(ENTRANCES[room], x) { continue }

				let mut next = *self;
				next.rooms[room][depth] = None;
				next.hallway[x] = Some(amphipod);
				moves.push((next, (depth + 1 + x.abs_diff(ENTRANCES[room])) * amphipod.energy()));
			}
		}

		moves
	}
}

impl Arrangement<2> {
	/// Inserts the two rows folded away in the diagram.
	fn unfolded(&self) -> Arrangement<4> {
		use Amphipod::*;
		const FOLDED: [[Amphipod; 2]; 4] = [
			[Desert, Desert],
			[Copper, Bronze],
			[Bronze, Amber],
			[Amber, Copper],
		];
		Arrangement {
			hallway: self.hallway,
			rooms: std::array::from_fn(|room| {
				let ([top, bottom], [upper, lower]) = (self.rooms[room], FOLDED[room]);
				[top, Some(upper), Some(lower), bottom]
			}),
		}
	}
}


/// The burrow's hallway and its rooms `DEPTH` deep, with as nodes the
/// arrangements of amphipods in it.
struct Burrow<const DEPTH: usize>;

impl<const DEPTH: usize> Graph for Burrow<DEPTH> {
	type Node = Arrangement<DEPTH>;

	fn contains(&self, arrangement: &Arrangement<DEPTH>) -> bool {
		use itertools::Itertools as _;
		let counts = arrangement.hallway.iter()
			.chain(arrangement.rooms.iter().flatten())
			.flatten()
			.counts();
		Amphipod::ALL.iter().all(|amphipod| counts.get(amphipod).copied().unwrap_or(0) == DEPTH)
			&& ENTRANCES.iter().all(|&x| arrangement.hallway[x].is_none())
	}

	fn neighbors(&self, arrangement: &Arrangement<DEPTH>)
	-> impl Iterator<Item = (Arrangement<DEPTH>, usize)> {
		arrangement.moves().into_iter()
	}

	/// Energy to move each amphipod that isn't settled yet into the top of
	/// its room, as if nothing were in the way.
	fn heuristic(&self, arrangement: &Arrangement<DEPTH>, _: &Arrangement<DEPTH>) -> usize {
		let hallway = arrangement.hallway.iter()
			.enumerate()
			.filter_map(|(x, amphipod)| amphipod.map(|amphipod|
				(x.abs_diff(ENTRANCES[amphipod.room()]) + 1) * amphipod.energy()));

		let rooms = arrangement.rooms.iter().enumerate().flat_map(|(room, spaces)| spaces.iter()
			.enumerate()
			.filter_map(move |(depth, amphipod)| {
				let amphipod = (*amphipod)?;
				if amphipod.room() != room {
					let dx = ENTRANCES[room].abs_diff(ENTRANCES[amphipod.room()]);
					return Some((depth + 1 + dx + 1) * amphipod.energy())
				}
				if spaces[depth + 1..].iter().flatten().all(|below| below.room() == room) {
					return None
				}
				// Out, aside, back & in again
				Some((depth + 4) * amphipod.energy())
			}));

		hallway.chain(rooms).sum()
	}
}


fn input_arrangement_from_str<const DEPTH: usize>(s: &str)
-> Result<Arrangement<DEPTH>, parsing::BurrowError> {
	s.parse()
}


fn part1and2_impl<const DEPTH: usize>(input_arrangement: Arrangement<DEPTH>)
-> Result<Option<usize>, SearchError> {
	#[cfg(LOGGING)]
	println!("{input_arrangement}");
	search::shortest_path(&Burrow::<DEPTH>, input_arrangement, &Arrangement::organized())
}

pub(crate) fn part1(input: &str) -> crate::util::Answer {
	Ok(part1and2_impl(input_arrangement_from_str::<2>(input)?)?)
}

pub(crate) fn part2(input: &str) -> crate::util::Answer {
	Ok(part1and2_impl(input_arrangement_from_str::<2>(input)?.unfolded())?)
}


mod parsing {
	use std::str::FromStr;
	use super::{Amphipod, Arrangement, ENTRANCES, HALLWAY_LEN};

	#[derive(Debug, PartialEq, Eq)]
	pub(super) enum BurrowError {
		Format { line: usize },
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		Depth { expected: usize, found: usize },
		EndOfString,
	}

	impl std::fmt::Display for BurrowError {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			use BurrowError as E;
			match self {
				E::Format { line } => write!(f, "Unexpected line {line}"),
				E::LineLen { line, len, found } =>
					write!(f, "Line {line} has length {found} (expected {len})"),
				E::InvalidByte { line, column, found } =>
					write!(f, "Invalid byte {:?} at {line}:{column}", *found as char),
				E::Depth { expected, found } =>
					write!(f, "Rooms are {found} deep (expected {expected})"),
				E::EndOfString => f.write_str("Unexpected end of burrow"),
			}
		}
	}

	impl std::error::Error for BurrowError {}

	const WALL: &str = "#############";
	const BOTTOM: &str = "#########";

	/// A space (`.`) or an amphipod (`A` through `D`).
	fn try_space_from_byte(b: u8) -> Option<Option<Amphipod>> {
		match b {
			b'.' => Some(None),
			b'A'..=b'D' => Some(Some(Amphipod::ALL[(b - b'A') as usize])),
			_ => None,
		}
	}

	impl<const DEPTH: usize> FromStr for Arrangement<DEPTH> {
		type Err = BurrowError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use BurrowError as E;

			let mut lines = s.lines().enumerate().map(|(l, line)| (l + 1, line));
			let mut arrangement = Arrangement { hallway: [None; HALLWAY_LEN], rooms: [[None; DEPTH]; 4] };

			let (l, line) = lines.next().ok_or(E::EndOfString)?;
			if line != WALL { return Err(E::Format { line: l }) }

			let (l, line) = lines.next().ok_or(E::EndOfString)?;
			if line.len() != WALL.len() {
				return Err(E::LineLen { line: l, len: WALL.len(), found: line.len() })
			}
			for (c, b) in line.bytes().enumerate() {
				let space = match c {
					0 | 12 if b == b'#' => continue,
					1..=11 => try_space_from_byte(b),
					_ => None,
				};
				let space = space.ok_or(E::InvalidByte { line: l, column: c + 1, found: b })?;
				arrangement.hallway[c - 1] = space;
			}

			for depth in 0..DEPTH {
				let (l, line) = lines.next().ok_or(E::EndOfString)?;
				if line.trim() == BOTTOM { return Err(E::Depth { expected: DEPTH, found: depth }) }
				if line.len() < WALL.len() - 2 {
					return Err(E::LineLen { line: l, len: WALL.len() - 2, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					let room = ENTRANCES.iter().position(|&x| x + 1 == c);
					match (room, b) {
						(Some(room), b) => arrangement.rooms[room][depth] = try_space_from_byte(b)
							.ok_or(E::InvalidByte { line: l, column: c + 1, found: b })?,
						(None, b'#') => (),
						(None, b' ') if depth > 0 => (),
						(None, found) => return Err(E::InvalidByte { line: l, column: c + 1, found }),
					}
				}
			}

			let (l, line) = lines.next().ok_or(E::EndOfString)?;
			if line.trim() != BOTTOM {
				if line.bytes().any(|b| b.is_ascii_uppercase()) {
					return Err(E::Depth { expected: DEPTH, found: DEPTH + 1 })
				}
				return Err(E::Format { line: l })
			}

			if let Some((l, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
				return Err(E::Format { line: l })
			}

			Ok(arrangement)
		}
	}
}


#[cfg(LOGGING)]
impl<const DEPTH: usize> std::fmt::Display for Arrangement<DEPTH> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		fn space(amphipod: &Option<Amphipod>) -> char {
			amphipod.map_or('.', |amphipod| (b'A' + amphipod as u8) as char)
		}
		writeln!(f, "#############")?;
		f.write_char('#')?;
		for amphipod in &self.hallway { f.write_char(space(amphipod))? }
		writeln!(f, "#")?;
		for depth in 0..DEPTH {
			f.write_str(if depth == 0 { "###" } else { "  #" })?;
			for room in &self.rooms { write!(f, "{}#", space(&room[depth]))? }
			writeln!(f, "{}", if depth == 0 { "##" } else { "" })?;
		}
		write!(f, "  #########")
	}
}
