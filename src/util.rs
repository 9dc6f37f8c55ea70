// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Both parts' answers: `None` if the puzzle has no solution.
pub(crate) type Answer = Result<Option<usize>, Box<dyn std::error::Error>>;

/// Declares a `dayNN` module per given day and a `run_day` function
/// dispatching to its `part1` & `part2` by the day's identifier.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	fn run_day(day: &str, input: &str) -> Option<[util::Answer; 2]> {
		match day.trim_start_matches('0') {
			$( d if d == stringify!($day).trim_start_matches('0') =>
				Some([[<day $day>]::part1(input), [<day $day>]::part2(input)]), )*
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;
