// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
mod search;
util::mod_days![15, 23];

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let mut args = std::env::args();
	let program = args.next().unwrap_or_else(|| "advent21".to_owned());
	let (Some(day), Some(path), None) = (args.next(), args.next(), args.next()) else {
		println!("{program} DAY INPUTFILE");
		std::process::exit(1)
	};

	let input = std::fs::read_to_string(&path)
		.map_err(|e| format!("Could not read {path}: {e}"))?;
	let parts = run_day(&day, &input)
		.ok_or_else(|| format!("No solver for day {day}"))?;

	for answer in parts {
		match answer? {
			Some(answer) => println!("{answer}"),
			None => println!("no path"),
		}
	}

	Ok(())
}
