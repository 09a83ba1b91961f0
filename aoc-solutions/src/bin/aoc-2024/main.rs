//! Prints part one and part two answers for every 2024 day, on the example
//! input and on the actual input when one is present.

mod config;
mod logging;
mod output;
mod runner;

use aoc_solutions::year_2024::{day_1, day_2, day_3, day_4, day_5, day_6, day_7};
use aoc_solver::Solver;
use config::Config;
use output::DayTable;
use runner::{Puzzle, Runner};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    logging::init();

    let started = Instant::now();
    let runner = Runner::new(Config::from_env());
    let mut tables = Vec::new();

    print_day::<day_1::Solver>(&runner, Puzzle::new(1, "Historian Hysteria"), &mut tables)?;
    print_day::<day_2::Solver>(&runner, Puzzle::new(2, "Red-Nosed Reports"), &mut tables)?;
    print_day::<day_3::Solver>(
        &runner,
        Puzzle::with_examples(
            3,
            "Mull It Over",
            &["example-input-part-1.txt", "example-input-part-2.txt"],
        ),
        &mut tables,
    )?;
    print_day::<day_4::Solver>(&runner, Puzzle::new(4, "Ceres Search"), &mut tables)?;
    print_day::<day_5::Solver>(&runner, Puzzle::new(5, "Print Queue"), &mut tables)?;
    print_day::<day_6::Solver>(&runner, Puzzle::new(6, "Guard Gallivant"), &mut tables)?;
    print_day::<day_7::Solver>(&runner, Puzzle::new(7, "Bridge Repair"), &mut tables)?;

    output::print_summary(&tables, started.elapsed());
    Ok(())
}

fn print_day<S: Solver>(
    runner: &Runner,
    puzzle: Puzzle,
    tables: &mut Vec<DayTable>,
) -> anyhow::Result<()> {
    let table = runner.run::<S>(&puzzle)?;
    println!("{table}\n");
    tables.push(table);
    Ok(())
}
