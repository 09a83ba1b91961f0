//! Answer tables printed for each day

use aoc_solver::SolveResult;
use chrono::TimeDelta;
use std::fmt;

/// One answer in the table, or a gap when the input was not available
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Answer { answer: String, duration: TimeDelta },
    Skipped,
}

impl From<SolveResult> for Cell {
    fn from(result: SolveResult) -> Self {
        Cell::Answer {
            answer: result.answer,
            duration: result.duration,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Answer { answer, duration } => {
                write!(f, "{} ({})", answer, format_duration(*duration))
            }
            Cell::Skipped => f.write_str("-"),
        }
    }
}

/// Part-by-input table for a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTable {
    title: String,
    /// `[example, actual]` parse time; `None` for an input that was skipped
    parse: [Option<TimeDelta>; 2],
    /// `[example, actual]` for each part, part 1 first
    rows: Vec<[Cell; 2]>,
}

const HEADERS: [&str; 2] = ["Example", "Actual"];

impl DayTable {
    pub fn new(title: String, parse: [Option<TimeDelta>; 2], rows: Vec<[Cell; 2]>) -> Self {
        Self { title, parse, rows }
    }

    /// Total time spent parsing both inputs
    pub fn parse_time(&self) -> TimeDelta {
        self.parse.iter().flatten().copied().sum()
    }

    pub fn rows(&self) -> &[[Cell; 2]] {
        &self.rows
    }

    /// Total time spent in part solvers across both inputs
    pub fn solve_time(&self) -> TimeDelta {
        self.rows()
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                Cell::Answer { duration, .. } => Some(*duration),
                Cell::Skipped => None,
            })
            .sum()
    }

    pub fn skipped(&self) -> usize {
        self.rows()
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Skipped)
            .count()
    }
}

/// Print totals after every day's table
pub fn print_summary(tables: &[DayTable], elapsed: std::time::Duration) {
    let parse_time: TimeDelta = tables.iter().map(DayTable::parse_time).sum();
    let solve_time: TimeDelta = tables.iter().map(DayTable::solve_time).sum();
    let skipped: usize = tables.iter().map(DayTable::skipped).sum();

    println!();
    println!("--- Summary ---");
    println!("Days: {}, answers skipped: {}", tables.len(), skipped);
    println!("Total parse time: {}", format_duration(parse_time));
    println!("Total solve time: {}", format_duration(solve_time));
    println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
}

impl fmt::Display for DayTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parse = self
            .parse
            .map(|time| time.map_or_else(|| Cell::Skipped.to_string(), format_duration));
        let labels: Vec<String> = std::iter::once("Parse".to_string())
            .chain((1..=self.rows.len()).map(|part| format!("Part {part}")))
            .collect();
        let cells: Vec<[String; 2]> = std::iter::once(parse)
            .chain(
                self.rows
                    .iter()
                    .map(|[example, actual]| [example.to_string(), actual.to_string()]),
            )
            .collect();

        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{left}{}{mid}{}{mid}{}{right}",
                "─".repeat(label_width + 2),
                "─".repeat(widths[0] + 2),
                "─".repeat(widths[1] + 2),
            )
        };

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        writeln!(
            f,
            "│ {:label_width$} │ {:w0$} │ {:w1$} │",
            "",
            HEADERS[0],
            HEADERS[1],
            w0 = widths[0],
            w1 = widths[1]
        )?;
        writeln!(f, "{}", rule("├", "┼", "┤"))?;
        for (label, [example, actual]) in labels.iter().zip(&cells) {
            writeln!(
                f,
                "│ {label:label_width$} │ {example:w0$} │ {actual:w1$} │",
                w0 = widths[0],
                w1 = widths[1]
            )?;
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str, micros: i64) -> Cell {
        Cell::Answer {
            answer: text.to_string(),
            duration: TimeDelta::microseconds(micros),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(42)), "42µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-7)), "-7µs");
    }

    #[test]
    fn test_table_totals() {
        let table = DayTable::new(
            "Day 1: Historian Hysteria".into(),
            [Some(TimeDelta::microseconds(4)), Some(TimeDelta::microseconds(40))],
            vec![[answer("11", 10), Cell::Skipped], [answer("31", 5), answer("7", 20)]],
        );
        assert_eq!(table.parse_time(), TimeDelta::microseconds(44));
        assert_eq!(table.solve_time(), TimeDelta::microseconds(35));
        assert_eq!(table.skipped(), 1);
    }

    #[test]
    fn test_skipped_cell() {
        assert_eq!(Cell::Skipped.to_string(), "-");
    }

    #[test]
    fn test_table_layout() {
        let table = DayTable::new(
            "Day 6: Guard Gallivant".into(),
            [Some(TimeDelta::microseconds(3)), None],
            vec![
                [answer("41", 12), Cell::Skipped],
                [answer("6", 1_500), Cell::Skipped],
            ],
        );

        let expected = "\
Day 6: Guard Gallivant
┌────────┬────────────┬────────┐
│        │ Example    │ Actual │
├────────┼────────────┼────────┤
│ Parse  │ 3µs        │ -      │
│ Part 1 │ 41 (12µs)  │ -      │
│ Part 2 │ 6 (1.50ms) │ -      │
└────────┴────────────┴────────┘";
        assert_eq!(table.to_string(), expected);
    }
}
