//! Day 5: Print Queue

use crate::utils::parse::{number, numbers, parse_lines, split_at_blank_line};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

/// `before` must be printed earlier than `after` when both are in an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub before: u32,
    pub after: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintQueueError {
    #[error("update {pages:?} did not settle after {moves} moves; the ordering rules contradict each other")]
    Unsettled { pages: Vec<u32>, moves: usize },
    #[error("update has no middle page")]
    EmptyUpdate,
}

/// Ordering rules indexed by the page that has to come later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingRules {
    predecessors: HashMap<u32, HashSet<u32>>,
}

impl OrderingRules {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut predecessors: HashMap<u32, HashSet<u32>> = HashMap::new();
        for Rule { before, after } in rules {
            predecessors.entry(after).or_default().insert(before);
        }
        Self { predecessors }
    }

    pub fn must_precede(&self, before: u32, after: u32) -> bool {
        self.predecessors
            .get(&after)
            .is_some_and(|befores| befores.contains(&before))
    }

    /// First page printed ahead of one of its predecessors, paired with the
    /// index of the right-most such predecessor.
    fn first_violation(&self, pages: &[u32]) -> Option<(usize, usize)> {
        pages.iter().enumerate().find_map(|(index, page)| {
            let befores = self.predecessors.get(page)?;
            pages[index + 1..]
                .iter()
                .rposition(|later| befores.contains(later))
                .map(|offset| (index, index + 1 + offset))
        })
    }

    /// No page appears after a page it must precede.
    pub fn is_consistent(&self, pages: &[u32]) -> bool {
        self.first_violation(pages).is_none()
    }

    /// Repeatedly move the first misplaced page to just after its right-most
    /// predecessor until every rule holds.
    ///
    /// Under a total order each page moves at most once, so more than `len²`
    /// moves means the rules are contradictory.
    pub fn reorder(&self, pages: &[u32]) -> Result<Vec<u32>, PrintQueueError> {
        let mut pages = pages.to_vec();
        let limit = pages.len() * pages.len();
        let mut moves = 0;

        while let Some((misplaced, anchor)) = self.first_violation(&pages) {
            if moves == limit {
                return Err(PrintQueueError::Unsettled { pages, moves });
            }
            let page = pages.remove(misplaced);
            pages.insert(anchor, page);
            moves += 1;
        }

        debug!(moves, ?pages, "reordered update");
        Ok(pages)
    }
}

/// Page at `len / 2`.
pub fn middle_page(pages: &[u32]) -> Result<u32, PrintQueueError> {
    pages
        .get(pages.len() / 2)
        .copied()
        .ok_or(PrintQueueError::EmptyUpdate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintQueue {
    pub rules: OrderingRules,
    pub updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = PrintQueue;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rules_block, updates_block) = split_at_blank_line(input)
            .ok_or_else(|| ParseError::MissingData("blank line between rules and updates".into()))?;

        let rules = parse_lines(rules_block, |line| {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("expected rule `before|after`, got {line:?}"))?;
            Ok(Rule {
                before: number(before)?,
                after: number(after)?,
            })
        })
        .map_err(|e| in_block("rules", e))?;

        let updates = parse_lines(updates_block, |line| {
            ensure!(!line.trim().is_empty(), "empty update");
            numbers::<u32>(line, ',')
        })
        .map_err(|e| in_block("updates", e))?;

        Ok(PrintQueue {
            rules: OrderingRules::new(rules),
            updates,
        })
    }
}

fn in_block(block: &str, err: ParseError) -> ParseError {
    match err {
        ParseError::InvalidFormat(msg) => ParseError::InvalidFormat(format!("{block} {msg}")),
        other => other,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for update in shared.updates.iter().filter(|u| shared.rules.is_consistent(u)) {
            total += u64::from(middle_page(update).map_err(SolveError::failed)?);
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for update in shared.updates.iter().filter(|u| !shared.rules.is_consistent(u)) {
            let fixed = shared.rules.reorder(update).map_err(SolveError::failed)?;
            total += u64::from(middle_page(&fixed).map_err(SolveError::failed)?);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    fn chain() -> OrderingRules {
        OrderingRules::new([Rule { before: 1, after: 2 }, Rule { before: 2, after: 3 }])
    }

    #[test]
    fn test_example() {
        let mut queue = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut queue, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut queue, 2).unwrap(), "123");
    }

    #[test]
    fn test_example_reorders() {
        let queue = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(queue.rules.reorder(&[75, 97, 47, 61, 53]).unwrap(), vec![97, 75, 47, 61, 53]);
        assert_eq!(queue.rules.reorder(&[61, 13, 29]).unwrap(), vec![61, 29, 13]);
        assert_eq!(queue.rules.reorder(&[97, 13, 75, 29, 47]).unwrap(), vec![97, 75, 47, 29, 13]);
    }

    #[test]
    fn test_chain_rules() {
        let rules = chain();
        assert!(!rules.is_consistent(&[3, 1, 2]));
        let fixed = rules.reorder(&[3, 1, 2]).unwrap();
        assert_eq!(fixed, vec![1, 2, 3]);
        assert_eq!(middle_page(&fixed), Ok(2));
    }

    #[test]
    fn test_rules_for_absent_pages_ignored() {
        let rules = chain();
        assert!(rules.is_consistent(&[3, 1]));
        assert!(rules.is_consistent(&[7, 5]));
        assert!(rules.must_precede(1, 2));
        assert!(!rules.must_precede(2, 1));
    }

    #[test]
    fn test_contradictory_rules_fail() {
        let rules = OrderingRules::new([Rule { before: 1, after: 2 }, Rule { before: 2, after: 1 }]);
        assert!(matches!(
            rules.reorder(&[1, 2]),
            Err(PrintQueueError::Unsettled { moves: 4, .. })
        ));
    }

    #[test]
    fn test_middle_of_empty_update() {
        assert_eq!(middle_page(&[]), Err(PrintQueueError::EmptyUpdate));
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(Solver::parse("1|2\n3,4"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_crlf_input_matches_lf() {
        let crlf = EXAMPLE.replace('\n', "\r\n");
        assert_eq!(Solver::parse(&crlf).unwrap(), Solver::parse(EXAMPLE).unwrap());
    }

    #[test]
    fn test_bad_rule_reports_block_and_line() {
        let err = Solver::parse("1|2\n3-4\n\n1,2").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFormat("rules (line 2) expected rule `before|after`, got \"3-4\"".into())
        );
    }

    fn total_order_rules(order: &[u32]) -> OrderingRules {
        let mut rules = Vec::new();
        for (i, &before) in order.iter().enumerate() {
            for &after in &order[i + 1..] {
                rules.push(Rule { before, after });
            }
        }
        OrderingRules::new(rules)
    }

    proptest! {
        #[test]
        fn prop_reorder_settles_on_total_order(
            order in Just((1..=12u32).collect::<Vec<_>>()).prop_shuffle(),
            update in prop::sample::subsequence((1..=12u32).collect::<Vec<_>>(), 1..=12).prop_shuffle(),
        ) {
            let rules = total_order_rules(&order);
            let fixed = rules.reorder(&update).unwrap();

            prop_assert!(rules.is_consistent(&fixed));
            let mut expected = update.clone();
            expected.sort_by_key(|page| order.iter().position(|p| p == page));
            prop_assert_eq!(&fixed, &expected);
        }

        #[test]
        fn prop_reorder_is_idempotent(
            order in Just((1..=12u32).collect::<Vec<_>>()).prop_shuffle(),
            update in prop::sample::subsequence((1..=12u32).collect::<Vec<_>>(), 1..=12).prop_shuffle(),
        ) {
            let rules = total_order_rules(&order);
            let once = rules.reorder(&update).unwrap();
            let twice = rules.reorder(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
