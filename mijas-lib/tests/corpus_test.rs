// Corpus tests: resolve known stems in both directions and compare against
// the expected stem lists in data/mijas.tsv.
//
// Every analysis row is also checked against synthesis (the round-trip law):
// each variant must verify against the stem it came from.

use mijas_lib::{forward, inverse, verify, verify_report};

const CORPUS: &str = include_str!("data/mijas.tsv");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

#[derive(Debug)]
struct Row<'a> {
    line: usize,
    direction: Direction,
    rule: u16,
    stem: &'a str,
    third: &'a str,
    superlative: bool,
    proper_name: bool,
    expected: Vec<&'a str>,
}

fn parse_corpus() -> Vec<Row<'static>> {
    CORPUS
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty() && !l.starts_with('#'))
        .map(|(i, l)| {
            let cols: Vec<&str> = l.split('\t').collect();
            assert_eq!(cols.len(), 6, "line {}: expected 6 columns: {l:?}", i + 1);
            let direction = match cols[0] {
                "F" => Direction::Forward,
                "I" => Direction::Inverse,
                other => panic!("line {}: bad direction {other:?}", i + 1),
            };
            let stem = cols[2];
            Row {
                line: i + 1,
                direction,
                rule: cols[1].parse().expect("rule should be numeric"),
                stem,
                third: if cols[3] == "-" { stem } else { cols[3] },
                superlative: cols[4].contains('s'),
                proper_name: cols[4].contains('p'),
                expected: cols[5].split(',').filter(|s| !s.is_empty()).collect(),
            }
        })
        .collect()
}

fn resolve(row: &Row) -> Vec<String> {
    let variants = match row.direction {
        Direction::Forward => forward(row.stem, row.rule, row.proper_name),
        Direction::Inverse => inverse(
            row.stem,
            row.rule,
            row.third,
            row.superlative,
            row.proper_name,
        ),
    };
    variants.into_iter().map(|v| v.stem).collect()
}

fn assert_no_failures(failures: &[String]) {
    assert!(
        failures.is_empty(),
        "{} failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn corpus_is_well_formed() {
    let rows = parse_corpus();
    assert!(rows.len() > 50, "corpus should not be truncated");
    assert!(rows.iter().any(|r| r.direction == Direction::Inverse));
}

#[test]
fn corpus_forward() {
    let rows = parse_corpus();
    let mut failures = Vec::new();
    for row in rows.iter().filter(|r| r.direction == Direction::Forward) {
        let got = resolve(row);
        if got != row.expected {
            failures.push(format!(
                "line {}: F {} {:?}: expected {:?}, got {:?}",
                row.line, row.rule, row.stem, row.expected, got
            ));
        }
    }
    assert_no_failures(&failures);
}

#[test]
fn corpus_inverse() {
    let rows = parse_corpus();
    let mut failures = Vec::new();
    for row in rows.iter().filter(|r| r.direction == Direction::Inverse) {
        let got = resolve(row);
        if got != row.expected {
            failures.push(format!(
                "line {}: I {} {:?}: expected {:?}, got {:?}",
                row.line, row.rule, row.stem, row.expected, got
            ));
        }
    }
    assert_no_failures(&failures);
}

#[test]
fn corpus_round_trip() {
    let rows = parse_corpus();
    let mut failures = Vec::new();
    for row in rows.iter().filter(|r| r.direction == Direction::Forward) {
        for v in forward(row.stem, row.rule, row.proper_name) {
            if !verify(&v, row.stem, row.rule, row.third, row.proper_name) {
                let outcome = verify_report(&v, row.stem, row.rule, row.third, row.proper_name);
                failures.push(format!(
                    "line {}: {} -> {} under {}: {outcome:?}",
                    row.line, row.stem, v.stem, row.rule
                ));
            }
        }
    }
    assert_no_failures(&failures);
}
