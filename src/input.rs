use log::{debug, warn};
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// The enemy pairings of a single test case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Case {
    pub pairings: Vec<(String, String)>,
}

impl Case {
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for (name, enemy) in self.pairings.iter() {
            graph.add_pairing(name, enemy)?;
        }
        Ok(graph)
    }
}

/// Non-blank lines, with their (1-based) line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(|(i, l)| (i + 1, l.trim()))
            .find(|(_, l)| !l.is_empty())
    }
}

fn parse_count(line: usize, text: &str) -> Result<usize> {
    text.parse::<usize>().map_err(|_| Error::InvalidCount {
        line,
        text: text.to_string(),
    })
}

/**
 *  Parses the test-case format: the number of cases, and then for each case
 *  the number of pairings followed by one "name enemy" line per pairing.
 *
 *  Note: anything after the last declared case is ignored, with a warning.
 */
pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    let mut lines = Lines {
        inner: text.lines().enumerate(),
    };

    let (line, first) = lines.next().ok_or(Error::MissingCaseCount)?;
    let num_cases = parse_count(line, first)?;
    let mut cases = Vec::new();

    for case in 1..=num_cases {
        let (line, count) = lines.next().ok_or(Error::MissingCase { case })?;
        let expected = parse_count(line, count)?;
        let mut pairings = Vec::new();

        while pairings.len() < expected {
            let (line, text) = lines.next().ok_or(Error::MissingPairing {
                case,
                expected,
                found: pairings.len(),
            })?;
            let mut names = text.split_whitespace();
            match (names.next(), names.next(), names.next()) {
                (Some(a), Some(b), None) => {
                    pairings.push((a.to_string(), b.to_string()))
                }
                _ => {
                    return Err(Error::MalformedPairing {
                        line,
                        text: text.to_string(),
                    })
                }
            }
        }

        debug!("case {}: {} pairing(s)", case, pairings.len());
        cases.push(Case { pairings });
    }

    if let Some((line, _)) = lines.next() {
        warn!("ignoring input after the last case, from line {}", line);
    }

    Ok(cases)
}

/// Reads the test cases from the given file, or from stdin.
pub fn read_cases(path: Option<&Path>) -> Result<Vec<Case>> {
    let text = match path {
        Some(path) => {
            debug!("reading cases from: {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            debug!("reading cases from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    parse_cases(&text)
}
