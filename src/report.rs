use log::{info, warn};
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::graph::{Factions, Outcome};
use crate::input::Case;

/// How the verdicts are written out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One "Case #k: Yes/No" line per case
    #[default]
    Text,
    /// Every verdict, with its factions or conflict, as YAML
    Yaml,
}

/// The result of solving one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub case: usize,
    pub solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factions: Option<Factions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<(String, String)>,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let answer = if self.solvable { "Yes" } else { "No" };
        write!(f, "Case #{}: {}", self.case, answer)
    }
}

impl Verdict {
    /// Builds and solves the graph for the (1-based) numbered case.
    pub fn from_case(case: usize, input: &Case) -> Result<Self> {
        let mut graph = input.build_graph()?;
        let verdict = match graph.colour_components() {
            Outcome::Solved { components } => {
                info!(
                    "case {}: {} node(s) in {} component(s), solvable",
                    case,
                    graph.node_count(),
                    components
                );
                Self {
                    case,
                    solvable: true,
                    factions: graph.factions(),
                    conflict: None,
                }
            }
            Outcome::Conflict(c) => {
                info!(
                    "case {}: '{}' and '{}' cannot be kept apart",
                    case, c.name, c.enemy
                );
                Self {
                    case,
                    solvable: false,
                    factions: None,
                    conflict: Some((c.name, c.enemy)),
                }
            }
        };
        Ok(verdict)
    }
}

/// Solves every case, in order.
pub fn solve_cases(cases: &[Case]) -> Result<Vec<Verdict>> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| Verdict::from_case(i + 1, case))
        .collect()
}

fn render_text(verdicts: &[Verdict], verbose: bool) -> String {
    let mut result = Vec::new();
    for verdict in verdicts {
        result.push(format!("{}", verdict));
        if !verbose {
            continue;
        }
        if let Some(factions) = &verdict.factions {
            result.push(format!("    red:   {}", factions.red.join(" ")));
            result.push(format!("    black: {}", factions.black.join(" ")));
        } else if let Some((name, enemy)) = &verdict.conflict {
            result.push(format!("    conflict: {} vs {}", name, enemy));
        } else {
            warn!("case {}: no details to show", verdict.case);
        }
    }
    result.join("\n")
}

/// Renders the verdicts, and (for text) the factions when verbose.
pub fn render(
    verdicts: &[Verdict],
    format: Format,
    verbose: bool,
) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(verdicts, verbose)),
        Format::Yaml => Ok(serde_yaml::to_string(verdicts)?),
    }
}
