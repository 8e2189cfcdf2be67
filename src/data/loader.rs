use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Node, NodeSet};

/// Fixed file name of the node list report (`NLIST` command output).
pub const NODE_LIST_FILE: &str = "NLIST.lis";
/// Fixed file name of the nodal solution report (`PRNSOL` command output).
pub const SOLUTION_FILE: &str = "PRNSOL.lis";

// ---------------------------------------------------------------------------
// Line grammars
// ---------------------------------------------------------------------------
//
// Node line:     leading whitespace, node number, then exactly six numeric
//                fields (x, y, z, thxy, thyz, thzx), end of line.
// Solution line: leading whitespace, node number, one numeric field (uy).
//
// Numeric fields may be decimal or scientific notation, with optional sign
// and optional exponent sign. Anything else on the line disqualifies it:
// headers, footers and blank lines are skipped without comment.

/// Parse one whitespace-separated token as a numeric field.
///
/// Stricter than `f64::from_str`: tokens like `nan` or `inf` never occur in
/// report data and are rejected here so that header words cannot slip
/// through as numbers.
fn numeric_field(token: &str) -> Option<f64> {
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    token.parse().ok()
}

/// Parse one token as a node number (digits only).
fn node_number(token: &str) -> Option<u32> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Match one line against the node-line grammar.
fn parse_node_line(line: &str) -> Option<Node> {
    if !line.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let node_num = node_number(tokens.next()?)?;

    let fields: Vec<f64> = tokens.map(numeric_field).collect::<Option<_>>()?;
    if fields.len() != 6 {
        return None;
    }

    // Keep x, y, z; the trailing rotation angles are not used.
    Some(Node {
        node_num,
        x: fields[0],
        y: fields[1],
        z: fields[2],
        uy: None,
    })
}

/// Match one line against the solution-line grammar.
fn parse_solution_line(line: &str) -> Option<(u32, f64)> {
    if !line.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let node_num = node_number(tokens.next()?)?;
    let uy = numeric_field(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some((node_num, uy))
}

// ---------------------------------------------------------------------------
// Report parsing
// ---------------------------------------------------------------------------

/// Build a [`NodeSet`] from the full text of a node list report.
///
/// Every line matching the node-line grammar contributes one node; all other
/// lines are skipped. This is a best-effort policy, not validation.
pub fn parse_node_list(text: &str) -> NodeSet {
    NodeSet::from_nodes(text.lines().filter_map(parse_node_line).collect())
}

/// Counters from one pass over a solution report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionStats {
    /// Displacement lines applied to a node.
    pub applied: usize,
    /// Displacement lines whose node number had no matching record.
    pub out_of_range: usize,
}

/// Apply the displacements in a solution report to an existing set.
///
/// Assignment is positional: a line for node `n` targets the record at index
/// `n - 1`, mirroring how the solver numbers its output. A node number
/// outside the set's bounds is reported on the warning channel and skipped;
/// it never aborts the pass.
pub fn apply_displacements(set: &mut NodeSet, text: &str) -> SolutionStats {
    let mut stats = SolutionStats::default();
    let total = set.len();

    for line in text.lines() {
        let Some((node_num, uy)) = parse_solution_line(line) else {
            continue;
        };
        let index = (node_num as usize).checked_sub(1);
        match index.and_then(|i| set.nodes.get_mut(i)) {
            Some(node) => {
                node.uy = Some(uy);
                stats.applied += 1;
            }
            None => {
                log::warn!(
                    "node {node_num}: index {} is out of range ({total} nodes in set)",
                    node_num as i64 - 1
                );
                stats.out_of_range += 1;
            }
        }
    }
    stats
}

// ---------------------------------------------------------------------------
// Case loading
// ---------------------------------------------------------------------------

/// Load a result case from a directory holding the fixed-named report files.
///
/// `NLIST.lis` is required; an unreadable file is a hard error. `PRNSOL.lis`
/// is optional — without it every displacement stays unset.
pub fn load_case(dir: &Path) -> Result<(NodeSet, SolutionStats)> {
    let node_list_path = dir.join(NODE_LIST_FILE);
    let text = fs::read_to_string(&node_list_path)
        .with_context(|| format!("reading {}", node_list_path.display()))?;
    let mut set = parse_node_list(&text);
    log::info!("parsed {} nodes from {}", set.len(), node_list_path.display());

    let solution_path = dir.join(SOLUTION_FILE);
    let stats = if solution_path.is_file() {
        let solution = fs::read_to_string(&solution_path)
            .with_context(|| format!("reading {}", solution_path.display()))?;
        let stats = apply_displacements(&mut set, &solution);
        log::info!(
            "applied {} displacements from {} ({} out of range)",
            stats.applied,
            solution_path.display(),
            stats.out_of_range
        );
        stats
    } else {
        log::info!(
            "no {SOLUTION_FILE} in {}; displacements left unset",
            dir.display()
        );
        SolutionStats::default()
    };

    Ok((set, stats))
}

/// Write the node table to a CSV file (`node_num,x,y,z,uy`).
///
/// Nodes without a displacement get an empty `uy` cell.
pub fn export_csv(set: &NodeSet, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for node in &set.nodes {
        writer.serialize(node)?;
    }
    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE_LIST: &str = "\
 LIST ALL SELECTED NODES.   DSYS=      0

    NODE        X             Y             Z           THXY     THYZ     THZX
       1   0.0000000      0.0000000      0.0000000       0.00     0.00     0.00
       2   1.2000000     -0.0500000      0.0000000       0.00     0.00     0.00
       3   1.234E-02      0.0000000      8.5000000       0.00     0.00     0.00

 *** LOAD STEP=     1  SUBSTEP=     1
";

    #[test]
    fn parses_only_matching_lines() {
        let set = parse_node_list(NODE_LIST);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn keeps_coordinates_and_drops_rotation_angles() {
        let set = parse_node_list("  7   1.5   2.5   3.5   10.0   20.0   30.0\n");
        assert_eq!(set.len(), 1);
        let node = &set.nodes[0];
        assert_eq!(node.node_num, 7);
        assert_eq!((node.x, node.y, node.z), (1.5, 2.5, 3.5));
        assert_eq!(node.uy, None);
    }

    #[test]
    fn scientific_notation_matches_decimal_value() {
        let set = parse_node_list(NODE_LIST);
        assert_eq!(set.nodes[2].x, 0.01234);
    }

    #[test]
    fn header_line_yields_no_record() {
        let set = parse_node_list("    NODE        X             Y             Z\n");
        assert!(set.is_empty());
    }

    #[test]
    fn field_count_must_be_exact() {
        // too few fields
        assert!(parse_node_list("   1   1.0   2.0   3.0\n").is_empty());
        // too many fields
        assert!(parse_node_list("   1   1.0   2.0   3.0   0.0   0.0   0.0   0.0\n").is_empty());
    }

    #[test]
    fn node_line_requires_leading_whitespace() {
        assert!(parse_node_list("1   1.0   2.0   3.0   0.0   0.0   0.0\n").is_empty());
    }

    #[test]
    fn displacement_assignment_is_positional() {
        // Stored node numbers do not matter; the line for node 3 targets the
        // third record.
        let mut set = parse_node_list(
            "  101   0.0   0.0   0.0   0.0   0.0   0.0
  102   0.0   0.0   1.0   0.0   0.0   0.0
  103   0.0   0.0   2.0   0.0   0.0   0.0
",
        );
        let stats = apply_displacements(&mut set, "    3   0.00125\n");

        assert_eq!(stats, SolutionStats { applied: 1, out_of_range: 0 });
        assert_eq!(set.nodes[0].uy, None);
        assert_eq!(set.nodes[1].uy, None);
        assert_eq!(set.nodes[2].uy, Some(0.00125));
    }

    #[test]
    fn out_of_range_node_is_reported_and_skipped() {
        let mut set = parse_node_list(NODE_LIST);
        let stats = apply_displacements(
            &mut set,
            "    1   1.0E-03
  999   2.0E-03
    0   3.0E-03
    2   4.0E-03
",
        );

        assert_eq!(stats.applied, 2);
        assert_eq!(stats.out_of_range, 2);
        assert_eq!(set.nodes[0].uy, Some(1.0e-3));
        assert_eq!(set.nodes[1].uy, Some(4.0e-3));
    }

    #[test]
    fn solution_lines_with_extra_fields_are_skipped() {
        let mut set = parse_node_list(NODE_LIST);
        let stats = apply_displacements(&mut set, "    1   0.5   0.6\nUY header\n");
        assert_eq!(stats, SolutionStats::default());
    }

    #[test]
    fn load_case_requires_node_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_case(dir.path()).is_err());
    }

    #[test]
    fn load_case_without_solution_leaves_displacements_unset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(NODE_LIST_FILE), NODE_LIST).unwrap();

        let (set, stats) = load_case(dir.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(stats, SolutionStats::default());
        assert!(set.nodes.iter().all(|n| n.uy.is_none()));
    }

    #[test]
    fn load_case_applies_solution_when_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(NODE_LIST_FILE), NODE_LIST).unwrap();
        fs::write(dir.path().join(SOLUTION_FILE), "    2  -4.20000E-04\n").unwrap();

        let (set, stats) = load_case(dir.path()).unwrap();
        assert_eq!(stats.applied, 1);
        assert_eq!(set.nodes[1].uy, Some(-4.2e-4));
    }

    #[test]
    fn csv_export_leaves_missing_displacement_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = parse_node_list(NODE_LIST);
        apply_displacements(&mut set, "    1   0.5\n");

        let path = dir.path().join("nodes.csv");
        export_csv(&set, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("node_num,x,y,z,uy"));
        assert_eq!(lines.next(), Some("1,0.0,0.0,0.0,0.5"));
        let second = lines.next().unwrap();
        assert!(second.ends_with(','), "uy cell should be empty: {second}");
    }
}
