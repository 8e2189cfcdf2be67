use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Node – one row of the node list report
// ---------------------------------------------------------------------------

/// A single FE node parsed from the node list report.
///
/// `node_num` equals the node's 1-based position in the report, which is also
/// the index the solution report uses to reference it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// ID number of this node.
    pub node_num: u32,
    /// Chordwise x-coordinate.
    pub x: f64,
    /// Flapwise y-coordinate.
    pub y: f64,
    /// Spanwise z-coordinate.
    pub z: f64,
    /// Nodal y-displacement, filled in from the solution report (if any).
    pub uy: Option<f64>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node #{}: ({:10.8}, {:10.8}, {:10.8})",
            self.node_num, self.x, self.y, self.z
        )
    }
}

// ---------------------------------------------------------------------------
// NodeSet – the complete parsed node list
// ---------------------------------------------------------------------------

/// Ordered collection of nodes from one node list report.
///
/// Duplicate node numbers from malformed input are not rejected; the set
/// guarantees nothing beyond what the source file does.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    /// All nodes, in report order until [`NodeSet::sort_spanwise`] is called.
    pub nodes: Vec<Node>,
}

impl NodeSet {
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        NodeSet { nodes }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sort by spanwise location, then by chordwise location.
    ///
    /// `Vec::sort_by` is stable, so nodes with equal (z, x) keys keep their
    /// report order.
    pub fn sort_spanwise(&mut self) {
        self.nodes
            .sort_by(|a, b| a.z.total_cmp(&b.z).then(a.x.total_cmp(&b.x)));
    }

    /// Project the set into column-aligned vectors for plotting.
    ///
    /// Nodes without a parsed displacement get `NaN` in the `uy` column.
    pub fn columns(&self) -> Table {
        let mut table = Table::default();
        for node in &self.nodes {
            table.node_num.push(node.node_num);
            table.x.push(node.x);
            table.y.push(node.y);
            table.z.push(node.z);
            table.uy.push(node.uy.unwrap_or(f64::NAN));
        }
        table
    }
}

impl fmt::Display for NodeSet {
    /// Preview of the first ten nodes, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes.iter().take(10) {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Table – row-oriented data flattened into columns
// ---------------------------------------------------------------------------

/// Column-aligned projection of a [`NodeSet`].
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub node_num: Vec<u32>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// `NaN` where no solution line matched the node.
    pub uy: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(node_num: u32, x: f64, z: f64) -> Node {
        Node {
            node_num,
            x,
            y: 0.0,
            z,
            uy: None,
        }
    }

    #[test]
    fn sort_orders_span_first_then_chord() {
        let mut set = NodeSet::from_nodes(vec![
            node(1, 5.0, 2.0),
            node(2, 9.0, 1.0),
            node(3, 1.0, 2.0),
        ]);
        set.sort_spanwise();

        let order: Vec<u32> = set.nodes.iter().map(|n| n.node_num).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn sort_keeps_report_order_on_equal_keys() {
        let mut set = NodeSet::from_nodes(vec![
            node(10, 0.5, 3.0),
            node(11, 0.5, 3.0),
            node(12, 0.5, 3.0),
        ]);
        set.sort_spanwise();

        let order: Vec<u32> = set.nodes.iter().map(|n| n.node_num).collect();
        assert_eq!(order, vec![10, 11, 12]);
    }

    #[test]
    fn columns_use_nan_for_missing_displacement() {
        let mut a = node(1, 0.0, 0.0);
        a.uy = Some(0.25);
        let b = node(2, 1.0, 2.0);
        let set = NodeSet::from_nodes(vec![a, b]);

        let table = set.columns();
        assert_eq!(table.node_num, vec![1, 2]);
        assert_eq!(table.z, vec![0.0, 2.0]);
        assert_eq!(table.uy[0], 0.25);
        assert!(table.uy[1].is_nan());
    }

    #[test]
    fn display_previews_at_most_ten_nodes() {
        let nodes: Vec<Node> = (1..=12).map(|i| node(i, 0.0, i as f64)).collect();
        let set = NodeSet::from_nodes(nodes);

        let preview = set.to_string();
        assert_eq!(preview.lines().count(), 10);
        assert!(preview.starts_with("Node #1:"));
    }
}
