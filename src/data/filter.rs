use super::model::NodeSet;

// ---------------------------------------------------------------------------
// Pitch-axis filter
// ---------------------------------------------------------------------------

/// Return indices of nodes whose chordwise coordinate lies within `tol` of
/// `x_ref`.
///
/// With `x_ref = 0` this isolates the pitch-axis nodes of the blade.
pub fn pitch_axis_indices(set: &NodeSet, x_ref: f64, tol: f64) -> Vec<usize> {
    set.nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| (node.x - x_ref).abs() <= tol)
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Station representatives
// ---------------------------------------------------------------------------

/// Pick one representative node per distinct spanwise station.
///
/// Nodes sharing an exact z-coordinate form a station; the representative is
/// the node closest in chord to `x_ref`, with the earlier record winning an
/// exact tie. Indices come back in span order.
pub fn station_representatives(set: &NodeSet, x_ref: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..set.len()).collect();
    order.sort_by(|&a, &b| {
        set.nodes[a]
            .z
            .total_cmp(&set.nodes[b].z)
            .then(a.cmp(&b))
    });

    let mut representatives = Vec::new();
    let mut station: Option<(f64, usize)> = None;

    for index in order {
        let node = &set.nodes[index];
        match station {
            Some((z, best)) if z == node.z => {
                let best_dx = (set.nodes[best].x - x_ref).abs();
                let dx = (node.x - x_ref).abs();
                if dx < best_dx {
                    station = Some((z, index));
                }
            }
            Some((_, best)) => {
                representatives.push(best);
                station = Some((node.z, index));
            }
            None => station = Some((node.z, index)),
        }
    }
    if let Some((_, best)) = station {
        representatives.push(best);
    }
    representatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Node;

    fn set_from_xz(pairs: &[(f64, f64)]) -> NodeSet {
        NodeSet::from_nodes(
            pairs
                .iter()
                .enumerate()
                .map(|(i, &(x, z))| Node {
                    node_num: i as u32 + 1,
                    x,
                    y: 0.0,
                    z,
                    uy: None,
                })
                .collect(),
        )
    }

    #[test]
    fn tolerance_selects_nodes_near_reference() {
        let set = set_from_xz(&[(0.0, 0.0), (0.005, 1.0), (-0.02, 2.0), (1.0, 3.0)]);
        assert_eq!(pitch_axis_indices(&set, 0.0, 0.01), vec![0, 1]);
    }

    #[test]
    fn tolerance_is_inclusive_and_absolute() {
        let set = set_from_xz(&[(0.99, 0.0), (1.01, 1.0), (1.5, 2.0)]);
        assert_eq!(pitch_axis_indices(&set, 1.0, 0.01), vec![0, 1]);
    }

    #[test]
    fn one_representative_per_station() {
        let set = set_from_xz(&[
            (0.8, 0.0),
            (0.1, 0.0),
            (-0.3, 5.0),
            (0.2, 5.0),
            (0.4, 10.0),
        ]);
        assert_eq!(station_representatives(&set, 0.0), vec![1, 3, 4]);
    }

    #[test]
    fn exact_tie_goes_to_earlier_record() {
        let set = set_from_xz(&[(0.5, 2.0), (-0.5, 2.0)]);
        assert_eq!(station_representatives(&set, 0.0), vec![0]);
    }

    #[test]
    fn representatives_come_back_in_span_order() {
        let set = set_from_xz(&[(0.0, 9.0), (0.0, 1.0), (0.0, 4.0)]);
        assert_eq!(station_representatives(&set, 0.0), vec![1, 2, 0]);
    }
}
