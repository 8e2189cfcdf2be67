/// Data layer: core types, report parsing, and filtering.
///
/// Architecture:
/// ```text
///  NLIST.lis / PRNSOL.lis
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  match report lines → NodeSet, attach displacements
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  NodeSet  │  Vec<Node>, composite sort, column projection
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  pitch-axis predicate / station representatives → indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
