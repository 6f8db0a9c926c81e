use super::*;
use crate::graph::{GridGraph, VertexArena, UNIT_WEIGHT};

/// Hand-built graph for feeding the audit broken inputs.
struct ArenaGraph(VertexArena);

impl Graph for ArenaGraph {
  fn side(&self) -> u32 {
    self.0.side()
  }

  fn vertices(&self) -> &[Vertex] {
    self.0.vertices()
  }

  fn edge_count(&self) -> usize {
    self.0.edge_count()
  }
}

#[test]
fn test_grid_is_symmetric() {
  let grid = GridGraph::new(4);
  let report = audit_symmetry(&grid);
  assert!(report.is_symmetric());
  assert_eq!(report.checked, 288);
}

#[test]
fn test_missing_reverse_is_reported() {
  let mut arena = VertexArena::new(2).unwrap();
  arena.add_edge(0, 1, UNIT_WEIGHT);
  arena.add_edge(1, 0, UNIT_WEIGHT);
  arena.add_edge(2, 3, 4.0);
  let report = audit_symmetry(&ArenaGraph(arena));

  assert_eq!(report.checked, 3);
  assert_eq!(
    report.unmatched,
    vec![UnmatchedEdge {
      from: 2,
      to: 3,
      weight: 4.0,
      forward: 1,
      backward: 0,
    }]
  );
}

#[test]
fn test_weight_mismatch_is_reported_both_ways() {
  let mut arena = VertexArena::new(2).unwrap();
  arena.add_edge(0, 1, 1.0);
  arena.add_edge(1, 0, 4.0);
  let report = audit_symmetry(&ArenaGraph(arena));

  let pairs: Vec<_> = report.unmatched.iter().map(|u| (u.from, u.to)).collect();
  assert_eq!(pairs, vec![(0, 1), (1, 0)]);
}

#[test]
fn test_multiplicity_must_match() {
  let mut arena = VertexArena::new(2).unwrap();
  arena.add_edge(0, 1, 1.0);
  arena.add_edge(0, 1, 1.0);
  arena.add_edge(1, 0, 1.0);
  let report = audit_symmetry(&ArenaGraph(arena));

  assert_eq!(report.unmatched.len(), 2);
  assert_eq!(report.unmatched[0].forward, 2);
  assert_eq!(report.unmatched[0].backward, 1);
}

#[test]
fn test_empty_graph_is_symmetric() {
  let report = audit_symmetry(&GridGraph::new(0));
  assert!(report.is_symmetric());
  assert_eq!(report.checked, 0);
}
