use super::*;
use crate::graph::audit_symmetry;
use crate::index::to_1d;

/// Count half-edges per weight, sorted by weight.
fn weight_histogram(graph: &HierarchicalGraph) -> Vec<(f64, usize)> {
  let mut hist: Vec<(f64, usize)> = Vec::new();
  for e in graph.vertices().iter().flat_map(|v| v.edges.iter()) {
    match hist.iter_mut().find(|(w, _)| *w == e.weight) {
      Some((_, n)) => *n += 1,
      None => hist.push((e.weight, 1)),
    }
  }
  hist.sort_by(|a, b| a.0.total_cmp(&b.0));
  hist
}

// =========================================================================
// Construction
// =========================================================================

/// L = 2^levels keeps the full L³ vertex store for every depth.
#[test]
fn test_size_invariant() {
  for levels in 1..=4u32 {
    let side = 1 << levels;
    let graph = HierarchicalGraph::new(side, levels).unwrap();
    assert_eq!(graph.nv(), (side * side * side) as usize, "levels {}", levels);
    for (i, v) in graph.vertices().iter().enumerate() {
      assert_eq!(v.id, i);
    }
  }
}

/// Two builds with the same inputs are identical, weights included.
#[test]
fn test_determinism() {
  let a = HierarchicalGraph::new(8, 3).unwrap();
  let b = HierarchicalGraph::new(8, 3).unwrap();
  assert_eq!(a, b);
  assert_eq!(a.vertices(), b.vertices());
  assert_eq!(a.edge_count(), b.edge_count());
}

/// One level is the plain grid, edge for edge.
#[test]
fn test_single_level_is_grid() {
  let hierarchical = HierarchicalGraph::new(4, 1).unwrap();
  let grid = GridGraph::new(4);
  assert_eq!(hierarchical.vertices(), grid.vertices());
  assert_eq!(hierarchical.edge_count(), 288);
}

/// 64 leaf grids of side 2, 8 level-1 cubes, 1 top cube.
#[test]
fn test_weight_law_side_eight() {
  let graph = HierarchicalGraph::new(8, 3).unwrap();
  assert_eq!(graph.leaf_side(), 2);
  assert_eq!(graph.levels(), 3);

  let hist = weight_histogram(&graph);
  assert_eq!(hist, vec![(1.0, 64 * 24), (4.0, 8 * 24), (16.0, 24)]);
  assert_eq!(graph.edge_count(), 1536 + 192 + 24);
}

/// Coarse weight is the square of the octant side at that level.
#[test]
fn test_weight_law_two_levels() {
  let graph = HierarchicalGraph::new(8, 2).unwrap();
  assert_eq!(graph.leaf_side(), 4);
  let hist = weight_histogram(&graph);
  assert_eq!(hist, vec![(1.0, 8 * 288), (16.0, 24)]);
}

#[test]
fn test_edge_count_matches_degrees() {
  let graph = HierarchicalGraph::new(16, 3).unwrap();
  let summed: usize = graph.vertices().iter().map(|v| v.degree()).sum();
  assert_eq!(summed, graph.edge_count());
  for v in graph.vertices() {
    assert!(v.neighbors().all(|n| n < graph.nv()));
  }
}

// =========================================================================
// Centre placement
// =========================================================================

/// The z component of a centre sits on the octant's lower face while x and
/// y sit at h/2. Pinned here so any change to the offset is deliberate.
#[test]
fn test_center_z_offset_is_not_halved() {
  assert_eq!(
    octant_center(UVec3::ZERO, 4, UVec3::ZERO),
    UVec3::new(2, 2, 0)
  );
  assert_eq!(
    octant_center(UVec3::new(8, 8, 8), 4, UVec3::ONE),
    UVec3::new(14, 14, 12)
  );
}

/// Top-level bonds of octant 0 in an 8-cube with 4-cube leaves.
#[test]
fn test_top_level_center_edges() {
  let graph = HierarchicalGraph::new(8, 2).unwrap();
  let center = to_1d(UVec3::new(2, 2, 0), 8).unwrap();
  let v = graph.vertex(center).unwrap();

  // Leaf grid bonds first: (2,2,0) is on the z = 0 face of its 4-cube.
  assert_eq!(v.degree(), 5 + 3);
  let coarse: Vec<_> = v.edges[5..].iter().map(|e| (e.neighbor, e.weight)).collect();
  assert_eq!(
    coarse,
    vec![
      (to_1d(UVec3::new(6, 2, 0), 8).unwrap(), 16.0),
      (to_1d(UVec3::new(2, 6, 0), 8).unwrap(), 16.0),
      (to_1d(UVec3::new(2, 2, 4), 8).unwrap(), 16.0),
    ]
  );
}

/// Centre bonds pair up across every level and size combination.
#[test]
fn test_symmetry_audit_passes() {
  for (side, levels) in [(2, 1), (4, 2), (8, 2), (8, 3), (16, 2), (16, 4), (24, 3)] {
    let graph = HierarchicalGraph::new(side, levels).unwrap();
    let report = audit_symmetry(&graph);
    assert!(
      report.is_symmetric(),
      "side {} levels {}: {:?}",
      side,
      levels,
      report.unmatched
    );
  }
}

// =========================================================================
// Rejection
// =========================================================================

#[test]
fn test_rejects_side_not_divisible() {
  assert_eq!(
    HierarchicalGraph::new(6, 3),
    Err(GraphError::SideNotDivisible {
      side: 6,
      levels: 3,
      divisor: 8
    })
  );
  // Halving once works, but the full recursion would not tile.
  assert!(HierarchicalGraph::new(4, 3).is_err());
  assert!(HierarchicalGraph::new(12, 3).is_err());
  assert!(HierarchicalGraph::new(0, 1).is_err());
  assert!(HierarchicalGraph::new(3, 1).is_err());
}

#[test]
fn test_rejects_invalid_levels() {
  assert_eq!(
    HierarchicalGraph::new(8, 0),
    Err(GraphError::InvalidLevels {
      levels: 0,
      max: HierarchicalGraph::MAX_LEVELS
    })
  );
  assert!(matches!(
    HierarchicalGraph::new(8, 40),
    Err(GraphError::InvalidLevels { levels: 40, .. })
  ));
}

#[test]
fn test_rejects_oversized_side() {
  // Divisible by 2^levels, but side³ overflows the id space.
  let side = 1 << 22;
  assert_eq!(
    HierarchicalGraph::new(side, 1),
    Err(GraphError::SideTooLarge { side })
  );
  assert_eq!(
    HierarchicalGraph::new(side, 3),
    Err(GraphError::SideTooLarge { side })
  );
}
