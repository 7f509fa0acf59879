use facility_qubo::{
    build_objective, Assignment, BiasComputer, ComputeStrategy, Coordinate, Grid, GridModel, ModelError,
    Objective, PlacementSummary, ReferenceBiasComputer, WeightParameters,
};

fn c(col: u32, row: u32) -> Coordinate { Coordinate::new(col, row) }

/// 4x4 city: one POI at the origin, one existing facility in the opposite corner.
fn small_city() -> GridModel {
    let grid = Grid::new(4, 4).unwrap();
    GridModel::with_open_cells(grid, vec![c(0, 0)], vec![c(3, 3)]).unwrap()
}

/// Lowest-energy assignment by enumeration. Ties keep the first one found.
fn exhaustive_minimum(objective: &Objective) -> (f64, Assignment) {
    let sites: Vec<Coordinate> = objective.variables().collect();
    let mut best: Option<(f64, Assignment)> = None;
    for mask in 0u32..(1 << sites.len()) {
        let chosen = sites.iter().enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &site)| site);
        let assignment = Assignment::from_selected(sites.iter().copied(), chosen);
        let energy = objective.energy(&assignment);
        if best.as_ref().is_none_or(|(e, _)| energy < *e) { best = Some((energy, assignment)) }
    }
    best.unwrap()
}

#[test]
fn sub_objectives_on_small_city() {
    let model = small_city();
    assert_eq!(model.num_candidates(), 15);

    let parts = ReferenceBiasComputer.compute(&model, 2, &WeightParameters::default()).unwrap();
    let index = |site| model.candidate_index(site).unwrap();

    // The POI cell itself has the smallest POI bias.
    assert_eq!(parts.poi[index(c(0, 0))], 0.0);
    assert!(parts.poi.iter().all(|&b| b >= 0.0));

    // Farther from the existing facility means more negative.
    assert_eq!(parts.existing[index(c(3, 0))], -3.0);
    assert_eq!(parts.existing[index(c(0, 0))], -6.0);
    assert_eq!(parts.existing[index(c(3, 2))], -1.0);

    // Far-apart pairs are strongly negative, neighbors weakly.
    let pair = |a, b| {
        let (u, v) = (index(a), index(b));
        parts.pairwise.iter().find(|p| (p.u, p.v) == (u.min(v), u.max(v))).unwrap().bias
    };
    assert_eq!(pair(c(0, 0), c(3, 2)), -5.0);
    assert_eq!(pair(c(0, 0), c(0, 1)), -1.0);

    // Exactly-two penalty: -3 per variable, +2 per pair.
    assert_eq!(parts.cardinality.linear, -3.0);
    assert_eq!(parts.cardinality.quadratic, 2.0);
}

#[test]
fn assembled_objective_on_small_city() {
    let model = small_city();
    let objective = build_objective(&model, 2, &WeightParameters::default(), ComputeStrategy::Checked).unwrap();

    assert_eq!(objective.num_variables(), 15);
    assert_eq!(objective.num_interactions(), 105);
    assert_eq!(objective.offset(), 0.0);
    assert!(objective.linear_bias(c(3, 3)).is_none());

    // poi + existing + cardinality
    assert_eq!(objective.linear_bias(c(0, 0)), Some(0.0 - 6.0 - 3.0));
    assert_eq!(objective.linear_bias(c(3, 0)), Some(3.0 - 3.0 - 3.0));
    // pairwise + cardinality
    assert_eq!(objective.quadratic_bias(c(3, 2), c(0, 0)), Some(-5.0 + 2.0));
}

#[test]
fn strong_cardinality_selects_two_sites_near_the_poi() {
    let model = small_city();
    // With unit weights the penalty is too weak and every site gets selected.
    let weights = WeightParameters { cardinality: 100.0, ..Default::default() };
    let objective = build_objective(&model, 2, &weights, ComputeStrategy::Vectorized).unwrap();

    let (_, best) = exhaustive_minimum(&objective);
    assert_eq!(best.count_selected(), 2);
    assert!(best.is_selected(c(0, 0)));

    let summary = PlacementSummary::new(&model, &best.selected());
    assert_eq!(summary.sites[0].site, c(0, 0));
    assert_eq!(summary.sites[0].mean_poi_distance, 0.0);
    assert_eq!(summary.sites[0].mean_existing_distance, 6.0);
}

#[test]
fn construction_is_bit_identical() {
    let model = small_city();
    let weights = WeightParameters::candidate_scaled(model.num_candidates());
    let first = build_objective(&model, 2, &weights, ComputeStrategy::Reference).unwrap();
    let second = build_objective(&model, 2, &weights, ComputeStrategy::Reference).unwrap();

    let bits = |o: &Objective| -> Vec<u64> {
        o.linear().values().chain(o.quadratic().values()).map(|b| b.to_bits()).collect()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first, second);
}

#[test]
fn candidate_order_does_not_matter() {
    let grid = Grid::new(4, 4).unwrap();
    let mut cells: Vec<Coordinate> = grid.cells().filter(|&cell| cell != c(3, 3)).collect();
    let forward = GridModel::new(grid, vec![c(0, 0)], vec![c(3, 3)], cells.clone()).unwrap();
    cells.reverse();
    let backward = GridModel::new(grid, vec![c(0, 0)], vec![c(3, 3)], cells).unwrap();

    let weights = WeightParameters::default();
    assert_eq!(
        build_objective(&forward, 2, &weights, ComputeStrategy::Reference).unwrap(),
        build_objective(&backward, 2, &weights, ComputeStrategy::Reference).unwrap(),
    );
}

#[test]
fn five_stations_over_three_sites_is_rejected() {
    let grid = Grid::new(2, 2).unwrap();
    let model = GridModel::with_open_cells(grid, vec![c(0, 0)], vec![c(1, 1)]).unwrap();
    assert_eq!(model.num_candidates(), 3);

    let err = build_objective(&model, 5, &WeightParameters::default(), ComputeStrategy::Reference).unwrap_err();
    assert!(matches!(err, ModelError::InvalidConfiguration(_)));
}

#[test]
fn far_corners_of_widest_grid() {
    let far = u32::MAX - 1;
    let grid = Grid::new(u32::MAX, u32::MAX).unwrap();
    let model = GridModel::new(grid, vec![c(0, 0)], vec![], vec![c(far, far), c(0, far)]).unwrap();
    let objective = build_objective(&model, 1, &WeightParameters::default(), ComputeStrategy::Checked).unwrap();

    // poi distance 2 * far, then w(1 - 2N) = -1
    assert_eq!(objective.linear_bias(c(far, far)), Some(2.0 * far as f64 - 1.0));
    assert_eq!(objective.quadratic_bias(c(0, far), c(far, far)), Some(-(far as f64) + 2.0));
}

#[test]
fn empty_grid_is_rejected() {
    let err: ModelError = Grid::new(0, 3).unwrap_err().into();
    assert!(matches!(err, ModelError::InvalidConfiguration(msg) if msg.contains("0x3")));
}
