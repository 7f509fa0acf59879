use std::fmt;

use serde::Serialize;
use sitegrid::{manhattan, Coordinate, GridModel};

/// Distances for one selected site.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteSummary {
    pub site: Coordinate,
    /// Mean distance to the points of interest (0 when there are none).
    pub mean_poi_distance: f64,
    /// Mean distance to the existing facilities (0 when there are none).
    pub mean_existing_distance: f64,
}

/// How a chosen set of new sites relates to the scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacementSummary {
    pub sites: Vec<SiteSummary>,
    /// Distance between every pair of selected sites, as `(a, b, distance)`.
    pub pairwise: Vec<(Coordinate, Coordinate, u64)>,
}

fn mean_distance(site: Coordinate, targets: &[Coordinate]) -> f64 {
    if targets.is_empty() { return 0.0 }
    let total: u64 = targets.iter().map(|&t| manhattan(site, t)).sum();
    total as f64 / targets.len() as f64
}

impl PlacementSummary {
    pub fn new(model: &GridModel, selected: &[Coordinate]) -> Self {
        let sites = selected.iter()
            .map(|&site| SiteSummary {
                site,
                mean_poi_distance: mean_distance(site, model.pois()),
                mean_existing_distance: mean_distance(site, model.existing()),
            })
            .collect();

        let pairwise = selected.iter().enumerate()
            .flat_map(|(i, &a)| selected[i + 1..].iter().map(move |&b| (a, b, manhattan(a, b))))
            .collect();

        Self { sites, pairwise }
    }

    /// Smallest distance between any two selected sites.
    pub fn min_separation(&self) -> Option<u64> {
        self.pairwise.iter().map(|&(_, _, d)| d).min()
    }
}

impl fmt::Display for PlacementSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sites: Vec<String> = self.sites.iter().map(|s| s.site.to_string()).collect();
        writeln!(f, "New facility locations:\t\t{}", sites.join(", "))?;
        for s in &self.sites {
            writeln!(f, "  {}: mean distance to POIs {:.3}, to existing {:.3}",
                s.site, s.mean_poi_distance, s.mean_existing_distance)?;
        }
        for (a, b, d) in &self.pairwise {
            writeln!(f, "  distance {a} <-> {b}: {d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitegrid::Grid;

    fn c(col: u32, row: u32) -> Coordinate { Coordinate::new(col, row) }

    #[test]
    fn summarizes_selected_sites() {
        let grid = Grid::new(4, 4).unwrap();
        let model = GridModel::with_open_cells(grid, vec![c(0, 0), c(2, 0)], vec![c(3, 3)]).unwrap();
        let summary = PlacementSummary::new(&model, &[c(0, 0), c(3, 0)]);

        assert_eq!(summary.sites[0].mean_poi_distance, 1.0);
        assert_eq!(summary.sites[0].mean_existing_distance, 6.0);
        assert_eq!(summary.sites[1].mean_poi_distance, 2.0);
        assert_eq!(summary.sites[1].mean_existing_distance, 3.0);
        assert_eq!(summary.pairwise, vec![(c(0, 0), c(3, 0), 3)]);
        assert_eq!(summary.min_separation(), Some(3));
    }

    #[test]
    fn empty_reference_sets_report_zero() {
        let grid = Grid::new(2, 2).unwrap();
        let model = GridModel::with_open_cells(grid, vec![], vec![]).unwrap();
        let summary = PlacementSummary::new(&model, &[c(1, 1)]);
        assert_eq!(summary.sites[0].mean_poi_distance, 0.0);
        assert_eq!(summary.sites[0].mean_existing_distance, 0.0);
        assert!(summary.pairwise.is_empty());
        assert_eq!(summary.min_separation(), None);
    }

    #[test]
    fn display_lists_every_site() {
        let grid = Grid::new(3, 3).unwrap();
        let model = GridModel::with_open_cells(grid, vec![c(1, 1)], vec![]).unwrap();
        let text = PlacementSummary::new(&model, &[c(0, 0), c(2, 2)]).to_string();
        assert!(text.contains("(0, 0), (2, 2)"));
        assert!(text.contains("distance (0, 0) <-> (2, 2): 4"));
    }
}
