use proptest::prelude::*;
use submission_charts::api::OverviewLayout;
use submission_charts::core::{OverviewDatum, PlotArea};
use submission_charts::interaction::LayoutMode;

fn plot() -> PlotArea {
    PlotArea {
        left: 100.0,
        top: 10.0,
        width: 850.0,
        height: 390.0,
    }
}

fn records(counts: &[(u64, u64, u64)]) -> Vec<OverviewDatum> {
    counts
        .iter()
        .enumerate()
        .map(|(index, &(submissions, snapshots, launches))| {
            OverviewDatum::new(format!("entity-{index}"), submissions, snapshots, launches)
        })
        .collect()
}

proptest! {
    #[test]
    fn layouts_preserve_entity_area(
        counts in prop::collection::vec((0u64..500, 0u64..500, 0u64..500), 1..24)
    ) {
        let data = records(&counts);
        let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");
        let stacked = layout.geometry(&data, LayoutMode::Stacked).expect("stacked");
        let grouped = layout.geometry(&data, LayoutMode::Grouped).expect("grouped");

        for (before, after) in stacked.iter().zip(&grouped) {
            let tolerance = 1e-9 * before.area().max(1.0);
            prop_assert!((before.area() - after.area()).abs() <= tolerance);
        }
    }

    #[test]
    fn bars_stay_inside_the_plot_body(
        counts in prop::collection::vec((0u64..500, 0u64..500, 0u64..500), 1..24),
        grouped in any::<bool>()
    ) {
        let data = records(&counts);
        let mode = if grouped { LayoutMode::Grouped } else { LayoutMode::Stacked };
        let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");

        for entity in layout.geometry(&data, mode).expect("geometry") {
            for bar in entity.bars {
                prop_assert!(bar.height >= 0.0);
                prop_assert!(bar.y >= -1e-9);
                prop_assert!(bar.y + bar.height <= 390.0 + 1e-9);
                prop_assert!(bar.x >= 0.0 && bar.x + bar.width <= 850.0 + 1e-9);
            }
        }
    }

    #[test]
    fn labels_sit_two_pixels_above_their_bar(
        counts in prop::collection::vec((0u64..500, 0u64..500, 0u64..500), 1..24),
        grouped in any::<bool>()
    ) {
        let data = records(&counts);
        let mode = if grouped { LayoutMode::Grouped } else { LayoutMode::Stacked };
        let layout = OverviewLayout::new(&data, plot(), 5.0, 2.0).expect("layout");

        for entity in layout.geometry(&data, mode).expect("geometry") {
            for (bar, label) in entity.bars.iter().zip(&entity.labels) {
                prop_assert!((label.y - (bar.y - 2.0)).abs() <= 1e-9);
                prop_assert!((label.x - bar.center_x()).abs() <= 1e-9);
            }
        }
    }
}
