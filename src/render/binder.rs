//! Scale/axis binding from aggregates to renderer calls.

use super::{Axis, Domain, Renderer};
use crate::aggregator::metrics::{cell_distribution, group_distribution};
use crate::parser::schema::{GridCell, GroupKey, NestedGroup};
use log::debug;

/// Drive a grouped bar chart
///
/// X is a band over the outer keys in group order, Y is linear
/// `[0, max member count]`. `legend` is usually the kept keys plus
/// "Other".
pub fn render_grouped_bars<R: Renderer>(
    renderer: &mut R,
    groups: &[NestedGroup],
    legend: &[GroupKey],
) {
    let x = Domain::Band(groups.iter().map(|g| g.key.clone()).collect());
    let y = Domain::Linear {
        max: group_distribution(groups).max_count,
    };

    debug!("Rendering {} bar groups", groups.len());

    renderer.draw_axis(Axis::X, &x);
    renderer.draw_axis(Axis::Y, &y);
    for group in groups {
        renderer.draw_group(group);
    }
    renderer.draw_legend(legend);
}

/// Drive a heatmap
///
/// `columns` is the inner (year) domain, `rows` the outer domain. The
/// colour domain is `[0, max cell count]`.
pub fn render_heatmap<R: Renderer>(
    renderer: &mut R,
    cells: &[GridCell],
    columns: &[GroupKey],
    rows: &[GroupKey],
) {
    debug!(
        "Rendering {} heatmap cells ({} columns x {} rows)",
        cells.len(),
        columns.len(),
        rows.len()
    );

    renderer.draw_axis(Axis::X, &Domain::Band(columns.to_vec()));
    renderer.draw_axis(Axis::Y, &Domain::Band(rows.to_vec()));
    renderer.draw_axis(
        Axis::Color,
        &Domain::Linear {
            max: cell_distribution(cells).max_count,
        },
    );
    for cell in cells {
        renderer.draw_cell(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::AggregatedCount;

    /// Records every call as a short string
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn draw_axis(&mut self, axis: Axis, domain: &Domain) {
            let desc = match domain {
                Domain::Band(keys) => format!("band({})", keys.len()),
                Domain::Linear { max } => format!("linear(0..{})", max),
            };
            self.calls.push(format!("axis {:?} {}", axis, desc));
        }

        fn draw_group(&mut self, group: &NestedGroup) {
            self.calls.push(format!("group {}", group.key));
        }

        fn draw_cell(&mut self, cell: &GridCell) {
            self.calls.push(format!("cell {} {} {}", cell.outer, cell.inner, cell.count));
        }

        fn draw_legend(&mut self, keys: &[GroupKey]) {
            self.calls.push(format!("legend {}", keys.len()));
        }
    }

    #[test]
    fn test_grouped_bars_call_order() {
        let groups = vec![
            NestedGroup::new(1, vec![AggregatedCount::new("John", 2), AggregatedCount::new("Other", 1)]),
            NestedGroup::new(2, vec![AggregatedCount::new("John", 0), AggregatedCount::new("Other", 5)]),
        ];
        let legend = vec![GroupKey::from("John"), GroupKey::from("Other")];

        let mut recorder = Recorder::default();
        render_grouped_bars(&mut recorder, &groups, &legend);

        assert_eq!(
            recorder.calls,
            vec![
                "axis X band(2)",
                "axis Y linear(0..5)",
                "group 1",
                "group 2",
                "legend 2",
            ]
        );
    }

    #[test]
    fn test_heatmap_call_order() {
        let cells = vec![GridCell::new("A", 2010, 3), GridCell::new("A", 2011, 0)];
        let columns = vec![GroupKey::from(2010), GroupKey::from(2011)];
        let rows = vec![GroupKey::from("A")];

        let mut recorder = Recorder::default();
        render_heatmap(&mut recorder, &cells, &columns, &rows);

        assert_eq!(
            recorder.calls,
            vec![
                "axis X band(2)",
                "axis Y band(1)",
                "axis Color linear(0..3)",
                "cell A 2010 3",
                "cell A 2011 0",
            ]
        );
    }
}
