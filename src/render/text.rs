//! Plain-text renderer for terminal summaries.
//!
//! Grouped bars become one block per group with proportional bars;
//! heatmap cells are collected and laid out as a shaded grid in `finish`.

use super::{Axis, Domain, Renderer};
use crate::parser::schema::{GridCell, GroupKey, NestedGroup};
use crate::utils::config::OTHER_LABEL;
use colored::Colorize;
use std::collections::HashMap;

const BAR_WIDTH: u64 = 40;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Collects renderer calls into a printable string
#[derive(Debug, Default)]
pub struct TextRenderer {
    title: String,
    lines: Vec<String>,
    columns: Vec<GroupKey>,
    rows: Vec<GroupKey>,
    max: u64,
    cells: HashMap<(GroupKey, GroupKey), u64>,
}

impl TextRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Render everything drawn so far
    pub fn finish(self) -> String {
        let mut out = Vec::new();
        let rule = "━".repeat(72);

        out.push(format!("  {}", self.title.bold()));
        out.push(format!("  {}", rule));
        out.extend(self.lines.iter().cloned());
        if !self.cells.is_empty() {
            out.extend(self.grid_lines());
        }
        out.push(format!("  {}", rule));

        out.join("\n")
    }

    fn bar(&self, count: u64) -> String {
        let len = if self.max == 0 {
            0
        } else {
            (count * BAR_WIDTH / self.max) as usize
        };
        "█".repeat(len)
    }

    fn shade(&self, count: u64) -> char {
        if self.max == 0 || count == 0 {
            return SHADES[0];
        }
        let step = (count * (SHADES.len() as u64 - 1)).div_ceil(self.max) as usize;
        SHADES[step.min(SHADES.len() - 1)]
    }

    fn grid_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let header: String = self
            .columns
            .iter()
            .map(|c| format!("{:>6}", c.to_string()))
            .collect();
        lines.push(format!("  {:<24} {}", "", header));

        for row in &self.rows {
            let shades: String = self
                .columns
                .iter()
                .map(|col| {
                    let count = self
                        .cells
                        .get(&(row.clone(), col.clone()))
                        .copied()
                        .unwrap_or(0);
                    format!("{:>6}", self.shade(count).to_string().repeat(4))
                })
                .collect();
            lines.push(format!("  {:<24} {}", truncate(&row.to_string(), 24), shades));
        }

        lines.push(format!("  scale: 0 .. {}", self.max));
        lines
    }
}

impl Renderer for TextRenderer {
    fn draw_axis(&mut self, axis: Axis, domain: &Domain) {
        match (axis, domain) {
            (Axis::X, Domain::Band(keys)) => self.columns = keys.clone(),
            (Axis::Y, Domain::Band(keys)) => self.rows = keys.clone(),
            (_, Domain::Linear { max }) => self.max = *max,
            (Axis::Color, Domain::Band(_)) => {}
        }
    }

    fn draw_group(&mut self, group: &NestedGroup) {
        self.lines.push(format!("  {}", group.key.to_string().bold()));
        for member in &group.members {
            let label = format!("{:<20}", truncate(&member.key.to_string(), 20));
            let label = if member.key.as_text() == Some(OTHER_LABEL) {
                label.dimmed().to_string()
            } else {
                label
            };
            self.lines.push(format!(
                "    {} {:>6} {}",
                label,
                member.count,
                self.bar(member.count)
            ));
        }
    }

    fn draw_cell(&mut self, cell: &GridCell) {
        self.cells
            .insert((cell.outer.clone(), cell.inner.clone()), cell.count);
    }

    fn draw_legend(&mut self, keys: &[GroupKey]) {
        let names: Vec<String> = keys.iter().map(ToString::to_string).collect();
        self.lines.push(format!("  legend: {}", names.join(", ")));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::AggregatedCount;
    use crate::render::{render_grouped_bars, render_heatmap};

    #[test]
    fn test_grouped_bars_text() {
        let groups = vec![NestedGroup::new(
            1,
            vec![AggregatedCount::new("John", 4), AggregatedCount::new("Other", 2)],
        )];
        let legend = vec![GroupKey::from("John"), GroupKey::from("Other")];

        let mut renderer = TextRenderer::new("Lines per act");
        render_grouped_bars(&mut renderer, &groups, &legend);
        let out = renderer.finish();

        assert!(out.contains("Lines per act"));
        assert!(out.contains("John"));
        assert!(out.contains(&"█".repeat(40)));
        assert!(out.contains("legend: John, Other"));
    }

    #[test]
    fn test_heatmap_text() {
        let cells = vec![GridCell::new("Verdun", 2010, 4), GridCell::new("Verdun", 2011, 0)];
        let columns = vec![GroupKey::from(2010), GroupKey::from(2011)];
        let rows = vec![GroupKey::from("Verdun")];

        let mut renderer = TextRenderer::new("Plantations");
        render_heatmap(&mut renderer, &cells, &columns, &rows);
        let out = renderer.finish();

        assert!(out.contains("2010"));
        assert!(out.contains("Verdun"));
        assert!(out.contains("████"));
        assert!(out.contains("scale: 0 .. 4"));
    }

    #[test]
    fn test_shade_bounds() {
        let renderer = TextRenderer {
            max: 8,
            ..TextRenderer::default()
        };
        assert_eq!(renderer.shade(0), ' ');
        assert_eq!(renderer.shade(1), '░');
        assert_eq!(renderer.shade(8), '█');
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long neighborhood name", 10), "a very ...");
    }
}
