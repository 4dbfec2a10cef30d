//! Chart rendering boundary.
//!
//! Drawing itself is done by whatever implements `Renderer`; this module
//! only computes axis domains from aggregates and drives the renderer in a
//! fixed order (axes, marks, legend). `TextRenderer` prints a terminal
//! summary and is the only renderer shipped here.

pub mod binder;
pub mod text;

use crate::parser::schema::{GridCell, GroupKey, NestedGroup};

pub use binder::{render_grouped_bars, render_heatmap};
pub use text::TextRenderer;

/// Which axis or scale a domain belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,

    /// Colour scale of heatmap cells
    Color,
}

/// Domain of an axis or colour scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    /// Discrete positions, in display order
    Band(Vec<GroupKey>),

    /// Continuous `[0, max]`
    Linear { max: u64 },
}

/// Narrow drawing interface fed by the binders
pub trait Renderer {
    fn draw_axis(&mut self, axis: Axis, domain: &Domain);

    /// One group of bars (one act)
    fn draw_group(&mut self, group: &NestedGroup);

    /// One heatmap cell
    fn draw_cell(&mut self, cell: &GridCell);

    fn draw_legend(&mut self, keys: &[GroupKey]);
}
