//! Inline-SVG charts for the fixture datasets.
//!
//! Geometry lives in pure helpers (`scale`, the pie arc math) so it can be
//! tested without a DOM; the components only place the shapes.

mod bar;
mod line;
mod pie;
mod scale;

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;

/// Chart palette shared across slices and series.
pub const PALETTE: [&str; 4] = ["#3b82f6", "#8b5cf6", "#10b981", "#f59e0b"];
