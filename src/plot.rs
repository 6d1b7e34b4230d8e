//! Plot data extraction.
//!
//! The heavy lifting for the X/Y line-and-marker plot happens here rather
//! than in the render path: given a table and two chosen columns, produce
//! the point list plus the axis labels and value ranges a plot widget
//! needs for scaling. Rendering itself is the presentation layer's job.

use serde::Serialize;

use crate::store::TableStore;
use crate::types::Column;

/// Chart-ready series pairing two table columns row-wise
#[derive(Clone, Debug, Serialize)]
pub struct PlotSeries {
    /// X-axis column label
    pub x_label: &'static str,
    /// Y-axis column label
    pub y_label: &'static str,
    /// (x, y) pairs in row order
    pub points: Vec<(f64, f64)>,
    /// (min, max) of the x values, (0, 0) for an empty table
    pub x_range: (f64, f64),
    /// (min, max) of the y values, (0, 0) for an empty table
    pub y_range: (f64, f64),
}

/// Extract the series for plotting column `x` against column `y`.
pub fn series(store: &TableStore, x: Column, y: Column) -> PlotSeries {
    let mut points = Vec::with_capacity(store.row_count());
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for row in 0..store.row_count() {
        let Some(xv) = store.cell(row, x.index()) else {
            continue;
        };
        let Some(yv) = store.cell(row, y.index()) else {
            continue;
        };
        x_min = x_min.min(xv);
        x_max = x_max.max(xv);
        y_min = y_min.min(yv);
        y_max = y_max.max(yv);
        points.push((xv, yv));
    }

    let (x_range, y_range) = if points.is_empty() {
        ((0.0, 0.0), (0.0, 0.0))
    } else {
        ((x_min, x_max), (y_min, y_max))
    };

    PlotSeries {
        x_label: x.label(),
        y_label: y.label(),
        points,
        x_range,
        y_range,
    }
}
