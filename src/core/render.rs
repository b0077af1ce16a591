use crate::core::error::EmptyInputError;

/// Glyph marking a trajectory point in the plot.
pub const PROJECTILE_MARKER: char = '∙';
/// Glyph for the horizontal axis line.
pub const X_AXIS_TICK: char = 'T';
/// Glyph for the vertical axis line.
pub const Y_AXIS_TICK: char = '⊣';

/// Renders a sampled trajectory as a coordinate table and an ASCII plot.
#[derive(Debug)]
pub struct Renderer {
    points: Vec<(f64, f64)>,
}

impl Renderer {
    /// Takes ownership of the sample points, kept in input order.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Formats the points as a table: integer x right-aligned in 3 columns,
    /// y with two decimals right-aligned in 7, one row per point.
    pub fn coordinate_table(&self) -> String {
        let mut table = String::from("\n  x      y\n");
        for &(x, y) in &self.points {
            table.push_str(&format!("{x:>3}{y:>7.2}\n"));
        }
        table
    }

    /// Draws the path on a character grid: one column per integer x, one row
    /// per integer y, origin at the bottom left. Points round to the nearest
    /// cell; a point below the reference plane has no cell and is left out.
    pub fn trajectory_plot(&self) -> Result<String, EmptyInputError> {
        if self.points.is_empty() {
            return Err(EmptyInputError);
        }

        let rounded: Vec<(i64, i64)> = self
            .points
            .iter()
            .map(|&(x, y)| (x.round() as i64, y.round() as i64))
            .collect();
        let x_max = rounded.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let y_max = rounded.iter().map(|&(_, y)| y).max().unwrap_or(0);

        // A lone point at the origin still gets a 1x1 grid.
        let columns = (x_max.max(0) + 1) as usize;
        let rows = (y_max.max(0) + 1) as usize;
        let mut grid = vec![vec![' '; columns]; rows];

        for &(x, y) in &rounded {
            if x < 0 || y < 0 {
                continue;
            }
            // Row 0 holds the highest y, so the grid prints bottom-up.
            grid[(y_max - y) as usize][x as usize] = PROJECTILE_MARKER;
        }

        let mut plot = String::from("\n");
        for row in &grid {
            plot.push(Y_AXIS_TICK);
            plot.extend(row.iter());
            plot.push('\n');
        }
        plot.push(' ');
        for _ in 0..columns {
            plot.push(X_AXIS_TICK);
        }
        plot.push('\n');

        Ok(plot)
    }
}
