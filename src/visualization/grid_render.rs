use crate::environment::GridWorld;
use crate::types::{Cell, PlannerState};

/// Draw `path` over the grid as ASCII, top row first
///
/// `#` obstacle, `.` free, `*` path, `S` start, `G` goal, `x` where the
/// path ended when that is not the goal. Path cells off the grid are
/// skipped.
pub fn render_path<S: PlannerState>(grid: &GridWorld, path: &[S], start: Cell, goal: Cell) -> String {
    let width = grid.width();
    let height = grid.height();
    let mut canvas = vec![vec!['.'; width]; height];

    for ((row, col), &free) in grid.occupancy().indexed_iter() {
        if !free {
            canvas[row][col] = '#';
        }
    }

    let mut put = |cell: Cell, mark: char| {
        if grid.is_valid(cell) {
            let row = grid.to_grid_row(cell.y) as usize;
            canvas[row][cell.x as usize] = mark;
        }
    };

    for state in path {
        put(state.cell(), '*');
    }
    if let Some(last) = path.last() {
        if last.cell() != goal {
            put(last.cell(), 'x');
        }
    }
    put(start, 'S');
    put(goal, 'G');

    let mut output = String::with_capacity((width + 1) * height);
    for row in canvas {
        output.extend(row);
        output.push('\n');
    }
    output
}
