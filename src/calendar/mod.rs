pub mod exec;
pub mod grid;
pub mod output;

pub use exec::exec;
pub use grid::{display_level, CalendarGrid, GridColumn};
pub use output::{output_grid, output_json, output_ndjson};
