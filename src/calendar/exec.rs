use crate::app::App;

use super::{output_grid, output_json, output_ndjson};

pub fn exec(app: &mut App, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let source = app.load_calendar(!(json || ndjson));
    let settings = app.settings();

    if json {
        output_json(&source, &settings.username)?;
    } else if ndjson {
        output_ndjson(&source)?;
    } else {
        output_grid(&source, &settings.username, settings.today)?;
    }

    Ok(())
}
