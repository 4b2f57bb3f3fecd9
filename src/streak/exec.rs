use crate::app::App;

use super::{output_json, output_summary};

pub fn exec(app: &mut App, json: bool) -> anyhow::Result<()> {
    // Keep stdout clean for JSON consumers
    let load = app.load_streak(!json);

    let username = app.settings().username.clone();
    if json {
        output_json(&load.streak, &load.source, &username, app.settings().today)?;
    } else {
        output_summary(&load.streak, &load.source, &username)?;
    }

    Ok(())
}
