use crate::app::App;
use crate::model::{GithubUser, ProfileOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(app: &App, json: bool) -> anyhow::Result<()> {
    let username = &app.settings().username;
    let user = app
        .client()
        .fetch_user(username)
        .with_context(|| format!("Failed to fetch profile for {username}"))?;

    if json {
        let output = ProfileOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            user,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_summary(&user);
    }
    Ok(())
}

fn output_summary(user: &GithubUser) {
    match &user.name {
        Some(name) => println!("{} ({})", style(name).bold(), style(&user.login).dim()),
        None => println!("{}", style(&user.login).bold()),
    }
    println!("{}", "─".repeat(50));
    if let Some(bio) = &user.bio {
        println!("{bio}\n");
    }
    println!("Public repos: {}", style(user.public_repos).cyan());
    println!("Followers:    {}", style(user.followers).green());
    println!("Following:    {}", style(user.following).yellow());
    println!("{}", style(&user.html_url).underlined());
}
