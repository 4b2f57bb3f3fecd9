use crate::app::App;
use crate::model::{Repository, ReposOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(app: &App, json: bool, language: Option<String>) -> anyhow::Result<()> {
    let username = &app.settings().username;
    let repos = app
        .client()
        .fetch_repositories(username)
        .with_context(|| format!("Failed to fetch repositories for {username}"))?;

    let languages = languages(&repos);
    let filtered = filter_by_language(repos, language.as_deref());

    if json {
        output_json(username, language, languages, filtered)?;
    } else {
        output_table(&filtered, &languages, language.as_deref());
    }

    Ok(())
}

/// Distinct languages in first-seen order.
pub fn languages(repos: &[Repository]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for lang in repos.iter().filter_map(|r| r.language.as_ref()) {
        if !seen.contains(lang) {
            seen.push(lang.clone());
        }
    }
    seen
}

/// `None` keeps everything; matching ignores case.
pub fn filter_by_language(repos: Vec<Repository>, language: Option<&str>) -> Vec<Repository> {
    match language {
        None => repos,
        Some(wanted) => repos
            .into_iter()
            .filter(|r| {
                r.language
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(wanted))
            })
            .collect(),
    }
}

fn output_json(
    username: &str,
    language: Option<String>,
    languages: Vec<String>,
    repositories: Vec<Repository>,
) -> anyhow::Result<()> {
    let output = ReposOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        language,
        languages,
        repositories,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_table(repos: &[Repository], languages: &[String], language: Option<&str>) {
    println!("{}", style("Repositories").bold());
    println!("{}", "─".repeat(50));

    if !languages.is_empty() {
        println!("Languages: {}", style(languages.join(", ")).dim());
    }
    if let Some(lang) = language {
        println!("Filtered by: {}", style(lang).yellow());
    }

    if repos.is_empty() {
        println!("No repositories found");
        return;
    }

    for repo in repos {
        println!(
            "\n{}  {} {}  {} {}  {}",
            style(&repo.name).cyan().bold(),
            style("★").yellow(),
            repo.stargazers_count,
            style("⑂").dim(),
            repo.forks_count,
            style(repo.language.as_deref().unwrap_or("-")).magenta()
        );
        if let Some(description) = &repo.description {
            println!("  {description}");
        }
        if !repo.topics.is_empty() {
            println!("  {}", style(repo.topics.join(" · ")).dim());
        }
        println!("  {}", style(&repo.html_url).underlined());
        if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
            println!("  {}", style(homepage).underlined());
        }
    }
}
