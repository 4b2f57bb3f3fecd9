use crate::config::Settings;
use crate::error::{Result, StreakError};
use crate::model::{ContributionCalendar, GithubUser, Repository};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use super::graphql::{calendar_request, parse_calendar_value};

const USER_AGENT: &str = concat!("ghstreak/", env!("CARGO_PKG_VERSION"));

/// Blocking GitHub API client. One request per call, no retries.
pub struct GithubClient {
    http: Client,
    api_url: String,
    graphql_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            graphql_url: settings.graphql_url.clone(),
            token: settings.token.clone(),
        })
    }

    /// The contribution calendar for the trailing year. Requires a token.
    pub fn fetch_calendar(&self, username: &str) -> Result<ContributionCalendar> {
        let token = self.token.as_deref().ok_or(StreakError::MissingToken)?;

        debug!(username, url = %self.graphql_url, "fetching contribution calendar");
        let response = self
            .http
            .post(&self.graphql_url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .json(&calendar_request(username))
            .send()?;

        let body = check_status(response)?.json::<serde_json::Value>()?;
        parse_calendar_value(body)
    }

    pub fn fetch_user(&self, username: &str) -> Result<GithubUser> {
        let url = format!("{}/users/{}", self.api_url, username);
        debug!(%url, "fetching user");
        let response = self.authorize(self.http.get(&url)).send()?;
        Ok(check_status(response)?.json::<GithubUser>()?)
    }

    pub fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!("{}/users/{}/repos", self.api_url, username);
        debug!(%url, "fetching repositories");
        let response = self
            .authorize(self.http.get(&url))
            .query(&[("sort", "updated"), ("per_page", "100")])
            .send()?;
        Ok(check_status(response)?.json::<Vec<Repository>>()?)
    }

    /// REST endpoints work anonymously; a token only raises the rate limit.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, "application/vnd.github+json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StreakError::Api(format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status")
        )))
    }
}
