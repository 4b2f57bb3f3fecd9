pub mod client;
pub mod graphql;

pub use client::GithubClient;
pub use graphql::{parse_calendar_response, CALENDAR_QUERY};
