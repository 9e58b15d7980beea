use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::Config;

/// One deployment event, shaped as the Cased API expects it.
///
/// Optional fields are left out of the JSON body when their source
/// variable is absent.
#[derive(Debug, Serialize)]
pub struct DeploymentEvent {
    pub deployment_request: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_full_name: Option<String>,
    // "ref" is a keyword, so the raw identifier keeps the JSON key intact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_run_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

/// Assemble the deployment event from the environment snapshot.
pub fn build_event(config: &Config) -> DeploymentEvent {
    let deployment_request = config
        .var("DEPLOYMENT_REQUEST")
        .map(str::to_owned)
        .unwrap_or_else(|| default_description(config));

    let run_id = config
        .first_of(&["RUN_ID", "GITHUB_RUN_ID"])
        .map(str::to_owned);
    let run_url = config
        .var("RUN_URL")
        .map(str::to_owned)
        .or_else(|| run_id.as_deref().map(|id| default_run_url(config, id)));

    DeploymentEvent {
        deployment_request,
        status: config.var("STATUS").unwrap_or("success").to_owned(),
        repository_full_name: config
            .first_of(&["REPOSITORY_FULL_NAME", "GITHUB_REPOSITORY"])
            .map(str::to_owned),
        r#ref: config
            .first_of(&["REF", "GITHUB_REF_NAME", "GITHUB_REF"])
            .map(normalize_ref),
        event_metadata: config.var("EVENT_METADATA").map(parse_metadata),
        commit_sha: config
            .first_of(&["COMMIT_SHA", "GITHUB_SHA"])
            .map(str::to_owned),
        commit_message: config.var("COMMIT_MESSAGE").map(str::to_owned),
        external_url: config.var("EXTERNAL_URL").map(str::to_owned),
        github_run_id: run_id,
        github_run_url: run_url,
        workflow_id: config.var("WORKFLOW_ID").map(str::to_owned),
    }
}

/// `Deployment <branch> (<sha7>) to <repo>`, dropping the parts that are
/// not known. Used when no explicit DEPLOYMENT_REQUEST is given.
fn default_description(config: &Config) -> String {
    let repo = config
        .first_of(&["REPOSITORY_FULL_NAME", "GITHUB_REPOSITORY"])
        .unwrap_or("repo");
    let branch = config
        .var("GITHUB_REF_NAME")
        .map(str::to_owned)
        .or_else(|| {
            config
                .var("GITHUB_REF")
                .map(|r| r.strip_prefix("refs/heads/").unwrap_or(r).to_owned())
        })
        .filter(|branch| !branch.is_empty());
    let short_sha = config
        .first_of(&["COMMIT_SHA", "GITHUB_SHA"])
        .map(|sha| sha.chars().take(7).collect::<String>());

    let mut parts = vec!["Deployment".to_owned()];
    if let Some(branch) = branch {
        parts.push(branch);
    }
    if let Some(sha) = short_sha {
        parts.push(format!("({sha})"));
    }
    parts.push(format!("to {repo}"));
    parts.join(" ")
}

/// A short value without a `refs/` prefix is assumed to be a bare branch
/// name; anything else passes through unchanged.
fn normalize_ref(raw: &str) -> String {
    if !raw.starts_with("refs/") && raw.chars().count() < 60 {
        format!("refs/heads/{raw}")
    } else {
        raw.to_owned()
    }
}

fn default_run_url(config: &Config, run_id: &str) -> String {
    let server = config
        .var("GITHUB_SERVER_URL")
        .unwrap_or("https://github.com");
    let repository = config.var("GITHUB_REPOSITORY").unwrap_or_default();
    format!(
        "{}/{}/actions/runs/{}",
        server.trim_end_matches('/'),
        repository,
        run_id
    )
}

/// Best-effort JSON parse; the raw string is sent when parsing fails.
fn parse_metadata(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => {
            warn!("EVENT_METADATA is not valid JSON; sending as string");
            Value::String(raw.to_owned())
        }
    }
}
