//! Registry client

use crate::error::{Error, Result};
use crate::http::{HttpClient, Transport};
use crate::types::{JsonObject, JsonValue, Records};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

/// Contents API root of the project directory
pub const DEFAULT_REGISTRY_URL: &str =
    "https://api.github.com/repos/Cardano-NFTs/policyIDs/contents/projects/";

/// Client for the verified project registry
pub struct CnftRegistry<T: Transport = HttpClient> {
    transport: T,
    root: String,
}

impl CnftRegistry<HttpClient> {
    /// Registry client on the public GitHub API
    pub fn new() -> Result<Self> {
        let agent = format!("cardano-explorer/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self::with_transport(
            HttpClient::anonymous(&agent)?,
            DEFAULT_REGISTRY_URL,
        ))
    }
}

impl<T: Transport> CnftRegistry<T> {
    /// Registry client over any transport and directory root
    ///
    /// `root` must end with `/`; project names are appended to it.
    pub fn with_transport(transport: T, root: impl Into<String>) -> Self {
        Self {
            transport,
            root: root.into(),
        }
    }

    /// Directory root being queried
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Entries of the verified project directory
    pub async fn verified_policies(&self) -> Result<Records> {
        match self.transport.get_json(&self.root).await? {
            JsonValue::Array(entries) => Ok(entries),
            other => Err(Error::decode(format!(
                "Expected a directory listing from {}, got {other}",
                self.root
            ))),
        }
    }

    /// Whether a project name is in the registry
    pub async fn project_exist(&self, project_name: &str) -> Result<bool> {
        let entries = self.verified_policies().await?;
        Ok(entries
            .iter()
            .any(|e| e.get("name").and_then(JsonValue::as_str) == Some(project_name)))
    }

    /// Registry entry of a project with its `content` decoded
    pub async fn get_project_info(&self, project_name: &str) -> Result<JsonObject> {
        if !self.project_exist(project_name).await? {
            return Err(Error::invalid_argument(format!(
                "This project ({project_name}) has not been verified by cnft.io or the project name is incorrect"
            )));
        }

        let url = format!("{}{project_name}", self.root);
        let mut entry = match self.transport.get_json(&url).await? {
            JsonValue::Object(entry) => entry,
            other => {
                return Err(Error::decode(format!(
                    "Expected a file entry from {url}, got {other}"
                )))
            }
        };

        let encoded = entry
            .get("content")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::decode(format!("File entry from {url} has no content")))?;
        let content = decode_content(encoded)?;
        debug!(project = project_name, "Decoded project file");

        entry.insert("content".to_string(), content);
        Ok(entry)
    }

    /// Verified policy ids of a project
    pub async fn get_policy_id(&self, project_name: &str) -> Result<Vec<String>> {
        let info = self.get_project_info(project_name).await?;
        let policies = info
            .get("content")
            .and_then(|c| c.get("policies"))
            .ok_or_else(|| Error::decode(format!("Project {project_name} lists no policies")))?;

        match policies {
            JsonValue::String(id) => Ok(vec![id.clone()]),
            JsonValue::Array(ids) => ids
                .iter()
                .map(|id| {
                    id.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| Error::decode(format!("Policy id '{id}' is not a string")))
                })
                .collect(),
            other => Err(Error::decode(format!("Unexpected policies value: {other}"))),
        }
    }

    /// Whether `policy_id` is one of the project's verified policies
    pub async fn check_policy_id(&self, policy_id: &str, project_name: &str) -> Result<bool> {
        let policies = self.get_policy_id(project_name).await?;
        Ok(policies.iter().any(|p| p == policy_id))
    }
}

/// Decode a base64 file body into JSON
///
/// GitHub wraps the encoded body at 60 columns.
pub(crate) fn decode_content(encoded: &str) -> Result<JsonValue> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| Error::decode(format!("Invalid base64 content: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}
