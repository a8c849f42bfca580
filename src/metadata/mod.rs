//! Action Metadata
//!
//! Builds and validates the descriptor a wallet client fetches to render
//! the action UI. The descriptor advertises exactly one dynamic action,
//! taking one required text parameter named `message`.

use thiserror::Error;
use url::Url;

use crate::chain::fuji;
use crate::types::{ActionKind, ActionSpec, ChainRef, Metadata, ParamSpec, ParamType};

/// Route that serves the action. Embedded in the descriptor and mounted
/// by the router, so the advertised path always matches a served route.
pub const ACTION_PATH: &str = "/api/action";

/// Icon shown next to the action in the client UI.
const ICON_URL: &str = "https://avatars.githubusercontent.com/u/117962315";

/// Validation failure while constructing the descriptor. Carries the first
/// failing field; a partial descriptor is never returned.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata field `{field}` is not an absolute URL: {value:?}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("action `{label}` has an invalid path: {path:?}")]
    InvalidPath { label: String, path: String },
    #[error("action `{label}` declares parameter `{name}` more than once")]
    DuplicateParam { label: String, name: String },
    #[error("metadata declares no actions")]
    NoActions,
}

/// Build the validated action descriptor for the given serving host.
///
/// Pure function of its input: no side effects beyond construction.
pub fn describe(base_url: &str) -> Result<Metadata, MetadataError> {
    let base_url = base_url.trim_end_matches('/');

    let metadata = Metadata {
        url: format!("{}{}", base_url, ACTION_PATH),
        icon: ICON_URL.to_string(),
        title: "Timestamped Message".to_string(),
        base_url: base_url.to_string(),
        description: "Store a message with an optimized timestamp calculated by our algorithm"
            .to_string(),
        actions: vec![ActionSpec {
            kind: ActionKind::Dynamic,
            label: "Store Message".to_string(),
            description: "Store your message with a custom timestamp calculated for optimal storage"
                .to_string(),
            chains: ChainRef {
                source: fuji::SLUG.to_string(),
            },
            path: ACTION_PATH.to_string(),
            params: vec![ParamSpec {
                name: "message".to_string(),
                label: "Your Message".to_string(),
                value_type: ParamType::Text,
                required: true,
                description: "Enter the message you want to store on the blockchain".to_string(),
            }],
        }],
    };

    validate(&metadata)?;
    Ok(metadata)
}

/// Check a descriptor against the metadata schema rules:
/// `url` and `baseUrl` are absolute URLs, every action path is a non-empty
/// relative path, and param names are unique within each action.
pub fn validate(metadata: &Metadata) -> Result<(), MetadataError> {
    require_absolute_url("url", &metadata.url)?;
    require_absolute_url("baseUrl", &metadata.base_url)?;

    if metadata.actions.is_empty() {
        return Err(MetadataError::NoActions);
    }

    for action in &metadata.actions {
        if action.path.is_empty() || !action.path.starts_with('/') {
            return Err(MetadataError::InvalidPath {
                label: action.label.clone(),
                path: action.path.clone(),
            });
        }

        for (i, param) in action.params.iter().enumerate() {
            if action.params[..i].iter().any(|p| p.name == param.name) {
                return Err(MetadataError::DuplicateParam {
                    label: action.label.clone(),
                    name: param.name.clone(),
                });
            }
        }
    }

    Ok(())
}

fn require_absolute_url(field: &'static str, value: &str) -> Result<(), MetadataError> {
    match Url::parse(value) {
        Ok(url) if !url.cannot_be_a_base() => Ok(()),
        _ => Err(MetadataError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
