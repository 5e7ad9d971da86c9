use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{Resource, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_privilege: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_privilege: Option<bool>,
}

/// A resource shared with a group. The id is the id of the shared resource.
pub type Share = Resource<ShareProperties>;

impl Columns for Share {
    const COLUMNS: &'static [&'static str] =
        &["ShareId", "EditPrivilege", "SharePrivilege", "Type"];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["ShareId", "EditPrivilege", "SharePrivilege"];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "ShareId" => self.id.clone(),
            "EditPrivilege" => properties.edit_privilege.unwrap_or(false).to_string(),
            "SharePrivilege" => properties.share_privilege.unwrap_or(false).to_string(),
            "Type" => self
                .kind
                .clone()
                .unwrap_or_else(|| UNAVAILABLE_ELEMENT.to_string()),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}
