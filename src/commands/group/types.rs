use clap::Args;
use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, Resource, UNAVAILABLE_ELEMENT};

/// Privilege flags of a group. Unset flags are left out of the request so
/// the API keeps (or defaults) them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Args)]
#[serde(rename_all = "camelCase")]
pub struct Privileges {
    #[clap(long = "create-datacenter", help = "Allow creating datacenters")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_data_center: Option<bool>,

    #[clap(long = "create-snapshot", help = "Allow creating snapshots")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_snapshot: Option<bool>,

    #[clap(long = "reserve-ip", help = "Allow reserving IP blocks")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_ip: Option<bool>,

    #[clap(long = "access-logs", help = "Allow reading the activity log")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_activity_log: Option<bool>,

    #[clap(long = "create-pcc", help = "Allow creating cross connects")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_pcc: Option<bool>,

    #[clap(long = "s3privilege", help = "Allow using object storage")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_privilege: Option<bool>,

    #[clap(long = "create-backup", help = "Allow creating backup units")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_backup_unit: Option<bool>,

    #[clap(long = "create-nic", help = "Allow creating internet access")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_internet_access: Option<bool>,

    #[clap(long = "create-k8s", help = "Allow creating Kubernetes clusters")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_k8s_cluster: Option<bool>,
}

impl Privileges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrites every flag that is set in `other`.
    pub fn merge(&mut self, other: &Privileges) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            create_data_center,
            create_snapshot,
            reserve_ip,
            access_activity_log,
            create_pcc,
            s3_privilege,
            create_backup_unit,
            create_internet_access,
            create_k8s_cluster
        );
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub privileges: Privileges,
}

pub type Group = Resource<GroupProperties>;

fn flag(value: Option<bool>) -> String {
    value.unwrap_or(false).to_string()
}

impl Columns for Group {
    const COLUMNS: &'static [&'static str] = &[
        "GroupId",
        "Name",
        "CreateDataCenter",
        "CreateSnapshot",
        "ReserveIp",
        "AccessActivityLog",
        "CreatePcc",
        "S3Privilege",
        "CreateBackupUnit",
        "CreateInternetAccess",
        "CreateK8s",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "GroupId",
        "Name",
        "CreateDataCenter",
        "CreateSnapshot",
        "ReserveIp",
        "AccessActivityLog",
        "CreatePcc",
        "S3Privilege",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;
        let privileges = &properties.privileges;

        match name {
            "GroupId" => self.id.clone(),
            "Name" => or_unavailable(&properties.name),
            "CreateDataCenter" => flag(privileges.create_data_center),
            "CreateSnapshot" => flag(privileges.create_snapshot),
            "ReserveIp" => flag(privileges.reserve_ip),
            "AccessActivityLog" => flag(privileges.access_activity_log),
            "CreatePcc" => flag(privileges.create_pcc),
            "S3Privilege" => flag(privileges.s3_privilege),
            "CreateBackupUnit" => flag(privileges.create_backup_unit),
            "CreateInternetAccess" => flag(privileges.create_internet_access),
            "CreateK8s" => flag(privileges.create_k8s_cluster),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_sec_auth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_auth_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub type User = Resource<UserProperties>;

impl Columns for User {
    const COLUMNS: &'static [&'static str] = &[
        "UserId",
        "Firstname",
        "Lastname",
        "Email",
        "Administrator",
        "ForceSecAuth",
        "SecAuthActive",
        "Active",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] = &[
        "UserId",
        "Firstname",
        "Lastname",
        "Email",
        "Administrator",
        "Active",
    ];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;

        match name {
            "UserId" => self.id.clone(),
            "Firstname" => or_unavailable(&properties.firstname),
            "Lastname" => or_unavailable(&properties.lastname),
            "Email" => or_unavailable(&properties.email),
            "Administrator" => or_unavailable(&properties.administrator),
            "ForceSecAuth" => or_unavailable(&properties.force_sec_auth),
            "SecAuthActive" => or_unavailable(&properties.sec_auth_active),
            "Active" => or_unavailable(&properties.active),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_privileges_are_flattened() {
        let properties = GroupProperties {
            name: Some("devs".to_string()),
            privileges: Privileges {
                create_data_center: Some(true),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&properties).unwrap(),
            serde_json::json!({ "name": "devs", "createDataCenter": true })
        );
    }

    #[test]
    fn test_merge_keeps_unset_flags() {
        let mut current = Privileges {
            create_data_center: Some(true),
            reserve_ip: Some(true),
            ..Default::default()
        };

        current.merge(&Privileges {
            reserve_ip: Some(false),
            create_pcc: Some(true),
            ..Default::default()
        });

        assert_eq!(current.create_data_center, Some(true));
        assert_eq!(current.reserve_ip, Some(false));
        assert_eq!(current.create_pcc, Some(true));
        assert!(!current.is_empty());
    }

    #[test]
    fn test_missing_flags_read_as_false() {
        let group: Group = serde_json::from_value(serde_json::json!({
            "id": "g",
            "properties": { "name": "ops", "createSnapshot": true }
        }))
        .unwrap();

        assert_eq!(group.column("CreateSnapshot"), "true");
        assert_eq!(group.column("CreatePcc"), "false");
    }
}
