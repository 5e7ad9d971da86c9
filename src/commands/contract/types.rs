use serde::{Deserialize, Serialize};

use crate::output::Columns;
use crate::types::{or_unavailable, UNAVAILABLE_ELEMENT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores_per_server: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores_per_contract: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores_provisioned: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_per_server: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_per_contract: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_provisioned: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd_limit_per_volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd_limit_per_contract: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd_volume_provisioned: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssd_limit_per_volume: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssd_limit_per_contract: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssd_volume_provisioned: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservable_ips: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ips_on_contract: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ips_in_use: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k8s_cluster_limit_total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k8s_clusters_provisioned: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_domain: Option<String>,
    #[serde(default)]
    pub resource_limits: ResourceLimits,
}

/// Contracts carry no id, so they do not use the usual resource envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub properties: ContractProperties,
}

impl Columns for Contract {
    const COLUMNS: &'static [&'static str] = &[
        "ContractNumber",
        "Owner",
        "Status",
        "RegistrationDomain",
        "CoresPerServer",
        "CoresPerContract",
        "CoresProvisioned",
        "RamPerServer",
        "RamPerContract",
        "RamProvisioned",
        "HddLimitPerVolume",
        "HddLimitPerContract",
        "HddVolumeProvisioned",
        "SsdLimitPerVolume",
        "SsdLimitPerContract",
        "SsdVolumeProvisioned",
        "ReservableIps",
        "ReservedIpsOnContract",
        "ReservedIpsInUse",
        "K8sClusterLimitTotal",
        "K8sClustersProvisioned",
    ];
    const DEFAULT_COLUMNS: &'static [&'static str] =
        &["ContractNumber", "Owner", "Status", "RegistrationDomain"];

    fn column(&self, name: &str) -> String {
        let properties = &self.properties;
        let limits = &properties.resource_limits;

        match name {
            "ContractNumber" => or_unavailable(&properties.contract_number),
            "Owner" => or_unavailable(&properties.owner),
            "Status" => or_unavailable(&properties.status),
            "RegistrationDomain" => or_unavailable(&properties.reg_domain),
            "CoresPerServer" => or_unavailable(&limits.cores_per_server),
            "CoresPerContract" => or_unavailable(&limits.cores_per_contract),
            "CoresProvisioned" => or_unavailable(&limits.cores_provisioned),
            "RamPerServer" => or_unavailable(&limits.ram_per_server),
            "RamPerContract" => or_unavailable(&limits.ram_per_contract),
            "RamProvisioned" => or_unavailable(&limits.ram_provisioned),
            "HddLimitPerVolume" => or_unavailable(&limits.hdd_limit_per_volume),
            "HddLimitPerContract" => or_unavailable(&limits.hdd_limit_per_contract),
            "HddVolumeProvisioned" => or_unavailable(&limits.hdd_volume_provisioned),
            "SsdLimitPerVolume" => or_unavailable(&limits.ssd_limit_per_volume),
            "SsdLimitPerContract" => or_unavailable(&limits.ssd_limit_per_contract),
            "SsdVolumeProvisioned" => or_unavailable(&limits.ssd_volume_provisioned),
            "ReservableIps" => or_unavailable(&limits.reservable_ips),
            "ReservedIpsOnContract" => or_unavailable(&limits.reserved_ips_on_contract),
            "ReservedIpsInUse" => or_unavailable(&limits.reserved_ips_in_use),
            "K8sClusterLimitTotal" => or_unavailable(&limits.k8s_cluster_limit_total),
            "K8sClustersProvisioned" => or_unavailable(&limits.k8s_clusters_provisioned),
            _ => UNAVAILABLE_ELEMENT.to_string(),
        }
    }
}

/// Column sets shown by `contract get --resource-limits`.
pub fn limit_columns(limit: &str) -> &'static [&'static str] {
    match limit {
        "CORES" => &["ContractNumber", "CoresPerServer", "CoresPerContract", "CoresProvisioned"],
        "RAM" => &["ContractNumber", "RamPerServer", "RamPerContract", "RamProvisioned"],
        "HDD" => &[
            "ContractNumber",
            "HddLimitPerVolume",
            "HddLimitPerContract",
            "HddVolumeProvisioned",
        ],
        "SSD" => &[
            "ContractNumber",
            "SsdLimitPerVolume",
            "SsdLimitPerContract",
            "SsdVolumeProvisioned",
        ],
        "IPS" => &[
            "ContractNumber",
            "ReservableIps",
            "ReservedIpsOnContract",
            "ReservedIpsInUse",
        ],
        "K8S" => &["ContractNumber", "K8sClusterLimitTotal", "K8sClustersProvisioned"],
        _ => Contract::DEFAULT_COLUMNS,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_limit_columns_are_known() {
        for limit in ["CORES", "RAM", "HDD", "SSD", "IPS", "K8S"] {
            for column in limit_columns(limit) {
                assert!(Contract::COLUMNS.contains(column), "{column}");
            }
        }
    }

    #[test]
    fn test_contract_columns() {
        let contract: Contract = serde_json::from_value(serde_json::json!({
            "type": "contract",
            "properties": {
                "contractNumber": 31_415_926,
                "owner": "ops@example.com",
                "status": "BILLABLE",
                "regDomain": "ionos.de",
                "resourceLimits": { "coresPerServer": 62, "ramProvisioned": 8192 }
            }
        }))
        .unwrap();

        assert_eq!(contract.column("ContractNumber"), "31415926");
        assert_eq!(contract.column("CoresPerServer"), "62");
        assert_eq!(contract.column("RamProvisioned"), "8192");
        assert_eq!(contract.column("SsdLimitPerVolume"), UNAVAILABLE_ELEMENT);
    }
}
