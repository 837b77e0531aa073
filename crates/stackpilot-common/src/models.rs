//! Records decoded from CloudStack list responses.
//!
//! Only the fields this crate interprets are modelled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{
    AllocationState, ClusterType, HostState, HostType, StoragePoolState, StoragePoolType,
    SystemVmType,
};

/// A hypervisor, storage or system host registered with the management server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<HostState>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub host_type: Option<HostType>,
    #[serde(rename = "ipaddress", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(rename = "zoneid")]
    pub zone_id: String,
    #[serde(rename = "zonename")]
    pub zone_name: String,
    #[serde(rename = "clustername", default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(rename = "clustertype", default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<ClusterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    /// Absent for secondary storage and other hosts that take no allocations
    #[serde(rename = "allocationstate", default, skip_serializing_if = "Option::is_none")]
    pub allocation_state: Option<AllocationState>,
}

/// Primary storage attached to a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePool {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StoragePoolState>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub pool_type: Option<StoragePoolType>,
    #[serde(rename = "zonename")]
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Total capacity in bytes
    #[serde(rename = "disksizetotal", default, skip_serializing_if = "Option::is_none")]
    pub disk_size_total: Option<u64>,
}

/// A virtual machine CloudStack runs for itself (router, console proxy, storage VM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemVm {
    pub id: String,
    pub name: String,
    #[serde(rename = "systemvmtype", default, skip_serializing_if = "Option::is_none")]
    pub system_vm_type: Option<SystemVmType>,
    pub state: String,
    #[serde(rename = "zonename")]
    pub zone_name: String,
    #[serde(rename = "publicip", default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(rename = "privateip", default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HostList {
    #[serde(default)]
    host: Vec<Host>,
}

#[derive(Debug, Deserialize)]
struct StoragePoolList {
    #[serde(default)]
    storagepool: Vec<StoragePool>,
}

#[derive(Debug, Deserialize)]
struct SystemVmList {
    #[serde(default)]
    systemvm: Vec<SystemVm>,
}

/// Top-level wrapper object CloudStack puts around every list response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Envelope {
    ListHostsResponse(HostList),
    ListStoragePoolsResponse(StoragePoolList),
    ListSystemVmsResponse(SystemVmList),
}

/// A decoded list response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Hosts(Vec<Host>),
    StoragePools(Vec<StoragePool>),
    SystemVms(Vec<SystemVm>),
}

impl ApiResponse {
    /// Decode a `listHosts`, `listStoragePools` or `listSystemVms` JSON body
    pub fn from_json(body: &str) -> Result<Self, DomainError> {
        let envelope: Envelope = serde_json::from_str(body)?;
        Ok(match envelope {
            Envelope::ListHostsResponse(list) => ApiResponse::Hosts(list.host),
            Envelope::ListStoragePoolsResponse(list) => ApiResponse::StoragePools(list.storagepool),
            Envelope::ListSystemVmsResponse(list) => ApiResponse::SystemVms(list.systemvm),
        })
    }

    /// Number of records in the response
    pub fn len(&self) -> usize {
        match self {
            ApiResponse::Hosts(hosts) => hosts.len(),
            ApiResponse::StoragePools(pools) => pools.len(),
            ApiResponse::SystemVms(vms) => vms.len(),
        }
    }

    /// Whether the response carried no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_HOSTS: &str = r#"{
        "listhostsresponse": {
            "count": 3,
            "host": [
                {
                    "id": "1",
                    "name": "cs2-xevsrv.alucloud.local",
                    "state": "Up",
                    "type": "Routing",
                    "ipaddress": "10.26.26.107",
                    "zoneid": "1",
                    "zonename": "Dev Zone 1",
                    "clustername": "Xen Clust 1",
                    "clustertype": "CloudManaged",
                    "hypervisor": "XenServer",
                    "cpunumber": 24,
                    "allocationstate": "Enabled"
                },
                {
                    "id": "3",
                    "name": "s-1-VM",
                    "state": "Up",
                    "type": "SecondaryStorageVM",
                    "ipaddress": "10.26.26.81",
                    "zoneid": "1",
                    "zonename": "Dev Zone 1",
                    "allocationstate": "Enabled"
                },
                {
                    "id": "9",
                    "name": "future-host",
                    "state": "Hibernating",
                    "type": "QuantumRouter",
                    "zoneid": "2",
                    "zonename": "Dev Zone 2",
                    "allocationstate": "Draining"
                }
            ]
        }
    }"#;

    #[test]
    fn decodes_hosts() {
        let ApiResponse::Hosts(hosts) = ApiResponse::from_json(LIST_HOSTS).unwrap() else {
            panic!("expected a host list");
        };
        assert_eq!(hosts.len(), 3);

        let routing = &hosts[0];
        assert_eq!(routing.host_type, Some(HostType::Routing));
        assert_eq!(routing.state, Some(HostState::Up));
        assert_eq!(routing.cluster_type, Some(ClusterType::CloudManaged));
        assert_eq!(routing.allocation_state, Some(AllocationState::Enabled));
        assert_eq!(routing.ip_address.as_deref(), Some("10.26.26.107"));

        let ssvm = &hosts[1];
        assert_eq!(ssvm.host_type, Some(HostType::SecondaryStorageVm));
        assert_eq!(ssvm.cluster_type, None);
    }

    #[test]
    fn unknown_values_do_not_fail_decoding() {
        let ApiResponse::Hosts(hosts) = ApiResponse::from_json(LIST_HOSTS).unwrap() else {
            panic!("expected a host list");
        };
        let future = &hosts[2];
        assert_eq!(future.state, Some(HostState::Unknown));
        assert_eq!(future.host_type, Some(HostType::Unknown));
        assert_eq!(future.allocation_state, Some(AllocationState::Unknown));
    }

    #[test]
    fn missing_allocation_state_keeps_the_rest_of_the_list() {
        let body = r#"{"listhostsresponse": {"host": [
            {"id": "1", "name": "xen-1", "state": "Up", "type": "Routing",
             "zoneid": "1", "zonename": "z", "allocationstate": "Enabled"},
            {"id": "2", "name": "nfs://10.26.26.165/mnt/nfs/cs_sec", "state": "Alert",
             "type": "SecondaryStorage", "zoneid": "1", "zonename": "z"}
        ]}}"#;
        let ApiResponse::Hosts(hosts) = ApiResponse::from_json(body).unwrap() else {
            panic!("expected a host list");
        };
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].allocation_state, Some(AllocationState::Enabled));
        assert_eq!(hosts[1].allocation_state, None);
        assert_eq!(hosts[1].host_type, Some(HostType::SecondaryStorage));
    }

    #[test]
    fn null_allocation_state_decodes_as_absent() {
        let body = r#"{"listhostsresponse": {"host": [{
            "id": "1", "name": "h", "state": "Up", "type": "Routing",
            "zoneid": "1", "zonename": "z", "allocationstate": null
        }]}}"#;
        let ApiResponse::Hosts(hosts) = ApiResponse::from_json(body).unwrap() else {
            panic!("expected a host list");
        };
        assert_eq!(hosts[0].allocation_state, None);
    }

    #[test]
    fn storage_pool_without_state_or_type() {
        let body = r#"{"liststoragepoolsresponse": {"storagepool": [
            {"id": "p1", "name": "primary", "zonename": "Dev Zone 1"}
        ]}}"#;
        let ApiResponse::StoragePools(pools) = ApiResponse::from_json(body).unwrap() else {
            panic!("expected a storage pool list");
        };
        assert_eq!(pools[0].state, None);
        assert_eq!(pools[0].pool_type, None);
    }

    #[test]
    fn bare_value_still_rejects_null() {
        let err = serde_json::from_str::<AllocationState>("null").unwrap_err();
        assert!(err.to_string().contains("allocation state must not be null"));
    }

    #[test]
    fn decodes_system_vms() {
        let body = r#"{"listsystemvmsresponse": {"count": 2, "systemvm": [
            {"id": "a", "name": "v-2-VM", "systemvmtype": "consoleProxy", "state": "Running",
             "zonename": "Dev Zone 1", "publicip": "72.52.126.65"},
            {"id": "b", "name": "x-7-VM", "systemvmtype": "loadBalancer", "state": "Stopped",
             "zonename": "Dev Zone 1"}
        ]}}"#;
        let ApiResponse::SystemVms(vms) = ApiResponse::from_json(body).unwrap() else {
            panic!("expected a system VM list");
        };
        assert_eq!(vms[0].system_vm_type, Some(SystemVmType::ConsoleProxy));
        assert_eq!(vms[0].public_ip.as_deref(), Some("72.52.126.65"));
        assert_eq!(vms[1].system_vm_type, Some(SystemVmType::Unrecognized));
    }

    #[test]
    fn decodes_storage_pools() {
        let body = r#"{"liststoragepoolsresponse": {"storagepool": [
            {"id": "p1", "name": "primary", "state": "Up", "type": "NetworkFilesystem",
             "zonename": "Dev Zone 1", "path": "/export/primary", "disksizetotal": 1099511627776}
        ]}}"#;
        let response = ApiResponse::from_json(body).unwrap();
        assert_eq!(response.len(), 1);
        let ApiResponse::StoragePools(pools) = response else {
            panic!("expected a storage pool list");
        };
        assert_eq!(pools[0].pool_type, Some(StoragePoolType::NetworkFilesystem));
        assert_eq!(pools[0].state, Some(StoragePoolState::Up));
        assert_eq!(pools[0].disk_size_total, Some(1_099_511_627_776));
    }

    #[test]
    fn empty_list_response() {
        let response = ApiResponse::from_json(r#"{"listhostsresponse": {}}"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn unsupported_envelope_is_a_decode_error() {
        let err = ApiResponse::from_json(r#"{"listzonesresponse": {}}"#).unwrap_err();
        assert!(matches!(err, DomainError::Decode(_)));
    }

    #[test]
    fn serializes_display_strings() {
        let host = Host {
            id: "1".into(),
            name: "h".into(),
            state: Some(HostState::PrepareForMaintenance),
            host_type: Some(HostType::SecondaryStorageVm),
            ip_address: None,
            zone_id: "1".into(),
            zone_name: "z".into(),
            cluster_name: None,
            cluster_type: None,
            hypervisor: None,
            allocation_state: Some(AllocationState::Disabled),
        };
        let value = serde_json::to_value(&host).unwrap();
        assert_eq!(value["state"], "PrepareForMaintenance");
        assert_eq!(value["type"], "SecondaryStorageVM");
        assert_eq!(value["allocationstate"], "Disabled");
        assert!(value.get("clustertype").is_none());
    }
}
