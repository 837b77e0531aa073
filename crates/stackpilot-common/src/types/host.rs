//! Classifications reported for hosts by `listHosts`.

use crate::wire::{display_by_convention, wire_enum};

wire_enum! {
    /// Connection and maintenance status of a host
    pub enum HostState {
        kind: "host state",
        wire: UpperCamel,
        display: UpperCamel,
        fallback: Unknown,
        variants: {
            Connecting => "CONNECTING",
            Up => "UP",
            Down => "DOWN",
            Disconnected => "DISCONNECTED",
            Updating => "UPDATING",
            PrepareForMaintenance => "PREPARE_FOR_MAINTENANCE",
            ErrorInMaintenance => "ERROR_IN_MAINTENANCE",
            Maintenance => "MAINTENANCE",
            Alert => "ALERT",
            Removed => "REMOVED",
            Rebalancing => "REBALANCING",
            Unknown => "UNKNOWN",
        },
    }
}

wire_enum! {
    /// What a host does within the zone
    pub enum HostType {
        kind: "host type",
        wire: UpperCamel,
        display: UpperCamel with host_type_display,
        fallback: Unknown,
        variants: {
            Storage => "STORAGE",
            Routing => "ROUTING",
            SecondaryStorage => "SECONDARY_STORAGE",
            SecondaryStorageCmdExecutor => "SECONDARY_STORAGE_CMD_EXECUTOR",
            ConsoleProxy => "CONSOLE_PROXY",
            ExternalFirewall => "EXTERNAL_FIREWALL",
            ExternalLoadBalancer => "EXTERNAL_LOAD_BALANCER",
            PxeServer => "PXE_SERVER",
            TrafficMonitor => "TRAFFIC_MONITOR",
            ExternalDhcp => "EXTERNAL_DHCP",
            SecondaryStorageVm => "SECONDARY_STORAGE_VM",
            LocalSecondaryStorage => "LOCAL_SECONDARY_STORAGE",
            Unknown => "UNKNOWN",
        },
    }
}

/// The API spells this one `SecondaryStorageVM`, unlike every other host type
fn host_type_display(value: HostType) -> String {
    match value {
        HostType::SecondaryStorageVm => "SecondaryStorageVM".to_string(),
        other => display_by_convention(other),
    }
}

wire_enum! {
    /// Who manages the hypervisor cluster a host belongs to
    pub enum ClusterType {
        kind: "cluster type",
        wire: UpperCamel,
        display: UpperCamel,
        fallback: Unknown,
        variants: {
            CloudManaged => "CLOUD_MANAGED",
            ExternalManaged => "EXTERNAL_MANAGED",
            Unknown => "UNKNOWN",
        },
    }
}

impl HostState {
    /// Whether the host is in, or heading into, maintenance
    pub fn in_maintenance(self) -> bool {
        matches!(
            self,
            HostState::PrepareForMaintenance
                | HostState::ErrorInMaintenance
                | HostState::Maintenance
        )
    }
}
