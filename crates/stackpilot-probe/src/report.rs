//! Human readable reports over parsed values and decoded responses.

use std::fmt;

use stackpilot_common::WireEnum;
use stackpilot_common::models::{ApiResponse, Host, StoragePool, SystemVm};
use stackpilot_common::types::{
    AllocationState, ClusterType, HostState, HostType, StoragePoolState, StoragePoolType,
    SystemVmType,
};
use tracing::warn;

/// Value kinds the probe knows how to parse
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    AllocationState,
    SystemVmType,
    HostState,
    HostType,
    ClusterType,
    StoragePoolState,
    StoragePoolType,
}

/// A single variant as seen by the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Described {
    pub identifier: &'static str,
    pub display: String,
    pub recognized: bool,
}

impl Described {
    fn of<E: WireEnum>(value: E) -> Self {
        Self {
            identifier: value.identifier(),
            display: value.display_name(),
            recognized: value.is_recognized(),
        }
    }
}

impl fmt::Display for Described {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<32} {}", self.identifier, self.display)?;
        if !self.recognized {
            f.write_str(" (fallback)")?;
        }
        Ok(())
    }
}

fn describe_value<E: WireEnum>(raw: &str) -> Described {
    Described::of(E::parse(raw))
}

fn describe_variants<E: WireEnum>() -> Vec<Described> {
    E::VARIANTS.iter().copied().map(Described::of).collect()
}

impl Kind {
    pub fn describe(self, raw: &str) -> Described {
        match self {
            Kind::AllocationState => describe_value::<AllocationState>(raw),
            Kind::SystemVmType => describe_value::<SystemVmType>(raw),
            Kind::HostState => describe_value::<HostState>(raw),
            Kind::HostType => describe_value::<HostType>(raw),
            Kind::ClusterType => describe_value::<ClusterType>(raw),
            Kind::StoragePoolState => describe_value::<StoragePoolState>(raw),
            Kind::StoragePoolType => describe_value::<StoragePoolType>(raw),
        }
    }

    pub fn variants(self) -> Vec<Described> {
        match self {
            Kind::AllocationState => describe_variants::<AllocationState>(),
            Kind::SystemVmType => describe_variants::<SystemVmType>(),
            Kind::HostState => describe_variants::<HostState>(),
            Kind::HostType => describe_variants::<HostType>(),
            Kind::ClusterType => describe_variants::<ClusterType>(),
            Kind::StoragePoolState => describe_variants::<StoragePoolState>(),
            Kind::StoragePoolType => describe_variants::<StoragePoolType>(),
        }
    }
}

/// Log values the client had to map onto a fallback variant
fn note_fallback<E: WireEnum>(record: &str, value: Option<E>) {
    if value.is_some_and(|value| !value.is_recognized()) {
        warn!(record, kind = E::KIND, "Value not recognized by this client");
    }
}

/// Display string of an optional field, `-` when the response left it out
fn or_dash<E: WireEnum>(value: Option<E>) -> String {
    value.map_or_else(|| "-".to_string(), E::display_name)
}

fn host_line(host: &Host) -> String {
    note_fallback(&host.name, host.state);
    note_fallback(&host.name, host.host_type);
    note_fallback(&host.name, host.allocation_state);
    note_fallback(&host.name, host.cluster_type);

    let mut line = format!(
        "host {} [{}] type={} state={} allocation={}",
        host.name,
        host.id,
        or_dash(host.host_type),
        or_dash(host.state),
        or_dash(host.allocation_state)
    );
    if let Some(cluster_type) = host.cluster_type {
        line.push_str(&format!(" cluster={cluster_type}"));
    }
    if host.state.is_some_and(HostState::in_maintenance) {
        line.push_str(" (maintenance)");
    }
    line
}

fn pool_line(pool: &StoragePool) -> String {
    note_fallback(&pool.name, pool.state);
    note_fallback(&pool.name, pool.pool_type);

    format!(
        "pool {} [{}] type={} state={} shared={}",
        pool.name,
        pool.id,
        or_dash(pool.pool_type),
        or_dash(pool.state),
        pool.pool_type.is_some_and(StoragePoolType::is_shared)
    )
}

fn system_vm_line(vm: &SystemVm) -> String {
    note_fallback(&vm.name, vm.system_vm_type);

    format!(
        "systemvm {} [{}] type={} state={}",
        vm.name,
        vm.id,
        or_dash(vm.system_vm_type),
        vm.state
    )
}

/// One line per record in a decoded response
pub fn summarize(response: &ApiResponse) -> Vec<String> {
    match response {
        ApiResponse::Hosts(hosts) => hosts.iter().map(host_line).collect(),
        ApiResponse::StoragePools(pools) => pools.iter().map(pool_line).collect(),
        ApiResponse::SystemVms(vms) => vms.iter().map(system_vm_line).collect(),
    }
}
