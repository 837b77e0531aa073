pub mod allocation;
pub mod host;
pub mod storage;
pub mod system_vm;

pub use allocation::AllocationState;
pub use host::{ClusterType, HostState, HostType};
pub use storage::{StoragePoolState, StoragePoolType};
pub use system_vm::SystemVmType;
