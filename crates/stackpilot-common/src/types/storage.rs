//! Classifications reported for primary storage pools by `listStoragePools`.

use crate::wire::wire_enum;

wire_enum! {
    /// Availability of a storage pool
    pub enum StoragePoolState {
        kind: "storage pool state",
        wire: UpperCamel,
        display: UpperCamel,
        fallback: Unrecognized,
        variants: {
            Up => "UP",
            PrepareForMaintenance => "PREPARE_FOR_MAINTENANCE",
            ErrorInMaintenance => "ERROR_IN_MAINTENANCE",
            CancelMaintenance => "CANCEL_MAINTENANCE",
            Maintenance => "MAINTENANCE",
            Removed => "REMOVED",
            Unrecognized => "UNRECOGNIZED",
        },
    }
}

wire_enum! {
    /// Backing technology of a storage pool
    pub enum StoragePoolType {
        kind: "storage pool type",
        wire: UpperCamel,
        display: UpperCamel,
        fallback: Unrecognized,
        variants: {
            Filesystem => "FILESYSTEM",
            NetworkFilesystem => "NETWORK_FILESYSTEM",
            IscsiLun => "ISCSI_LUN",
            Iscsi => "ISCSI",
            Iso => "ISO",
            Lvm => "LVM",
            Clvm => "CLVM",
            SharedMountPoint => "SHARED_MOUNT_POINT",
            Vmfs => "VMFS",
            PreSetup => "PRE_SETUP",
            Ext => "EXT",
            Ocfs2 => "OCFS2",
            Unrecognized => "UNRECOGNIZED",
        },
    }
}

impl StoragePoolType {
    /// Whether the pool is reached over the network rather than attached locally
    pub fn is_shared(self) -> bool {
        matches!(
            self,
            StoragePoolType::NetworkFilesystem
                | StoragePoolType::IscsiLun
                | StoragePoolType::Iscsi
                | StoragePoolType::Clvm
                | StoragePoolType::SharedMountPoint
                | StoragePoolType::Vmfs
                | StoragePoolType::PreSetup
                | StoragePoolType::Ocfs2
        )
    }
}
