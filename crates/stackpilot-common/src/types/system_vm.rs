use crate::wire::{display_by_convention, wire_enum};

wire_enum! {
    /// Role of a virtual machine that CloudStack runs on its own behalf
    pub enum SystemVmType {
        kind: "system VM type",
        wire: LowerCamel,
        display: LowerCamel with flattened,
        fallback: Unrecognized,
        variants: {
            DomainRouter => "DOMAIN_ROUTER",
            ConsoleProxy => "CONSOLE_PROXY",
            SecondaryStorageVm => "SECONDARY_STORAGE_VM",
            Unrecognized => "UNRECOGNIZED",
        },
    }
}

/// CloudStack reports system VM types in plain lowercase (`secondarystoragevm`)
fn flattened(value: SystemVmType) -> String {
    display_by_convention(value).to_lowercase()
}
