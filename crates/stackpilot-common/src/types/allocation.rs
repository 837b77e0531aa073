use crate::wire::wire_enum;

wire_enum! {
    /// Whether a host, cluster, pod or zone is administratively open for new allocations
    pub enum AllocationState {
        kind: "allocation state",
        wire: UpperUnderscore,
        display: UpperCamel,
        fallback: Unknown,
        variants: {
            Disabled => "DISABLED",
            Enabled => "ENABLED",
            /// Not sent by the API; stands in for values this client predates
            Unknown => "UNKNOWN",
        },
    }
}
