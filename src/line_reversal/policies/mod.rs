mod trim_policy;

pub use trim_policy::TrimPolicy;
