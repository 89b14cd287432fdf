//! Attribute codes emitted by rules.

pub const HAMS: &str = "H";
pub const JAHR: &str = "J";
pub const QALQALAH: &str = "C";
pub const TAFKHIM: &str = "M";
pub const TARQEEQ: &str = "Q";
pub const SAFEER: &str = "Sf";

pub const DUR_2: &str = "2";
pub const DUR_4: &str = "4";
pub const DUR_5: &str = "5";
pub const DUR_6: &str = "6";

pub const IDGHAM: &str = "D";
pub const IZHAAR: &str = "Z";

// Compound codes.
pub const IDGHAM_GHUNNAH: &str = "DG";
pub const IQLAB_GHUNNAH: &str = "BG";
pub const IKHFAA_GHUNNAH: &str = "KG";
pub const IKHFAA_SHAFAWI: &str = "KF";
pub const IDGHAM_SHAFAWI: &str = "DF";
pub const IZHAAR_SHAFAWI: &str = "ZF";
pub const QALQALAH_KUBRA: &str = "C!";
pub const GHUNNAH_MUSHADDAD: &str = "Gː";

/// Emitted for a non-space position with no attributes at all.
pub const NONE: &str = "_";
