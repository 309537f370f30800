//! In-memory representation of a mod database entry.
//!
//! Field order is the serialized key order, so reordering a struct
//! changes the output format.

use serde::{Deserialize, Serialize};

/// Screenshot and video URLs for one mod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

/// The mod's hosting pages. At most one of the named slots is set per
/// extracted link; everything unrecognized lands in `others`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webpages {
    pub steam: Option<String>,
    pub nexus: Option<String>,
    pub bethesda: Option<String>,
    pub others: Vec<String>,
}

impl Webpages {
    pub fn empty() -> Self {
        Webpages {
            steam: None,
            nexus: None,
            bethesda: None,
            others: Vec::new(),
        }
    }
}

/// Pointer to another mod this mod depends on. `id` is the fixed database
/// id of the required entry (None for SKSE, which has no entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: Option<u32>,
    pub name: String,
    pub optional: bool,
}

/// Original-edition presence of a mod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oldrim {
    pub is_available: bool,
    pub webpages: Webpages,
    pub requirements: Vec<Requirement>,
}

/// Special-edition presence of a mod. The index only covers the original
/// edition, so extraction always emits the placeholder; SSE data is filled
/// in by hand afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sse {
    pub is_available: bool,
    pub webpages: Webpages,
    pub requirements: Vec<Requirement>,
}

impl Sse {
    pub fn placeholder() -> Self {
        Sse {
            is_available: false,
            webpages: Webpages::empty(),
            requirements: Vec::new(),
        }
    }
}

/// One database entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub notes: Vec<String>,
    pub category: Option<String>,
    pub media: Media,
    pub oldrim: Oldrim,
    pub sse: Sse,
    pub tags: Vec<String>,
    pub deprecated: bool,
    pub verified: bool,
}
