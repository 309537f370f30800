//! The four requirement kinds a mod entry can declare, and the bracketed
//! tag strings the index uses to spell them out.

use std::sync::OnceLock;

use crate::model::Requirement;

/// A prerequisite a mod may depend on. Ordering here is the canonical tag
/// order used when kinds are combined into one bracketed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReqKind {
    Skse,
    Dawnguard,
    Hearthfire,
    Dragonborn,
}

impl ReqKind {
    pub const ALL: [ReqKind; 4] = [
        ReqKind::Skse,
        ReqKind::Dawnguard,
        ReqKind::Hearthfire,
        ReqKind::Dragonborn,
    ];

    /// The short tag used inside bracketed combinations and as the marker
    /// element's class name.
    pub fn tag(self) -> &'static str {
        match self {
            ReqKind::Skse => "SKSE",
            ReqKind::Dawnguard => "DG",
            ReqKind::Hearthfire => "HF",
            ReqKind::Dragonborn => "DB",
        }
    }

    /// Fixed database id of the required entry. SKSE is not a database
    /// entry, so it has no id.
    pub fn id(self) -> Option<u32> {
        match self {
            ReqKind::Skse => None,
            ReqKind::Dawnguard => Some(1),
            ReqKind::Hearthfire => Some(2),
            ReqKind::Dragonborn => Some(3),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ReqKind::Skse => "SKSE",
            ReqKind::Dawnguard => "Dawnguard",
            ReqKind::Hearthfire => "Hearthfire",
            ReqKind::Dragonborn => "Dragonborn",
        }
    }

    pub fn from_class(class: &str) -> Option<ReqKind> {
        ReqKind::ALL.iter().copied().find(|k| k.tag() == class)
    }

    pub fn to_requirement(self) -> Requirement {
        Requirement {
            id: self.id(),
            name: self.display_name().to_string(),
            optional: false,
        }
    }
}

/// Every combination string the index may use: each kind either present or
/// absent, joined by " + " in canonical order. Includes the empty string.
pub fn tag_variants() -> &'static [String] {
    static VARIANTS: OnceLock<Vec<String>> = OnceLock::new();
    VARIANTS.get_or_init(|| {
        (0u8..1 << ReqKind::ALL.len())
            .map(|mask| {
                let tags: Vec<&str> = ReqKind::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, k)| k.tag())
                    .collect();
                tags.join(" + ")
            })
            .collect()
    })
}

/// Remove every bracketed requirement tag from a description string.
pub fn strip_requirement_tags(text: &str) -> String {
    let mut out = text.to_string();
    for variant in tag_variants() {
        out = out.replace(&format!("[{variant}]"), "");
    }
    out.trim().to_string()
}

/// Whether a marker element's text is a requirement tag rather than a
/// free-text note. The index writes tags both bare and bracketed.
pub fn is_tag_text(text: &str) -> bool {
    tag_variants()
        .iter()
        .any(|v| text == v || text == format!("[{v}]"))
}
