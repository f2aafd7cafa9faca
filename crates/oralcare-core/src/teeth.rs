//! Clinical tooth map (FDI numbering) for each indexed input.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Plaque surfaces: positions 0-3 maxillary, 4-5 mandibular.
pub const PLAQUE_TEETH: [u8; 6] = [12, 16, 24, 26, 32, 44];

/// Number of maxillary entries at the front of [`PLAQUE_TEETH`].
pub const PLAQUE_MAXILLARY: usize = 4;

/// Teeth measured on the buccal side, three sites each.
pub const PERIO_TEETH: [u8; 8] = [16, 17, 26, 27, 36, 37, 46, 47];

pub const INTERDENTAL_SITES: [&str; 4] = ["16-17", "26-27", "36-37", "46-47"];

/// Probing site on a tooth's buccal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProbingSite {
    Mesial,
    Mid,
    Distal,
}

impl ProbingSite {
    pub const ALL: [ProbingSite; 3] = [ProbingSite::Mesial, ProbingSite::Mid, ProbingSite::Distal];

    pub fn offset(self) -> usize {
        match self {
            ProbingSite::Mesial => 0,
            ProbingSite::Mid => 1,
            ProbingSite::Distal => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProbingSite::Mesial => "mesial",
            ProbingSite::Mid => "mid",
            ProbingSite::Distal => "distal",
        }
    }

    pub fn parse(s: &str) -> Option<ProbingSite> {
        match s.to_ascii_lowercase().as_str() {
            "mesial" | "m" => Some(ProbingSite::Mesial),
            "mid" => Some(ProbingSite::Mid),
            "distal" | "d" => Some(ProbingSite::Distal),
            _ => None,
        }
    }
}

pub fn plaque_index(tooth: u8) -> Result<usize, CoreError> {
    PLAQUE_TEETH
        .iter()
        .position(|&t| t == tooth)
        .ok_or(CoreError::UnknownTooth {
            field: "plaque",
            tooth,
        })
}

/// Entry index into the 24 probing depths: `tooth_position * 3 + site`.
pub fn perio_index(tooth: u8, site: ProbingSite) -> Result<usize, CoreError> {
    let position = PERIO_TEETH
        .iter()
        .position(|&t| t == tooth)
        .ok_or(CoreError::UnknownTooth {
            field: "perio",
            tooth,
        })?;
    Ok(position * 3 + site.offset())
}

/// Accepts `16-17` as well as `#16-17`.
pub fn interdental_index(site: &str) -> Result<usize, CoreError> {
    let trimmed = site.trim().trim_start_matches('#');
    INTERDENTAL_SITES
        .iter()
        .position(|&s| s == trimmed)
        .ok_or_else(|| CoreError::UnknownSite(site.to_string()))
}
