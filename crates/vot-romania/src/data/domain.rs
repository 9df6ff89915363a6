use serde::{Deserialize, Serialize};

/// A polling station and the address attributes used to match citizens against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingStationInfo {
    pub id: u32,
    pub county: String,
    pub locality: String,
    pub street: String,
    pub number: String,
    /// Display label, usually the hosting institution.
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSection {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Step-by-step voting instructions for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingGuide {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<GuideSection>,
}

impl VotingGuide {
    pub fn step_count(&self) -> usize {
        self.sections.iter().map(|section| section.steps.len()).sum()
    }
}

/// Static texts published for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticData {
    pub language: String,
    pub general_info: String,
    pub voters_guide: VotingGuide,
}
