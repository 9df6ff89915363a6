use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::data::{ApplicationDataSnapshot, ContentRepository, PollingStationInfo, VotingGuide};

/// Events that can reach the content session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAction {
    /// A load was requested; the session waits for its outcome.
    LoadData,
    LoadDataDone(Arc<ApplicationDataSnapshot>),
    LoadDataFailed(String),
    ChangeLanguage(String),
}

/// What the citizen currently sees: the selected language, the texts for that
/// language, and the stations from the same snapshot.
///
/// `general_info` and `voting_guide` always belong to `selected_language` once a
/// snapshot has been accepted; every transition looks the entry up before copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSessionState {
    pub selected_language: String,
    pub general_info: String,
    pub voting_guide: Option<VotingGuide>,
    pub languages: Vec<String>,
    #[serde(rename = "pollingStations", serialize_with = "serialize_stations")]
    snapshot: Option<Arc<ApplicationDataSnapshot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContentSessionState {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            selected_language: default_language.into(),
            general_info: String::new(),
            voting_guide: None,
            languages: Vec::new(),
            snapshot: None,
            error: None,
        }
    }

    /// `true` once a snapshot containing the selected language has been accepted.
    pub fn is_ready(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn static_texts(&self) -> Option<&ContentRepository> {
        self.snapshot.as_deref().map(|snapshot| &snapshot.static_texts)
    }

    pub fn polling_stations(&self) -> &[PollingStationInfo] {
        self.snapshot
            .as_deref()
            .map(|snapshot| snapshot.polling_stations_info.all())
            .unwrap_or(&[])
    }

    pub fn reduce(self, action: ContentAction) -> Self {
        match action {
            ContentAction::LoadDataDone(snapshot) => self.on_snapshot_loaded(snapshot),
            ContentAction::LoadDataFailed(message) => self.on_load_failed(message),
            ContentAction::ChangeLanguage(language) => self.on_language_changed(&language),
            ContentAction::LoadData => self,
        }
    }

    /// Accept a freshly loaded snapshot if it has texts for the selected language;
    /// otherwise keep showing what was there before.
    pub fn on_snapshot_loaded(self, snapshot: Arc<ApplicationDataSnapshot>) -> Self {
        let Some(entry) = snapshot.static_texts.get(&self.selected_language) else {
            return self;
        };

        Self {
            general_info: entry.general_info.clone(),
            voting_guide: Some(entry.voters_guide.clone()),
            languages: snapshot.static_texts.languages(),
            snapshot: Some(Arc::clone(&snapshot)),
            ..self
        }
    }

    /// Switch language if the held snapshot has texts for it. Unknown languages,
    /// and any switch before the first snapshot, leave the state untouched.
    pub fn on_language_changed(self, language: &str) -> Self {
        let Some(entry) = self
            .static_texts()
            .and_then(|texts| texts.get(language))
            .cloned()
        else {
            return self;
        };

        Self {
            selected_language: entry.language,
            general_info: entry.general_info,
            voting_guide: Some(entry.voters_guide),
            ..self
        }
    }

    pub fn on_load_failed(self, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..self
        }
    }
}

/// The held snapshot is exposed only through its station list; texts for the
/// selected language are already flattened into the state.
fn serialize_stations<S: Serializer>(
    snapshot: &Option<Arc<ApplicationDataSnapshot>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let stations: &[PollingStationInfo] = snapshot
        .as_deref()
        .map(|snapshot| snapshot.polling_stations_info.all())
        .unwrap_or(&[]);
    stations.serialize(serializer)
}

impl Default for ContentSessionState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LANGUAGE)
    }
}
