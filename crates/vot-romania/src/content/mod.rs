//! Multilingual content session.
//!
//! The session is a plain value advanced by [`ContentSessionState::reduce`]. The owner
//! applies actions one at a time in arrival order; no transition can fail, an action
//! that does not apply simply returns the state unchanged.

mod session;

pub use session::{ContentAction, ContentSessionState};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        ApplicationDataSnapshot, ContentRepository, DataProvider, PollingStationRepository,
        SampleDataProvider, StaticData, VotingGuide,
    };
    use std::sync::Arc;

    fn entry(language: &str, info: &str) -> StaticData {
        StaticData {
            language: language.to_string(),
            general_info: info.to_string(),
            voters_guide: VotingGuide {
                title: format!("{info} guide"),
                sections: Vec::new(),
            },
        }
    }

    fn snapshot(entries: Vec<StaticData>) -> Arc<ApplicationDataSnapshot> {
        Arc::new(ApplicationDataSnapshot::new(
            ContentRepository::new(entries).expect("valid content"),
            PollingStationRepository::default(),
        ))
    }

    #[test]
    fn starts_empty_with_default_language() {
        let state = ContentSessionState::default();
        assert_eq!(state.selected_language, "Ro");
        assert!(!state.is_ready());
        assert!(state.voting_guide.is_none());
        assert!(state.polling_stations().is_empty());
    }

    #[test]
    fn snapshot_populates_selected_language() {
        let loaded = Arc::new(SampleDataProvider.load().expect("sample loads"));
        let state = ContentSessionState::new("Ro").reduce(ContentAction::LoadDataDone(loaded.clone()));

        let ro = loaded.static_texts.get("Ro").expect("ro present");
        assert!(state.is_ready());
        assert_eq!(state.general_info, ro.general_info);
        assert_eq!(state.voting_guide.as_ref(), Some(&ro.voters_guide));
        assert_eq!(state.languages, vec!["Ro", "En"]);
        assert_eq!(state.polling_stations(), loaded.polling_stations_info.all());
    }

    #[test]
    fn snapshot_without_selected_language_is_ignored() {
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataDone(snapshot(vec![entry("Ro", "ro one")])));
        let before = state.clone();

        let after = state.reduce(ContentAction::LoadDataDone(snapshot(vec![entry("En", "en two")])));
        assert_eq!(after, before);
    }

    #[test]
    fn first_snapshot_without_default_language_stays_empty() {
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataDone(snapshot(vec![entry("En", "en")])));
        assert!(!state.is_ready());
        assert!(state.languages.is_empty());
    }

    #[test]
    fn language_change_before_any_snapshot_is_a_no_op() {
        let state = ContentSessionState::new("Ro");
        let after = state.clone().reduce(ContentAction::ChangeLanguage("En".to_string()));
        assert_eq!(after, state);
    }

    #[test]
    fn unsupported_language_is_a_no_op() {
        let state = ContentSessionState::new("Ro").reduce(ContentAction::LoadDataDone(snapshot(vec![
            entry("Ro", "ro"),
            entry("En", "en"),
        ])));
        let before = state.clone();

        let after = state.reduce(ContentAction::ChangeLanguage("Fr".to_string()));
        assert_eq!(after, before);
        let again = after.reduce(ContentAction::ChangeLanguage("Fr".to_string()));
        assert_eq!(again, before);
    }

    #[test]
    fn language_change_keeps_languages_and_stations() {
        let loaded = Arc::new(SampleDataProvider.load().expect("sample loads"));
        let state = ContentSessionState::new("Ro").reduce(ContentAction::LoadDataDone(loaded.clone()));
        let languages = state.languages.clone();

        let state = state.reduce(ContentAction::ChangeLanguage("En".to_string()));
        let en = loaded.static_texts.get("En").expect("en present");
        assert_eq!(state.selected_language, "En");
        assert_eq!(state.general_info, en.general_info);
        assert_eq!(state.voting_guide.as_ref(), Some(&en.voters_guide));
        assert_eq!(state.languages, languages);
        assert_eq!(state.polling_stations().len(), loaded.polling_stations_info.len());
    }

    #[test]
    fn reload_follows_the_selected_language() {
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataDone(snapshot(vec![
                entry("Ro", "ro one"),
                entry("En", "en one"),
            ])))
            .reduce(ContentAction::ChangeLanguage("En".to_string()))
            .reduce(ContentAction::LoadDataDone(snapshot(vec![
                entry("En", "en two"),
                entry("Hu", "hu two"),
            ])));

        assert_eq!(state.selected_language, "En");
        assert_eq!(state.general_info, "en two");
        assert_eq!(state.languages, vec!["En", "Hu"]);
    }

    #[test]
    fn load_failure_only_sets_error() {
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataDone(snapshot(vec![entry("Ro", "ro")])));
        let before = state.clone();

        let failed = state.reduce(ContentAction::LoadDataFailed("timed out".to_string()));
        assert_eq!(failed.error.as_deref(), Some("timed out"));
        assert_eq!(failed.general_info, before.general_info);
        assert_eq!(failed.voting_guide, before.voting_guide);
        assert_eq!(failed.languages, before.languages);
        assert_eq!(failed.static_texts(), before.static_texts());
    }

    #[test]
    fn successful_load_keeps_earlier_error() {
        let loaded = Arc::new(SampleDataProvider.load().expect("sample loads"));
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataFailed("timeout".to_string()))
            .reduce(ContentAction::LoadDataDone(loaded));

        assert!(state.is_ready());
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn load_request_passes_through() {
        let state = ContentSessionState::new("Ro")
            .reduce(ContentAction::LoadDataDone(snapshot(vec![entry("Ro", "ro")])));
        assert_eq!(state.clone().reduce(ContentAction::LoadData), state);
    }

    #[test]
    fn serializes_display_fields_and_stations() {
        let loaded = Arc::new(SampleDataProvider.load().expect("sample loads"));
        let state = ContentSessionState::new("Ro").reduce(ContentAction::LoadDataDone(loaded.clone()));
        let json = serde_json::to_value(&state).expect("serializes");

        let ro = loaded.static_texts.get("Ro").expect("ro present");
        assert_eq!(json["selectedLanguage"], "Ro");
        assert_eq!(json["generalInfo"], ro.general_info.as_str());
        assert_eq!(
            json["pollingStations"].as_array().map(Vec::len),
            Some(loaded.polling_stations_info.len())
        );
        assert_eq!(json["pollingStations"][0]["id"], 1);
        assert!(json.get("snapshot").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn empty_session_serializes_no_stations() {
        let json = serde_json::to_value(ContentSessionState::default()).expect("serializes");
        assert_eq!(json["pollingStations"], serde_json::json!([]));
    }
}
