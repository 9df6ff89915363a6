//! Built-in dataset used when no data files are configured.

use super::domain::{GuideSection, PollingStationInfo, StaticData, VotingGuide};
use super::repository::{ContentRepository, PollingStationRepository};
use super::{ApplicationDataSnapshot, DataLoadError, DataProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataProvider;

impl DataProvider for SampleDataProvider {
    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }

    fn load(&self) -> Result<ApplicationDataSnapshot, DataLoadError> {
        let content = ContentRepository::new(static_texts())?;
        let stations = PollingStationRepository::new(polling_stations())?;
        Ok(ApplicationDataSnapshot::new(content, stations))
    }
}

pub fn polling_stations() -> Vec<PollingStationInfo> {
    const ROWS: &[(u32, &str, &str, &str, &str, &str, Option<u32>)] = &[
        (1, "București", "Sector 1", "Calea Victoriei", "10", "Școala Gimnazială nr. 1", Some(1500)),
        (2, "București", "Sector 1", "Calea Victoriei", "120", "Colegiul Național „Gheorghe Lazăr”", Some(1800)),
        (3, "București", "Sector 1", "Bulevardul Aviatorilor", "30", "Liceul Teoretic „Jean Monnet”", None),
        (4, "București", "Sector 1", "Calea Victoriei", "10", "Școala Gimnazială nr. 1 - corp B", Some(900)),
        (5, "București", "Sector 3", "Strada Lipscani", "5", "Școala Gimnazială nr. 79", Some(1100)),
        (6, "Cluj", "Cluj-Napoca", "Strada Memorandumului", "21", "Colegiul Național „Emil Racoviță”", Some(1400)),
        (7, "Cluj", "Cluj-Napoca", "Calea Dorobanților", "30", "Liceul Teoretic „Onisifor Ghibu”", None),
        (8, "Iași", "Iași", "Bulevardul Ștefan cel Mare și Sfânt", "8", "Colegiul Național Iași", Some(1600)),
        (9, "Mureș", "Târgu Mureș", "Piața Trandafirilor", "1", "Școala Gimnazială „Dacia”", Some(800)),
        (10, "București", "Sector 3", "Calea Victoriei", "10", "Centrul Cultural Sector 3", None),
    ];

    ROWS.iter()
        .map(|&(id, county, locality, street, number, name, capacity)| PollingStationInfo {
            id,
            county: county.to_string(),
            locality: locality.to_string(),
            street: street.to_string(),
            number: number.to_string(),
            name: name.to_string(),
            address: format!("{street} {number}, {locality}"),
            capacity,
        })
        .collect()
}

pub fn static_texts() -> Vec<StaticData> {
    vec![
        StaticData {
            language: "Ro".to_string(),
            general_info: "Votează la secția de votare arondată adresei din actul de identitate."
                .to_string(),
            voters_guide: VotingGuide {
                title: "Ghidul alegătorului".to_string(),
                sections: vec![
                    section(
                        "Înainte de vot",
                        &[
                            "Verifică secția de votare arondată adresei tale.",
                            "Pregătește actul de identitate valabil.",
                        ],
                    ),
                    section(
                        "La secția de votare",
                        &[
                            "Prezintă actul de identitate membrilor biroului electoral.",
                            "Semnează în lista electorală și primește buletinele de vot.",
                            "Aplică ștampila „VOTAT” în cabina de vot.",
                        ],
                    ),
                ],
            },
        },
        StaticData {
            language: "En".to_string(),
            general_info: "Vote at the polling station assigned to the address on your identity card."
                .to_string(),
            voters_guide: VotingGuide {
                title: "Voter's guide".to_string(),
                sections: vec![
                    section(
                        "Before voting",
                        &[
                            "Check which polling station serves your address.",
                            "Bring a valid identity document.",
                        ],
                    ),
                    section(
                        "At the polling station",
                        &[
                            "Show your identity document to the electoral office.",
                            "Sign the electoral roll and collect your ballots.",
                            "Apply the \"VOTAT\" stamp inside the voting booth.",
                        ],
                    ),
                ],
            },
        },
    ]
}

fn section(title: &str, steps: &[&str]) -> GuideSection {
    GuideSection {
        title: title.to_string(),
        steps: steps.iter().map(|step| step.to_string()).collect(),
    }
}
