use proptest::prelude::*;
use vot_romania::data::{PollingStationInfo, PollingStationRepository};
use vot_romania::search::{
    AddressQuery, ExhaustiveResolver, IndexedResolver, MatchRank, StationResolver,
};

const LOCALITIES: &[&str] = &["Sector 1", "SECTOR 1", "Sector 2", "Cluj-Napoca", "Iași", "Iasi"];
const STREETS: &[&str] = &[
    "Calea Victoriei",
    "Cal. Victoriei",
    "Strada Lipscani",
    "Str. Lipscani",
    "Bulevardul Unirii",
    "Șoseaua Kiseleff",
];
const NUMBERS: &[&str] = &["1", "10", "10A", "Nr. 10", "10 a"];

fn station_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (
        0..LOCALITIES.len(),
        0..STREETS.len(),
        0..NUMBERS.len(),
    )
}

fn field(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("  ".to_string())),
        (0..options.len()).prop_map(move |i| Some(options[i].to_string())),
    ]
}

fn build(rows: Vec<(usize, usize, usize)>) -> PollingStationRepository {
    let stations = rows
        .into_iter()
        .enumerate()
        .map(|(id, (l, s, n))| PollingStationInfo {
            id: id as u32,
            county: "Test".to_string(),
            locality: LOCALITIES[l].to_string(),
            street: STREETS[s].to_string(),
            number: NUMBERS[n].to_string(),
            name: format!("Station {id}"),
            address: String::new(),
            capacity: None,
        })
        .collect();
    PollingStationRepository::new(stations).expect("ids are unique")
}

proptest! {
    #[test]
    fn indexed_and_exhaustive_resolvers_agree(
        rows in prop::collection::vec(station_strategy(), 0..40),
        locality in field(LOCALITIES),
        street in field(STREETS),
        number in field(NUMBERS),
    ) {
        let repository = build(rows);
        let query = AddressQuery { locality, street, number };

        let Some(normalized) = query.normalize() else {
            return Ok(());
        };

        let exhaustive: Vec<(MatchRank, usize)> = ExhaustiveResolver
            .resolve(&normalized, &repository)
            .into_iter()
            .map(|candidate| (candidate.rank, candidate.position))
            .collect();
        let indexed: Vec<(MatchRank, usize)> = IndexedResolver
            .resolve(&normalized, &repository)
            .into_iter()
            .map(|candidate| (candidate.rank, candidate.position))
            .collect();

        prop_assert_eq!(&exhaustive, &indexed);

        // best rank first, dataset order within a rank
        for pair in exhaustive.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1));
        }
    }
}
