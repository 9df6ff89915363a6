use crate::infra::ApiState;
use crate::routes::SearchParams;
use clap::Args;
use vot_romania::config::AppConfig;
use vot_romania::content::{ContentAction, ContentSessionState};
use vot_romania::error::AppError;
use vot_romania::search::{AddressQuery, RankedStation};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Locality, e.g. "Sector 1" or "Cluj-Napoca"
    #[arg(long)]
    pub(crate) locality: Option<String>,
    /// Street name, abbreviations such as "Str." are accepted
    #[arg(long)]
    pub(crate) street: Option<String>,
    /// Street number
    #[arg(long)]
    pub(crate) number: Option<String>,
    /// Free-form address line, used when no structured field is given
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// Print the results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ContentArgs {
    /// Language code to display (defaults to the configured language)
    #[arg(long)]
    pub(crate) language: Option<String>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let json = args.json;
    let state = loaded_state()?;
    let query = SearchParams::from(args).into_query();
    let results = state.search.search(&query)?;

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Results unavailable as JSON: {err}"),
        }
    } else {
        render_search(&query, &results);
    }

    Ok(())
}

pub(crate) fn run_content(args: ContentArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let state = ApiState::from_config(&config);

    let mut session = ContentSessionState::new(config.data.default_language.as_str())
        .reduce(ContentAction::LoadData);
    session = match state.store.reload(state.provider.as_ref()) {
        Ok(snapshot) => session.reduce(ContentAction::LoadDataDone(snapshot)),
        Err(err) => session.reduce(ContentAction::LoadDataFailed(err.to_string())),
    };

    if let Some(language) = args.language {
        let requested = language.clone();
        session = session.reduce(ContentAction::ChangeLanguage(language));
        if session.selected_language != requested && session.is_ready() {
            println!(
                "Language '{}' is not available; showing '{}'",
                requested, session.selected_language
            );
        }
    }

    render_content(&session);
    Ok(())
}

fn loaded_state() -> Result<ApiState, AppError> {
    let config = AppConfig::load()?;
    let state = ApiState::from_config(&config);
    state.store.reload(state.provider.as_ref())?;
    Ok(state)
}

fn render_search(query: &AddressQuery, results: &[RankedStation]) {
    let describe = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    println!(
        "Search: locality {} | street {} | number {}",
        describe(&query.locality),
        describe(&query.street),
        describe(&query.number)
    );

    if query.is_blank() {
        println!("Nothing to search for: provide a locality or a street");
        return;
    }

    if results.is_empty() {
        println!("No polling station matches this address");
        return;
    }

    for result in results {
        let station = &result.station;
        let capacity = match station.capacity {
            Some(capacity) => format!(", {capacity} voters"),
            None => String::new(),
        };
        println!(
            "- [{}] #{} {} ({}, {}{})",
            result.rank.label(),
            station.id,
            station.name,
            station.address,
            station.county,
            capacity
        );
    }
}

fn render_content(session: &ContentSessionState) {
    if let Some(error) = &session.error {
        println!("Data load failed: {error}");
    }

    let Some(guide) = &session.voting_guide else {
        println!("No content available for '{}'", session.selected_language);
        return;
    };

    println!(
        "Language: {} (available: {})",
        session.selected_language,
        session.languages.join(", ")
    );
    println!("\n{}", session.general_info);
    println!("\n{} ({} steps)", guide.title, guide.step_count());
    for section in &guide.sections {
        println!("\n{}", section.title);
        for (position, step) in section.steps.iter().enumerate() {
            println!("  {}. {}", position + 1, step);
        }
    }
    println!(
        "\nPolling stations in dataset: {}",
        session.polling_stations().len()
    );
}

impl From<SearchArgs> for SearchParams {
    fn from(args: SearchArgs) -> Self {
        SearchParams {
            locality: args.locality,
            street: args.street,
            number: args.number,
            q: args.query,
        }
    }
}
