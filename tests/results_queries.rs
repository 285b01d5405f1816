use worldcup_geo::{QueryError, QueryService, Refresh, ResultsStore};

fn store() -> ResultsStore {
    ResultsStore::load().expect("embedded table should load")
}

#[test]
fn every_winner_has_positive_wins_matching_records() {
    let store = store();
    let queries = QueryService::new(&store);
    for country in store.all_countries() {
        let wins = queries.wins_for(&country).expect("listed country should resolve");
        let counted = store.records().iter().filter(|r| r.winner == country).count();
        assert!(wins > 0);
        assert_eq!(wins as usize, counted, "{country}");
    }
}

#[test]
fn wins_sum_to_number_of_finals() {
    let store = store();
    let queries = QueryService::new(&store);
    let total: u32 = store
        .all_countries()
        .iter()
        .map(|c| queries.wins_for(c).unwrap())
        .sum();
    assert_eq!(total, 22);
    assert_eq!(store.total_finals(), 22);
}

#[test]
fn every_year_has_distinct_finalists() {
    let store = store();
    let queries = QueryService::new(&store);
    for year in store.all_years() {
        let result = queries.result_for(year).expect("listed year should resolve");
        assert_ne!(result.winner, result.runner_up, "{year}");
    }
}

#[test]
fn years_and_countries_sorted_and_unique() {
    let store = store();
    let years = store.all_years();
    assert!(years.windows(2).all(|w| w[0] < w[1]));
    let countries = store.all_countries();
    assert!(countries.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn known_results() {
    let store = store();
    let queries = QueryService::new(&store);
    assert_eq!(queries.wins_for("Brazil"), Ok(5));
    assert_eq!(queries.wins_for("Germany"), Ok(4));
    assert_eq!(queries.wins_for("Argentina"), Ok(3));

    let final_2022 = queries.result_for(2022).unwrap();
    assert_eq!(final_2022.winner, "Argentina");
    assert_eq!(final_2022.runner_up, "France");
}

#[test]
fn misses_are_not_found() {
    let store = store();
    let queries = QueryService::new(&store);
    assert_eq!(
        queries.wins_for("Atlantis"),
        Err(QueryError::UnknownCountry("Atlantis".to_string()))
    );
    assert_eq!(queries.result_for(1931), Err(QueryError::UnknownYear(1931)));
    assert_eq!(
        queries.on_year_selected(Some(1931)),
        Refresh::Update("No FIFA World Cup final was played in 1931.".to_string())
    );
}

#[test]
fn load_is_pure() {
    let a = store();
    let b = store();
    assert_eq!(a, b);
    assert_eq!(a.country_wins(), b.country_wins());
}

#[test]
fn map_dataset_serializes_with_column_names() {
    let store = store();
    let json = serde_json::to_value(store.map_dataset()).unwrap();
    assert_eq!(json[0]["Country"], "Brazil");
    assert_eq!(json[0]["Wins"], 5);
    assert_eq!(json.as_array().map(Vec::len), Some(8));
}
