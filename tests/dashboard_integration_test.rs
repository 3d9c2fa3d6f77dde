//! End-to-end derivations over the reference fixture.

mod common;

use common::{evaluations, load_fixture};
use cyberdash::aggregation::format_average;
use cyberdash::config::SummaryScope;
use cyberdash::{
    average_rating, average_rating_by_concept, distinct_values, filter, paginate,
    unique_user_count, unique_user_count_by_area, DashboardMetrics, DashboardSession, Facet,
    FilterCriteria, PageSize, SessionOptions, ViewEvent, ViewState,
};
use pretty_assertions::assert_eq;

#[test]
fn test_global_metrics() {
    let dataset = evaluations();
    let metrics = DashboardMetrics::compute(dataset.records());
    assert_eq!(metrics.total_records, 24);
    assert_eq!(metrics.unique_users, 8);
    assert_eq!(metrics.total_concepts, 3);
    assert_eq!(metrics.average_display("N/A"), "0.7");
}

#[test]
fn test_concept_averages_in_first_occurrence_order() {
    let dataset = evaluations();
    let averages = average_rating_by_concept(dataset.records());
    let entries: Vec<_> = averages
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.avg_rating))
        .collect();
    assert_eq!(
        entries,
        vec![("Phishing", 0.63), ("Contraseñas", 0.75), ("Malware", 0.63)]
    );
}

#[test]
fn test_area_user_counts() {
    let dataset = evaluations();
    let counts = unique_user_count_by_area(dataset.records());
    let entries: Vec<_> = counts
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.users))
        .collect();
    assert_eq!(
        entries,
        vec![("Redes", 3), ("Desarrollo", 3), ("Finanzas", 2)]
    );
}

#[test]
fn test_facet_lists() {
    let dataset = evaluations();
    assert_eq!(
        distinct_values(dataset.records(), Facet::Area),
        vec!["Redes", "Desarrollo", "Finanzas"]
    );
    assert_eq!(
        distinct_values(dataset.records(), Facet::Concept),
        vec!["Phishing", "Contraseñas", "Malware"]
    );
}

#[test]
fn test_search_is_case_insensitive_on_name_and_email() {
    let dataset = evaluations();
    let by_name = filter(dataset.records(), &FilterCriteria::new().with_search("JO"));
    let emails: Vec<_> = by_name.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails.len(), 6);
    assert!(emails
        .iter()
        .all(|e| *e == "jorge.diaz@corp.com" || *e == "joaquin.soto@corp.com"));

    let by_email = filter(dataset.records(), &FilterCriteria::new().with_search("@corp"));
    assert_eq!(by_email.len(), 24);
}

#[test]
fn test_combined_filters() {
    let dataset = evaluations();
    let criteria = FilterCriteria::new()
        .with_area("Desarrollo")
        .with_concept("Malware");
    let matched = filter(dataset.records(), &criteria);
    assert_eq!(matched.len(), 3);
    assert_eq!(unique_user_count(&matched), 3);
    assert_eq!(average_rating(&matched), Some(1.0));

    let none = filter(
        dataset.records(),
        &FilterCriteria::new().with_area("desarrollo"),
    );
    assert!(none.is_empty());
    assert_eq!(format_average(average_rating(&none), "N/A"), "N/A");
}

#[test]
fn test_paging_through_filtered_records() {
    let dataset = evaluations();
    let matched = filter(dataset.records(), &FilterCriteria::new().with_area("Redes"));
    assert_eq!(matched.len(), 9);

    let pages: Vec<usize> = (1..=3).map(|p| paginate(&matched, p, 5).len()).collect();
    assert_eq!(pages, vec![5, 4, 0]);
    assert_eq!(paginate(&matched, 2, 5)[0].display_key(), "jorge.diaz@corp.com-Malware");
}

#[test]
fn test_view_state_session_flow() {
    let mut state = ViewState::with_page_size(evaluations(), PageSize::Five);
    assert_eq!(state.total_pages(), 5);

    state.apply(ViewEvent::PageChanged(4)).unwrap();
    state.apply(ViewEvent::SearchChanged("jo".into())).unwrap();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.filtered_count(), 6);
    assert_eq!(state.total_pages(), 2);

    state.apply(ViewEvent::NextPage).unwrap();
    assert_eq!(state.visible_page().len(), 1);

    state.apply(ViewEvent::PageSizeChanged(20)).unwrap();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.visible_page().len(), 6);
}

#[test]
fn test_session_snapshot_with_filtered_charts() {
    let mut session = DashboardSession::new(evaluations());
    session
        .dispatch(ViewEvent::AreaChanged("Finanzas".into()))
        .unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.global_metrics.unique_users, 8);
    assert_eq!(snapshot.filtered_metrics.unique_users, 2);
    assert_eq!(snapshot.area_chart.len(), 1);
    assert_eq!(snapshot.area_chart.get("Finanzas"), Some(2));
    assert_eq!(snapshot.concept_chart.get("Malware"), Some(0.0));
    assert_eq!(snapshot.facets.areas.len(), 3);
    assert_eq!(snapshot.page.len(), 6);
    assert_eq!(snapshot.summary.total, 6);
}

#[test]
fn test_session_snapshot_with_dataset_charts() {
    let options = SessionOptions {
        summary_scope: SummaryScope::Dataset,
        ..SessionOptions::default()
    };
    let mut session = DashboardSession::with_options(evaluations(), options);
    session
        .dispatch(ViewEvent::AreaChanged("Finanzas".into()))
        .unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.area_chart.len(), 3);
    assert_eq!(snapshot.concept_chart.get("Contraseñas"), Some(0.75));
}

#[test]
fn test_malformed_fixture_loads_with_poisoned_values() {
    let (dataset, report) = load_fixture("malformed.json");
    assert_eq!(dataset.len(), 4);
    assert_eq!(report.records, 4);
    assert_eq!(report.malformed, 3);

    let jorge = &dataset[1];
    assert_eq!(jorge.age, 0);
    assert!(jorge.rating.is_nan());

    let placeholder = &dataset[3];
    assert_eq!(placeholder.email, "");
    assert!(placeholder.rating.is_nan());

    let metrics = DashboardMetrics::compute(dataset.records());
    assert_eq!(metrics.average_display("N/A"), "NaN");
    // The empty email of the non-object element counts as a user
    assert_eq!(metrics.unique_users, 4);
}
