//! Integration tests for the pipeline.
//!
//! These tests drive the full interaction path — sanitize, filter, rank,
//! summarize — over one realistic dataset.

use data_loader::{ContestDataset, ContestRecord, Standing};
use pipeline::{
    apply_filters, cascade, parse_top_n, presence_summary, problem_count_summary,
    rank_range_summary, top_performers, FilterSet, RankBins, Selection,
};

fn record(
    name: &str,
    year: u16,
    department: &str,
    domain: &str,
    score: f64,
    problems_solved: u8,
    raw_rank: u32,
) -> ContestRecord {
    ContestRecord {
        name: name.to_string(),
        department: department.to_string(),
        year,
        domain: domain.to_string(),
        score,
        problems_solved,
        standing: Standing::from_raw_rank(raw_rank),
    }
}

fn create_test_dataset() -> ContestDataset {
    ContestDataset::new(
        "Weekly Contest - 410 [11.08.2024]",
        4,
        vec![
            record("Asha", 2, "CSE", "AIML", 12.0, 3, 742),
            record("Bharat", 3, "ECE", "WebDev", 0.0, 0, 0),
            record("Chitra", 2, "CSE", "CP", 18.0, 4, 55),
            record("Dev", 3, "CSE", "AIML", 7.0, 2, 3_100),
            record("Esha", 2, "ECE", "WebDev", 4.0, 1, 12_400),
            record("Farhan", 3, "MECH", "CP", 0.0, 0, 0),
            record("Gita", 2, "CSE", "AIML", 9.0, 2, 980),
            record("Hari", 4, "MECH", "CP", 3.0, 1, 21_500),
        ],
    )
}

#[test]
fn test_dataset_fixture_is_valid() {
    let dataset = create_test_dataset();
    assert!(dataset.validate().is_ok());
    assert_eq!(dataset.max_rank(), 21_500);
}

#[test]
fn test_filter_then_rank() {
    let dataset = create_test_dataset();
    let selection = FilterSet {
        year: Selection::Only(2),
        department: Selection::Only("CSE".to_string()),
        domain: Selection::All,
    };

    let filtered = apply_filters(dataset.records(), &selection).unwrap();
    assert_eq!(filtered.len(), 3);

    let board = top_performers(&filtered, parse_top_n(Some("2")));
    let names: Vec<&str> = board.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Chitra", "Asha"]);
    assert_eq!(board[0].position, 1);
    assert_eq!(board[0].rank, 55);
    assert_eq!(board[1].position, 2);
    assert_eq!(board[1].rank, 742);
}

#[test]
fn test_filtering_is_idempotent() {
    let dataset = create_test_dataset();
    let selection = FilterSet {
        year: Selection::All,
        department: Selection::Only("CSE".to_string()),
        domain: Selection::Only("AIML".to_string()),
    };

    let once = apply_filters(dataset.records(), &selection).unwrap();
    let twice = apply_filters(&once, &selection).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_leaderboard_never_contains_absent_rows() {
    let dataset = create_test_dataset();

    let board = top_performers(dataset.records(), 100);
    assert_eq!(board.len(), 6);
    assert!(board.iter().all(|row| row.rank > 0));
    assert!(board.windows(2).all(|pair| pair[0].rank <= pair[1].rank));
}

#[test]
fn test_summaries_agree_on_present_count() {
    let dataset = create_test_dataset();
    let selection = FilterSet {
        year: Selection::Only(2),
        department: Selection::All,
        domain: Selection::All,
    };
    let filtered = apply_filters(dataset.records(), &selection).unwrap();

    let presence = presence_summary(&filtered);
    assert_eq!(presence.total(), filtered.len());

    let problems = problem_count_summary(&filtered, dataset.max_problems());
    assert_eq!(problems.counts().len(), dataset.max_problems() as usize + 1);
    assert_eq!(problems.total(), presence.present);

    // Bins sized against the full dataset, not the filtered subset
    let bins = RankBins::standard(dataset.max_rank());
    let buckets = rank_range_summary(&filtered, &bins).unwrap();
    let bucketed: usize = buckets.iter().map(|bucket| bucket.count).sum();
    assert_eq!(bucketed, presence.present);
}

#[test]
fn test_rank_ranges_match_dashboard_layout() {
    let dataset = create_test_dataset();
    let bins = RankBins::standard(dataset.max_rank());

    let buckets = rank_range_summary(dataset.records(), &bins).unwrap();
    let labelled: Vec<(&str, usize)> = buckets
        .iter()
        .map(|bucket| (bucket.label.as_str(), bucket.count))
        .collect();

    assert_eq!(
        labelled,
        vec![
            ("0-1000", 3),
            ("1000-5000", 1),
            ("5000-10000", 0),
            ("10000-15000", 1),
            ("15000-20000", 0),
            ("20000+", 1),
        ]
    );
}

#[test]
fn test_stale_department_resets_after_year_change() {
    let dataset = create_test_dataset();

    // MECH occurs in years 3 and 4, never in year 2
    let selection = FilterSet {
        year: Selection::Only(2),
        department: Selection::Only("MECH".to_string()),
        domain: Selection::All,
    };

    let clean = cascade::sanitize(dataset.records(), &selection);
    assert_eq!(clean.year, Selection::Only(2));
    assert_eq!(clean.department, Selection::All);

    // The cleaned selection must filter without surprises
    let filtered = apply_filters(dataset.records(), &clean).unwrap();
    assert!(!filtered.is_empty());
}

#[test]
fn test_dropdowns_only_offer_nonempty_combinations() {
    let dataset = create_test_dataset();
    let rows = dataset.records();

    for year in cascade::year_choices(rows) {
        for department in cascade::department_choices(rows, &year) {
            for domain in cascade::domain_choices(rows, &year, &department) {
                let selection = FilterSet {
                    year: year.clone(),
                    department: department.clone(),
                    domain,
                };
                let filtered = apply_filters(rows, &selection).unwrap();
                assert!(
                    !filtered.is_empty(),
                    "offered combination {:?} matched no rows",
                    selection
                );
            }
        }
    }
}

#[test]
fn test_empty_filtered_set_degrades_gracefully() {
    let dataset = create_test_dataset();
    // (year 4, MECH) occurs, but AIML never occurs under it. Filtering
    // without sanitizing forces the empty case.
    let selection = FilterSet {
        year: Selection::Only(4),
        department: Selection::Only("MECH".to_string()),
        domain: Selection::Only("AIML".to_string()),
    };

    let filtered = apply_filters(dataset.records(), &selection).unwrap();
    assert!(filtered.is_empty());

    assert!(top_performers(&filtered, 10).is_empty());
    assert_eq!(presence_summary(&filtered).total(), 0);
    assert_eq!(problem_count_summary(&filtered, 4).total(), 0);

    let bins = RankBins::standard(dataset.max_rank());
    let buckets = rank_range_summary(&filtered, &bins).unwrap();
    assert!(buckets.iter().all(|bucket| bucket.count == 0));
}
