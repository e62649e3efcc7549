// Unit tests for the LGC search pipeline

use lgc_directory::core::{exact_matches, merge_matches, resolve_suggestions, SearchQuery};
use lgc_directory::models::Member;
use lgc_directory::services::directory::default_members;
use std::collections::HashSet;

fn member(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        designation: "Member".to_string(),
        photo_url: String::new(),
        projects_count: 0,
        likes_count: 0,
        is_core: false,
    }
}

fn two_member_directory() -> Vec<Member> {
    vec![member("harsha-sai", "HARSHA SAI"), member("kanishk-k", "KANISHK K")]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pipeline(query: &str, suggestions: &[&str], directory: &[Member]) -> Vec<String> {
    let query = SearchQuery::new(query).unwrap();
    let exact = exact_matches(&query, directory);
    let suggested = resolve_suggestions(&strings(suggestions), directory);
    merge_matches(exact, suggested)
        .into_inner()
        .into_iter()
        .map(|m| m.id)
        .collect()
}

#[test]
fn test_exact_matcher_returns_all_and_only_containing_names() {
    let directory = default_members();

    for raw in ["ha", "SH", "an", "k k", "Verma", "zz", "i"] {
        let Ok(query) = SearchQuery::new(raw) else { continue };
        let matched: HashSet<String> = exact_matches(&query, &directory)
            .into_iter()
            .map(|m| m.id)
            .collect();

        for m in &directory {
            let contains = m.name.to_lowercase().contains(&raw.to_lowercase());
            assert_eq!(matched.contains(&m.id), contains, "query {:?}, member {}", raw, m.id);
        }
    }
}

#[test]
fn test_exact_matcher_is_idempotent() {
    let directory = default_members();
    let query = SearchQuery::new("ha").unwrap();

    assert_eq!(exact_matches(&query, &directory), exact_matches(&query, &directory));
}

#[test]
fn test_oracle_false_positive_is_appended() {
    // substring miss, but a real member name
    let ids = pipeline("kani", &["Harsha Sai"], &two_member_directory());
    assert_eq!(ids, vec!["kanishk-k", "harsha-sai"]);
}

#[test]
fn test_nothing_found_is_empty() {
    let ids = pipeline("zzz", &[], &two_member_directory());
    assert!(ids.is_empty());
}

#[test]
fn test_case_variant_suggestions_collapse() {
    let ids = pipeline("zzz", &["Kanishk K", "kanishk k", "KANISHK K"], &two_member_directory());
    assert_eq!(ids, vec!["kanishk-k"]);
}

#[test]
fn test_member_found_both_ways_keeps_exact_position() {
    let directory = default_members();
    // exact: harsha-sai, shalini, priya-sharma
    let ids = pipeline("sha", &["Priya Sharma", "Shivani", "HARSHA SAI"], &directory);

    assert_eq!(ids, vec!["harsha-sai", "shalini", "priya-sharma", "shivani"]);
}

#[test]
fn test_unknown_suggestions_dropped() {
    let ids = pipeline("kani", &["Kanishka", "K. Kanishk", "Someone Else"], &two_member_directory());
    assert_eq!(ids, vec!["kanishk-k"]);
}

#[test]
fn test_match_set_ids_are_unique() {
    let directory = default_members();
    let suggestion_sets: [&[&str]; 4] = [
        &["SHALINI", "shalini", "SHIVANI"],
        &["HARSHA SAI", "HEMANTH VENKAT", "harsha sai"],
        &[],
        &["rahul verma", "Rahul Verma", "PRIYA SHARMA", "priya sharma"],
    ];

    for raw in ["sh", "ha", "ve", "ma"] {
        for suggestions in suggestion_sets {
            let ids = pipeline(raw, suggestions, &directory);
            let unique: HashSet<&String> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicates for {:?} / {:?}", raw, suggestions);
        }
    }
}

#[test]
fn test_short_query_rejected() {
    assert!(SearchQuery::new("k").is_err());
    assert!(SearchQuery::parse("kan", 4).is_err());
    assert!(SearchQuery::parse("kani", 4).is_ok());
}
