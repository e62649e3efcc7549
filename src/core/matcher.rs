use crate::core::query::SearchQuery;
use crate::models::Member;

/// Members whose name contains the query, ignoring case
///
/// No ranking: results keep the order of `members`.
pub fn exact_matches(query: &SearchQuery, members: &[Member]) -> Vec<Member> {
    members
        .iter()
        .filter(|member| member.name.to_lowercase().contains(query.lowered()))
        .cloned()
        .collect()
}
