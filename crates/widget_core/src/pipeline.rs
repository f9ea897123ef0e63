//! Filter-sort pipeline: catalog + query -> visible projects, in display order.
//!
//! Steps always run in the same order: text match, tag filter, title sort.
//! The pipeline is total; an empty result is a valid answer.

use std::cmp::Ordering;

use shared::{ProjectRecord, QueryState, SortOrder, TagFilter};

pub fn apply<'a, I>(catalog: I, query: &QueryState) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let needle = query.search_text.to_lowercase();
    let mut matches: Vec<&ProjectRecord> = catalog
        .into_iter()
        .filter(|project| matches_text(project, &needle))
        .filter(|project| matches_tag(project, query.tag_filter))
        .collect();
    sort_by_title(&mut matches, query.sort_order);
    matches
}

/// `needle` must already be lowercased.
pub fn matches_text(project: &ProjectRecord, needle: &str) -> bool {
    needle.is_empty()
        || project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
}

pub fn matches_tag(project: &ProjectRecord, filter: TagFilter) -> bool {
    match filter {
        TagFilter::All => true,
        TagFilter::Only(tag) => project.has_tag(tag),
    }
}

pub fn sort_by_title(projects: &mut [&ProjectRecord], order: SortOrder) {
    // slice::sort_by is stable
    projects.sort_by(|a, b| compare_titles(&a.title, &b.title, order));
}

pub fn compare_titles(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
