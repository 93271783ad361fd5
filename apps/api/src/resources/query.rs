//! Read-only views over the resource table.
//!
//! Every helper preserves store (insertion) order. Multiple criteria in a
//! [`ResourceFilter`] are combined with AND.

use serde::Serialize;

use crate::models::{Category, Phase, Resource};
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFilter {
    pub category: Option<Category>,
    pub phase: Option<Phase>,
    pub featured_only: bool,
    /// Case-insensitive substring over title, description and content.
    pub search: Option<String>,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &Resource) -> bool {
        let category_match = self.category.map_or(true, |c| resource.category == c);
        let phase_match = self.phase.map_or(true, |p| resource.phase == p);
        let featured_match = !self.featured_only || resource.featured;
        let search_match = self
            .search
            .as_deref()
            .map_or(true, |q| contains_text(resource, &q.to_lowercase()));

        category_match && phase_match && featured_match && search_match
    }

    pub fn apply(&self, store: &Store) -> Vec<Resource> {
        store
            .resources
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// `needle` must already be lowercased.
fn contains_text(resource: &Resource, needle: &str) -> bool {
    resource.title.to_lowercase().contains(needle)
        || resource.description.to_lowercase().contains(needle)
        || resource.content.to_lowercase().contains(needle)
}

pub fn all_resources(store: &Store) -> Vec<Resource> {
    store.resources.all()
}

pub fn resources_by_category(store: &Store, category: Category) -> Vec<Resource> {
    ResourceFilter {
        category: Some(category),
        ..Default::default()
    }
    .apply(store)
}

pub fn resources_by_phase(store: &Store, phase: Phase) -> Vec<Resource> {
    ResourceFilter {
        phase: Some(phase),
        ..Default::default()
    }
    .apply(store)
}

pub fn featured_resources(store: &Store) -> Vec<Resource> {
    ResourceFilter {
        featured_only: true,
        ..Default::default()
    }
    .apply(store)
}

pub fn get_resource(store: &Store, id: u64) -> Option<Resource> {
    store.resources.get(id)
}

/// Callers reject an empty query before getting here.
pub fn search_resources(store: &Store, query: &str) -> Vec<Resource> {
    let needle = query.to_lowercase();
    store
        .resources
        .iter()
        .filter(|r| contains_text(r, &needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: Category,
    pub count: usize,
}

/// Resource count per category, in fixed category order. Empty categories are included.
pub fn category_summaries(store: &Store) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            id: category,
            count: store.resources.iter().filter(|r| r.category == category).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewResource;

    fn titles(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_every_resource_is_in_its_own_category() {
        let store = Store::seeded();
        for r in store.resources.iter() {
            assert!(resources_by_category(&store, r.category).contains(r));
            assert!(resources_by_phase(&store, r.phase).contains(r));
        }
    }

    #[test]
    fn test_featured() {
        let store = Store::seeded();
        assert_eq!(
            titles(&featured_resources(&store)),
            vec!["Understanding ICU Delirium", "Family Communication Strategies"]
        );
    }

    #[test]
    fn test_category_checklists_excludes_delirium() {
        let store = Store::seeded();
        let found = resources_by_category(&store, Category::Checklists);
        assert_eq!(titles(&found), vec!["Physical Recovery Checklist"]);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let store = Store::new();
        assert!(resources_by_phase(&store, Phase::LongTerm).is_empty());
        assert!(featured_resources(&store).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let store = Store::seeded();
        // title
        assert_eq!(titles(&search_resources(&store, "DELIRIUM")), vec!["Understanding ICU Delirium"]);
        // description only
        assert_eq!(
            titles(&search_resources(&store, "milestones")),
            vec!["Physical Recovery Checklist"]
        );
        // content only
        assert_eq!(
            titles(&search_resources(&store, "careful planning")),
            vec!["Return to Work Planning"]
        );
    }

    #[test]
    fn test_search_matches_exactly_the_substring_set() {
        let store = Store::seeded();
        for q in ["recovery", "ICU", "communication", "zzz", "e"] {
            let needle = q.to_lowercase();
            let expected: Vec<Resource> = store
                .resources
                .iter()
                .filter(|r| {
                    [&r.title, &r.description, &r.content]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();
            assert_eq!(search_resources(&store, q), expected, "query {q}");
        }
    }

    #[test]
    fn test_search_breathing_only_matches_resource_text() {
        let mut store = Store::seeded();
        // seed resources never mention breathing; checklist items are not searched
        assert!(search_resources(&store, "breathing").is_empty());

        store.resources.create(NewResource {
            title: "Lung Recovery".to_string(),
            description: "Rebuilding stamina".to_string(),
            category: Category::SymptomGuides,
            phase: Phase::ShortTerm,
            content: "Practice breathing exercises twice a day.".to_string(),
            download_url: None,
            featured: false,
        });
        assert_eq!(titles(&search_resources(&store, "Breathing")), vec!["Lung Recovery"]);
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let store = Store::seeded();
        for category in Category::ALL {
            for phase in Phase::ALL {
                let combined = ResourceFilter {
                    category: Some(category),
                    phase: Some(phase),
                    featured_only: true,
                    search: None,
                }
                .apply(&store);

                let by_phase = resources_by_phase(&store, phase);
                let featured = featured_resources(&store);
                let expected: Vec<Resource> = resources_by_category(&store, category)
                    .into_iter()
                    .filter(|r| by_phase.contains(r) && featured.contains(r))
                    .collect();
                assert_eq!(combined, expected);
            }
        }
    }

    #[test]
    fn test_combined_filter_with_search() {
        let store = Store::seeded();
        let filter = ResourceFilter {
            phase: Some(Phase::ShortTerm),
            search: Some("Recovery".to_string()),
            ..Default::default()
        };
        assert_eq!(
            titles(&filter.apply(&store)),
            vec!["Physical Recovery Checklist", "Emotional Adjustment Guide"]
        );
    }

    #[test]
    fn test_default_filter_returns_all() {
        let store = Store::seeded();
        assert_eq!(ResourceFilter::default().apply(&store), all_resources(&store));
    }

    #[test]
    fn test_category_summaries() {
        let store = Store::seeded();
        let counts: Vec<_> = category_summaries(&store)
            .into_iter()
            .map(|s| (s.id, s.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Category::SymptomGuides, 2),
                (Category::Checklists, 1),
                (Category::DownloadableGuides, 2),
            ]
        );
        assert!(category_summaries(&Store::new()).iter().all(|s| s.count == 0));
    }
}
