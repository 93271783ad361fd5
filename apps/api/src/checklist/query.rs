use crate::models::{ChecklistItem, Phase};
use crate::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistFilter {
    pub phase: Option<Phase>,
    pub week: Option<u32>,
}

impl ChecklistFilter {
    pub fn matches(&self, item: &ChecklistItem) -> bool {
        self.phase.map_or(true, |p| item.phase == p) && self.week.map_or(true, |w| item.week == w)
    }

    /// Matching items in ascending `order_index`. Ties keep insertion order.
    pub fn apply(&self, store: &Store) -> Vec<ChecklistItem> {
        let mut items: Vec<ChecklistItem> = store
            .checklist_items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        // stable
        items.sort_by_key(|item| item.order_index);
        items
    }
}

pub fn all_checklist_items(store: &Store) -> Vec<ChecklistItem> {
    ChecklistFilter::default().apply(store)
}

pub fn checklist_items_by_phase(store: &Store, phase: Phase) -> Vec<ChecklistItem> {
    ChecklistFilter {
        phase: Some(phase),
        week: None,
    }
    .apply(store)
}

pub fn checklist_items_by_week(store: &Store, week: u32) -> Vec<ChecklistItem> {
    ChecklistFilter {
        phase: None,
        week: Some(week),
    }
    .apply(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewChecklistItem;

    fn item(title: &str, phase: Phase, week: u32, order_index: i32) -> NewChecklistItem {
        NewChecklistItem {
            title: title.to_string(),
            description: String::new(),
            phase,
            week,
            order_index,
        }
    }

    fn titles(items: &[ChecklistItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_phase_items_sorted_by_order_index() {
        let mut store = Store::new();
        for (title, idx) in [("c", 3), ("a", 1), ("b", 2), ("z", -1)] {
            store.checklist_items.create(item(title, Phase::Immediate, 1, idx));
        }
        store.checklist_items.create(item("other", Phase::LongTerm, 1, 0));

        let found = checklist_items_by_phase(&store, Phase::Immediate);
        assert_eq!(titles(&found), vec!["z", "a", "b", "c"]);
    }

    #[test]
    fn test_equal_order_index_keeps_insertion_order() {
        let mut store = Store::new();
        for title in ["first", "second", "third"] {
            store.checklist_items.create(item(title, Phase::ShortTerm, 2, 1));
        }
        store.checklist_items.create(item("zero", Phase::ShortTerm, 2, 0));

        let found = checklist_items_by_phase(&store, Phase::ShortTerm);
        assert_eq!(titles(&found), vec!["zero", "first", "second", "third"]);
    }

    #[test]
    fn test_all_items_sorted_across_phases() {
        let store = Store::seeded();
        let all = all_checklist_items(&store);
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].order_index <= w[1].order_index));
        // seeded order_index 1 appears for both phases; immediate was inserted first
        assert_eq!(
            titles(&all[..2]),
            vec!["Meet with your primary nurse", "Begin physical therapy"]
        );
    }

    #[test]
    fn test_by_week() {
        let store = Store::seeded();
        assert_eq!(
            titles(&checklist_items_by_week(&store, 2)),
            vec!["Begin physical therapy", "Set recovery goals"]
        );
        assert!(checklist_items_by_week(&store, 9).is_empty());
    }

    #[test]
    fn test_phase_and_week_combined() {
        let store = Store::seeded();
        let filter = ChecklistFilter {
            phase: Some(Phase::Immediate),
            week: Some(2),
        };
        assert!(filter.apply(&store).is_empty());

        let filter = ChecklistFilter {
            phase: Some(Phase::Immediate),
            week: Some(1),
        };
        assert_eq!(filter.apply(&store).len(), 3);
    }
}
