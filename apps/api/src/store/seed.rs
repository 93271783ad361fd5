//! Fixed sample content loaded at startup.

use tracing::info;

use crate::models::{
    Category, GroupType, NewChecklistItem, NewResource, NewSupportGroup, Phase,
};
use crate::store::Store;

pub fn populate(store: &mut Store) {
    for resource in sample_resources() {
        store.resources.create(resource);
    }
    for item in sample_checklist_items() {
        store.checklist_items.create(item);
    }
    for group in sample_support_groups() {
        store.support_groups.create(group);
    }

    info!(
        resources = store.resources.len(),
        checklist_items = store.checklist_items.len(),
        support_groups = store.support_groups.len(),
        "Seeded sample data"
    );
}

fn resource(
    title: &str,
    description: &str,
    category: Category,
    phase: Phase,
    content: &str,
    download_url: Option<&str>,
    featured: bool,
) -> NewResource {
    NewResource {
        title: title.to_string(),
        description: description.to_string(),
        category,
        phase,
        content: content.to_string(),
        download_url: download_url.map(str::to_string),
        featured,
    }
}

fn sample_resources() -> Vec<NewResource> {
    vec![
        resource(
            "Understanding ICU Delirium",
            "A comprehensive guide for patients and families about managing confusion and disorientation during recovery.",
            Category::SymptomGuides,
            Phase::Immediate,
            "ICU delirium is a common condition affecting cognitive function during critical care...",
            None,
            true,
        ),
        resource(
            "Family Communication Strategies",
            "Tools and techniques for effective communication during the recovery process.",
            Category::DownloadableGuides,
            Phase::Immediate,
            "Effective communication between patients, families, and medical teams is crucial...",
            Some("/downloads/communication-guide.pdf"),
            true,
        ),
        resource(
            "Physical Recovery Checklist",
            "Step-by-step checklist to track physical recovery milestones.",
            Category::Checklists,
            Phase::ShortTerm,
            "This checklist helps track your physical recovery progress...",
            None,
            false,
        ),
        resource(
            "Emotional Adjustment Guide",
            "Understanding and managing emotional changes during recovery.",
            Category::SymptomGuides,
            Phase::ShortTerm,
            "Recovery involves not just physical healing but emotional adjustment...",
            None,
            false,
        ),
        resource(
            "Return to Work Planning",
            "Comprehensive guide for planning your return to work and daily activities.",
            Category::DownloadableGuides,
            Phase::LongTerm,
            "Returning to work after ICU recovery requires careful planning...",
            Some("/downloads/return-to-work.pdf"),
            false,
        ),
    ]
}

fn checklist_item(
    title: &str,
    description: &str,
    phase: Phase,
    week: u32,
    order_index: i32,
) -> NewChecklistItem {
    NewChecklistItem {
        title: title.to_string(),
        description: description.to_string(),
        phase,
        week,
        order_index,
    }
}

fn sample_checklist_items() -> Vec<NewChecklistItem> {
    vec![
        checklist_item(
            "Meet with your primary nurse",
            "Establish communication preferences and ask questions",
            Phase::Immediate,
            1,
            1,
        ),
        checklist_item(
            "Complete orientation assessment",
            "Basic cognitive and physical assessment",
            Phase::Immediate,
            1,
            2,
        ),
        checklist_item(
            "Practice breathing exercises",
            "Complete at least 3 guided breathing sessions",
            Phase::Immediate,
            1,
            3,
        ),
        checklist_item(
            "Begin physical therapy",
            "Start with basic mobility exercises",
            Phase::ShortTerm,
            2,
            1,
        ),
        checklist_item(
            "Set recovery goals",
            "Work with your team to establish short-term goals",
            Phase::ShortTerm,
            2,
            2,
        ),
    ]
}

fn sample_support_groups() -> Vec<NewSupportGroup> {
    let langs = |l: &[&str]| l.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        NewSupportGroup {
            name: "ICU Recovery Support Group".to_string(),
            description: "Virtual support group for ICU survivors and their families".to_string(),
            group_type: GroupType::Virtual,
            contact_info: "support@recoverypath.com".to_string(),
            schedule: Some("Tuesdays 7pm PST".to_string()),
            languages: langs(&["English", "Spanish"]),
        },
        NewSupportGroup {
            name: "Family Caregiver Circle".to_string(),
            description: "Support group specifically for family members and caregivers"
                .to_string(),
            group_type: GroupType::Virtual,
            contact_info: "family@recoverypath.com".to_string(),
            schedule: Some("Thursdays 6pm PST".to_string()),
            languages: langs(&["English"]),
        },
        NewSupportGroup {
            name: "Local Recovery Meetup".to_string(),
            description: "In-person support group in major metropolitan areas".to_string(),
            group_type: GroupType::Local,
            contact_info: "1-555-SUPPORT".to_string(),
            schedule: Some("First Saturday of each month".to_string()),
            languages: langs(&["English", "Spanish", "Chinese"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let store = Store::seeded();
        assert_eq!(store.resources.len(), 5);
        assert_eq!(store.checklist_items.len(), 5);
        assert_eq!(store.support_groups.len(), 3);
        assert_eq!(store.contact_requests.len(), 0);
    }

    #[test]
    fn test_delirium_guide_is_featured_symptom_guide() {
        let store = Store::seeded();
        let delirium = store
            .resources
            .iter()
            .find(|r| r.title == "Understanding ICU Delirium")
            .unwrap();
        assert_eq!(delirium.category, Category::SymptomGuides);
        assert_eq!(delirium.phase, Phase::Immediate);
        assert!(delirium.featured);
        assert!(delirium.download_url.is_none());
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let a = Store::seeded();
        let b = Store::seeded();
        let titles = |s: &Store| s.resources.iter().map(|r| r.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&a), titles(&b));
    }
}
