use crate::models::{GroupType, SupportGroup};
use crate::store::Store;

pub fn all_support_groups(store: &Store) -> Vec<SupportGroup> {
    store.support_groups.all()
}

/// Equality filter on group type; store order is kept.
pub fn support_groups_by_type(store: &Store, group_type: GroupType) -> Vec<SupportGroup> {
    store
        .support_groups
        .iter()
        .filter(|g| g.group_type == group_type)
        .cloned()
        .collect()
}
