//! In-memory entity store.
//!
//! Each entity type lives in its own [`Table`], which hands out ids from a
//! per-table counter starting at 1. Ids are never reused. Callers always get
//! clones back; the store keeps sole ownership of its rows.

pub mod seed;

use chrono::{DateTime, Utc};

use crate::models::{
    ChecklistItem, ContactRequest, NewChecklistItem, NewContactRequest, NewResource,
    NewSupportGroup, Resource, SupportGroup,
};

/// A stored entity built from a draft (the record without its id).
pub trait Record: Clone {
    type Draft;

    fn id(&self) -> u64;

    /// Assemble the full record. `now` is ignored by types without a
    /// creation timestamp.
    fn from_draft(draft: Self::Draft, id: u64, now: DateTime<Utc>) -> Self;
}

impl Record for Resource {
    type Draft = NewResource;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(draft: NewResource, id: u64, now: DateTime<Utc>) -> Self {
        Resource {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            phase: draft.phase,
            content: draft.content,
            download_url: draft.download_url,
            featured: draft.featured,
            created_at: now,
        }
    }
}

impl Record for ChecklistItem {
    type Draft = NewChecklistItem;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(draft: NewChecklistItem, id: u64, _now: DateTime<Utc>) -> Self {
        ChecklistItem {
            id,
            title: draft.title,
            description: draft.description,
            phase: draft.phase,
            week: draft.week,
            order_index: draft.order_index,
        }
    }
}

impl Record for SupportGroup {
    type Draft = NewSupportGroup;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(draft: NewSupportGroup, id: u64, _now: DateTime<Utc>) -> Self {
        SupportGroup {
            id,
            name: draft.name,
            description: draft.description,
            group_type: draft.group_type,
            contact_info: draft.contact_info,
            schedule: draft.schedule,
            languages: draft.languages,
        }
    }
}

impl Record for ContactRequest {
    type Draft = NewContactRequest;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(draft: NewContactRequest, id: u64, now: DateTime<Utc>) -> Self {
        ContactRequest {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            subject: draft.subject,
            message: draft.message,
            urgency: draft.urgency,
            created_at: now,
        }
    }
}

/// Insertion-ordered rows of one entity type.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    pub fn create(&mut self, draft: T::Draft) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = T::from_draft(draft, id, Utc::now());
        self.rows.push(record.clone());
        record
    }

    /// Borrowed view in insertion order, for the query layer.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.rows.iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Process-wide data, constructed once at startup and injected via `AppState`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub resources: Table<Resource>,
    pub checklist_items: Table<ChecklistItem>,
    pub support_groups: Table<SupportGroup>,
    pub contact_requests: Table<ContactRequest>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the fixed sample content.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        store
    }

    pub fn create_contact_request(&mut self, request: NewContactRequest) -> ContactRequest {
        self.contact_requests.create(request)
    }
}
