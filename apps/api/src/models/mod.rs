pub mod checklist;
pub mod contact;
pub mod resource;
pub mod support_group;
pub mod taxonomy;

pub use checklist::{ChecklistItem, NewChecklistItem};
pub use contact::{ContactRequest, NewContactRequest};
pub use resource::{NewResource, Resource};
pub use support_group::{NewSupportGroup, SupportGroup};
pub use taxonomy::{Category, GroupType, Phase, Urgency};
