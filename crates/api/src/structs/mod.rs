//! Supporting structs nested inside requests.

mod common;
mod mailbox;
mod queue;
mod selectors;
mod zimlet;

pub use common::{
    IdAndAction, IntegerValueAttrib, KeyValuePair, LimitedQuery, NamedElement, ValueAttrib,
    key_value_pairs,
};
pub use mailbox::ReindexMailboxInfo;
pub use queue::{MailQueueAction, MailQueueWithAction, QueueQuery, QueueQueryField, ServerWithQueueAction};
pub use selectors::{
    AccountSelector, CacheEntrySelector, CacheSelector, CosSelector, DomainSelector,
    MailboxByAccountIdSelector, ServerSelector,
};
pub use zimlet::{ZimletAcl, ZimletAclStatusPri, ZimletStatusAttrib};
