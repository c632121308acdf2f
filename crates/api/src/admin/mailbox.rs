//! Mailbox maintenance and indexing.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, ToElement};

use crate::enums::{CompactIndexAction, ReIndexAction};
use crate::structs::{MailboxByAccountIdSelector, ReindexMailboxInfo};

macro_rules! mailbox_request {
    ($( $(#[$meta:meta])* $name:ident => $element:literal; )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name {
                mbox: MailboxByAccountIdSelector,
            }

            impl $name {
                pub fn new(mbox: MailboxByAccountIdSelector) -> Self {
                    Self { mbox }
                }

                pub fn mbox(&self) -> &MailboxByAccountIdSelector {
                    &self.mbox
                }

                pub fn set_mbox(&mut self, mbox: MailboxByAccountIdSelector) -> &mut Self {
                    self.mbox = mbox;
                    self
                }
            }

            impl ToElement for $name {
                const ELEMENT_NAME: &'static str = $element;

                fn to_element_named(&self, name: &str) -> Element {
                    Element::new(name).with_child(self.mbox.to_element())
                }
            }

            impl Request for $name {
                const NAMESPACE: &'static str = ADMIN_NAMESPACE;
            }
        )+
    };
}

mailbox_request! {
    /// Deletes the mailbox of an account. The account itself is kept.
    DeleteMailbox => "DeleteMailboxRequest";
    GetMailbox => "GetMailboxRequest";
    /// Recomputes folder counts and quota usage.
    RecalculateMailboxCounts => "RecalculateMailboxCountsRequest";
    VerifyIndex => "VerifyIndexRequest";
    GetIndexStats => "GetIndexStatsRequest";
}

/// Purges aged messages, from one mailbox or from every mailbox on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeMessages {
    mbox: Option<MailboxByAccountIdSelector>,
}

impl PurgeMessages {
    pub fn new(mbox: Option<MailboxByAccountIdSelector>) -> Self {
        Self { mbox }
    }

    pub fn mbox(&self) -> Option<&MailboxByAccountIdSelector> {
        self.mbox.as_ref()
    }

    pub fn set_mbox(&mut self, mbox: MailboxByAccountIdSelector) -> &mut Self {
        self.mbox = Some(mbox);
        self
    }
}

impl ToElement for PurgeMessages {
    const ELEMENT_NAME: &'static str = "PurgeMessagesRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_child(self.mbox.as_ref().map(ToElement::to_element))
    }
}

impl Request for PurgeMessages {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Starts, cancels or polls a mailbox re-index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReIndex {
    mbox: ReindexMailboxInfo,
    action: Option<ReIndexAction>,
}

impl ReIndex {
    pub fn new(mbox: ReindexMailboxInfo, action: Option<ReIndexAction>) -> Self {
        Self { mbox, action }
    }

    pub fn mbox(&self) -> &ReindexMailboxInfo {
        &self.mbox
    }

    pub fn set_mbox(&mut self, mbox: ReindexMailboxInfo) -> &mut Self {
        self.mbox = mbox;
        self
    }

    pub fn action(&self) -> Option<ReIndexAction> {
        self.action
    }

    pub fn set_action(&mut self, action: ReIndexAction) -> &mut Self {
        self.action = Some(action);
        self
    }
}

impl ToElement for ReIndex {
    const ELEMENT_NAME: &'static str = "ReIndexRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("action", self.action)
            .with_child(self.mbox.to_element())
    }
}

impl Request for ReIndex {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Starts or polls compaction of a mailbox index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactIndex {
    mbox: MailboxByAccountIdSelector,
    action: Option<CompactIndexAction>,
}

impl CompactIndex {
    pub fn new(mbox: MailboxByAccountIdSelector, action: Option<CompactIndexAction>) -> Self {
        Self { mbox, action }
    }

    pub fn mbox(&self) -> &MailboxByAccountIdSelector {
        &self.mbox
    }

    pub fn action(&self) -> Option<CompactIndexAction> {
        self.action
    }

    pub fn set_action(&mut self, action: CompactIndexAction) -> &mut Self {
        self.action = Some(action);
        self
    }
}

impl ToElement for CompactIndex {
    const ELEMENT_NAME: &'static str = "CompactIndexRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("action", self.action)
            .with_child(self.mbox.to_element())
    }
}

impl Request for CompactIndex {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Pages through every mailbox on the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllMailboxes {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl GetAllMailboxes {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    pub fn set_offset(&mut self, offset: u32) -> &mut Self {
        self.offset = Some(offset);
        self
    }
}

impl ToElement for GetAllMailboxes {
    const ELEMENT_NAME: &'static str = "GetAllMailboxesRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("limit", self.limit)
            .with_optional_property("offset", self.offset)
    }
}

impl Request for GetAllMailboxes {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}
