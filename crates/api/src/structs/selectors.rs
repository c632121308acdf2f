//! Lookup selectors: `<account by="name">user@example.com</account>` and friends.

use zimbra_soap::{Element, Result, ToElement, TypedCollection, required};

use crate::enums::{AccountBy, CacheEntryBy, CacheEntryType, CosBy, DomainBy, ServerBy, join_tokens};

macro_rules! by_selector {
    ($(#[$meta:meta])* $name:ident, $by:ty, $element:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            by: $by,
            value: String,
        }

        impl $name {
            /// Creates the selector; `value` is trimmed and must not be blank.
            pub fn new(by: $by, value: &str) -> Result<Self> {
                Ok(Self {
                    by,
                    value: required("value", value)?,
                })
            }

            pub fn by(&self) -> $by {
                self.by
            }

            pub fn set_by(&mut self, by: $by) -> &mut Self {
                self.by = by;
                self
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            /// Trims `value` without re-validating it; a blank value is kept.
            pub fn set_value(&mut self, value: &str) -> &mut Self {
                self.value = value.trim().to_string();
                self
            }
        }

        impl ToElement for $name {
            const ELEMENT_NAME: &'static str = $element;

            fn to_element_named(&self, name: &str) -> Element {
                Element::new(name)
                    .with_property("by", self.by)
                    .with_text(self.value.as_str())
            }
        }
    };
}

by_selector!(
    /// Selects an account by name, id or another key.
    AccountSelector,
    AccountBy,
    "account"
);

by_selector!(
    /// Selects a domain.
    DomainSelector,
    DomainBy,
    "domain"
);

by_selector!(
    /// Selects a server.
    ServerSelector,
    ServerBy,
    "server"
);

by_selector!(
    /// Selects a class of service.
    CosSelector,
    CosBy,
    "cos"
);

by_selector!(
    /// Selects one entry within a cache.
    CacheEntrySelector,
    CacheEntryBy,
    "entry"
);

/// Selects a mailbox through its owning account id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxByAccountIdSelector {
    id: String,
}

impl MailboxByAccountIdSelector {
    pub fn new(id: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trims `id` without re-validating it; a blank value is kept.
    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.id = id.trim().to_string();
        self
    }
}

impl ToElement for MailboxByAccountIdSelector {
    const ELEMENT_NAME: &'static str = "mbox";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("id", self.id.as_str())
    }
}

fn cache_types(types: impl IntoIterator<Item = CacheEntryType>) -> Result<Vec<CacheEntryType>> {
    let types: Vec<_> = types.into_iter().collect();
    if types.is_empty() {
        return Err(zimbra_soap::SoapError::invalid_argument(
            "type",
            "at least one cache type is required",
        ));
    }
    Ok(types)
}

/// Describes which caches to flush, and optionally which entries.
///
/// With no entries the whole cache of each type is flushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSelector {
    types: Vec<CacheEntryType>,
    all_servers: Option<bool>,
    entries: TypedCollection<CacheEntrySelector>,
}

impl CacheSelector {
    /// Creates a selector for at least one cache type.
    pub fn new(types: impl IntoIterator<Item = CacheEntryType>) -> Result<Self> {
        Ok(Self {
            types: cache_types(types)?,
            all_servers: None,
            entries: TypedCollection::new(),
        })
    }

    pub fn types(&self) -> &[CacheEntryType] {
        &self.types
    }

    /// Replaces the cache types; an empty list is rejected and the old types are kept.
    pub fn set_types(
        &mut self,
        types: impl IntoIterator<Item = CacheEntryType>,
    ) -> Result<&mut Self> {
        self.types = cache_types(types)?;
        Ok(self)
    }

    pub fn all_servers(&self) -> Option<bool> {
        self.all_servers
    }

    /// Flushes the cache on every server instead of only the receiving one.
    pub fn set_all_servers(&mut self, all_servers: bool) -> &mut Self {
        self.all_servers = Some(all_servers);
        self
    }

    pub fn entries(&self) -> &TypedCollection<CacheEntrySelector> {
        &self.entries
    }

    pub fn add_entry(&mut self, entry: CacheEntrySelector) -> &mut Self {
        self.entries.add(entry);
        self
    }

    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = CacheEntrySelector>) -> &mut Self {
        self.entries = entries.into_iter().collect();
        self
    }
}

impl ToElement for CacheSelector {
    const ELEMENT_NAME: &'static str = "cache";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("type", join_tokens(&self.types))
            .with_optional_property("allServers", self.all_servers)
            .with_collection("entry", self.entries.to_elements("entry"))
    }
}
