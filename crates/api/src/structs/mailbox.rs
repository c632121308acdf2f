use zimbra_soap::{Element, Result, ToElement, required};

use crate::enums::{ReindexType, join_tokens};

/// Mailbox to re-index, optionally restricted to item types or item ids.
///
/// Zimbra honours only one restriction at a time; when both are set the
/// server uses `types`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReindexMailboxInfo {
    id: String,
    types: Vec<ReindexType>,
    ids: Vec<String>,
}

impl ReindexMailboxInfo {
    /// Creates the selector for the mailbox of account `id`.
    pub fn new(id: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            types: Vec::new(),
            ids: Vec::new(),
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

    pub fn types(&self) -> &[ReindexType] {
        &self.types
    }

    pub fn set_types(&mut self, types: impl IntoIterator<Item = ReindexType>) -> &mut Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn set_ids<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ids = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        self
    }
}

impl ToElement for ReindexMailboxInfo {
    const ELEMENT_NAME: &'static str = "mbox";

    fn to_element_named(&self, name: &str) -> Element {
        let types = (!self.types.is_empty()).then(|| join_tokens(&self.types));
        let ids = (!self.ids.is_empty()).then(|| self.ids.join(","));
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_optional_property("types", types)
            .with_optional_property("ids", ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindex_info() {
        let mut mbox = ReindexMailboxInfo::new("acct-1").unwrap();
        mbox.set_types([ReindexType::Message, ReindexType::Contact])
            .set_ids(["1", " ", "2"]);

        assert_eq!(mbox.ids(), ["1", "2"]);
        assert_eq!(
            mbox.to_xml().unwrap(),
            r#"<mbox id="acct-1" ids="1,2" types="message,contact"/>"#
        );
    }
}
