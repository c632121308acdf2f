use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::structs::NamedElement;

/// Fixes the priority of calendar items for the given accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixCalendarPriority {
    sync: Option<bool>,
    accounts: TypedCollection<NamedElement>,
}

impl FixCalendarPriority {
    pub fn new(sync: Option<bool>, accounts: impl IntoIterator<Item = NamedElement>) -> Self {
        Self {
            sync,
            accounts: accounts.into_iter().collect(),
        }
    }

    pub fn sync(&self) -> Option<bool> {
        self.sync
    }

    /// Waits for the fix to finish before the server replies.
    pub fn set_sync(&mut self, sync: bool) -> &mut Self {
        self.sync = Some(sync);
        self
    }

    pub fn accounts(&self) -> &TypedCollection<NamedElement> {
        &self.accounts
    }

    pub fn add_account(&mut self, account: NamedElement) -> &mut Self {
        self.accounts.add(account);
        self
    }
}

impl ToElement for FixCalendarPriority {
    const ELEMENT_NAME: &'static str = "FixCalendarPriorityRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("sync", self.sync)
            .with_collection("account", self.accounts.to_elements("account"))
    }
}

impl Request for FixCalendarPriority {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Renames a calendar resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCalendarResource {
    id: String,
    new_name: String,
}

impl RenameCalendarResource {
    pub fn new(id: &str, new_name: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            new_name: required("newName", new_name)?,
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

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Trims `new_name` without re-validating it; a blank value is kept.
    pub fn set_new_name(&mut self, new_name: &str) -> &mut Self {
        self.new_name = new_name.trim().to_string();
        self
    }
}

impl ToElement for RenameCalendarResource {
    const ELEMENT_NAME: &'static str = "RenameCalendarResourceRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_property("newName", self.new_name.as_str())
    }
}

impl Request for RenameCalendarResource {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_calendar_priority_accounts_in_order() {
        let mut request = FixCalendarPriority::new(Some(true), Vec::new());
        for name in ["a@example.com", "b@example.com", "c@example.com"] {
            request.add_account(NamedElement::new(name).unwrap());
        }

        assert_eq!(request.accounts().len(), 3);
        assert_eq!(
            request.to_xml().unwrap(),
            concat!(
                r#"<FixCalendarPriorityRequest sync="true">"#,
                r#"<account name="a@example.com"/><account name="b@example.com"/>"#,
                r#"<account name="c@example.com"/></FixCalendarPriorityRequest>"#
            )
        );
    }

    #[test]
    fn test_fix_calendar_priority_without_options() {
        let request = FixCalendarPriority::default();
        assert_eq!(request.to_xml().unwrap(), "<FixCalendarPriorityRequest/>");
    }

    #[test]
    fn test_rename_calendar_resource() {
        let mut request = RenameCalendarResource::new(" res-1 ", " room@example.com ").unwrap();
        assert_eq!(request.new_name(), "room@example.com");
        request.set_new_name("hall@example.com");
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<RenameCalendarResourceRequest id="res-1" newName="hall@example.com"/>"#
        );
        assert!(RenameCalendarResource::new("res-1", "").is_err());
    }
}
