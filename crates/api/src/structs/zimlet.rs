//! Zimlet ACL, status and priority settings.

use zimbra_soap::{Element, Result, ToElement, required};

use crate::enums::{ZimletAclType, ZimletStatus};
use crate::structs::IntegerValueAttrib;

/// Grants or denies a zimlet for a class of service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZimletAcl {
    cos: Option<String>,
    acl: Option<ZimletAclType>,
}

impl ZimletAcl {
    pub fn new(cos: Option<&str>, acl: Option<ZimletAclType>) -> Self {
        Self {
            cos: cos.map(|cos| cos.trim().to_string()),
            acl,
        }
    }

    pub fn cos(&self) -> Option<&str> {
        self.cos.as_deref()
    }

    pub fn set_cos(&mut self, cos: &str) -> &mut Self {
        self.cos = Some(cos.trim().to_string());
        self
    }

    pub fn acl(&self) -> Option<ZimletAclType> {
        self.acl
    }

    pub fn set_acl(&mut self, acl: ZimletAclType) -> &mut Self {
        self.acl = Some(acl);
        self
    }
}

impl ToElement for ZimletAcl {
    const ELEMENT_NAME: &'static str = "acl";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("cos", self.cos.as_ref())
            .with_optional_property("acl", self.acl)
    }
}

/// Zimlet enablement carried as a `value` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZimletStatusAttrib {
    value: ZimletStatus,
}

impl ZimletStatusAttrib {
    pub fn new(value: ZimletStatus) -> Self {
        Self { value }
    }

    pub fn value(&self) -> ZimletStatus {
        self.value
    }

    pub fn set_value(&mut self, value: ZimletStatus) -> &mut Self {
        self.value = value;
        self
    }
}

impl ToElement for ZimletStatusAttrib {
    const ELEMENT_NAME: &'static str = "status";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("value", self.value)
    }
}

/// A zimlet with optional ACL, status and priority changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZimletAclStatusPri {
    name: String,
    acl: Option<ZimletAcl>,
    status: Option<ZimletStatusAttrib>,
    priority: Option<IntegerValueAttrib>,
}

impl ZimletAclStatusPri {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            acl: None,
            status: None,
            priority: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trims `name` without re-validating it; a blank value is kept.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.trim().to_string();
        self
    }

    pub fn acl(&self) -> Option<&ZimletAcl> {
        self.acl.as_ref()
    }

    pub fn set_acl(&mut self, acl: ZimletAcl) -> &mut Self {
        self.acl = Some(acl);
        self
    }

    pub fn status(&self) -> Option<ZimletStatusAttrib> {
        self.status
    }

    pub fn set_status(&mut self, status: ZimletStatus) -> &mut Self {
        self.status = Some(ZimletStatusAttrib::new(status));
        self
    }

    pub fn priority(&self) -> Option<IntegerValueAttrib> {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) -> &mut Self {
        self.priority = Some(IntegerValueAttrib::new(priority));
        self
    }
}

impl ToElement for ZimletAclStatusPri {
    const ELEMENT_NAME: &'static str = "zimlet";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_optional_child(self.acl.as_ref().map(ToElement::to_element))
            .with_optional_child(self.status.as_ref().map(ToElement::to_element))
            .with_optional_child(self.priority.as_ref().map(ToElement::to_element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_zimlet_settings() {
        let mut zimlet = ZimletAclStatusPri::new("com_zimbra_date").unwrap();
        zimlet
            .set_acl(ZimletAcl::new(Some("default"), Some(ZimletAclType::Grant)))
            .set_status(ZimletStatus::Enabled)
            .set_priority(3);

        assert_eq!(
            zimlet.to_xml().unwrap(),
            concat!(
                r#"<zimlet name="com_zimbra_date"><acl acl="grant" cos="default"/>"#,
                r#"<status value="enabled"/><priority value="3"/></zimlet>"#
            )
        );
    }

    #[test]
    fn test_unset_settings_are_omitted() {
        let zimlet = ZimletAclStatusPri::new("com_zimbra_date").unwrap();
        assert_eq!(
            zimlet.to_array(),
            serde_json::json!({"zimlet": {"name": "com_zimbra_date"}})
        );
    }
}
