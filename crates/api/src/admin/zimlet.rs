//! Zimlet deployment and configuration.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, required};

use crate::enums::ZimletExcludeType;
use crate::structs::{NamedElement, ZimletAclStatusPri};

/// Deletes a zimlet from LDAP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteZimlet {
    zimlet: NamedElement,
}

impl DeleteZimlet {
    pub fn new(zimlet: NamedElement) -> Self {
        Self { zimlet }
    }

    pub fn zimlet(&self) -> &NamedElement {
        &self.zimlet
    }

    pub fn set_zimlet(&mut self, zimlet: NamedElement) -> &mut Self {
        self.zimlet = zimlet;
        self
    }
}

impl ToElement for DeleteZimlet {
    const ELEMENT_NAME: &'static str = "DeleteZimletRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.zimlet.to_element_named("zimlet"))
    }
}

impl Request for DeleteZimlet {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Changes a zimlet's ACL, status or priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyZimlet {
    zimlet: ZimletAclStatusPri,
}

impl ModifyZimlet {
    pub fn new(zimlet: ZimletAclStatusPri) -> Self {
        Self { zimlet }
    }

    pub fn zimlet(&self) -> &ZimletAclStatusPri {
        &self.zimlet
    }

    pub fn set_zimlet(&mut self, zimlet: ZimletAclStatusPri) -> &mut Self {
        self.zimlet = zimlet;
        self
    }
}

impl ToElement for ModifyZimlet {
    const ELEMENT_NAME: &'static str = "ModifyZimletRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.zimlet.to_element())
    }
}

impl Request for ModifyZimlet {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllZimlets {
    exclude: Option<ZimletExcludeType>,
}

impl GetAllZimlets {
    pub fn new(exclude: Option<ZimletExcludeType>) -> Self {
        Self { exclude }
    }

    pub fn exclude(&self) -> Option<ZimletExcludeType> {
        self.exclude
    }

    pub fn set_exclude(&mut self, exclude: ZimletExcludeType) -> &mut Self {
        self.exclude = Some(exclude);
        self
    }
}

impl ToElement for GetAllZimlets {
    const ELEMENT_NAME: &'static str = "GetAllZimletsRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_property("exclude", self.exclude)
    }
}

impl Request for GetAllZimlets {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetZimlet {
    zimlet: NamedElement,
    attrs: Option<String>,
}

impl GetZimlet {
    pub fn new(zimlet: NamedElement) -> Self {
        Self {
            zimlet,
            attrs: None,
        }
    }

    pub fn zimlet(&self) -> &NamedElement {
        &self.zimlet
    }

    pub fn attrs(&self) -> Option<&str> {
        self.attrs.as_deref()
    }

    pub fn set_attrs(&mut self, attrs: &str) -> &mut Self {
        self.attrs = Some(attrs.trim().to_string());
        self
    }
}

impl ToElement for GetZimlet {
    const ELEMENT_NAME: &'static str = "GetZimletRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("attrs", self.attrs.as_ref())
            .with_child(self.zimlet.to_element_named("zimlet"))
    }
}

impl Request for GetZimlet {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Removes a deployed zimlet from the servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndeployZimlet {
    name: String,
    action: Option<String>,
}

impl UndeployZimlet {
    pub fn new(name: &str, action: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            action: action.map(|a| a.trim().to_string()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn set_action(&mut self, action: &str) -> &mut Self {
        self.action = Some(action.trim().to_string());
        self
    }
}

impl ToElement for UndeployZimlet {
    const ELEMENT_NAME: &'static str = "UndeployZimletRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_optional_property("action", self.action.as_ref())
    }
}

impl Request for UndeployZimlet {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ZimletStatus;

    #[test]
    fn test_delete_zimlet() {
        let request = DeleteZimlet::new(NamedElement::new("com_zimbra_ymemoticons").unwrap());
        assert_eq!(
            request.to_xml_named("deleteZimlet").unwrap(),
            r#"<deleteZimlet><zimlet name="com_zimbra_ymemoticons"/></deleteZimlet>"#
        );
    }

    #[test]
    fn test_modify_zimlet() {
        let mut zimlet = ZimletAclStatusPri::new("com_zimbra_date").unwrap();
        zimlet.set_status(ZimletStatus::Disabled);
        let request = ModifyZimlet::new(zimlet);
        assert_eq!(
            request.to_array(),
            serde_json::json!({"ModifyZimletRequest": {
                "zimlet": {"name": "com_zimbra_date", "status": {"value": "disabled"}}
            }})
        );
    }

    #[test]
    fn test_get_all_zimlets() {
        let request = GetAllZimlets::new(Some(ZimletExcludeType::Mail));
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<GetAllZimletsRequest exclude="mail"/>"#
        );
    }

    #[test]
    fn test_undeploy_zimlet() {
        let request = UndeployZimlet::new(" com_zimbra_date ", None).unwrap();
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<UndeployZimletRequest name="com_zimbra_date"/>"#
        );
    }
}
