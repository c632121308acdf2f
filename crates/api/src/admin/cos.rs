//! Class of service provisioning.
//!
//! Unlike most admin requests, COS requests carry their name and id as child
//! elements rather than attributes.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::structs::{CosSelector, KeyValuePair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCos {
    name: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl CreateCos {
    pub fn new(name: &str, attrs: impl IntoIterator<Item = KeyValuePair>) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            attrs: attrs.into_iter().collect(),
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

    attr_accessors!();
}

impl ToElement for CreateCos {
    const ELEMENT_NAME: &'static str = "CreateCosRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_text_child("name", self.name.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for CreateCos {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCos {
    id: String,
}

impl DeleteCos {
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

impl ToElement for DeleteCos {
    const ELEMENT_NAME: &'static str = "DeleteCosRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_text_child("id", self.id.as_str())
    }
}

impl Request for DeleteCos {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyCos {
    id: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyCos {
    pub fn new(id: &str, attrs: impl IntoIterator<Item = KeyValuePair>) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            attrs: attrs.into_iter().collect(),
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

    attr_accessors!();
}

impl ToElement for ModifyCos {
    const ELEMENT_NAME: &'static str = "ModifyCosRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_text_child("id", self.id.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyCos {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCos {
    id: String,
    new_name: String,
}

impl RenameCos {
    pub fn new(id: &str, new_name: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            new_name: required("newName", new_name)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
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

impl ToElement for RenameCos {
    const ELEMENT_NAME: &'static str = "RenameCosRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_text_child("id", self.id.as_str())
            .with_text_child("newName", self.new_name.as_str())
    }
}

impl Request for RenameCos {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCos {
    cos: Option<CosSelector>,
    attrs: Option<String>,
}

impl GetCos {
    pub fn new(cos: Option<CosSelector>) -> Self {
        Self { cos, attrs: None }
    }

    pub fn cos(&self) -> Option<&CosSelector> {
        self.cos.as_ref()
    }

    pub fn set_cos(&mut self, cos: CosSelector) -> &mut Self {
        self.cos = Some(cos);
        self
    }

    pub fn attrs(&self) -> Option<&str> {
        self.attrs.as_deref()
    }

    pub fn set_attrs(&mut self, attrs: &str) -> &mut Self {
        self.attrs = Some(attrs.trim().to_string());
        self
    }
}

impl ToElement for GetCos {
    const ELEMENT_NAME: &'static str = "GetCosRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("attrs", self.attrs.as_ref())
            .with_optional_child(self.cos.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetCos {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

empty_request! {
    /// Lists every class of service.
    GetAllCos => "GetAllCosRequest";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CosBy;

    #[test]
    fn test_cos_fields_are_children() {
        let request = CreateCos::new(" gold ", Vec::new()).unwrap();
        assert_eq!(
            request.to_xml().unwrap(),
            "<CreateCosRequest><name>gold</name></CreateCosRequest>"
        );

        let request = RenameCos::new("cos-1", "platinum").unwrap();
        assert_eq!(
            request.to_array(),
            serde_json::json!({"RenameCosRequest": {"id": "cos-1", "newName": "platinum"}})
        );
    }

    #[test]
    fn test_get_cos() {
        let mut request = GetCos::new(None);
        request
            .set_cos(CosSelector::new(CosBy::Name, "default").unwrap())
            .set_attrs("zimbraMailQuota");
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<GetCosRequest attrs="zimbraMailQuota"><cos by="name">default</cos></GetCosRequest>"#
        );
    }

    #[test]
    fn test_delete_cos_requires_id() {
        assert!(DeleteCos::new("").is_err());
        assert_eq!(
            DeleteCos::new("cos-1").unwrap().to_xml().unwrap(),
            "<DeleteCosRequest><id>cos-1</id></DeleteCosRequest>"
        );
    }
}
