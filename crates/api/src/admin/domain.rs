//! Domain provisioning.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::structs::{DomainSelector, KeyValuePair};

/// Creates a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDomain {
    name: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl CreateDomain {
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

impl ToElement for CreateDomain {
    const ELEMENT_NAME: &'static str = "CreateDomainRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for CreateDomain {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Deletes a domain by zimbra id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDomain {
    id: String,
}

impl DeleteDomain {
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

impl ToElement for DeleteDomain {
    const ELEMENT_NAME: &'static str = "DeleteDomainRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("id", self.id.as_str())
    }
}

impl Request for DeleteDomain {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Changes attributes of a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyDomain {
    id: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyDomain {
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

impl ToElement for ModifyDomain {
    const ELEMENT_NAME: &'static str = "ModifyDomainRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyDomain {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Fetches a domain's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDomain {
    domain: Option<DomainSelector>,
    apply_config: Option<bool>,
    attrs: Option<String>,
}

impl GetDomain {
    pub fn new(domain: Option<DomainSelector>) -> Self {
        Self {
            domain,
            ..Self::default()
        }
    }

    pub fn domain(&self) -> Option<&DomainSelector> {
        self.domain.as_ref()
    }

    pub fn set_domain(&mut self, domain: DomainSelector) -> &mut Self {
        self.domain = Some(domain);
        self
    }

    pub fn apply_config(&self) -> Option<bool> {
        self.apply_config
    }

    pub fn set_apply_config(&mut self, apply_config: bool) -> &mut Self {
        self.apply_config = Some(apply_config);
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

impl ToElement for GetDomain {
    const ELEMENT_NAME: &'static str = "GetDomainRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("applyConfig", self.apply_config)
            .with_optional_property("attrs", self.attrs.as_ref())
            .with_optional_child(self.domain.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetDomain {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Lists every domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllDomains {
    apply_config: Option<bool>,
}

impl GetAllDomains {
    pub fn new(apply_config: Option<bool>) -> Self {
        Self { apply_config }
    }

    pub fn apply_config(&self) -> Option<bool> {
        self.apply_config
    }

    /// Fills unset domain attributes with the global config values.
    pub fn set_apply_config(&mut self, apply_config: bool) -> &mut Self {
        self.apply_config = Some(apply_config);
        self
    }
}

impl ToElement for GetAllDomains {
    const ELEMENT_NAME: &'static str = "GetAllDomainsRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_property("applyConfig", self.apply_config)
    }
}

impl Request for GetAllDomains {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}
