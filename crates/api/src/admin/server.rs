//! Servers and global configuration.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::structs::{KeyValuePair, ServerSelector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServer {
    name: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl CreateServer {
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

impl ToElement for CreateServer {
    const ELEMENT_NAME: &'static str = "CreateServerRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for CreateServer {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteServer {
    id: String,
}

impl DeleteServer {
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

impl ToElement for DeleteServer {
    const ELEMENT_NAME: &'static str = "DeleteServerRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("id", self.id.as_str())
    }
}

impl Request for DeleteServer {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyServer {
    id: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyServer {
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

impl ToElement for ModifyServer {
    const ELEMENT_NAME: &'static str = "ModifyServerRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyServer {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServer {
    server: Option<ServerSelector>,
    apply_config: Option<bool>,
    attrs: Option<String>,
}

impl GetServer {
    pub fn new(server: Option<ServerSelector>) -> Self {
        Self {
            server,
            ..Self::default()
        }
    }

    pub fn server(&self) -> Option<&ServerSelector> {
        self.server.as_ref()
    }

    pub fn set_server(&mut self, server: ServerSelector) -> &mut Self {
        self.server = Some(server);
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

impl ToElement for GetServer {
    const ELEMENT_NAME: &'static str = "GetServerRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("applyConfig", self.apply_config)
            .with_optional_property("attrs", self.attrs.as_ref())
            .with_optional_child(self.server.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetServer {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Lists servers, optionally only those running `service` (e.g. `mailbox`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAllServers {
    service: Option<String>,
    apply_config: Option<bool>,
}

impl GetAllServers {
    pub fn new(service: Option<&str>, apply_config: Option<bool>) -> Self {
        Self {
            service: service.map(|s| s.trim().to_string()),
            apply_config,
        }
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn set_service(&mut self, service: &str) -> &mut Self {
        self.service = Some(service.trim().to_string());
        self
    }

    pub fn apply_config(&self) -> Option<bool> {
        self.apply_config
    }

    pub fn set_apply_config(&mut self, apply_config: bool) -> &mut Self {
        self.apply_config = Some(apply_config);
        self
    }
}

impl ToElement for GetAllServers {
    const ELEMENT_NAME: &'static str = "GetAllServersRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("service", self.service.as_ref())
            .with_optional_property("applyConfig", self.apply_config)
    }
}

impl Request for GetAllServers {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Checks that a hostname resolves from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckHostnameResolve {
    hostname: Option<String>,
}

impl CheckHostnameResolve {
    pub fn new(hostname: Option<&str>) -> Self {
        Self {
            hostname: hostname.map(|h| h.trim().to_string()),
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn set_hostname(&mut self, hostname: &str) -> &mut Self {
        self.hostname = Some(hostname.trim().to_string());
        self
    }
}

impl ToElement for CheckHostnameResolve {
    const ELEMENT_NAME: &'static str = "CheckHostnameResolveRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_property("hostname", self.hostname.as_ref())
    }
}

impl Request for CheckHostnameResolve {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Fetches global config attributes. Each pair names one attribute; values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetConfig {
    attrs: TypedCollection<KeyValuePair>,
}

impl GetConfig {
    pub fn new(attrs: impl IntoIterator<Item = KeyValuePair>) -> Self {
        Self {
            attrs: attrs.into_iter().collect(),
        }
    }

    attr_accessors!();
}

impl ToElement for GetConfig {
    const ELEMENT_NAME: &'static str = "GetConfigRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for GetConfig {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Changes global config attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyConfig {
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyConfig {
    pub fn new(attrs: impl IntoIterator<Item = KeyValuePair>) -> Self {
        Self {
            attrs: attrs.into_iter().collect(),
        }
    }

    attr_accessors!();
}

impl ToElement for ModifyConfig {
    const ELEMENT_NAME: &'static str = "ModifyConfigRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyConfig {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

empty_request! {
    /// Fetches every global config attribute.
    GetAllConfig => "GetAllConfigRequest";
}
