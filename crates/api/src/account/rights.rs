use zimbra_soap::{ACCOUNT_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

/// One right to query, e.g. `sendAs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Right {
    right: String,
}

impl Right {
    pub fn new(right: &str) -> Result<Self> {
        Ok(Self {
            right: required("right", right)?,
        })
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Trims `right` without re-validating it; a blank value is kept.
    pub fn set_right(&mut self, right: &str) -> &mut Self {
        self.right = right.trim().to_string();
        self
    }
}

impl ToElement for Right {
    const ELEMENT_NAME: &'static str = "ace";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("right", self.right.as_str())
    }
}

/// Asks which account-level rights the authenticated user has granted.
///
/// With no aces every right is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRights {
    aces: TypedCollection<Right>,
}

impl GetRights {
    pub fn new(aces: impl IntoIterator<Item = Right>) -> Self {
        Self {
            aces: aces.into_iter().collect(),
        }
    }

    pub fn aces(&self) -> &TypedCollection<Right> {
        &self.aces
    }

    pub fn add_ace(&mut self, ace: Right) -> &mut Self {
        self.aces.add(ace);
        self
    }

    pub fn set_aces(&mut self, aces: impl IntoIterator<Item = Right>) -> &mut Self {
        self.aces = aces.into_iter().collect();
        self
    }
}

impl ToElement for GetRights {
    const ELEMENT_NAME: &'static str = "GetRightsRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_collection("ace", self.aces.to_elements("ace"))
    }
}

impl Request for GetRights {
    const NAMESPACE: &'static str = ACCOUNT_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_trims() {
        let right = Right::new(" sendAs ").unwrap();
        assert_eq!(right.right(), "sendAs");
        assert_eq!(right.to_xml().unwrap(), r#"<ace right="sendAs"/>"#);
        assert!(Right::new("").is_err());
    }

    #[test]
    fn test_get_rights_collects_aces() {
        let mut request = GetRights::new([Right::new("sendAs").unwrap()]);
        request.add_ace(Right::new("viewFreeBusy").unwrap());

        assert_eq!(
            request.to_xml().unwrap(),
            r#"<GetRightsRequest><ace right="sendAs"/><ace right="viewFreeBusy"/></GetRightsRequest>"#
        );
        assert_eq!(
            request.to_array(),
            serde_json::json!({"GetRightsRequest": {"ace": [{"right": "sendAs"}, {"right": "viewFreeBusy"}]}})
        );
    }

    #[test]
    fn test_get_rights_without_aces() {
        assert_eq!(GetRights::default().to_xml().unwrap(), "<GetRightsRequest/>");
    }
}
