use zimbra_soap::{Element, ToElement, TypedCollection};

use crate::structs::KeyValuePair;

/// An `<attrs>` wrapper around account attribute pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    attrs: TypedCollection<KeyValuePair>,
}

impl Attrs {
    pub fn new(attrs: impl IntoIterator<Item = KeyValuePair>) -> Self {
        Self {
            attrs: attrs.into_iter().collect(),
        }
    }

    attr_accessors!();
}

impl ToElement for Attrs {
    const ELEMENT_NAME: &'static str = "attrs";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_collection("a", self.attrs.to_elements("a"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::key_value_pairs;

    #[test]
    fn test_attrs() {
        let attrs = Attrs::new(key_value_pairs([("zimbraPrefSkin", "harmony")]).unwrap());
        assert_eq!(
            attrs.to_xml().unwrap(),
            r#"<attrs><a n="zimbraPrefSkin">harmony</a></attrs>"#
        );
        assert_eq!(Attrs::default().to_xml().unwrap(), "<attrs/>");
    }
}
