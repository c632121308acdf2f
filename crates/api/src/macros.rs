/// Declares requests that carry no fields.
///
/// Each gets a unit struct, a `new` constructor and `ToElement`/`Request`
/// impls in the admin namespace.
macro_rules! empty_request {
    ($( $(#[$meta:meta])* $name:ident => $element:literal; )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl $name {
                pub fn new() -> Self {
                    Self
                }
            }

            impl zimbra_soap::ToElement for $name {
                const ELEMENT_NAME: &'static str = $element;

                fn to_element_named(&self, name: &str) -> zimbra_soap::Element {
                    zimbra_soap::Element::new(name)
                }
            }

            impl zimbra_soap::Request for $name {
                const NAMESPACE: &'static str = zimbra_soap::ADMIN_NAMESPACE;
            }
        )+
    };
}

/// Expands to `attrs`, `add_attr` and `set_attrs` for a type holding
/// `attrs: TypedCollection<KeyValuePair>`.
macro_rules! attr_accessors {
    () => {
        /// Returns the `<a n="...">` attribute pairs.
        pub fn attrs(&self) -> &zimbra_soap::TypedCollection<$crate::structs::KeyValuePair> {
            &self.attrs
        }

        pub fn add_attr(&mut self, attr: $crate::structs::KeyValuePair) -> &mut Self {
            self.attrs.add(attr);
            self
        }

        pub fn set_attrs(
            &mut self,
            attrs: impl IntoIterator<Item = $crate::structs::KeyValuePair>,
        ) -> &mut Self {
            self.attrs = attrs.into_iter().collect();
            self
        }
    };
}
