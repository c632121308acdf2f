use std::collections::BTreeSet;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::Value as JsonValue;
use zimbra_soap::{Element, Result, ToElement, TypedCollection, to_array, to_xml_string};

struct NamedElement {
    name: String,
}

impl ToElement for NamedElement {
    const ELEMENT_NAME: &'static str = "named";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("name", self.name.as_str())
    }
}

struct KeyValuePair {
    key: String,
    value: String,
}

impl ToElement for KeyValuePair {
    const ELEMENT_NAME: &'static str = "a";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("n", self.key.as_str())
            .with_text(self.value.as_str())
    }
}

struct Sample {
    sync: Option<bool>,
    id: String,
    accounts: TypedCollection<NamedElement>,
    attrs: TypedCollection<KeyValuePair>,
}

impl ToElement for Sample {
    const ELEMENT_NAME: &'static str = "SampleRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("sync", self.sync)
            .with_text_child("id", self.id.as_str())
            .with_collection("account", self.accounts.to_elements("account"))
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

fn sample() -> Sample {
    let mut accounts = TypedCollection::new();
    accounts
        .add(NamedElement {
            name: "one@example.com".to_string(),
        })
        .add(NamedElement {
            name: "two@example.com".to_string(),
        });

    Sample {
        sync: Some(true),
        id: "abc".to_string(),
        accounts,
        attrs: vec![KeyValuePair {
            key: "zimbraMailQuota".to_string(),
            value: "0".to_string(),
        }]
        .into(),
    }
}

/// Collects `path/name` for every element and attribute in an XML string.
fn xml_nodes(xml: &str) -> BTreeSet<String> {
    fn record(start: &BytesStart<'_>, stack: &[String], nodes: &mut BTreeSet<String>) -> String {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut path = stack.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        nodes.insert(path.clone());
        for attr in start.attributes().flatten() {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            nodes.insert(format!("{}/{}", path, key));
        }
        name
    }

    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut nodes = BTreeSet::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = record(&start, &stack, &mut nodes);
                stack.push(name);
            }
            Ok(Event::Empty(start)) => {
                record(&start, &stack, &mut nodes);
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("invalid XML: {}", e),
        }
    }
    nodes
}

/// Collects `path/key` for every key in a mapping, ignoring text markers.
fn json_nodes(value: &JsonValue) -> BTreeSet<String> {
    fn walk(path: &str, value: &JsonValue, nodes: &mut BTreeSet<String>) {
        match value {
            JsonValue::Object(map) => {
                for (key, nested) in map {
                    if key == "_content" {
                        continue;
                    }
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}/{}", path, key)
                    };
                    nodes.insert(child.clone());
                    walk(&child, nested, nodes);
                }
            }
            JsonValue::Array(items) => {
                for item in items {
                    walk(path, item, nodes);
                }
            }
            _ => {}
        }
    }

    let mut nodes = BTreeSet::new();
    walk("", value, &mut nodes);
    nodes
}

#[test]
fn test_xml_and_array_describe_same_tree() -> Result<()> {
    let request = sample();
    let xml = request.to_xml()?;
    let array = request.to_array();

    assert_eq!(xml_nodes(&xml), json_nodes(&array));
    Ok(())
}

#[test]
fn test_collection_expands_in_insertion_order() -> Result<()> {
    let xml = sample().to_xml()?;
    assert_eq!(
        xml,
        concat!(
            r#"<SampleRequest sync="true"><id>abc</id>"#,
            r#"<account name="one@example.com"/><account name="two@example.com"/>"#,
            r#"<a n="zimbraMailQuota">0</a></SampleRequest>"#
        )
    );

    let array = sample().to_array();
    let accounts = array["SampleRequest"]["account"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["name"], "one@example.com");
    assert_eq!(accounts[1]["name"], "two@example.com");
    Ok(())
}

#[test]
fn test_collection_reflects_latest_state() -> Result<()> {
    let mut request = sample();
    let before = request.to_xml()?;
    request.accounts.add(NamedElement {
        name: "three@example.com".to_string(),
    });
    let after = request.to_xml()?;

    assert_eq!(before.matches("<account ").count(), 2);
    assert_eq!(after.matches("<account ").count(), 3);
    Ok(())
}

#[test]
fn test_unset_fields_are_omitted() -> Result<()> {
    let request = Sample {
        sync: None,
        id: "abc".to_string(),
        accounts: TypedCollection::new(),
        attrs: TypedCollection::new(),
    };

    assert_eq!(request.to_xml()?, "<SampleRequest><id>abc</id></SampleRequest>");
    assert_eq!(
        request.to_array(),
        serde_json::json!({"SampleRequest": {"id": "abc"}})
    );
    Ok(())
}

#[test]
fn test_explicit_root_name() -> Result<()> {
    let element = Element::new("ignored").with_property("action", "start");
    assert_eq!(to_xml_string(&element)?, r#"<ignored action="start"/>"#);

    let named = sample().to_array_named("sample");
    assert!(named.get("sample").is_some());
    assert!(to_array(&sample().to_element()).get("SampleRequest").is_some());
    Ok(())
}
