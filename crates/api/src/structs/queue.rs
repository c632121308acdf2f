//! Mail queue selection and actions.
//!
//! The nesting mirrors what the server expects:
//! `server > queue > action > query > field > match`.

use zimbra_soap::{Element, Result, ToElement, TypedCollection, required};

use crate::enums::{QueueAction, QueueActionBy};
use crate::structs::ValueAttrib;

/// A server and the queue action to run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerWithQueueAction {
    name: String,
    queue: MailQueueWithAction,
}

impl ServerWithQueueAction {
    pub fn new(name: &str, queue: MailQueueWithAction) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            queue,
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

    pub fn queue(&self) -> &MailQueueWithAction {
        &self.queue
    }

    pub fn set_queue(&mut self, queue: MailQueueWithAction) -> &mut Self {
        self.queue = queue;
        self
    }
}

impl ToElement for ServerWithQueueAction {
    const ELEMENT_NAME: &'static str = "server";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_child(self.queue.to_element())
    }
}

/// A named queue (`deferred`, `hold`, ...) and the action applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailQueueWithAction {
    name: String,
    action: MailQueueAction,
}

impl MailQueueWithAction {
    pub fn new(name: &str, action: MailQueueAction) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            action,
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

    pub fn action(&self) -> &MailQueueAction {
        &self.action
    }

    pub fn set_action(&mut self, action: MailQueueAction) -> &mut Self {
        self.action = action;
        self
    }
}

impl ToElement for MailQueueWithAction {
    const ELEMENT_NAME: &'static str = "queue";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_child(self.action.to_element())
    }
}

/// The operation and message selection for a queue action.
///
/// With `by="id"` the comma separated message ids go in the text content;
/// with `by="query"` the messages are matched by [`QueueQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailQueueAction {
    op: QueueAction,
    by: QueueActionBy,
    ids: Option<String>,
    query: Option<QueueQuery>,
}

impl MailQueueAction {
    /// Acts on the listed message ids.
    pub fn by_ids(op: QueueAction, ids: &str) -> Result<Self> {
        Ok(Self {
            op,
            by: QueueActionBy::Id,
            ids: Some(required("ids", ids)?),
            query: None,
        })
    }

    /// Acts on every message matching `query`.
    pub fn by_query(op: QueueAction, query: QueueQuery) -> Self {
        Self {
            op,
            by: QueueActionBy::Query,
            ids: None,
            query: Some(query),
        }
    }

    pub fn op(&self) -> QueueAction {
        self.op
    }

    pub fn set_op(&mut self, op: QueueAction) -> &mut Self {
        self.op = op;
        self
    }

    pub fn by(&self) -> QueueActionBy {
        self.by
    }

    pub fn ids(&self) -> Option<&str> {
        self.ids.as_deref()
    }

    pub fn query(&self) -> Option<&QueueQuery> {
        self.query.as_ref()
    }
}

impl ToElement for MailQueueAction {
    const ELEMENT_NAME: &'static str = "action";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("op", self.op)
            .with_property("by", self.by)
            .with_optional_text(self.ids.as_ref())
            .with_optional_child(self.query.as_ref().map(ToElement::to_element))
    }
}

/// Field filters over queued messages, with paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueQuery {
    limit: Option<u32>,
    offset: Option<u32>,
    fields: TypedCollection<QueueQueryField>,
}

impl QueueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<u32>) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Option<u32>) -> &mut Self {
        self.offset = offset;
        self
    }

    pub fn fields(&self) -> &TypedCollection<QueueQueryField> {
        &self.fields
    }

    pub fn add_field(&mut self, field: QueueQueryField) -> &mut Self {
        self.fields.add(field);
        self
    }
}

impl ToElement for QueueQuery {
    const ELEMENT_NAME: &'static str = "query";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("limit", self.limit)
            .with_optional_property("offset", self.offset)
            .with_collection("field", self.fields.to_elements("field"))
    }
}

/// One queue field (`from`, `rcpt`, `received`, ...) and the values it may match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueQueryField {
    name: String,
    matches: TypedCollection<ValueAttrib>,
}

impl QueueQueryField {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            matches: TypedCollection::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self) -> &TypedCollection<ValueAttrib> {
        &self.matches
    }

    pub fn add_match(&mut self, value: ValueAttrib) -> &mut Self {
        self.matches.add(value);
        self
    }
}

impl ToElement for QueueQueryField {
    const ELEMENT_NAME: &'static str = "field";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_collection("match", self.matches.to_elements("match"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_by_ids() {
        let action = MailQueueAction::by_ids(QueueAction::Hold, "A1,B2").unwrap();
        assert_eq!(
            action.to_xml().unwrap(),
            r#"<action by="id" op="hold">A1,B2</action>"#
        );
    }

    #[test]
    fn test_nested_query() {
        let mut field = QueueQueryField::new("from").unwrap();
        field
            .add_match(ValueAttrib::new("a@example.com"))
            .add_match(ValueAttrib::new("b@example.com"));
        let mut query = QueueQuery::new();
        query.set_limit(Some(50)).add_field(field);

        let action = MailQueueAction::by_query(QueueAction::Delete, query);
        let queue = MailQueueWithAction::new("deferred", action).unwrap();
        let server = ServerWithQueueAction::new("mta.example.com", queue).unwrap();

        assert_eq!(
            server.to_xml().unwrap(),
            concat!(
                r#"<server name="mta.example.com"><queue name="deferred">"#,
                r#"<action by="query" op="delete"><query limit="50"><field name="from">"#,
                r#"<match value="a@example.com"/><match value="b@example.com"/>"#,
                r#"</field></query></action></queue></server>"#
            )
        );
    }
}
