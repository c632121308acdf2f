use pretty_assertions::assert_eq;
use zimbra_api::AdminApi;
use zimbra_api::enums::{AccountBy, AutoProvTaskAction, CacheEntryType, ReIndexAction};
use zimbra_api::structs::{
    AccountSelector, CacheSelector, KeyValuePair, NamedElement, ReindexMailboxInfo,
};
use zimbra_soap::{Envelope, Request, SoapError};

/// Records every request instead of sending it.
#[derive(Default)]
struct RecordingTransport {
    sent: Vec<(&'static str, String)>,
    auth_token: Option<String>,
}

impl AdminApi for RecordingTransport {
    type Response = usize;
    type Error = SoapError;

    fn invoke<R: Request>(&mut self, request: R) -> Result<usize, SoapError> {
        let mut envelope = Envelope::new(&request);
        if let Some(token) = &self.auth_token {
            envelope = envelope.with_auth_token(token.clone());
        }
        self.sent.push((R::NAMESPACE, envelope.to_xml()?));
        Ok(self.sent.len())
    }
}

#[test]
fn test_operations_build_and_invoke() -> Result<(), SoapError> {
    let mut transport = RecordingTransport::default();
    transport.auto_prov_task_control(AutoProvTaskAction::Start)?;
    transport.delete_ldap_entry(" uid=foo ")?;
    transport.get_all_domains(Some(true))?;

    assert_eq!(transport.sent.len(), 3);
    assert!(
        transport.sent[0]
            .1
            .contains(r#"<AutoProvTaskControlRequest action="start" xmlns="urn:zimbraAdmin"/>"#)
    );
    assert!(
        transport.sent[1]
            .1
            .contains(r#"<DeleteLDAPEntryRequest dn="uid=foo" xmlns="urn:zimbraAdmin"/>"#)
    );
    assert!(transport.sent[2].1.contains(r#"applyConfig="true""#));
    Ok(())
}

#[test]
fn test_invalid_arguments_are_not_sent() {
    let mut transport = RecordingTransport::default();

    let err = transport.delete_account("   ").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(transport.rename_account("42", "").is_err());
    assert!(transport.auth_by_name("admin", "", None).is_err());

    assert!(transport.sent.is_empty());
}

#[test]
fn test_auth_then_authenticated_calls() -> Result<(), SoapError> {
    let mut transport = RecordingTransport::default();
    transport.auth_by_name("admin@example.com", "secret", Some("mail.example.com"))?;
    assert!(transport.sent[0].1.contains(
        r#"<AuthRequest name="admin@example.com" password="secret" xmlns="urn:zimbraAdmin"><virtualHost>mail.example.com</virtualHost></AuthRequest>"#
    ));

    transport.auth_token = Some("0_token".to_string());
    transport.flush_cache(Some(CacheSelector::new([CacheEntryType::Account])?))?;
    let xml = &transport.sent[1].1;
    assert!(xml.contains("<authToken>0_token</authToken>"));
    assert!(xml.contains(r#"<cache type="account"/>"#));
    Ok(())
}

#[test]
fn test_collection_arguments() -> Result<(), SoapError> {
    let mut transport = RecordingTransport::default();
    let accounts = vec![
        NamedElement::new("a@example.com")?,
        NamedElement::new("b@example.com")?,
    ];
    transport.fix_calendar_priority(Some(false), accounts)?;
    transport.modify_account(
        "42",
        vec![KeyValuePair::new("zimbraAccountStatus", "active")?],
    )?;

    assert_eq!(transport.sent[0].1.matches("<account name=").count(), 2);
    assert!(transport.sent[1].1.contains(r#"<a n="zimbraAccountStatus">active</a>"#));
    Ok(())
}

#[test]
fn test_reindex_and_selectors() -> Result<(), SoapError> {
    let mut transport = RecordingTransport::default();
    transport.re_index(ReindexMailboxInfo::new("acct-1")?, Some(ReIndexAction::Status))?;
    transport.get_account_info(AccountSelector::new(AccountBy::Name, "user@example.com")?)?;

    assert!(transport.sent[0].1.contains(
        r#"<ReIndexRequest action="status" xmlns="urn:zimbraAdmin"><mbox id="acct-1"/></ReIndexRequest>"#
    ));
    assert!(
        transport.sent[1]
            .1
            .contains(r#"<account by="name">user@example.com</account>"#)
    );
    Ok(())
}

#[test]
fn test_every_admin_operation_uses_admin_namespace() -> Result<(), SoapError> {
    let mut transport = RecordingTransport::default();
    transport.check_health()?;
    transport.no_op()?;
    transport.ping()?;
    transport.get_version_info()?;
    transport.get_all_cos()?;
    transport.get_all_config()?;
    transport.reset_all_loggers()?;

    assert_eq!(transport.sent.len(), 7);
    assert!(transport.sent.iter().all(|(ns, _)| *ns == "urn:zimbraAdmin"));
    Ok(())
}
