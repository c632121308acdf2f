use clap::Parser;
use serde_json::Value as JsonValue;
use zimbra_cli::{CliConfig, render};

fn render_args(args: &[&str]) -> zimbra_soap::Result<String> {
    let mut argv = vec!["zmsoap"];
    argv.extend_from_slice(args);
    let config = CliConfig::try_parse_from(argv).unwrap();
    config.validate().unwrap();
    render(&config)
}

#[test]
fn test_check_health_in_envelope() {
    let xml = render_args(&["--envelope", "--auth-token", "0_abc", "check-health"]).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<authToken>0_abc</authToken>"));
    assert!(xml.contains(r#"<CheckHealthRequest xmlns="urn:zimbraAdmin"/>"#));
}

#[test]
fn test_json_envelope_carries_namespace() {
    let json = render_args(&[
        "--format",
        "json",
        "--envelope",
        "get-all-domains",
        "--apply-config",
        "true",
    ])
    .unwrap();
    let value: JsonValue = serde_json::from_str(&json).unwrap();
    let body = &value["Body"]["GetAllDomainsRequest"];
    assert_eq!(body["_jsns"], "urn:zimbraAdmin");
    assert_eq!(body["applyConfig"], true);
}

#[test]
fn test_pretty_xml() {
    let xml = render_args(&["--pretty", "rename-account", "--id", "42", "--new-name", "b@example.com"])
        .unwrap();
    assert_eq!(xml, r#"<RenameAccountRequest id="42" newName="b@example.com"/>"#);

    let xml = render_args(&["--pretty", "reindex", "--id", "acct-1", "--action", "start"]).unwrap();
    assert!(xml.contains("\n  <mbox id=\"acct-1\"/>"));
}

#[test]
fn test_flush_cache_with_entries() {
    let xml = render_args(&[
        "flush-cache",
        "--types",
        "account,cos",
        "--all-servers",
        "--entry",
        "name:user@example.com",
    ])
    .unwrap();
    assert_eq!(
        xml,
        r#"<FlushCacheRequest><cache allServers="true" type="account,cos"><entry by="name">user@example.com</entry></cache></FlushCacheRequest>"#
    );
}

#[test]
fn test_get_rights_keeps_order() {
    let xml = render_args(&["get-rights", "--right", "sendAs", "--right", "viewFreeBusy"]).unwrap();
    assert_eq!(
        xml,
        r#"<GetRightsRequest><ace right="sendAs"/><ace right="viewFreeBusy"/></GetRightsRequest>"#
    );
}

#[test]
fn test_preauth_value() {
    let xml = render_args(&[
        "preauth",
        "--account",
        "john.doe@domain.com",
        "--key",
        "6b7ead4bd425836e8cf0079cd6c1a05acc127acd07c8ee4b61023e19250e929c",
        "--timestamp",
        "1135280708088",
    ])
    .unwrap();
    assert_eq!(
        xml,
        r#"<preauth timestamp="1135280708088">b248f6cfd027edd45c5369f8490125204772f844</preauth>"#
    );
}

#[test]
fn test_preauth_auth_request() {
    let xml = render_args(&[
        "--envelope",
        "preauth",
        "--account",
        "john.doe@domain.com",
        "--key",
        "secret",
        "--auth",
    ])
    .unwrap();
    assert!(xml.contains(r#"xmlns="urn:zimbraAccount""#));
    assert!(xml.contains(r#"<account by="name">john.doe@domain.com</account>"#));
    assert!(xml.contains("<preauth "));
}

#[test]
fn test_invalid_arguments_surface_as_errors() {
    assert!(render_args(&["delete-ldap-entry", "--dn", "  "]).is_err());
    assert!(render_args(&["auto-prov-task", "--action", "begin"]).is_err());
    assert!(render_args(&["flush-cache", "--types", ""]).is_err());
}
