use super::*;

use std::collections::HashMap;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<HostConfig, HostError> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    HostConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = from_pairs(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")]).unwrap();
    assert_eq!(cfg.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_vars_treats_blank_as_unset() {
    let cfg = from_pairs(&[("HOST", ""), ("PORT", "")]).unwrap();
    assert_eq!(cfg, HostConfig::default());
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = from_pairs(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err.to_string(), "config parse failed: invalid PORT: http");
}

#[test]
fn from_vars_rejects_bad_host() {
    let err = from_pairs(&[("HOST", "localhost:3000")]).unwrap_err();
    assert!(matches!(err, HostError::ConfigParse(_)));
}

#[test]
fn from_vars_reads_site_root_override() {
    let cfg = from_pairs(&[("SITE_ROOT", " /srv/chatbot/site ")]).unwrap();
    assert_eq!(cfg.site_root.as_deref(), Some(Path::new("/srv/chatbot/site")));
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("/srv/chatbot/site"));
}

#[test]
fn site_root_falls_back_to_leptos_setting() {
    let cfg = from_pairs(&[("SITE_ROOT", "  ")]).unwrap();
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("target/site"));
}

#[test]
fn log_filter_defaults_to_info() {
    assert_eq!(log_filter(None).to_string(), "info");
}

#[test]
fn log_filter_honors_rust_log() {
    assert_eq!(log_filter(Some("chatbot=debug")).to_string(), "chatbot=debug");
}

#[test]
fn log_filter_ignores_invalid_directives() {
    assert_eq!(log_filter(Some("chatbot=verbose")).to_string(), "info");
}
