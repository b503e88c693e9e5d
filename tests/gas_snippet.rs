use gas_tag::gas::{CallArgs, GasTag, MethodSpec, OneOrMany, TagConfig};
use serde_json::json;

fn push_lines(snippet: &str) -> Vec<&str> {
    snippet
        .lines()
        .filter(|line| line.starts_with("_gas.push("))
        .collect()
}

#[test]
fn render_wraps_calls_in_loader() {
    let mut tag = GasTag::new();
    tag.add_account("UA-1111-1", None).unwrap();
    tag.push("_trackPageview").unwrap();

    let snippet = tag.render();
    assert_eq!(
        snippet,
        "<script type=\"text/javascript\">
var _gas = _gas || [];

_gas.push(['_setAccount', 'UA-1111-1']);
_gas.push(['_trackPageview']);

(function() {
var ga = document.createElement('script');
ga.type = 'text/javascript';
ga.async = true;
ga.src = '//cdnjs.cloudflare.com/ajax/libs/gas/1.10.1/gas.min.js';
var s = document.getElementsByTagName('script')[0];
s.parentNode.insertBefore(ga, s);
})();
</script>"
    );
}

#[test]
fn render_reflects_later_mutations() {
    let mut tag = GasTag::new();
    tag.push("_trackPageview").unwrap();
    let first = tag.render();
    assert_eq!(first, tag.render());

    tag.push("_gasTrackForms").unwrap();
    let second = tag.render();
    assert_ne!(first, second);
    assert_eq!(push_lines(&second).len(), 2);
}

#[test]
fn multi_and_single_calls_follow_their_merge_rules() {
    let mut tag = GasTag::new();
    tag.push_with("_setAccount", "UA-1").unwrap();
    tag.push_with("_setSampleRate", "10").unwrap();
    tag.push_with("_setAccount", "UA-2").unwrap();
    tag.push_with("_setSampleRate", "20").unwrap();
    tag.push_with("_setAccount", "UA-3").unwrap();

    assert_eq!(
        push_lines(&tag.render()),
        vec![
            "_gas.push(['_setAccount', 'UA-1']);",
            "_gas.push(['_setAccount', 'UA-2']);",
            "_gas.push(['_setAccount', 'UA-3']);",
            "_gas.push(['_setSampleRate', '20']);",
        ]
    );
}

#[test]
fn named_trackers_get_their_own_statements() {
    let mut tag = GasTag::new();
    tag.add_account("UA-1111-1", Some("custom")).unwrap();
    let view = tag
        .add_accounts(vec![("rollup", "UA-3333-3")])
        .unwrap()
        .unwrap();
    assert!(matches!(view, OneOrMany::Many(accounts) if accounts.len() == 2));

    let lines = tag.statements();
    assert_eq!(lines[0].method(), "custom._setAccount");
    assert_eq!(lines[0].args(), Some(&CallArgs::from("UA-1111-1")));
    assert_eq!(lines[1].method(), "rollup._setAccount");
}

#[test]
fn cross_domain_calls_follow_existing_ones() {
    let mut tag = GasTag::new();
    tag.add_account("UA-1", None).unwrap();
    tag.push("_trackPageview").unwrap();
    tag.add_domains([".a.com", ".b.com"]).unwrap();

    assert_eq!(
        push_lines(&tag.render()),
        vec![
            "_gas.push(['_setAccount', 'UA-1']);",
            "_gas.push(['_trackPageview']);",
            "_gas.push(['_setAllowLinker', 'true']);",
            "_gas.push(['_setDomainName', '.a.com']);",
            "_gas.push(['_setDomainName', '.b.com']);",
            "_gas.push(['_gasMultiDomain', 'click']);",
        ]
    );
}

#[test]
fn empty_builder_reports_no_accounts_or_domains() {
    let tag = GasTag::default();
    assert!(tag.accounts().is_none());
    assert!(tag.domains().is_none());
    assert!(push_lines(&tag.render()).is_empty());
}

#[test]
fn defaults_snippet_has_one_statement_per_tracker() {
    let snippet = GasTag::defaults("UA-2222-2", ".example.com").unwrap();
    let lines = push_lines(&snippet);
    assert_eq!(lines.len(), 10);
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.contains("'_trackPageview'"))
            .count(),
        1
    );
    assert!(lines.contains(&"_gas.push(['_gasTrackYoutube', {'true'}]);"));
    assert!(lines.contains(&"_gas.push(['_gasTrackVimeo', {'true'}]);"));
    assert_eq!(lines[0], "_gas.push(['_setAccount', 'UA-2222-2']);");
    assert_eq!(lines[1], "_gas.push(['_setDomainName', '.example.com']);");
}

#[test]
fn defaults_are_independent_between_calls() {
    let first = GasTag::defaults("UA-1", ".one.com").unwrap();
    let second = GasTag::defaults("UA-2", ".two.com").unwrap();
    assert!(!second.contains("UA-1"));
    assert!(!second.contains(".one.com"));
    assert_eq!(push_lines(&first).len(), push_lines(&second).len());
}

#[test]
fn constructor_batch_uses_multi_dispatch() {
    let tag = GasTag::with_calls(vec![
        MethodSpec::with_args("_setAccount", "UA-1"),
        MethodSpec::with_args("second._setAccount", "UA-2"),
        MethodSpec::bare("_trackPageview"),
        MethodSpec::with_args("_setAccount", "UA-3"),
    ])
    .unwrap();
    let methods: Vec<String> = tag
        .statements()
        .iter()
        .map(|statement| statement.method().to_string())
        .collect();
    assert_eq!(
        methods,
        vec![
            "_setAccount",
            "second._setAccount",
            "_setAccount",
            "_trackPageview"
        ]
    );
}

#[test]
fn json_batches_reject_nested_arguments_without_mutating() {
    let mut tag = GasTag::new();
    tag.push("_trackPageview").unwrap();
    let before = tag.clone();

    let err = tag
        .push_json(&json!([
            {"_gasTrackForms": null},
            {"_gasTrackYoutube": {"force": {"really": true}}}
        ]))
        .unwrap_err();
    assert_eq!(err.code_str(), "gas/invalid-argument");
    assert_eq!(tag, before);
}

#[test]
fn config_document_renders_full_snippet() {
    let config = TagConfig::from_json_str(
        r#"{
            "scriptUrl": "/assets/gas.min.js",
            "accounts": ["UA-1111-1"],
            "domains": ".example.com",
            "calls": {"_trackPageview": null, "_gasTrackOutboundLinks": null}
        }"#,
    )
    .unwrap();
    let snippet = GasTag::from_config(&config).unwrap().render();

    assert!(snippet.contains("ga.src = '/assets/gas.min.js';"));
    assert_eq!(
        push_lines(&snippet),
        vec![
            "_gas.push(['_setAccount', 'UA-1111-1']);",
            "_gas.push(['_setDomainName', '.example.com']);",
            "_gas.push(['_trackPageview']);",
            "_gas.push(['_gasTrackOutboundLinks']);",
        ]
    );
}

#[test]
fn malformed_config_is_invalid_argument() {
    let err = TagConfig::from_json_str("{\"accounts\": ").unwrap_err();
    assert_eq!(err.code_str(), "gas/invalid-argument");

    let config = TagConfig::from_json_str(r#"{"accounts": 42}"#).unwrap();
    let err = GasTag::from_config(&config).unwrap_err();
    assert_eq!(
        err.message(),
        "Accounts must be a string, an array or an object, got a number"
    );
}
