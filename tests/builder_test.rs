//! Integration tests for the public builder API.

use sharkline::command::{
    build, CaptureFilterSpec, CaptureMode, FilterKeyword, OptionKind, OptionSelection,
    ToolInvocation,
};
use sharkline::SharklineError;
use std::path::PathBuf;

#[test]
fn identical_input_yields_identical_argument_lists() {
    let mode = CaptureMode::Interface("en0".to_string());
    let selection = OptionSelection::new()
        .select(OptionKind::CaptureFilter)
        .select_with(OptionKind::WriteFile, "/tmp/session.pcap")
        .select_with(OptionKind::PacketCount, "100");
    let spec = CaptureFilterSpec::new()
        .keyword(FilterKeyword::Http)
        .keyword(FilterKeyword::Tcp)
        .host("10.0.0.1");

    let first = build(&mode, &selection, Some(&spec)).unwrap();
    let second = build(&mode, &selection, Some(&spec)).unwrap();

    assert_eq!(first.args(), second.args());
}

#[test]
fn filter_combines_keywords_and_host_as_one_argument() {
    let mode = CaptureMode::Interface("en0".to_string());
    let selection = OptionSelection::new().select(OptionKind::CaptureFilter);
    let spec = CaptureFilterSpec::new()
        .keyword(FilterKeyword::Http)
        .keyword(FilterKeyword::Tcp)
        .host("10.0.0.1");

    let invocation = build(&mode, &selection, Some(&spec)).unwrap();

    let args = invocation.args();
    assert_eq!(args[..3], ["-i", "en0", "-f"]);
    assert_eq!(args[3], "http and tcp and host 10.0.0.1");
    assert_eq!(args.len(), 4);
}

#[test]
fn missing_display_filter_value_is_rejected() {
    let mode = CaptureMode::FileRead(vec![PathBuf::from("/tmp/cap.pcap")]);
    let selection = OptionSelection::new().select(OptionKind::DisplayFilter);

    let err = build(&mode, &selection, None).unwrap_err();
    assert!(matches!(err, SharklineError::MissingOptionValue { .. }));
}

#[test]
fn free_text_never_escapes_its_argument() {
    // A host value full of shell metacharacters must stay inside the one
    // filter argument, with nothing split out or re-quoted.
    let hostile = "$(reboot) && echo pwned | tee /etc/passwd";
    let mode = CaptureMode::Interface("en0".to_string());
    let selection = OptionSelection::new().select(OptionKind::CaptureFilter);
    let spec = CaptureFilterSpec::new().host(hostile);

    let invocation = build(&mode, &selection, Some(&spec)).unwrap();

    let args = invocation.args();
    assert_eq!(args.len(), 4);
    assert_eq!(args[3], format!("host {hostile}"));
    // No argument besides the filter expression carries the hostile text.
    assert!(args[..3].iter().all(|a| !a.contains("reboot")));
}

#[test]
fn selection_order_is_stable_across_calls() {
    let mode = CaptureMode::FileRead(vec![PathBuf::from("/tmp/cap.pcap")]);
    let selection = OptionSelection::new()
        .select(OptionKind::TwoPass)
        .select_with(OptionKind::DisplayFilter, "dns")
        .select(OptionKind::JsonOutput);

    let first = build(&mode, &selection, None).unwrap();
    let second = build(&mode, &selection, None).unwrap();

    assert_eq!(
        first.args(),
        ["-r", "/tmp/cap.pcap", "-2", "-Y", "dns", "-T", "json"]
    );
    assert_eq!(first.args(), second.args());
}

#[test]
fn empty_selection_builds_the_mode_alone() {
    let mode = CaptureMode::FileRead(vec![PathBuf::from("/tmp/cap.pcap")]);
    let invocation = build(&mode, &OptionSelection::new(), None).unwrap();
    assert_eq!(invocation.args(), ["-r", "/tmp/cap.pcap"]);
}

#[test]
fn invocations_compare_by_argument_list() {
    let direct = ToolInvocation::new(vec!["-i".into(), "en0".into()]);
    let built = build(
        &CaptureMode::Interface("en0".to_string()),
        &OptionSelection::new(),
        None,
    )
    .unwrap();
    assert_eq!(direct, built);
}
