// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    bios = { Scope::Bios, "node-7", "", Verb::Get, "apps.manager", "installed", "node-7.get.apps.manager.installed" },
    app = { Scope::App, "", "math", Verb::Post, "math.add", "run", "math.post.math.add.run" },
)]
fn build_subject_matches_expected_shape(
    scope: Scope,
    uuid: &str,
    app_id: &str,
    verb: Verb,
    resource: &str,
    op: &str,
    expected: &str,
) {
    let sb = SubjectBuilder::new(scope, uuid, app_id);
    let subj = sb.build_subject(verb, resource, op);
    assert_eq!(subj.as_str(), expected);
}

#[test]
fn proxy_subject_round_trips_through_extract_after_proxy() {
    let sb = SubjectBuilder::proxy("node-7", "app");
    let subj = sb.build_subject(Verb::Get, "X", "Y");
    assert_eq!(subj.as_str(), "node-7.proxy.app.get.X.Y");

    let tail = subj.extract_after_proxy().expect("has proxy marker");
    let target = SubjectBuilder::app("app").build_subject(Verb::Get, "X", "Y");
    assert_eq!(tail, target.as_str());
}

#[test]
fn extract_app_id_returns_first_segment_after_proxy() {
    let subj = Subject::new("node-7.proxy.math.get.math.add");
    assert_eq!(subj.extract_app_id(), Some("math"));
}

#[test]
fn extract_app_id_is_none_without_proxy_marker() {
    let subj = Subject::new("node-7.get.system.ping");
    assert_eq!(subj.extract_app_id(), None);
}

#[test]
fn global_subject_has_fixed_leading_segment() {
    let subj = SubjectBuilder::global_subject(Verb::Get, "system", "ping");
    assert_eq!(subj.as_str(), "global.get.system.ping");
}

#[test]
fn parse_splits_on_dots() {
    let subj = Subject::new("a.b.c.d");
    assert_eq!(subj.parse(), vec!["a", "b", "c", "d"]);
}

#[test]
fn wildcard_star_matches_one_segment() {
    let subj = Subject::new("uuid.get.system.systemctl.status");
    assert!(subj.matches("uuid.get.system.systemctl.*"));
    assert!(!subj.matches("uuid.get.system.*"));
}

#[test]
fn wildcard_gt_matches_any_depth() {
    let subj = Subject::new("uuid.proxy.app.get.x.y.z");
    assert!(subj.matches("uuid.proxy.>"));
}

#[cfg(feature = "test-support")]
mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn subject_round_trip(uuid in "[a-z0-9-]{1,12}", resource in "[a-z]{1,8}", op in "[a-z]{1,8}") {
            let sb = SubjectBuilder::bios(uuid.clone());
            let subj = sb.build_subject(Verb::Get, &resource, &op);
            let parts = subj.parse();
            prop_assert_eq!(parts, vec![uuid.as_str(), "get", resource.as_str(), op.as_str()]);
        }
    }
}
