// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic construction and parsing of hierarchical bus subjects.
//!
//! A subject is a dot-delimited tuple with one of three shapes depending on
//! the endpoint class: bios-scoped, app-scoped, or proxy-scoped. Building a
//! subject always goes through [`SubjectBuilder`] so the verb set and shape
//! cannot drift between call sites.

use std::fmt;

/// The closed set of verbs a subject may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape a [`SubjectBuilder`] constructs subjects in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `{globalUUID}.{verb}.{resource}.{op}`
    Bios,
    /// `{appID}.{verb}.{resource}.{op}`
    App,
    /// `{globalUUID}.proxy.{appID}.{verb}.{resource}.{op}`
    Proxy,
}

/// A validated dot-delimited bus subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject(String);

impl Subject {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into dot-delimited segments.
    pub fn parse(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    /// Everything after the first `proxy.` marker, or `None` if absent.
    pub fn extract_after_proxy(&self) -> Option<&str> {
        self.0.splitn(2, "proxy.").nth(1)
    }

    /// The first segment after `proxy.`, i.e. the target app ID.
    pub fn extract_app_id(&self) -> Option<&str> {
        self.extract_after_proxy()?.splitn(2, '.').next()
    }

    /// Whether this subject matches a NATS-style wildcard pattern
    /// (`*` matches one segment, `>` matches any remaining depth).
    pub fn matches(&self, pattern: &str) -> bool {
        let subj_parts: Vec<&str> = self.0.split('.').collect();
        let pat_parts: Vec<&str> = pattern.split('.').collect();
        for (i, p) in pat_parts.iter().enumerate() {
            if *p == ">" {
                return i <= subj_parts.len();
            }
            match subj_parts.get(i) {
                Some(_) if *p == "*" => continue,
                Some(s) if s == p => continue,
                _ => return false,
            }
        }
        subj_parts.len() == pat_parts.len()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Subject> for String {
    fn from(s: Subject) -> Self {
        s.0
    }
}

/// Builds subjects for a single bound scope (bios / app / proxy).
///
/// Constructing one is infallible given a [`Scope`] — unlike the original
/// string-typed `subjectType`, there is no fourth value to reject at
/// runtime.
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    scope: Scope,
    global_uuid: String,
    app_id: String,
}

impl SubjectBuilder {
    pub fn new(scope: Scope, global_uuid: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self { scope, global_uuid: global_uuid.into(), app_id: app_id.into() }
    }

    pub fn bios(global_uuid: impl Into<String>) -> Self {
        Self::new(Scope::Bios, global_uuid, String::new())
    }

    pub fn app(app_id: impl Into<String>) -> Self {
        Self::new(Scope::App, String::new(), app_id)
    }

    pub fn proxy(global_uuid: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self::new(Scope::Proxy, global_uuid, app_id)
    }

    pub fn build_subject(&self, verb: Verb, resource: &str, op: &str) -> Subject {
        let s = match self.scope {
            Scope::Bios => format!("{}.{}.{}.{}", self.global_uuid, verb, resource, op),
            Scope::App => format!("{}.{}.{}.{}", self.app_id, verb, resource, op),
            Scope::Proxy => {
                format!("{}.proxy.{}.{}.{}.{}", self.global_uuid, self.app_id, verb, resource, op)
            }
        };
        Subject::new(s)
    }

    /// A broadcast subject shared by every host: `global.{verb}.{resource}.{op}`.
    pub fn global_subject(verb: Verb, resource: &str, op: &str) -> Subject {
        Subject::new(format!("global.{}.{}.{}", verb, resource, op))
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
