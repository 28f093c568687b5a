use std::fmt::Formatter;

use super::mapping::RedirectMapping;

pub const REDIRECTS_FILE_NAME: &str = "_redirects";
pub const HEADERS_FILE_NAME: &str = "_headers";

/// HTTP status written after every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectStatus(pub u16);

impl RedirectStatus {
    pub const TEMPORARY: RedirectStatus = RedirectStatus(307);
}

impl Default for RedirectStatus {
    fn default() -> Self {
        RedirectStatus::TEMPORARY
    }
}

impl std::fmt::Display for RedirectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One manifest line. Alias and target are written verbatim, without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectRule<'a> {
    pub alias: &'a str,
    pub target: &'a str,
    pub status: RedirectStatus,
}

impl std::fmt::Display for RedirectRule<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{} {} {}", self.alias, self.target, self.status)
    }
}

pub trait ToRedirectManifest {
    fn to_redirect_manifest(&self, status: RedirectStatus) -> String;
}

impl ToRedirectManifest for RedirectMapping {
    fn to_redirect_manifest(&self, status: RedirectStatus) -> String {
        self.iter()
            .map(|(alias, target)| RedirectRule {
                alias,
                target,
                status,
            })
            .fold(String::new(), |mut manifest, rule| {
                manifest.push_str(&rule.to_string());
                manifest.push('\n');
                manifest
            })
    }
}
