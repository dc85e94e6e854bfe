//! Output formatter implementations.

use std::fmt::Write as _;

use serde_json::json;

use crate::error::Result;
use crate::installable::Installable;

use super::OutputFormatter;

/// Human-readable formatter.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, installable: &Installable) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "locator:  {}", installable.locator());
        let _ = write!(out, "primary:  {}", installable.expansion().primary());
        if let Some(fallback) = installable.expansion().fallback() {
            let _ = write!(out, "\nfallback: {fallback}");
        }
        Ok(out)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, installable: &Installable) -> Result<String> {
        let value = json!({
            "locator": installable.locator().to_string(),
            "primary": installable.expansion().primary().to_string(),
            "fallback": installable
                .expansion()
                .fallback()
                .map(ToString::to_string),
            "candidates": installable.candidate_references(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Formatter printing bare candidate references, one per line, in
/// priority order.
pub struct NixArgsFormatter;

impl OutputFormatter for NixArgsFormatter {
    fn format(&self, installable: &Installable) -> Result<String> {
        Ok(installable.candidate_references().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandKind, System};

    fn installable() -> Installable {
        let system: System = "x86_64-linux".parse().unwrap();
        Installable::resolve("nixpkgs#hello", CommandKind::Run, Some(&system), None).unwrap()
    }

    #[test]
    fn test_human_format() {
        let out = HumanFormatter.format(&installable()).unwrap();
        assert!(out.contains("locator:  nixpkgs"));
        assert!(out.contains("primary:  apps.x86_64-linux.hello"));
        assert!(out.contains("fallback: packages.x86_64-linux.hello"));
    }

    #[test]
    fn test_human_format_omits_absent_fallback() {
        let system: System = "x86_64-linux".parse().unwrap();
        let installable =
            Installable::resolve(".#foo", CommandKind::Build, Some(&system), None).unwrap();
        let out = HumanFormatter.format(&installable).unwrap();
        assert!(!out.contains("fallback"));
    }

    #[test]
    fn test_json_format() {
        let out = JsonFormatter.format(&installable()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["locator"], "nixpkgs");
        assert_eq!(value["primary"], "apps.x86_64-linux.hello");
        assert_eq!(value["fallback"], "packages.x86_64-linux.hello");
        assert_eq!(value["candidates"][0], "nixpkgs#apps.x86_64-linux.hello");
        assert_eq!(
            value["candidates"][1],
            "nixpkgs#packages.x86_64-linux.hello"
        );
    }

    #[test]
    fn test_json_null_fallback() {
        let system: System = "x86_64-linux".parse().unwrap();
        let installable =
            Installable::resolve(".#foo", CommandKind::Eval, Some(&system), None).unwrap();
        let out = JsonFormatter.format(&installable).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["fallback"].is_null());
    }

    #[test]
    fn test_nix_args_format() {
        let out = NixArgsFormatter.format(&installable()).unwrap();
        assert_eq!(
            out,
            "nixpkgs#apps.x86_64-linux.hello\nnixpkgs#packages.x86_64-linux.hello"
        );
    }
}
