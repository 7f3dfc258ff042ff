//! `go list -u -m all` output parser
//!
//! Each line has the form `<module> <version> [<latest>]`, where the bracketed
//! latest version is only present when an update is available:
//!
//! ```text
//! example.com/app
//! golang.org/x/net v0.17.0 [v0.24.0]
//! golang.org/x/text v0.14.0
//! ```
//!
//! Lines that do not match (the main module, banners, warnings) are skipped.

use regex::Regex;
use std::sync::LazyLock;

static MODULE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+(\S+)(?:\s+\[([^\]]+)\])?").unwrap());

/// One module line from `go list -u -m all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLine {
    /// Module path
    pub name: String,
    /// Version in use
    pub current: String,
    /// Latest version, when go reported one
    pub latest: Option<String>,
}

impl ModuleLine {
    /// Returns the latest version if it differs from the current one
    pub fn available_update(&self) -> Option<&str> {
        self.latest
            .as_deref()
            .filter(|latest| *latest != self.current)
    }
}

/// Parsed `go list` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoListOutput {
    /// Number of non-blank lines, matched or not
    pub line_count: usize,
    /// Lines that matched the module pattern, in output order
    pub modules: Vec<ModuleLine>,
}

/// Parse a single output line
pub fn parse_module_line(line: &str) -> Option<ModuleLine> {
    let caps = MODULE_LINE_RE.captures(line)?;
    Some(ModuleLine {
        name: caps.get(1)?.as_str().to_string(),
        current: caps.get(2)?.as_str().to_string(),
        latest: caps.get(3).map(|m| m.as_str().to_string()),
    })
}

/// Parse the whole output of `go list -u -m all`
pub fn parse_go_list(output: &str) -> GoListOutput {
    let mut parsed = GoListOutput::default();

    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        parsed.line_count += 1;
        if let Some(module) = parse_module_line(line) {
            parsed.modules.push(module);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_update() {
        let module = parse_module_line("golang.org/x/net v0.17.0 [v0.24.0]").unwrap();
        assert_eq!(module.name, "golang.org/x/net");
        assert_eq!(module.current, "v0.17.0");
        assert_eq!(module.latest.as_deref(), Some("v0.24.0"));
        assert_eq!(module.available_update(), Some("v0.24.0"));
    }

    #[test]
    fn test_parse_line_without_update() {
        let module = parse_module_line("golang.org/x/text v0.14.0").unwrap();
        assert_eq!(module.latest, None);
        assert_eq!(module.available_update(), None);
    }

    #[test]
    fn test_parse_line_same_latest() {
        let module = parse_module_line("github.com/a/b v1.0.0 [v1.0.0]").unwrap();
        assert_eq!(module.available_update(), None);
    }

    #[test]
    fn test_parse_line_with_replacement() {
        let module =
            parse_module_line("github.com/a/b v1.0.0 [v1.2.0] => ../local/b").unwrap();
        assert_eq!(module.name, "github.com/a/b");
        assert_eq!(module.available_update(), Some("v1.2.0"));
    }

    #[test]
    fn test_parse_main_module_line_skipped() {
        assert_eq!(parse_module_line("example.com/app"), None);
        assert_eq!(parse_module_line("  indented v1.0.0"), None);
    }

    #[test]
    fn test_parse_go_list_counts_non_blank_lines() {
        let output = "example.com/app\n\
                      golang.org/x/net v0.17.0 [v0.24.0]\n\
                      \n\
                      golang.org/x/text v0.14.0\n";

        let parsed = parse_go_list(output);
        assert_eq!(parsed.line_count, 3);
        assert_eq!(parsed.modules.len(), 2);
        assert_eq!(parsed.modules[0].name, "golang.org/x/net");
        assert_eq!(parsed.modules[1].name, "golang.org/x/text");
    }

    #[test]
    fn test_parse_go_list_crlf() {
        let parsed = parse_go_list("golang.org/x/net v0.17.0\r\ngolang.org/x/sys v0.1.0 [v0.2.0]\r\n");
        assert_eq!(parsed.line_count, 2);
        assert_eq!(parsed.modules[0].current, "v0.17.0");
        assert_eq!(parsed.modules[1].available_update(), Some("v0.2.0"));
    }

    #[test]
    fn test_parse_go_list_empty() {
        assert_eq!(parse_go_list(""), GoListOutput::default());
    }
}
