//! Inline directive parsing for `etabs:` comments
//!
//! Supports in-file configuration overrides via special comments, with
//! any common comment leader (or none at all):
//! `# etabs: --gap 4`, `// etabs: --gap=3`, `! etabs: -g 2`
//!
//! The directive line itself is ordinary text to the splitter and is
//! reflowed like any other line.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern to match etabs directives
static ETABS_DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(?://|--|[#;!*])\s*)?etabs:\s*(.*?)\s*$").unwrap()
});

/// Parsed directive options that can override config
#[derive(Debug, Default, Clone)]
pub struct DirectiveOverrides {
    /// Inter-column gap width. Values outside bounds are rejected by
    /// config validation after the merge.
    pub gap: Option<usize>,
}

impl DirectiveOverrides {
    /// Check if any overrides are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gap.is_none()
    }
}

/// Check if a line contains an etabs directive
#[must_use]
pub fn is_directive_line(line: &str) -> bool {
    ETABS_DIRECTIVE_RE.is_match(line)
}

/// Parse an etabs directive line and return option overrides
///
/// # Arguments
/// * `line` - The line containing the directive
///
/// # Returns
/// * `Some(DirectiveOverrides)` if the line is a valid directive
/// * `None` if the line is not a directive or sets nothing
#[must_use]
pub fn parse_directive(line: &str) -> Option<DirectiveOverrides> {
    let caps = ETABS_DIRECTIVE_RE.captures(line)?;
    let args_str = caps.get(1)?.as_str();

    parse_directive_args(args_str)
}

/// Parse directive arguments into overrides
fn parse_directive_args(args_str: &str) -> Option<DirectiveOverrides> {
    let mut overrides = DirectiveOverrides::default();
    let tokens: Vec<&str> = args_str.split_whitespace().collect();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        match token {
            "-g" | "--gap" => {
                i += 1;
                if i < tokens.len() {
                    overrides.gap = tokens[i].parse().ok();
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--gap=") {
                    overrides.gap = value.parse().ok();
                }
                // Unknown option, skip
            }
        }
        i += 1;
    }

    if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    }
}

/// Scan input for etabs directives and return the first found
///
/// This reads the input looking for `etabs:` lines.
/// Only the first directive is used (subsequent ones are ignored).
pub fn find_directive<R: std::io::BufRead>(input: &mut R) -> Option<DirectiveOverrides> {
    let mut buffer = String::new();

    while input.read_line(&mut buffer).ok()? > 0 {
        if is_directive_line(&buffer) {
            return parse_directive(&buffer);
        }
        buffer.clear();
    }

    None
}
