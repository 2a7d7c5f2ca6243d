// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Language-agnostic structural view of a code snippet.
//!
//! Guides mix C#, Java, Rust, Python and JavaScript, so this is a line
//! scanner rather than a parser: it splits each line into code and comment,
//! blanks out string literals, finds test functions and their bodies, and
//! recognises Arrange/Act/Assert phase markers and assertion calls.

use std::sync::LazyLock;

use regex::Regex;

/// Function signatures, one named group per language family.
#[allow(clippy::expect_used)]
static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        \bfn\s+(?P<rust>[A-Za-z_][A-Za-z0-9_]*)\s*(?:<[^>]*>)?\s*\(
        | \bvoid\s+(?P<clike>[A-Za-z_][A-Za-z0-9_]*)\s*\(
        | \bTask\s+(?P<task>[A-Za-z_][A-Za-z0-9_]*)\s*\(
        | ^\s*(?:async\s+)?def\s+(?P<py>[A-Za-z_][A-Za-z0-9_]*)\s*\(
        | \b(?:it|test)\s*\(\s*["'`](?P<js>[^"'`]*)["'`]
        "#,
    )
    .expect("valid regex pattern")
});

/// Attributes and annotations that mark the next function as a test.
#[allow(clippy::expect_used)]
static TEST_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"#\[(?:\w+::)*test\b|\[(?:Fact|Theory|Test|TestMethod|TestCase)\b|@(?:Test|ParameterizedTest)\b",
    )
    .expect("valid regex pattern")
});

/// Setup and teardown hooks, which are never tests themselves.
#[allow(clippy::expect_used)]
static SETUP_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[(?:SetUp|TearDown|OneTimeSetUp|OneTimeTearDown|TestInitialize|TestCleanup)\]|@(?:Before|After)\w*\b",
    )
    .expect("valid regex pattern")
});

/// Calls that verify an outcome.
#[allow(clippy::expect_used)]
static ASSERTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:debug_)?assert\w*!?\s*\(
        | \b\w*Assert\.\w+
        | \bDebug\.Assert\s*\(
        | (?:^|[^.\w])expect\s*\(
        | \.should\w*\b
        | \.Should\w*\s*\(
        | ^\s*assert\s
        | \bverify\s*\(
        | \.Verify\w*\s*\(
        ",
    )
    .expect("valid regex pattern")
});

/// One line split into its code and comment parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-indexed line within the snippet.
    pub number: usize,
    /// The line as written.
    pub raw: &'a str,
    /// Code with comments removed and string literal contents blanked.
    pub code: String,
    /// Comment text without its delimiter, if the line has one.
    pub comment: Option<String>,
}

impl ScannedLine<'_> {
    /// Whether the line calls an assertion form.
    pub fn is_assertion(&self) -> bool {
        ASSERTION.is_match(&self.code)
    }

    /// The Arrange/Act/Assert marker carried by this line's comment.
    pub fn phase(&self) -> Option<Phase> {
        self.comment.as_deref().and_then(Phase::from_comment)
    }

    /// Code with comments removed but string literals intact.
    pub fn code_with_strings(&self) -> &str {
        strip_comment(self.raw)
    }
}

/// A phase marker comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Arrange,
    Act,
    Assert,
    /// `Act & Assert`, `act and assert`, `act/assert`.
    ActAssert,
}

impl Phase {
    /// Parse a phase marker from comment text.
    ///
    /// `Given`/`When`/`Then` are accepted as Arrange/Act/Assert.
    pub fn from_comment(comment: &str) -> Option<Self> {
        let lowered = comment.trim().to_lowercase();
        let mut words = lowered.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty());
        let first = words.next()?;
        let phase = match first {
            "arrange" | "given" => Phase::Arrange,
            "act" | "when" => Phase::Act,
            "assert" | "then" => Phase::Assert,
            _ => return None,
        };
        if phase == Phase::Act {
            let next = words.next();
            let next = if next == Some("and") { words.next() } else { next };
            if matches!(next, Some("assert" | "then")) {
                return Some(Phase::ActAssert);
            }
        }
        Some(phase)
    }

    pub fn includes_act(self) -> bool {
        matches!(self, Phase::Act | Phase::ActAssert)
    }

    pub fn includes_assert(self) -> bool {
        matches!(self, Phase::Assert | Phase::ActAssert)
    }
}

/// A test function found in a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFn {
    /// Identifier name. `None` for anonymous bodies and string-named JS tests.
    pub name: Option<String>,
    /// Description of a string-named test (`it("...")`).
    pub description: Option<String>,
    /// Indices into [`Snippet::lines`] of the body.
    pub body: std::ops::Range<usize>,
}

/// Structural view of one code example.
#[derive(Debug, Clone)]
pub struct Snippet<'a> {
    lines: Vec<ScannedLine<'a>>,
    tests: Vec<TestFn>,
    malformed: bool,
}

impl<'a> Snippet<'a> {
    pub fn parse(source: &'a str) -> Self {
        let lines = scan_lines(source);
        let malformed = !braces_balanced(&lines);
        let tests = if malformed { Vec::new() } else { find_tests(&lines) };
        Self { lines, tests, malformed }
    }

    /// Unbalanced braces: the snippet is not in a syntax we understand.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    /// Whether the snippet has any code at all.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.code.trim().is_empty() && l.comment.is_none())
    }

    pub fn lines(&self) -> &[ScannedLine<'a>] {
        &self.lines
    }

    /// Test functions, or one anonymous body covering the whole snippet when
    /// no signature is present.
    pub fn tests(&self) -> &[TestFn] {
        &self.tests
    }

    /// Lines of one test's body.
    pub fn body(&self, test: &TestFn) -> &[ScannedLine<'a>] {
        &self.lines[test.body.clone()]
    }

    /// Lines of every test body, each line at most once.
    pub fn body_lines(&self) -> impl Iterator<Item = &ScannedLine<'a>> {
        let mut seen = vec![false; self.lines.len()];
        for test in &self.tests {
            for i in test.body.clone() {
                seen[i] = true;
            }
        }
        self.lines.iter().zip(seen).filter(|(_, s)| *s).map(|(l, _)| l)
    }

    /// Lines that call an assertion form.
    pub fn assertion_lines(&self) -> impl Iterator<Item = &ScannedLine<'a>> {
        self.lines.iter().filter(|l| l.is_assertion())
    }

    /// Code of every line joined by newlines, comments removed.
    pub fn code(&self) -> String {
        self.lines.iter().map(|l| l.code.as_str()).collect::<Vec<_>>().join("\n")
    }
}

/// Split every line of `source` into code and comment.
fn scan_lines(source: &str) -> Vec<ScannedLine<'_>> {
    let mut in_block_comment = false;
    source
        .lines()
        .enumerate()
        .map(|(idx, raw)| {
            let (code, comment) = split_line(raw, &mut in_block_comment);
            ScannedLine { number: idx + 1, raw, code, comment }
        })
        .collect()
}

/// Whether `#` at byte `i` starts a comment (`# text`, not `#[attr]`).
fn is_hash_comment(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'#' && bytes.get(i + 1).is_none_or(|b| b.is_ascii_whitespace())
}

/// Split a line into code (string contents blanked) and comment text.
fn split_line(raw: &str, in_block_comment: &mut bool) -> (String, Option<String>) {
    let bytes = raw.as_bytes();
    let mut code = String::with_capacity(raw.len());
    let mut comment: Option<String> = None;
    let mut i = 0;

    if raw.trim_start().starts_with("-- ") {
        let start = raw.len() - raw.trim_start().len() + 3;
        return (String::new(), Some(raw[start..].to_string()));
    }

    while i < bytes.len() {
        if *in_block_comment {
            match raw[i..].find("*/") {
                Some(end) => {
                    let text = raw[i..i + end].trim_start_matches('*').trim();
                    if !text.is_empty() {
                        comment.get_or_insert_with(String::new).push_str(text);
                    }
                    i += end + 2;
                    *in_block_comment = false;
                }
                None => {
                    let text = raw[i..].trim_start_matches('*').trim();
                    if !text.is_empty() {
                        comment.get_or_insert_with(String::new).push_str(text);
                    }
                    break;
                }
            }
            continue;
        }

        let b = bytes[i];
        if raw[i..].starts_with("//") {
            let text = raw[i..].trim_start_matches('/').trim();
            comment = Some(text.to_string());
            break;
        }
        if raw[i..].starts_with("/*") {
            *in_block_comment = true;
            i += 2;
            continue;
        }
        if is_hash_comment(bytes, i) {
            comment = Some(raw[i + 1..].trim().to_string());
            break;
        }
        if b == b'"' || b == b'`' {
            let end = skip_string(bytes, i, b);
            code.push(b as char);
            code.push(b as char);
            i = end;
            continue;
        }
        if b == b'\''
            && let Some(end) = quoted_literal_end(bytes, i)
        {
            code.push_str("''");
            i = end;
            continue;
        }
        // Multi-byte UTF-8 sequences are copied whole.
        let ch_len = raw[i..].chars().next().map_or(1, char::len_utf8);
        code.push_str(&raw[i..i + ch_len]);
        i += ch_len;
    }

    (code, comment)
}

/// Return the byte index after the string literal opened at `start`.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// End of a single-quoted literal (`'a'`, `'\n'`, `'text'`), or `None` when
/// the quote is a Rust lifetime (`&'a`, `<'a>`) or an unmatched apostrophe.
fn quoted_literal_end(bytes: &[u8], start: usize) -> Option<usize> {
    if start > 0 && matches!(bytes[start - 1], b'&' | b'<') {
        return None;
    }
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\'' => return if i > start + 1 { Some(i + 1) } else { None },
            _ => i += 1,
        }
    }
    None
}

/// Remove a trailing `//` or `# ` comment, keeping string literals.
fn strip_comment(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if raw[i..].starts_with("//") || is_hash_comment(bytes, i) {
            return &raw[..i];
        }
        if b == b'"' || b == b'`' {
            i = skip_string(bytes, i, b);
            continue;
        }
        if b == b'\''
            && let Some(end) = quoted_literal_end(bytes, i)
        {
            i = end;
            continue;
        }
        i += 1;
    }
    raw
}

/// Braces must never close more than they opened and must end balanced.
fn braces_balanced(lines: &[ScannedLine<'_>]) -> bool {
    let mut depth: i64 = 0;
    for line in lines {
        for c in line.code.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
    }
    depth == 0
}

/// A function signature found on a line.
struct Signature {
    line: usize,
    name: Option<String>,
    description: Option<String>,
    python: bool,
    is_test: bool,
}

fn find_signatures(lines: &[ScannedLine<'_>]) -> Vec<Signature> {
    let mut found = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        // JS test names live inside the string literal, so keep strings.
        let Some(caps) = SIGNATURE.captures(line.code_with_strings()) else {
            continue;
        };

        let preceding = || lines[idx.saturating_sub(3)..=idx].iter();
        let attributed = preceding().any(|l| TEST_ATTRIBUTE.is_match(l.raw));
        let hook = preceding().any(|l| SETUP_ATTRIBUTE.is_match(l.raw));

        let sig = if let Some(js) = caps.name("js") {
            Signature {
                line: idx,
                name: None,
                description: Some(js.as_str().to_string()),
                python: false,
                is_test: true,
            }
        } else if let Some(py) = caps.name("py") {
            let name = py.as_str().to_string();
            let is_test = attributed || name.starts_with("test");
            Signature { line: idx, name: Some(name), description: None, python: true, is_test }
        } else if let Some(m) = caps.name("rust") {
            let name = m.as_str().to_string();
            let is_test = attributed || name.starts_with("test");
            Signature { line: idx, name: Some(name), description: None, python: false, is_test }
        } else {
            // C#/Java `void Name(` and `Task Name(`: guides often omit the
            // attribute, so any public method counts unless it is a hook.
            let name = caps.name("clike").or_else(|| caps.name("task")).map(|m| m.as_str().to_string());
            let hook_name = name
                .as_deref()
                .is_some_and(|n| matches!(n.to_lowercase().as_str(), "setup" | "teardown"));
            let private = line.raw.contains("private ");
            let is_test = attributed || !(hook || hook_name || private);
            Signature { line: idx, name, description: None, python: false, is_test }
        };
        found.push(sig);
    }
    found
}

/// Locate test functions and their bodies.
fn find_tests(lines: &[ScannedLine<'_>]) -> Vec<TestFn> {
    let signatures = find_signatures(lines);
    if signatures.is_empty() {
        return vec![TestFn { name: None, description: None, body: 0..lines.len() }];
    }

    let any_test = signatures.iter().any(|s| s.is_test);
    signatures
        .iter()
        .filter(|s| s.is_test || !any_test)
        .filter_map(|sig| {
            let body = if sig.python { indented_body(lines, sig.line) } else { brace_body(lines, sig.line)? };
            Some(TestFn { name: sig.name.clone(), description: sig.description.clone(), body })
        })
        .collect()
}

/// Body of a brace-delimited function starting at `start`.
///
/// Returns `None` for declarations without a body (`void Run();`).
fn brace_body(lines: &[ScannedLine<'_>], start: usize) -> Option<std::ops::Range<usize>> {
    let mut depth = 0i64;
    let mut open_line = None;
    for (idx, line) in lines.iter().enumerate().skip(start) {
        for c in line.code.chars() {
            match c {
                '{' => {
                    if open_line.is_none() {
                        open_line = Some(idx);
                    }
                    depth += 1;
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let open = open_line?;
                        // Single-line bodies keep their own line.
                        return Some(if open == idx { idx..idx + 1 } else { open + 1..idx });
                    }
                }
                ';' if open_line.is_none() => return None,
                _ => {}
            }
        }
    }
    None
}

/// Body of a Python function: following lines indented deeper than `def`.
fn indented_body(lines: &[ScannedLine<'_>], start: usize) -> std::ops::Range<usize> {
    let indent_of = |s: &str| s.len() - s.trim_start().len();
    let def_indent = indent_of(lines[start].raw);
    let mut end = start + 1;
    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if line.raw.trim().is_empty() {
            continue;
        }
        if indent_of(line.raw) <= def_indent {
            break;
        }
        end = idx + 1;
    }
    start + 1..end
}

#[cfg(test)]
#[path = "snippet_tests.rs"]
mod tests;
