//! Syntax highlighting for `@example` code.
//!
//! Examples are always highlighted with the script (JavaScript) grammar. Output
//! uses `hljs-*` class names so the site's existing stylesheet applies.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        (?P<comment>//[^\n]*|/\*[\s\S]*?\*/)
        | (?P<string>"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\[\s\S])*`)
        | (?P<number>\b(?:0[xXbBoO][0-9a-fA-F_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)n?\b)
        | (?P<word>[A-Za-z_$][A-Za-z0-9_$]*)
        "#,
    )
    .expect("static token pattern is valid")
});

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "let", "new", "of", "return", "static",
    "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with", "yield",
];

const LITERALS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const BUILT_INS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "JSON", "Map", "Math", "Number", "Object", "Promise",
    "RegExp", "Set", "String", "Symbol", "WeakMap", "WeakSet", "console", "document", "window",
];

/// Highlight `code` as script source, returning escaped HTML.
pub fn highlight_script(code: &str) -> String {
    let mut output = String::with_capacity(code.len() * 2);
    let mut last = 0;

    for captures in TOKEN.captures_iter(code) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        push_escaped(&mut output, &code[last..whole.start()]);
        last = whole.end();

        let class = if captures.name("comment").is_some() {
            Some("comment")
        } else if captures.name("string").is_some() {
            Some("string")
        } else if captures.name("number").is_some() {
            Some("number")
        } else {
            word_class(whole.as_str())
        };

        match class {
            Some(class) => {
                output.push_str("<span class=\"hljs-");
                output.push_str(class);
                output.push_str("\">");
                push_escaped(&mut output, whole.as_str());
                output.push_str("</span>");
            }
            None => push_escaped(&mut output, whole.as_str()),
        }
    }

    push_escaped(&mut output, &code[last..]);
    output
}

fn word_class(word: &str) -> Option<&'static str> {
    if KEYWORDS.contains(&word) {
        Some("keyword")
    } else if LITERALS.contains(&word) {
        Some("literal")
    } else if BUILT_INS.contains(&word) {
        Some("built_in")
    } else {
        None
    }
}

fn push_escaped(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_stays_empty() {
        assert_eq!(highlight_script(""), "");
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            highlight_script("const v = x;"),
            r#"<span class="hljs-keyword">const</span> v = x;"#
        );
    }

    #[test]
    fn strings_are_escaped_inside_spans() {
        assert_eq!(
            highlight_script(r#"log("<b>")"#),
            r#"log(<span class="hljs-string">&quot;&lt;b&gt;&quot;</span>)"#
        );
    }

    #[test]
    fn comments_numbers_and_literals() {
        assert_eq!(
            highlight_script("// hi\nn = 42 || null"),
            "<span class=\"hljs-comment\">// hi</span>\nn = \
             <span class=\"hljs-number\">42</span> || \
             <span class=\"hljs-literal\">null</span>"
        );
    }

    #[test]
    fn built_ins_are_marked() {
        assert_eq!(
            highlight_script("Math.max(a, b)"),
            r#"<span class="hljs-built_in">Math</span>.max(a, b)"#
        );
    }

    #[test]
    fn identifiers_with_digits_are_not_numbers() {
        assert_eq!(highlight_script("vec3"), "vec3");
    }

    #[test]
    fn block_comments_span_lines() {
        assert_eq!(
            highlight_script("/* a\nb */x"),
            "<span class=\"hljs-comment\">/* a\nb */</span>x"
        );
    }
}
