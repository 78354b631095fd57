//! Shared HTML building blocks.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::schema::ProofStatus;

/// Bytes percent-encoded in a relative link to a document file. `:` is
/// included so that no file name is read as a URL scheme.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Stylesheet shared by the theorem and index documents.
pub(crate) const BASE_CSS: &str = r"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 10px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 40px;
            text-align: center;
        }
        .header h1 { font-size: 2.5em; margin-bottom: 10px; }
        .header p { font-size: 1.1em; opacity: 0.9; }
        .content { padding: 40px; }
        .status-badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 20px;
            font-size: 0.85em;
            font-weight: bold;
        }
        .status-pending { background: #fff3cd; color: #856404; }
        .status-verified { background: #d4edda; color: #155724; }
        .status-in_progress { background: #cce5ff; color: #004085; }
        .status-failed { background: #f8d7da; color: #721c24; }
        .footer {
            background: #f8f9fa;
            padding: 20px;
            text-align: center;
            color: #666;
            font-size: 0.9em;
        }
";

/// Escapes text for inclusion in HTML element content or quoted
/// attribute values.
///
/// # Examples
///
///     use theoremsite::render::escape;
///
///     assert_eq!(escape("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Letter label for a 1-based condition position: `a` … `z`, then `aa`,
/// `ab`, and so on. Position 0 yields an empty label.
///
/// # Examples
///
///     use theoremsite::render::condition_label;
///
///     assert_eq!(condition_label(1), "a");
///     assert_eq!(condition_label(26), "z");
///     assert_eq!(condition_label(28), "ab");
#[must_use]
pub fn condition_label(position: usize) -> String {
    const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
    let mut letters = Vec::new();
    let mut remaining = position;
    while remaining > 0 {
        let zero_based = remaining - 1;
        letters.extend(ALPHABET.get(zero_based.rem_euclid(ALPHABET.len())).copied());
        remaining = zero_based.div_euclid(ALPHABET.len());
    }
    letters.iter().rev().map(|&byte| char::from(byte)).collect()
}

/// `href` value for a document in the same directory: the file name
/// percent-encoded as a path segment, then HTML-escaped.
pub(crate) fn link_target(file_name: &str) -> String {
    escape(&utf8_percent_encode(file_name, PATH_SEGMENT).to_string())
}

/// Status badge markup; the CSS class follows the wire value.
pub(crate) fn status_badge(status: ProofStatus) -> String {
    format!(
        r#"<span class="status-badge status-{wire}">{label}</span>"#,
        wire = status.as_str(),
        label = status.as_str().to_uppercase(),
    )
}

/// Wraps a page body in the shared document skeleton.
pub(crate) fn page(title: &str, extra_css: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{BASE_CSS}{extra_css}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Theorem Site</h1>
            <p>Structured mathematical proofs</p>
        </div>
{body}
        <div class="footer">
            <p>Generated by theoremsite {version}</p>
        </div>
    </div>
</body>
</html>
"#,
        title = escape(title),
        version = env!("CARGO_PKG_VERSION"),
    )
}
