// src/jsobj.rs
//
// Hand-written JavaScript object/array literal → JSON text.
//
// The site's data files are authored by hand: unquoted keys, single quotes,
// trailing commas, the odd comment. A full JS parser is overkill, so this is
// a single pass over the characters with two states (outside / inside a
// string literal). The output is fed to serde_json.

/// Convert one JS literal (object or array) to JSON text.
///
/// - `'single'`, `"double"` and `` `template` `` strings → `"double"`
/// - bare keys followed by `:` are quoted
/// - bare `true` / `false` / `null` stay; any other bare word becomes a string
/// - trailing commas before `}` / `]` are dropped
/// - `//` and `/* */` comments are skipped
pub fn js_to_json(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(src.len() + src.len() / 8);
    let mut i = 0;

    while i < n {
        let ch = chars[i];

        match ch {
            '"' | '\'' | '`' => {
                i = copy_string(&chars, i, &mut out);
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < n && chars[i] != '\n' { i += 1; }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i < n && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) { i += 1; }
                i = (i + 2).min(n);
            }
            '}' | ']' => {
                drop_trailing_comma(&mut out);
                out.push(ch);
                i += 1;
            }
            c if c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(char::is_ascii_digit)) => {
                let start = i;
                i += 1;
                while i < n {
                    let c = chars[i];
                    let exp_sign = (c == '+' || c == '-') && matches!(chars[i - 1], 'e' | 'E');
                    if c.is_ascii_alphanumeric() || c == '.' || exp_sign { i += 1; } else { break; }
                }
                // JSON wants a digit on both sides of the point: `.5` and `5.`
                if ch == '.' { out.push('0'); }
                let end = if chars[i - 1] == '.' { i - 1 } else { i };
                out.extend(&chars[start..end]);
            }
            c if is_ident_start(c) => {
                let start = i;
                while i < n && is_ident_char(chars[i]) { i += 1; }
                let ident: String = chars[start..i].iter().collect();

                let mut j = i;
                while j < n && chars[j].is_whitespace() { j += 1; }

                if j < n && chars[j] == ':' {
                    push_quoted(&mut out, &ident);
                } else {
                    match ident.as_str() {
                        "true" | "false" | "null" => out.push_str(&ident),
                        _ => push_quoted(&mut out, &ident),
                    }
                }
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out
}

/// Byte length of the balanced `[...]` / `{...}` literal at the start of
/// `src`, string- and comment-aware. `None` if `src` doesn't open a literal
/// or it never closes.
pub fn literal_extent(src: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut it = src.char_indices().peekable();

    match src.chars().next() {
        Some('[') | Some('{') => {}
        _ => return None,
    }

    while let Some((pos, ch)) = it.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '/' if matches!(it.peek(), Some((_, '/'))) => {
                while let Some((_, c)) = it.next() {
                    if c == '\n' { break; }
                }
            }
            '/' if matches!(it.peek(), Some((_, '*'))) => {
                it.next();
                let mut prev = '\0';
                while let Some((_, c)) = it.next() {
                    if prev == '*' && c == '/' { break; }
                    prev = c;
                }
            }
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(pos + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/* ---------------- helpers ---------------- */

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn push_quoted(out: &mut String, ident: &str) {
    out.push('"');
    out.push_str(ident);
    out.push('"');
}

/// Remove a `,` if it is the last non-whitespace output (keeps the whitespace).
fn drop_trailing_comma(out: &mut String) {
    if let Some(pos) = out.rfind(|c: char| !c.is_whitespace()) {
        if out[pos..].starts_with(',') {
            out.remove(pos);
        }
    }
}

/// Copy the string literal opening at `chars[start]` into `out` as a JSON
/// string. Returns the index just past the closing quote.
fn copy_string(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    let n = chars.len();
    let mut i = start + 1;
    out.push('"');

    while i < n {
        let c = chars[i];
        i += 1;

        if c == '\\' {
            let Some(&next) = chars.get(i) else { break };
            i += 1;
            match next {
                // JSON has no \' and no \`
                '\'' | '`' => out.push(next),
                '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u' => {
                    out.push('\\');
                    out.push(next);
                }
                // line continuation
                '\n' => {}
                '\r' => { if chars.get(i) == Some(&'\n') { i += 1; } }
                'x' if chars.get(i..i + 2).is_some_and(|h| h.iter().all(char::is_ascii_hexdigit)) => {
                    out.push_str("\\u00");
                    out.extend(&chars[i..i + 2]);
                    i += 2;
                }
                '0' => out.push_str("\\u0000"),
                'v' => out.push_str("\\u000b"),
                other => out.push(other),
            }
            continue;
        }

        if c == quote {
            out.push('"');
            return i;
        }

        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    // Unterminated: close it so the JSON error points somewhere sensible.
    out.push('"');
    i
}
