//! Positional message templates for the `(format, args)` logging calls.
//!
//! `{0}` substitutes the first argument, `{1,8}` right-aligns the second in eight
//! columns, `{1,-8}` left-aligns it. `{{` and `}}` are literal braces. Rust
//! callers usually prefer `format_args!`, but templates that arrive as data
//! (config files, the CLI) need a runtime engine.

use crate::Error;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::Chars;

/// Widest `{n,width}` alignment a template may request.
pub const MAX_ALIGNMENT: usize = 1024;

/// Renders `template` against `args`.
///
/// # Errors
/// `Error::InvalidArgument` for an unbalanced brace, a non-numeric or
/// out-of-range placeholder, an alignment wider than [`MAX_ALIGNMENT`], or a
/// format specifier (`{0:x}`).
pub fn format_message(template: &str, args: &[&dyn Display]) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let spec = read_placeholder(&mut chars)
                    .ok_or_else(|| invalid(template, "unclosed '{'"))?;
                render_placeholder(&spec, args, &mut out)
                    .map_err(|reason| invalid(template, &reason))?;
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(invalid(template, "unmatched '}'")),
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn read_placeholder(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut spec = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            return Some(spec);
        }
        spec.push(c);
    }
    None
}

fn render_placeholder(spec: &str, args: &[&dyn Display], out: &mut String) -> Result<(), String> {
    if spec.contains(':') {
        return Err(format!("format specifiers are not supported in '{{{spec}}}'"));
    }

    let (index, alignment) = match spec.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (spec, None),
    };

    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid placeholder '{{{spec}}}'"))?;
    let arg = args.get(index).ok_or_else(|| {
        format!(
            "placeholder {{{index}}} is out of range ({} arguments)",
            args.len()
        )
    })?;

    let text = arg.to_string();
    let Some(alignment) = alignment else {
        out.push_str(&text);
        return Ok(());
    };

    let width: i32 = alignment
        .trim()
        .parse()
        .map_err(|_| format!("invalid alignment in '{{{spec}}}'"))?;
    let columns = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
    if columns > MAX_ALIGNMENT {
        return Err(format!(
            "alignment in '{{{spec}}}' exceeds {MAX_ALIGNMENT} columns"
        ));
    }
    if width < 0 {
        out.push_str(&format!("{text:<columns$}"));
    } else {
        out.push_str(&format!("{text:>columns$}"));
    }
    Ok(())
}

fn invalid(template: &str, reason: &str) -> Error {
    Error::InvalidArgument(format!("malformed message template \"{template}\": {reason}"))
}
