// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-style `$VAR` / `${VAR}` substitution.
//!
//! ```text
//! "$HOME/bin"       -> lookup("HOME") + "/bin"
//! "${USER}_x"       -> lookup("USER") + "_x"
//! "$0 $$"           -> lookup("0") + " " + lookup("$")
//! "cost: $ 5"       -> unchanged ('$' without a name is literal)
//! "${" / "${}"      -> consumed (invalid syntax)
//! ```

/// Replaces every variable reference in `template` using `lookup`.
///
/// Unknown variables are whatever `lookup` returns for them, usually `""`.
pub fn expand<F, S>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> S,
    S: AsRef<str>,
{
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() {
            out.push_str(&template[literal_start..i]);
            let (name, width) = shell_name(&template[i + 1..]);
            match name {
                Some(name) => out.push_str(lookup(name).as_ref()),
                // Invalid syntax, drop it.
                None if width > 0 => {}
                None => out.push('$'),
            }
            i += width;
            literal_start = i + 1;
        }
        i += 1;
    }

    out.push_str(&template[literal_start..]);
    out
}

/// Parses the variable name following a `$`.
///
/// Returns the name (if any) and how many bytes it occupies. `(None, n)` with
/// `n > 0` marks invalid syntax to be consumed.
fn shell_name(s: &str) -> (Option<&str>, usize) {
    let bytes = s.as_bytes();

    if bytes[0] == b'{' {
        if bytes.len() > 2 && is_shell_special(bytes[1]) && bytes[2] == b'}' {
            return (Some(&s[1..2]), 3);
        }
        return match bytes.iter().skip(1).position(|&b| b == b'}') {
            Some(0) => (None, 2),
            Some(offset) => (Some(&s[1..=offset]), offset + 2),
            None => (None, 1),
        };
    }

    if is_shell_special(bytes[0]) {
        return (Some(&s[..1]), 1);
    }

    let end = bytes
        .iter()
        .position(|&b| !is_name_byte(b))
        .unwrap_or(bytes.len());
    if end == 0 {
        (None, 0)
    } else {
        (Some(&s[..end]), end)
    }
}

const fn is_shell_special(b: u8) -> bool {
    matches!(b, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-' | b'0'..=b'9')
}

const fn is_name_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}
