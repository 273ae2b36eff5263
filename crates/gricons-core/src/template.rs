//! Literal token substitution
//!
//! The cheatsheet template is plain HTML carrying `{{token}}` markers.
//! Rendering replaces every occurrence of each named token with its value.
//! There is no templating language: no escaping, no conditionals, no
//! iteration.

/// Replace every `{{token}}` marker in `template` with its paired value.
///
/// Tokens are given without braces. Unknown markers in the template are
/// left untouched.
#[must_use]
pub fn render(template: &str, tokens: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in tokens {
        let marker = format!("{{{{{token}}}}}");
        out = out.replace(&marker, value);
    }
    out
}
