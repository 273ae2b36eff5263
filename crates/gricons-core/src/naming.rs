//! Icon naming and validation rules
//!
//! Source icons are files named `<icon-name>.svg` where the icon name is
//! lowercase with `-` or `_` separators. The icon name keys the catalog and
//! the sprite symbols; its camel-cased form becomes the binding exported
//! from the generated module files.
//!
//! All rules here are pure and order-independent; discovery applies them to
//! every candidate file and aborts the build on the first violation.

use crate::error::{NamingError, Result};
use std::collections::HashSet;

/// Keywords, future reserved words, and restricted names of the module
/// syntaxes the emitters target.
const RESERVED_WORDS: &[&str] = &[
    "do",
    "if",
    "in",
    "for",
    "let",
    "new",
    "try",
    "var",
    "case",
    "else",
    "enum",
    "eval",
    "null",
    "this",
    "true",
    "void",
    "with",
    "await",
    "break",
    "catch",
    "class",
    "const",
    "false",
    "super",
    "throw",
    "while",
    "yield",
    "delete",
    "export",
    "import",
    "public",
    "return",
    "static",
    "switch",
    "typeof",
    "default",
    "extends",
    "finally",
    "package",
    "private",
    "continue",
    "debugger",
    "function",
    "arguments",
    "interface",
    "protected",
    "implements",
    "instanceof",
];

/// Identifiers that cannot be used as icon names.
///
/// Export names become top-level bindings in the emitted module files, so an
/// icon whose name collides with a reserved word would produce a module that
/// fails to parse. The set is explicit configuration rather than a hidden
/// global: construct it once and pass it to [`assert_not_reserved`], or
/// build a custom set with [`ReservedKeywords::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedKeywords {
    words: HashSet<String>,
}

impl ReservedKeywords {
    /// Build a keyword set from any string collection.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `word` is reserved.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReservedKeywords {
    fn default() -> Self {
        Self::new(RESERVED_WORDS.iter().copied())
    }
}

/// Derive the icon name from a source file name.
///
/// The file name must be all lowercase, use the `.svg` extension, and
/// contain no period other than the extension separator. The stem must
/// carry at least one non-separator segment, so every valid icon name
/// camel-cases to a non-empty export name. The icon name is the file
/// stem.
///
/// # Errors
///
/// Returns `NamingError::InvalidFileName` describing the first broken rule.
pub fn icon_name(file_name: &str) -> Result<&str> {
    let invalid = |reason: &str| NamingError::InvalidFileName {
        name: file_name.to_string(),
        reason: reason.to_string(),
    };

    if file_name.to_lowercase() != file_name {
        return Err(invalid("must be all lowercase"));
    }
    let Some(stem) = file_name.strip_suffix(".svg") else {
        return Err(invalid("must use the .svg extension"));
    };
    if stem.contains('.') {
        return Err(invalid("cannot contain more than one period"));
    }
    if stem.split(['-', '_']).all(str::is_empty) {
        return Err(invalid("must contain at least one name segment"));
    }
    Ok(stem)
}

/// Fail when `icon_name` collides with the reserved-identifier set.
///
/// # Errors
///
/// Returns `NamingError::ReservedIdentifier` on a collision.
pub fn assert_not_reserved(icon_name: &str, keywords: &ReservedKeywords) -> Result<()> {
    if keywords.contains(icon_name) {
        return Err(NamingError::ReservedIdentifier(icon_name.to_string()));
    }
    Ok(())
}

/// Camel-case an icon name into its export name.
///
/// Splits on `-` and `_`, lowercases the first segment, and capitalizes the
/// first character of every following segment. Empty segments produced by
/// doubled separators are skipped.
///
/// `airplane-outline` becomes `airplaneOutline`; a single word passes
/// through lowercased.
#[must_use]
pub fn export_name(icon_name: &str) -> String {
    let mut out = String::with_capacity(icon_name.len());
    for (index, segment) in icon_name
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .enumerate()
    {
        if index == 0 {
            out.push_str(&segment.to_lowercase());
        } else if let Some(first) = segment.chars().next() {
            out.extend(first.to_uppercase());
            out.push_str(&segment[first.len_utf8()..].to_lowercase());
        }
    }
    out
}

/// Human-readable label for an icon name: hyphens rendered as spaces.
///
/// Used both for the accessible `<title>` injected during optimization and
/// for derived display labels at runtime.
#[must_use]
pub fn display_label(icon_name: &str) -> String {
    icon_name.replace('-', " ")
}
