// glyphls - Default Icon Mapping
// Glyph constants and the built-in icon configuration used when the
// GLYPHLS_ICONS environment variable is unset or empty.


////////////////////////////////////////////////////////////////////////////////
//
//  Named Constants
//
////////////////////////////////////////////////////////////////////////////////

pub const GLYPH_FOLDER:              &str = "\u{1F5C0}";   // 🗀
pub const GLYPH_DOCUMENT:            &str = "\u{1F5CE}";   // 🗎

/// Returned when no rule applies to a file.
pub const GLYPH_NONE:                &str = " ";





////////////////////////////////////////////////////////////////////////////////
//
//  DEFAULT_ICON_ENTRIES
//
//  Built-in rules, in declaration order.  Every directory flavour gets the
//  folder glyph, everything else falls through to "fi".
//
////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_ICON_ENTRIES: &[(&str, &str)] = &[
    ("tw", GLYPH_FOLDER),
    ("st", GLYPH_FOLDER),
    ("ow", GLYPH_FOLDER),
    ("di", GLYPH_FOLDER),
    ("fi", GLYPH_DOCUMENT),
];





////////////////////////////////////////////////////////////////////////////////
//
//  default_icon_config
//
//  DEFAULT_ICON_ENTRIES rendered in GLYPHLS_ICONS syntax.
//
////////////////////////////////////////////////////////////////////////////////

pub fn default_icon_config() -> String {
    DEFAULT_ICON_ENTRIES
        .iter()
        .map(|(key, glyph)| format!("{key}={glyph}"))
        .collect::<Vec<_>>()
        .join(":")
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////
