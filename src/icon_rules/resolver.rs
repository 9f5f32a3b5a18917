// resolver.rs - Icon lookup for a single file
//
// Extends impl RuleSet with the per-file query.  Name-based rules are
// tried first, then the type tag of the file.  Declaration order is the
// user's priority order across both tiers.

use std::path::is_separator;

use tracing::trace;

use crate::file_info::FileInfo;
use crate::file_type_map::classify;
use crate::icon_mapping::GLYPH_NONE;

use super::RuleSet;





////////////////////////////////////////////////////////////////////////////////
//
//  impl RuleSet - icon resolution
//
////////////////////////////////////////////////////////////////////////////////

impl RuleSet {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  get
    //
    //  The icon for a file.  Always succeeds; a single space when nothing
    //  applies.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn get(&self, file: &FileInfo) -> &str {
        let base = base_name (&file.name);
        let ext  = extension (base);

        let icon = self.get_from_name (base, ext)
            .or_else (|| self.get_from_file (file))
            .unwrap_or (GLYPH_NONE);

        trace! (name = %file.name, icon, "resolved icon");
        icon
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  get_from_name
    //
    //  Extension lookup plus glob scan.  When the extension rule matches,
    //  only globs declared before it can override it, so the scan stops at
    //  the extension rule's position.  Without an extension match every
    //  glob is a candidate; the scan is not capped at the rule count, since
    //  positions count empty slots and can exceed it.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn get_from_name(&self, base: &str, ext: &str) -> Option<&str> {
        let extension_rule = self.basic_icons.get (&format! ("*{ext}"));

        let upper = extension_rule.map (|rule| rule.pos);
        let mut icon = extension_rule.map (|rule| rule.icon.as_str());

        for glob in &self.glob_icons {
            if upper.is_some_and (|upper| glob.pos >= upper) {
                break;
            }
            if glob.pattern.is_match (base) {
                icon = Some (glob.icon.as_str());
                break;
            }
        }

        icon
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  get_from_file
    //
    //  The first type predicate that holds picks the category.  If that
    //  category has no configured icon there is no match; later tags are
    //  not consulted.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn get_from_file(&self, file: &FileInfo) -> Option<&str> {
        self.basic_icons.get (classify (file)).map (|rule| rule.icon.as_str())
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  base_name
//
//  Last path element of a name, ignoring trailing separators.
//
////////////////////////////////////////////////////////////////////////////////

pub fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches (is_separator);

    if trimmed.is_empty() {
        return if name.is_empty() { "." } else { &name[..1] };
    }

    trimmed.rsplit (is_separator).next().unwrap_or (trimmed)
}





////////////////////////////////////////////////////////////////////////////////
//
//  extension
//
//  Suffix of a base name starting at its last '.', or "" if it has none.
//  ".bashrc" is its own extension.
//
////////////////////////////////////////////////////////////////////////////////

pub fn extension(base: &str) -> &str {
    base.rfind ('.').map_or ("", |dot| &base[dot..])
}
