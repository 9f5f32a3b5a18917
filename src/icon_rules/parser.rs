// parser.rs - GLYPHLS_ICONS parsing
//
// Extends impl RuleSet with the methods that turn a configuration string
// into rules.
//
// Format:  key=value[:key=value...]
//
// Each entry's position is its index in the colon-split sequence, empty
// slots included.  A malformed entry ends parsing (rules before it are
// kept); a glob that fails to compile is dropped on its own.

use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use crate::file_type_map::is_file_type_tag;

use super::{BasicRule, ErrorInfo, GlobPattern, GlobRule, RuleSet};





////////////////////////////////////////////////////////////////////////////////
//
//  impl RuleSet - configuration parsing
//
////////////////////////////////////////////////////////////////////////////////

impl RuleSet {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  parse
    //
    //  Build a RuleSet from a configuration string.  Never fails; problems
    //  are logged and recorded in the validation result.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn parse(config: &str) -> Self {
        let mut rules = RuleSet::new();

        for (pos, entry) in config.split (':').enumerate() {
            if entry.is_empty() {
                continue;
            }

            let Some ((key, icon)) = split_key_and_value (entry) else {
                warn! (entry, pos, "invalid icon entry, ignoring the rest of the configuration");
                rules.last_parse_result.errors.push (ErrorInfo {
                    message:             "Invalid entry format (expected key=value), remaining entries ignored".into(),
                    entry:               entry.into(),
                    invalid_text:        entry.into(),
                    invalid_text_offset: 0,
                });
                break;
            };

            rules.add_rule (key, icon, pos, entry);
        }

        debug! (
            basic = rules.basic_icons.len(),
            glob = rules.glob_icons.len(),
            issues = rules.last_parse_result.errors.len(),
            "parsed icon rules"
        );

        rules
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  add_rule
    //
    //  Classify one key=value entry into the basic or glob tier.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn add_rule(&mut self, key: &str, icon: &str, pos: usize, entry: &str) {
        if is_basic_key (key) {
            self.add_basic_rule (key, icon, pos, entry);
            return;
        }

        match GlobPattern::compile (key) {
            Ok (pattern) => {
                self.glob_icons.push (GlobRule { pattern, icon: icon.into(), pos });
            }
            Err (e) => {
                warn! (pattern = key, error = %e, "failed to compile icon pattern, entry dropped");
                self.last_parse_result.errors.push (ErrorInfo {
                    message:             "Invalid pattern".into(),
                    entry:               entry.into(),
                    invalid_text:        key.into(),
                    invalid_text_offset: 0,
                });
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  add_basic_rule
    //
    //  First-write-wins: a repeated key keeps the earlier icon and position.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn add_basic_rule(&mut self, key: &str, icon: &str, pos: usize, entry: &str) {
        match self.basic_icons.entry (key.to_string()) {
            Entry::Occupied (first) => {
                warn! (key, first = first.get().pos, duplicate = pos, "duplicate icon rule, first value wins");
                self.last_parse_result.errors.push (ErrorInfo {
                    message:             "Duplicate icon rule (first value wins)".into(),
                    entry:               entry.into(),
                    invalid_text:        key.into(),
                    invalid_text_offset: 0,
                });
            }
            Entry::Vacant (slot) => {
                slot.insert (BasicRule { icon: icon.into(), pos });
            }
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_basic_key
//
//  True if key is stored for plain lookup: a file type tag, or a key that
//  ends in '*', any one character, then one or more ASCII alphanumerics.
//  Only the end is anchored, so "foo*.txt" is basic too; it is stored
//  under its literal text and never equals a "*<ext>" lookup key.
//
////////////////////////////////////////////////////////////////////////////////

pub fn is_basic_key(key: &str) -> bool {
    is_extension_key (key) || is_file_type_tag (key)
}

fn is_extension_key(key: &str) -> bool {
    key.match_indices ('*').any (|(star, _)| {
        let mut rest = key[star + 1..].chars();

        match rest.next() {
            Some (c) if c != '\n' => {
                let tail = rest.as_str();
                !tail.is_empty() && tail.bytes().all (|b| b.is_ascii_alphanumeric())
            }
            _ => false,
        }
    })
}





////////////////////////////////////////////////////////////////////////////////
//
//  split_key_and_value
//
//  Split an entry on '='.  Anything other than exactly one '=' is
//  malformed.
//
////////////////////////////////////////////////////////////////////////////////

fn split_key_and_value(entry: &str) -> Option<(&str, &str)> {
    let mut parts = entry.split ('=');

    match (parts.next(), parts.next(), parts.next()) {
        (Some (key), Some (value), None) => Some ((key, value)),
        _                                => None,
    }
}
