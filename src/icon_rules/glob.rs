// glob.rs - Restricted glob patterns for icon rules
//
// Only `*` is special: it matches any run of characters.  There is no
// escaping and no character classes; every other character is literal.
// Patterns always match the whole name.

use regex::{Regex, RegexBuilder};





/// Compiled-size ceiling for a single glob.
const GLOB_SIZE_LIMIT: usize = 1 << 20;





#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex:  Regex,
}





impl GlobPattern {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  compile
    //
    //  Quote the whole pattern, turn each quoted `*` back into `.*`, and
    //  anchor both ends.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn compile(glob: &str) -> Result<Self, regex::Error> {
        let quoted   = regex::escape (glob);
        let globbed  = quoted.replace (r"\*", ".*");
        let anchored = format! ("^{globbed}$");

        let regex = RegexBuilder::new (&anchored)
            .size_limit (GLOB_SIZE_LIMIT)
            .build()?;

        Ok (GlobPattern { source: glob.to_string(), regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match (name)
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
