// icon_rules/mod.rs - Icon rule set built from the GLYPHLS_ICONS variable
//
// A RuleSet holds two tiers of rules: basic rules, looked up by exact key
// (a file type tag or a "*.ext" pattern), and glob rules, scanned in
// declaration order.  Both tiers carry the entry's position in the
// configuration string so the resolver can reconstruct declaration order.
//
// Built once, read-only afterwards.  Parsing lives in parser.rs, lookup in
// resolver.rs.

mod glob;
mod parser;
mod resolver;

use std::collections::HashMap;

use tracing::debug;

use crate::environment_provider::EnvironmentProvider;
use crate::icon_mapping::default_icon_config;

pub use glob::GlobPattern;
pub use parser::is_basic_key;
pub use resolver::{base_name, extension};





/// Environment variable name
pub const ICONS_ENV_VAR_NAME: &str = "GLYPHLS_ICONS";





////////////////////////////////////////////////////////////////////////////////

/// Where the active configuration string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    Default,
    Environment,
}





/// A rule matched by exact key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicRule {
    pub icon: String,
    pub pos:  usize,
}





/// A rule matched by wildcard pattern against the base name.
#[derive(Debug, Clone)]
pub struct GlobRule {
    pub pattern: GlobPattern,
    pub icon:    String,
    pub pos:     usize,
}





////////////////////////////////////////////////////////////////////////////////
//
//  Rule
//
//  Borrowed view over either rule tier, for walking the whole set in
//  declaration order.
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy)]
pub enum Rule<'a> {
    Basic { key: &'a str, rule: &'a BasicRule },
    Glob (&'a GlobRule),
}

impl<'a> Rule<'a> {
    pub fn pos(&self) -> usize {
        match self {
            Rule::Basic { rule, .. } => rule.pos,
            Rule::Glob (rule)        => rule.pos,
        }
    }

    pub fn key(&self) -> &'a str {
        match self {
            Rule::Basic { key, .. } => *key,
            Rule::Glob (rule)       => rule.pattern.as_str(),
        }
    }

    pub fn icon(&self) -> &'a str {
        match self {
            Rule::Basic { rule, .. } => &rule.icon,
            Rule::Glob (rule)        => &rule.icon,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Rule::Basic { .. } => "basic",
            Rule::Glob (_)     => "glob",
        }
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub message:              String,
    pub entry:                String,
    pub invalid_text:         String,
    pub invalid_text_offset:  usize,
}





#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ErrorInfo>,
}

impl ValidationResult {
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty()
    }
}





////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Basic rules keyed by the literal configured key
    basic_icons:       HashMap<String, BasicRule>,

    /// Glob rules in ascending position order
    glob_icons:        Vec<GlobRule>,

    source:            RuleSource,

    /// Diagnostics collected while parsing
    last_parse_result: ValidationResult,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl RuleSet
//
//  Construction from the environment and read-only accessors.
//
////////////////////////////////////////////////////////////////////////////////

impl RuleSet {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create an empty RuleSet.  Every file resolves to the blank glyph.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new() -> Self {
        RuleSet {
            basic_icons:       HashMap::new(),
            glob_icons:        Vec::new(),
            source:            RuleSource::Default,
            last_parse_result: ValidationResult::default(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_environment
    //
    //  Build the rule set from GLYPHLS_ICONS.  An unset or empty variable
    //  selects the built-in defaults.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_environment(provider: &dyn EnvironmentProvider) -> Self {
        match provider.get_env_var (ICONS_ENV_VAR_NAME) {
            Some (value) if !value.is_empty() => {
                let mut rules = Self::parse (&value);
                rules.source = RuleSource::Environment;
                rules
            }
            _ => {
                debug! ("{} not set, using default icons", ICONS_ENV_VAR_NAME);
                Self::parse (&default_icon_config())
            }
        }
    }

    pub fn source(&self) -> RuleSource {
        self.source
    }

    pub fn basic_rule(&self, key: &str) -> Option<&BasicRule> {
        self.basic_icons.get (key)
    }

    pub fn glob_rules(&self) -> &[GlobRule] {
        &self.glob_icons
    }

    pub fn rule_count(&self) -> usize {
        self.basic_icons.len() + self.glob_icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    pub fn validation_result(&self) -> &ValidationResult {
        &self.last_parse_result
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  rules_in_order
    //
    //  Every rule of both tiers, sorted by position.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn rules_in_order(&self) -> Vec<Rule<'_>> {
        let mut rules: Vec<Rule<'_>> = self.basic_icons
            .iter()
            .map (|(key, rule)| Rule::Basic { key, rule })
            .chain (self.glob_icons.iter().map (Rule::Glob))
            .collect();

        rules.sort_by_key (Rule::pos);
        rules
    }
}





impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
