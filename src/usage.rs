// usage.rs - Env-var help, rule table, configuration issue display

use crate::console::Console;
use crate::environment_provider::EnvironmentProvider;
use crate::file_type_map::FILE_TYPE_PREDICATES;
use crate::icon_mapping::default_icon_config;
use crate::icon_rules::{RuleSet, RuleSource, ICONS_ENV_VAR_NAME};





////////////////////////////////////////////////////////////////////////////////

pub const OVERLINE: char = '\u{203E}';  // ‾





////////////////////////////////////////////////////////////////////////////////
//
//  FILE_TYPE_DESCRIPTIONS
//
//  Help text for each type tag, in evaluation order.
//
////////////////////////////////////////////////////////////////////////////////

const FILE_TYPE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("tw", "Sticky and other-writable directory"),
    ("st", "Sticky directory"),
    ("ow", "Other-writable directory"),
    ("di", "Directory"),
    ("ln", "Symbolic link"),
    ("or", "Broken symbolic link"),
    ("pi", "Named pipe"),
    ("so", "Socket"),
    ("cd", "Character device"),
    ("bd", "Block device"),
    ("su", "Setuid file"),
    ("sg", "Setgid file"),
    ("ex", "Executable file"),
    ("fi", "Any other file"),
];





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_help
//
//  Explain the GLYPHLS_ICONS syntax and show the current value.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_env_var_help(console: &mut Console, provider: &dyn EnvironmentProvider, rules: &RuleSet) {
    console.puts(&format!("
Set the {ICONS_ENV_VAR_NAME} environment variable to choose the icon shown for each entry:

  {ICONS_ENV_VAR_NAME}=<key>=<icon>[:<key>=<icon>...]

  <key>       One of:
                *.<ext>     A file extension (letters and digits only)
                <tag>       A file type tag (see below)
                <pattern>   Any other text: a pattern matched against the whole
                            file name, where * matches any run of characters

  <icon>      The text to display.  It may not contain ':' or '='.

Name rules (extensions and patterns) are tried first.  Among those, the rule
declared first wins.  If no name rule matches, the first file type tag below
that describes the entry decides the icon; if that tag has no icon, the entry
gets a blank.

  File type tags, in the order they are checked:"
    ));

    for &(tag, _) in FILE_TYPE_PREDICATES {
        let description = FILE_TYPE_DESCRIPTIONS
            .iter()
            .find(|(t, _)| *t == tag)
            .map_or("", |&(_, d)| d);
        console.puts(&format!("                {tag}          {description}"));
    }

    console.puts(&format!("
  Example: {ICONS_ENV_VAR_NAME}=\"di=D:*.rs=R:README*=!:fi=F\"

  Default: {}
", default_icon_config()));

    match provider.get_env_var(ICONS_ENV_VAR_NAME) {
        Some(value) if !value.is_empty() => {
            console.puts(&format!("  Current value: {value}"));
            display_env_var_issues(console, rules);
        }
        _ => console.puts(&format!("  {ICONS_ENV_VAR_NAME} environment variable is not set.")),
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_current_rules
//
//  Table of every active rule in priority (declaration) order.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_current_rules(console: &mut Console, rules: &RuleSet) {
    let source = match rules.source() {
        RuleSource::Default     => "built-in defaults".to_string(),
        RuleSource::Environment => format!("{ICONS_ENV_VAR_NAME} environment variable"),
    };

    console.puts(&format!("Icon rules from {source}:"));

    if rules.is_empty() {
        console.puts("  (none)");
    }

    let ordered = rules.rules_in_order();

    let key_width = ordered.iter().map(|r| r.key().chars().count()).max().unwrap_or(0);

    for rule in &ordered {
        console.puts(&format!(
            "  {:>3}  {:<5}  {:<width$}  {}",
            rule.pos(), rule.kind_name(), rule.key(), rule.icon(), width = key_width
        ));
    }

    display_env_var_issues(console, rules);
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_env_var_issues
//
//  Problems found while parsing, each with its entry and an overline
//  under the offending text.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_env_var_issues(console: &mut Console, rules: &RuleSet) {
    let result = rules.validation_result();

    if !result.has_issues() {
        return;
    }

    console.puts(&format!(
        "\nThere are some problems with your {ICONS_ENV_VAR_NAME} environment variable (see --env for help):"
    ));

    for error in &result.errors {
        let prefix_len = 2 + error.message.len() + 5 + error.invalid_text_offset;
        let underline: String = std::iter::repeat_n(OVERLINE, error.invalid_text.chars().count()).collect();

        console.puts(&format!("  {} in \"{}\"", error.message, error.entry));
        console.puts(&format!("{:>width$}{}\n", "", underline, width = prefix_len));
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment_provider::MockEnvironmentProvider;

    fn console() -> Console {
        Console::initialize().unwrap()
    }

    #[test]
    fn descriptions_cover_every_tag() {
        for &(tag, _) in FILE_TYPE_PREDICATES {
            assert!(FILE_TYPE_DESCRIPTIONS.iter().any(|&(t, _)| t == tag), "No description for {}", tag);
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  rules_table_in_declaration_order
    //
    //  Rows are ordered by position and show kind, key and icon.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn rules_table_in_declaration_order() {
        let mut console = console();
        let rules = RuleSet::parse("di=D:read*=A:*.txt=T");
        display_current_rules(&mut console, &rules);

        let lines: Vec<&str> = console.buffer().lines().collect();
        assert_eq!(lines[0], "Icon rules from built-in defaults:");
        assert_eq!(lines[1], "    0  basic  di     D");
        assert_eq!(lines[2], "    1  glob   read*  A");
        assert_eq!(lines[3], "    2  basic  *.txt  T");
        assert_eq!(lines.len(), 4);
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  issues_underline_offending_text
    //
    //  The overline sits under the offending text in the echoed entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn issues_underline_offending_text() {
        let mut console = console();
        let rules = RuleSet::parse("di=D:oops");
        display_env_var_issues(&mut console, &rules);

        let text = console.buffer();
        assert!(text.contains("in \"oops\""));

        let message_line = text.lines().find(|l| l.contains("oops")).unwrap();
        let underline_line = text.lines().find(|l| l.contains(OVERLINE)).unwrap();
        let entry_col = message_line.find("oops").unwrap();
        let underline_col = underline_line.chars().position(|c| c == OVERLINE).unwrap();
        assert_eq!(entry_col, underline_col);
        assert_eq!(underline_line.chars().filter(|&c| c == OVERLINE).count(), 4);
    }

    #[test]
    fn empty_rule_set_shows_none() {
        let mut console = console();
        display_current_rules(&mut console, &RuleSet::parse("oops"));

        let lines: Vec<&str> = console.buffer().lines().collect();
        assert_eq!(lines[1], "  (none)");
        assert!(lines.iter().any(|l| l.contains("in \"oops\"")));
    }

    #[test]
    fn no_issues_prints_nothing() {
        let mut console = console();
        display_env_var_issues(&mut console, &RuleSet::parse("di=D"));
        assert!(console.buffer().is_empty());
    }

    #[test]
    fn env_help_reports_unset_variable() {
        let mut console = console();
        let mock = MockEnvironmentProvider::new();
        let rules = RuleSet::from_environment(&mock);
        display_env_var_help(&mut console, &mock, &rules);

        let text = console.buffer();
        assert!(text.contains("environment variable is not set"));
        assert!(text.contains("Any other file"));
    }

    #[test]
    fn env_help_shows_current_value_and_issues() {
        let mut console = console();
        let mock = MockEnvironmentProvider::with(ICONS_ENV_VAR_NAME, "*.rs=R:bad");
        let rules = RuleSet::from_environment(&mock);
        display_env_var_help(&mut console, &mock, &rules);

        let text = console.buffer();
        assert!(text.contains("Current value: *.rs=R:bad"));
        assert!(text.contains("in \"bad\""));
    }
}
