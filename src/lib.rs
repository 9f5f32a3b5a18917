// glyphls - Directory listing with rule-driven file icons

pub mod ehm;
pub mod environment_provider;
pub mod console;
pub mod command_line;
pub mod file_info;
pub mod file_type_map;
pub mod icon_mapping;
pub mod icon_rules;
pub mod directory_lister;
pub mod results_displayer;
pub mod usage;

use std::sync::Arc;

use command_line::CommandLine;
use console::Console;
use ehm::AppError;
use environment_provider::{DefaultEnvironmentProvider, EnvironmentProvider};
use icon_rules::RuleSet;
use results_displayer::ResultsDisplayer;





/// Main entry point for the library.
/// Called by main.rs; returns Result for clean error handling.
pub fn run(cmd: &CommandLine) -> Result<(), AppError> {
    run_with_provider(cmd, &DefaultEnvironmentProvider)
}





////////////////////////////////////////////////////////////////////////////////
//
//  run_with_provider
//
//  Build the rule set once from the given environment, then either show
//  help/rules or list every requested path.  Configuration issues are
//  reported after the listing.
//
////////////////////////////////////////////////////////////////////////////////

pub fn run_with_provider(cmd: &CommandLine, provider: &dyn EnvironmentProvider) -> Result<(), AppError> {
    let mut console = Console::initialize()?;
    let rules = Arc::new(RuleSet::from_environment(provider));

    if cmd.show_env_help {
        usage::display_env_var_help(&mut console, provider, &rules);
        return console.flush();
    }

    if cmd.show_rules {
        usage::display_current_rules(&mut console, &rules);
        return console.flush();
    }

    let mut displayer = ResultsDisplayer::new(console, Arc::clone(&rules), !cmd.no_icons);
    let show_headers = cmd.paths.len() > 1;

    for (i, path) in cmd.paths.iter().enumerate() {
        let entries = directory_lister::collect_entries(path, cmd.show_hidden)?;

        if show_headers && path.is_dir() {
            displayer.display_directory_header(path, i == 0);
        }

        displayer.display_entries(&entries);
        displayer.console_mut().flush()?;
    }

    let mut console = displayer.into_console();
    usage::display_env_var_issues(&mut console, &rules);
    console.flush()
}
