// results_displayer.rs - One row per entry: icon, space, name
//
// Directory headers are only emitted when more than one path was given.

use std::path::Path;
use std::sync::Arc;

use crate::console::Console;
use crate::file_info::FileInfo;
use crate::icon_rules::RuleSet;





////////////////////////////////////////////////////////////////////////////////

pub struct ResultsDisplayer {
    console:      Console,
    rules:        Arc<RuleSet>,
    icons_active: bool,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer {

    pub fn new(console: Console, rules: Arc<RuleSet>, icons_active: bool) -> Self {
        ResultsDisplayer { console, rules, icons_active }
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn into_console(self) -> Console {
        self.console
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_directory_header
    //
    //  "path:" line, separated from a previous listing by a blank line.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn display_directory_header(&mut self, path: &Path, is_first: bool) {
        if !is_first {
            self.console.puts("");
        }
        self.console.puts(&format!("{}:", path.display()));
    }

    pub fn display_entries(&mut self, entries: &[FileInfo]) {
        for entry in entries {
            let row = format_row(&self.rules, entry, self.icons_active);
            self.console.puts(&row);
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_row
//
//  Render one entry.  With icons off this is the bare name.
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_row(rules: &RuleSet, entry: &FileInfo, icons_active: bool) -> String {
    if !icons_active {
        return entry.name.clone();
    }

    format!("{} {}", rules.get(entry), entry.name)
}
