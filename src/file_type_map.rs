// file_type_map.rs - File type tags and their predicates
//
// The 14 type tags usable as basic icon keys, in the order the resolver
// evaluates them.  The first predicate that holds decides the category,
// so specific tags (sticky + other-writable dirs) must precede general
// ones (dirs), and "fi" must stay last.

use crate::file_info::{
    FileInfo, LinkState,
    S_IFBLK, S_IFCHR, S_IFIFO, S_IFSOCK,
    S_ISGID, S_ISUID, S_ISVTX, S_IWOTH, S_IXALL,
};





pub type FileTypePredicate = fn(&FileInfo) -> bool;





////////////////////////////////////////////////////////////////////////////////
//
//  FILE_TYPE_PREDICATES
//
//  Ordered (tag, predicate) table for type-based icon resolution.
//  Used by RuleSet::get_from_file() and by the parser to recognize tags.
//
////////////////////////////////////////////////////////////////////////////////

pub const FILE_TYPE_PREDICATES: &[(&str, FileTypePredicate)] = &[
    ("tw", |f| f.is_directory() && f.mode & S_ISVTX != 0 && f.mode & S_IWOTH != 0),
    ("st", |f| f.is_directory() && f.mode & S_ISVTX != 0),
    ("ow", |f| f.is_directory() && f.mode & S_IWOTH != 0),
    ("di", |f| f.is_directory()),
    ("ln", |f| f.link_state == LinkState::Working),
    ("or", |f| f.link_state == LinkState::Broken),
    ("pi", |f| f.file_type_bits() == S_IFIFO),
    ("so", |f| f.file_type_bits() == S_IFSOCK),
    ("cd", |f| f.file_type_bits() == S_IFCHR),
    ("bd", |f| f.file_type_bits() == S_IFBLK),
    ("su", |f| f.mode & S_ISUID != 0),
    ("sg", |f| f.mode & S_ISGID != 0),
    ("ex", |f| f.is_regular() && f.mode & S_IXALL != 0),
    ("fi", |_| true),
];





////////////////////////////////////////////////////////////////////////////////
//
//  is_file_type_tag
//
//  True if key is one of the fixed type tags.
//
////////////////////////////////////////////////////////////////////////////////

pub fn is_file_type_tag(key: &str) -> bool {
    FILE_TYPE_PREDICATES.iter().any (|&(tag, _)| tag == key)
}





////////////////////////////////////////////////////////////////////////////////
//
//  classify
//
//  Returns the tag of the first predicate that holds for the file.
//
////////////////////////////////////////////////////////////////////////////////

pub fn classify(file: &FileInfo) -> &'static str {
    FILE_TYPE_PREDICATES
        .iter()
        .find (|(_, pred)| pred (file))
        .map_or ("fi", |&(tag, _)| tag)
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////
