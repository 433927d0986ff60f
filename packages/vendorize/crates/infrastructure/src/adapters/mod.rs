pub mod go_list;
pub mod vcs;
