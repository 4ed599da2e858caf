//! Reusable file contents for tests.

pub const USEFUL_FILE: &str = "I am a very useful file";

pub const RENAMED_FILE: &str = "I am a file that was renamed";

pub const STALE_FILE: &str = "I only exist in the destination";

pub const NOTES: &str = "meeting notes\n- reconcile trees by content\n";
