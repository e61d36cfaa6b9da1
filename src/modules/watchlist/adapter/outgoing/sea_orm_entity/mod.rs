pub mod watch_lists;
