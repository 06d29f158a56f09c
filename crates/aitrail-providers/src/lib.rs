// Ingest layer: raw JSONL trajectory logs -> typed records.
// Everything here is best-effort; malformed input is skipped, never fatal.

pub mod io;
pub mod parse;
pub mod session_dir;

pub use io::read_log_file;
pub use parse::parse_line;
pub use session_dir::read_session_dir;
