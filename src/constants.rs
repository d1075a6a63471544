pub const GREEN: &str = "\x1b[32m";
pub const RESET: &str = "\x1b[0m";
