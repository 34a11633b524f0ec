use std::env;

pub const DEFAULT_FILTER: &str = "warn";

/// `$ZJ_LOG`, then `$RUST_LOG`, then warnings only.
pub fn filter_from(zj_log: Option<String>, rust_log: Option<String>) -> String {
    zj_log
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn init() {
    let filter = filter_from(env::var("ZJ_LOG").ok(), env::var("RUST_LOG").ok());
    env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .init();
}
