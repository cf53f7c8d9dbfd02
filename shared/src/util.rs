/// 当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as `YYYY-MM-DD` (local time, matches stored `date` fields).
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Date `days` days from now as `YYYY-MM-DD`.
pub fn date_in_days(days: i64) -> String {
    (chrono::Local::now() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Current local timestamp as `YYYY-MM-DD HH:MM` (tracking updates, ETAs).
pub fn now_datetime() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Timestamp `days` days from now as `YYYY-MM-DD HH:MM`.
pub fn datetime_in_days(days: i64) -> String {
    (chrono::Local::now() + chrono::Duration::days(days))
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at hub scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Generate a prefixed resource id such as `ORD-281479437156352`.
///
/// Prefixes in use: `ORD` (orders), `TASK` (production tasks),
/// `SHP` (shipments), `INV` (invoices and inventory items).
pub fn resource_id(prefix: &str) -> String {
    format!("{}-{}", prefix, snowflake_id())
}
