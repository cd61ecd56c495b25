pub mod rsvp_const {
    pub const RSVP_TABLE: &str = "rsvps";

    pub const DEFAULT_SOURCE: &str = "web";
    pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

    pub const MAX_BODY_BYTES: usize = 1024 * 1024;

    // 30 requests per rolling minute per client IP
    pub const RATE_LIMIT_BURST: u32 = 30;
    pub const RATE_LIMIT_REPLENISH_SECS: u64 = 2;
}
