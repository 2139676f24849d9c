#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    "http://localhost:5678/webhook-test/skyline-forms"  // Local automation instance
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    "https://automation.skylinebulls.com/webhook/skyline-forms"  // Production webhook
}

/// Seconds the contact form stays locked after a successful submission.
pub const CONTACT_COOLDOWN_SECS: u32 = 30;

/// Delay before the newsletter section disappears after a subscription.
pub const NEWSLETTER_HIDE_DELAY_MS: u32 = 2_000;

/// Share of a section that must be on screen before it reveals itself.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const CONTACT_EMAIL: &str = "office@skylinebulls.com";
pub const CONTACT_PHONE: &str = "+1 312-259-3536";
pub const CONTACT_ADDRESS: &str = "Chicago, IL, United States";
pub const MAP_EMBED_URL: &str =
    "https://www.google.com/maps?q=Chicago,+IL,+United+States&output=embed";
