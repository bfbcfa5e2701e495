use std::time::{SystemTime, UNIX_EPOCH};

/// Marvel API key pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl Credentials {
    /// Build the three auth query parameters the API requires:
    /// `ts`, `apikey`, and `hash` = md5(ts + private_key + public_key).
    ///
    /// The timestamp is passed in so the hash is reproducible under test.
    pub fn auth_params(&self, ts: &str) -> [(&'static str, String); 3] {
        let digest = md5::compute(format!("{ts}{}{}", self.private_key, self.public_key));
        [
            ("ts", ts.to_string()),
            ("apikey", self.public_key.clone()),
            ("hash", format!("{digest:x}")),
        ]
    }
}

/// Current Unix time in seconds, used as the `ts` auth parameter.
pub fn timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        .to_string()
}
