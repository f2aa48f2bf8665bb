use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request body together with its `Signature` header value.
///
/// The body is serialized exactly once; the same bytes are signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBody {
    pub body: String,
    pub signature: String,
}

impl SignedBody {
    pub fn new<T: Serialize>(secret: &str, payload: &T) -> serde_json::Result<Self> {
        let body = serde_json::to_string(payload)?;
        let signature = create_signature(secret, &body);

        Ok(Self { body, signature })
    }
}

/// HMAC-SHA256 over `body`, keyed by the project secret, lowercase hex.
pub fn create_signature(secret: &str, body: &str) -> String {
    let mut mac = new_mac(secret);

    mac.update(body.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

pub fn verify_signature(secret: &str, body: &str, provided_signature: &str) -> bool {
    let Ok(decoded) = hex::decode(provided_signature) else {
        return false;
    };

    let mut mac = new_mac(secret);

    mac.update(body.as_bytes());

    mac.verify_slice(&decoded).is_ok()
}

fn new_mac(secret: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size")
}
