use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use types::{Result, err};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

pub trait UuidV7Ext: Sized {
    /// Creation time embedded in a v7 id.
    fn jiff_timestamp(&self) -> Result<Timestamp>;
}

impl UuidV7Ext for Uuid {
    fn jiff_timestamp(&self) -> Result<Timestamp> {
        let ts = self
            .get_timestamp()
            .ok_or_else(|| err!("uuid {self} carries no timestamp"))?;

        let (seconds, nanos) = ts.to_unix();
        Ok(Timestamp::new(seconds as i64, nanos as i32)?)
    }
}

/// Signs ids into tamper-evident tokens and digests passwords, keyed by the
/// configured session secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: SecretString,
}

impl TokenSigner {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| err!("invalid signing key"))
    }

    /// `<uuid simple>.<base64url signature>`
    pub fn sign(&self, id: &Uuid) -> Result<String> {
        let id_str = id.simple().to_string();
        let mut mac = self.mac()?;
        mac.update(id_str.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{id_str}.{signature}"))
    }

    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let (id_simple, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| err!("invalid token format"))?;

        let mut mac = self.mac()?;
        mac.update(id_simple.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.decode(signature_b64)?;
        mac.verify_slice(&signature)
            .map_err(|_| err!("invalid token signature"))?;

        Ok(Uuid::parse_str(id_simple)?)
    }

    pub fn password_digest(&self, salt: &Uuid, password: &str) -> Result<Vec<u8>> {
        let mut mac = self.mac()?;
        mac.update(salt.as_bytes());
        mac.update(password.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }

    pub fn verify_password(&self, salt: &Uuid, password: &str, digest: &[u8]) -> Result<bool> {
        let mut mac = self.mac()?;
        mac.update(salt.as_bytes());
        mac.update(password.as_bytes());
        Ok(mac.verify_slice(digest).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret".to_string().into())
    }

    #[test]
    fn signed_tokens_verify() {
        let id = Uuid::now_v7();
        let token = signer().sign(&id).unwrap();

        assert_eq!(signer().verify(&token).unwrap(), id);
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let token = signer().sign(&Uuid::now_v7()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{signature}", Uuid::now_v7().simple());

        assert!(signer().verify(&forged).is_err());
        assert!(signer().verify("no-dot").is_err());

        let other = TokenSigner::new("other-secret".to_string().into());
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn passwords_verify_against_digest() {
        let salt = Uuid::now_v7();
        let digest = signer().password_digest(&salt, "Secret1").unwrap();

        assert!(signer().verify_password(&salt, "Secret1", &digest).unwrap());
        assert!(!signer().verify_password(&salt, "Secret2", &digest).unwrap());
    }

    #[test]
    fn v7_ids_carry_their_creation_time() {
        let before = Timestamp::now();
        let created = Uuid::now_v7().jiff_timestamp().unwrap();

        // v7 timestamps have millisecond precision
        assert!(created.as_millisecond() >= before.as_millisecond());
    }
}
