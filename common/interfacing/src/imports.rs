pub use secrecy::{ExposeSecret, SecretString};
pub use serde::{Deserialize, Serialize};

pub fn expose_secret_string<S>(v: &SecretString, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(v.expose_secret())
}

pub fn secret_string_from_str<'de, D>(d: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(d).map(SecretString::new)
}
