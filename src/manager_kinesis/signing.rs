use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use crate::manager_kinesis::errors::KinesisError;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// A request to sign, headers must not include the authorization header
pub struct SigningRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub headers: Vec<(String, String)>,
    pub body: &'a [u8],
}

/// Signs a request with AWS Signature Version 4 and returns the Authorization header value
///
/// # Arguments
///
/// * 'request' - the request to sign, its headers must include host and x-amz-date
/// * 'credentials' - AWS credentials
/// * 'region' - the AWS region the request is sent to
/// * 'service' - the AWS service name, i.e. 'kinesis'
/// * 'now' - the time stamp used in x-amz-date
pub fn authorization(request: &SigningRequest, credentials: &Credentials, region: &str, service: &str, now: DateTime<Utc>) -> Result<String, KinesisError> {
    let amz_date = amz_date(now);
    let date_stamp = now.format("%Y%m%d").to_string();
    let scope = format!("{}/{}/{}/aws4_request", date_stamp, region, service);

    let mut headers = request.headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim().to_string()))
        .collect::<Vec<(String, String)>>();
    headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = headers
        .iter()
        .map(|(k, v)| format!("{}:{}\n", k, v))
        .collect::<String>();
    let signed_headers = headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<&str>>()
        .join(";");

    let canonical_request = format!("{}\n{}\n\n{}\n{}\n{}",
        request.method, request.path, canonical_headers, signed_headers, sha256_hex(request.body));

    let string_to_sign = format!("{}\n{}\n{}\n{}",
        ALGORITHM, amz_date, scope, sha256_hex(canonical_request.as_bytes()));

    let key = signing_key(&credentials.secret_access_key, &date_stamp, region, service)?;
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes())?);

    Ok(format!("{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, credentials.access_key_id, scope, signed_headers, signature))
}

/// Returns the time stamp format used in the x-amz-date header
///
/// # Arguments
///
/// * 'now' - the time to format
pub fn amz_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Derives the signing key for a date, region and service
///
/// # Arguments
///
/// * 'secret' - the secret access key
/// * 'date_stamp' - date as 'YYYYMMDD'
/// * 'region' - AWS region
/// * 'service' - AWS service name
fn signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Result<Vec<u8>, KinesisError> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date_stamp.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;

    hmac_sha256(&k_service, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, KinesisError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| KinesisError::SigningError(e.to_string()))?;
    mac.update(data);

    Ok(mac.finalize().into_bytes().to_vec())
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
