pub mod errors;
pub mod models;
mod signing;

use std::env;
use std::time::Duration;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use crate::config::KinesisParameters;
use crate::manager_kinesis::errors::KinesisError;
use crate::manager_kinesis::models::{PutRecordInput, PutRecordOutput};
use crate::manager_kinesis::signing::{amz_date, authorization, Credentials, SigningRequest};
use crate::models::StreamRecord;

const SERVICE: &str = "kinesis";
const PUT_RECORD_TARGET: &str = "Kinesis_20131202.PutRecord";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Anything that can put a single record on a named stream
pub trait Publisher {
    /// Puts one record on a stream
    ///
    /// # Arguments
    ///
    /// * 'stream_name' - name of the stream
    /// * 'data' - the record payload
    /// * 'partition_key' - key deciding which shard the record goes to
    fn put_record(&self, stream_name: &str, data: &[u8], partition_key: &str) -> Result<PutRecordOutput, KinesisError>;
}

/// Publisher for AWS Kinesis Data Streams using the JSON API
pub struct Kinesis {
    client: Client,
    url: Url,
    host: String,
    region: String,
    credentials: Credentials,
}

impl Kinesis {
    /// Returns a new instance of the Kinesis struct
    ///
    /// Credentials not given in the configuration are read from the standard AWS environment variables
    ///
    /// # Arguments
    ///
    /// * 'config' - Kinesis configuration
    pub fn new(config: &KinesisParameters) -> Result<Self, KinesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let endpoint = config.endpoint
            .clone()
            .unwrap_or(format!("https://kinesis.{}.amazonaws.com", config.region));
        let url = Url::parse(&endpoint)
            .map_err(|e| KinesisError::EndpointError(format!("{}: {}", endpoint, e)))?;
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{}:{}", h, p),
            (Some(h), None) => h.to_string(),
            (None, _) => return Err(KinesisError::EndpointError(format!("{}: no host", endpoint))),
        };

        Ok(Self {
            client,
            url,
            host,
            region: config.region.clone(),
            credentials: resolve_credentials(config)?,
        })
    }
}

impl Publisher for Kinesis {
    fn put_record(&self, stream_name: &str, data: &[u8], partition_key: &str) -> Result<PutRecordOutput, KinesisError> {
        let input = PutRecordInput {
            stream_name: stream_name.to_string(),
            data: STANDARD.encode(data),
            partition_key: partition_key.to_string(),
        };
        let body = serde_json::to_vec(&input)?;

        let now = Utc::now();
        let mut headers = vec![
            ("content-type".to_string(), CONTENT_TYPE.to_string()),
            ("host".to_string(), self.host.clone()),
            ("x-amz-date".to_string(), amz_date(now)),
            ("x-amz-target".to_string(), PUT_RECORD_TARGET.to_string()),
        ];
        if let Some(token) = &self.credentials.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }

        let request = SigningRequest { method: "POST", path: self.url.path(), headers, body: &body };
        let auth = authorization(&request, &self.credentials, &self.region, SERVICE, now)?;

        let mut builder = self.client.post(self.url.clone());
        for (k, v) in request.headers.iter().filter(|(k, _)| k != "host") {
            builder = builder.header(k.as_str(), v.as_str());
        }

        let response = builder
            .header("authorization", auth)
            .body(body)
            .send()?;

        let status = response.status();
        let json = response.text()?;
        if !status.is_success() {
            return Err(KinesisError::ServiceError { status: status.as_u16(), body: json });
        }

        let output: PutRecordOutput = serde_json::from_str(&json)?;
        debug!("put record on {}: shard {}, sequence {}", stream_name, output.shard_id, output.sequence_number);

        Ok(output)
    }
}

/// Publishes weather records, one message per record, to a stream under a constant partition key
pub struct StreamSink<P: Publisher> {
    publisher: P,
    stream_name: String,
    partition_key: String,
}

impl<P: Publisher> StreamSink<P> {
    /// Returns a new StreamSink
    ///
    /// # Arguments
    ///
    /// * 'publisher' - the publisher to put records with
    /// * 'config' - Kinesis configuration holding stream name and partition key
    pub fn new(publisher: P, config: &KinesisParameters) -> Self {
        Self {
            publisher,
            stream_name: config.stream_name.clone(),
            partition_key: config.partition_key.clone(),
        }
    }

    /// JSON encodes a record and puts it on the stream
    ///
    /// # Arguments
    ///
    /// * 'record' - the record to publish
    pub fn put(&self, record: &StreamRecord) -> Result<PutRecordOutput, KinesisError> {
        let data = serde_json::to_vec(record)?;

        self.publisher.put_record(&self.stream_name, &data, &self.partition_key)
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

/// Resolves credentials from configuration, falling back to environment variables
///
/// # Arguments
///
/// * 'config' - Kinesis configuration
fn resolve_credentials(config: &KinesisParameters) -> Result<Credentials, KinesisError> {
    let access_key_id = config.access_key_id
        .clone()
        .or_else(|| env::var("AWS_ACCESS_KEY_ID").ok())
        .ok_or(KinesisError::CredentialsError("no access key id".to_string()))?;
    let secret_access_key = config.secret_access_key
        .clone()
        .or_else(|| env::var("AWS_SECRET_ACCESS_KEY").ok())
        .ok_or(KinesisError::CredentialsError("no secret access key".to_string()))?;
    let session_token = config.session_token
        .clone()
        .or_else(|| env::var("AWS_SESSION_TOKEN").ok());

    Ok(Credentials { access_key_id, secret_access_key, session_token })
}
