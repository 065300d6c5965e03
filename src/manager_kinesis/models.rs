use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct PutRecordInput {
    #[serde(rename = "StreamName")]
    pub stream_name: String,
    #[serde(rename = "Data")]
    pub data: String,
    #[serde(rename = "PartitionKey")]
    pub partition_key: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PutRecordOutput {
    #[serde(rename = "ShardId")]
    pub shard_id: String,
    #[serde(rename = "SequenceNumber")]
    pub sequence_number: String,
}
