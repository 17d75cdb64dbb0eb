//! Vector values for each protocol layer.
//!
//! Vectors are only unique within their layer: the same number means
//! different things under the root layer and under an E1.33 framing PDU.

// Root layer (4 byte vectors)
pub const VECTOR_ROOT_E131_REV2: u32 = 3;
pub const VECTOR_ROOT_E131: u32 = 4;
pub const VECTOR_ROOT_E133: u32 = 5;
pub const VECTOR_ROOT_RPT: u32 = 5;
pub const VECTOR_ROOT_NULL: u32 = 6;
pub const VECTOR_ROOT_BROKER: u32 = 9;
pub const VECTOR_ROOT_LLRP: u32 = 0x0a;
pub const VECTOR_ROOT_EPT: u32 = 0x0b;

// E1.31 framing layer (4 byte vectors)
pub const VECTOR_E131_DATA: u32 = 2;
pub const VECTOR_E131_SYNC: u32 = 3;
pub const VECTOR_E131_DISCOVERY: u32 = 4;

// DMP layer (1 byte vectors)
pub const DMP_GET_PROPERTY_VECTOR: u32 = 1;
pub const DMP_SET_PROPERTY_VECTOR: u32 = 2;

// E1.33 framing layer (4 byte vectors)
pub const VECTOR_FRAMING_RDMNET: u32 = 1;
pub const VECTOR_FRAMING_STATUS: u32 = 2;
pub const VECTOR_FRAMING_CONTROLLER: u32 = 3;
pub const VECTOR_FRAMING_CHANGE_NOTIFICATION: u32 = 4;

// RPT layer (4 byte vectors)
pub const VECTOR_RPT_REQUEST: u32 = 1;
pub const VECTOR_RPT_STATUS: u32 = 2;
pub const VECTOR_RPT_NOTIFICATION: u32 = 3;

// RDM command layer (1 byte vector, the RDM start code)
pub const VECTOR_RDMNET_DATA: u32 = 0xcc;

// LLRP layer (4 byte vectors)
pub const VECTOR_LLRP_PROBE_REQUEST: u32 = 1;
pub const VECTOR_LLRP_PROBE_REPLY: u32 = 2;
pub const VECTOR_LLRP_RDM_CMD: u32 = 3;

// Broker layer (2 byte vectors)
pub const VECTOR_BROKER_CONNECT: u32 = 1;
pub const VECTOR_BROKER_CONNECT_REPLY: u32 = 2;
pub const VECTOR_BROKER_CLIENT_ENTRY_UPDATE: u32 = 3;
pub const VECTOR_BROKER_REDIRECT_V4: u32 = 4;
pub const VECTOR_BROKER_REDIRECT_V6: u32 = 5;
pub const VECTOR_BROKER_FETCH_CLIENT_LIST: u32 = 6;
pub const VECTOR_BROKER_CONNECTED_CLIENT_LIST: u32 = 7;
pub const VECTOR_BROKER_CLIENT_ADD: u32 = 8;
pub const VECTOR_BROKER_CLIENT_REMOVE: u32 = 9;
pub const VECTOR_BROKER_CLIENT_ENTRY_CHANGE: u32 = 0x0a;
pub const VECTOR_BROKER_REQUEST_DYNAMIC_UIDS: u32 = 0x0b;
pub const VECTOR_BROKER_ASSIGNED_DYNAMIC_UIDS: u32 = 0x0c;
pub const VECTOR_BROKER_FETCH_DYNAMIC_UID_LIST: u32 = 0x0d;
pub const VECTOR_BROKER_DISCONNECT: u32 = 0x0e;
pub const VECTOR_BROKER_NULL: u32 = 0x0f;

// Client entry layer (4 byte vectors, the client protocol)
pub const CLIENT_PROTOCOL_RPT: u32 = 5;
pub const CLIENT_PROTOCOL_EPT: u32 = 0x0b;
