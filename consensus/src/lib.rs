// Lambda protocol consensus library.
//
// SPDX-License-Identifier: Apache-2.0
//
// Written in 2022-2024 by
//     The Lambda Blockchain developers
//
// Copyright (C) 2022-2024 The Lambda Blockchain developers. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Coding conventions
#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate strict_encoding;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

mod block;
pub mod opcodes;
mod script;
mod tx;
mod contract;
mod hashtypes;
mod timelocks;
mod util;
mod coding;
mod deserialize;

pub use block::{BlockHash, BlockHeader, BlockMerkleRoot};
pub use coding::{
    ByteStr, ConsensusDataError, ConsensusDecode, ConsensusDecodeError, ConsensusEncode, LenVarInt,
    VarInt, VarIntArray,
};
pub use contract::{ContractOutput, ContractType};
pub use deserialize::Deserializer;
pub use hashtypes::{PubkeyHash, ScriptHash};
pub use script::{
    InputRef, InputRefs, OpCode, OpPattern, RedeemScript, ScriptBytes, ScriptError, ScriptIter,
    ScriptOp, ScriptPubkey, SigScript,
};
pub use timelocks::{LockTime, SeqNo, LOCKTIME_THRESHOLD};
pub use tx::{
    Outpoint, OutpointParseError, Sats, Tx, TxIn, TxOut, TxParseError, TxVer, Txid, Vout,
};
pub use util::NonStandardValue;

pub const LIB_NAME_LAMBDA: &str = "Lambda";
