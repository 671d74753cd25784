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

use core::slice;
use std::fmt::{self, Display, Formatter, LowerHex};
use std::iter::Sum;
use std::num::ParseIntError;
use std::ops::{Div, Rem};
use std::str::FromStr;

use amplify::hex::{self, FromHex, ToHex};
use amplify::{ByteArray, Bytes32StrRev};
use commit_verify::{DigestExt, Sha256};

use crate::{
    ConsensusDecode, ConsensusDecodeError, ConsensusEncode, ContractOutput, LockTime,
    NonStandardValue, ScriptPubkey, SeqNo, SigScript, VarIntArray, LIB_NAME_LAMBDA,
};

pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    let mut engine = Sha256::default();
    engine.input_raw(data);
    engine.finish()
}

pub(crate) fn double_sha256(data: &[u8]) -> [u8; 32] {
    let mut engine = Sha256::default();
    engine.input_raw(data);
    let mut double = Sha256::default();
    double.input_raw(&engine.finish());
    double.finish()
}

#[derive(Wrapper, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[wrapper(AsSlice, BorrowSlice, Index, RangeOps, Debug, Hex, Display, FromStr)]
// all-zeros used in coinbase
pub struct Txid(
    #[from]
    #[from([u8; 32])]
    Bytes32StrRev,
);

impl From<Txid> for [u8; 32] {
    fn from(txid: Txid) -> Self { txid.to_byte_array() }
}

impl Txid {
    #[inline]
    pub const fn coinbase() -> Self { Self(Bytes32StrRev::zero()) }
    #[inline]
    pub fn is_coinbase(&self) -> bool { self.to_byte_array() == [0u8; 32] }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, From)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[display(inner)]
// 0xFFFFFFFF used in coinbase
pub struct Vout(u32);

impl Vout {
    pub const fn from_u32(u: u32) -> Self { Vout(u) }
    #[inline]
    pub const fn into_u32(self) -> u32 { self.0 }
    #[inline]
    pub const fn into_usize(self) -> usize { self.0 as usize }
    #[inline]
    pub const fn to_u32(&self) -> u32 { self.0 }
    #[inline]
    pub const fn to_usize(&self) -> usize { self.0 as usize }
}

impl FromStr for Vout {
    type Err = ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> { s.parse().map(Self) }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[display("{txid}:{vout}")]
pub struct Outpoint {
    pub txid: Txid,
    pub vout: Vout,
}

impl Outpoint {
    #[inline]
    pub fn new(txid: Txid, vout: impl Into<Vout>) -> Self {
        Self {
            txid,
            vout: vout.into(),
        }
    }

    #[inline]
    pub const fn coinbase() -> Self {
        Self {
            txid: Txid::coinbase(),
            vout: Vout::from_u32(u32::MAX),
        }
    }

    #[inline]
    pub fn vout_u32(self) -> u32 { self.vout.into_u32() }

    #[inline]
    pub fn vout_usize(self) -> usize { self.vout.into_usize() }

    #[inline]
    pub fn is_coinbase(&self) -> bool {
        self.txid.is_coinbase() && self.vout.into_u32() == u32::MAX
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, From, Error)]
#[display(doc_comments)]
pub enum OutpointParseError {
    /// malformed string representation of outpoint '{0}' lacking txid and
    /// vout separator ':'
    MalformedSeparator(String),

    /// malformed outpoint output number. Details: {0}
    #[from]
    InvalidVout(ParseIntError),

    /// malformed outpoint txid value. Details: {0}
    #[from]
    InvalidTxid(hex::Error),
}

impl FromStr for Outpoint {
    type Err = OutpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (txid, vout) = s
            .split_once(':')
            .ok_or_else(|| OutpointParseError::MalformedSeparator(s.to_owned()))?;
        Ok(Outpoint::new(txid.parse()?, Vout::from_str(vout)?))
    }
}

#[cfg(feature = "serde")]
mod _serde_outpoint {
    use serde::de::{SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::*;

    impl Serialize for Outpoint {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_string())
            } else {
                let mut ser = serializer.serialize_tuple(2)?;
                ser.serialize_element(&self.txid)?;
                ser.serialize_element(&self.vout)?;
                ser.end()
            }
        }
    }

    impl<'de> Deserialize<'de> for Outpoint {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
            use serde::de::Error;
            if deserializer.is_human_readable() {
                String::deserialize(deserializer).and_then(|string| {
                    Self::from_str(&string)
                        .map_err(|_| D::Error::custom("wrong outpoint string representation"))
                })
            } else {
                struct OutpointVisitor;

                impl<'de> Visitor<'de> for OutpointVisitor {
                    type Value = Outpoint;

                    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                        write!(formatter, "a transaction outpoint")
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                    where A: SeqAccess<'de> {
                        let mut outpoint = Outpoint::coinbase();
                        outpoint.txid =
                            seq.next_element()?.ok_or_else(|| Error::invalid_length(0, &self))?;
                        outpoint.vout =
                            seq.next_element()?.ok_or_else(|| Error::invalid_length(1, &self))?;
                        Ok(outpoint)
                    }
                }

                deserializer.deserialize_tuple(2, OutpointVisitor)
            }
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct TxIn {
    pub prev_output: Outpoint,
    pub sig_script: SigScript,
    pub sequence: SeqNo,
}

impl TxIn {
    /// Test whether the input is a generation (coinbase) input, spending an
    /// all-zeros txid at index `0xFFFFFFFF`.
    #[inline]
    pub fn is_coinbase(&self) -> bool { self.prev_output.is_coinbase() }
}

/// An amount of the chain currency.
///
/// Plain outputs carry a signed amount on the wire; contract outputs and the
/// v2 identifier reinterpret the same 8 bytes unsigned. The
/// `*_consensus_u64` accessors are bit-preserving views for the latter.
#[derive(
    Wrapper, WrapperMut, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, From, Default
)]
#[wrapper(Add, Sub, Mul, Div, FromStr)]
#[wrapper_mut(MathAssign)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Sats(
    #[from]
    #[from(i32)]
    #[from(u32)]
    #[from(u16)]
    #[from(u8)]
    pub i64,
);

impl Sats {
    pub const ZERO: Self = Sats(0);
    pub const COIN: Self = Sats(100_000_000);

    pub const fn from_coins(coins: u32) -> Self { Self(coins as i64 * Self::COIN.0) }
    pub fn from_sats(sats: impl Into<i64>) -> Self { Self(sats.into()) }

    #[inline]
    pub const fn from_consensus_i64(sats: i64) -> Self { Self(sats) }
    /// Bit-preserving view of the unsigned on-wire amount of a contract
    /// output.
    #[inline]
    pub const fn from_consensus_u64(sats: u64) -> Self { Self(sats as i64) }

    pub const fn is_zero(&self) -> bool { self.0 == 0 }
    pub const fn is_non_zero(&self) -> bool { self.0 != 0 }

    pub const fn sats(&self) -> i64 { self.0 }

    #[inline]
    pub const fn to_consensus_i64(&self) -> i64 { self.0 }
    /// Bit-preserving unsigned view used by contract outputs and the v2
    /// identifier.
    #[inline]
    pub const fn to_consensus_u64(&self) -> u64 { self.0 as u64 }

    pub const fn coins_floor(&self) -> i64 { self.0 / Self::COIN.0 }

    pub const fn sats_rem(&self) -> i64 { self.0 % Self::COIN.0 }

    #[must_use]
    pub fn checked_add(&self, other: impl Into<Self>) -> Option<Self> {
        self.0.checked_add(other.into().0).map(Self)
    }
    #[must_use]
    pub fn checked_sub(&self, other: impl Into<Self>) -> Option<Self> {
        self.0.checked_sub(other.into().0).map(Self)
    }

    #[must_use]
    pub fn checked_add_assign(&mut self, other: impl Into<Self>) -> Option<Self> {
        *self = Self(self.0.checked_add(other.into().0)?);
        Some(*self)
    }

    #[must_use]
    pub fn checked_sub_assign(&mut self, other: impl Into<Self>) -> Option<Self> {
        *self = Self(self.0.checked_sub(other.into().0)?);
        Some(*self)
    }

    #[must_use]
    pub fn saturating_add(&self, other: impl Into<Self>) -> Self {
        Self(self.0.saturating_add(other.into().0))
    }

    #[must_use]
    pub fn saturating_sub(&self, other: impl Into<Self>) -> Self {
        Self(self.0.saturating_sub(other.into().0))
    }
}

impl PartialEq<i64> for Sats {
    fn eq(&self, other: &i64) -> bool { self.0.eq(other) }
}

impl Sum for Sats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Sats::ZERO, |sum, value| sum.saturating_add(value))
    }
}

impl Sum<i64> for Sats {
    fn sum<I: Iterator<Item = i64>>(iter: I) -> Self {
        iter.fold(Sats::ZERO, |sum, value| sum.saturating_add(Sats(value)))
    }
}

impl Div<usize> for Sats {
    type Output = Sats;
    fn div(self, rhs: usize) -> Self::Output { Sats(self.0 / rhs as i64) }
}

impl Rem<usize> for Sats {
    type Output = Sats;
    fn rem(self, rhs: usize) -> Self::Output { Sats(self.0 % rhs as i64) }
}

impl Display for Sats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { Display::fmt(&self.0, f) }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct TxOut {
    pub value: Sats,
    pub script_pubkey: ScriptPubkey,
    /// Contract region preceding the value and script on the wire; selected
    /// by the tag bits of the leading 8 bytes.
    pub contract: Option<ContractOutput>,
}

impl TxOut {
    pub fn new(script_pubkey: impl Into<ScriptPubkey>, value: impl Into<Sats>) -> Self {
        TxOut {
            script_pubkey: script_pubkey.into(),
            value: value.into(),
            contract: None,
        }
    }

    pub fn with_contract(
        script_pubkey: impl Into<ScriptPubkey>,
        value: impl Into<Sats>,
        contract: ContractOutput,
    ) -> Self {
        TxOut {
            script_pubkey: script_pubkey.into(),
            value: value.into(),
            contract: Some(contract),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TxVer(i32);

impl Default for TxVer {
    fn default() -> Self { TxVer(2) }
}

impl TxVer {
    /// Legacy version hashed with plain double-SHA256.
    pub const V1: Self = TxVer(1);
    /// Current version using the layered identifier.
    pub const V2: Self = TxVer(2);

    #[inline]
    pub const fn from_consensus_i32(ver: i32) -> Self { TxVer(ver) }

    pub const fn try_from_standard(ver: i32) -> Result<Self, NonStandardValue<i32>> {
        let ver = TxVer::from_consensus_i32(ver);
        if !ver.is_standard() {
            Err(NonStandardValue::with(ver.0, "TxVer"))
        } else {
            Ok(ver)
        }
    }

    #[inline]
    pub const fn is_standard(self) -> bool { self.0 <= TxVer::V2.0 }

    #[inline]
    pub const fn to_consensus_i32(&self) -> i32 { self.0 }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Display)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[display(LowerHex)]
pub struct Tx {
    pub version: TxVer,
    pub inputs: VarIntArray<TxIn>,
    pub outputs: VarIntArray<TxOut>,
    pub lock_time: LockTime,
}

impl LowerHex for Tx {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.consensus_serialize().to_hex())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error, From)]
#[display(inner)]
pub enum TxParseError {
    #[from]
    Hex(hex::Error),
    #[from]
    Consensus(ConsensusDecodeError),
}

impl FromStr for Tx {
    type Err = TxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = Vec::<u8>::from_hex(s)?;
        Tx::consensus_deserialize(data).map_err(TxParseError::from)
    }
}

impl Tx {
    #[inline]
    pub fn inputs(&self) -> slice::Iter<TxIn> { self.inputs.iter() }

    #[inline]
    pub fn outputs(&self) -> slice::Iter<TxOut> { self.outputs.iter() }

    #[inline]
    pub fn to_unsigned_tx(&self) -> Tx {
        let mut tx = self.clone();
        for input in &mut tx.inputs {
            input.sig_script = SigScript::empty();
        }
        tx
    }

    /// Computes a "normalized TXID" which does not include any signatures.
    ///
    /// This gives a way to identify a transaction that is "the same" as
    /// another in the sense of having same inputs and outputs.
    pub fn ntxid(&self) -> [u8; 32] { self.to_unsigned_tx().txid().to_byte_array() }

    /// Computes the [`Txid`].
    ///
    /// Version-2 transactions use the layered per-field digest; all other
    /// versions hash the full consensus serialization twice.
    pub fn txid(&self) -> Txid {
        if self.version == TxVer::V2 {
            return self.layered_txid();
        }
        let mut enc = Sha256::default();
        self.consensus_encode(&mut enc).expect("engines don't error");
        let mut double = Sha256::default();
        double.input_raw(&enc.finish());
        Txid::from_byte_array(double.finish())
    }

    /// The v2 identifier: a double-SHA256 over per-field sub-hashes rather
    /// than over the raw serialization.
    fn layered_txid(&self) -> Txid {
        let mut enc = Sha256::default();
        // Version is hashed as u32 while element counts are i32; both widths
        // are fixed by the v2 digest layout.
        (self.version.to_consensus_i32() as u32)
            .consensus_encode(&mut enc)
            .expect("engines don't error");
        (self.inputs.len() as i32).consensus_encode(&mut enc).expect("engines don't error");
        enc.input_raw(&self.hash_inputs());
        (self.outputs.len() as i32).consensus_encode(&mut enc).expect("engines don't error");
        enc.input_raw(&self.hash_outputs());
        self.lock_time.consensus_encode(&mut enc).expect("engines don't error");
        let mut double = Sha256::default();
        double.input_raw(&enc.finish());
        Txid::from_byte_array(double.finish())
    }

    fn hash_inputs(&self) -> [u8; 32] {
        let mut concat = Sha256::default();
        for input in &self.inputs {
            let mut engine = Sha256::default();
            input.prev_output.consensus_encode(&mut engine).expect("engines don't error");
            engine.input_raw(&sha256(input.sig_script.as_slice()));
            input.sequence.consensus_encode(&mut engine).expect("engines don't error");
            concat.input_raw(&engine.finish());
        }
        concat.finish()
    }

    fn hash_outputs(&self) -> [u8; 32] {
        let mut concat = Sha256::default();
        for output in &self.outputs {
            let mut engine = Sha256::default();
            if let Some(contract) = &output.contract {
                contract.consensus_encode(&mut engine).expect("engines don't error");
            }
            output
                .value
                .to_consensus_u64()
                .consensus_encode(&mut engine)
                .expect("engines don't error");
            let script = output.script_pubkey.as_slice();
            engine.input_raw(&sha256(script));
            if let Some(pos) = output.script_pubkey.state_separator() {
                engine.input_raw(&sha256(&script[..pos]));
                engine.input_raw(&sha256(&script[pos..]));
            }
            concat.input_raw(&engine.finish());
        }
        concat.finish()
    }
}

#[cfg(test)]
mod test {
    use amplify::num::u256;

    use super::*;
    use crate::{ByteStr, ContractType};

    fn single_in_single_out(version: TxVer, output: TxOut) -> Tx {
        let input = TxIn {
            prev_output: Outpoint::new(Txid::from([9u8; 32]), 1u32),
            sig_script: SigScript::from_unsafe(vec![0x51]),
            sequence: SeqNo::from_consensus_u32(0xFFFF_FFFF),
        };
        Tx {
            version,
            inputs: VarIntArray::try_from(vec![input]).unwrap(),
            outputs: VarIntArray::try_from(vec![output]).unwrap(),
            lock_time: LockTime::ZERO,
        }
    }

    #[test]
    fn txid_byteorder() {
        let hex = "ed9f6388c0360c1861d331a0388d5a54815dd720cc67fa783c348217a0e943ca";
        let from_str = Txid::from_str(hex).unwrap();
        let from_hex = Txid::from_hex(hex).unwrap();
        assert_eq!(from_str, from_hex);
        assert_eq!(from_str.to_string(), from_str.to_hex());
        assert_eq!(from_str.to_string(), hex);
        assert_eq!(format!("{from_str:x}"), hex);
        assert_eq!(from_str[0], 0xca);
    }

    #[test]
    fn coinbase_input() {
        assert!(Outpoint::coinbase().is_coinbase());
        let input = TxIn {
            prev_output: Outpoint::coinbase(),
            sig_script: SigScript::new(),
            sequence: SeqNo::from_consensus_u32(0),
        };
        assert!(input.is_coinbase());
        let ordinary = Outpoint::new(Txid::from([9u8; 32]), 0u32);
        assert!(!ordinary.is_coinbase());
        // an all-zeros txid at an ordinary index is not generation-like
        assert!(!Outpoint::new(Txid::coinbase(), 0u32).is_coinbase());
    }

    #[test]
    fn sats() {
        assert_eq!(Sats(0).sats(), 0);
        assert_eq!(Sats(1000).coins_floor(), 0);
        assert_eq!(Sats(1000).sats_rem(), 1000);
        assert_eq!(Sats(150_000_000).coins_floor(), 1);
        assert_eq!(Sats(150_000_000).sats_rem(), 50_000_000);
        assert_eq!(Sats::from_coins(2), Sats(200_000_000));
        assert!(Sats(0).is_zero());
        assert!(Sats(1).is_non_zero());

        // the unsigned view is bit-preserving in both directions
        assert_eq!(Sats(-1).to_consensus_u64(), u64::MAX);
        assert_eq!(Sats::from_consensus_u64(u64::MAX).to_consensus_i64(), -1);
        assert_eq!(Sats::from_consensus_u64(1000).sats(), 1000);
    }

    #[test]
    fn legacy_transaction() {
        let tx =
            "0100000001a15d57094aa7a21a28cb20b59aab8fc7d1149a3bdbcddba9c622e4f5f6a99ece010000006c49\
            3046022100f93bb0e7d8db7bd46e40132d1f8242026e045f03a0efe71bbb8e3f475e970d790221009337cd7\
            f1f929f00cc6ff01f03729b069a7c21b59b1736ddfee5db5946c5da8c0121033b9b137ee87d5a812d6f506e\
            fdd37f0affa7ffc310711c06c7f3e097c9447c52ffffffff0100e1f505000000001976a9140389035a9225b\
            3839e2bbf32d826a1e222031fd888ac00000000";
        let realtx = Tx::from_str(tx).unwrap();

        assert_eq!(&realtx.to_string(), tx);
        assert_eq!(&realtx.to_hex(), tx);
        assert_eq!(&format!("{realtx:x}"), tx);

        assert_eq!(realtx.version, TxVer::V1);
        assert_eq!(realtx.inputs.len(), 1);
        // hashes are encoded as little-endian 256-bit numbers rather than as
        // data strings
        assert_eq!(
            format!("{:x}", realtx.inputs[0].prev_output.txid),
            "ce9ea9f6f5e422c6a9dbcddb3b9a14d1c78fab9ab520cb281aa2a74a09575da1".to_string()
        );
        assert_eq!(realtx.inputs[0].prev_output.vout, Vout::from_u32(1));
        assert_eq!(realtx.outputs.len(), 1);
        assert!(realtx.outputs[0].contract.is_none());
        assert!(realtx.outputs[0].script_pubkey.is_p2pkh());
        assert_eq!(realtx.lock_time, LockTime::ZERO);

        // the v1 identifier is the double-SHA256 of the serialization
        assert_eq!(
            format!("{:x}", realtx.txid()),
            "a6eab3c14ab5272a58a5ba91505ba1a4b6d7a3a9fcbd187b6cd99a7b6d548cb7".to_string()
        );
    }

    fn expected_layered_id(tx: &Tx, output_hash_fields: &[u8]) -> Txid {
        let input_hash = {
            let mut buf = Vec::new();
            buf.extend_from_slice(&[9u8; 32]);
            buf.extend_from_slice(&1u32.to_le_bytes());
            buf.extend_from_slice(&sha256(&[0x51]));
            buf.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
            sha256(&buf)
        };
        let hash_inputs = sha256(&input_hash);
        let hash_outputs = sha256(&sha256(output_hash_fields));

        let mut preimage = Vec::new();
        preimage.extend_from_slice(&2u32.to_le_bytes());
        preimage.extend_from_slice(&1i32.to_le_bytes());
        preimage.extend_from_slice(&hash_inputs);
        preimage.extend_from_slice(&1i32.to_le_bytes());
        preimage.extend_from_slice(&hash_outputs);
        preimage.extend_from_slice(&tx.lock_time.to_consensus_u32().to_le_bytes());
        Txid::from(double_sha256(&preimage))
    }

    #[test]
    fn layered_id_plain_output() {
        let pk_script = ScriptPubkey::p2pkh([7u8; 20]);
        let tx = single_in_single_out(TxVer::V2, TxOut::new(pk_script.clone(), Sats(1000)));

        let mut fields = Vec::new();
        fields.extend_from_slice(&1000u64.to_le_bytes());
        fields.extend_from_slice(&sha256(pk_script.as_slice()));
        assert_eq!(tx.txid(), expected_layered_id(&tx, &fields));
    }

    #[test]
    fn layered_id_state_separator() {
        let mut script = vec![0x51, 0x6a];
        script.extend_from_slice(&[0xEE; 20]);
        script.extend_from_slice(&20u32.to_le_bytes());
        let pk_script = ScriptPubkey::from_unsafe(script.clone());
        assert_eq!(pk_script.state_separator(), Some(script.len() - 24));

        let tx = single_in_single_out(TxVer::V2, TxOut::new(pk_script, Sats(1000)));

        let split = script.len() - 24;
        let mut fields = Vec::new();
        fields.extend_from_slice(&1000u64.to_le_bytes());
        fields.extend_from_slice(&sha256(&script));
        fields.extend_from_slice(&sha256(&script[..split]));
        fields.extend_from_slice(&sha256(&script[split..]));
        assert_eq!(tx.txid(), expected_layered_id(&tx, &fields));
    }

    #[test]
    fn layered_id_contract_output() {
        let contract = ContractOutput {
            ty: ContractType::FT,
            outpoint: Outpoint::new(Txid::from([3u8; 32]), 7u32),
            value: u256::from(21_000_000u64),
            max_supply: u256::from(21_000_000u64),
            metadata: ByteStr::from(b"ft".to_vec()),
        };
        let pk_script = ScriptPubkey::p2pkh([7u8; 20]);
        let tx = single_in_single_out(
            TxVer::V2,
            TxOut::with_contract(pk_script.clone(), Sats(1000), contract.clone()),
        );

        let mut fields = contract.consensus_serialize();
        fields.extend_from_slice(&1000u64.to_le_bytes());
        fields.extend_from_slice(&sha256(pk_script.as_slice()));
        assert_eq!(tx.txid(), expected_layered_id(&tx, &fields));
    }

    #[test]
    fn ntxid_ignores_sig_scripts() {
        let pk_script = ScriptPubkey::p2pkh([7u8; 20]);
        let tx = single_in_single_out(TxVer::V1, TxOut::new(pk_script.clone(), Sats(1000)));
        let mut resigned = tx.clone();
        for input in &mut resigned.inputs {
            input.sig_script = SigScript::from_unsafe(vec![0x00, 0x51]);
        }
        assert_ne!(tx.txid(), resigned.txid());
        assert_eq!(tx.ntxid(), resigned.ntxid());
    }
}
