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

use std::borrow::Cow;
use std::fmt::Write as _;

use amplify::confinement;
use amplify::confinement::Confined;
use amplify::hex::ToHex;
use amplify::Array;

use crate::opcodes::*;
use crate::{Outpoint, Txid, VarInt, VarIntArray, LIB_NAME_LAMBDA};

/// Errors returned by the script walker.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum ScriptError {
    /// truncated script
    Truncated,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA, tags = repr, into_u8, try_from_u8)]
#[non_exhaustive]
#[repr(u8)]
pub enum OpCode {
    /// Push an empty array onto the stack.
    #[display("OP_0")]
    PushBytes0 = OP_0,

    /// Read the next byte as N; push the next N bytes as an array onto the
    /// stack.
    #[display("OP_PUSHDATA1")]
    PushData1 = OP_PUSHDATA1,
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the
    /// stack.
    #[display("OP_PUSHDATA2")]
    PushData2 = OP_PUSHDATA2,
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the
    /// stack.
    #[display("OP_PUSHDATA4")]
    PushData4 = OP_PUSHDATA4,

    /// Synonym for OP_RETURN.
    #[display("OP_RESERVED")]
    Reserved = OP_RESERVED,

    /// Fail the script immediately.
    #[display("OP_RETURN")]
    #[strict_type(dumb)]
    Return = OP_RETURN,

    /// Duplicates the top stack item.
    #[display("OP_DUP")]
    Dup = OP_DUP,

    /// Pushes 1 if the inputs are exactly equal, 0 otherwise.
    #[display("OP_EQUAL")]
    Equal = OP_EQUAL,

    /// Returns success if the inputs are exactly equal, failure otherwise.
    #[display("OP_EQUALVERIFY")]
    EqualVerify = OP_EQUALVERIFY,

    /// Pop the top stack item and push its RIPEMD(SHA256) hash.
    #[display("OP_HASH160")]
    Hash160 = OP_HASH160,

    /// Pop the top stack item and push its SHA256 hash.
    #[display("OP_SHA256")]
    Sha256 = OP_SHA256,

    /// Pop a signature and a pubkey; push 1/0 for success/failure.
    #[display("OP_CHECKSIG")]
    CheckSig = OP_CHECKSIG,

    /// Pop a signature and a pubkey; return success/failure.
    #[display("OP_CHECKSIGVERIFY")]
    CheckSigVerify = OP_CHECKSIGVERIFY,

    /// Pop M signatures and N pubkeys; push 1 if all signatures are valid.
    #[display("OP_CHECKMULTISIG")]
    CheckMultiSig = OP_CHECKMULTISIG,

    /// Pop M signatures and N pubkeys; return success/failure.
    #[display("OP_CHECKMULTISIGVERIFY")]
    CheckMultiSigVerify = OP_CHECKMULTISIGVERIFY,

    /// Pop a signature, a message and a pubkey; push 1/0 for success/failure.
    #[display("OP_CHECKDATASIG")]
    CheckDataSig = OP_CHECKDATASIG,

    /// Pop a signature, a message and a pubkey; return success/failure.
    #[display("OP_CHECKDATASIGVERIFY")]
    CheckDataSigVerify = OP_CHECKDATASIGVERIFY,

    /// Reverse the bytes of the top stack item.
    #[display("OP_REVERSEBYTES")]
    ReverseBytes = OP_REVERSEBYTES,

    /// Mark the boundary between the code and the state region of a script.
    #[display("OP_STATESEPERATOR")]
    StateSeperator = OP_STATESEPERATOR,

    /// Push an induction-proven input reference with its implicit 36-byte
    /// payload.
    #[display("OP_PUSHINPUTREF")]
    PushInputRef = OP_PUSHINPUTREF,

    /// Require an input reference to be present; implicit 36-byte payload.
    #[display("OP_REQUIREINPUTREF")]
    RequireInputRef = OP_REQUIREINPUTREF,

    /// Disallow a reference from being pushed in outputs; implicit 36-byte
    /// payload.
    #[display("OP_DISALLOWPUSHINPUTREF")]
    DisallowPushInputRef = OP_DISALLOWPUSHINPUTREF,

    /// Disallow a reference from being pushed in sibling outputs; implicit
    /// 36-byte payload.
    #[display("OP_DISALLOWPUSHINPUTREFSIBLING")]
    DisallowPushInputRefSibling = OP_DISALLOWPUSHINPUTREFSIBLING,

    /// Push a singleton input reference with its implicit 36-byte payload.
    #[display("OP_PUSHINPUTREFSINGLETON")]
    PushInputRefSingleton = OP_PUSHINPUTREFSINGLETON,
}

/// A 36-byte input-reference payload: the outpoint of the transaction output
/// which minted the reference.
#[derive(Wrapper, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From)]
#[wrapper(Index, RangeOps, AsSlice, BorrowSlice, Hex, Display, FromStr)]
pub struct InputRef(
    #[from]
    #[from([u8; 36])]
    Array<u8, 36>,
);

impl InputRef {
    /// Byte length of a reference payload: a 32-byte txid plus a 32-bit
    /// output index.
    pub const LEN: usize = 36;

    pub(crate) fn from_payload(payload: &[u8]) -> Self {
        let mut buf = [0u8; Self::LEN];
        buf.copy_from_slice(payload);
        Self(Array::from(buf))
    }

    /// Interprets the payload as the outpoint it commits to.
    pub fn outpoint(&self) -> Outpoint {
        let mut txid = [0u8; 32];
        txid.copy_from_slice(&self[..32]);
        let mut index = [0u8; 4];
        index.copy_from_slice(&self[32..]);
        Outpoint::new(Txid::from(txid), u32::from_le_bytes(index))
    }
}

/// Input references of a script, in encounter order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct InputRefs {
    /// Payloads of both OP_PUSHINPUTREF and OP_PUSHINPUTREFSINGLETON.
    pub all: Vec<InputRef>,
    /// Payloads of OP_PUSHINPUTREF only.
    pub normal: Vec<InputRef>,
    /// Payloads of OP_PUSHINPUTREFSINGLETON only.
    pub singleton: Vec<InputRef>,
}

/// A single item of a parsed script: either a bare opcode, or a push-class
/// opcode paired with its payload view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScriptOp<'script> {
    /// Bare opcode without a payload.
    Code(u8),
    /// Push-class opcode (standard pushes and input-reference opcodes)
    /// carrying its payload.
    Push(u8, &'script [u8]),
}

impl ScriptOp<'_> {
    pub const fn opcode(&self) -> u8 {
        match *self {
            ScriptOp::Code(opcode) | ScriptOp::Push(opcode, _) => opcode,
        }
    }

    pub const fn payload(&self) -> Option<&[u8]> {
        match *self {
            ScriptOp::Code(_) => None,
            ScriptOp::Push(_, data) => Some(data),
        }
    }

    /// Appends the byte-exact serialization of the item, including any
    /// PUSHDATA length prefix.
    pub fn serialize_into(&self, script: &mut Vec<u8>) {
        match *self {
            ScriptOp::Code(opcode) => script.push(opcode),
            ScriptOp::Push(opcode, data) => {
                script.push(opcode);
                match opcode {
                    OP_PUSHDATA1 => script.push(data.len() as u8),
                    OP_PUSHDATA2 => script.extend_from_slice(&(data.len() as u16).to_le_bytes()),
                    OP_PUSHDATA4 => script.extend_from_slice(&(data.len() as u32).to_le_bytes()),
                    _ => {}
                }
                script.extend_from_slice(data);
            }
        }
    }
}

/// Fallible iterator over the opcode stream of a script.
///
/// Standard pushes (`0x00..=0x4e`) carry an explicit payload length; the five
/// input-reference opcodes carry an implicit 36-byte payload. Any declared
/// length running past the end of the script yields [`ScriptError::Truncated`]
/// and fuses the iterator.
pub struct ScriptIter<'script> {
    script: &'script [u8],
    offset: usize,
}

impl<'script> ScriptIter<'script> {
    pub fn new(script: &'script [u8]) -> Self {
        ScriptIter { script, offset: 0 }
    }

    fn take(&mut self, count: usize) -> Result<&'script [u8], ScriptError> {
        let end = self.offset.checked_add(count).ok_or(ScriptError::Truncated)?;
        if end > self.script.len() {
            return Err(ScriptError::Truncated);
        }
        let data = &self.script[self.offset..end];
        self.offset = end;
        Ok(data)
    }

    fn take_byte(&mut self) -> Result<u8, ScriptError> {
        self.take(1).map(|data| data[0])
    }

    fn parse_op(&mut self) -> Result<ScriptOp<'script>, ScriptError> {
        let opcode = self.take_byte()?;
        if opcode <= OP_PUSHDATA4 {
            let dlen = match opcode {
                OP_PUSHDATA1 => self.take_byte()? as usize,
                OP_PUSHDATA2 => {
                    let len = self.take(2)?;
                    u16::from_le_bytes([len[0], len[1]]) as usize
                }
                OP_PUSHDATA4 => {
                    let len = self.take(4)?;
                    u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize
                }
                _ => opcode as usize,
            };
            Ok(ScriptOp::Push(opcode, self.take(dlen)?))
        } else if is_input_ref(opcode) {
            Ok(ScriptOp::Push(opcode, self.take(InputRef::LEN)?))
        } else {
            Ok(ScriptOp::Code(opcode))
        }
    }
}

impl<'script> Iterator for ScriptIter<'script> {
    type Item = Result<ScriptOp<'script>, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.script.len() {
            return None;
        }
        let item = self.parse_op();
        if item.is_err() {
            self.offset = self.script.len();
        }
        Some(item)
    }
}

/// Element of a script template: a specific bare opcode, or any data push.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpPattern {
    /// A bare opcode with the given byte value.
    Code(u8),
    /// Any push item, whatever its opcode and payload.
    AnyPush,
}

impl OpPattern {
    fn matches(&self, op: &ScriptOp) -> bool {
        match (op, self) {
            (ScriptOp::Code(code), OpPattern::Code(expected)) => code == expected,
            (ScriptOp::Push(..), OpPattern::AnyPush) => true,
            _ => false,
        }
    }
}

const P2PKH_TEMPLATE: [OpPattern; 5] = [
    OpPattern::Code(OP_DUP),
    OpPattern::Code(OP_HASH160),
    OpPattern::AnyPush,
    OpPattern::Code(OP_EQUALVERIFY),
    OpPattern::Code(OP_CHECKSIG),
];
const P2SH_TEMPLATE: [OpPattern; 3] =
    [OpPattern::Code(OP_HASH160), OpPattern::AnyPush, OpPattern::Code(OP_EQUAL)];
const P2PK_TEMPLATE: [OpPattern; 2] = [OpPattern::AnyPush, OpPattern::Code(OP_CHECKSIG)];

#[derive(Wrapper, WrapperMut, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From, Default)]
#[wrapper(Deref, AsSlice, Hex)]
#[wrapper_mut(DerefMut, AsSliceMut)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SigScript(ScriptBytes);

impl TryFrom<Vec<u8>> for SigScript {
    type Error = confinement::Error;
    fn try_from(script_bytes: Vec<u8>) -> Result<Self, Self::Error> {
        ScriptBytes::try_from(script_bytes).map(Self)
    }
}

impl SigScript {
    #[inline]
    pub fn empty() -> Self { SigScript::default() }

    #[inline]
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ScriptBytes::from(Confined::with_capacity(capacity)))
    }

    /// Constructs script object assuming the script length is less than 4GB.
    /// Panics otherwise.
    #[inline]
    pub fn from_unsafe(script_bytes: Vec<u8>) -> Self {
        Self(ScriptBytes::from_unsafe(script_bytes))
    }

    #[inline]
    pub fn as_script_bytes(&self) -> &ScriptBytes { &self.0 }
}

#[derive(Wrapper, WrapperMut, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From, Default)]
#[wrapper(Deref, AsSlice, Hex)]
#[wrapper_mut(DerefMut, AsSliceMut)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct RedeemScript(ScriptBytes);

impl TryFrom<Vec<u8>> for RedeemScript {
    type Error = confinement::Error;
    fn try_from(script_bytes: Vec<u8>) -> Result<Self, Self::Error> {
        ScriptBytes::try_from(script_bytes).map(Self)
    }
}

impl RedeemScript {
    #[inline]
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ScriptBytes::from(Confined::with_capacity(capacity)))
    }

    /// Constructs script object assuming the script length is less than 4GB.
    /// Panics otherwise.
    #[inline]
    pub fn from_unsafe(script_bytes: Vec<u8>) -> Self {
        Self(ScriptBytes::from_unsafe(script_bytes))
    }

    /// Adds a single opcode to the script.
    #[inline]
    pub fn push_opcode(&mut self, op_code: OpCode) { self.0.push(op_code as u8); }

    #[inline]
    pub fn as_script_bytes(&self) -> &ScriptBytes { &self.0 }
}

#[derive(Wrapper, WrapperMut, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From, Default)]
#[wrapper(Deref, AsSlice, Hex)]
#[wrapper_mut(DerefMut, AsSliceMut)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ScriptPubkey(ScriptBytes);

impl TryFrom<Vec<u8>> for ScriptPubkey {
    type Error = confinement::Error;
    fn try_from(script_bytes: Vec<u8>) -> Result<Self, Self::Error> {
        ScriptBytes::try_from(script_bytes).map(Self)
    }
}

impl ScriptPubkey {
    #[inline]
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(ScriptBytes::from(Confined::with_capacity(capacity)))
    }

    /// Constructs script object assuming the script length is less than 4GB.
    /// Panics otherwise.
    #[inline]
    pub fn from_unsafe(script_bytes: Vec<u8>) -> Self {
        Self(ScriptBytes::from_unsafe(script_bytes))
    }

    pub fn p2pkh(hash: impl Into<[u8; 20]>) -> Self {
        let mut script = Self::with_capacity(25);
        script.push_opcode(OpCode::Dup);
        script.push_opcode(OpCode::Hash160);
        script.push_slice(&hash.into());
        script.push_opcode(OpCode::EqualVerify);
        script.push_opcode(OpCode::CheckSig);
        script
    }

    pub fn p2sh(hash: impl Into<[u8; 20]>) -> Self {
        let mut script = Self::with_capacity(23);
        script.push_opcode(OpCode::Hash160);
        script.push_slice(&hash.into());
        script.push_opcode(OpCode::Equal);
        script
    }

    pub fn op_return(data: &[u8]) -> Self {
        let mut script = Self::with_capacity(ScriptBytes::len_for_slice(data.len()) + 1);
        script.push_opcode(OpCode::Return);
        script.push_slice(data);
        script
    }

    /// Checks whether a script pubkey is a P2PKH output.
    pub fn is_p2pkh(&self) -> bool { self.0.matches_template(&P2PKH_TEMPLATE) }

    /// Checks whether a script pubkey is a P2SH output.
    pub fn is_p2sh(&self) -> bool { self.0.matches_template(&P2SH_TEMPLATE) }

    /// Checks whether a script pubkey is a bare-pubkey output.
    pub fn is_p2pk(&self) -> bool { self.0.matches_template(&P2PK_TEMPLATE) }

    /// Provably-unspendable check of the legacy rules: a leading
    /// `OP_0 OP_RETURN` pair, or a leading `OP_RETURN`.
    #[inline]
    pub fn is_unspendable_legacy(&self) -> bool {
        let script = self.as_slice();
        script.starts_with(&[OP_0, OP_RETURN]) || script.first() == Some(&OP_RETURN)
    }

    /// Provably-unspendable check of the genesis rules: a leading
    /// `OP_0 OP_RETURN` pair only.
    #[inline]
    pub fn is_unspendable_genesis(&self) -> bool {
        self.as_slice().starts_with(&[OP_0, OP_RETURN])
    }

    #[inline]
    pub fn is_op_return(&self) -> bool { self.as_slice().first() == Some(&OP_RETURN) }

    /// Locates a trailing state region of the form
    /// `.. OP_RETURN <state bytes> <LE u32 state length>`.
    ///
    /// Returns the position right past the OP_RETURN where the state region
    /// starts, or `None` when the script carries no such region.
    pub fn state_separator(&self) -> Option<usize> {
        let script = self.as_slice();
        let len = script.len();
        if len < 1 + 4 + 1 {
            return None;
        }
        let mut tail = [0u8; 4];
        tail.copy_from_slice(&script[len - 4..]);
        let state_len = u32::from_le_bytes(tail) as usize;
        if len < 1 + state_len + 4 + 1 {
            return None;
        }
        let pos = len - 4 - state_len;
        if script[pos - 1] != OP_RETURN {
            return None;
        }
        Some(pos)
    }

    /// Adds a single opcode to the script.
    #[inline]
    pub fn push_opcode(&mut self, op_code: OpCode) { self.0.push(op_code as u8) }

    #[inline]
    pub fn as_script_bytes(&self) -> &ScriptBytes { &self.0 }
}

#[derive(Wrapper, WrapperMut, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Debug, From)]
#[wrapper(Deref, AsSlice, Hex)]
#[wrapper_mut(DerefMut, AsSliceMut)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
pub struct ScriptBytes(VarIntArray<u8>);

impl TryFrom<Vec<u8>> for ScriptBytes {
    type Error = confinement::Error;
    fn try_from(script_bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Confined::try_from(script_bytes).map(Self)
    }
}

impl ScriptBytes {
    /// Constructs script object assuming the script length is less than 4GB.
    /// Panics otherwise.
    #[inline]
    pub fn from_unsafe(script_bytes: Vec<u8>) -> Self {
        Self(Confined::try_from(script_bytes).expect("script exceeding 4GB"))
    }

    /// Returns the fallible opcode-stream iterator over the script.
    #[inline]
    pub fn iter_ops(&self) -> ScriptIter { ScriptIter::new(self.as_slice()) }

    /// Parses the script into its full list of op items.
    ///
    /// No partial list is produced: a script whose final push runs past the
    /// buffer end fails as a whole.
    pub fn ops(&self) -> Result<Vec<ScriptOp>, ScriptError> { self.iter_ops().collect() }

    /// Collects the input references of the script, in encounter order.
    ///
    /// The require/disallow reference opcodes consume their payload but
    /// contribute no reference.
    pub fn input_refs(&self) -> Result<InputRefs, ScriptError> {
        let mut refs = InputRefs::default();
        for item in self.iter_ops() {
            if let ScriptOp::Push(opcode, payload) = item? {
                match opcode {
                    OP_PUSHINPUTREF => {
                        let input_ref = InputRef::from_payload(payload);
                        refs.all.push(input_ref);
                        refs.normal.push(input_ref);
                    }
                    OP_PUSHINPUTREFSINGLETON => {
                        let input_ref = InputRef::from_payload(payload);
                        refs.all.push(input_ref);
                        refs.singleton.push(input_ref);
                    }
                    _ => {}
                }
            }
        }
        Ok(refs)
    }

    /// Produces the signature-sanitized form of the script.
    ///
    /// Input-reference payloads commit to concrete outpoints and must not
    /// participate in signature preimages re-signing the same script
    /// template; when the script contains any of the four signature-checking
    /// opcodes, every 36-byte reference payload is replaced with zeros.
    /// Scripts performing no signature checks are returned borrowed and
    /// byte-identical.
    pub fn zero_refs(&self) -> Result<Cow<'_, [u8]>, ScriptError> {
        let mut zeroed = Vec::with_capacity(self.len());
        let mut requires_sig = false;
        for item in self.iter_ops() {
            let item = item?;
            match item {
                ScriptOp::Code(
                    OP_CHECKSIG | OP_CHECKSIGVERIFY | OP_CHECKMULTISIG | OP_CHECKMULTISIGVERIFY,
                ) => {
                    requires_sig = true;
                    item.serialize_into(&mut zeroed);
                }
                ScriptOp::Push(opcode, _) if is_input_ref(opcode) => {
                    zeroed.push(opcode);
                    zeroed.extend_from_slice(&[0u8; InputRef::LEN]);
                }
                _ => item.serialize_into(&mut zeroed),
            }
        }
        if requires_sig {
            Ok(Cow::Owned(zeroed))
        } else {
            Ok(Cow::Borrowed(self.as_slice()))
        }
    }

    /// Length-equal, element-equal match of the parsed op stream against a
    /// template; unparseable scripts match nothing.
    pub fn matches_template(&self, template: &[OpPattern]) -> bool {
        let Ok(ops) = self.ops() else {
            return false;
        };
        ops.len() == template.len()
            && ops.iter().zip(template).all(|(op, pattern)| pattern.matches(op))
    }

    /// Renders the script as a space-separated opcode listing with hex
    /// payloads.
    pub fn to_asm(&self) -> Result<String, ScriptError> {
        let mut asm = String::new();
        for item in self.iter_ops() {
            if !asm.is_empty() {
                asm.push(' ');
            }
            match item? {
                ScriptOp::Code(opcode) => asm.push_str(&opcode_name(opcode)),
                ScriptOp::Push(opcode, payload) => {
                    write!(asm, "{} 0x{}", opcode_name(opcode), payload.to_hex())
                        .expect("in-memory writing can't fail");
                }
            }
        }
        Ok(asm)
    }

    /// Adds instructions to push some arbitrary data onto the stack, using
    /// the minimal push encoding.
    ///
    /// ## Panics
    ///
    /// The method panics if `data` length is greater or equal to
    /// 0x100000000.
    pub fn push_slice(&mut self, data: &[u8]) {
        match data.len() as u64 {
            n if n < OP_PUSHDATA1 as u64 => self.push(n as u8),
            n if n < 0x100 => {
                self.push(OP_PUSHDATA1);
                self.push(n as u8);
            }
            n if n < 0x10000 => {
                self.push(OP_PUSHDATA2);
                self.extend(&(n as u16).to_le_bytes());
            }
            n if n < 0x100000000 => {
                self.push(OP_PUSHDATA4);
                self.extend(&(n as u32).to_le_bytes());
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        self.extend(data);
    }

    #[inline]
    pub(crate) fn push(&mut self, data: u8) { self.0.push(data).expect("script exceeds 4GB") }

    #[inline]
    pub(crate) fn extend(&mut self, data: &[u8]) {
        self.0
            .extend(data.iter().copied())
            .expect("script exceeds 4GB")
    }

    /// Computes the sum of `len` and the length of an appropriate push
    /// opcode.
    pub fn len_for_slice(len: usize) -> usize {
        len + match len {
            0..=0x4b => 1,
            0x4c..=0xff => 2,
            0x100..=0xffff => 3,
            // we don't care about oversized, the other fn will panic anyway
            _ => 5,
        }
    }

    pub fn len_var_int(&self) -> VarInt { VarInt(self.len() as u64) }

    pub fn into_vec(self) -> Vec<u8> { self.0.into_inner() }

    pub(crate) fn as_var_int_array(&self) -> &VarIntArray<u8> { &self.0 }
}

#[cfg(feature = "serde")]
mod _serde {
    use amplify::hex::FromHex;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::*;

    impl Serialize for ScriptBytes {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_hex())
            } else {
                serializer.serialize_bytes(self.as_slice())
            }
        }
    }

    impl<'de> Deserialize<'de> for ScriptBytes {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
            if deserializer.is_human_readable() {
                String::deserialize(deserializer).and_then(|string| {
                    Self::from_hex(&string).map_err(|_| D::Error::custom("wrong hex data"))
                })
            } else {
                let bytes = Vec::<u8>::deserialize(deserializer)?;
                ScriptBytes::try_from(bytes)
                    .map_err(|_| D::Error::custom("invalid script length exceeding 4GB"))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn script(bytes: impl AsRef<[u8]>) -> ScriptBytes {
        ScriptBytes::from_unsafe(bytes.as_ref().to_vec())
    }

    fn spk(bytes: impl AsRef<[u8]>) -> ScriptPubkey {
        ScriptPubkey::from_unsafe(bytes.as_ref().to_vec())
    }

    const REF_A: [u8; 36] = [0xA1; 36];
    const REF_B: [u8; 36] = [0xB2; 36];

    fn with_ref(opcode: u8, payload: &[u8; 36], tail: &[u8]) -> Vec<u8> {
        let mut bytes = vec![opcode];
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(tail);
        bytes
    }

    #[test]
    fn empty_script() {
        let s = script([]);
        assert!(s.ops().unwrap().is_empty());
        let pk = spk([]);
        assert!(!pk.is_unspendable_legacy());
        assert!(!pk.is_unspendable_genesis());
        assert!(!pk.is_op_return());
    }

    #[test]
    fn unspendable_predicates() {
        assert!(spk([0x6a]).is_unspendable_legacy());
        assert!(!spk([0x6a]).is_unspendable_genesis());
        assert!(spk([0x00, 0x6a]).is_unspendable_legacy());
        assert!(spk([0x00, 0x6a]).is_unspendable_genesis());
        assert!(!spk([0x51]).is_unspendable_legacy());
    }

    #[test]
    fn walker_standard_pushes() {
        // OP_0, 2-byte push, OP_PUSHDATA1 with empty payload, OP_DUP
        let s = script([0x00, 0x02, 0xde, 0xad, 0x4c, 0x00, 0x76]);
        let ops = s.ops().unwrap();
        assert_eq!(ops, vec![
            ScriptOp::Push(0x00, &[]),
            ScriptOp::Push(0x02, &[0xde, 0xad]),
            ScriptOp::Push(OP_PUSHDATA1, &[]),
            ScriptOp::Code(OP_DUP),
        ]);
    }

    #[test]
    fn walker_reconstructs_source() {
        let mut bytes = vec![0x76, 0xa9, 0x14];
        bytes.extend_from_slice(&[7u8; 20]);
        bytes.extend_from_slice(&[0x88, 0xac, 0x4c, 0x02, 0xff, 0xfe, 0x4d, 0x01, 0x00, 0x55]);
        bytes.extend_from_slice(&with_ref(OP_PUSHINPUTREF, &REF_A, &[]));
        let s = script(&bytes);
        let mut rebuilt = Vec::new();
        for op in s.ops().unwrap() {
            op.serialize_into(&mut rebuilt);
        }
        assert_eq!(rebuilt, bytes);
    }

    #[test]
    fn walker_truncation() {
        // OP_PUSHDATA2 with a single length byte
        assert_eq!(script([0x4d, 0x01]).ops(), Err(ScriptError::Truncated));
        // push of 5 declared bytes with 2 present
        assert_eq!(script([0x05, 0x01, 0x02]).ops(), Err(ScriptError::Truncated));
        // reference opcode with a short payload
        assert_eq!(script([OP_PUSHINPUTREF, 0x00]).ops(), Err(ScriptError::Truncated));
        // PUSHDATA4 declaring a length past the buffer
        assert_eq!(
            script([0x4e, 0xff, 0xff, 0xff, 0xff, 0x00]).ops(),
            Err(ScriptError::Truncated)
        );
    }

    #[test]
    fn reference_opcodes_consume_payload() {
        let bytes = with_ref(OP_REQUIREINPUTREF, &REF_A, &[0xac]);
        let s = script(&bytes);
        let ops = s.ops().unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], ScriptOp::Push(OP_REQUIREINPUTREF, &REF_A));
        assert_eq!(ops[1], ScriptOp::Code(OP_CHECKSIG));
    }

    #[test]
    fn input_refs_collection() {
        let mut bytes = with_ref(OP_PUSHINPUTREF, &REF_A, &[]);
        bytes.extend_from_slice(&with_ref(OP_REQUIREINPUTREF, &[0xCC; 36], &[]));
        bytes.extend_from_slice(&with_ref(OP_PUSHINPUTREFSINGLETON, &REF_B, &[0xac]));
        let refs = script(&bytes).input_refs().unwrap();
        assert_eq!(refs.all, vec![InputRef::from(REF_A), InputRef::from(REF_B)]);
        assert_eq!(refs.normal, vec![InputRef::from(REF_A)]);
        assert_eq!(refs.singleton, vec![InputRef::from(REF_B)]);
    }

    #[test]
    fn input_refs_truncation() {
        let mut bytes = with_ref(OP_PUSHINPUTREF, &REF_A, &[]);
        bytes.extend_from_slice(&[OP_PUSHINPUTREFSINGLETON, 0x01, 0x02]);
        assert_eq!(script(&bytes).input_refs(), Err(ScriptError::Truncated));
    }

    #[test]
    fn input_ref_outpoint() {
        let mut payload = [0u8; 36];
        payload[..32].copy_from_slice(&[0x11; 32]);
        payload[32..].copy_from_slice(&5u32.to_le_bytes());
        let outpoint = InputRef::from(payload).outpoint();
        assert_eq!(outpoint.txid, Txid::from([0x11; 32]));
        assert_eq!(outpoint.vout.into_u32(), 5);
    }

    #[test]
    fn zero_refs_with_sig_check() {
        let bytes = with_ref(OP_PUSHINPUTREF, &REF_A, &[0xac]);
        let s = script(&bytes);
        let zeroed = s.zero_refs().unwrap();
        let mut expected = vec![OP_PUSHINPUTREF];
        expected.extend_from_slice(&[0u8; 36]);
        expected.push(0xac);
        assert_eq!(zeroed.as_ref(), expected.as_slice());
        assert!(matches!(zeroed, Cow::Owned(_)));
    }

    #[test]
    fn zero_refs_without_sig_check() {
        let bytes = with_ref(OP_PUSHINPUTREFSINGLETON, &REF_B, &[]);
        let s = script(&bytes);
        let unchanged = s.zero_refs().unwrap();
        assert_eq!(unchanged.as_ref(), bytes.as_slice());
        assert!(matches!(unchanged, Cow::Borrowed(_)));
    }

    #[test]
    fn zero_refs_keeps_other_bytes() {
        // a push whose payload contains the CHECKSIG byte must not trigger
        // zeroing on its own
        let mut bytes = vec![0x01, 0xac];
        bytes.extend_from_slice(&with_ref(OP_PUSHINPUTREF, &REF_A, &[]));
        let s = script(&bytes);
        assert_eq!(s.zero_refs().unwrap().as_ref(), bytes.as_slice());

        // with a real OP_CHECKSIGVERIFY everything except the payload stays
        bytes.push(OP_CHECKSIGVERIFY);
        let s = script(&bytes);
        let zeroed = s.zero_refs().unwrap();
        assert_eq!(&zeroed[..2], &bytes[..2]);
        assert_eq!(&zeroed[2..3], &[OP_PUSHINPUTREF]);
        assert_eq!(&zeroed[3..39], &[0u8; 36]);
        assert_eq!(&zeroed[39..], &bytes[39..]);
    }

    #[test]
    fn push_slice_boundaries() {
        let mut s = script([]);
        s.push_slice(&[0x42; 75]);
        assert_eq!(s[0], 75);
        assert_eq!(s.len(), 76);

        let mut s = script([]);
        s.push_slice(&[0x42; 76]);
        assert_eq!(&s[..2], &[OP_PUSHDATA1, 76]);
        assert_eq!(s.len(), 78);

        let mut s = script([]);
        s.push_slice(&[0x42; 256]);
        assert_eq!(&s[..3], &[OP_PUSHDATA2, 0x00, 0x01]);
        assert_eq!(s.len(), 259);

        let mut s = script([]);
        s.push_slice(&[0x42; 65536]);
        assert_eq!(&s[..5], &[OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(s.len(), 65541);
    }

    #[test]
    fn script_templates() {
        let p2pkh = ScriptPubkey::p2pkh([3u8; 20]);
        assert!(p2pkh.is_p2pkh());
        assert!(!p2pkh.is_p2sh());
        assert!(!p2pkh.is_p2pk());

        let p2sh = ScriptPubkey::p2sh([3u8; 20]);
        assert!(p2sh.is_p2sh());
        assert!(!p2sh.is_p2pkh());

        let mut p2pk = ScriptPubkey::new();
        p2pk.push_slice(&[2u8; 33]);
        p2pk.push_opcode(OpCode::CheckSig);
        assert!(p2pk.is_p2pk());
        assert!(!p2pk.is_p2pkh());

        // a bare opcode in a push slot must not match
        let almost = spk([0x76, 0xa9, 0x76, 0x88, 0xac]);
        assert!(!almost.is_p2pkh());
        // unparseable scripts match nothing
        let truncated = spk([0x76, 0xa9, 0x14]);
        assert!(!truncated.is_p2pkh());
    }

    #[test]
    fn state_separator_positions() {
        // <payload> OP_RETURN <20 state bytes> <LE u32 20>
        let mut bytes = vec![0x51, 0x6a];
        bytes.extend_from_slice(&[0xEE; 20]);
        bytes.extend_from_slice(&20u32.to_le_bytes());
        let pk = spk(&bytes);
        assert_eq!(pk.state_separator(), Some(bytes.len() - 24));

        // zero-length state right behind the OP_RETURN
        let mut bytes = vec![0x51, 0x6a];
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(spk(&bytes).state_separator(), Some(2));
    }

    #[test]
    fn state_separator_rejects() {
        // too short
        assert_eq!(spk([0x6a, 0, 0, 0, 0]).state_separator(), None);
        // state length exceeding the script
        let mut bytes = vec![0x51, 0x6a, 0xEE];
        bytes.extend_from_slice(&200u32.to_le_bytes());
        assert_eq!(spk(&bytes).state_separator(), None);
        // no OP_RETURN at the boundary
        let mut bytes = vec![0x51, 0x51];
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(spk(&bytes).state_separator(), None);
    }

    #[test]
    fn asm_rendering() {
        let mut bytes = vec![0x76, 0xa9, 0x02, 0xbe, 0xef, 0x88, 0xac];
        bytes.extend_from_slice(&[0xc0]);
        let s = script(&bytes);
        assert_eq!(
            s.to_asm().unwrap(),
            "OP_DUP OP_HASH160 OP_2 0xbeef OP_EQUALVERIFY OP_CHECKSIG OP_UNKNOWN:192"
        );
    }

    #[test]
    fn op_return_builder() {
        let pk = ScriptPubkey::op_return(&[1, 2, 3]);
        assert!(pk.is_op_return());
        assert!(pk.is_unspendable_legacy());
        assert_eq!(pk.as_slice(), &[0x6a, 0x03, 1, 2, 3]);
    }
}
