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

//! Byte values of the script opcodes, including the Lambda extension range.
//!
//! Bytes `0x01..=0x4b` are implicit pushes of that many bytes and carry no
//! individual names; [`opcode_name`] renders them as `OP_<n>`.

use std::borrow::Cow;

/// Push an empty array onto the stack.
pub const OP_0: u8 = 0x00;
/// Read the next byte as N; push the next N bytes as an array onto the stack.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Read the next 2 bytes as N; push the next N bytes as an array onto the
/// stack.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Read the next 4 bytes as N; push the next N bytes as an array onto the
/// stack.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the array `0x81` onto the stack.
pub const OP_1NEGATE: u8 = 0x4f;
/// Synonym for OP_RETURN.
pub const OP_RESERVED: u8 = 0x50;
/// Push the array `0x01` onto the stack.
pub const OP_1: u8 = 0x51;
/// Push the array `0x02` onto the stack.
pub const OP_2: u8 = 0x52;
/// Push the array `0x03` onto the stack.
pub const OP_3: u8 = 0x53;
/// Push the array `0x04` onto the stack.
pub const OP_4: u8 = 0x54;
/// Push the array `0x05` onto the stack.
pub const OP_5: u8 = 0x55;
/// Push the array `0x06` onto the stack.
pub const OP_6: u8 = 0x56;
/// Push the array `0x07` onto the stack.
pub const OP_7: u8 = 0x57;
/// Push the array `0x08` onto the stack.
pub const OP_8: u8 = 0x58;
/// Push the array `0x09` onto the stack.
pub const OP_9: u8 = 0x59;
/// Push the array `0x0a` onto the stack.
pub const OP_10: u8 = 0x5a;
/// Push the array `0x0b` onto the stack.
pub const OP_11: u8 = 0x5b;
/// Push the array `0x0c` onto the stack.
pub const OP_12: u8 = 0x5c;
/// Push the array `0x0d` onto the stack.
pub const OP_13: u8 = 0x5d;
/// Push the array `0x0e` onto the stack.
pub const OP_14: u8 = 0x5e;
/// Push the array `0x0f` onto the stack.
pub const OP_15: u8 = 0x5f;
/// Push the array `0x10` onto the stack.
pub const OP_16: u8 = 0x60;
/// Does nothing.
pub const OP_NOP: u8 = 0x61;
/// Synonym for OP_RETURN.
pub const OP_VER: u8 = 0x62;
/// Pop and execute the next statements if a nonzero element was popped.
pub const OP_IF: u8 = 0x63;
/// Pop and execute the next statements if a zero element was popped.
pub const OP_NOTIF: u8 = 0x64;
/// Fail the script unconditionally, does not even need to be executed.
pub const OP_VERIF: u8 = 0x65;
/// Fail the script unconditionally, does not even need to be executed.
pub const OP_VERNOTIF: u8 = 0x66;
/// Execute statements if those after the previous OP_IF were not.
pub const OP_ELSE: u8 = 0x67;
/// Close an OP_IF/OP_NOTIF block.
pub const OP_ENDIF: u8 = 0x68;
/// If the top value is zero or the stack is empty, fail; otherwise pop the
/// stack.
pub const OP_VERIFY: u8 = 0x69;
/// Fail the script immediately.
pub const OP_RETURN: u8 = 0x6a;
/// Pop one element from the main stack onto the alt stack.
pub const OP_TOALTSTACK: u8 = 0x6b;
/// Pop one element from the alt stack onto the main stack.
pub const OP_FROMALTSTACK: u8 = 0x6c;
/// Drops the top two stack items.
pub const OP_2DROP: u8 = 0x6d;
/// Duplicates the top two stack items.
pub const OP_2DUP: u8 = 0x6e;
/// Duplicates the top three stack items.
pub const OP_3DUP: u8 = 0x6f;
/// Copies the two stack items two spaces back to the front.
pub const OP_2OVER: u8 = 0x70;
/// Moves the two stack items four spaces back to the front.
pub const OP_2ROT: u8 = 0x71;
/// Swaps the top two pairs.
pub const OP_2SWAP: u8 = 0x72;
/// Duplicate the top stack element unless it is zero.
pub const OP_IFDUP: u8 = 0x73;
/// Push the current number of stack items onto the stack.
pub const OP_DEPTH: u8 = 0x74;
/// Drops the top stack item.
pub const OP_DROP: u8 = 0x75;
/// Duplicates the top stack item.
pub const OP_DUP: u8 = 0x76;
/// Drops the second-to-top stack item.
pub const OP_NIP: u8 = 0x77;
/// Copies the second-to-top stack item to the top.
pub const OP_OVER: u8 = 0x78;
/// Pop the top stack element as N; copy the Nth stack element to the top.
pub const OP_PICK: u8 = 0x79;
/// Pop the top stack element as N; move the Nth stack element to the top.
pub const OP_ROLL: u8 = 0x7a;
/// Rotate the top three stack items.
pub const OP_ROT: u8 = 0x7b;
/// Swap the top two stack items.
pub const OP_SWAP: u8 = 0x7c;
/// Copy the top stack item to before the second item.
pub const OP_TUCK: u8 = 0x7d;
/// Concatenate the top two stack items.
pub const OP_CAT: u8 = 0x7e;
/// Split the second-to-top item at the position given by the top item.
pub const OP_SUBSTR: u8 = 0x7f;
/// Keep only characters left of the specified point in a string.
pub const OP_LEFT: u8 = 0x80;
/// Keep only characters right of the specified point in a string.
pub const OP_RIGHT: u8 = 0x81;
/// Pushes the length of the top stack item onto the stack.
pub const OP_SIZE: u8 = 0x82;
/// Flip all bits in the top stack item.
pub const OP_INVERT: u8 = 0x83;
/// Bitwise AND of the top two stack items.
pub const OP_AND: u8 = 0x84;
/// Bitwise OR of the top two stack items.
pub const OP_OR: u8 = 0x85;
/// Bitwise XOR of the top two stack items.
pub const OP_XOR: u8 = 0x86;
/// Pushes 1 if the inputs are exactly equal, 0 otherwise.
pub const OP_EQUAL: u8 = 0x87;
/// Returns success if the inputs are exactly equal, failure otherwise.
pub const OP_EQUALVERIFY: u8 = 0x88;
/// Synonym for OP_RETURN.
pub const OP_RESERVED1: u8 = 0x89;
/// Synonym for OP_RETURN.
pub const OP_RESERVED2: u8 = 0x8a;
/// Increment the top stack element in place.
pub const OP_1ADD: u8 = 0x8b;
/// Decrement the top stack element in place.
pub const OP_1SUB: u8 = 0x8c;
/// Multiply the top stack element by 2 in place.
pub const OP_2MUL: u8 = 0x8d;
/// Divide the top stack element by 2 in place.
pub const OP_2DIV: u8 = 0x8e;
/// Multiply the top stack item by -1 in place.
pub const OP_NEGATE: u8 = 0x8f;
/// Absolute value of the top stack item in place.
pub const OP_ABS: u8 = 0x90;
/// Map 0 to 1 and everything else to 0, in place.
pub const OP_NOT: u8 = 0x91;
/// Map 0 to 0 and everything else to 1, in place.
pub const OP_0NOTEQUAL: u8 = 0x92;
/// Pop two stack items and push their sum.
pub const OP_ADD: u8 = 0x93;
/// Pop two stack items and push the second minus the top.
pub const OP_SUB: u8 = 0x94;
/// Pop two stack items and push their product.
pub const OP_MUL: u8 = 0x95;
/// Pop two stack items and push the second divided by the top.
pub const OP_DIV: u8 = 0x96;
/// Pop two stack items and push the remainder of their division.
pub const OP_MOD: u8 = 0x97;
/// Shift the second item left by the number of bits given by the top item.
pub const OP_LSHIFT: u8 = 0x98;
/// Shift the second item right by the number of bits given by the top item.
pub const OP_RSHIFT: u8 = 0x99;
/// Pop the top two stack items and push 1 if both are nonzero, else push 0.
pub const OP_BOOLAND: u8 = 0x9a;
/// Pop the top two stack items and push 1 if either is nonzero, else push 0.
pub const OP_BOOLOR: u8 = 0x9b;
/// Pop the top two stack items and push 1 if both are numerically equal.
pub const OP_NUMEQUAL: u8 = 0x9c;
/// Like OP_NUMEQUAL, but returning success/failure.
pub const OP_NUMEQUALVERIFY: u8 = 0x9d;
/// Pop the top two stack items and push 1 if they are not numerically equal.
pub const OP_NUMNOTEQUAL: u8 = 0x9e;
/// Pop the top two items; push 1 if the second is less than the top.
pub const OP_LESSTHAN: u8 = 0x9f;
/// Pop the top two items; push 1 if the second is greater than the top.
pub const OP_GREATERTHAN: u8 = 0xa0;
/// Pop the top two items; push 1 if the second is <= the top.
pub const OP_LESSTHANOREQUAL: u8 = 0xa1;
/// Pop the top two items; push 1 if the second is >= the top.
pub const OP_GREATERTHANOREQUAL: u8 = 0xa2;
/// Pop the top two items; push the smaller.
pub const OP_MIN: u8 = 0xa3;
/// Pop the top two items; push the larger.
pub const OP_MAX: u8 = 0xa4;
/// Pop the top three items; push 1 if the top is within the given range.
pub const OP_WITHIN: u8 = 0xa5;
/// Pop the top stack item and push its RIPEMD160 hash.
pub const OP_RIPEMD160: u8 = 0xa6;
/// Pop the top stack item and push its SHA1 hash.
pub const OP_SHA1: u8 = 0xa7;
/// Pop the top stack item and push its SHA256 hash.
pub const OP_SHA256: u8 = 0xa8;
/// Pop the top stack item and push its RIPEMD(SHA256) hash.
pub const OP_HASH160: u8 = 0xa9;
/// Pop the top stack item and push its SHA256(SHA256) hash.
pub const OP_HASH256: u8 = 0xaa;
/// Ignore this and everything preceding when deciding what to sign when
/// signature-checking.
pub const OP_CODESEPARATOR: u8 = 0xab;
/// Pop a signature and a pubkey and verify the signature over the
/// transaction, pushing 1/0 for success/failure.
pub const OP_CHECKSIG: u8 = 0xac;
/// Like OP_CHECKSIG, but returning success/failure.
pub const OP_CHECKSIGVERIFY: u8 = 0xad;
/// Pop M signatures and N pubkeys and verify that all M signatures are valid.
/// Push 1 for 'all valid', 0 otherwise.
pub const OP_CHECKMULTISIG: u8 = 0xae;
/// Like OP_CHECKMULTISIG, but returning success/failure.
pub const OP_CHECKMULTISIGVERIFY: u8 = 0xaf;
/// Does nothing.
pub const OP_NOP1: u8 = 0xb0;
/// <https://github.com/bitcoin/bips/blob/master/bip-0065.mediawiki>
pub const OP_CHECKLOCKTIMEVERIFY: u8 = 0xb1;
/// <https://github.com/bitcoin/bips/blob/master/bip-0112.mediawiki>
pub const OP_CHECKSEQUENCEVERIFY: u8 = 0xb2;

/// Pop a signature, a message and a pubkey and verify the signature over the
/// message, pushing 1/0 for success/failure.
pub const OP_CHECKDATASIG: u8 = 0xba;
/// Like OP_CHECKDATASIG, but returning success/failure.
pub const OP_CHECKDATASIGVERIFY: u8 = 0xbb;
/// Reverse the bytes of the top stack item.
pub const OP_REVERSEBYTES: u8 = 0xbc;

/// Mark the boundary between the code and the state region of a script.
pub const OP_STATESEPERATOR: u8 = 0xbd;
/// Push the state separator index of an input's coin.
pub const OP_STATESEPERATORINDEX_UTXO: u8 = 0xbe;
/// Push the state separator index of an output.
pub const OP_STATESEPERATORINDEX_OUTPUT: u8 = 0xbf;

/// Push an induction-proven input reference; followed by an implicit 36-byte
/// payload naming the referenced outpoint.
pub const OP_PUSHINPUTREF: u8 = 0xd0;
/// Require an input reference to be present in an input; implicit 36-byte
/// payload.
pub const OP_REQUIREINPUTREF: u8 = 0xd1;
/// Disallow a reference from being pushed in outputs; implicit 36-byte
/// payload.
pub const OP_DISALLOWPUSHINPUTREF: u8 = 0xd2;
/// Disallow a reference from being pushed in sibling outputs; implicit
/// 36-byte payload.
pub const OP_DISALLOWPUSHINPUTREFSIBLING: u8 = 0xd3;

/// Push the hash of the data summary of an input's coin.
pub const OP_REFHASHDATASUMMARY_UTXO: u8 = 0xd4;
/// Push the total value of inputs carrying the given reference hash.
pub const OP_REFHASHVALUESUM_UTXOS: u8 = 0xd5;
/// Push the hash of the data summary of an output.
pub const OP_REFHASHDATASUMMARY_OUTPUT: u8 = 0xd6;
/// Push the total value of outputs carrying the given reference hash.
pub const OP_REFHASHVALUESUM_OUTPUTS: u8 = 0xd7;

/// Push a singleton input reference; followed by an implicit 36-byte payload
/// naming the referenced outpoint.
pub const OP_PUSHINPUTREFSINGLETON: u8 = 0xd8;
/// Push the reference type of an input's coin.
pub const OP_REFTYPE_UTXO: u8 = 0xd9;
/// Push the reference type of an output.
pub const OP_REFTYPE_OUTPUT: u8 = 0xda;

/// Push the total value of inputs carrying the given reference.
pub const OP_REFVALUESUM_UTXOS: u8 = 0xdb;
/// Push the total value of outputs carrying the given reference.
pub const OP_REFVALUESUM_OUTPUTS: u8 = 0xdc;
/// Push the number of inputs carrying the given reference.
pub const OP_REFOUTPUTCOUNT_UTXOS: u8 = 0xdd;
/// Push the number of outputs carrying the given reference.
pub const OP_REFOUTPUTCOUNT_OUTPUTS: u8 = 0xde;
/// Push the number of zero-valued inputs carrying the given reference.
pub const OP_REFOUTPUTCOUNTZEROVALUED_UTXOS: u8 = 0xdf;
/// Push the number of zero-valued outputs carrying the given reference.
pub const OP_REFOUTPUTCOUNTZEROVALUED_OUTPUTS: u8 = 0xe0;
/// Push the data summary of an input's coin.
pub const OP_REFDATASUMMARY_UTXO: u8 = 0xe1;
/// Push the data summary of an output.
pub const OP_REFDATASUMMARY_OUTPUT: u8 = 0xe2;

/// Push the total value of inputs locked by the given code script hash.
pub const OP_CODESCRIPTHASHVALUESUM_UTXOS: u8 = 0xe3;
/// Push the total value of outputs locked by the given code script hash.
pub const OP_CODESCRIPTHASHVALUESUM_OUTPUTS: u8 = 0xe4;
/// Push the number of inputs locked by the given code script hash.
pub const OP_CODESCRIPTHASHOUTPUTCOUNT_UTXOS: u8 = 0xe5;
/// Push the number of outputs locked by the given code script hash.
pub const OP_CODESCRIPTHASHOUTPUTCOUNT_OUTPUTS: u8 = 0xe6;
/// Push the number of zero-valued inputs locked by the given code script
/// hash.
pub const OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_UTXOS: u8 = 0xe7;
/// Push the number of zero-valued outputs locked by the given code script
/// hash.
pub const OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_OUTPUTS: u8 = 0xe8;
/// Push the code script of an input's coin.
pub const OP_CODESCRIPTBYTECODE_UTXO: u8 = 0xe9;
/// Push the code script of an output.
pub const OP_CODESCRIPTBYTECODE_OUTPUT: u8 = 0xea;
/// Push the state script of an input's coin.
pub const OP_STATESCRIPTBYTECODE_UTXO: u8 = 0xeb;
/// Push the state script of an output.
pub const OP_STATESCRIPTBYTECODE_OUTPUT: u8 = 0xec;
/// Push the summary of the current transaction state.
pub const OP_PUSH_TX_STATE: u8 = 0xed;

// Paranoia to make it hard to create bad scripts.
const _: () = {
    assert!(OP_0 == 0x00);
    assert!(OP_PUSHDATA1 == 0x4c);
    assert!(OP_PUSHDATA2 == 0x4d);
    assert!(OP_PUSHDATA4 == 0x4e);
    assert!(OP_RETURN == 0x6a);
    assert!(OP_DUP == 0x76);
    assert!(OP_EQUAL == 0x87);
    assert!(OP_EQUALVERIFY == 0x88);
    assert!(OP_HASH160 == 0xa9);
    assert!(OP_CHECKSIG == 0xac);
    assert!(OP_CHECKMULTISIG == 0xae);

    assert!(OP_CHECKDATASIG == 0xba);
    assert!(OP_CHECKDATASIGVERIFY == 0xbb);
    assert!(OP_REVERSEBYTES == 0xbc);
    assert!(OP_STATESEPERATOR == 0xbd);
    assert!(OP_STATESEPERATORINDEX_UTXO == 0xbe);
    assert!(OP_STATESEPERATORINDEX_OUTPUT == 0xbf);

    assert!(OP_PUSHINPUTREF == 0xd0);
    assert!(OP_REQUIREINPUTREF == 0xd1);
    assert!(OP_DISALLOWPUSHINPUTREF == 0xd2);
    assert!(OP_DISALLOWPUSHINPUTREFSIBLING == 0xd3);
    assert!(OP_REFHASHDATASUMMARY_UTXO == 0xd4);
    assert!(OP_REFHASHVALUESUM_UTXOS == 0xd5);
    assert!(OP_REFHASHDATASUMMARY_OUTPUT == 0xd6);
    assert!(OP_REFHASHVALUESUM_OUTPUTS == 0xd7);
    assert!(OP_PUSHINPUTREFSINGLETON == 0xd8);
    assert!(OP_REFTYPE_UTXO == 0xd9);
    assert!(OP_REFTYPE_OUTPUT == 0xda);
    assert!(OP_REFVALUESUM_UTXOS == 0xdb);
    assert!(OP_REFVALUESUM_OUTPUTS == 0xdc);
    assert!(OP_REFOUTPUTCOUNT_UTXOS == 0xdd);
    assert!(OP_REFOUTPUTCOUNT_OUTPUTS == 0xde);
    assert!(OP_REFOUTPUTCOUNTZEROVALUED_UTXOS == 0xdf);
    assert!(OP_REFOUTPUTCOUNTZEROVALUED_OUTPUTS == 0xe0);
    assert!(OP_REFDATASUMMARY_UTXO == 0xe1);
    assert!(OP_REFDATASUMMARY_OUTPUT == 0xe2);
    assert!(OP_CODESCRIPTHASHVALUESUM_UTXOS == 0xe3);
    assert!(OP_CODESCRIPTHASHVALUESUM_OUTPUTS == 0xe4);
    assert!(OP_CODESCRIPTHASHOUTPUTCOUNT_UTXOS == 0xe5);
    assert!(OP_CODESCRIPTHASHOUTPUTCOUNT_OUTPUTS == 0xe6);
    assert!(OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_UTXOS == 0xe7);
    assert!(OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_OUTPUTS == 0xe8);
    assert!(OP_CODESCRIPTBYTECODE_UTXO == 0xe9);
    assert!(OP_CODESCRIPTBYTECODE_OUTPUT == 0xea);
    assert!(OP_STATESCRIPTBYTECODE_UTXO == 0xeb);
    assert!(OP_STATESCRIPTBYTECODE_OUTPUT == 0xec);
    assert!(OP_PUSH_TX_STATE == 0xed);
};

/// Detects the five opcodes which carry an implicit 36-byte input-reference
/// payload without a length prefix.
pub const fn is_input_ref(opcode: u8) -> bool {
    matches!(
        opcode,
        OP_PUSHINPUTREF
            | OP_REQUIREINPUTREF
            | OP_DISALLOWPUSHINPUTREF
            | OP_DISALLOWPUSHINPUTREFSIBLING
            | OP_PUSHINPUTREFSINGLETON
    )
}

/// Human-readable name of an opcode byte.
///
/// Implicit pushes `0x01..=0x4b` render as `OP_<n>`; bytes with no assigned
/// meaning render as `OP_UNKNOWN:<n>`.
pub fn opcode_name(opcode: u8) -> Cow<'static, str> {
    if opcode > OP_0 && opcode < OP_PUSHDATA1 {
        return Cow::Owned(format!("OP_{opcode}"));
    }
    match canonical_name(opcode) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("OP_UNKNOWN:{opcode}")),
    }
}

fn canonical_name(opcode: u8) -> Option<&'static str> {
    Some(match opcode {
        OP_0 => "OP_0",
        OP_PUSHDATA1 => "OP_PUSHDATA1",
        OP_PUSHDATA2 => "OP_PUSHDATA2",
        OP_PUSHDATA4 => "OP_PUSHDATA4",
        OP_1NEGATE => "OP_1NEGATE",
        OP_RESERVED => "OP_RESERVED",
        OP_1 => "OP_1",
        OP_2 => "OP_2",
        OP_3 => "OP_3",
        OP_4 => "OP_4",
        OP_5 => "OP_5",
        OP_6 => "OP_6",
        OP_7 => "OP_7",
        OP_8 => "OP_8",
        OP_9 => "OP_9",
        OP_10 => "OP_10",
        OP_11 => "OP_11",
        OP_12 => "OP_12",
        OP_13 => "OP_13",
        OP_14 => "OP_14",
        OP_15 => "OP_15",
        OP_16 => "OP_16",
        OP_NOP => "OP_NOP",
        OP_VER => "OP_VER",
        OP_IF => "OP_IF",
        OP_NOTIF => "OP_NOTIF",
        OP_VERIF => "OP_VERIF",
        OP_VERNOTIF => "OP_VERNOTIF",
        OP_ELSE => "OP_ELSE",
        OP_ENDIF => "OP_ENDIF",
        OP_VERIFY => "OP_VERIFY",
        OP_RETURN => "OP_RETURN",
        OP_TOALTSTACK => "OP_TOALTSTACK",
        OP_FROMALTSTACK => "OP_FROMALTSTACK",
        OP_2DROP => "OP_2DROP",
        OP_2DUP => "OP_2DUP",
        OP_3DUP => "OP_3DUP",
        OP_2OVER => "OP_2OVER",
        OP_2ROT => "OP_2ROT",
        OP_2SWAP => "OP_2SWAP",
        OP_IFDUP => "OP_IFDUP",
        OP_DEPTH => "OP_DEPTH",
        OP_DROP => "OP_DROP",
        OP_DUP => "OP_DUP",
        OP_NIP => "OP_NIP",
        OP_OVER => "OP_OVER",
        OP_PICK => "OP_PICK",
        OP_ROLL => "OP_ROLL",
        OP_ROT => "OP_ROT",
        OP_SWAP => "OP_SWAP",
        OP_TUCK => "OP_TUCK",
        OP_CAT => "OP_CAT",
        OP_SUBSTR => "OP_SUBSTR",
        OP_LEFT => "OP_LEFT",
        OP_RIGHT => "OP_RIGHT",
        OP_SIZE => "OP_SIZE",
        OP_INVERT => "OP_INVERT",
        OP_AND => "OP_AND",
        OP_OR => "OP_OR",
        OP_XOR => "OP_XOR",
        OP_EQUAL => "OP_EQUAL",
        OP_EQUALVERIFY => "OP_EQUALVERIFY",
        OP_RESERVED1 => "OP_RESERVED1",
        OP_RESERVED2 => "OP_RESERVED2",
        OP_1ADD => "OP_1ADD",
        OP_1SUB => "OP_1SUB",
        OP_2MUL => "OP_2MUL",
        OP_2DIV => "OP_2DIV",
        OP_NEGATE => "OP_NEGATE",
        OP_ABS => "OP_ABS",
        OP_NOT => "OP_NOT",
        OP_0NOTEQUAL => "OP_0NOTEQUAL",
        OP_ADD => "OP_ADD",
        OP_SUB => "OP_SUB",
        OP_MUL => "OP_MUL",
        OP_DIV => "OP_DIV",
        OP_MOD => "OP_MOD",
        OP_LSHIFT => "OP_LSHIFT",
        OP_RSHIFT => "OP_RSHIFT",
        OP_BOOLAND => "OP_BOOLAND",
        OP_BOOLOR => "OP_BOOLOR",
        OP_NUMEQUAL => "OP_NUMEQUAL",
        OP_NUMEQUALVERIFY => "OP_NUMEQUALVERIFY",
        OP_NUMNOTEQUAL => "OP_NUMNOTEQUAL",
        OP_LESSTHAN => "OP_LESSTHAN",
        OP_GREATERTHAN => "OP_GREATERTHAN",
        OP_LESSTHANOREQUAL => "OP_LESSTHANOREQUAL",
        OP_GREATERTHANOREQUAL => "OP_GREATERTHANOREQUAL",
        OP_MIN => "OP_MIN",
        OP_MAX => "OP_MAX",
        OP_WITHIN => "OP_WITHIN",
        OP_RIPEMD160 => "OP_RIPEMD160",
        OP_SHA1 => "OP_SHA1",
        OP_SHA256 => "OP_SHA256",
        OP_HASH160 => "OP_HASH160",
        OP_HASH256 => "OP_HASH256",
        OP_CODESEPARATOR => "OP_CODESEPARATOR",
        OP_CHECKSIG => "OP_CHECKSIG",
        OP_CHECKSIGVERIFY => "OP_CHECKSIGVERIFY",
        OP_CHECKMULTISIG => "OP_CHECKMULTISIG",
        OP_CHECKMULTISIGVERIFY => "OP_CHECKMULTISIGVERIFY",
        OP_NOP1 => "OP_NOP1",
        OP_CHECKLOCKTIMEVERIFY => "OP_CHECKLOCKTIMEVERIFY",
        OP_CHECKSEQUENCEVERIFY => "OP_CHECKSEQUENCEVERIFY",
        OP_CHECKDATASIG => "OP_CHECKDATASIG",
        OP_CHECKDATASIGVERIFY => "OP_CHECKDATASIGVERIFY",
        OP_REVERSEBYTES => "OP_REVERSEBYTES",
        OP_STATESEPERATOR => "OP_STATESEPERATOR",
        OP_STATESEPERATORINDEX_UTXO => "OP_STATESEPERATORINDEX_UTXO",
        OP_STATESEPERATORINDEX_OUTPUT => "OP_STATESEPERATORINDEX_OUTPUT",
        OP_PUSHINPUTREF => "OP_PUSHINPUTREF",
        OP_REQUIREINPUTREF => "OP_REQUIREINPUTREF",
        OP_DISALLOWPUSHINPUTREF => "OP_DISALLOWPUSHINPUTREF",
        OP_DISALLOWPUSHINPUTREFSIBLING => "OP_DISALLOWPUSHINPUTREFSIBLING",
        OP_REFHASHDATASUMMARY_UTXO => "OP_REFHASHDATASUMMARY_UTXO",
        OP_REFHASHVALUESUM_UTXOS => "OP_REFHASHVALUESUM_UTXOS",
        OP_REFHASHDATASUMMARY_OUTPUT => "OP_REFHASHDATASUMMARY_OUTPUT",
        OP_REFHASHVALUESUM_OUTPUTS => "OP_REFHASHVALUESUM_OUTPUTS",
        OP_PUSHINPUTREFSINGLETON => "OP_PUSHINPUTREFSINGLETON",
        OP_REFTYPE_UTXO => "OP_REFTYPE_UTXO",
        OP_REFTYPE_OUTPUT => "OP_REFTYPE_OUTPUT",
        OP_REFVALUESUM_UTXOS => "OP_REFVALUESUM_UTXOS",
        OP_REFVALUESUM_OUTPUTS => "OP_REFVALUESUM_OUTPUTS",
        OP_REFOUTPUTCOUNT_UTXOS => "OP_REFOUTPUTCOUNT_UTXOS",
        OP_REFOUTPUTCOUNT_OUTPUTS => "OP_REFOUTPUTCOUNT_OUTPUTS",
        OP_REFOUTPUTCOUNTZEROVALUED_UTXOS => "OP_REFOUTPUTCOUNTZEROVALUED_UTXOS",
        OP_REFOUTPUTCOUNTZEROVALUED_OUTPUTS => "OP_REFOUTPUTCOUNTZEROVALUED_OUTPUTS",
        OP_REFDATASUMMARY_UTXO => "OP_REFDATASUMMARY_UTXO",
        OP_REFDATASUMMARY_OUTPUT => "OP_REFDATASUMMARY_OUTPUT",
        OP_CODESCRIPTHASHVALUESUM_UTXOS => "OP_CODESCRIPTHASHVALUESUM_UTXOS",
        OP_CODESCRIPTHASHVALUESUM_OUTPUTS => "OP_CODESCRIPTHASHVALUESUM_OUTPUTS",
        OP_CODESCRIPTHASHOUTPUTCOUNT_UTXOS => "OP_CODESCRIPTHASHOUTPUTCOUNT_UTXOS",
        OP_CODESCRIPTHASHOUTPUTCOUNT_OUTPUTS => "OP_CODESCRIPTHASHOUTPUTCOUNT_OUTPUTS",
        OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_UTXOS => {
            "OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_UTXOS"
        }
        OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_OUTPUTS => {
            "OP_CODESCRIPTHASHZEROVALUEDOUTPUTCOUNT_OUTPUTS"
        }
        OP_CODESCRIPTBYTECODE_UTXO => "OP_CODESCRIPTBYTECODE_UTXO",
        OP_CODESCRIPTBYTECODE_OUTPUT => "OP_CODESCRIPTBYTECODE_OUTPUT",
        OP_STATESCRIPTBYTECODE_UTXO => "OP_STATESCRIPTBYTECODE_UTXO",
        OP_STATESCRIPTBYTECODE_OUTPUT => "OP_STATESCRIPTBYTECODE_OUTPUT",
        OP_PUSH_TX_STATE => "OP_PUSH_TX_STATE",
        _ => return None,
    })
}
