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

use amplify::{Bytes20, Wrapper};
use commit_verify::{DigestExt, Ripemd160, Sha256};

use crate::{RedeemScript, LIB_NAME_LAMBDA};

#[derive(Wrapper, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From)]
#[wrapper(Index, RangeOps, AsSlice, BorrowSlice, Hex, Display, FromStr)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PubkeyHash(
    #[from]
    #[from([u8; 20])]
    pub Bytes20,
);

impl From<PubkeyHash> for [u8; 20] {
    fn from(value: PubkeyHash) -> Self { value.0.into_inner() }
}

impl PubkeyHash {
    /// RIPEMD160 of the SHA256 of a serialized pubkey.
    pub fn with(pubkey: &[u8]) -> Self {
        let mut engine = Sha256::default();
        engine.input_raw(pubkey);
        let mut engine2 = Ripemd160::default();
        engine2.input_raw(&engine.finish());
        Self(engine2.finish().into())
    }
}

#[derive(Wrapper, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From)]
#[wrapper(Index, RangeOps, AsSlice, BorrowSlice, Hex, Display, FromStr)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ScriptHash(
    #[from]
    #[from([u8; 20])]
    pub Bytes20,
);

impl From<ScriptHash> for [u8; 20] {
    fn from(value: ScriptHash) -> Self { value.0.into_inner() }
}

impl From<&RedeemScript> for ScriptHash {
    fn from(redeem_script: &RedeemScript) -> Self {
        let mut engine = Sha256::default();
        engine.input_raw(redeem_script.as_slice());
        let mut engine2 = Ripemd160::default();
        engine2.input_raw(&engine.finish());
        Self(engine2.finish().into())
    }
}

#[cfg(test)]
mod test {
    use amplify::ByteArray;

    use super::*;
    use crate::ScriptPubkey;

    #[test]
    fn p2pkh_of_pubkey() {
        let hash = PubkeyHash::with(&[2u8; 33]);
        let spk = ScriptPubkey::p2pkh(hash);
        assert!(spk.is_p2pkh());
        assert_eq!(&spk.as_slice()[3..23], &hash.to_byte_array());
    }

    #[test]
    fn p2sh_of_redeem_script() {
        let mut redeem = RedeemScript::new();
        redeem.push_opcode(crate::OpCode::Return);
        let hash = ScriptHash::from(&redeem);
        let spk = ScriptPubkey::p2sh(hash);
        assert!(spk.is_p2sh());
        assert_eq!(&spk.as_slice()[2..22], &hash.to_byte_array());
    }
}
