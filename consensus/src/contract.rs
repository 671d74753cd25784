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

use std::fmt::{self, Display, Formatter};

use amplify::num::u256;

use crate::{ByteStr, Outpoint, LIB_NAME_LAMBDA};

/// 64-bit tag classifying contract outputs on the wire.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default, From)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ContractType(u64);

impl ContractType {
    /// High bit of the tag. Plain value outputs start with a non-negative LE
    /// amount, so their leading 8 wire bytes never carry this bit.
    pub const FLAG: u64 = 0x8000_0000_0000_0000;
    /// Upper bound of the assigned tag space.
    pub const MAX_TYPE: u64 = Self::FLAG | 0xff;

    /// Fungible token.
    pub const FT: Self = ContractType(Self::FLAG | 0x01);
    /// Non-fungible token.
    pub const NFT: Self = ContractType(Self::FLAG | 0x02);
    /// Fungible token mint.
    pub const FT_MINT: Self = ContractType(Self::FLAG | 0x03);
    /// Non-fungible token mint.
    pub const NFT_MINT: Self = ContractType(Self::FLAG | 0x04);

    /// Tag-bit test selecting the contract wire format of an output.
    pub const fn is_contract_tag(tag: u64) -> bool {
        tag & Self::FLAG != 0 && tag <= Self::MAX_TYPE
    }

    #[inline]
    pub const fn from_consensus_u64(tag: u64) -> Self { ContractType(tag) }

    #[inline]
    pub const fn to_consensus_u64(&self) -> u64 { self.0 }

    /// Symbolic name of the contract type. In-range tags without an assigned
    /// meaning map to `"None"`.
    pub fn symbol(&self) -> &'static str {
        if self.0 > Self::MAX_TYPE {
            return "None";
        }
        match *self {
            Self::FT => "FT",
            Self::NFT => "NFT",
            Self::FT_MINT => "FT_MINT",
            Self::NFT_MINT => "NFT_MINT",
            _ => "None",
        }
    }
}

impl Display for ContractType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(self.symbol()) }
}

/// Contract region of a transaction output, preceding the plain value and
/// locking script on the wire.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
pub struct ContractOutput {
    pub ty: ContractType,
    /// Outpoint which minted the contract.
    pub outpoint: Outpoint,
    pub value: u256,
    pub max_supply: u256,
    pub metadata: ByteStr,
}

impl ContractOutput {
    pub fn new(ty: ContractType, outpoint: Outpoint) -> Self {
        ContractOutput {
            ty,
            outpoint,
            value: u256::ZERO,
            max_supply: u256::ZERO,
            metadata: ByteStr::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_detection() {
        assert!(ContractType::is_contract_tag(ContractType::FT.to_consensus_u64()));
        assert!(ContractType::is_contract_tag(ContractType::NFT_MINT.to_consensus_u64()));
        // the bare flag is in range, though unassigned
        assert!(ContractType::is_contract_tag(ContractType::FLAG));
        assert!(ContractType::is_contract_tag(ContractType::MAX_TYPE));
        // no flag bit: a plain (small, non-negative) value field
        assert!(!ContractType::is_contract_tag(0));
        assert!(!ContractType::is_contract_tag(1));
        assert!(!ContractType::is_contract_tag(50_000_000_000));
        // flag bit set but out of the assigned space
        assert!(!ContractType::is_contract_tag(ContractType::MAX_TYPE + 1));
        assert!(!ContractType::is_contract_tag(u64::MAX));
    }

    #[test]
    fn symbols() {
        assert_eq!(ContractType::FT.symbol(), "FT");
        assert_eq!(ContractType::NFT.symbol(), "NFT");
        assert_eq!(ContractType::FT_MINT.symbol(), "FT_MINT");
        assert_eq!(ContractType::NFT_MINT.symbol(), "NFT_MINT");
        assert_eq!(ContractType::from_consensus_u64(ContractType::FLAG | 0x77).symbol(), "None");
        assert_eq!(ContractType::from_consensus_u64(u64::MAX).symbol(), "None");
        assert_eq!(ContractType::NFT.to_string(), "NFT");
    }
}
