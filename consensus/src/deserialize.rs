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

use std::io::{self, Cursor};

use crate::tx::double_sha256;
use crate::{ByteStr, ConsensusDecode, ConsensusDecodeError, Tx, TxVer, Txid, VarInt};

/// Streaming deserializer over the raw transaction region of a block.
///
/// Owns a read cursor over an externally-owned byte buffer; one instance
/// parses one buffer and is then discarded. The identifier of every non-v2
/// transaction is the double-SHA256 of exactly the bytes consumed for it,
/// which is why parsing and hashing are driven together here.
///
/// This code is performance sensitive as it is executed hundreds of millions
/// of times during sync.
pub struct Deserializer<'data> {
    cursor: Cursor<&'data [u8]>,
}

impl<'data> Deserializer<'data> {
    pub fn new(data: &'data [u8]) -> Self {
        Deserializer {
            cursor: Cursor::new(data),
        }
    }

    /// Starts parsing at `offset` instead of the buffer start.
    pub fn with_offset(data: &'data [u8], offset: usize) -> Self {
        let mut cursor = Cursor::new(data);
        cursor.set_position(offset as u64);
        Deserializer { cursor }
    }

    /// Current read position within the buffer.
    #[inline]
    pub fn position(&self) -> usize { self.cursor.position() as usize }

    /// Restores a position previously obtained from [`Self::position`].
    #[inline]
    pub fn set_position(&mut self, position: usize) { self.cursor.set_position(position as u64) }

    #[inline]
    pub fn is_done(&self) -> bool { self.position() >= self.cursor.get_ref().len() }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    pub fn read_tx(&mut self) -> Result<Tx, ConsensusDecodeError> {
        Tx::consensus_decode(&mut self.cursor)
    }

    /// Reads a transaction together with its identifier.
    ///
    /// Version-2 transactions are identified by the layered digest; all
    /// others by the double-SHA256 of their serialization.
    pub fn read_tx_and_hash(&mut self) -> Result<(Tx, Txid), ConsensusDecodeError> {
        let start = self.position();
        let tx = self.read_tx()?;
        let txid = if tx.version == TxVer::V2 {
            tx.txid()
        } else {
            Txid::from(double_sha256(&self.cursor.get_ref()[start..self.position()]))
        };
        Ok((tx, txid))
    }

    /// Reads a block body: a VarInt transaction count followed by that many
    /// transactions.
    ///
    /// Bytes beyond the final transaction are left unread, as some chains
    /// append excess data past the transaction list.
    pub fn read_block(&mut self) -> Result<Vec<(Tx, Txid)>, ConsensusDecodeError> {
        let count = VarInt::consensus_decode(&mut self.cursor)?.to_usize();
        let mut txs = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            txs.push(self.read_tx_and_hash()?);
        }
        Ok(txs)
    }

    /// Reads a single byte.
    pub fn read_byte(&mut self) -> Result<u8, ConsensusDecodeError> {
        u8::consensus_decode(&mut self.cursor)
    }

    /// Reads exactly `count` bytes as a borrowed view of the buffer.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'data [u8], ConsensusDecodeError> {
        let start = self.position();
        let end = start
            .checked_add(count)
            .filter(|&end| end <= self.cursor.get_ref().len())
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
        self.cursor.set_position(end as u64);
        Ok(&self.cursor.get_ref()[start..end])
    }

    /// Reads a bare VarInt at the current position.
    pub fn read_varint(&mut self) -> Result<u64, ConsensusDecodeError> {
        VarInt::consensus_decode(&mut self.cursor).map(VarInt::into_u64)
    }

    /// Reads a VarInt-prefixed byte string at the current position.
    pub fn read_varbytes(&mut self) -> Result<ByteStr, ConsensusDecodeError> {
        ByteStr::consensus_decode(&mut self.cursor)
    }

    /// Reads a big-endian u16; a few legacy header fields use network byte
    /// order.
    pub fn read_u16_be(&mut self) -> Result<u16, ConsensusDecodeError> {
        u16::consensus_decode(&mut self.cursor).map(u16::swap_bytes)
    }
}

#[cfg(test)]
mod test {
    use amplify::num::u256;

    use super::*;
    use crate::{
        ByteStr, ConsensusEncode, ContractOutput, ContractType, LockTime, Outpoint, Sats,
        ScriptPubkey, SeqNo, SigScript, TxIn, TxOut, VarIntArray,
    };

    fn demo_tx(version: TxVer, output: TxOut) -> Tx {
        let input = TxIn {
            prev_output: Outpoint::new(Txid::from([8u8; 32]), 0u32),
            sig_script: SigScript::from_unsafe(vec![0x51, 0x52]),
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
    fn tx_and_hash_legacy() {
        let tx = demo_tx(TxVer::V1, TxOut::new(ScriptPubkey::p2pkh([7u8; 20]), Sats(50)));
        let wire = tx.consensus_serialize();
        let mut deserializer = Deserializer::new(&wire);
        let (parsed, txid) = deserializer.read_tx_and_hash().unwrap();
        assert_eq!(parsed, tx);
        assert_eq!(txid, Txid::from(double_sha256(&wire)));
        assert_eq!(txid, tx.txid());
        assert!(deserializer.is_done());
    }

    #[test]
    fn tx_and_hash_v2() {
        let tx = demo_tx(TxVer::V2, TxOut::new(ScriptPubkey::p2pkh([7u8; 20]), Sats(50)));
        let wire = tx.consensus_serialize();
        let (_, txid) = Deserializer::new(&wire).read_tx_and_hash().unwrap();
        // the v2 identifier is the layered digest, not the serialization hash
        assert_eq!(txid, tx.txid());
        assert_ne!(txid, Txid::from(double_sha256(&wire)));
    }

    #[test]
    fn block_with_trailing_bytes() {
        let tx1 = demo_tx(TxVer::V1, TxOut::new(ScriptPubkey::op_return(b"a"), Sats(0)));
        let tx2 = demo_tx(TxVer::V2, TxOut::new(ScriptPubkey::p2pkh([1u8; 20]), Sats(9)));

        let mut block = vec![0x02];
        block.extend_from_slice(&tx1.consensus_serialize());
        block.extend_from_slice(&tx2.consensus_serialize());
        block.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let mut deserializer = Deserializer::new(&block);
        let txs = deserializer.read_block().unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].0, tx1);
        assert_eq!(txs[0].1, tx1.txid());
        assert_eq!(txs[1].0, tx2);
        assert_eq!(txs[1].1, tx2.txid());
        // the parser stops after the declared count
        assert_eq!(deserializer.remaining(), 4);
        assert!(!deserializer.is_done());
    }

    #[test]
    fn block_truncated_tx() {
        let tx = demo_tx(TxVer::V1, TxOut::new(ScriptPubkey::p2pkh([1u8; 20]), Sats(9)));
        let wire = tx.consensus_serialize();
        // declare two transactions but provide one and a half
        let mut block = vec![0x02];
        block.extend_from_slice(&wire);
        block.extend_from_slice(&wire[..wire.len() / 2]);
        assert!(Deserializer::new(&block).read_block().is_err());
    }

    #[test]
    fn contract_output_stream() {
        let contract = ContractOutput {
            ty: ContractType::FT,
            outpoint: Outpoint::new(Txid::from([0xAB; 32]), 3u32),
            value: u256::from(777u64),
            max_supply: u256::from(10_000u64),
            metadata: ByteStr::from(b"m".to_vec()),
        };
        let tx = demo_tx(
            TxVer::V2,
            TxOut::with_contract(ScriptPubkey::p2sh([4u8; 20]), Sats(100), contract.clone()),
        );
        let wire = tx.consensus_serialize();
        let (parsed, txid) = Deserializer::new(&wire).read_tx_and_hash().unwrap();
        assert_eq!(parsed.outputs[0].contract.as_ref(), Some(&contract));
        assert_eq!(parsed.outputs[0].value, Sats(100));
        assert_eq!(txid, tx.txid());
    }

    #[test]
    fn cursor_save_restore() {
        let tx = demo_tx(TxVer::V1, TxOut::new(ScriptPubkey::p2pkh([1u8; 20]), Sats(9)));
        let wire = tx.consensus_serialize();
        let mut deserializer = Deserializer::new(&wire);

        let saved = deserializer.position();
        let _probe = deserializer.read_varint().unwrap();
        deserializer.set_position(saved);
        let (parsed, _) = deserializer.read_tx_and_hash().unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn offset_start() {
        let tx = demo_tx(TxVer::V1, TxOut::new(ScriptPubkey::op_return(b"z"), Sats(0)));
        let mut buffer = vec![0xFF; 7];
        buffer.extend_from_slice(&tx.consensus_serialize());
        let mut deserializer = Deserializer::with_offset(&buffer, 7);
        let (parsed, _) = deserializer.read_tx_and_hash().unwrap();
        assert_eq!(parsed, tx);
        assert!(deserializer.is_done());
    }

    #[test]
    fn raw_reads() {
        let mut deserializer = Deserializer::new(&[1, 2, 3, 4, 5]);
        assert_eq!(deserializer.read_byte().unwrap(), 1);
        assert_eq!(deserializer.read_bytes(3).unwrap(), &[2, 3, 4]);
        assert_eq!(deserializer.remaining(), 1);
        assert!(deserializer.read_bytes(2).is_err());
    }

    #[test]
    fn be_u16() {
        let mut deserializer = Deserializer::new(&[0x01, 0x02]);
        assert_eq!(deserializer.read_u16_be().unwrap(), 0x0102);
    }
}
