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

use std::cmp::Ordering;

use crate::LIB_NAME_LAMBDA;

/// The threshold for deciding whether a lock time value is a height or a time.
///
/// `LockTime` values _below_ the threshold are interpreted as block heights,
/// values _above_ (or equal to) the threshold are interpreted as block times
/// (UNIX timestamp, seconds since epoch).
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[derive(StrictType, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LockTime(u32);

impl PartialOrd for LockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_height_based() != other.is_height_based() {
            None
        } else {
            Some(self.0.cmp(&other.0))
        }
    }
}

impl LockTime {
    /// Zero time lock.
    pub const ZERO: Self = Self(0);

    /// Creates an absolute time lock with the given block height.
    ///
    /// Block height must be strictly less than `0x1DCD6500`, otherwise
    /// `None` is returned.
    #[inline]
    pub const fn from_height(height: u32) -> Option<Self> {
        if height < LOCKTIME_THRESHOLD {
            Some(Self(height))
        } else {
            None
        }
    }

    /// Creates an absolute time lock with the given UNIX timestamp value.
    ///
    /// Timestamp value must be greater or equal to `0x1DCD6500`, otherwise
    /// `None` is returned.
    #[inline]
    pub const fn from_unix_timestamp(timestamp: u32) -> Option<Self> {
        if timestamp < LOCKTIME_THRESHOLD {
            None
        } else {
            Some(Self(timestamp))
        }
    }

    /// Converts from the full u32 representation of the `nLockTime` value as
    /// it is serialized in a transaction.
    #[inline]
    pub const fn from_consensus_u32(lock_time: u32) -> Self { LockTime(lock_time) }

    #[inline]
    pub const fn to_consensus_u32(&self) -> u32 { self.0 }

    #[inline]
    pub const fn into_consensus_u32(self) -> u32 { self.0 }

    /// Checks if the absolute timelock provided by the `nLockTime` value
    /// specifies a height-based lock.
    #[inline]
    pub const fn is_height_based(self) -> bool { self.0 < LOCKTIME_THRESHOLD }

    /// Checks if the absolute timelock provided by the `nLockTime` value
    /// specifies a time-based lock.
    #[inline]
    pub const fn is_time_based(self) -> bool { !self.is_height_based() }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[derive(StrictType, StrictDumb, StrictEncode, StrictDecode)]
#[strict_type(lib = LIB_NAME_LAMBDA)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SeqNo(u32);

impl SeqNo {
    pub const ZERO: SeqNo = SeqNo(0);

    #[inline]
    pub const fn from_consensus_u32(seq_no: u32) -> Self { SeqNo(seq_no) }

    #[inline]
    pub const fn to_consensus_u32(&self) -> u32 { self.0 }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lock_time_classification() {
        assert!(LockTime::ZERO.is_height_based());
        assert!(LockTime::from_consensus_u32(499_999_999).is_height_based());
        assert!(LockTime::from_consensus_u32(500_000_000).is_time_based());
        assert_eq!(LockTime::from_height(100), Some(LockTime::from_consensus_u32(100)));
        assert_eq!(LockTime::from_height(LOCKTIME_THRESHOLD), None);
        assert_eq!(LockTime::from_unix_timestamp(100), None);
        // height- and time-based locks are not comparable
        assert_eq!(
            LockTime::ZERO.partial_cmp(&LockTime::from_consensus_u32(600_000_000)),
            None
        );
    }
}
