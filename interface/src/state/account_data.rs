use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use static_assertions::const_assert_eq;

use crate::{
    error::{
        InterfaceError,
        InterfaceResult,
    },
    pack::Pack,
};

/// The record stored in the app account. The program writes it, clients only read it.
///
/// The borsh layout is a single little-endian `u32` at offset 0.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AccountData {
    pub result: u32,
}

impl AccountData {
    /// The exact data length of an app account.
    pub const LEN: usize = 4;

    /// Decodes an app account's raw data. The length must match [`AccountData::LEN`] exactly.
    pub fn decode(data: &[u8]) -> InterfaceResult<Self> {
        if data.len() != Self::LEN {
            return Err(InterfaceError::MismatchedDataLengths);
        }
        AccountData::try_from_slice(data).map_err(|_| InterfaceError::InvalidAccountData)
    }
}

const_assert_eq!(AccountData::LEN, size_of::<u32>());

impl Pack<4> for AccountData {
    fn pack_into_slice(&self, dst: &mut [u8; 4]) {
        dst.copy_from_slice(&self.result.to_le_bytes());
    }
}
