use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::pack::{
    read_array,
    Pack,
    Unpack,
};

/// The payload of the quotient program's only instruction.
///
/// There is no tag byte: the whole instruction data is the numerator followed by the
/// denominator, each a big-endian `i32`. Ranges aren't validated here; the program decides what
/// to do with a zero or negative denominator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DivideInstructionData {
    pub numerator: i32,
    pub denominator: i32,
}

impl DivideInstructionData {
    pub const LEN: usize = 8;

    const NUMERATOR_OFFSET: usize = 0;
    const DENOMINATOR_OFFSET: usize = 4;

    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

const_assert_eq!(DivideInstructionData::LEN, 2 * size_of::<i32>());

impl Pack<8> for DivideInstructionData {
    fn pack_into_slice(&self, dst: &mut [u8; 8]) {
        dst[Self::NUMERATOR_OFFSET..Self::DENOMINATOR_OFFSET]
            .copy_from_slice(&self.numerator.to_be_bytes());
        dst[Self::DENOMINATOR_OFFSET..Self::LEN].copy_from_slice(&self.denominator.to_be_bytes());
    }
}

impl Unpack<8> for DivideInstructionData {
    fn unpack_from_array(src: &[u8; 8]) -> Self {
        Self {
            numerator: i32::from_be_bytes(read_array(src, Self::NUMERATOR_OFFSET)),
            denominator: i32::from_be_bytes(read_array(src, Self::DENOMINATOR_OFFSET)),
        }
    }
}

/// Builds the instruction that asks `program_id` to divide `numerator` by `denominator` and store
/// the quotient in `app_account`.
///
/// The app account is the only account passed; it's writable and doesn't sign.
pub fn divide(
    program_id: &Pubkey,
    app_account: &Pubkey,
    numerator: i32,
    denominator: i32,
) -> Instruction {
    let data = DivideInstructionData::new(numerator, denominator).pack();
    Instruction::new_with_bytes(
        *program_id,
        &data,
        vec![AccountMeta::new(*app_account, false)],
    )
}
