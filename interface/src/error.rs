#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::EnumIter)]
#[repr(u8)]
pub enum InterfaceError {
    InvalidPackedDataLength,
    MismatchedDataLengths,
    InvalidAccountData,
    InvalidSeed,
}

impl From<InterfaceError> for &'static str {
    fn from(value: InterfaceError) -> Self {
        match value {
            InterfaceError::InvalidPackedDataLength => "Invalid packed data length",
            InterfaceError::MismatchedDataLengths => "Account data length doesn't match the record",
            InterfaceError::InvalidAccountData => "Account data couldn't be deserialized",
            InterfaceError::InvalidSeed => "Seed can't be used to derive an address",
        }
    }
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        f.write_str(msg)
    }
}

impl std::error::Error for InterfaceError {}

pub type InterfaceResult<T> = Result<T, InterfaceError>;
