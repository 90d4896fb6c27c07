use crate::error::{
    InterfaceError,
    InterfaceResult,
};

/// Fixed-size serialization into exactly `LEN` bytes.
pub trait Pack<const LEN: usize>: Sized {
    /// Pack into a zeroed buffer of size `LEN`, then return the buffer.
    fn pack(&self) -> [u8; LEN] {
        let mut dst = [0u8; LEN];
        self.pack_into_slice(&mut dst);
        dst
    }

    /// Pack into a destination slice of exactly `LEN` bytes.
    fn pack_into_slice(&self, dst: &mut [u8; LEN]);
}

/// The inverse of [`Pack`]. Input slices must be exactly `LEN` bytes long; trailing bytes are
/// rejected rather than ignored.
pub trait Unpack<const LEN: usize>: Sized {
    fn unpack(src: &[u8]) -> InterfaceResult<Self> {
        let bytes: &[u8; LEN] = src
            .try_into()
            .map_err(|_| InterfaceError::InvalidPackedDataLength)?;
        Ok(Self::unpack_from_array(bytes))
    }

    fn unpack_from_array(src: &[u8; LEN]) -> Self;
}

/// Copies `N` bytes starting at `offset` out of `src`. Panics if `src` is shorter than
/// `offset + N`.
#[inline(always)]
pub fn read_array<const N: usize>(src: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&src[offset..offset + N]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(u16, u16);

    impl Pack<4> for Pair {
        fn pack_into_slice(&self, dst: &mut [u8; 4]) {
            dst[0..2].copy_from_slice(&self.0.to_be_bytes());
            dst[2..4].copy_from_slice(&self.1.to_be_bytes());
        }
    }

    impl Unpack<4> for Pair {
        fn unpack_from_array(src: &[u8; 4]) -> Self {
            Pair(
                u16::from_be_bytes(read_array(src, 0)),
                u16::from_be_bytes(read_array(src, 2)),
            )
        }
    }

    #[test]
    fn unpack_rejects_wrong_lengths() {
        assert!(Pair::unpack(&[0, 1, 0]).is_err());
        assert!(Pair::unpack(&[0, 1, 0, 2, 0]).is_err());
        let pair = Pair::unpack(&[0, 1, 0, 2]).unwrap();
        assert_eq!((pair.0, pair.1), (1, 2));
        assert_eq!(Pair(7, 9).pack(), [0, 7, 0, 9]);
    }
}
