// SPDX-License-Identifier: CC0-1.0

//! Internal macros
//!
//! Macros meant to be used inside the library only.
//!

/// Implements `Encodable` for a struct by encoding each listed field in order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::encode::Encodable for $thing {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                mut s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                let mut len = 0;
                $(len += $crate::consensus::encode::Encodable::consensus_encode(&self.$field, &mut s)?;)+
                Ok(len)
            }
        }
    );
}

/// Implements `Encodable` for a `Vec` of encodable items, prefixed with a `VarInt` count.
macro_rules! impl_vec {
    ($type:ty) => {
        impl $crate::consensus::encode::Encodable for Vec<$type> {
            #[inline]
            fn consensus_encode<S: ::std::io::Write>(
                &self,
                mut s: S,
            ) -> Result<usize, $crate::consensus::encode::Error> {
                let mut len = 0;
                len += $crate::consensus::encode::Encodable::consensus_encode(
                    &$crate::consensus::encode::VarInt(self.len() as u64),
                    &mut s,
                )?;
                for c in self.iter() {
                    len += $crate::consensus::encode::Encodable::consensus_encode(c, &mut s)?;
                }
                Ok(len)
            }
        }
    };
}
