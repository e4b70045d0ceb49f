//! Shorthands for pulling fixed-size values off the front of a byte slice.

use bytemuck::{checked::pod_read_unaligned, Pod};
use core::mem::size_of;

use crate::error::BmpError;

#[inline]
#[must_use]
pub(crate) fn u16_le(bytes: &[u8]) -> u16 {
  u16::from_le_bytes(bytes.try_into().unwrap())
}

#[inline]
#[must_use]
pub(crate) fn u32_le(bytes: &[u8]) -> u32 {
  u32::from_le_bytes(bytes.try_into().unwrap())
}

#[inline]
pub(crate) fn try_pull_byte_array<const N: usize>(
  bytes: &[u8],
) -> Result<([u8; N], &[u8]), BmpError> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().unwrap();
    Ok((a, tail))
  } else {
    Err(BmpError::TruncatedHeader)
  }
}

#[inline]
pub(crate) fn try_pull_pod<T: Pod>(bytes: &[u8]) -> Result<(T, &[u8]), BmpError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(BmpError::TruncatedHeader)
  }
}
