//! Shorthands for pulling big-endian fields off the front of byte slices.

#[inline]
#[must_use]
pub(crate) fn try_pull_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

#[inline]
#[must_use]
pub(crate) fn try_pull_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  try_pull_byte_array::<4>(bytes).map(|(a, tail)| (u32::from_be_bytes(a), tail))
}

#[test]
fn test_try_pull_u32_be() {
  assert_eq!(try_pull_u32_be(&[0, 0, 1, 2, 9]), Some((258, &[9_u8][..])));
  assert_eq!(try_pull_u32_be(&[0, 0, 1]), None);
}
