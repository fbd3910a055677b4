/// A borrowed view of a chunk's payload inside a region file buffer.
/// The range is checked when the view is created, so reading it never
/// goes out of bounds.
#[derive(Clone, Copy)]
pub struct PayloadRef<'a> {
	buffer: &'a [u8],
	offset: usize,
	len: usize,
}

impl<'a> PayloadRef<'a> {
	/// A view of nothing.
	pub const fn empty() -> Self {
		Self {
			buffer: &[],
			offset: 0,
			len: 0,
		}
	}

	/// Creates a view of `len` bytes starting at byte `offset` of `buffer`.
	/// Returns `None` if the range does not lie within the buffer.
	pub fn new(buffer: &'a [u8], offset: u64, len: u64) -> Option<Self> {
		let end = offset.checked_add(len)?;
		if end > buffer.len() as u64 {
			return None;
		}
		Some(Self {
			buffer,
			offset: offset as usize,
			len: len as usize,
		})
	}

	/// A view of the whole slice.
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		Self {
			buffer: bytes,
			offset: 0,
			len: bytes.len(),
		}
	}

	/// The viewed bytes.
	pub fn bytes(&self) -> &'a [u8] {
		&self.buffer[self.offset..self.offset + self.len]
	}

	/// Byte offset of the view within its buffer.
	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl<'a> Default for PayloadRef<'a> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<'a> std::fmt::Debug for PayloadRef<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PayloadRef")
			.field("offset", &self.offset)
			.field("len", &self.len)
			.finish()
	}
}

impl<'a> AsRef<[u8]> for PayloadRef<'a> {
	fn as_ref(&self) -> &[u8] {
		self.bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn range_is_checked() {
		let buffer = [1u8, 2, 3, 4, 5, 6];
		let view = PayloadRef::new(&buffer, 2, 3).unwrap();
		assert_eq!(view.bytes(), &[3, 4, 5]);
		assert_eq!(view.offset(), 2);
		assert!(PayloadRef::new(&buffer, 2, 4).is_some());
		assert!(PayloadRef::new(&buffer, 2, 5).is_none());
		assert!(PayloadRef::new(&buffer, 7, 0).is_none());
		assert!(PayloadRef::new(&buffer, u64::MAX, 2).is_none());
	}

	#[test]
	fn empty_view() {
		let view = PayloadRef::empty();
		assert!(view.is_empty());
		assert_eq!(view.bytes(), &[] as &[u8]);
		assert_eq!(PayloadRef::from_bytes(b"abc").len(), 3);
	}
}
