use std::io::{
	self,
	Write,
	Seek, SeekFrom,
};

use crate::RegionResult;

/// A value that knows how to serialize itself to a writer.
/// Returns the number of bytes that were written.
pub trait Writable {
	fn write_to<W: Write>(&self, writer: &mut W) -> RegionResult<usize>;
}

pub trait WriteZeroes {
	fn write_zeroes(&mut self, count: u64) -> io::Result<u64>;
}

impl<T: Write> WriteZeroes for T {
	fn write_zeroes(&mut self, count: u64) -> io::Result<u64> {
		const ZEROES: &'static [u8; 4096] = &[0u8; 4096];
		let mut remainder = count;
		while remainder >= ZEROES.len() as u64 {
			self.write_all(ZEROES)?;
			remainder -= ZEROES.len() as u64;
		}
		if remainder != 0 {
			self.write_all(&ZEROES[0..remainder as usize])?;
		}
		Ok(count)
	}
}

pub trait SeekReturn {
	/// Returns a [SeekFrom] for the current stream position so that
	/// the caller can seek somewhere else and then come back.
	fn seek_return(&mut self) -> io::Result<SeekFrom>;
}

impl<T: Seek> SeekReturn for T {
	fn seek_return(&mut self) -> io::Result<SeekFrom> {
		Ok(SeekFrom::Start(self.stream_position()?))
	}
}
