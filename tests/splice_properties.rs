use rand::{rngs::StdRng, Rng, SeedableRng};

use mcsplice::{
	world::io::region::prelude::*,
	splice, EmptySlotOffset, Position,
};

/// Random payloads for a random subset of slots.
fn random_payloads(rng: &mut StdRng, chunks: usize) -> Vec<(RegionCoord, Vec<u8>, Timestamp)> {
	(0..chunks)
		.map(|_| {
			let coord = RegionCoord::from(rng.gen_range(0..1024usize));
			let len = rng.gen_range(1..=3 * 4096 + 17);
			let fill: u8 = rng.gen();
			(coord, vec![fill; len], Timestamp::new(rng.gen()))
		})
		.collect()
}

fn build_region(payloads: &[(RegionCoord, Vec<u8>, Timestamp)]) -> Vec<u8> {
	let mut table = ChunkTable::new();
	for (coord, bytes, timestamp) in payloads {
		table.set_slot(*coord, ChunkSlot::with_payload(bytes, *timestamp).unwrap());
	}
	store(&table, EmptySlotOffset::Cursor).unwrap()
}

#[test]
fn store_is_a_fixed_point() {
	let mut rng = StdRng::seed_from_u64(0x5EED);
	for _ in 0..20 {
		let chunks = rng.gen_range(0..40);
		let first = build_region(&random_payloads(&mut rng, chunks));
		let table = ChunkTable::load(&first).unwrap();
		let second = store(&table, EmptySlotOffset::Cursor).unwrap();
		assert_eq!(first, second);
	}
}

#[test]
fn length_counts_every_sector() {
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..20 {
		let chunks = rng.gen_range(0..40);
		let bytes = build_region(&random_payloads(&mut rng, chunks));
		let table = ChunkTable::load(&bytes).unwrap();
		let sectors: u64 = table.iter().map(|(_, slot)| slot.sector_count() as u64).sum();
		assert_eq!(required_len(&table), (2 + sectors) * 4096);
		assert_eq!(bytes.len() as u64, (2 + sectors) * 4096);
	}
}

#[test]
fn splice_only_changes_the_target_slot() {
	let mut rng = StdRng::seed_from_u64(42);
	for _ in 0..20 {
		let chunks = rng.gen_range(0..40);
		let source = build_region(&random_payloads(&mut rng, chunks));
		let chunks = rng.gen_range(0..40);
		let replacement = build_region(&random_payloads(&mut rng, chunks));
		let (x, z): (i32, i32) = (rng.gen(), rng.gen());
		let position = Position::resolve(x as i64, z as i64);

		let spliced = splice(&source, &replacement, x as i64, z as i64).unwrap();
		assert_eq!(spliced.len, spliced.bytes.len() as u64);

		let before = ChunkTable::load(&source).unwrap();
		let donor = ChunkTable::load(&replacement).unwrap();
		let after = ChunkTable::load(&spliced.bytes).unwrap();
		for (coord, slot) in after.iter() {
			let original = before.slot(coord);
			assert_eq!(slot.timestamp(), original.timestamp());
			let expected = if coord == position.local { donor.slot(coord) } else { original };
			assert_eq!(slot.sector_count(), expected.sector_count());
			assert_eq!(slot.payload().bytes(), expected.payload().bytes());
		}
	}
}

#[test]
fn substituting_into_an_empty_slot_grows_by_its_sectors() {
	let chunk = vec![0x7Eu8; 3 * 4096];
	let mut donor = ChunkTable::new();
	donor.set_slot((31, 31), ChunkSlot::with_payload(&chunk, Timestamp::new([1, 2, 3, 4])).unwrap());
	let replacement = store(&donor, EmptySlotOffset::Cursor).unwrap();

	let existing = vec![0x01u8; 4096];
	let mut target = ChunkTable::new();
	target.set_slot((0, 0), ChunkSlot::with_payload(&existing, Timestamp::default()).unwrap());
	let source = store(&target, EmptySlotOffset::Cursor).unwrap();

	let spliced = splice(&source, &replacement, -1, -1).unwrap();
	assert_eq!(spliced.len, source.len() as u64 + 3 * 4096);
	assert_eq!(spliced.position.chunk.xz(), (-1, -1));
	assert_eq!(spliced.position.local_xz(), (31, 31));
	assert_eq!(&spliced.bytes[spliced.bytes.len() - 3 * 4096..], &chunk[..]);
}
