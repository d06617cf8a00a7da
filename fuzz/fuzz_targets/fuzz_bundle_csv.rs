#![no_main]

use libfuzzer_sys::fuzz_target;

use argodash::store::{FloatRecord, InMemoryStore, ProfileSample};

fuzz_target!(|data: &[u8]| {
    // Bundle record files are parsed row by row; arbitrary bytes must either
    // deserialize or fail gracefully. The key is that ingestion NEVER panics.
    let mut trajectories = Vec::new();
    let mut reader = csv::Reader::from_reader(data);
    for row in reader.deserialize::<FloatRecord>() {
        match row {
            Ok(record) => trajectories.push(record),
            Err(_) => break,
        }
    }

    let mut profiles = Vec::new();
    let mut reader = csv::Reader::from_reader(data);
    for row in reader.deserialize::<ProfileSample>() {
        match row {
            Ok(sample) => profiles.push(sample),
            Err(_) => break,
        }
    }

    // Whatever parsed must either satisfy the store invariants or be
    // rejected with a StoreError - again, no panics.
    let _ = InMemoryStore::builder()
        .trajectories(trajectories)
        .profile_samples(profiles)
        .build();
});
