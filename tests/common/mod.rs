#![allow(dead_code)]
use std::path::PathBuf;

use hdf5::types::{FixedAscii, VarLenUnicode};
use tempfile::TempDir;

/// Creates a file shaped like a small sensor data set:
///
/// ```text
/// X      float64 (100, 5)
/// Y      float32 (100,)
/// meta   group: a, b
/// names  |S8 (4,)
/// notes  object ()
/// ```
pub fn sensor_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("sensors.h5");

    let hf = hdf5::File::create(&p).unwrap();

    hf.new_dataset::<f64>()
        .shape((100_usize, 5_usize))
        .create("X")
        .unwrap();

    hf.new_dataset::<f32>().shape(100_usize).create("Y").unwrap();

    let meta = hf.create_group("meta").unwrap();
    meta.new_dataset::<i32>().shape(3_usize).create("a").unwrap();
    meta.create_group("b").unwrap();

    hf.new_dataset::<FixedAscii<8>>()
        .shape(4_usize)
        .create("names")
        .unwrap();
    hf.new_dataset::<VarLenUnicode>()
        .shape(())
        .create("notes")
        .unwrap();

    (dir, p)
}

/// An existing file that is not a HDF5 file.
pub fn text_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("readme.h5");
    std::fs::write(&p, "this is not a HDF5 file\n").unwrap();

    (dir, p)
}
