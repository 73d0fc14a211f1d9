use h5keys::prelude::*;
use tempfile::TempDir;

fn main() {
    divan::main();
}

fn wide_file(n: usize) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("wide.h5");

    let hf = hdf5::File::create(&p).unwrap();
    for i in 0..n {
        hf.new_dataset::<f32>()
            .shape((10_usize, 10_usize))
            .create(format!("var_{i}").as_str())
            .unwrap();
    }
    let g = hf.create_group("group").unwrap();
    for i in 0..n {
        g.create_group(format!("sub_{i}").as_str()).unwrap();
    }

    (dir, p)
}

#[divan::bench(args = [10, 100, 1000])]
fn inspect(bencher: divan::Bencher, n: usize) {
    let (_dir, p) = wide_file(n);

    bencher.bench(|| Structure::inspect(&p).unwrap());
}
