use criterion::{black_box, criterion_group, criterion_main, Criterion};
use winpath::{classify, reduce};

fn bench_classify(c: &mut Criterion) {
	let paths = [
		r"C:\Users\x\Documents\report.docx",
		r"\\Server\Share\dir\file.txt",
		r"\\?\UNC\Server\Share\dir\file.txt",
		r"\\?\C:\very\deep\path",
		r"\\.\PhysicalDrive0",
		r"relative\path",
	];

	c.bench_function("classify_mixed_forms", |b| {
		b.iter(|| {
			for path in &paths {
				black_box(classify(black_box(path)));
			}
		})
	});
}

fn bench_reduce(c: &mut Criterion) {
	let paths: Vec<String> = (0..1000)
		.map(|i| format!(r"C:\root\d{}\sub{}\file{i}.txt", i % 17, i % 3))
		.collect();

	c.bench_function("reduce_1000_paths", |b| b.iter(|| reduce(black_box(&paths))));
}

criterion_group!(benches, bench_classify, bench_reduce);
criterion_main!(benches);
