use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use vendorfront_catalog::{BaseField, DraftField, DraftSession, assemble};

/// A session with `drafts` colors, each carrying a full size run and images.
fn session_with(drafts: usize) -> DraftSession {
    let mut session = DraftSession::new();
    session.set_base_field(BaseField::Name, "Bench Tee");
    session.set_base_field(BaseField::BasePrice, "19.99");
    let first = session.drafts()[0].id_typed();
    session.remove_draft(first).unwrap();

    for i in 0..drafts {
        let id = session.add_draft();
        session
            .set_field(id, DraftField::Color, format!("Color {i}"))
            .unwrap();
        session.set_sizes(id, "XS,S,M,L,XL,XXL").unwrap();
        session.set_stock(id, "M", "12").unwrap();
        session
            .append_images(id, (0..4).map(|n| format!("/uploads/{i}-{n}.png")))
            .unwrap();
    }
    session
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for drafts in [1usize, 10, 100] {
        let session = session_with(drafts);
        group.throughput(Throughput::Elements((drafts * 6) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(drafts), &session, |b, s| {
            b.iter(|| assemble(black_box(s)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
