use booking_desk::{Booking, BookingConfig, BookingContainer, BookingStore, ContainerKind};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn random_booking(rng: &mut impl Rng) -> Booking {
    let name: String = (0..8).map(|_| char::from(rng.sample(Alphanumeric))).collect();
    let prefix = if rng.gen_bool(0.5) { "078" } else { "079" };
    let phone = format!("{}{:07}", prefix, rng.gen_range(0..10_000_000));
    Booking::new(name, phone, "Kivu Beach Rubavu")
}

// Mixed submit/remove/snapshot traffic, the pattern a form produces
pub fn container_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_containers");

    let config = BookingConfig {
        stack_max_size: 64,
        queue_capacity: 64,
        list_max_len: 64,
    };

    let mut rng = thread_rng();
    let bookings: Vec<Booking> = (0..1_000).map(|_| random_booking(&mut rng)).collect();

    for kind in [
        ContainerKind::Stack,
        ContainerKind::Queue,
        ContainerKind::List,
        ContainerKind::Tree,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", kind)),
            &kind,
            |b, &kind| {
                b.iter(|| {
                    let mut store = BookingContainer::new(kind, &config).unwrap();
                    for (i, booking) in bookings.iter().enumerate() {
                        if store.insert(booking.clone()).is_err() || i % 5 == 4 {
                            let _ = store.remove();
                        }
                        if i % 50 == 0 {
                            black_box(store.snapshot());
                        }
                    }
                    black_box(store.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, container_benchmark);
criterion_main!(benches);
