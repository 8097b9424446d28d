use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_booking::{parse_date, FixedClock, Hotel, Room};

fn hotel_with_rooms(rooms: u32) -> Hotel {
    let today = parse_date("2030-01-01").unwrap();
    let mut hotel = Hotel::with_clock("Bench Hotel", Box::new(FixedClock(today)));
    for room_no in 0..rooms {
        if room_no % 2 == 0 {
            hotel.add_room(Room::single(room_no));
        } else {
            hotel.add_room(Room::double(room_no));
        }
    }
    hotel
}

pub fn booking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_ledger");

    for rooms in [10u32, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("reserve_and_cancel", rooms), rooms, |b, &rooms| {
            let mut hotel = hotel_with_rooms(rooms);
            b.iter(|| {
                let room_no = black_box(rooms - 1);
                hotel.reserve_room(room_no, "2030-06-01").unwrap();
                hotel.cancel_reservation(room_no, "2030-06-01").unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("availability", rooms), rooms, |b, &rooms| {
            let mut hotel = hotel_with_rooms(rooms);
            for room_no in (0..rooms).step_by(3) {
                hotel.reserve_room(room_no, "2030-06-01").unwrap();
            }
            b.iter(|| black_box(hotel.check_available_rooms("2030-06-01").unwrap().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, booking_benchmark);
criterion_main!(benches);
