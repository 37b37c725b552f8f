use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_formdata::{
    decode, encode, from_form_data, to_form_data, FormData, MultipartOptions,
};

#[derive(Serialize, Deserialize, Clone)]
struct Address {
    street: String,
    city: String,
    zip: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Customer {
    id: u32,
    name: String,
    email: String,
    vip: bool,
    address: Address,
    tags: Vec<String>,
}

fn customer(id: u32) -> Customer {
    Customer {
        id,
        name: format!("Customer {}", id),
        email: format!("c{}@example.com", id),
        vip: id % 3 == 0,
        address: Address {
            street: format!("{} Harbour Road", id),
            city: "Bergen".to_string(),
            zip: 5003,
        },
        tags: vec!["retail".to_string(), "newsletter".to_string()],
    }
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1usize, 10, 100] {
        let customers: Vec<Customer> = (0..size as u32).map(customer).collect();
        let value = serde_formdata::to_value(&Wrapper { customers }).unwrap();

        group.bench_with_input(BenchmarkId::new("tagged", size), &value, |b, value| {
            b.iter(|| {
                let mut form = FormData::new();
                encode(&mut form, black_box(value), &MultipartOptions::default());
                form
            })
        });
        group.bench_with_input(BenchmarkId::new("plain", size), &value, |b, value| {
            b.iter(|| {
                let mut form = FormData::new();
                encode(&mut form, black_box(value), &MultipartOptions::plain());
                form
            })
        });
    }
    group.finish();
}

#[derive(Serialize, Deserialize, Clone)]
struct Wrapper {
    customers: Vec<Customer>,
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1usize, 10, 100] {
        let customers: Vec<Customer> = (0..size as u32).map(customer).collect();
        let form = to_form_data(&Wrapper { customers }, MultipartOptions::default()).unwrap();

        group.bench_with_input(BenchmarkId::new("tree", size), &form, |b, form| {
            b.iter(|| {
                let mut tree = black_box(form).to_tree();
                decode(&mut tree);
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("typed", size), &form, |b, form| {
            b.iter(|| from_form_data::<Wrapper>(black_box(form)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
