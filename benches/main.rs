#![allow(missing_docs)]

#[macro_use]
extern crate criterion;

mod skiplist;

criterion_group!(benches, crate::skiplist::benchmark, crate::heap::benchmark);
criterion_main!(benches);
