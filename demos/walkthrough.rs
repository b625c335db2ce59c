//! Walks through the `OrderedSet` API, printing each step, then times it against
//! the standard library's `BTreeSet`.
//!
//! Run with `cargo run --release --example walkthrough`.

use chainset::{OrdTotalOrder, OrderedSet, ReverseOrder};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::collections::BTreeSet;
use std::hint::black_box;
use std::mem;
use std::time::{Duration, Instant};

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn timed<R>(f: impl FnOnce() -> R) -> Duration {
    let start = Instant::now();
    let _ = black_box(f());
    start.elapsed()
}

fn main() {
    // insertion and iteration
    let mut st: OrderedSet<String> = OrderedSet::new();
    for s in ["b", "a", "c", "b"] {
        st.insert(s.to_string());
    }
    println!("st: {st}");

    // removal
    st.remove("b");
    println!("after remove b: {st}");
    st.remove("x");
    println!("after remove x: {st}");

    // lookup
    println!("get a: {}", yes_no(st.get("a").is_some()));
    println!("get b: {}", yes_no(st.get("b").is_some()));

    // len and is_empty
    println!("len: {}", st.len());
    println!("is_empty: {}", yes_no(st.is_empty()));
    st.remove("a");
    st.remove("c");
    println!("is_empty after removing all: {}", yes_no(st.is_empty()));

    // clone and clone_from
    st.insert("x".to_string());
    st.insert("y".to_string());
    let st2 = st.clone();
    println!("st2 (clone): {st2}");
    let mut st3 = OrderedSet::new();
    st3.clone_from(&st);
    println!("st3 (clone_from): {st3}");

    // set algebra
    let mut s1: OrderedSet<&str> = OrderedSet::new();
    let mut s2 = OrderedSet::new();
    s1.extend(["a", "b", "c"]);
    s2.extend(["b", "c", "d"]);
    println!("s1: {s1}");
    println!("s2: {s2}");
    println!("union: {}", s1.union(&s2));
    println!("intersection: {}", s1.intersection(&s2));
    println!("difference: {}", s1.difference(&s2));

    // subsets
    let s3 = OrderedSet::from(["b"]);
    println!("s3 is subset of s1: {}", yes_no(s3.is_subset(&s1)));
    println!("s1 is subset of s3: {}", yes_no(s1.is_subset(&s3)));

    s1.clear();
    println!("s1 after clear: {s1}, len: {}", s1.len());

    // custom order
    let mut s4 = OrderedSet::with_order(ReverseOrder(OrdTotalOrder::<i32>::new()));
    s4.extend([1, 3, 2]);
    println!("s4 (descending): {s4}");

    // bound queries
    let s = OrderedSet::from([1, 3, 5]);
    println!("s: {s}");
    if let Some(v) = s.lower_bound(&3).peek() {
        println!("lower_bound(3): {v}");
    }
    if let Some(v) = s.upper_bound(&3).peek() {
        println!("upper_bound(3): {v}");
    }

    // timing against BTreeSet
    let mut rng = XorShiftRng::seed_from_u64(0x5eed);
    for n in [1_000, 10_000, 30_000] {
        let data: Vec<i32> = (0..n).map(|_| rng.gen()).collect();

        let mut set = OrderedSet::new();
        let set_insert = timed(|| {
            for &x in &data {
                set.insert(x);
            }
        });
        let set_find = timed(|| data.iter().filter(|&x| set.contains(x)).count());

        let mut std_set = BTreeSet::new();
        let std_insert = timed(|| {
            for &x in &data {
                std_set.insert(x);
            }
        });
        let std_find = timed(|| data.iter().filter(|&x| std_set.contains(x)).count());

        println!(
            "n={n}: OrderedSet insert {}ms, find {}ms; BTreeSet insert {}ms, find {}ms",
            set_insert.as_millis(),
            set_find.as_millis(),
            std_insert.as_millis(),
            std_find.as_millis(),
        );
    }

    // generic iterator algorithms
    match st.iter().find(|s| s.as_str() == "a") {
        Some(_) => println!("\"a\" found in st"),
        None => println!("\"a\" not found in st"),
    }

    println!("size of OrderedSet<i32>: {} bytes", mem::size_of::<OrderedSet<i32>>());
}
