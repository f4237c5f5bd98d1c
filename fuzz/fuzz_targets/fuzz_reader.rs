#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use readform::{ParserOptions, Status, StreamingParser};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b","];

static ATOM_TABLE: &[&[u8]] = &[
    b"nil", b"true", b"false", b"0", b"-1", b"+2.5", b"3.", b".5", b"1e9", b"-7.25e-3", b"-",
    b"+", b".", b"abc", b"set!", b"<=", b"*foo*", b"a.b/c", b"12ab", b"1.2.3", b"~", b";",
];

static STRING_TABLE: &[&[u8]] = &[
    b"hello", b"\\n", b"\\r", b"\\t", b"\\f", b"\\0", b"\\z", b"\\\"", b"\\'", b"\\q", b"\\\\",
    b"(", b")", b" ",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x1F);

        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        let target = size.max(HEADER + 1).min(max_size);

        while prefix < target {
            let limit = max_size - prefix;
            let form = with_rng(|rng| {
                let mut out = Vec::new();
                append_form(rng, &mut out, 0);
                out
            });
            let len = form.len().min(limit);
            data[prefix..prefix + len].copy_from_slice(&form[..len]);
            prefix += len;
            if len == 0 {
                break;
            }
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fn pick<'a>(rng: &mut SmallRng, table: &[&'a [u8]]) -> &'a [u8] {
    table[rng.random_range(0..table.len())]
}

/// Appends one form, atom or string literal to `out`, occasionally leaving
/// it unterminated or closing it with the wrong delimiter.
fn append_form(rng: &mut SmallRng, out: &mut Vec<u8>, depth: usize) {
    out.extend_from_slice(pick(rng, WS_TABLE));
    match rng.random_range(0..6) {
        0 | 1 => out.extend_from_slice(pick(rng, ATOM_TABLE)),
        2 => {
            out.push(b'"');
            for _ in 0..rng.random_range(0..4) {
                out.extend_from_slice(pick(rng, STRING_TABLE));
            }
            if rng.random_bool(0.9) {
                out.push(b'"');
            }
        }
        _ if depth < 32 => {
            let (open, close) = [(b'(', b')'), (b'[', b']'), (b'{', b'}')][rng.random_range(0..3)];
            out.push(open);
            for _ in 0..rng.random_range(0..5) {
                append_form(rng, out, depth + 1);
            }
            match rng.random_range(0..20) {
                0 => {}
                1 => out.push(b")]}"[rng.random_range(0..3)]),
                _ => out.push(close),
            }
        }
        _ => out.extend_from_slice(pick(rng, ATOM_TABLE)),
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn reader(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as usize;
    let data = &data[HEADER..];

    let mut parser = StreamingParser::new(ParserOptions {
        stack_capacity: usize::from(flags & 7),
        buffer_capacity: usize::from((flags >> 3) & 3),
        panic_on_error: false,
    });

    let mut start = 0;
    while start < data.len() {
        let size = (split_seed % (data.len() - start)) + 1;
        let mut chunk = &data[start..start + size];
        start += size;

        // Drain every value in the chunk, resetting after errors.
        while !chunk.is_empty() {
            let before = parser.index();
            let n = parser.feed(chunk);
            assert!(n <= chunk.len());
            assert_eq!(parser.index(), before + n);
            chunk = &chunk[n..];
            match parser.status() {
                Status::Full => {
                    let value = parser.take_value();
                    assert!(value.is_some());
                }
                Status::Error => {
                    assert!(parser.error().is_some());
                    parser.reset();
                }
                Status::Pending => assert!(chunk.is_empty()),
            }
        }
    }

    if parser.finish() == Status::Full {
        assert!(parser.value().is_some());
    }
}

fuzz_target!(|data: &[u8]| reader(data));
