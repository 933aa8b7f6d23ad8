#![no_main]
use std::cell::RefCell;
use std::io::{self, Read};

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use taffy::{Archive, OwnedToken, ReadSource, ScanError, Scanner};

const HEADER: usize = 4; // 4-byte split seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Line shapes the mutator splices in: real headers, indented content,
/// blank lines and near misses.
static LINE_TABLE: &[&[u8]] = &[
    b"-- title --",
    b"--  --",
    b"-- a/fixture --",
    b"\tcontent",
    b"\t",
    b"",
    b"-",
    b"--",
    b"-- --",
    b"- not a header -",
    b"-- missing trailer",
    b"---- --",
    b"  spaced",
    b"\t\tdouble",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));
        let mut prefix = HEADER;
        let lines = with_rng(|rng| rng.random_range(0..32));
        for _ in 0..lines {
            prefix += append_line(&mut data[prefix..max_size]);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one line from the table plus its linebreak, unless it would not fit.
fn append_line(buf: &mut [u8]) -> usize {
    let line = with_rng(|rng| LINE_TABLE[rng.random_range(0..LINE_TABLE.len())]);
    if line.len() + 1 > buf.len() {
        return 0;
    }
    buf[..line.len()].copy_from_slice(line);
    buf[line.len()] = b'\n';
    line.len() + 1
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Hands out data in read sizes derived from a seed, with an occasional
/// `Interrupted`.
#[derive(Debug)]
struct SplitReader<'a> {
    data: &'a [u8],
    seed: u32,
    turn: u32,
}

impl<'a> Arbitrary<'a> for SplitReader<'a> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let seed = u.arbitrary()?;
        Ok(Self {
            data: u.take_rest(),
            seed,
            turn: 0,
        })
    }
}

impl Read for SplitReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.turn = self.turn.wrapping_add(1);
        let step = self.seed.rotate_left(self.turn % 32);
        if step % 7 == 0 && !self.data.is_empty() && self.turn % 2 == 0 {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = (step as usize % 3 + 1).min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn drain<S: taffy::ByteSource>(scanner: &mut Scanner<S>) -> (Vec<OwnedToken>, ScanError<S::Error>) {
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token() {
            Ok(token) => tokens.push(token.into_owned()),
            Err(err) => return (tokens, err),
        }
    }
}

fn scanner(data: &[u8]) {
    let Ok(reader) = SplitReader::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    let bytes = reader.data;

    let (tokens, end) = drain(&mut Scanner::new(bytes));
    assert!(end.is_end_of_input());
    assert!(!tokens.is_empty());
    for pair in tokens.windows(2) {
        let [a, b] = pair else { unreachable!() };
        assert_ne!(
            a.as_token().is_header(),
            b.as_token().is_header(),
            "adjacent tokens of one kind: {a:?} {b:?}"
        );
    }
    assert!(tokens.last().is_some_and(|t| t.as_token().is_content()));

    let mut chunked = Scanner::new(ReadSource::new(reader));
    let (chunked_tokens, chunked_end) = drain(&mut chunked);
    assert!(chunked_end.is_end_of_input());
    assert_eq!(tokens, chunked_tokens);

    let archive = Archive::parse(bytes);
    let headers = tokens.iter().filter(|t| t.as_token().is_header()).count();
    assert_eq!(archive.len(), headers);
}

fuzz_target!(|data: &[u8]| scanner(data));
