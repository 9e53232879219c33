use std::fmt::Write;
use std::fs;
use std::path::Path;

// Keep in sync with .gitignore file and benches/bench.rs!
const NUMBERS_PATH: &str = "./testdata/bench_numbers.txt";
const WORDS_PATH: &str = "./testdata/bench_words.txt";
const ROWS_TO_GENERATE: usize = 10_000;

fn main() {
    if !Path::new(NUMBERS_PATH).exists() || !Path::new(WORDS_PATH).exists() {
        generate_testdata();
    }
}

// Deterministic inputs so bench results stay comparable between runs.
fn generate_testdata() {
    fs::create_dir_all("./testdata").expect("Failed to create testdata directory!");

    let mut rng = Xorshift(0x9e37_79b9_7f4a_7c15);

    let mut numbers = String::new();
    for _ in 0..ROWS_TO_GENERATE {
        writeln!(numbers, "{}", rng.next() % 100_000).unwrap();
    }
    fs::write(NUMBERS_PATH, numbers).expect("Failed to write bench_numbers.txt!");

    const WORDS: &[&str] = &[
        "the", "Quick", "brown", "Fox", "jumps", "over", "the", "lazy", "Dog",
    ];
    let mut words = String::new();
    for _ in 0..ROWS_TO_GENERATE {
        for _ in 0..8 {
            words.push_str(WORDS[rng.next() as usize % WORDS.len()]);
            words.push(' ');
        }
        words.push('\n');
    }
    fs::write(WORDS_PATH, words).expect("Failed to write bench_words.txt!");
}

struct Xorshift(u64);

impl Xorshift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}
