#![cfg(feature = "serde")]

use prefixjson::{Generation, Options, StreamParser, parse_partial};

// End-to-end shape of the intended caller: an SSE reader appends each text
// delta and re-renders the command/explanation pair from the freshest
// snapshot.

const DELTAS: &[&str] = &[
    "{\"",
    "command",
    "\": \"",
    "tar -x",
    "zf arch",
    "ive.tar.gz\"",
    ", \"expl",
    "anation\": \"",
    "x extracts, z filt",
    "ers through gzip, f names the archive\"",
    "}",
];

#[test]
fn generation_fields_grow_monotonically_over_the_stream() {
    let mut parser = StreamParser::new(Options::default());
    let mut last = Generation::default();
    for delta in DELTAS {
        if let Some(value) = parser.push(delta) {
            let current = Generation::from_value(value);
            assert!(
                current.command.starts_with(&last.command),
                "command regressed: {:?} -> {:?}",
                last.command,
                current.command
            );
            assert!(
                current.explanation.starts_with(&last.explanation),
                "explanation regressed: {:?} -> {:?}",
                last.explanation,
                current.explanation
            );
            last = current;
        }
    }
    assert_eq!(last.command, "tar -xzf archive.tar.gz");
    assert_eq!(
        last.explanation,
        "x extracts, z filters through gzip, f names the archive"
    );
}

#[test]
fn finish_matches_a_direct_parse_of_the_full_text() {
    let full: String = DELTAS.concat();
    let mut parser = StreamParser::new(Options::default());
    for delta in DELTAS {
        parser.push(delta);
    }
    assert_eq!(
        parser.finish().unwrap(),
        parse_partial(&full, &Options::default()).unwrap()
    );
}

#[test]
fn aborted_stream_keeps_the_best_effort_snapshot() {
    let mut parser = StreamParser::new(Options::default());
    for delta in &DELTAS[..6] {
        parser.push(delta);
    }
    let value = parser.value().expect("snapshot after six deltas");
    let generation = Generation::from_value(value);
    assert_eq!(generation.command, "tar -xzf archive.tar.gz");
    assert_eq!(generation.explanation, "");
}
