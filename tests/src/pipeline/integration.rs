#![cfg(test)]
use ipfilter_common::address::tokenizer;
use ipfilter_common::config::{Config, TokenPolicy};
use ipfilter_common::error::PipelineError;
use ipfilter_common::pipeline::{self, Stats};
use std::io::Cursor;

const FIXTURE: &str = include_str!("../../fixtures/ip_filter.tsv");

fn run_to_string(input: &str, cfg: &Config) -> Result<(String, Stats), PipelineError> {
    let mut out: Vec<u8> = Vec::new();
    let stats = pipeline::run(Cursor::new(input), &mut out, cfg)?;
    Ok((String::from_utf8(out).expect("report is ascii"), stats))
}

/// Splits a report into the full pool followed by each `filter...` section body.
fn sections(report: &str) -> Vec<Vec<&str>> {
    report
        .split("\n\n")
        .enumerate()
        .map(|(idx, block)| {
            let lines = block.lines();
            if idx == 0 {
                lines.collect()
            } else {
                lines.skip(1).collect()
            }
        })
        .collect()
}

fn octets(line: &str) -> Vec<u32> {
    tokenizer::split(line, '.')
        .iter()
        .map(|t| t.parse().expect("printed octet is numeric"))
        .collect()
}

#[test]
fn fixture_summary() {
    let (_, stats) = run_to_string(FIXTURE, &Config::default()).unwrap();
    assert_eq!(
        stats,
        Stats {
            lines: 54,
            accepted: 49,
            skipped: 5
        }
    );
}

#[test]
fn fixture_full_pool_is_sorted_descending() {
    let (report, _) = run_to_string(FIXTURE, &Config::default()).unwrap();
    let pool = &sections(&report)[0];

    assert_eq!(pool.len(), 49);
    assert_eq!(&pool[..3], ["222.173.235.246", "222.130.177.64", "222.82.198.61"]);
    assert_eq!(
        &pool[pool.len() - 6..],
        ["2.0.0.1", "1.231.69.33", "1.87.203.225", "1.70.44.170", "1.29.168.152", "1.1.234.8"]
    );

    // 10 > 9 > 2, whatever the string order says.
    let ten = pool.iter().position(|l| *l == "10.0.0.1").unwrap();
    let nine = pool.iter().position(|l| *l == "9.255.0.1").unwrap();
    let two = pool.iter().position(|l| *l == "2.0.0.1").unwrap();
    assert!(ten < nine && nine < two);

    for pair in pool.windows(2) {
        assert!(octets(pair[0]) >= octets(pair[1]), "{} before {}", pair[0], pair[1]);
    }
}

#[test]
fn fixture_round_trips() {
    let (report, _) = run_to_string(FIXTURE, &Config::default()).unwrap();
    let mut printed: Vec<Vec<u32>> = sections(&report)[0].iter().map(|l| octets(l)).collect();
    let mut input: Vec<Vec<u32>> = FIXTURE
        .lines()
        .map(tokenizer::first_field)
        .filter(|f| {
            let tokens = tokenizer::split(f, '.');
            tokens.len() == 4 && tokens.iter().all(|t| t.parse::<u8>().is_ok())
        })
        .map(octets)
        .collect();

    assert!(printed.iter().all(|o| o.len() == 4));
    printed.sort();
    input.sort();
    assert_eq!(printed, input);
}

#[test]
fn fixture_filter_sections() {
    let (report, _) = run_to_string(FIXTURE, &Config::default()).unwrap();
    assert!(report.contains("\nfilter(1)\n"));
    assert!(report.contains("\nfilter(46, 70)\n"));
    assert!(report.contains("\nfilter_any(46)\n"));

    let all = sections(&report);
    assert_eq!(all.len(), 4);

    assert_eq!(
        all[1],
        ["1.231.69.33", "1.87.203.225", "1.70.44.170", "1.29.168.152", "1.1.234.8"]
    );
    assert_eq!(
        all[2],
        ["46.70.225.39", "46.70.147.26", "46.70.113.73", "46.70.29.76"]
    );
    assert_eq!(
        all[3],
        [
            "186.204.34.46",
            "186.46.222.194",
            "185.46.87.231",
            "185.46.86.132",
            "185.46.86.131",
            "185.46.86.131",
            "185.46.86.22",
            "185.46.85.204",
            "185.46.85.78",
            "68.46.218.208",
            "46.251.197.23",
            "46.223.254.56",
            "46.223.254.56",
            "46.182.19.219",
            "46.161.63.66",
            "46.161.61.51",
            "46.161.60.92",
            "46.161.60.35",
            "46.161.58.202",
            "46.161.56.241",
            "46.161.56.203",
            "46.161.56.174",
            "46.161.56.106",
            "46.161.56.106",
            "46.101.163.119",
            "46.101.127.145",
            "46.70.225.39",
            "46.70.147.26",
            "46.70.113.73",
            "46.70.29.76",
            "46.55.46.98",
            "46.49.43.85",
            "39.46.86.85",
            "5.189.203.46",
        ]
    );
}

#[test]
fn duplicates_are_kept() {
    let (report, _) = run_to_string("1.2.3.4\n5.6.7.8\n1.2.3.4\n", &Config::default()).unwrap();
    assert!(report.starts_with("5.6.7.8\n1.2.3.4\n1.2.3.4\n\nfilter(1)\n"));
}

#[test]
fn unparsable_token_is_skipped_by_default() {
    let input = "12a.1.1.1\t0\n1.1.1.1\t0\n";
    let (report, stats) = run_to_string(input, &Config::default()).unwrap();
    assert_eq!(stats.skipped, 1);
    assert!(report.starts_with("1.1.1.1\n"));
}

#[test]
fn unparsable_token_aborts_in_strict_mode() {
    let cfg = Config {
        policy: TokenPolicy::Abort,
        quiet: 0,
    };
    let input = "1.1.1.1\t0\n1.1.1.2\t0\n12a.1.1.1\t0\n";
    let err = run_to_string(input, &cfg).unwrap_err();
    assert!(matches!(err, PipelineError::Fatal { line_no: 3, .. }));
}

#[test]
fn strict_mode_still_skips_out_of_range() {
    let cfg = Config {
        policy: TokenPolicy::Abort,
        quiet: 0,
    };
    let (report, stats) = run_to_string("1.2.3.256\n1.2.3\n4.3.2.1\n", &cfg).unwrap();
    assert_eq!(stats.skipped, 2);
    assert!(report.starts_with("4.3.2.1\n\n"));
}

#[test]
fn crlf_input() {
    let (report, stats) = run_to_string("46.70.0.1\t1\r\n1.0.0.1\r\n", &Config::default()).unwrap();
    assert_eq!(stats.accepted, 2);
    assert!(report.starts_with("46.70.0.1\n1.0.0.1\n"));
}
