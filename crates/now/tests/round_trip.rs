use tempo_now::{Locale, Now, Scope};

const FORMATS: [&str; 12] = [
    "YYYY-MM-DD HH:mm:ss",
    "YYYY-MM-DD",
    "DD.MM.YYYY HH:mm",
    "YYYYMMDDHHmmss",
    "HH:mm:ss",
    "L",
    "LL",
    "LLL",
    "LLLL",
    "ddd, DD MMM YY HH:mm:ss",
    "X",
    "x",
];

fn samples() -> Vec<Now> {
    vec![
        Now::from_ymd_hms(2026, 1, 15, 10, 30, 45),
        Now::from_ymd_hms(2028, 2, 29, 23, 59, 59),
        Now::from_ymd_hms(2000, 12, 31, 0, 0, 0),
        Now::from_ymd_hms(2026, 3, 1, 12, 0, 1),
    ]
}

#[test]
fn format_then_parse_preserves_the_formatted_fields() {
    for v in samples() {
        for f in FORMATS {
            let text = v.format(f);
            let parsed = Now::parse_format(&text, f);
            assert!(parsed.is_valid(), "{text:?} did not parse with {f:?}");
            assert_eq!(parsed.format(f), text, "round trip through {f:?}");
            assert_eq!(parsed.code(f), v.code(f));
        }
    }
}

#[test]
fn four_digit_year_bounds_round_trip() {
    let bounds = [
        Now::from_ymd_hms(0, 1, 1, 0, 0, 0),
        Now::from_ymd_hms(9999, 12, 31, 23, 59, 59),
    ];
    for v in bounds {
        for f in ["YYYY-MM-DD", "YYYY-MM-DD HH:mm:ss", "YYYYMMDDHHmmss", "X"] {
            let text = v.format(f);
            assert_eq!(Now::parse_format(&text, f).format(f), text, "{f:?}");
        }
    }
    assert_eq!(bounds[1].format("YYYY-MM-DD"), "9999-12-31");
    assert!(!Now::parse_format("12026-03-05", "YYYY-MM-DD").is_valid());
}

#[test]
fn formatted_output_is_parsable() {
    for v in samples() {
        for f in FORMATS {
            assert!(Now::is_parsable(&v.format(f), f), "{f:?}");
        }
    }
}

#[test]
fn translated_round_trip() {
    let fr = Locale::new()
        .with_translation("Thursday", "jeudi")
        .with_translation("January", "janvier")
        .with_preset("LL", "dddd DD MMMM YYYY")
        .unwrap();
    let v = Now::from_ymd_hms(2026, 1, 15, 0, 0, 0);
    let text = v.format_with("LL", &fr);
    assert_eq!(text, "jeudi 15 janvier 2026");
    assert_eq!(Now::parse_format_with(&text, "LL", &fr), v);
}

#[test]
fn scope_writes_read_back() {
    let base = Now::from_ymd_hms(2026, 1, 15, 10, 30, 45);
    for scope in [Scope::Second, Scope::Minute, Scope::Hour] {
        for n in [0, 1, 23] {
            let mut v = base;
            v.set(n, scope);
            assert_eq!(v.get(scope), Some(n));
        }
    }
    for (scope, n) in [(Scope::Date, 28), (Scope::Month, 12), (Scope::Year, 1970)] {
        let mut v = base;
        v.set(n, scope);
        assert_eq!(v.get(scope), Some(n));
    }
}

#[test]
fn derivers_do_not_touch_the_receiver() {
    let v = Now::from_ymd_hms(2026, 1, 31, 10, 0, 0);
    let before = v;
    let _ = v.next_month();
    let _ = v.last_decade();
    let _ = v.days_grid();
    let _ = v.range(&v.next_year(), Scope::Month).unwrap();
    let _ = v.format("LLLL");
    assert_eq!(v, before);
}
