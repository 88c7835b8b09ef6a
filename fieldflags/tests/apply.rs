use fieldflags::{ArgFlags, CoerceError, Error, Record, SetError};

#[derive(Record, Debug, Default)]
struct Flags {
    pub verbose: bool,

    pub count: i32,

    #[flag = "names,n"]
    pub names: Vec<String>,

    #[flag = "tags"]
    pub labels: Vec<String>,

    pub ratio: f32,

    pub small: i8,

    pub label: String,

    pub maybe: Option<bool>,
}

fn apply<'a>(args: &'a [&'a str]) -> Result<(Flags, Vec<&'a str>), Error> {
    let mut flags = Flags::default();
    let unused = ArgFlags::new(args).apply_to(&mut flags)?;
    Ok((flags, unused))
}

#[test]
fn bool_explicit_values() {
    let (flags, unused) = apply(&["-verbose", "true"]).unwrap();
    assert!(flags.verbose);
    assert!(unused.is_empty());

    let mut flags = Flags {
        verbose: true,
        ..Flags::default()
    };
    let unused = ArgFlags::new(&["-verbose", "false"])
        .apply_to(&mut flags)
        .unwrap();
    assert!(!flags.verbose);
    assert!(unused.is_empty());
}

#[test]
fn bool_alone_is_true() {
    let (flags, unused) = apply(&["-verbose"]).unwrap();
    assert!(flags.verbose);
    assert!(unused.is_empty());
}

#[test]
fn bool_followed_by_flag() {
    let (flags, unused) = apply(&["-verbose", "-count", "3"]).unwrap();
    assert!(flags.verbose);
    assert_eq!(flags.count, 3);
    assert!(unused.is_empty());
}

#[test]
fn bool_does_not_consume_positional() {
    let (flags, unused) = apply(&["-verbose", "input.txt"]).unwrap();
    assert!(flags.verbose);
    assert_eq!(unused, ["input.txt"]);
}

#[test]
fn optional_bool_acts_as_bool() {
    let (flags, unused) = apply(&["-maybe", "input.txt"]).unwrap();
    assert_eq!(flags.maybe, Some(true));
    assert_eq!(unused, ["input.txt"]);

    let (flags, _) = apply(&["-maybe", "f"]).unwrap();
    assert_eq!(flags.maybe, Some(false));
}

#[test]
fn scalars_are_coerced() {
    let (flags, unused) = apply(&[
        "-count", "42", "-ratio", "0.25", "-label", "hello world", "-small", "100",
    ])
    .unwrap();

    assert_eq!(flags.count, 42);
    assert_eq!(flags.ratio, 0.25);
    assert_eq!(flags.label, "hello world");
    assert_eq!(flags.small, 100);
    assert!(unused.is_empty());
}

#[test]
fn negative_number_reads_as_a_flag() {
    let err = apply(&["-count", "-42"]).unwrap_err();
    assert!(matches!(err, Error::NoValue { ref flag } if flag == "-count"));
}

#[test]
fn missing_value_at_end() {
    let err = apply(&["-count"]).unwrap_err();
    assert!(matches!(err, Error::NoValue { ref flag } if flag == "-count"));
    assert_eq!(err.flag(), Some("-count"));
}

#[test]
fn missing_value_before_flag() {
    let err = apply(&["-label", "-verbose"]).unwrap_err();
    assert!(matches!(err, Error::NoValue { ref flag } if flag == "-label"));
}

#[test]
fn aliases_resolve_to_the_same_field() {
    let (long, _) = apply(&["-names", "x"]).unwrap();
    let (short, _) = apply(&["-n", "x"]).unwrap();
    let (name, _) = apply(&["-NAMES", "x"]).unwrap();

    assert_eq!(long.names, ["x"]);
    assert_eq!(long.names, short.names);
    assert_eq!(long.names, name.names);
}

#[test]
fn collections_keep_order() {
    let (flags, _) = apply(&["-tags", "a,b,c"]).unwrap();
    assert_eq!(flags.labels, ["a", "b", "c"]);
    assert_eq!(flags.labels.len(), 3);
}

#[test]
fn empty_collection_value_is_one_empty_element() {
    let (flags, unused) = apply(&["-tags", ""]).unwrap();
    assert_eq!(flags.labels, [""]);
    assert!(unused.is_empty());
}

#[test]
fn repeated_collection_replaces() {
    let (flags, _) = apply(&["-tags", "a,b", "-tags", "c"]).unwrap();
    assert_eq!(flags.labels, ["c"]);
}

#[test]
fn unmatched_tokens_are_returned_in_order() {
    let (_, unused) = apply(&["pos1", "-unknownflag", "pos2"]).unwrap();
    assert_eq!(unused, ["pos1", "-unknownflag", "pos2"]);
}

#[test]
fn unknown_flag_does_not_take_a_value() {
    let (flags, unused) = apply(&["-unknown", "value", "-count", "2", "tail"]).unwrap();
    assert_eq!(flags.count, 2);
    assert_eq!(unused, ["-unknown", "value", "tail"]);
}

#[test]
fn names_are_case_insensitive() {
    for token in ["-verbose", "-VERBOSE", "-Verbose", "--vErBoSe"] {
        let args = [token];
        let (flags, unused) = apply(&args).unwrap();
        assert!(flags.verbose, "{token}");
        assert!(unused.is_empty(), "{token}");
    }
}

#[test]
fn bare_markers_are_unknown_flags() {
    let (_, unused) = apply(&["-", "--", "x"]).unwrap();
    assert_eq!(unused, ["-", "--", "x"]);
}

#[test]
fn coercion_failure_aborts() {
    let mut flags = Flags::default();
    let err = ArgFlags::new(&["-label", "first", "-count", "abc", "-verbose"])
        .apply_to(&mut flags)
        .unwrap_err();

    match err {
        Error::Set {
            ref flag,
            field,
            source: SetError::Coerce(CoerceError::Int { ref value, .. }),
        } => {
            assert_eq!(flag, "-count");
            assert_eq!(field, "count");
            assert_eq!(value, "abc");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }

    // Earlier flags stay applied, later ones are never reached
    assert_eq!(flags.label, "first");
    assert!(!flags.verbose);
}

#[test]
fn integer_overflow_is_a_coercion_failure() {
    let err = apply(&["-small", "300"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Set {
            source: SetError::Coerce(CoerceError::IntRange { bits: 8, .. }),
            ..
        }
    ));
}

#[test]
fn failed_collection_leaves_field_alone() {
    #[derive(Record, Default)]
    struct Numbers {
        pub values: Vec<i64>,
    }

    let mut numbers = Numbers {
        values: vec![1, 2, 3],
    };

    let err = ArgFlags::new(&["-values", "4,five,6"])
        .apply_to(&mut numbers)
        .unwrap_err();

    assert!(matches!(err, Error::Set { field: "values", .. }));
    assert_eq!(numbers.values, [1, 2, 3]);
}

#[test]
fn owned_arguments() {
    let args: Vec<String> = ["-count", "7", "rest"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut flags = Flags::default();
    let unused = ArgFlags::new(&args).apply_to(&mut flags).unwrap();

    assert_eq!(flags.count, 7);
    assert_eq!(unused, ["rest"]);
}

#[test]
fn std_decodable_types_without_defaults() {
    use std::net::{IpAddr, SocketAddr};
    use std::path::PathBuf;

    #[derive(Record, Default)]
    struct Network {
        pub peers: Vec<SocketAddr>,

        pub bind: Option<IpAddr>,

        #[flag = "log-dir"]
        pub log_dir: Option<PathBuf>,
    }

    let mut network = Network::default();
    let unused = ArgFlags::new(&[
        "-peers",
        "1.2.3.4:5,6.7.8.9:10",
        "-bind",
        "::1",
        "-log-dir",
        "/var/log/app",
    ])
    .apply_to(&mut network)
    .unwrap();

    assert!(unused.is_empty());
    assert_eq!(
        network.peers,
        [
            "1.2.3.4:5".parse::<SocketAddr>().unwrap(),
            "6.7.8.9:10".parse::<SocketAddr>().unwrap(),
        ]
    );
    assert_eq!(network.bind, Some("::1".parse::<IpAddr>().unwrap()));
    assert_eq!(network.log_dir, Some(PathBuf::from("/var/log/app")));
}
