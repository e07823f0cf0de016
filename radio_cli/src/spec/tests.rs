//! Unit tests for specification registration, validation, and usage.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use rstest::{fixture, rstest};

use super::CliSpecification;
use crate::error::CliError;
use crate::group::{GroupMember, RadioGroup};
use crate::option::CliOption;

#[fixture]
fn transfer() -> CliSpecification {
    CliSpecification::builder("transfer")
        .about("Copy data between stores")
        .version("1.2.3")
        .option(
            CliOption::builder("i")
                .long_name("input")
                .arg_name("file")
                .required(true),
        )
        .option(CliOption::builder("n").arg_name("count"))
        .group(RadioGroup::required([
            CliOption::builder("gzip").flag(true),
            CliOption::builder("zstd").flag(true),
        ]))
        .build()
}

#[rstest]
fn usage_lists_required_then_optional_then_groups(transfer: CliSpecification) {
    assert_eq!(
        transfer.usage(),
        "transfer -i <file> [-n <count>] (-gzip | -zstd)"
    );
}

#[rstest]
fn command_registers_every_option(transfer: CliSpecification) {
    let command = transfer.command().expect("unique options");
    let ids: Vec<_> = command
        .get_arguments()
        .map(|arg| arg.get_id().as_str().to_owned())
        .collect();
    for expected in ["i", "n", "gzip", "zstd"] {
        assert!(ids.iter().any(|id| id == expected), "missing {expected}");
    }
    assert_eq!(command.get_version(), Some("1.2.3"));
}

#[rstest]
fn accepts_one_group_member(transfer: CliSpecification) {
    let ctx = transfer
        .parse_from(["transfer", "-i", "a.csv", "--zstd"])
        .expect("valid command line");
    assert!(ctx.has_option("zstd"));
    assert!(!ctx.has_option("gzip"));
}

#[rstest]
fn rejects_two_group_members(transfer: CliSpecification) {
    let err = transfer
        .parse_from(["transfer", "-i", "a.csv", "--gzip", "--zstd"])
        .expect_err("radio group allows one member");
    assert_eq!(err.to_string(), "only one of -gzip, -zstd may be specified");
}

#[rstest]
fn requires_one_group_member(transfer: CliSpecification) {
    let err = transfer
        .parse_from(["transfer", "-i", "a.csv"])
        .expect_err("required radio group");
    assert_eq!(err.to_string(), "one of -gzip, -zstd is required");
}

#[rstest]
fn parser_enforces_required_options_by_default(transfer: CliSpecification) {
    let err = transfer
        .parse_from(["transfer", "--gzip"])
        .expect_err("missing -i");
    assert!(matches!(err, CliError::Parsing(_)), "got {err:?}");
}

#[rstest]
fn help_is_a_display_request(transfer: CliSpecification) {
    let err = transfer
        .parse_from(["transfer", "--help"])
        .expect_err("help short-circuits parsing");
    assert!(err.is_display_request());
}

#[test]
fn deferred_checks_aggregate_failures() {
    let spec = CliSpecification::builder("deploy")
        .defer_required_checks(true)
        .options([
            CliOption::builder("t").arg_name("target").required(true),
            CliOption::builder("r").arg_name("region").required(true),
        ])
        .group(RadioGroup::required([
            CliOption::builder("a").flag(true),
            CliOption::builder("b").flag(true),
        ]))
        .build();

    let err = spec.parse_from(["deploy"]).expect_err("nothing supplied");
    match err {
        CliError::Aggregate(aggregate) => {
            let messages: Vec<String> = aggregate.iter().map(ToString::to_string).collect();
            assert_eq!(
                messages,
                [
                    "missing required options: -t, -r",
                    "one of -a, -b is required",
                ]
            );
        }
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn deferred_checks_report_single_failure_directly() {
    let spec = CliSpecification::builder("deploy")
        .defer_required_checks(true)
        .option(CliOption::builder("t").arg_name("target").required(true))
        .build();

    let err = spec.parse_from(["deploy"]).expect_err("target missing");
    assert_eq!(
        err.as_validation().map(ToString::to_string).as_deref(),
        Some("missing required options: -t")
    );
}

#[test]
fn nested_groups_count_as_one_member() {
    let spec = CliSpecification::builder("fmt")
        .group(RadioGroup::required([
            RadioGroup::optional([
                CliOption::builder("x").flag(true),
                CliOption::builder("y").flag(true),
            ]),
            RadioGroup::optional([CliOption::builder("z").flag(true)]),
        ]))
        .build();

    assert!(spec.parse_from(["fmt", "-x"]).is_ok());
    assert!(spec.parse_from(["fmt", "-z"]).is_ok());

    let inner = spec
        .parse_from(["fmt", "-x", "-y"])
        .expect_err("inner group is exclusive");
    assert_eq!(inner.to_string(), "only one of -x, -y may be specified");

    let outer = spec
        .parse_from(["fmt", "-x", "-z"])
        .expect_err("outer group is exclusive");
    assert_eq!(
        outer.to_string(),
        "only one of (-x | -y), -z may be specified"
    );

    let none = spec.parse_from(["fmt"]).expect_err("outer group is required");
    assert_eq!(none.to_string(), "one of (-x | -y), -z is required");
}

#[test]
fn setters_fire_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);
    let spec = CliSpecification::builder("order")
        .option(CliOption::builder("a").setter(move |raw| {
            first.borrow_mut().push(format!("a={raw}"));
            Ok::<(), Infallible>(())
        }))
        .group(RadioGroup::optional([CliOption::builder("b")
            .flag(true)
            .setter(move |raw| {
                second.borrow_mut().push(format!("b={raw}"));
                Ok::<(), Infallible>(())
            })]))
        .build();

    spec.parse_from(["order", "-b", "-a", "1"])
        .expect("valid command line");
    assert_eq!(*log.borrow(), ["a=1", "b=true"]);
}

#[test]
fn setter_failure_aborts_the_pass() {
    let later = Rc::new(Cell::new(false));
    let sink = Rc::clone(&later);
    let spec = CliSpecification::builder("limits")
        .option(CliOption::builder("c").set_to_int(|_| {}))
        .option(CliOption::builder("d").setter(move |_| {
            sink.set(true);
            Ok::<(), Infallible>(())
        }))
        .build();

    let err = spec
        .parse_from(["limits", "-c", "lots", "-d", "x"])
        .expect_err("not an int");
    assert!(matches!(err, CliError::Validation(_)), "got {err:?}");
    assert!(!later.get(), "later setters must not run");
}

#[test]
fn validation_runs_before_any_setter() {
    let fired = Rc::new(Cell::new(false));
    let sink = Rc::clone(&fired);
    let spec = CliSpecification::builder("pick")
        .group(RadioGroup::optional([
            CliOption::builder("a").flag(true).setter(move |_| {
                sink.set(true);
                Ok::<(), Infallible>(())
            }),
            CliOption::builder("b").flag(true),
        ]))
        .build();

    assert!(spec.parse_from(["pick", "-a", "-b"]).is_err());
    assert!(!fired.get());
}

#[test]
fn validate_and_fire_can_run_separately() {
    let fired = Rc::new(Cell::new(0));
    let sink = Rc::clone(&fired);
    let spec = CliSpecification::builder("split")
        .option(CliOption::builder("n").set_to_int(move |n| sink.set(n)))
        .build();
    let matches = spec
        .command()
        .expect("unique options")
        .try_get_matches_from(["split", "-n", "5"])
        .expect("valid command line");
    let ctx = crate::CliContext::new(matches);

    spec.validate(&ctx).expect("nothing required");
    assert_eq!(fired.get(), 0);
    spec.fire_consumers(&ctx).expect("valid int");
    assert_eq!(fired.get(), 5);
}

#[rstest]
#[case::short_help("h", None, &["net", "-h", "example.org"])]
#[case::long_help("host", Some("help"), &["net", "--help", "example.org"])]
#[case::short_version("V", None, &["net", "-V", "2"])]
#[case::long_version("level", Some("version"), &["net", "--version", "2"])]
fn options_may_claim_builtin_flags(
    #[case] name: &str,
    #[case] long: Option<&str>,
    #[case] args: &[&str],
) {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let mut option = CliOption::builder(name).arg_name("value").setter(move |raw| {
        sink.replace(Some(raw.to_owned()));
        Ok::<(), Infallible>(())
    });
    if let Some(long) = long {
        option = option.long_name(long);
    }
    let spec = CliSpecification::builder("net")
        .version("0.1.0")
        .option(option)
        .build();

    spec.parse_from(args).expect("option owns the flag");
    assert_eq!(seen.borrow().as_deref(), args.last().copied());
}

#[test]
fn claiming_short_h_keeps_builtin_version() {
    let spec = CliSpecification::builder("net")
        .version("0.1.0")
        .option(CliOption::builder("h").long_name("host").arg_name("host"))
        .build();

    let help = spec
        .parse_from(["net", "--help"])
        .expect_err("--help is no longer defined");
    assert!(!help.is_display_request(), "got {help:?}");
    let version = spec
        .parse_from(["net", "--version"])
        .expect_err("version short-circuits parsing");
    assert!(version.is_display_request());
}

#[rstest]
#[case::top_level_and_group(
    CliSpecification::builder("dup")
        .option(CliOption::builder("a"))
        .group(RadioGroup::optional([CliOption::builder("a"), CliOption::builder("b")]))
        .build(),
    "option a is defined more than once"
)]
#[case::two_groups(
    CliSpecification::builder("dup")
        .group(RadioGroup::optional([CliOption::builder("x").flag(true)]))
        .group(RadioGroup::required([CliOption::builder("x").flag(true)]))
        .build(),
    "option x is defined more than once"
)]
#[case::long_name_taken(
    CliSpecification::builder("dup")
        .option(CliOption::builder("i").long_name("input"))
        .option(CliOption::builder("input"))
        .build(),
    "--input is claimed by both i and input"
)]
#[case::alias_taken(
    CliSpecification::builder("dup")
        .option(CliOption::builder("in").long_name("source"))
        .option(CliOption::builder("s").long_name("in"))
        .build(),
    "--in is claimed by both in and s"
)]
fn duplicate_names_are_rejected(#[case] spec: CliSpecification, #[case] expected: &str) {
    let err = spec
        .parse_from(["dup", "-b"])
        .expect_err("names must be unique");
    assert!(matches!(err, CliError::Validation(_)), "got {err:?}");
    assert_eq!(err.to_string(), expected);
    let refused = spec.command().expect_err("command cannot be built");
    assert_eq!(refused.to_string(), expected);
}

#[test]
fn long_name_matching_the_name_is_not_a_clash() {
    let spec = CliSpecification::builder("same")
        .option(CliOption::builder("input").long_name("input"))
        .build();
    let ctx = spec
        .parse_from(["same", "--input", "a.csv"])
        .expect("one option, one flag");
    assert_eq!(ctx.option_value("input").as_deref(), Some("a.csv"));
}

#[rstest]
#[case::required_top(RadioGroup::required(Vec::<CliOption>::new()))]
#[case::optional_top(RadioGroup::optional(Vec::<CliOption>::new()))]
#[case::nested(RadioGroup::required([
    GroupMember::from(CliOption::builder("a").flag(true)),
    GroupMember::from(RadioGroup::optional(Vec::<CliOption>::new())),
]))]
fn empty_groups_are_rejected(#[case] group: RadioGroup) {
    let spec = CliSpecification::builder("empty").group(group).build();
    let err = spec.parse_from(["empty"]).expect_err("group has no members");
    assert_eq!(
        err.to_string(),
        "radio group must contain at least one option"
    );
}
