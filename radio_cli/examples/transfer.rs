//! Example CLI declaring its options with `radio_cli`.
//!
//! ```text
//! cargo run -p radio_cli --example transfer -- -i data.csv --gzip -n 4
//! ```

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

use camino::{Utf8Path, Utf8PathBuf};
use radio_cli::{CliError, CliOption, CliSpecification, GroupMember, RadioGroup};

#[derive(Debug, Default)]
struct Transfer {
    input: RefCell<Option<Utf8PathBuf>>,
    workers: Cell<i32>,
    codec: RefCell<&'static str>,
}

fn specification(state: &Rc<Transfer>) -> CliSpecification {
    let input = Rc::clone(state);
    let workers = Rc::clone(state);
    let gzip = Rc::clone(state);
    let zstd = Rc::clone(state);
    let plain = Rc::clone(state);
    CliSpecification::builder("transfer")
        .about("Copy a data file with optional compression")
        .version(env!("CARGO_PKG_VERSION"))
        .option(
            CliOption::builder("i")
                .long_name("input")
                .arg_name("file")
                .description("file to copy")
                .required(true)
                .set_to_file(move |path| {
                    *input.input.borrow_mut() = Some(path);
                }),
        )
        .option(
            CliOption::builder("n")
                .long_name("workers")
                .arg_name("count")
                .description("number of copy workers (1-64)")
                .validated_setter(
                    str::parse::<i32>,
                    |count: &i32| (1..=64).contains(count),
                    move |count| {
                        workers.workers.set(count);
                        Ok::<(), std::convert::Infallible>(())
                    },
                ),
        )
        .group(RadioGroup::optional([
            GroupMember::from(codec_flag("gzip", "compress with gzip", gzip)),
            GroupMember::from(codec_flag("zstd", "compress with zstd", zstd)),
            GroupMember::from(codec_flag("plain", "copy without compression", plain)),
        ]))
        .build()
}

fn codec_flag(name: &'static str, description: &str, state: Rc<Transfer>) -> CliOption {
    CliOption::builder(name)
        .flag(true)
        .description(description)
        .setter(move |_| {
            *state.codec.borrow_mut() = name;
            Ok::<(), std::convert::Infallible>(())
        })
        .build()
}

fn run<I, T>(args: I, out: &mut impl Write) -> color_eyre::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let state = Rc::new(Transfer {
        workers: Cell::new(1),
        codec: RefCell::new("plain"),
        ..Transfer::default()
    });
    let spec = specification(&state);
    match spec.parse_from(args) {
        Ok(_) => {}
        Err(CliError::Parsing(err)) if radio_cli::is_display_request(&err) => err.exit(),
        Err(err) => {
            writeln!(out, "usage: {}", spec.usage())?;
            return Err(err.into());
        }
    }
    let input = state.input.borrow();
    let source = input.as_deref().map_or("-", Utf8Path::as_str);
    writeln!(
        out,
        "copying {source} with {} worker(s) using {}",
        state.workers.get(),
        state.codec.borrow()
    )?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(std::env::args_os(), &mut handle)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn reports_the_chosen_codec() {
        let mut out = Vec::new();
        run(["transfer", "-i", "in.csv", "--zstd", "-n", "8"], &mut out).expect("valid args");
        let text = String::from_utf8(out).expect("utf8 output");
        assert_eq!(text, "copying in.csv with 8 worker(s) using zstd\n");
    }

    #[test]
    fn prints_usage_on_failure() {
        let mut out = Vec::new();
        let result = run(["transfer", "-i", "in.csv", "--gzip", "--zstd"], &mut out);
        assert!(result.is_err());
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.starts_with("usage: transfer -i <file> [-n <count>]"), "{text}");
    }
}
