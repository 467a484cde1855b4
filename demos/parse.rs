//! An example to split a reference given as a CLI argument.

use iri_ref::parser::{split, ParseMode};

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] IRI

FLAGS:
    -h, --help      Prints this help
    -i, --iri       Handle the input as an IRI (RFC 3987)
    -u, --uri       Handle the input as a URI (RFC 3986)
    -l, --lenient   Skip the per-character legality checks

ARGS:
    <IRI>           IRI or URI
";

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

fn main() {
    let mut iri = None;
    let mut ascii_only = false;
    let mut lenient = false;

    let mut args = std::env::args();
    // Skip `argv[0]`.
    args.next();
    for arg in args {
        match arg.as_str() {
            "--iri" | "-i" => ascii_only = false,
            "--uri" | "-u" => ascii_only = true,
            "--lenient" | "-l" => lenient = true,
            "--help" | "-h" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
            _ => {
                if iri.replace(arg).is_some() {
                    die("IRI can be specified at most once");
                }
            }
        }
    }
    let iri = iri.unwrap_or_else(|| die("IRI should be specified"));

    let mode = match (ascii_only, lenient) {
        (false, false) => ParseMode::IriStrict,
        (false, true) => ParseMode::IriLenient,
        (true, false) => ParseMode::UriStrict,
        (true, true) => ParseMode::UriLenient,
    };

    let reference = match split(&iri, mode) {
        Some(v) => v,
        None => die(format_args!("Failed to parse {:?} under {:?}", iri, mode)),
    };
    println!("Successfully parsed: {:?}", iri);
    println!("scheme:    {:?}", reference.scheme());
    println!("authority: {:?}", reference.authority());
    println!("path:      {:?}", reference.path());
    println!("query:     {:?}", reference.query());
    println!("fragment:  {:?}", reference.fragment());
}
