//! An example to resolve a reference against a base from CLI arguments.

use iri_ref::parser::ParseMode;
use iri_ref::resolve::resolve;

const USAGE: &str = "\
USAGE:
    resolve [--] BASE REFERENCE

ARGS:
    <BASE>          Base IRI to resolve against
    <REFERENCE>     IRI reference to resolve
";

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).filter(|a| a != "--").collect();
    let (base, reference) = match args.as_slice() {
        [base, reference] => (base, reference),
        _ => die("expected exactly two arguments"),
    };

    match resolve(reference, base, ParseMode::IriStrict) {
        Some(resolved) => println!("{}", resolved),
        None => die(format_args!("not a valid IRI reference: {:?}", reference)),
    }
}
