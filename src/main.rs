// Use the library crate (whose name is defined in Cargo.toml)
use marl::{pr_str, read_str};

// Non-interactive driver: read each argument as one form and echo it back
// in canonical form. With no arguments, runs a small demo input.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        vec!["(def! answer [1 2, 3]) ; a demo form".to_string()]
    } else {
        args
    };

    for input in inputs {
        match read_str(&input) {
            Ok(value) => println!("{}", pr_str(&value)),
            Err(e) => e.pretty_print(&input),
        }
    }
}
