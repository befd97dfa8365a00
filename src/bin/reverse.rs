//! Builds an [`AvlSet`] from the command line and prints it, largest element first.
//!
//! ```text
//! $ reverse 3 1 4 1 5
//! 5 4 3 1
//! $ RUST_LOG=avl_set=trace reverse --forward 2 1
//! ```

use std::io::{self, Write};

use avl_set::AvlSet;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Print a set of integers in descending order")]
struct Args {
    /// Values to insert. Duplicates are dropped.
    #[arg(default_values_t = [1, 2, 3, 4])]
    values: Vec<i64>,

    /// Print in ascending order instead.
    #[arg(long)]
    forward: bool,

    /// Printed between consecutive values.
    #[arg(long, default_value = " ")]
    separator: String,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let set: AvlSet<i64> = args.values.into_iter().collect();
    log::debug!("built a set of {} values, height {}", set.len(), set.height());

    let mut out = io::stdout().lock();
    let mut first = true;
    let mut print = |value: &i64| -> io::Result<()> {
        if !first {
            write!(out, "{}", args.separator)?;
        }
        first = false;
        write!(out, "{value}")
    };

    if args.forward {
        for value in &set {
            print(value)?;
        }
    } else {
        let mut cursor = set.rbegin();
        while cursor != set.rend() {
            print(cursor.get())?;
            cursor.move_next();
        }
    }
    drop(print);
    writeln!(out)
}
