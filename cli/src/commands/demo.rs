//! The `demo` command - walk through each, map and filter on fixed inputs.
//!
//! Every callback logs what it was handed, then the untouched input and the
//! primitive's return value are printed.

use arrayloop::{each, filter, map};

use crate::common::CliResult;

/// Run the demo command.
pub fn run() -> CliResult<()> {
    demo_each();
    demo_map();
    demo_filter();
    Ok(())
}

#[allow(clippy::let_unit_value)]
fn demo_each() {
    let input = [1, 2, 3, 4];
    let returned = each(&input, |value, index| {
        println!("each callback index: {index} value: {value}");
    });

    println!("{input:?}");
    println!("{returned:?}");
}

fn demo_map() {
    let input = [1, 2, 3];
    let returned = map(&input, |value, index| {
        println!("map callback index: {index} value: {value}");
        value * 2
    });

    println!("{input:?}");
    println!("{returned:?}");
}

fn demo_filter() {
    let input = [1, 2, 3, 4, 5];
    let returned = filter(&input, |value, index| {
        println!("filter callback index: {index} value: {value}");
        value % 2 == 0
    });

    println!("{input:?}");
    println!("{returned:?}");
}
