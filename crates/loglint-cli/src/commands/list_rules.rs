//! List rules command implementation.

use loglint_rules::{all_rules, CallRule};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nMessage codes carry the per-violation identifiers used for");
    println!("filtering, e.g. method-log emits EmptyLog, NotLiteralString,");
    println!("EmptyString, ConcatString, WhiteSpace, Concat,");
    println!("BackslashSingleQuote and BackslashDoubleQuote.");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  loglint check --rules method-log");
    println!("  loglint check --rules LL001");
}
