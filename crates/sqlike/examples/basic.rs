//! Basic usage: register a few patterns and resolve some table names.
//!
//! Run with: `cargo run --example basic`

use sqlike::prelude::*;

fn main() -> Result<()> {
    let trie = LikeTrie::with_config(&TrieConfig::from_env()?);

    trie.register("orders_%", "orders");
    trie.register("orders_[%]_tmp", "orders scratch table");
    trie.register("%_archive", "cold storage");
    trie.register("users", "users");

    for table in ["orders_2024", "orders_%_tmp", "events_archive", "users", "sessions"] {
        match trie.find(table) {
            Ok(m) => println!("{table:>16} -> {} ({})", m.payload, m.pattern),
            Err(e) if e.is_not_found() => println!("{table:>16} -> (no pattern)"),
            Err(e) => return Err(e),
        }
    }

    let stats = trie.stats();
    println!(
        "{} patterns, {} nodes, hit rate {:.0}%",
        stats.patterns,
        stats.nodes,
        stats.hit_rate() * 100.0
    );
    Ok(())
}
