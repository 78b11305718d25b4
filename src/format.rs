//! Output formatter: renders forwarding tables and routed messages in the
//! exact wire format of spec §6. No section headers or separators beyond
//! blank lines are ever emitted.

use std::io::Write;

use crate::engine::RoutingEngine;
use crate::parse::MessageLine;

/// Writes one forwarding-tables section: one block per node, ascending id,
/// blank line after each block.
pub fn write_forwarding_tables(engine: &impl RoutingEngine, out: &mut impl Write) -> std::io::Result<()> {
    for node in engine.nodes() {
        for (dest, next_hop, cost) in engine.forwarding_table(node) {
            writeln!(out, "{dest} {next_hop} {cost}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes one messages section, one routed record per input message line in
/// original order, blank line after each.
pub fn write_messages(
    engine: &impl RoutingEngine,
    messages: &[MessageLine],
    out: &mut impl Write,
) -> std::io::Result<()> {
    for m in messages {
        match &m.text {
            None => {
                writeln!(
                    out,
                    "from {} to {} cost infinite hops unreachable message <message>",
                    m.src, m.dst
                )?;
            }
            Some(text) => {
                let route = m.src.parse().ok().zip(m.dst.parse().ok()).map(|(s, d)| {
                    let path = engine.shortest_path(s, d);
                    let cost = engine.path_cost(&path);
                    (path, cost)
                });
                match route {
                    Some((path, cost)) if !path.is_empty() => {
                        let hops = path[..path.len() - 1]
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(" ");
                        writeln!(
                            out,
                            "from {} to {} cost {} hops {} message {}",
                            m.src, m.dst, cost, hops, text
                        )?;
                    }
                    _ => {
                        writeln!(
                            out,
                            "from {} to {} cost infinite hops unreachable message {}",
                            m.src, m.dst, text
                        )?;
                    }
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
