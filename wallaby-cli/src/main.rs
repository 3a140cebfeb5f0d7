//! Wallaby CLI
//!
//! Builds a selector from command-line arguments and prints it, optionally
//! with a JSON dump of the structured model.

use anyhow::{Context, Result, anyhow, bail};
use owo_colors::OwoColorize;
use wallaby_selector::{SegmentKind, Selector, SelectorError, SimpleSelector};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: wallaby <kind> <value> [<kind> <value> ...] [--json]");
    eprintln!("       wallaby ... --combine <token> <kind> <value> ... ");
    eprintln!();
    eprintln!("Kinds: element, id, class, attr, pseudo-class, pseudo-element");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  wallaby element div id main class container");
    eprintln!("  wallaby element div id main --combine '+' element span");
    eprintln!("  wallaby element a pseudo-class hover --json");
}

fn run(args: &[String]) -> Result<()> {
    let mut dump_json = false;
    let mut finished: Option<Selector> = None;
    let mut pending_combinator: Option<String> = None;
    let mut current = SimpleSelector::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => dump_json = true,
            "--combine" => {
                if current.is_empty() {
                    bail!("'--combine' must follow at least one segment");
                }
                let token = iter
                    .next()
                    .context("'--combine' requires a combinator token")?;
                finished = Some(close(finished, pending_combinator.take(), current));
                pending_combinator = Some(token.clone());
                current = SimpleSelector::new();
            }
            kind_text => {
                let kind: SegmentKind = kind_text
                    .parse()
                    .map_err(|_| anyhow!("unknown segment kind '{kind_text}'"))?;
                let value = iter
                    .next()
                    .with_context(|| format!("segment kind '{kind}' requires a value"))?;
                current = append(&current, kind, value)?;
            }
        }
    }

    if pending_combinator.is_some() && current.is_empty() {
        bail!("'--combine' must be followed by the right-hand selector");
    }

    let selector = close(finished, pending_combinator.take(), current);
    println!("{selector}");

    if dump_json {
        println!("{}", wallaby_json::encode_pretty(&selector)?);
    }

    Ok(())
}

/// Fold the simple selector being accumulated into the composite built so
/// far, if a combinator is pending.
fn close(finished: Option<Selector>, pending: Option<String>, current: SimpleSelector) -> Selector {
    match (finished, pending) {
        (Some(left), Some(token)) => Selector::combine(left, token, current),
        _ => Selector::from(current),
    }
}

/// Dispatch an append by parsed segment kind.
fn append(
    selector: &SimpleSelector,
    kind: SegmentKind,
    value: &str,
) -> Result<SimpleSelector, SelectorError> {
    match kind {
        SegmentKind::Element => selector.element(value),
        SegmentKind::Id => selector.id(value),
        SegmentKind::Class => selector.class(value),
        SegmentKind::Attribute => selector.attr(value),
        SegmentKind::PseudoClass => selector.pseudo_class(value),
        SegmentKind::PseudoElement => selector.pseudo_element(value),
    }
}
